use clap::Parser;
use safe_emitter::cli::{self, Cli};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safe_emitter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();
    let result = cli::run(&args, &mut std::io::stdout().lock());

    if let Err(e) = &result {
        error!(error = %e, "Lint failed");
        eprintln!("{e}");
    }
    ExitCode::from(cli::exit_status(&result))
}
