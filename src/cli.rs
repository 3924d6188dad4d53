use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::ast::Node;
use crate::config::{LintConfig, Severity};
use crate::linter::Linter;
use crate::shared::AppError;

/// Exit status when at least one `error`-severity report was produced
pub const EXIT_LINT_ERRORS: u8 = 1;
/// Exit status when the lint could not run at all
pub const EXIT_FAILURE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "safe-emitter")]
#[command(about = "Lint a JSON syntax tree with the built-in rules")]
#[command(version)]
pub struct Cli {
    /// JSON syntax tree to lint
    pub ast: PathBuf,

    /// JSON rule config (all built-in rules at `error` when omitted)
    pub config: Option<PathBuf>,

    /// Print reports as a JSON array instead of one line each
    #[arg(long)]
    pub json: bool,
}

fn read_file(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|e| AppError::io(path.display().to_string(), e))
}

/// Lint the tree named by `cli`, writing reports to `out`
///
/// Returns whether any `error`-severity report was produced.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<bool, AppError> {
    let root = Node::from_json(&read_file(&cli.ast)?)?;
    let config = match &cli.config {
        Some(path) => LintConfig::from_json(&read_file(path)?)?,
        None => LintConfig::all_builtin(),
    };

    let reports = Linter::new(config).lint(&root)?;

    let written = if cli.json {
        let output = serde_json::to_string_pretty(&reports)?;
        writeln!(out, "{output}")
    } else {
        reports
            .iter()
            .try_for_each(|report| writeln!(out, "{report}"))
    };
    written.map_err(|e| AppError::io("<output>", e))?;

    let has_errors = reports.iter().any(|r| r.severity == Severity::Error);
    if has_errors {
        info!(report_count = reports.len(), "Lint reported errors");
    }
    Ok(has_errors)
}

/// Process exit status for the outcome of [`run`]
pub fn exit_status(result: &Result<bool, AppError>) -> u8 {
    match result {
        Ok(false) => 0,
        Ok(true) => EXIT_LINT_ERRORS,
        Err(_) => EXIT_FAILURE,
    }
}
