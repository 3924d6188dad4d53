pub mod builders;
pub mod recorders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::sample_program;
#[allow(unused_imports)]
pub use recorders::{CallLog, RecordedCall};
