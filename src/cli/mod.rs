//! CLI commands
//!
//! Command implementations for the `predict` binary.

mod interactive;
mod options;
mod progress;
mod style;
mod submit;

pub use interactive::run_interactive;
pub use options::run_options;
pub use submit::run_submit;
