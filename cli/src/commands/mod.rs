//! CLI command implementations

pub mod interactive;
pub mod run;

pub use interactive::interactive_command;
pub use run::run_command;
