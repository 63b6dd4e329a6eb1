//! Interactive console mode

pub mod console;

pub use console::{ConsoleUi, FailurePolicy};
