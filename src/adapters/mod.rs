//! Adapters - drivers and reporters built on the core

pub mod dataset;
pub mod bench;
pub mod verify;
pub mod console;
pub mod json;

#[cfg(feature = "python")]
pub mod python;

pub use console::ConsoleReport;
pub use json::JsonReport;
