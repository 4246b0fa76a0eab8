pub mod bench;
pub mod chart;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod report;
pub mod stats;

pub use error::{ReportError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
