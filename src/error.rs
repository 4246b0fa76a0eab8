use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV is missing columns: {}\nFound: {}", .missing.join(", "), .found.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    #[error("Failed to render chart {path}: {message}")]
    Render { path: PathBuf, message: String },

    #[error("Max-flow mismatch on {graph}: Edmonds-Karp found {edmonds_karp}, Dinic found {dinic}")]
    FlowMismatch {
        graph: String,
        edmonds_karp: i64,
        dinic: i64,
    },

    #[error("Invalid benchmark parameters: {0}")]
    InvalidParameters(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Short category name, printed as the prefix of the error message.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MissingColumns { .. } | Self::InvalidRecord { .. } | Self::Csv(_) => "Input",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::Render { .. } => "Render",
            Self::FlowMismatch { .. } => "Benchmark",
            Self::InvalidParameters(_) => "Parameters",
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingColumns { .. }
            | Self::InvalidRecord { .. }
            | Self::Csv(_)
            | Self::InvalidParameters(_) => crate::EXIT_INPUT_ERROR,
            _ => crate::EXIT_RUNTIME_ERROR,
        }
    }

    pub(crate) fn render(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Render {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
