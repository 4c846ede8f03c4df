use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// A source file is missing, malformed, or does not match the expected shape.
/// Never recovered from: loading stops at the first failure.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}, column {col}: '{token}' is not a number")]
    NotANumber {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("point table must have exactly 3 rows (x, y, z), found {found}")]
    PointRows { found: usize },

    #[error("point table has {points} points but label table has {labels} labels")]
    LabelCount { points: usize, labels: usize },

    #[error("training log is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("unsupported training log extension: .{0}")]
    UnsupportedExtension(String),
}

/// Failure inside the windowing / rendering backend. Propagated unhandled.
#[derive(Debug, Error)]
#[error("render backend error: {0}")]
pub struct RenderBackendError(#[from] pub eframe::Error);
