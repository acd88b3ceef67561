use std::path::PathBuf;

/// Errors reported by the conversion pipeline and its I/O helpers.
///
/// A disconnected proximity graph during MST construction is not an error;
/// see [`SpanningTree`](crate::mst::SpanningTree).
#[derive(Debug, thiserror::Error)]
pub enum LowPolyError {
    #[error("failed to load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no input image buffer available")]
    EmptyImage,

    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("unrecognized mode: {0:?}")]
    UnknownMode(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("triangulation failed: {0}")]
    Triangulation(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LowPolyError>;
