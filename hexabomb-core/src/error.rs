//! Error types shared by the snapshot parser, the map converter and the
//! client session driver.

/// Errors raised while building game models or converting maps
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A snapshot record is missing a required field or has a mistyped one
    #[error("malformed snapshot: {reason}")]
    MalformedSnapshot { reason: String },

    /// Tiled documents must hold exactly one layer
    #[error("unsupported layer count: expected exactly 1 layer, found {0}")]
    UnsupportedLayerCount(usize),

    /// Layer data length does not match the declared grid dimensions
    #[error("dimension mismatch: layer has {len} tiles, {width}x{height} grid expected")]
    DimensionMismatch { width: usize, height: usize, len: usize },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure reported by the game client collaborator
    #[error("client failure: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn malformed(reason: impl std::fmt::Display) -> Self {
        Error::MalformedSnapshot {
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
