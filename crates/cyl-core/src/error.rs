use thiserror::Error;

/// Failures that stop a carousel instance from being built.
///
/// All of these are terminal for the instance: they are detected once, at
/// construction or when the image join completes, and are never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    /// No images, a non-positive dimension, malformed markup or a bad option.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An individual image could not be fetched or decoded.
    #[error("image {index} ({url}) failed to load: {reason}")]
    AssetLoadFailure {
        index: usize,
        url: String,
        reason: String,
    },

    /// The image join did not complete within the configured budget.
    #[error("{pending} image(s) still loading after {timeout_ms}ms")]
    AssetLoadTimeout { pending: usize, timeout_ms: u32 },
}

impl CarouselError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
