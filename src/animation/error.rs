use thiserror::Error;

/// Animation-related errors
#[derive(Error, Debug)]
pub enum AnimationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch animation library: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Invalid animation bundle: {0}")]
    Bundle(#[from] serde_json::Error),

    #[error("Invalid library source '{location}': {reason}")]
    InvalidSource { location: String, reason: String },

    #[error("Animation library unavailable: {0}")]
    Unavailable(String),

    #[error("Animation asset not found: {0}")]
    AssetNotFound(String),

    #[error("Malformed animation asset '{asset}': {reason}")]
    MalformedAsset { asset: String, reason: String },
}

impl AnimationError {
    pub fn malformed(asset: &str, reason: impl Into<String>) -> Self {
        Self::MalformedAsset {
            asset: asset.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AnimationResult<T> = Result<T, AnimationError>;
