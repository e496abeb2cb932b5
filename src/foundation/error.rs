/// Convenience result type used across scrollcue.
pub type ScrollcueResult<T> = Result<T, ScrollcueError>;

/// Top-level error taxonomy used by engine and glue APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrollcueError {
    /// Malformed scene data: bad ranges, negative widths, duplicate ids.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Errors while sampling curves or effects for a progress value.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Unresolvable media reference (video URL, image asset).
    #[error("media error: {0}")]
    Media(String),

    /// Content store or CRM unreachable, or a non-success response.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollcueError {
    /// Build a [`ScrollcueError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`ScrollcueError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ScrollcueError::Media`] value.
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Build a [`ScrollcueError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`ScrollcueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
