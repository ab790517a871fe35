/// Convenience alias for results carrying [`CredenceError`].
pub type CredenceResult<T> = Result<T, CredenceError>;

/// Error type for all fallible credence operations.
#[derive(thiserror::Error, Debug)]
pub enum CredenceError {
    /// Input violated the documented domain (probabilities, extents, keys).
    #[error("validation error: {0}")]
    Validation(String),

    /// A track or tween was structurally unusable.
    #[error("animation error: {0}")]
    Animation(String),

    /// A track script failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all for wrapped external errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CredenceError {
    /// Build a [`CredenceError::Validation`] from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CredenceError::Animation`] from any message.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`CredenceError::Serde`] from any message.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
