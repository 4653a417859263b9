/// Convenience result type used across brandpress.
pub type BrandpressResult<T> = Result<T, BrandpressError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Geometry and colour inputs are clamped rather than rejected, so these variants only cover
/// programming errors (mismatched buffers, misuse of a finalized document), configuration
/// problems and artifact persistence.
#[derive(thiserror::Error, Debug)]
pub enum BrandpressError {
    /// Invalid caller-provided data (buffer sizes, configuration values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Page flow or layout state misuse.
    #[error("layout error: {0}")]
    Layout(String),

    /// A finished artifact could not be persisted. Fatal for a run.
    #[error("output error: {0}")]
    Output(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrandpressError {
    /// Build a [`BrandpressError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrandpressError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`BrandpressError::Output`] value.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// Build a [`BrandpressError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors that must abort a whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Output(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
