//! Error types for dominant-color analysis

use thiserror::Error;

/// Result type alias for sprite_palette operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error taxonomy for image analysis and folder aggregation
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be opened or decoded
    #[error("failed to read image: {message}")]
    ImageRead {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Sampling or clustering failed for an otherwise readable image
    #[error("processing failed: {message}")]
    Processing { message: String },

    /// User-supplied folder path or parameter is unusable
    #[error("invalid input: {message}")]
    InputFormat { message: String },
}

impl AnalysisError {
    /// Create an image read error with context
    pub fn image_read<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageRead {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing {
            message: message.into(),
        }
    }

    /// Create an input format error
    pub fn input_format(message: impl Into<String>) -> Self {
        Self::InputFormat {
            message: message.into(),
        }
    }

    /// Check whether this error must abort a whole run.
    ///
    /// Non-fatal errors are scoped to a single image; batch callers log them
    /// and skip the offending file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AnalysisError::InputFormat { .. })
    }
}
