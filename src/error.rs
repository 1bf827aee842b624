//! Error types for the document assembly library.
//!
//! This module defines all error types that can occur while assembling,
//! splitting, and persisting page-oriented documents.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document assembly and splitting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Insert position referenced page number 0 (page numbers are 1-based)
    #[error("Invalid insert position: page numbers start at 1")]
    InvalidInsertPosition,

    /// Size budget was zero or negative
    #[error("Invalid size budget: must be a positive number of bytes")]
    InvalidSizeBudget,

    /// Codec failure, propagated unchanged from the codec boundary
    #[error(transparent)]
    Codec(#[from] crate::codec::CodecError),

    /// Raster conversion failure, propagated unchanged from the raster boundary
    #[error(transparent)]
    Raster(#[from] crate::raster::RasterError),

    /// No stored document with the given identifier
    #[error("Unknown document: {0}")]
    UnknownDocument(crate::store::DocumentId),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;

    #[test]
    fn test_invalid_insert_position_message() {
        let err = Error::InvalidInsertPosition;
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid insert position"));
    }

    #[test]
    fn test_invalid_size_budget_message() {
        let err = Error::InvalidSizeBudget;
        let msg = format!("{}", err);
        assert!(msg.contains("positive"));
    }

    #[test]
    fn test_codec_error_passes_through_unchanged() {
        let codec_err = CodecError::Malformed("bad header".to_string());
        let inner_msg = format!("{}", codec_err);
        let err = Error::from(codec_err);
        assert_eq!(format!("{}", err), inner_msg);
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
