//! Error types for Glasstube core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Glasstube core operations.
///
/// Only failures that reach the user are typed here. Adapter-not-ready and
/// unrecognized widget status codes are guarded no-ops by contract and never
/// become errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The entered text is not a link to a supported video host.
    #[error("Please paste a valid YouTube URL.")]
    UnsupportedUrl {
        /// The rejected input, kept for diagnostics.
        url: String,
    },

    /// The download action is a permanently disabled stub.
    #[error("Download feature is disabled.")]
    DownloadDisabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_url_display() {
        let err = Error::UnsupportedUrl {
            url: "not a url".to_string(),
        };
        assert_eq!(err.to_string(), "Please paste a valid YouTube URL.");
    }

    #[test]
    fn test_download_disabled_display() {
        assert_eq!(
            Error::DownloadDisabled.to_string(),
            "Download feature is disabled."
        );
    }
}
