//! `YouTube` URL handling.
//!
//! Converts the shorthand link shapes users paste (short links, embed paths)
//! into the canonical watch-link shape the embed widget expects, and extracts
//! the opaque 11-character video reference from any recognized shape.
//!
//! Normalization never fails: unrecognized input passes through unchanged and
//! reference extraction fails closed with `None`, which leaves the player in
//! its idle phase.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// Host substrings accepted by the page-level input gate.
const SUPPORTED_HOSTS: [&str; 3] = ["youtube.com", "youtu.be", "vimeo.com"];

/// Matches the id segment of every recognized `YouTube` link shape.
///
/// The leading greedy `.*` makes the last recognized marker win, so a watch
/// URL with extra query parameters still yields the `v=` value.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // the pattern is a compile-time constant
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*$").unwrap()
});

/// Type of `YouTube` URL detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlKind {
    /// Short URL (`youtu.be/<id>`).
    Short,
    /// Embed path URL (`youtube.com/embed/<id>`).
    Embed,
    /// Canonical watch URL (`youtube.com/watch?v=<id>`).
    Watch,
    /// Anything else, passed through unchanged.
    #[default]
    Other,
}

/// Detect the type of `YouTube` URL.
#[must_use]
pub fn detect_url_kind(url: &str) -> UrlKind {
    let url_lower = url.to_lowercase();

    if url_lower.contains("youtu.be/") {
        UrlKind::Short
    } else if url_lower.contains("youtube.com/embed/") {
        UrlKind::Embed
    } else if url_lower.contains("youtube.com/watch?v=") {
        UrlKind::Watch
    } else {
        UrlKind::Other
    }
}

/// Normalize a user-supplied link into the canonical watch-link shape.
///
/// Short links and embed paths are rewritten to
/// `https://www.youtube.com/watch?v=<id>`. Watch links and unrecognized
/// input are returned unchanged; malformed input degrades to pass-through
/// rather than raising an error.
#[must_use]
pub fn normalize_watch_url(url: &str) -> String {
    match detect_url_kind(url) {
        UrlKind::Short => rewrite_after(url, "youtu.be/"),
        UrlKind::Embed => rewrite_after(url, "embed/"),
        UrlKind::Watch | UrlKind::Other => url.to_string(),
    }
}

/// Rewrite the id that follows `marker` into a canonical watch URL.
fn rewrite_after(url: &str, marker: &str) -> String {
    let url_lower = url.to_lowercase();
    if let Some(pos) = url_lower.find(marker) {
        let rest = &url[pos + marker.len()..];
        let end = rest.find(['?', '&', '#', '/']).unwrap_or(rest.len());
        let id = &rest[..end];
        if !id.is_empty() {
            return format!("https://www.youtube.com/watch?v={id}");
        }
    }
    url.to_string()
}

/// Whether the string mentions one of the recognized video hosts.
#[must_use]
pub fn is_supported_source(url: &str) -> bool {
    SUPPORTED_HOSTS.iter().any(|host| url.contains(host))
}

/// Gate a user-supplied link before loading the player.
///
/// # Errors
///
/// Returns [`Error::UnsupportedUrl`] when the input names none of the
/// recognized hosts; the caller surfaces this as a blocking alert and leaves
/// all state untouched.
pub fn check_supported(url: &str) -> Result<()> {
    if !url.trim().is_empty() && is_supported_source(url) {
        Ok(())
    } else {
        Err(Error::UnsupportedUrl {
            url: url.to_string(),
        })
    }
}

/// The opaque 11-character video identifier extracted from a watch URL.
///
/// A derived value: the UI recomputes it whenever the entered URL changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// Exact length of a valid video identifier.
    pub const LEN: usize = 11;

    /// Extract the video reference from a link, failing closed.
    ///
    /// Accepts every shape [`normalize_watch_url`] recognizes plus the
    /// canonical watch form itself; anything that does not carry an
    /// exactly-[`Self::LEN`]-character id yields `None`.
    #[must_use]
    pub fn extract(url: &str) -> Option<Self> {
        let id = VIDEO_ID_RE
            .captures(url)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())?;

        if id.len() == Self::LEN {
            Some(Self(id.to_string()))
        } else {
            debug!(url, id, "rejected video reference of wrong length");
            None
        }
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_short_url() {
        assert_eq!(
            detect_url_kind("https://youtu.be/abc12345678"),
            UrlKind::Short
        );
    }

    #[test]
    fn test_detect_embed_url() {
        assert_eq!(
            detect_url_kind("https://www.youtube.com/embed/abc12345678"),
            UrlKind::Embed
        );
    }

    #[test]
    fn test_detect_watch_url() {
        assert_eq!(
            detect_url_kind("https://www.youtube.com/watch?v=abc12345678"),
            UrlKind::Watch
        );
    }

    #[test]
    fn test_detect_other() {
        assert_eq!(detect_url_kind("https://example.com/video"), UrlKind::Other);
    }

    #[test]
    fn test_normalize_short_url() {
        assert_eq!(
            normalize_watch_url("https://youtu.be/abc12345678"),
            "https://www.youtube.com/watch?v=abc12345678"
        );
    }

    #[test]
    fn test_normalize_short_url_with_query() {
        assert_eq!(
            normalize_watch_url("https://youtu.be/abc12345678?t=42"),
            "https://www.youtube.com/watch?v=abc12345678"
        );
    }

    #[test]
    fn test_normalize_embed_url() {
        assert_eq!(
            normalize_watch_url("https://www.youtube.com/embed/abc12345678"),
            "https://www.youtube.com/watch?v=abc12345678"
        );
    }

    #[test]
    fn test_normalize_watch_url_unchanged() {
        let url = "https://www.youtube.com/watch?v=abc12345678";
        assert_eq!(normalize_watch_url(url), url);
    }

    #[test]
    fn test_normalize_passes_through_unrecognized() {
        assert_eq!(normalize_watch_url("not a url"), "not a url");
        assert_eq!(
            normalize_watch_url("https://vimeo.com/123456"),
            "https://vimeo.com/123456"
        );
    }

    #[test]
    fn test_extract_from_watch_url() {
        let id = VideoId::extract("https://www.youtube.com/watch?v=abc12345678");
        assert_eq!(id.map(|v| v.to_string()), Some("abc12345678".to_string()));
    }

    #[test]
    fn test_extract_from_short_url() {
        let id = VideoId::extract("https://youtu.be/abc12345678");
        assert_eq!(id.map(|v| v.to_string()), Some("abc12345678".to_string()));
    }

    #[test]
    fn test_extract_from_embed_url() {
        let id = VideoId::extract("https://www.youtube.com/embed/abc12345678");
        assert_eq!(id.map(|v| v.to_string()), Some("abc12345678".to_string()));
    }

    #[test]
    fn test_extract_ignores_trailing_params() {
        let id = VideoId::extract("https://www.youtube.com/watch?v=abc12345678&list=PLx#frag");
        assert_eq!(
            id.map(|v| v.as_str().to_string()),
            Some("abc12345678".to_string())
        );
    }

    #[test]
    fn test_extract_rejects_wrong_length() {
        assert!(VideoId::extract("https://youtu.be/short").is_none());
        assert!(VideoId::extract("https://www.youtube.com/watch?v=waytoolongid42").is_none());
    }

    #[test]
    fn test_extract_fails_closed() {
        assert!(VideoId::extract("not a url").is_none());
        assert!(VideoId::extract("").is_none());
        assert!(VideoId::extract("https://vimeo.com/123456").is_none());
    }

    #[test]
    fn test_supported_hosts() {
        assert!(is_supported_source("https://www.youtube.com/watch?v=x"));
        assert!(is_supported_source("https://youtu.be/x"));
        assert!(is_supported_source("https://vimeo.com/123"));
        assert!(!is_supported_source("https://example.com/video"));
    }

    #[test]
    fn test_check_supported_rejects_junk() {
        assert!(check_supported("not a url").is_err());
        assert!(check_supported("").is_err());
        assert!(check_supported("   ").is_err());
        assert!(check_supported("https://youtu.be/abc12345678").is_ok());
    }
}
