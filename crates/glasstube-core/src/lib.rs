//! `Glasstube` Core Library
//!
//! This crate provides the core functionality for the `Glasstube` application:
//! - `YouTube` URL normalization and video reference extraction
//! - The playback state mirror that backs the custom player chrome
//! - The embedded-player adapter contract and its event mapping
//! - The embed widget option set
//!
//! Everything in this crate is platform-independent: it compiles natively
//! (where the test suite runs) and to `wasm32-unknown-unknown` as a
//! dependency of the UI crate. All actual decoding and playback is delegated
//! to the embedded third-party widget; this crate only decides which commands
//! to forward and how to mirror the widget's reported state.
//!
//! # Error Handling
//!
//! User-surfaced failures are typed in the [`error`] module. Everything else
//! (adapter not ready, unrecognized widget status codes) is a guarded no-op
//! by contract, not an error.

pub mod error;
pub mod playback;
pub mod player;
pub mod url;

pub use error::{Error, Result};
pub use playback::{POLL_INTERVAL_MS, PlaybackMirror, PlaybackState, format_timestamp};
pub use player::{EmbedOptions, EmbedParams, PlayerAdapter, PlayerEvent};
pub use url::{UrlKind, VideoId, check_supported, detect_url_kind, is_supported_source, normalize_watch_url};
