//! The embedded-player adapter contract.
//!
//! The actual playback widget is a third-party embed living outside this
//! codebase. This module pins down the narrow surface we rely on: the
//! imperative command set ([`PlayerAdapter`]), the two state-change
//! transitions we recognize ([`PlayerEvent`]), and the option set the widget
//! is configured with ([`EmbedOptions`]).

use serde::{Deserialize, Serialize};

/// Imperative command surface of the embedded playback widget.
///
/// Volume is normalized to `0.0..=1.0` at this boundary; implementations
/// translate to whatever scale the widget uses natively.
#[cfg_attr(test, mockall::automock)]
pub trait PlayerAdapter {
    /// Start or resume playback.
    fn play(&self);

    /// Pause playback.
    fn pause(&self);

    /// Set the playback volume, `0.0..=1.0`.
    fn set_volume(&self, volume: f64);

    /// Seek to an absolute position in seconds.
    ///
    /// `allow_seek_ahead` permits seeking into not-yet-buffered regions.
    fn seek_to(&self, seconds: f64, allow_seek_ahead: bool);

    /// Total duration in seconds as reported by the widget (0 when unknown).
    fn duration(&self) -> f64;

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
}

/// State-change transitions recognized from the widget.
///
/// The widget reports a numeric status code; only two codes are tracked and
/// every other code is ignored by contract, not by omission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The widget started or resumed playback (status code 1).
    Playing,
    /// The widget paused playback (status code 2).
    Paused,
}

impl PlayerEvent {
    /// Map a widget status code onto a recognized transition.
    #[must_use]
    pub const fn from_status_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            _ => None,
        }
    }
}

/// Construction options for the embedded widget.
///
/// Serialized as-is into the widget's constructor options object; the UI
/// attaches the video reference and event callbacks separately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Widget width, a CSS size.
    pub width: String,
    /// Widget height, a CSS size.
    pub height: String,
    /// The embed parameter set.
    #[serde(rename = "playerVars")]
    pub player_vars: EmbedParams,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "100%".to_string(),
            player_vars: EmbedParams::default(),
        }
    }
}

/// The embed widget's parameter set.
///
/// The only configuration this system carries: autoplay off, native controls
/// hidden, related-video suggestions suppressed, branding minimized, and the
/// native fullscreen button hidden (the chrome provides its own).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbedParams {
    /// Autoplay on load (0 = disabled).
    pub autoplay: u8,
    /// Native control bar (0 = hidden).
    pub controls: u8,
    /// Related-video suggestions (0 = suppressed).
    pub rel: u8,
    /// Minimized branding (1 = enabled).
    pub modestbranding: u8,
    /// Native fullscreen button (0 = hidden).
    pub fs: u8,
}

impl Default for EmbedParams {
    fn default() -> Self {
        Self {
            autoplay: 0,
            controls: 0,
            rel: 0,
            modestbranding: 1,
            fs: 0,
        }
    }
}
