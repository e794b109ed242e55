//! `Glasstube` UI - Leptos-based user interface.
//!
//! A single-page player shell: paste a YouTube link, watch it inside a
//! glass-styled custom chrome layered over the embedded third-party widget.
//! All playback is delegated to the widget; this crate only forwards
//! commands and mirrors reported state into decorative UI.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Cast wrapping is acceptable for display purposes
#![allow(clippy::cast_possible_wrap)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod components;
pub mod player_api;
pub mod theme;

pub use app::App;
