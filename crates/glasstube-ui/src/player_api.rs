//! YouTube IFrame API bindings for WASM.
//!
//! This module provides the thin façade over the third-party embed widget:
//! extern bindings to the `YT.Player` global, an availability probe, a
//! one-shot readiness hook, and the [`PlayerAdapter`] implementation the
//! playback mirror drives.

use glasstube_core::{EmbedOptions, PlayerAdapter, VideoId};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Handle to an embedded `YT.Player` instance.
    #[wasm_bindgen(js_namespace = YT, js_name = Player)]
    pub type YtPlayer;

    #[wasm_bindgen(constructor, js_namespace = YT, js_class = "Player")]
    fn new(element_id: &str, options: &JsValue) -> YtPlayer;

    #[wasm_bindgen(method, js_name = playVideo)]
    fn play_video(this: &YtPlayer);

    #[wasm_bindgen(method, js_name = pauseVideo)]
    fn pause_video(this: &YtPlayer);

    /// Widget-native volume, 0-100.
    #[wasm_bindgen(method, js_name = setVolume)]
    fn set_volume_percent(this: &YtPlayer, volume: f64);

    #[wasm_bindgen(method, js_name = seekTo)]
    fn seek(this: &YtPlayer, seconds: f64, allow_seek_ahead: bool);

    #[wasm_bindgen(method, js_name = getDuration)]
    fn get_duration(this: &YtPlayer) -> f64;

    #[wasm_bindgen(method, js_name = getCurrentTime)]
    fn get_current_time(this: &YtPlayer) -> f64;

    /// Tear the iframe down and restore the mount element.
    #[wasm_bindgen(method)]
    pub fn destroy(this: &YtPlayer);
}

impl PlayerAdapter for YtPlayer {
    fn play(&self) {
        self.play_video();
    }

    fn pause(&self) {
        self.pause_video();
    }

    fn set_volume(&self, volume: f64) {
        // The contract is normalized 0..1; the widget wants 0-100.
        self.set_volume_percent(volume * 100.0);
    }

    fn seek_to(&self, seconds: f64, allow_seek_ahead: bool) {
        self.seek(seconds, allow_seek_ahead);
    }

    fn duration(&self) -> f64 {
        self.get_duration()
    }

    fn current_time(&self) -> f64 {
        self.get_current_time()
    }
}

/// Check whether the IFrame API script has finished loading.
pub fn is_player_api_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(yt) = js_sys::Reflect::get(&window, &JsValue::from_str("YT")) else {
        return false;
    };
    if yt.is_undefined() {
        return false;
    }
    js_sys::Reflect::get(&yt, &JsValue::from_str("Player"))
        .map(|player| !player.is_undefined())
        .unwrap_or(false)
}

/// Run `callback` once the IFrame API is usable.
///
/// Resolved at most once: either immediately, or through the
/// `onYouTubeIframeAPIReady` hook the API script calls when it finishes
/// loading.
pub fn on_player_api_ready(callback: impl FnOnce() + 'static) {
    if is_player_api_available() {
        callback();
        return;
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(callback);
    if js_sys::Reflect::set(
        &window,
        &JsValue::from_str("onYouTubeIframeAPIReady"),
        closure.as_ref(),
    )
    .is_err()
    {
        leptos::logging::error!("Failed to install the player API ready hook");
    }
    // The hook fires at most once for the page lifetime.
    closure.forget();
}

/// Construct the embedded widget over the element with `element_id`.
///
/// `on_ready` fires once the widget has captured its instance and is ready
/// for commands; `on_state_change` receives the widget's raw numeric status
/// codes (the caller maps them onto recognized transitions).
///
/// # Errors
///
/// Returns a message when the options object cannot be assembled; the widget
/// itself reports nothing synchronously.
pub fn create_player(
    element_id: &str,
    video_id: &VideoId,
    mut on_ready: impl FnMut() + 'static,
    mut on_state_change: impl FnMut(i32) + 'static,
) -> Result<YtPlayer, String> {
    let options = serde_wasm_bindgen::to_value(&EmbedOptions::default())
        .map_err(|e| format!("Failed to serialize embed options: {e}"))?;

    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("videoId"),
        &JsValue::from_str(video_id.as_str()),
    )
    .map_err(|_| "Failed to set the video reference".to_string())?;

    let ready = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| on_ready());

    let state_change = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        // The status code rides on the event's `data` field.
        if let Ok(data) = js_sys::Reflect::get(&event, &JsValue::from_str("data"))
            && let Some(code) = data.as_f64()
        {
            on_state_change(code as i32);
        }
    });

    let events = js_sys::Object::new();
    js_sys::Reflect::set(&events, &JsValue::from_str("onReady"), ready.as_ref())
        .map_err(|_| "Failed to wire the ready callback".to_string())?;
    js_sys::Reflect::set(
        &events,
        &JsValue::from_str("onStateChange"),
        state_change.as_ref(),
    )
    .map_err(|_| "Failed to wire the state-change callback".to_string())?;
    js_sys::Reflect::set(&options, &JsValue::from_str("events"), &events)
        .map_err(|_| "Failed to attach event callbacks".to_string())?;

    // Keep the callbacks alive as long as the widget can fire them.
    ready.forget();
    state_change.forget();

    Ok(YtPlayer::new(element_id, &options))
}
