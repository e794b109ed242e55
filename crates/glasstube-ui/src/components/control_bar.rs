//! Transport chrome rendered over the embedded player.
//!
//! Pure rendering and input dispatch. The only local state is the
//! inactivity window (reveal on wrapper pointer movement, hide after 2.5 s
//! without any) and a fullscreen flag kept in sync with the document's
//! fullscreen-change notification.

use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use glasstube_core::{PlaybackState, format_timestamp};

use super::button::GlassButton;

/// How long the chrome stays up after the last wrapper pointer movement.
const HIDE_DELAY_MS: u32 = 2_500;

/// The control bar: seek bar, transport buttons, volume, time label and
/// fullscreen toggle, floating over the player frame.
#[component]
pub fn ControlBar(
    /// Mirrored playback state driving every readout.
    #[prop(into)]
    state: Signal<PlaybackState>,
    /// Page-level idle gate; the chrome hides whenever this is false.
    #[prop(into)]
    enabled: Signal<bool>,
    /// Bumped by the player wrapper on every pointer movement.
    #[prop(into)]
    activity: Signal<u32>,
    /// The player wrapper, which is also the fullscreen target.
    wrapper: NodeRef<Div>,
    /// Toggle play/pause.
    on_toggle_play: Callback<()>,
    /// Toggle binary mute.
    on_toggle_mute: Callback<()>,
    /// Volume change from the slider, already `0..=1` by the input's range.
    on_volume: Callback<f64>,
    /// Seek to a fractional position of the bar.
    on_seek: Callback<f64>,
) -> impl IntoView {
    let (visible, set_visible) = signal(true);
    let (is_fullscreen, set_is_fullscreen) = signal(false);
    let hide_timer = StoredValue::new_local(None::<Timeout>);

    // Any wrapper movement reveals the chrome and restarts the 2.5 s window.
    // Replacing the stored handle cancels the previous countdown.
    Effect::new(move || {
        activity.track();
        set_visible.set(true);
        hide_timer.set_value(Some(Timeout::new(HIDE_DELAY_MS, move || {
            set_visible.set(false);
        })));
    });

    // Track the platform fullscreen state.
    let fullscreen_listener =
        StoredValue::new_local(Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            let active = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.fullscreen_element())
                .is_some();
            set_is_fullscreen.set(active);
        }));
    if let Some(document) = web_sys::window().and_then(|window| window.document())
        && fullscreen_listener
            .with_value(|listener| {
                document.add_event_listener_with_callback(
                    "fullscreenchange",
                    listener.as_ref().unchecked_ref(),
                )
            })
            .is_err()
    {
        leptos::logging::error!("Failed to attach the fullscreen listener");
    }

    on_cleanup(move || {
        hide_timer.set_value(None);
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            fullscreen_listener.with_value(|listener| {
                let _ = document.remove_event_listener_with_callback(
                    "fullscreenchange",
                    listener.as_ref().unchecked_ref(),
                );
            });
        }
    });

    let on_fullscreen = Callback::new(move |()| {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        if document.fullscreen_element().is_none() {
            if let Some(target) = wrapper.get()
                && target.request_fullscreen().is_err()
            {
                leptos::logging::error!("Fullscreen request rejected");
            }
        } else {
            document.exit_fullscreen();
        }
    });

    // Fractional position from the pointer offset over the bar's width.
    let on_seek_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.current_target() else {
            return;
        };
        let Ok(bar) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        let rect = bar.get_bounding_client_rect();
        if rect.width() > 0.0 {
            let fraction = (f64::from(ev.client_x()) - rect.left()) / rect.width();
            on_seek.run(fraction.clamp(0.0, 1.0));
        }
    };

    let is_muted = move || state.get().volume == 0.0;
    let time_label = move || {
        let state = state.get();
        format!(
            "{} / {}",
            format_timestamp(state.current_time),
            format_timestamp(state.duration)
        )
    };

    view! {
        <div class="control-bar" class:visible=move || enabled.get() && visible.get()>
            <div class="seek-bar" on:click=on_seek_click>
                <div class="seek-bar-ripple"></div>
                <div
                    class="seek-bar-fill"
                    style:width=move || format!("{}%", state.get().progress)
                ></div>
            </div>

            <div class="control-bar-row">
                <div class="control-bar-group">
                    <GlassButton on_click=on_toggle_play label="Play or pause">
                        {move || if state.get().is_playing {
                            view! {
                                <svg viewBox="0 0 24 24" width="22" height="22" fill="currentColor">
                                    <path d="M6 19h4V5H6v14zm8-14v14h4V5h-4z"/>
                                </svg>
                            }.into_any()
                        } else {
                            view! {
                                <svg viewBox="0 0 24 24" width="22" height="22" fill="currentColor">
                                    <path d="M8 5v14l11-7z"/>
                                </svg>
                            }.into_any()
                        }}
                    </GlassButton>

                    <GlassButton on_click=on_toggle_mute label="Toggle mute">
                        {move || if is_muted() {
                            view! {
                                <svg viewBox="0 0 24 24" width="22" height="22" fill="currentColor">
                                    <path d="M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.21l2.45 2.45c.03-.2.05-.41.05-.63zm2.5 0c0 .94-.2 1.82-.54 2.64l1.51 1.51C20.63 14.91 21 13.5 21 12c0-4.28-2.99-7.86-7-8.77v2.06c2.89.86 5 3.54 5 6.71zM4.27 3L3 4.27 7.73 9H3v6h4l5 5v-6.73l4.25 4.25c-.67.52-1.42.93-2.25 1.18v2.06c1.38-.31 2.63-.95 3.69-1.81L19.73 21 21 19.73l-9-9L4.27 3zM12 4L9.91 6.09 12 8.18V4z"/>
                                </svg>
                            }.into_any()
                        } else {
                            view! {
                                <svg viewBox="0 0 24 24" width="22" height="22" fill="currentColor">
                                    <path d="M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 7-4.49 7-8.77s-2.99-7.86-7-8.77z"/>
                                </svg>
                            }.into_any()
                        }}
                    </GlassButton>

                    <div class="control-bar-volume">
                        <input
                            type="range"
                            class="volume-slider"
                            min="0"
                            max="1"
                            step="0.01"
                            prop:value=move || state.get().volume.to_string()
                            on:input=move |ev| {
                                if let Ok(volume) = event_target_value(&ev).parse::<f64>() {
                                    on_volume.run(volume);
                                }
                            }
                        />
                        <span class="time-label">{time_label}</span>
                    </div>
                </div>

                <div class="control-bar-group">
                    <GlassButton label="Settings">
                        <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                            <path d="M19.14 12.94c.04-.31.06-.63.06-.94 0-.31-.02-.63-.06-.94l2.03-1.58c.18-.14.23-.41.12-.61l-1.92-3.32c-.12-.22-.37-.29-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54c-.04-.24-.24-.41-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.04.31-.06.63-.06.94 0 .31.02.63.06.94l-2.03 1.58c-.18.14-.23.41-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z"/>
                        </svg>
                    </GlassButton>

                    <GlassButton on_click=on_fullscreen label="Toggle fullscreen">
                        {move || if is_fullscreen.get() {
                            view! {
                                <svg viewBox="0 0 24 24" width="22" height="22" fill="currentColor">
                                    <path d="M5 16h3v3h2v-5H5v2zm3-8H5v2h5V5H8v3zm6 11h2v-3h3v-2h-5v5zm2-11V5h-2v5h5V8h-3z"/>
                                </svg>
                            }.into_any()
                        } else {
                            view! {
                                <svg viewBox="0 0 24 24" width="22" height="22" fill="currentColor">
                                    <path d="M7 14H5v5h5v-2H7v-3zm-2-4h2V7h3V5H5v5zm12 7h-3v2h5v-5h-2v3zM14 5v2h3v3h2V5h-5z"/>
                                </svg>
                            }.into_any()
                        }}
                    </GlassButton>
                </div>
            </div>
        </div>
    }
}
