//! Main application component.

use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use glasstube_core::{Error, check_supported, normalize_watch_url};

use crate::components::{InputBar, Loader, VideoPlayer};
use crate::theme::generate_css_variables;

/// How long the cosmetic splash stays up. Not tied to any readiness signal.
const SPLASH_DELAY_MS: u32 = 2_000;

/// Period of the page-wide pointer idle check.
const IDLE_CHECK_INTERVAL_MS: u32 = 500;

/// Pointer silence after which the transport chrome hides.
const IDLE_HIDE_AFTER_MS: f64 = 3_000.0;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Home />
    }
}

/// The single page: splash, input bar, and the player.
#[component]
fn Home() -> impl IntoView {
    // State signals
    let (video_url, set_video_url) = signal(String::new());
    let (should_play, set_should_play) = signal(false);
    let (loading, set_loading) = signal(true);
    let (controls_active, set_controls_active) = signal(true);
    let last_pointer_move = StoredValue::new(js_sys::Date::now());

    // The splash is a fixed-delay cosmetic gate.
    spawn_local(async move {
        TimeoutFuture::new(SPLASH_DELAY_MS).await;
        set_loading.set(false);
    });

    // Page-wide idle detection: any pointer movement reveals the chrome,
    // and the periodic check hides it once the window elapses.
    let idle_check = StoredValue::new_local(None::<Interval>);
    idle_check.set_value(Some(Interval::new(IDLE_CHECK_INTERVAL_MS, move || {
        if js_sys::Date::now() - last_pointer_move.get_value() > IDLE_HIDE_AFTER_MS {
            set_controls_active.set(false);
        }
    })));

    let pointer_listener =
        StoredValue::new_local(Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_| {
            set_controls_active.set(true);
            last_pointer_move.set_value(js_sys::Date::now());
        }));
    if let Some(window) = web_sys::window()
        && pointer_listener
            .with_value(|listener| {
                window.add_event_listener_with_callback(
                    "mousemove",
                    listener.as_ref().unchecked_ref(),
                )
            })
            .is_err()
    {
        leptos::logging::error!("Failed to attach the pointer listener");
    }

    on_cleanup(move || {
        idle_check.set_value(None);
        if let Some(window) = web_sys::window() {
            pointer_listener.with_value(|listener| {
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    listener.as_ref().unchecked_ref(),
                );
            });
        }
    });

    // Callbacks
    let on_url_change = Callback::new(move |value: String| {
        set_video_url.set(value);
    });

    let on_load_and_play = Callback::new(move |()| {
        let url = video_url.get_untracked();
        match check_supported(url.trim()) {
            Ok(()) => set_should_play.set(true),
            Err(e) => alert(&e.to_string()),
        }
    });

    // Permanently stubbed out.
    let on_download = Callback::new(move |()| {
        alert(&Error::DownloadDisabled.to_string());
    });

    let watch_url = Signal::derive(move || normalize_watch_url(&video_url.get()));

    view! {
        <div class="home">
            <Show
                when=move || loading.get()
                fallback=move || view! {
                    <div class="home-content">
                        <InputBar
                            video_url=video_url
                            on_url_change=on_url_change
                            on_load_and_play=on_load_and_play
                            on_download=on_download
                        />
                        <Show
                            when=move || should_play.get() && !video_url.get().is_empty()
                            fallback=|| view! {
                                <p class="home-hint">
                                    "Paste a YouTube link above to start playing"
                                </p>
                            }
                        >
                            <VideoPlayer url=watch_url controls_enabled=controls_active />
                        </Show>
                    </div>
                }
            >
                <Loader />
            </Show>
        </div>
    }
}

/// Blocking user-facing alert; failures are local and never propagate.
fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && window.alert_with_message(message).is_err()
    {
        leptos::logging::error!("Failed to show alert: {}", message);
    }
}
