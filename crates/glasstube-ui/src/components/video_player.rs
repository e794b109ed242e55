//! The player frame: embedded widget, paused overlay, and transport chrome.
//!
//! Owns the playback mirror and the embedded widget handle. The widget is
//! created only once a valid video reference exists (the active phase);
//! until then the frame shows a placeholder and every control is absent.

use gloo_timers::callback::Interval;
use leptos::html::Div;
use leptos::prelude::*;

use glasstube_core::{POLL_INTERVAL_MS, PlaybackMirror, PlayerEvent, VideoId};

use crate::player_api::{self, YtPlayer};

use super::control_bar::ControlBar;

/// Id of the element the embed widget mounts over.
const PLAYER_MOUNT_ID: &str = "glasstube-embed";

/// The styled player shell around the embedded widget.
#[component]
pub fn VideoPlayer(
    /// Canonical watch URL; the video reference is recomputed on change.
    #[prop(into)]
    url: Signal<String>,
    /// Page-level idle gate for the transport chrome.
    #[prop(into)]
    controls_enabled: Signal<bool>,
) -> impl IntoView {
    let video_id = Memo::new(move |_| VideoId::extract(&url.get()));

    let mirror = RwSignal::new(PlaybackMirror::new());
    let player = StoredValue::new_local(None::<YtPlayer>);
    let poll = StoredValue::new_local(None::<Interval>);
    let wrapper_ref = NodeRef::<Div>::new();
    let (activity, set_activity) = signal(0_u32);

    let state = Signal::derive(move || mirror.with(PlaybackMirror::state));
    let is_playing = Memo::new(move |_| mirror.with(|m| m.state().is_playing));

    let destroy_player = move || {
        player.update_value(|slot| {
            if let Some(old) = slot.take() {
                old.destroy();
            }
        });
    };

    // (Re)create the widget whenever the video reference changes; tear it
    // down when the reference disappears. The mirror starts fresh either
    // way - its state never outlives the reference it was built for.
    Effect::new(move || {
        let reference = video_id.get();
        mirror.set(PlaybackMirror::new());
        destroy_player();

        let Some(reference) = reference else {
            return;
        };

        player_api::on_player_api_ready(move || {
            let on_ready = move || {
                player.with_value(|slot| {
                    mirror.update(|m| {
                        if let Some(instance) = slot.as_ref() {
                            m.mark_ready(instance);
                        }
                    });
                });
            };
            let on_state_change = move |code: i32| {
                if let Some(event) = PlayerEvent::from_status_code(code) {
                    mirror.update(|m| m.apply_event(event));
                }
            };
            match player_api::create_player(PLAYER_MOUNT_ID, &reference, on_ready, on_state_change)
            {
                Ok(instance) => player.set_value(Some(instance)),
                Err(message) => {
                    leptos::logging::error!("Failed to create embedded player: {}", message);
                }
            }
        });
    });

    // The position poll runs only while playing. Swapping the stored handle
    // drops the previous interval, which cancels it.
    Effect::new(move || {
        if is_playing.get() {
            poll.set_value(Some(Interval::new(POLL_INTERVAL_MS, move || {
                player.with_value(|slot| {
                    mirror.update(|m| m.poll_tick(slot.as_ref()));
                });
            })));
        } else {
            poll.set_value(None);
        }
    });

    on_cleanup(move || {
        poll.set_value(None);
        destroy_player();
    });

    let on_toggle_play = Callback::new(move |()| {
        player.with_value(|slot| mirror.update(|m| m.toggle_play(slot.as_ref())));
    });
    let on_toggle_mute = Callback::new(move |()| {
        player.with_value(|slot| mirror.update(|m| m.toggle_mute(slot.as_ref())));
    });
    let on_volume = Callback::new(move |volume: f64| {
        player.with_value(|slot| mirror.update(|m| m.set_volume(slot.as_ref(), volume)));
    });
    let on_seek = Callback::new(move |fraction: f64| {
        player.with_value(|slot| mirror.update(|m| m.seek_to_fraction(slot.as_ref(), fraction)));
    });

    view! {
        <div
            class="player-wrapper"
            node_ref=wrapper_ref
            on:mousemove=move |_| set_activity.update(|n| *n = n.wrapping_add(1))
        >
            <div class="player-embed" class:hidden=move || video_id.get().is_none()>
                <div id=PLAYER_MOUNT_ID></div>
            </div>

            <Show when=move || video_id.get().is_none()>
                <div class="player-placeholder">
                    "Paste a YouTube link in the input bar to begin playback."
                </div>
            </Show>

            <Show when=move || video_id.get().is_some() && !is_playing.get()>
                <div class="player-overlay" on:click=move |_| on_toggle_play.run(())>
                    <button class="player-overlay-button" aria-label="Play">
                        <span class="glass-btn-sheen"></span>
                        <svg viewBox="0 0 24 24" width="50" height="50" fill="currentColor">
                            <path d="M8 5v14l11-7z"/>
                        </svg>
                    </button>
                </div>
            </Show>

            <Show when=move || video_id.get().is_some()>
                <ControlBar
                    state=state
                    enabled=controls_enabled
                    activity=activity
                    wrapper=wrapper_ref
                    on_toggle_play=on_toggle_play
                    on_toggle_mute=on_toggle_mute
                    on_volume=on_volume
                    on_seek=on_seek
                />
            </Show>
        </div>
    }
}
