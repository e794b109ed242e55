//! The glass input row where the user pastes a link.

use leptos::prelude::*;

use super::button::GlassButton;

/// Input bar with the link field plus play and download actions.
///
/// Pure dispatch: validation and the alert paths belong to the page shell.
#[component]
pub fn InputBar(
    /// The entered URL text.
    #[prop(into)]
    video_url: Signal<String>,
    /// Called with the new text on every edit.
    on_url_change: Callback<String>,
    /// Called when the play action is clicked.
    on_load_and_play: Callback<()>,
    /// Called when the download action is clicked.
    on_download: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="input-bar">
            <input
                type="text"
                class="input-bar-field"
                placeholder="Paste YouTube video link here..."
                prop:value=video_url
                on:input=move |ev| on_url_change.run(event_target_value(&ev))
            />
            <div class="input-bar-actions">
                <GlassButton on_click=on_load_and_play label="Load and play">
                    <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                        <path d="M8 5v14l11-7z"/>
                    </svg>
                </GlassButton>
                <GlassButton on_click=on_download label="Download">
                    <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                        <path d="M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"/>
                    </svg>
                </GlassButton>
            </div>
        </div>
    }
}
