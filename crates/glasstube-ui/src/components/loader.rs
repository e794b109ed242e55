//! Splash screen shown while the page warms up.
//!
//! Purely cosmetic: the page shell hides it after a fixed delay, not in
//! response to any real readiness signal.

use leptos::prelude::*;

/// Full-screen loading splash with a pulsing glass orb.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader-orb">
                <div class="loader-orb-shimmer"></div>
                <div class="loader-orb-core"></div>
            </div>
            <h2 class="loader-label">"Loading your liquid player..."</h2>
        </div>
    }
}
