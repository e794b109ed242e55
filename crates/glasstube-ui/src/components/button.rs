//! Glass button component.

use leptos::prelude::*;

/// Button variant styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlassButtonVariant {
    /// Circular icon button used across the chrome.
    #[default]
    Icon,
    /// Oversized circular button for the paused overlay.
    Hero,
}

impl GlassButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Icon => "glass-btn glass-btn-icon",
            Self::Hero => "glass-btn glass-btn-hero",
        }
    }
}

/// Reusable circular glass button with a shimmer sweep on hover.
#[component]
pub fn GlassButton(
    /// Button content, usually an inline SVG icon.
    children: Children,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Button variant.
    #[prop(default = GlassButtonVariant::Icon)]
    variant: GlassButtonVariant,
    /// Accessible label.
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <button
            class=variant.classes()
            aria-label=label
            on:click=move |_| {
                if let Some(handler) = &on_click {
                    handler.run(());
                }
            }
        >
            <span class="glass-btn-sheen"></span>
            <span class="glass-btn-shimmer"></span>
            {children()}
        </button>
    }
}
