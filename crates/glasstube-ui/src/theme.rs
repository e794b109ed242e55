//! Theme configuration for `Glasstube`.
//!
//! Liquid-glass dark mode: translucent white surfaces over a deep gray
//! gradient, with a cyan-to-purple accent sweep for the transport controls.

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page gradient start.
        pub const PAGE_FROM: &str = "#111827";
        /// Page gradient midpoint.
        pub const PAGE_VIA: &str = "#000000";
        /// Page gradient end.
        pub const PAGE_TO: &str = "#1f2937";
        /// Glass surface fill.
        pub const GLASS: &str = "rgba(255, 255, 255, 0.1)";
        /// Glass surface fill on hover.
        pub const GLASS_HOVER: &str = "rgba(255, 255, 255, 0.2)";
        /// Dimmed overlay behind the paused chrome.
        pub const OVERLAY: &str = "rgba(0, 0, 0, 0.3)";
        /// Player letterbox fill.
        pub const PLAYER: &str = "#000000";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#ffffff";
        /// Muted text.
        pub const MUTED: &str = "rgba(255, 255, 255, 0.6)";
        /// Time label and secondary chrome text.
        pub const SECONDARY: &str = "#e5e7eb";
    }

    /// Accent colors.
    pub mod accent {
        /// Cyan end of the accent sweep.
        pub const CYAN: &str = "#22d3ee";
        /// Blue midpoint of the accent sweep.
        pub const BLUE: &str = "#3b82f6";
        /// Purple end of the accent sweep.
        pub const PURPLE: &str = "#9333ea";
        /// Accent glow for hover and the progress fill.
        pub const GLOW: &str = "rgba(0, 200, 255, 0.7)";
    }

    /// Border colors.
    pub mod border {
        /// Default glass border.
        pub const DEFAULT: &str = "rgba(255, 255, 255, 0.2)";
        /// Stronger border for the control surfaces.
        pub const STRONG: &str = "rgba(255, 255, 255, 0.3)";
    }

    /// Shadow definitions.
    pub mod shadow {
        /// Ambient drop shadow under floating panels.
        pub const AMBIENT: &str = "0 8px 40px rgba(0, 0, 0, 0.8)";
        /// Inner highlight that sells the glass.
        pub const INNER_GLOW: &str = "inset 2px 2px 10px rgba(255, 255, 255, 0.3)";
        /// Player frame shadow.
        pub const PLAYER: &str = "0 0 40px rgba(0, 0, 0, 0.6)";
    }

    /// Gradient definitions.
    pub mod gradient {
        /// Page background.
        pub const PAGE: &str = "linear-gradient(135deg, #111827 0%, #000000 50%, #1f2937 100%)";
        /// Accent sweep used by the progress fill and slider thumb.
        pub const ACCENT: &str = "linear-gradient(90deg, #22d3ee 0%, #3b82f6 50%, #9333ea 100%)";
        /// Sheen across glass surfaces.
        pub const SHEEN: &str =
            "linear-gradient(180deg, rgba(255, 255, 255, 0.4) 0%, transparent 100%)";
        /// Shimmer highlight that sweeps across buttons.
        pub const SHIMMER: &str = "linear-gradient(90deg, transparent 0%, rgba(255, 255, 255, 0.3) 50%, transparent 100%)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Font family - system stack, nothing to load.
    pub const FONT_FAMILY: &str =
        "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

    /// Font sizes.
    pub mod sizes {
        /// Small text (time label).
        pub const SM: &str = "0.875rem";
        /// Base text.
        pub const BASE: &str = "1rem";
        /// Large text (input, hints).
        pub const LG: &str = "1.125rem";
        /// Extra large text (placeholder message).
        pub const XL: &str = "1.25rem";
    }
}

/// Spacing values.
pub mod spacing {
    /// Small spacing.
    pub const SM: &str = "0.5rem";
    /// Medium spacing.
    pub const MD: &str = "1rem";
    /// Large spacing.
    pub const LG: &str = "1.5rem";
}

/// Border radius values.
pub mod radius {
    /// Panel radius.
    pub const PANEL: &str = "1.75rem";
    /// Player frame radius.
    pub const FRAME: &str = "1.5rem";
    /// Full/pill radius.
    pub const FULL: &str = "9999px";
}

/// Animation/transition configuration.
pub mod animation {
    /// Fast transition for interactive elements.
    pub const FAST: &str = "0.2s ease";
    /// Smooth transition for chrome reveal/hide.
    pub const SMOOTH: &str = "0.4s ease-out";
    /// Slow transition for the splash fade.
    pub const SLOW: &str = "1.2s ease-in-out";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Background colors */
  --bg-page-from: {bg_page_from};
  --bg-page-via: {bg_page_via};
  --bg-page-to: {bg_page_to};
  --bg-glass: {bg_glass};
  --bg-glass-hover: {bg_glass_hover};
  --bg-overlay: {bg_overlay};
  --bg-player: {bg_player};

  /* Text colors */
  --text-primary: {text_primary};
  --text-muted: {text_muted};
  --text-secondary: {text_secondary};

  /* Accent colors */
  --accent-cyan: {accent_cyan};
  --accent-blue: {accent_blue};
  --accent-purple: {accent_purple};
  --accent-glow: {accent_glow};

  /* Borders */
  --border-default: {border_default};
  --border-strong: {border_strong};

  /* Shadows */
  --shadow-ambient: {shadow_ambient};
  --shadow-inner-glow: {shadow_inner_glow};
  --shadow-player: {shadow_player};

  /* Gradients */
  --gradient-page: {gradient_page};
  --gradient-accent: {gradient_accent};
  --gradient-sheen: {gradient_sheen};
  --gradient-shimmer: {gradient_shimmer};

  /* Typography */
  --font-family: {font_family};
  --font-size-sm: {font_sm};
  --font-size-base: {font_base};
  --font-size-lg: {font_lg};
  --font-size-xl: {font_xl};

  /* Spacing */
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};

  /* Border radius */
  --radius-panel: {radius_panel};
  --radius-frame: {radius_frame};
  --radius-full: {radius_full};

  /* Transitions */
  --transition-fast: {transition_fast};
  --transition-smooth: {transition_smooth};
  --transition-slow: {transition_slow};
}}",
        bg_page_from = colors::background::PAGE_FROM,
        bg_page_via = colors::background::PAGE_VIA,
        bg_page_to = colors::background::PAGE_TO,
        bg_glass = colors::background::GLASS,
        bg_glass_hover = colors::background::GLASS_HOVER,
        bg_overlay = colors::background::OVERLAY,
        bg_player = colors::background::PLAYER,
        text_primary = colors::text::PRIMARY,
        text_muted = colors::text::MUTED,
        text_secondary = colors::text::SECONDARY,
        accent_cyan = colors::accent::CYAN,
        accent_blue = colors::accent::BLUE,
        accent_purple = colors::accent::PURPLE,
        accent_glow = colors::accent::GLOW,
        border_default = colors::border::DEFAULT,
        border_strong = colors::border::STRONG,
        shadow_ambient = colors::shadow::AMBIENT,
        shadow_inner_glow = colors::shadow::INNER_GLOW,
        shadow_player = colors::shadow::PLAYER,
        gradient_page = colors::gradient::PAGE,
        gradient_accent = colors::gradient::ACCENT,
        gradient_sheen = colors::gradient::SHEEN,
        gradient_shimmer = colors::gradient::SHIMMER,
        font_family = typography::FONT_FAMILY,
        font_sm = typography::sizes::SM,
        font_base = typography::sizes::BASE,
        font_lg = typography::sizes::LG,
        font_xl = typography::sizes::XL,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        radius_panel = radius::PANEL,
        radius_frame = radius::FRAME,
        radius_full = radius::FULL,
        transition_fast = animation::FAST,
        transition_smooth = animation::SMOOTH,
        transition_slow = animation::SLOW,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("--bg-glass"));
        assert!(css.contains("--gradient-accent"));
        assert!(css.contains("--font-family"));
    }

    #[test]
    fn test_color_values() {
        assert!(colors::background::PAGE_FROM.starts_with('#'));
        assert!(colors::accent::CYAN.starts_with('#'));
    }
}
