//! Theme module for the egui countdown window
//!
//! Defines the CountdownTheme structure and conversions between the model's
//! RgbaColor and egui::Color32.

use egui::Color32;

use crate::models::countdown::RgbaColor;
use crate::models::settings::Settings;

/// Colors used by the countdown window
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background color
    pub app_background: Color32,

    /// Background of the four unit cells
    pub cell_background: Color32,

    /// Primary text color (captions)
    pub text_primary: Color32,

    /// Secondary text color (unit labels, timezone lines)
    pub text_secondary: Color32,

    /// Digits, status line and logo
    pub accent: Color32,
}

impl CountdownTheme {
    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(17, 17, 17),
            cell_background: Color32::from_rgb(243, 244, 246),
            text_primary: Color32::from_rgb(255, 255, 255),
            text_secondary: Color32::from_rgb(156, 163, 175),
            accent: Color32::from_rgb(249, 115, 22),
        }
    }

    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(250, 250, 250),
            cell_background: Color32::from_rgb(229, 231, 235),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(107, 114, 128),
            accent: Color32::from_rgb(249, 115, 22),
        }
    }

    /// Pick light or dark from settings, following the OS when asked to.
    pub fn for_settings(settings: &Settings) -> Self {
        let is_dark = if settings.use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => true,
                dark_light::Mode::Light => false,
                dark_light::Mode::Default => settings.is_dark_theme(),
            }
        } else {
            settings.is_dark_theme()
        };

        let base = if is_dark { Self::dark() } else { Self::light() };
        Self {
            accent: rgba_to_color32(settings.accent()),
            ..base
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

pub fn rgba_to_color32(color: RgbaColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}
