// Settings module
// Presentation preferences persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::countdown::RgbaColor;

/// Presentation preferences. The countdown target itself is compiled in and
/// not part of the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: f32,
    pub window_height: f32,
    /// Follow the OS light/dark preference instead of `theme`.
    pub use_system_theme: bool,
    pub theme: String,
    pub celebration_enabled: bool,
    pub accent_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 420.0,
            window_height: 520.0,
            use_system_theme: false,
            theme: "dark".to_string(),
            celebration_enabled: true,
            accent_color: "#ff6b00".to_string(),
        }
    }
}

impl Settings {
    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        if !(self.window_width.is_finite() && self.window_width >= 200.0) {
            return Err(format!("window_width must be at least 200, got {}", self.window_width));
        }
        if !(self.window_height.is_finite() && self.window_height >= 200.0) {
            return Err(format!(
                "window_height must be at least 200, got {}",
                self.window_height
            ));
        }
        if !matches!(self.theme.to_lowercase().as_str(), "light" | "dark") {
            return Err(format!("theme must be 'light' or 'dark', got '{}'", self.theme));
        }
        if RgbaColor::from_hex_str(&self.accent_color).is_none() {
            return Err(format!("accent_color is not a hex color: '{}'", self.accent_color));
        }
        Ok(())
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }

    /// Accent colour, falling back to the default orange if unparsable.
    pub fn accent(&self) -> RgbaColor {
        RgbaColor::from_hex_str(&self.accent_color)
            .unwrap_or(RgbaColor::new(0xff, 0x6b, 0x00, 0xff))
    }
}
