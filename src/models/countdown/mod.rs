use serde::{Deserialize, Serialize};

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Remaining time broken down into display units.
///
/// `days` is the total number of whole days left and is unbounded; the other
/// fields are taken modulo their containing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownState {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a remaining duration in milliseconds. Negative input clamps to zero.
    pub fn from_millis(remaining_ms: i64) -> Self {
        let ms = remaining_ms.max(0) as u64;
        Self {
            days: ms / MILLIS_PER_DAY,
            hours: (ms / MILLIS_PER_HOUR) % 24,
            minutes: (ms / MILLIS_PER_MINUTE) % 60,
            seconds: (ms / MILLIS_PER_SECOND) % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Cells in display order.
    pub fn units(&self) -> [(TimeUnit, u64); 4] {
        [
            (TimeUnit::Days, self.days),
            (TimeUnit::Hours, self.hours),
            (TimeUnit::Minutes, self.minutes),
            (TimeUnit::Seconds, self.seconds),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Days => "Days",
            TimeUnit::Hours => "Hours",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Seconds => "Seconds",
        }
    }
}

/// Expiry state machine. Moves from `Counting` to `Expired` once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CountdownPhase {
    #[default]
    Counting,
    Expired,
}

impl CountdownPhase {
    pub fn is_expired(&self) -> bool {
        matches!(self, CountdownPhase::Expired)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        let a = if hex.len() == 8 {
            u8::from_str_radix(hex.get(6..8)?, 16).ok()?
        } else {
            255
        };

        Some(RgbaColor::new(r, g, b, a))
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_minute_decomposes_to_minutes_only() {
        let state = CountdownState::from_millis(60_000);
        assert_eq!(
            state,
            CountdownState {
                days: 0,
                hours: 0,
                minutes: 1,
                seconds: 0
            }
        );
    }

    #[test]
    fn days_are_not_wrapped() {
        let ms = 400 * 86_400_000 + 23 * 3_600_000 + 59 * 60_000 + 59_999;
        let state = CountdownState::from_millis(ms);
        assert_eq!(state.days, 400);
        assert_eq!(state.hours, 23);
        assert_eq!(state.minutes, 59);
        assert_eq!(state.seconds, 59);
    }

    #[test]
    fn negative_remaining_clamps_to_zero() {
        assert!(CountdownState::from_millis(-5_000).is_zero());
        assert!(CountdownState::from_millis(i64::MIN).is_zero());
    }

    #[test]
    fn sub_second_remainder_truncates() {
        assert!(CountdownState::from_millis(999).is_zero());
    }

    #[test]
    fn units_are_in_display_order() {
        let labels: Vec<_> = CountdownState::ZERO
            .units()
            .iter()
            .map(|(unit, _)| unit.label())
            .collect();
        assert_eq!(labels, ["Days", "Hours", "Minutes", "Seconds"]);
    }

    #[test]
    fn phase_defaults_to_counting() {
        assert_eq!(CountdownPhase::default(), CountdownPhase::Counting);
        assert!(!CountdownPhase::Counting.is_expired());
        assert!(CountdownPhase::Expired.is_expired());
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            RgbaColor::from_hex_str("#ff6b00"),
            Some(RgbaColor::new(255, 107, 0, 255))
        );
        assert_eq!(
            RgbaColor::from_hex_str("ff9a3d80"),
            Some(RgbaColor::new(255, 154, 61, 128))
        );
        assert_eq!(RgbaColor::from_hex_str("#fff"), None);
        assert_eq!(RgbaColor::from_hex_str("#gg0000"), None);
    }
}
