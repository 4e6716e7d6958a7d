//! Viewer timezone detection.
//!
//! Detection never fails from the caller's point of view: any problem is
//! logged and the fixed fallback zone is returned instead.

use chrono_tz::Tz;
use thiserror::Error;

use crate::config::FALLBACK_TIMEZONE;

#[derive(Debug, Error)]
pub enum TimezoneError {
    #[error("host timezone detection failed: {0}")]
    Detection(String),
    #[error("detected timezone {0:?} is not a known IANA zone")]
    Unknown(String),
}

/// Something that can report the host's local timezone identifier.
#[cfg_attr(test, mockall::automock)]
pub trait TimezoneSource {
    fn detect(&self) -> Result<String, TimezoneError>;
}

/// Asks the operating system via `iana-time-zone`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimezoneSource;

impl TimezoneSource for SystemTimezoneSource {
    fn detect(&self) -> Result<String, TimezoneError> {
        iana_time_zone::get_timezone().map_err(|err| TimezoneError::Detection(err.to_string()))
    }
}

pub fn resolve_viewer_timezone() -> String {
    resolve_viewer_timezone_with(&SystemTimezoneSource)
}

/// Returns the detected zone name, or `"UTC"` when detection fails or yields
/// a name `chrono-tz` cannot resolve.
pub fn resolve_viewer_timezone_with<S>(source: &S) -> String
where
    S: TimezoneSource + ?Sized,
{
    match source.detect().and_then(validate) {
        Ok(zone) => {
            log::info!("Detected viewer timezone {}", zone);
            zone
        }
        Err(err) => {
            log::warn!("Failed to detect timezone, using {}: {}", FALLBACK_TIMEZONE, err);
            FALLBACK_TIMEZONE.to_string()
        }
    }
}

fn validate(zone: String) -> Result<String, TimezoneError> {
    let trimmed = zone.trim();
    match trimmed.parse::<Tz>() {
        Ok(_) => Ok(trimmed.to_string()),
        Err(_) => Err(TimezoneError::Unknown(zone)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_zone_is_used() {
        let mut source = MockTimezoneSource::new();
        source
            .expect_detect()
            .returning(|| Ok("Europe/Berlin".to_string()));
        assert_eq!(resolve_viewer_timezone_with(&source), "Europe/Berlin");
    }

    #[test]
    fn detection_failure_falls_back_to_utc() {
        let mut source = MockTimezoneSource::new();
        source
            .expect_detect()
            .returning(|| Err(TimezoneError::Detection("unsupported platform".into())));
        assert_eq!(resolve_viewer_timezone_with(&source), "UTC");
    }

    #[test]
    fn unknown_zone_falls_back_to_utc() {
        let mut source = MockTimezoneSource::new();
        source
            .expect_detect()
            .returning(|| Ok("Local/Nowhere".to_string()));
        assert_eq!(resolve_viewer_timezone_with(&source), "UTC");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let mut source = MockTimezoneSource::new();
        source
            .expect_detect()
            .returning(|| Ok(" Asia/Tokyo\n".to_string()));
        assert_eq!(resolve_viewer_timezone_with(&source), "Asia/Tokyo");
    }

    #[test]
    fn system_source_never_panics() {
        let zone = resolve_viewer_timezone();
        assert!(zone.parse::<Tz>().is_ok());
    }
}
