//! Compiled-in countdown constants.
//!
//! The deadline and reference zone are fixed for the lifetime of the process;
//! they are parsed once at startup into a [`CountdownConfig`] and handed to the
//! services that need them.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;

/// Decisions go out at this instant (Pacific Time).
pub const TARGET_INSTANT: &str = "2025-03-12T23:59:00-08:00";

/// Zone used for the "current time" caption, independent of the viewer.
pub const REFERENCE_TIMEZONE: &str = "America/Los_Angeles";

/// Returned whenever the viewer's zone cannot be detected.
pub const FALLBACK_TIMEZONE: &str = "UTC";

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownConfig {
    pub target: DateTime<FixedOffset>,
    pub reference_timezone: Tz,
}

impl CountdownConfig {
    pub fn from_constants() -> Result<Self> {
        Self::parse(TARGET_INSTANT, REFERENCE_TIMEZONE)
    }

    pub fn parse(target: &str, reference_timezone: &str) -> Result<Self> {
        let target = DateTime::parse_from_rfc3339(target)
            .with_context(|| format!("invalid target instant {target}"))?;
        let reference_timezone = reference_timezone.parse::<Tz>().map_err(|err| {
            anyhow::anyhow!("invalid reference timezone {}: {}", reference_timezone, err)
        })?;

        Ok(Self {
            target,
            reference_timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn compiled_constants_parse() {
        let config = CountdownConfig::from_constants().unwrap();
        assert_eq!(config.reference_timezone, chrono_tz::America::Los_Angeles);
        assert_eq!(
            config.target,
            Utc.with_ymd_and_hms(2025, 3, 13, 7, 59, 0).unwrap()
        );
    }

    #[test]
    fn rejects_target_without_offset() {
        assert!(CountdownConfig::parse("2025-03-12T23:59:00", REFERENCE_TIMEZONE).is_err());
    }

    #[test]
    fn rejects_unknown_reference_zone() {
        assert!(CountdownConfig::parse(TARGET_INSTANT, "Mars/Olympus_Mons").is_err());
    }
}
