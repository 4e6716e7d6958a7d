//! Human-readable renderings of the target and the current instant.

use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::utils::date::ordinal_day;

/// e.g. `Mar 13, 2025 12:59 AM PDT`
pub const TARGET_FORMAT: &str = "%b %-d, %Y %-I:%M %p %Z";

/// Locale-default rendering used when the viewer zone is unusable.
const FALLBACK_FORMAT: &str = "%c";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown timezone {name:?}: {reason}")]
    UnknownTimezone { name: String, reason: String },
}

pub fn try_format_target(
    target: DateTime<FixedOffset>,
    viewer_timezone: &str,
) -> Result<String, FormatError> {
    let zone = viewer_timezone
        .parse::<Tz>()
        .map_err(|err| FormatError::UnknownTimezone {
            name: viewer_timezone.to_string(),
            reason: err.to_string(),
        })?;
    Ok(target.with_timezone(&zone).format(TARGET_FORMAT).to_string())
}

/// Target instant in the viewer's zone. Falls back to the host-local zone
/// when the viewer zone cannot be used, so the fallback may show a different
/// zone than the caption next to it.
pub fn format_target(target: DateTime<FixedOffset>, viewer_timezone: &str) -> String {
    try_format_target(target, viewer_timezone).unwrap_or_else(|err| {
        log::warn!("Error formatting date: {}", err);
        format_fallback(target)
    })
}

fn format_fallback(target: DateTime<FixedOffset>) -> String {
    target.with_timezone(&Local).format(FALLBACK_FORMAT).to_string()
}

/// Current instant in the reference zone, e.g. `Mar 12th 11:58`.
pub fn format_reference(now: DateTime<Utc>, reference_timezone: Tz) -> String {
    format_in_zone(&now.with_timezone(&reference_timezone))
}

fn format_in_zone<Z: TimeZone>(local: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    format!(
        "{} {} {}",
        local.format("%b"),
        ordinal_day(local.day()),
        local.format("%I:%M")
    )
}
