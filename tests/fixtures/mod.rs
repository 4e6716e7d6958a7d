// Test fixtures - reusable test data
// Provides consistent instants and a counting celebration across test files

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use decision_countdown::services::celebration::CelebrationTrigger;

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// The compiled-in deadline, Mar 12 2025 23:59 at UTC-8
    pub fn target() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-03-12T23:59:00-08:00").unwrap()
    }

    /// Wall-clock time at UTC-8 on the given March 2025 day
    pub fn pacific_march(day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        FixedOffset::west_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, day, hour, min, sec)
            .unwrap()
            .with_timezone(&Utc)
    }

    /// One minute before the deadline
    pub fn one_minute_before() -> DateTime<Utc> {
        pacific_march(12, 23, 58, 0)
    }

    /// One second after midnight following the deadline
    pub fn just_after() -> DateTime<Utc> {
        pacific_march(13, 0, 0, 1)
    }
}

/// Celebration that just counts how often it was fired
#[derive(Debug, Default)]
pub struct CountingCelebration {
    pub fired: usize,
}

impl CelebrationTrigger for CountingCelebration {
    fn celebrate(&mut self) {
        self.fired += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_instants_are_ordered() {
        let target = instants::target().with_timezone(&Utc);
        assert!(instants::one_minute_before() < target);
        assert!(instants::just_after() > target);
    }
}
