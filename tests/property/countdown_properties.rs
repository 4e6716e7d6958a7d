// Property-based tests for the countdown calculator
// Random instants on both sides of the deadline must respect the millisecond formula

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Duration, Utc};
use decision_countdown::models::countdown::CountdownState;
use decision_countdown::services::countdown::CountdownService;
use fixtures::{instants, CountingCelebration};
use proptest::prelude::*;

const TEN_YEARS_MS: i64 = 10 * 365 * 86_400_000;

proptest! {
    /// Property: before the deadline every field follows the floor/mod formula
    #[test]
    fn prop_counting_matches_millisecond_formula(remaining_ms in 1..TEN_YEARS_MS) {
        let target = instants::target();
        let now = target.with_timezone(&Utc) - Duration::milliseconds(remaining_ms);

        let mut celebration = CountingCelebration::default();
        let mut countdown = CountdownService::new(target);
        let eval = countdown.evaluate_at(now, &mut celebration);

        let ms = remaining_ms as u64;
        prop_assert_eq!(eval.state.days, ms / 86_400_000);
        prop_assert_eq!(eval.state.hours, (ms / 3_600_000) % 24);
        prop_assert_eq!(eval.state.minutes, (ms / 60_000) % 60);
        prop_assert_eq!(eval.state.seconds, (ms / 1000) % 60);
        prop_assert!(!eval.phase.is_expired());
        prop_assert_eq!(celebration.fired, 0);
    }

    /// Property: at or after the deadline the state is all zeros and expired
    #[test]
    fn prop_expired_is_all_zero(past_ms in 0..TEN_YEARS_MS) {
        let target = instants::target();
        let now = target.with_timezone(&Utc) + Duration::milliseconds(past_ms);

        let mut celebration = CountingCelebration::default();
        let mut countdown = CountdownService::new(target);
        let eval = countdown.evaluate_at(now, &mut celebration);

        prop_assert_eq!(eval.state, CountdownState::ZERO);
        prop_assert!(eval.phase.is_expired());
        prop_assert_eq!(celebration.fired, 1);
    }

    /// Property: the decomposition recomposes to the remaining time, truncated to seconds
    #[test]
    fn prop_decomposition_recomposes(remaining_ms in 0..i64::MAX / 2) {
        let state = CountdownState::from_millis(remaining_ms);
        let recomposed = state.days * 86_400
            + state.hours * 3_600
            + state.minutes * 60
            + state.seconds;
        prop_assert_eq!(recomposed, remaining_ms as u64 / 1000);
        prop_assert!(state.hours < 24 && state.minutes < 60 && state.seconds < 60);
    }

    /// Property: any number of repeated ticks celebrates at most once
    #[test]
    fn prop_celebration_fires_once(steps in prop::collection::vec(0i64..5_000, 1..50)) {
        let target = instants::target();
        let mut now = target.with_timezone(&Utc) - Duration::seconds(30);

        let mut celebration = CountingCelebration::default();
        let mut countdown = CountdownService::new(target);
        for step in steps {
            now += Duration::milliseconds(step);
            countdown.evaluate_at(now, &mut celebration);
        }

        let expected = usize::from(countdown.is_expired());
        prop_assert_eq!(celebration.fired, expected);
    }
}
