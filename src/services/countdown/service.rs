use chrono::{DateTime, FixedOffset, Utc};

use crate::models::countdown::{CountdownPhase, CountdownState};
use crate::services::celebration::CelebrationTrigger;

/// Result of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub state: CountdownState,
    pub phase: CountdownPhase,
    /// True only on the evaluation that moved the countdown into `Expired`.
    pub just_expired: bool,
}

/// Counts down to a fixed target and fires the celebration on expiry.
pub struct CountdownService {
    target: DateTime<FixedOffset>,
    phase: CountdownPhase,
    last_state: CountdownState,
}

impl CountdownService {
    pub fn new(target: DateTime<FixedOffset>) -> Self {
        Self {
            target,
            phase: CountdownPhase::Counting,
            last_state: CountdownState::ZERO,
        }
    }

    pub fn target(&self) -> DateTime<FixedOffset> {
        self.target
    }

    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    pub fn is_expired(&self) -> bool {
        self.phase.is_expired()
    }

    /// State computed by the most recent evaluation.
    pub fn last_state(&self) -> CountdownState {
        self.last_state
    }

    /// Milliseconds from `now` until the target, negative once passed.
    pub fn remaining_millis(&self, now: DateTime<Utc>) -> i64 {
        self.target.signed_duration_since(now).num_milliseconds()
    }

    pub fn evaluate<C>(&mut self, celebration: &mut C) -> Evaluation
    where
        C: CelebrationTrigger + ?Sized,
    {
        self.evaluate_at(Utc::now(), celebration)
    }

    /// Recompute the countdown for `now`. The celebration is invoked only on
    /// the `Counting -> Expired` edge.
    pub fn evaluate_at<C>(&mut self, now: DateTime<Utc>, celebration: &mut C) -> Evaluation
    where
        C: CelebrationTrigger + ?Sized,
    {
        let remaining = self.remaining_millis(now);
        let mut just_expired = false;

        if remaining > 0 && !self.phase.is_expired() {
            self.last_state = CountdownState::from_millis(remaining);
        } else {
            if !self.phase.is_expired() {
                log::info!("Countdown reached zero at {}", now.to_rfc3339());
                self.phase = CountdownPhase::Expired;
                just_expired = true;
                celebration.celebrate();
            }
            self.last_state = CountdownState::ZERO;
        }

        Evaluation {
            state: self.last_state,
            phase: self.phase,
            just_expired,
        }
    }
}
