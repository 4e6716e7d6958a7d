//! Pure view model for the countdown screen.
//!
//! Everything the window shows is derived here so the egui layer only paints.

use crate::models::countdown::{CountdownPhase, CountdownState};

pub const STATUS_COUNTING: &str = "Keep building until then!";
pub const STATUS_EXPIRED: &str = "Decisions are out!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitCell {
    pub label: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewModel {
    pub cells: [UnitCell; 4],
    pub target_caption: String,
    pub timezone_caption: String,
    pub reference_caption: String,
    pub status: &'static str,
    pub expired: bool,
}

pub struct ViewInput<'a> {
    pub state: CountdownState,
    pub phase: CountdownPhase,
    pub viewer_timezone: &'a str,
    pub formatted_target: &'a str,
    pub formatted_reference: &'a str,
}

pub fn build_view(input: &ViewInput<'_>) -> ViewModel {
    let cells = input
        .state
        .units()
        .map(|(unit, value)| UnitCell {
            label: unit.label(),
            value,
        });
    let expired = input.phase.is_expired();

    ViewModel {
        cells,
        target_caption: format!("Decisions by: {}", input.formatted_target),
        timezone_caption: format!("Your timezone: {}", input.viewer_timezone),
        reference_caption: format!("Current time in SF: {} PT", input.formatted_reference),
        status: if expired {
            STATUS_EXPIRED
        } else {
            STATUS_COUNTING
        },
        expired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counting_view() {
        let view = build_view(&ViewInput {
            state: CountdownState {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6,
            },
            phase: CountdownPhase::Counting,
            viewer_timezone: "Europe/Berlin",
            formatted_target: "Mar 13, 2025 8:59 AM CET",
            formatted_reference: "Mar 10th 09:00",
        });

        assert_eq!(
            view,
            ViewModel {
                cells: [
                    UnitCell { label: "Days", value: 3 },
                    UnitCell { label: "Hours", value: 4 },
                    UnitCell { label: "Minutes", value: 5 },
                    UnitCell { label: "Seconds", value: 6 },
                ],
                target_caption: "Decisions by: Mar 13, 2025 8:59 AM CET".to_string(),
                timezone_caption: "Your timezone: Europe/Berlin".to_string(),
                reference_caption: "Current time in SF: Mar 10th 09:00 PT".to_string(),
                status: STATUS_COUNTING,
                expired: false,
            }
        );
    }

    #[test]
    fn expired_view_shows_zeros_and_done_status() {
        let view = build_view(&ViewInput {
            state: CountdownState::ZERO,
            phase: CountdownPhase::Expired,
            viewer_timezone: "UTC",
            formatted_target: "Mar 13, 2025 7:59 AM UTC",
            formatted_reference: "Mar 13th 12:00",
        });

        assert!(view.expired);
        assert_eq!(view.status, "Decisions are out!");
        assert!(view.cells.iter().all(|cell| cell.value == 0));
    }
}
