//! One-shot celebration fired when the countdown expires.
//!
//! The effect is described as a schedule of confetti bursts
//! ([`celebration_plan`]) and played back by a [`ConfettiField`].

mod confetti;

use std::time::Duration;

use crate::models::countdown::RgbaColor;

pub use confetti::{ConfettiField, Particle, FRAME_INTERVAL, PARTICLE_LIFETIME_TICKS};

/// Receives the expiry edge. Implementations must not block and never report
/// failure back to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait CelebrationTrigger {
    fn celebrate(&mut self);
}

pub const CELEBRATION_PALETTE: [RgbaColor; 3] = [
    RgbaColor::new(0xff, 0x6b, 0x00, 0xff),
    RgbaColor::new(0xff, 0x9a, 0x3d, 0xff),
    RgbaColor::new(0xff, 0xbc, 0x7d, 0xff),
];

const BASE_PARTICLE_COUNT: u32 = 200;
const STREAM_DELAY: Duration = Duration::from_millis(1500);
const STREAM_INTERVAL: Duration = Duration::from_millis(40);
const STREAM_DURATION: Duration = Duration::from_millis(3000);
const STREAM_PARTICLES_PER_SIDE: u32 = 2;

/// Launch point as a fraction of the surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

/// Parameters of a single burst of particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub particle_count: u32,
    /// Launch direction in degrees, 90 is straight up.
    pub angle: f32,
    /// Cone width in degrees.
    pub spread: f32,
    pub start_velocity: f32,
    /// Velocity multiplier applied every frame.
    pub decay: f32,
    /// Particle size multiplier.
    pub scalar: f32,
    pub origin: Origin,
}

impl Default for Burst {
    fn default() -> Self {
        Self {
            particle_count: 50,
            angle: 90.0,
            spread: 45.0,
            start_velocity: 45.0,
            decay: 0.9,
            scalar: 1.0,
            origin: Origin { x: 0.5, y: 0.5 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledBurst {
    /// Offset from the moment the celebration was triggered.
    pub offset: Duration,
    pub burst: Burst,
}

/// Full schedule: five layered bursts from the lower middle of the surface,
/// then a stream from both side edges for a few seconds.
pub fn celebration_plan() -> Vec<ScheduledBurst> {
    let center = Origin { x: 0.5, y: 0.7 };
    let layered = |percent: u32, burst: Burst| ScheduledBurst {
        offset: Duration::ZERO,
        burst: Burst {
            particle_count: BASE_PARTICLE_COUNT * percent / 100,
            origin: center,
            ..burst
        },
    };

    let mut plan = vec![
        layered(
            25,
            Burst {
                spread: 26.0,
                start_velocity: 55.0,
                ..Burst::default()
            },
        ),
        layered(
            20,
            Burst {
                spread: 60.0,
                ..Burst::default()
            },
        ),
        layered(
            35,
            Burst {
                spread: 100.0,
                decay: 0.91,
                scalar: 0.8,
                ..Burst::default()
            },
        ),
        layered(
            10,
            Burst {
                spread: 120.0,
                start_velocity: 25.0,
                decay: 0.92,
                scalar: 1.2,
                ..Burst::default()
            },
        ),
        layered(
            10,
            Burst {
                spread: 120.0,
                start_velocity: 45.0,
                ..Burst::default()
            },
        ),
    ];

    let mut elapsed = STREAM_INTERVAL;
    while elapsed < STREAM_DURATION {
        let offset = STREAM_DELAY + elapsed;
        for (angle, x) in [(60.0, 0.0), (120.0, 1.0)] {
            plan.push(ScheduledBurst {
                offset,
                burst: Burst {
                    particle_count: STREAM_PARTICLES_PER_SIDE,
                    angle,
                    spread: 55.0,
                    origin: Origin { x, y: 0.5 },
                    ..Burst::default()
                },
            });
        }
        elapsed += STREAM_INTERVAL;
    }

    plan
}
