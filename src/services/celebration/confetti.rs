//! Confetti particle simulation.
//!
//! Physics run in fixed 60 Hz frames in surface pixel space: each frame a
//! particle moves along its launch direction, falls by a constant gravity
//! step and loses velocity by its burst's decay factor. Particles fade out and
//! retire after [`PARTICLE_LIFETIME_TICKS`] frames.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{celebration_plan, Burst, CelebrationTrigger, ScheduledBurst, CELEBRATION_PALETTE};
use crate::models::countdown::RgbaColor;

pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);
pub const PARTICLE_LIFETIME_TICKS: u32 = 200;

const GRAVITY_STEP: f32 = 3.0;
const BASE_PARTICLE_SIZE: f32 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Direction of travel in radians, screen coordinates (y grows downward).
    pub heading: f32,
    pub velocity: f32,
    pub decay: f32,
    pub scalar: f32,
    pub wobble: f32,
    pub color: RgbaColor,
    pub ticks: u32,
}

impl Particle {
    fn advance(&mut self) {
        self.x += self.heading.cos() * self.velocity;
        self.y += self.heading.sin() * self.velocity + GRAVITY_STEP;
        self.velocity *= self.decay;
        self.wobble += 0.1;
        self.ticks += 1;
    }

    /// Fraction of life left, used as paint opacity.
    pub fn opacity(&self) -> f32 {
        1.0 - self.ticks as f32 / PARTICLE_LIFETIME_TICKS as f32
    }

    /// Painted width and height in points. Width oscillates to fake a flutter.
    pub fn size(&self) -> (f32, f32) {
        let side = BASE_PARTICLE_SIZE * self.scalar;
        (side * self.wobble.cos().abs().max(0.2), side)
    }

    fn is_spent(&self) -> bool {
        self.ticks >= PARTICLE_LIFETIME_TICKS
    }
}

/// Plays back the celebration schedule and holds the live particles.
pub struct ConfettiField {
    enabled: bool,
    launched_at: Option<Instant>,
    pending: VecDeque<ScheduledBurst>,
    particles: Vec<Particle>,
    last_frame: Option<Instant>,
    rng: StdRng,
}

impl Default for ConfettiField {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfettiField {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic field for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            enabled: true,
            launched_at: None,
            pending: VecDeque::new(),
            particles: Vec::new(),
            last_frame: None,
            rng,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn has_launched(&self) -> bool {
        self.launched_at.is_some()
    }

    /// True while bursts are still scheduled or particles are on screen.
    pub fn is_active(&self) -> bool {
        !self.pending.is_empty() || !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Schedule the celebration starting at `now`. Later calls are ignored.
    pub fn launch(&mut self, now: Instant) {
        if !self.enabled {
            log::debug!("Confetti disabled; ignoring launch");
            return;
        }
        if self.launched_at.is_some() {
            log::debug!("Confetti already launched; ignoring repeat trigger");
            return;
        }

        self.launched_at = Some(now);
        self.last_frame = Some(now);
        self.pending = celebration_plan().into();
        log::info!("Launching confetti with {} scheduled bursts", self.pending.len());
    }

    /// Emit every burst due by `now` and advance physics in whole frames.
    /// `surface` is the paint area size in points.
    pub fn step(&mut self, now: Instant, surface: (f32, f32)) {
        let Some(launched_at) = self.launched_at else {
            return;
        };

        while let Some(next) = self.pending.front() {
            if launched_at + next.offset > now {
                break;
            }
            if let Some(scheduled) = self.pending.pop_front() {
                self.emit(&scheduled.burst, surface);
            }
        }

        let last_frame = self.last_frame.unwrap_or(launched_at);
        let elapsed = now.saturating_duration_since(last_frame);
        let frames = (elapsed.as_micros() / FRAME_INTERVAL.as_micros()) as u32;
        if frames == 0 {
            return;
        }

        for particle in &mut self.particles {
            for _ in 0..frames.min(PARTICLE_LIFETIME_TICKS) {
                particle.advance();
            }
        }
        self.particles.retain(|particle| !particle.is_spent());
        self.last_frame = Some(last_frame + FRAME_INTERVAL * frames);
    }

    fn emit(&mut self, burst: &Burst, surface: (f32, f32)) {
        let origin_x = burst.origin.x * surface.0;
        let origin_y = burst.origin.y * surface.1;
        let angle = burst.angle.to_radians();
        let spread = burst.spread.to_radians();

        for index in 0..burst.particle_count {
            let jitter: f32 = self.rng.gen();
            let speed: f32 = self.rng.gen();
            let color = CELEBRATION_PALETTE[index as usize % CELEBRATION_PALETTE.len()];
            self.particles.push(Particle {
                x: origin_x,
                y: origin_y,
                heading: -angle + (0.5 * spread - jitter * spread),
                velocity: burst.start_velocity * 0.5 + speed * burst.start_velocity,
                decay: burst.decay,
                scalar: burst.scalar,
                wobble: self.rng.gen_range(0.0..10.0),
                color,
                ticks: 0,
            });
        }
    }
}

impl CelebrationTrigger for ConfettiField {
    fn celebrate(&mut self) {
        self.launch(Instant::now());
    }
}
