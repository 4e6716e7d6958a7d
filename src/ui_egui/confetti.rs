//! Paints confetti particles on a foreground layer above the countdown.

use egui::{Color32, LayerId, Order, Pos2, Rect, Vec2};

use crate::services::celebration::Particle;

pub fn paint_confetti(ctx: &egui::Context, particles: &[Particle]) {
    if particles.is_empty() {
        return;
    }

    let origin = ctx.screen_rect().min;
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, egui::Id::new("confetti")));
    for particle in particles {
        let (width, height) = particle.size();
        let rect = Rect::from_center_size(
            Pos2::new(origin.x + particle.x, origin.y + particle.y),
            Vec2::new(width, height),
        );
        painter.rect_filled(rect, 1.0, particle_color(particle));
    }
}

fn particle_color(particle: &Particle) -> Color32 {
    let alpha = (particle.opacity().clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgba_unmultiplied(particle.color.r, particle.color.g, particle.color.b, alpha)
}
