//! Celebration overlay shown while the summary's celebration timer runs.

use std::time::Instant;

use eframe::egui;
use rand::Rng;

pub const PARTICLE_COUNT: usize = 50;

pub const COLORS: [egui::Color32; 5] = [
    egui::Color32::from_rgb(0xff, 0x6b, 0x9d),
    egui::Color32::from_rgb(0xff, 0xa6, 0xc1),
    egui::Color32::from_rgb(0xa8, 0xed, 0xea),
    egui::Color32::from_rgb(0xfe, 0xd6, 0xe3),
    egui::Color32::from_rgb(0xe0, 0xc3, 0xfc),
];

/// Particle positions are fractions of the overlay rect so a resize keeps the shower intact.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub delay: f32,
    pub fall_secs: f32,
    pub size: f32,
    pub spin: f32,
    pub color: egui::Color32,
}

#[derive(Debug, Clone)]
pub struct Confetti {
    started: Instant,
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn generate<R: Rng>(rng: &mut R, count: usize, now: Instant) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                delay: rng.gen_range(0.0..0.5),
                fall_secs: rng.gen_range(2.0..3.0),
                size: rng.gen_range(6.0..12.0),
                spin: rng.gen_range(-6.0..6.0),
                color: COLORS[rng.gen_range(0..COLORS.len())],
            })
            .collect();
        Self {
            started: now,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Vertical progress of a particle in 0..=1, or `None` before it starts falling.
    pub fn progress(particle: &Particle, elapsed: f32) -> Option<f32> {
        let t = elapsed - particle.delay;
        (t >= 0.0).then(|| (t / particle.fall_secs).min(1.0))
    }

    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        for particle in &self.particles {
            let Some(progress) = Self::progress(particle, elapsed) else {
                continue;
            };
            let center = egui::pos2(
                rect.left() + particle.x * rect.width(),
                rect.top() - particle.size + progress * (rect.height() + particle.size * 2.0),
            );
            let angle = particle.spin * elapsed;
            let (sin, cos) = angle.sin_cos();
            let half = particle.size / 2.0;
            let corners = [(-half, -half / 2.0), (half, -half / 2.0), (half, half / 2.0), (-half, half / 2.0)]
                .map(|(dx, dy)| center + egui::vec2(dx * cos - dy * sin, dx * sin + dy * cos));
            let alpha = 1.0 - progress * 0.6;
            painter.add(egui::Shape::convex_polygon(
                corners.to_vec(),
                particle.color.gamma_multiply(alpha),
                egui::Stroke::NONE,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn generates_requested_count_in_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let confetti = Confetti::generate(&mut rng, PARTICLE_COUNT, Instant::now());
        assert_eq!(confetti.particles().len(), 50);
        for particle in confetti.particles() {
            assert!((0.0..1.0).contains(&particle.x));
            assert!(COLORS.contains(&particle.color));
        }
    }

    #[test]
    fn same_seed_same_shower() {
        let now = Instant::now();
        let a = Confetti::generate(&mut StdRng::seed_from_u64(42), 10, now);
        let b = Confetti::generate(&mut StdRng::seed_from_u64(42), 10, now);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn progress_waits_for_delay_then_saturates() {
        let particle = Particle {
            x: 0.5,
            delay: 0.25,
            fall_secs: 2.0,
            size: 8.0,
            spin: 1.0,
            color: COLORS[0],
        };
        assert_eq!(Confetti::progress(&particle, 0.1), None);
        assert_eq!(Confetti::progress(&particle, 1.25), Some(0.5));
        assert_eq!(Confetti::progress(&particle, 10.0), Some(1.0));
    }
}
