//! Particle explosion style: a radial burst from a random layout point
//! every three seconds, particles falling under gravity and fading out.

use crate::surface::Surface;
use starweave_core::{Hsla, Point, Srgb, Xorshift64};
use std::f64::consts::TAU;

/// Milliseconds between bursts.
pub const BURST_INTERVAL_MS: f64 = 3000.0;
/// Particles per burst.
pub const BURST_SIZE: usize = 50;
/// Downward acceleration per frame.
const GRAVITY: f64 = 0.1;

/// One burst particle; removed the frame its life reaches zero.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Remaining life in `[0, 1]`, drained by `decay` each frame.
    pub life: f64,
    pub decay: f64,
    pub hue: f64,
    pub size: f64,
}

/// Rolling particle pool plus the burst timer. Owned by the renderer and
/// cleared on every reset.
#[derive(Debug, Clone, Default)]
pub struct ExplosionState {
    pub particles: Vec<Particle>,
    pub last_burst: f64,
}

pub(crate) fn render(
    state: &mut ExplosionState,
    rng: &mut Xorshift64,
    points: &[Point],
    time: f64,
    surface: &mut dyn Surface,
) {
    surface.fade(Srgb::BLACK, 0.05);

    if time - state.last_burst > BURST_INTERVAL_MS {
        if !points.is_empty() {
            let origin = points[rng.next_usize(points.len())];
            for i in 0..BURST_SIZE {
                let angle = TAU * i as f64 / BURST_SIZE as f64;
                let speed = rng.next_f64() * 5.0 + 2.0;
                state.particles.push(Particle {
                    x: origin.x,
                    y: origin.y,
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                    life: 1.0,
                    decay: rng.next_f64() * 0.02 + 0.01,
                    hue: origin.hue,
                    size: rng.next_f64() * 4.0 + 2.0,
                });
            }
        }
        state.last_burst = time;
    }

    state.particles.retain_mut(|p| {
        p.x += p.vx;
        p.y += p.vy;
        p.vy += GRAVITY;
        p.life -= p.decay;
        if p.life <= 0.0 {
            return false;
        }
        surface.fill_circle(p.x, p.y, p.size * p.life, Hsla::new(p.hue, 1.0, 0.5, p.life));
        true
    });
}
