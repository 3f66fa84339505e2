// Particle state and per-frame update
//
// Each particle owns its position, velocity, and render size. The update
// step is pure arithmetic over in-memory state: edge reflection, Euler
// integration, then either the pointer interaction branch or the settling
// branch that decays size and velocity back toward their rest values.

use crate::app::config::{
    INTERACTION_RADIUS, MAX_ZOOM_SIZE, MIN_POINTER_DISTANCE, REPEL_STRENGTH, SCATTER_IMPULSE,
    SIZE_DECAY, VELOCITY_DECAY,
};
use rand::Rng;

/// A simulated point with position, velocity, and render size
///
/// `base_size` and `(base_vx, base_vy)` are the rest state the particle
/// returns to after a pointer pass or a scatter burst; both are fixed at
/// creation. Invariant: `size >= base_size` after every update.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,

    /// Current render radius, inflated near the pointer
    pub size: f64,

    /// Rest radius, drawn uniformly from [0.5, 2.0) at creation
    pub base_size: f64,

    pub vx: f64,
    pub vy: f64,

    /// Rest drift, each component drawn uniformly from [-0.25, 0.25)
    pub base_vx: f64,
    pub base_vy: f64,
}

impl Particle {
    /// Create a particle at a position with random rest size and drift
    pub fn new(x: f64, y: f64, rng: &mut impl Rng) -> Self {
        let base_size = rng.gen::<f64>() * 1.5 + 0.5;
        let base_vx = rng.gen::<f64>() * 0.5 - 0.25;
        let base_vy = rng.gen::<f64>() * 0.5 - 0.25;
        Self {
            x,
            y,
            size: base_size,
            base_size,
            vx: base_vx,
            vy: base_vy,
            base_vx,
            base_vy,
        }
    }

    /// Advance one simulation step
    ///
    /// Units are virtual pixels per frame. The edge test is exclusive and
    /// only negates velocity: a particle that overshoots the boundary turns
    /// around and drifts back over the following frames instead of being
    /// clamped, so brief out-of-bounds excursions are expected.
    ///
    /// `pointer` is `None` until the first mouse movement; no pointer means
    /// the settling branch runs unconditionally.
    pub fn update(&mut self, width: f64, height: f64, pointer: Option<(f64, f64)>) {
        if self.x > width || self.x < 0.0 {
            self.vx = -self.vx;
        }
        if self.y > height || self.y < 0.0 {
            self.vy = -self.vy;
        }

        self.x += self.vx;
        self.y += self.vy;

        match pointer {
            Some((px, py)) => {
                let dx = px - self.x;
                let dy = py - self.y;
                let distance = (dx * dx + dy * dy).sqrt();

                if distance < INTERACTION_RADIUS {
                    // Size grows linearly from base_size at the radius edge
                    // to MAX_ZOOM_SIZE under the pointer
                    let closeness = 1.0 - distance / INTERACTION_RADIUS;
                    self.size = self.base_size + closeness * (MAX_ZOOM_SIZE - self.base_size);

                    // Repulsive impulse away from the pointer. (dx, dy)
                    // points toward the pointer, so subtracting pushes the
                    // particle away. The distance in the force term is
                    // clamped to keep the impulse finite when the pointer
                    // sits directly on the particle.
                    let force = 1.0 / distance.max(MIN_POINTER_DISTANCE);
                    self.vx -= force * dx * REPEL_STRENGTH;
                    self.vy -= force * dy * REPEL_STRENGTH;
                } else {
                    self.settle();
                }
            }
            None => self.settle(),
        }
    }

    /// Decay size and velocity toward their rest values
    ///
    /// Size recovers fast (~10 frames) and velocity slowly (~100 frames):
    /// visual settling should read quicker than drift recovery.
    fn settle(&mut self) {
        self.size = self.size * SIZE_DECAY + self.base_size * (1.0 - SIZE_DECAY);
        if self.size < self.base_size {
            self.size = self.base_size;
        }

        self.vx = self.vx * VELOCITY_DECAY + self.base_vx * (1.0 - VELOCITY_DECAY);
        self.vy = self.vy * VELOCITY_DECAY + self.base_vy * (1.0 - VELOCITY_DECAY);
    }

    /// Apply a one-shot random velocity burst (scroll perturbation)
    ///
    /// Each axis gets an independent value in [-SCATTER_IMPULSE,
    /// SCATTER_IMPULSE). Repeated scroll events compound; the settling
    /// branch bleeds the excess off over subsequent frames.
    pub fn scatter(&mut self, rng: &mut impl Rng) {
        self.vx += rng.gen_range(-SCATTER_IMPULSE..SCATTER_IMPULSE);
        self.vy += rng.gen_range(-SCATTER_IMPULSE..SCATTER_IMPULSE);
    }
}
