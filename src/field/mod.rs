// Particle field - the simulation collection and the proximity pass
//
// The field owns the particles and the RNG that seeds them. Population is
// proportional to viewport area so density stays constant across terminal
// sizes, and the field is rebuilt on resize to keep it that way.

mod particle;

pub use particle::Particle;

use crate::app::config::{AREA_PER_PARTICLE, LINK_OPACITY_CEILING, MAX_LINK_DISTANCE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A proximity line between two particles, ready to draw
///
/// Opacity fades linearly from LINK_OPACITY_CEILING at distance zero to 0.0
/// at MAX_LINK_DISTANCE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

/// The collection of particles filling the viewport
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field sized to the viewport, populated from entropy
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Create a field with a caller-supplied RNG (fixed seeds in tests)
    pub fn with_rng(width: f64, height: f64, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            width,
            height,
            rng,
        };
        field.initialize(width, height);
        field
    }

    /// Clear and repopulate for the given viewport
    ///
    /// Population is `floor(width * height / AREA_PER_PARTICLE)`, roughly
    /// one particle per 100x100 px patch, placed uniformly at random.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.particles.clear();

        let count = (width * height / AREA_PER_PARTICLE) as usize;
        for _ in 0..count {
            let x = self.rng.gen::<f64>() * width;
            let y = self.rng.gen::<f64>() * height;
            let particle = Particle::new(x, y, &mut self.rng);
            self.particles.push(particle);
        }

        tracing::debug!(
            width,
            height,
            count = self.particles.len(),
            "particle field initialized"
        );
    }

    /// Rebuild the field for new viewport dimensions
    ///
    /// Repopulating (rather than keeping the old collection) holds density
    /// constant when the terminal grows or shrinks.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.initialize(width, height);
    }

    /// Advance every particle one simulation step
    pub fn step(&mut self, pointer: Option<(f64, f64)>) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.update(width, height, pointer);
        }
    }

    /// Apply a scatter burst to every particle
    pub fn scatter(&mut self) {
        let rng = &mut self.rng;
        for particle in &mut self.particles {
            particle.scatter(rng);
        }
    }

    /// The pairwise proximity pass
    ///
    /// Walks every unordered pair with `a <= b` by index, including the
    /// self-pair, and emits a link for each pair closer than
    /// MAX_LINK_DISTANCE. Self-pairs yield zero-length links; they cost
    /// nothing to draw (the particle's own dot covers the same spot) and
    /// keeping them makes the pair walk uniform.
    ///
    /// O(n^2) per frame, acceptable because the density formula caps n at
    /// roughly one particle per 10,000 px^2.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for a in 0..self.particles.len() {
            for b in a..self.particles.len() {
                let pa = &self.particles[a];
                let pb = &self.particles[b];
                let dist = (pa.x - pb.x).hypot(pa.y - pb.y);

                if dist < MAX_LINK_DISTANCE {
                    links.push(Link {
                        from: (pa.x, pa.y),
                        to: (pb.x, pb.y),
                        opacity: (1.0 - dist / MAX_LINK_DISTANCE) * LINK_OPACITY_CEILING,
                    });
                }
            }
        }
        links
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
