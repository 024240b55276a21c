use noise::{NoiseFn, Perlin};
use om_core::NoiseField;

/// Seeded gradient noise field backed by classic Perlin noise.
///
/// Output range: [-1.0, 1.0]. The field is a pure function of
/// (seed, x, y); reseeding replaces it wholesale.
pub struct PerlinField {
    noise: Perlin,
    seed: u32,
}

impl PerlinField {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            seed,
        }
    }

    /// Re-initialize the field with a new seed, discarding the old one.
    pub fn reseed(&mut self, seed: u32) {
        self.noise = Perlin::new(seed);
        self.seed = seed;
    }

    /// Returns the seed this field was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseField for PerlinField {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.noise.get([x, y]).clamp(-1.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "Perlin"
    }
}
