use om_noise::TerrainProfile;
use serde::{Deserialize, Serialize};

use crate::naming::{NamePools, NAME_PROBABILITY};

/// Serializable parameter set for a generation session.
///
/// This is the top-level structure a shell hands to the core at
/// session start; everything else (the grid, the place names) is
/// recomputed from it and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDefinition {
    /// Human-readable name for this map.
    pub name: String,
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Noise seed for terrain generation.
    pub seed: u32,
    /// Sample scale; smaller values give smoother, larger features.
    pub scale: f64,
    /// Per-cell probability of a place name.
    pub name_probability: f64,
    /// Threshold bands mapping normalized noise to terrain kinds.
    pub profile: TerrainProfile,
    /// Candidate place names per terrain kind.
    pub pools: NamePools,
}

impl Default for MapDefinition {
    fn default() -> Self {
        Self {
            name: "New Map".to_string(),
            width: 10,
            height: 8,
            seed: 42,
            scale: 0.1,
            name_probability: NAME_PROBABILITY,
            profile: TerrainProfile::default(),
            pools: NamePools::default(),
        }
    }
}
