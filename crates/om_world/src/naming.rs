//! Sparse place-name overlay for generated terrain.
//!
//! A small random subset of cells receives a name drawn from the pool
//! for its terrain kind. Naming randomness comes from its own RNG
//! stream, never from the terrain noise, so rescaling the map cannot
//! perturb which cells get named for unrelated reasons.

use om_core::{TerrainKind, TilePos};
use om_noise::TerrainMap;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Default per-cell probability of receiving a place name.
pub const NAME_PROBABILITY: f64 = 0.01;

/// A named location on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceName {
    pub name: String,
    pub pos: TilePos,
}

/// Candidate name pools per terrain kind. Both water kinds share the
/// water pool. An empty pool means cells of that kind go unnamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamePools {
    pub water: Vec<String>,
    pub sand: Vec<String>,
    pub grass: Vec<String>,
    pub forest: Vec<String>,
}

impl Default for NamePools {
    fn default() -> Self {
        fn pool(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }
        Self {
            water: pool(&["Azure Bay", "Red Sea", "Crystal Lake", "Silent Depths"]),
            sand: pool(&["Golden Dunes", "Sandy Hollow", "Sunburn Flats"]),
            grass: pool(&["Greenfield", "Mossy Plain", "Emerald Expanse"]),
            forest: pool(&["Whispering Woods", "Oakshade", "Darkroot Forest"]),
        }
    }
}

impl NamePools {
    /// Get the candidate pool for a terrain kind.
    pub fn pool_for(&self, kind: TerrainKind) -> &[String] {
        match kind {
            TerrainKind::DeepWater | TerrainKind::Water => &self.water,
            TerrainKind::Sand => &self.sand,
            TerrainKind::Grass => &self.grass,
            TerrainKind::Forest => &self.forest,
        }
    }

    /// Pick a name for a cell of the given kind, uniformly at random
    /// from its pool. Returns `None` when the pool is empty.
    pub fn assign(&self, kind: TerrainKind, rng: &mut ChaCha8Rng) -> Option<&str> {
        self.pool_for(kind).choose(rng).map(|s| s.as_str())
    }
}

/// Scatter place names over a generated map.
///
/// Each cell independently receives a name with the given probability.
/// The returned list is a complete replacement for any previous one;
/// names are never carried over between generations.
pub fn scatter_names(
    map: &TerrainMap,
    pools: &NamePools,
    probability: f64,
    rng: &mut ChaCha8Rng,
) -> Vec<PlaceName> {
    let mut names = Vec::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            if rng.gen::<f64>() >= probability {
                continue;
            }
            let Some(kind) = map.get(x, y) else { continue };
            if let Some(name) = pools.assign(kind, rng) {
                names.push(PlaceName {
                    name: name.to_string(),
                    pos: TilePos::new(x, y),
                });
            }
        }
    }
    names
}
