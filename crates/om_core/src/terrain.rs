use serde::{Deserialize, Serialize};

/// Terrain categories for overmap generation, ordered from lowest
/// normalized noise value to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerrainKind {
    #[default]
    DeepWater,
    Water,
    Sand,
    Grass,
    Forest,
}

impl TerrainKind {
    /// Returns all terrain kinds in classification order.
    pub fn all() -> &'static [TerrainKind] {
        &[
            TerrainKind::DeepWater,
            TerrainKind::Water,
            TerrainKind::Sand,
            TerrainKind::Grass,
            TerrainKind::Forest,
        ]
    }

    /// Returns a display name for this terrain kind.
    pub fn name(&self) -> &'static str {
        match self {
            TerrainKind::DeepWater => "Deep Water",
            TerrainKind::Water => "Water",
            TerrainKind::Sand => "Sand",
            TerrainKind::Grass => "Grass",
            TerrainKind::Forest => "Forest",
        }
    }

    /// Returns the RGB color for this terrain kind.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Self::DeepWater => [0, 105, 148],  // Deep ocean blue
            Self::Water => [0, 191, 255],      // Cyan blue
            Self::Sand => [222, 184, 135],     // Tan/burlywood
            Self::Grass => [50, 205, 50],      // Lime green
            Self::Forest => [0, 100, 0],       // Dark green
        }
    }

    /// Returns the RGBA color for this terrain kind.
    pub fn color(&self) -> [u8; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, 255]
    }

    /// Whether this kind is a water tile. The shell treats water as
    /// impassable and both water kinds share a place-name pool.
    pub fn is_water(&self) -> bool {
        matches!(self, Self::DeepWater | Self::Water)
    }
}
