use om_core::{NoiseField, TerrainKind};
use rayon::prelude::*;

use crate::perlin::PerlinField;
use crate::profile::TerrainProfile;

/// Smallest permitted sample scale. Scale adjustments clamp here so
/// the sampling frequency can never degenerate.
pub const MIN_SCALE: f64 = 0.01;

/// Error type for map generation.
#[derive(Debug, PartialEq, Eq)]
pub enum MapError {
    InvalidDimension { width: u32, height: u32 },
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "invalid map dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for MapError {}

/// A fully generated terrain grid.
///
/// Each cell holds exactly one `TerrainKind`; the map is only
/// constructed after every cell has been classified, so readers never
/// observe a partially generated grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMap {
    width: u32,
    height: u32,
    tiles: Vec<TerrainKind>,
}

impl TerrainMap {
    /// Generate a map by sampling seeded Perlin noise at the given
    /// scale and classifying each cell through the profile.
    ///
    /// # Arguments
    /// * `width`, `height` - Grid dimensions in tiles, both nonzero
    /// * `seed` - Noise seed; equal seeds produce equal maps
    /// * `scale` - Sample frequency, clamped to `MIN_SCALE`
    pub fn generate(
        width: u32,
        height: u32,
        seed: u32,
        scale: f64,
        profile: &TerrainProfile,
    ) -> Result<Self, MapError> {
        let field = PerlinField::new(seed);
        Self::generate_with_field(&field, width, height, scale, profile)
    }

    /// Generate a map from an arbitrary noise field.
    ///
    /// Cells are independent of each other, so classification runs in
    /// parallel per cell; the result is identical to a sequential
    /// row-major pass.
    pub fn generate_with_field(
        field: &dyn NoiseField,
        width: u32,
        height: u32,
        scale: f64,
        profile: &TerrainProfile,
    ) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::InvalidDimension { width, height });
        }
        let scale = scale.max(MIN_SCALE);

        let total = width as usize * height as usize;
        let tiles: Vec<TerrainKind> = (0..total)
            .into_par_iter()
            .map(|idx| {
                let x = (idx % width as usize) as f64;
                let y = (idx / width as usize) as f64;
                let value = field.sample(x * scale, y * scale);
                profile.classify(value)
            })
            .collect();

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the terrain kind at specific coordinates.
    pub fn get(&self, x: u32, y: u32) -> Option<TerrainKind> {
        if x < self.width && y < self.height {
            Some(self.tiles[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[TerrainKind] {
        &self.tiles
    }

    /// Count of tiles per terrain kind, in classification order.
    pub fn census(&self) -> Vec<(TerrainKind, usize)> {
        TerrainKind::all()
            .iter()
            .map(|&kind| (kind, self.tiles.iter().filter(|&&t| t == kind).count()))
            .collect()
    }

    /// Convert the grid to RGBA image bytes, row-major, one pixel per
    /// tile. This is the shell-facing view of the map.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.tiles.len() * 4);
        for tile in &self.tiles {
            data.extend_from_slice(&tile.color());
        }
        data
    }
}
