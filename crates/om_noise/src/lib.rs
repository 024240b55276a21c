pub mod perlin;
pub mod profile;
pub mod terrain_map;

pub use perlin::PerlinField;
pub use profile::{Band, ProfileError, TerrainProfile};
pub use terrain_map::{MapError, TerrainMap, MIN_SCALE};
