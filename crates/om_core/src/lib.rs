pub mod coords;
pub mod noise;
pub mod terrain;

pub use coords::TilePos;
pub use noise::NoiseField;
pub use terrain::TerrainKind;
