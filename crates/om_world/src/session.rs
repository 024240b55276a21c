use om_core::TerrainKind;
use om_noise::{MapError, ProfileError, TerrainMap, MIN_SCALE};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::definition::MapDefinition;
use crate::naming::{scatter_names, PlaceName};

/// Error type for session construction.
#[derive(Debug, PartialEq)]
pub enum SessionError {
    Map(MapError),
    Profile(ProfileError),
}

impl From<MapError> for SessionError {
    fn from(err: MapError) -> Self {
        Self::Map(err)
    }
}

impl From<ProfileError> for SessionError {
    fn from(err: ProfileError) -> Self {
        Self::Profile(err)
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Map(e) => write!(f, "map error: {}", e),
            Self::Profile(e) => write!(f, "profile error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

/// A generation session owning the live seed, scale, and the last
/// generated map and place names.
///
/// The session replaces ambient generation state: a shell constructs
/// one at startup and calls back into it on re-seed or rescale
/// commands. Generation is synchronous; the stored map and names are
/// swapped wholesale after each run, never edited in place.
///
/// Two independent random streams are in play: the terrain noise is a
/// pure function of the current seed, while seed picking and place
/// naming draw from a session-owned ChaCha8 stream. Changing the scale
/// therefore never perturbs naming through the terrain field.
#[derive(Debug)]
pub struct MapSession {
    definition: MapDefinition,
    rng: ChaCha8Rng,
    map: TerrainMap,
    names: Vec<PlaceName>,
}

impl MapSession {
    /// Start a session from a definition, with naming randomness drawn
    /// from OS entropy.
    ///
    /// # Errors
    /// Rejects zero dimensions and invalid threshold profiles.
    pub fn new(definition: MapDefinition) -> Result<Self, SessionError> {
        Self::with_rng(definition, ChaCha8Rng::from_entropy())
    }

    /// Start a session with a seeded naming stream. Terrain output is
    /// unaffected by the choice; this exists so naming and reseeding
    /// can be reproduced in tests.
    pub fn with_rng_seed(definition: MapDefinition, rng_seed: u64) -> Result<Self, SessionError> {
        Self::with_rng(definition, ChaCha8Rng::seed_from_u64(rng_seed))
    }

    fn with_rng(mut definition: MapDefinition, rng: ChaCha8Rng) -> Result<Self, SessionError> {
        definition.profile.validate()?;
        definition.scale = definition.scale.max(MIN_SCALE);
        let map = TerrainMap::generate(
            definition.width,
            definition.height,
            definition.seed,
            definition.scale,
            &definition.profile,
        )?;
        let mut session = Self {
            definition,
            rng,
            map,
            names: Vec::new(),
        };
        session.names = session.scatter();
        Ok(session)
    }

    fn scatter(&mut self) -> Vec<PlaceName> {
        scatter_names(
            &self.map,
            &self.definition.pools,
            self.definition.name_probability,
            &mut self.rng,
        )
    }

    /// Rebuild the map and names from the current seed and scale.
    fn regenerate(&mut self) -> Result<(), MapError> {
        self.map = TerrainMap::generate(
            self.definition.width,
            self.definition.height,
            self.definition.seed,
            self.definition.scale,
            &self.definition.profile,
        )?;
        self.names = self.scatter();
        Ok(())
    }

    /// Pick a fresh seed and regenerate the whole map and name list.
    pub fn regenerate_with_new_seed(&mut self) -> Result<(), MapError> {
        self.definition.seed = self.rng.gen();
        self.regenerate()
    }

    /// Add `delta` to the scale (negative shrinks it), clamp to
    /// `MIN_SCALE`, and regenerate.
    pub fn adjust_scale(&mut self, delta: f64) -> Result<(), MapError> {
        self.definition.scale = (self.definition.scale + delta).max(MIN_SCALE);
        self.regenerate()
    }

    /// Terrain kind at the given tile, or `None` out of bounds.
    pub fn kind_at(&self, x: u32, y: u32) -> Option<TerrainKind> {
        self.map.get(x, y)
    }

    pub fn seed(&self) -> u32 {
        self.definition.seed
    }

    pub fn scale(&self) -> f64 {
        self.definition.scale
    }

    pub fn map(&self) -> &TerrainMap {
        &self.map
    }

    pub fn place_names(&self) -> &[PlaceName] {
        &self.names
    }

    pub fn definition(&self) -> &MapDefinition {
        &self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use om_noise::TerrainProfile;

    fn session() -> MapSession {
        MapSession::with_rng_seed(MapDefinition::default(), 7).unwrap()
    }

    #[test]
    fn construction_generates_a_full_map() {
        let s = session();
        assert_eq!(s.map().tiles().len(), 10 * 8);
        assert_eq!(s.seed(), 42);
        assert_eq!(s.scale(), 0.1);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let def = MapDefinition {
            width: 0,
            ..MapDefinition::default()
        };
        let err = MapSession::with_rng_seed(def, 7).unwrap_err();
        assert_eq!(
            err,
            SessionError::Map(MapError::InvalidDimension { width: 0, height: 8 })
        );
    }

    #[test]
    fn rejects_invalid_profile() {
        // A bad table can only reach a session through deserialization,
        // since TerrainProfile::new validates.
        let bad: TerrainProfile = ron::from_str(
            "(bands: [(upper: 0.9, kind: Water), (upper: 0.5, kind: Forest)])",
        )
        .unwrap();
        let def = MapDefinition {
            profile: bad,
            ..MapDefinition::default()
        };
        assert!(matches!(
            MapSession::with_rng_seed(def, 7).unwrap_err(),
            SessionError::Profile(_)
        ));
    }

    #[test]
    fn two_sessions_with_the_same_seed_agree() {
        let a = session();
        let b = session();
        assert_eq!(a.map(), b.map());
    }

    #[test]
    fn reseed_replaces_seed_and_map() {
        let mut s = session();
        let old_seed = s.seed();
        let old_map = s.map().clone();
        s.regenerate_with_new_seed().unwrap();
        assert_ne!(s.seed(), old_seed);
        assert_ne!(s.map(), &old_map);
    }

    #[test]
    fn consecutive_reseeds_pick_distinct_seeds() {
        let mut s = session();
        let mut seeds = vec![s.seed()];
        for _ in 0..5 {
            s.regenerate_with_new_seed().unwrap();
            seeds.push(s.seed());
        }
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 6);
    }

    #[test]
    fn adjust_scale_clamps_at_minimum() {
        let mut s = session();
        for _ in 0..4 {
            s.adjust_scale(-1000.0).unwrap();
            assert_eq!(s.scale(), MIN_SCALE);
        }
    }

    #[test]
    fn adjust_scale_does_not_touch_the_seed() {
        let mut s = session();
        let seed = s.seed();
        s.adjust_scale(0.02).unwrap();
        assert_eq!(s.seed(), seed);
        assert!((s.scale() - 0.12).abs() < 1e-12);
    }

    #[test]
    fn kind_at_reads_the_stored_map() {
        let s = session();
        for y in 0..8 {
            for x in 0..10 {
                assert_eq!(s.kind_at(x, y), s.map().get(x, y));
            }
        }
        assert_eq!(s.kind_at(10, 0), None);
    }

    #[test]
    fn names_are_replaced_on_regeneration() {
        let def = MapDefinition {
            name_probability: 1.0,
            ..MapDefinition::default()
        };
        let mut s = MapSession::with_rng_seed(def, 7).unwrap();
        let before: Vec<_> = s.place_names().to_vec();
        assert_eq!(before.len(), 10 * 8);
        s.regenerate_with_new_seed().unwrap();
        assert_eq!(s.place_names().len(), 10 * 8);
        assert_ne!(s.place_names(), &before[..]);
    }
}
