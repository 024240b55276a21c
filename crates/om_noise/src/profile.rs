use om_core::TerrainKind;
use serde::{Deserialize, Serialize};

/// One threshold band: raw noise normalized to [0, 1] that falls
/// strictly below `upper` (and below no earlier band) takes `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub upper: f64,
    pub kind: TerrainKind,
}

impl Band {
    pub const fn new(upper: f64, kind: TerrainKind) -> Self {
        Self { upper, kind }
    }
}

/// Error type for threshold table validation.
#[derive(Debug, PartialEq)]
pub enum ProfileError {
    Empty,
    BoundOutOfRange(f64),
    NotIncreasing { index: usize, bound: f64 },
    UncoveredTop(f64),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "profile has no bands"),
            Self::BoundOutOfRange(b) => write!(f, "band bound {} outside (0, 1]", b),
            Self::NotIncreasing { index, bound } => {
                write!(f, "band {} bound {} does not increase", index, bound)
            }
            Self::UncoveredTop(b) => {
                write!(f, "final band bound {} leaves values below 1.0 unclassified", b)
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// Ordered threshold table mapping normalized noise to terrain kinds.
///
/// The bands partition [0, 1]: each band covers values from the
/// previous bound (inclusive) up to its own bound (exclusive), and the
/// final band's bound is exactly 1.0. A value sitting exactly on a
/// boundary belongs to the higher band, so 0.30 with the default table
/// classifies as Water, not DeepWater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainProfile {
    bands: Vec<Band>,
}

impl Default for TerrainProfile {
    fn default() -> Self {
        Self {
            bands: vec![
                Band::new(0.30, TerrainKind::DeepWater),
                Band::new(0.40, TerrainKind::Water),
                Band::new(0.50, TerrainKind::Sand),
                Band::new(0.70, TerrainKind::Grass),
                Band::new(1.00, TerrainKind::Forest),
            ],
        }
    }
}

impl TerrainProfile {
    /// Build a profile from an ordered band table.
    ///
    /// # Errors
    /// Rejects empty tables, bounds outside (0, 1], non-increasing
    /// bounds, and tables whose final bound is below 1.0.
    pub fn new(bands: Vec<Band>) -> Result<Self, ProfileError> {
        let profile = Self { bands };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the band invariants without consuming the profile.
    /// Deserialized profiles should be validated before use.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let last = self.bands.last().ok_or(ProfileError::Empty)?;

        let mut prev = 0.0;
        for (index, band) in self.bands.iter().enumerate() {
            if !(band.upper > 0.0 && band.upper <= 1.0) {
                return Err(ProfileError::BoundOutOfRange(band.upper));
            }
            if band.upper <= prev {
                return Err(ProfileError::NotIncreasing {
                    index,
                    bound: band.upper,
                });
            }
            prev = band.upper;
        }

        if last.upper < 1.0 {
            return Err(ProfileError::UncoveredTop(last.upper));
        }
        Ok(())
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Classify a raw noise value in [-1, 1].
    ///
    /// The value is normalized to [0, 1] via `(value + 1) / 2`, then
    /// the first band whose bound exceeds it wins. The final band is
    /// the catch-all, so classification is total (values outside the
    /// nominal range land in the first or last band).
    pub fn classify(&self, value: f64) -> TerrainKind {
        let normalized = (value + 1.0) / 2.0;
        for band in &self.bands {
            if normalized < band.upper {
                return band.kind;
            }
        }
        // normalized >= 1.0, i.e. raw value at or above the top.
        self.bands.last().map(|b| b.kind).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Raw noise value whose normalized form is `n`.
    fn raw(n: f64) -> f64 {
        n * 2.0 - 1.0
    }

    #[test]
    fn default_profile_is_valid() {
        assert!(TerrainProfile::default().validate().is_ok());
    }

    #[test]
    fn default_bands_match_expected_kinds() {
        let profile = TerrainProfile::default();
        assert_eq!(profile.classify(raw(0.0)), TerrainKind::DeepWater);
        assert_eq!(profile.classify(raw(0.25)), TerrainKind::DeepWater);
        assert_eq!(profile.classify(raw(0.35)), TerrainKind::Water);
        assert_eq!(profile.classify(raw(0.45)), TerrainKind::Sand);
        assert_eq!(profile.classify(raw(0.60)), TerrainKind::Grass);
        assert_eq!(profile.classify(raw(0.70)), TerrainKind::Forest);
        assert_eq!(profile.classify(raw(0.99)), TerrainKind::Forest);
    }

    #[test]
    fn exact_boundary_belongs_to_higher_band() {
        let profile = TerrainProfile::default();
        assert_eq!(profile.classify(raw(0.30)), TerrainKind::Water);
        assert_eq!(profile.classify(raw(0.40)), TerrainKind::Sand);
        assert_eq!(profile.classify(raw(0.50)), TerrainKind::Grass);
    }

    #[test]
    fn extremes_classify_to_first_and_last_band() {
        let profile = TerrainProfile::default();
        assert_eq!(profile.classify(-1.0), TerrainKind::DeepWater);
        assert_eq!(profile.classify(1.0), TerrainKind::Forest);
    }

    #[test]
    fn classification_is_total_over_the_partition() {
        // Sweep [0, 1] densely: every value lands in exactly one band,
        // and the sequence of kinds is non-decreasing in band order.
        let profile = TerrainProfile::default();
        let order = TerrainKind::all();
        let mut last_index = 0;
        for i in 0..=1000 {
            let n = i as f64 / 1000.0;
            let kind = profile.classify(raw(n));
            let index = order.iter().position(|k| *k == kind).unwrap();
            assert!(index >= last_index, "Band order regressed at {}", n);
            last_index = index;
        }
        assert_eq!(last_index, order.len() - 1);
    }

    #[test]
    fn rejects_empty_table() {
        assert_eq!(TerrainProfile::new(vec![]).unwrap_err(), ProfileError::Empty);
    }

    #[test]
    fn rejects_non_increasing_bounds() {
        let err = TerrainProfile::new(vec![
            Band::new(0.5, TerrainKind::Water),
            Band::new(0.5, TerrainKind::Sand),
            Band::new(1.0, TerrainKind::Forest),
        ])
        .unwrap_err();
        assert_eq!(err, ProfileError::NotIncreasing { index: 1, bound: 0.5 });
    }

    #[test]
    fn rejects_bound_out_of_range() {
        let err = TerrainProfile::new(vec![
            Band::new(0.5, TerrainKind::Water),
            Band::new(1.5, TerrainKind::Forest),
        ])
        .unwrap_err();
        assert_eq!(err, ProfileError::BoundOutOfRange(1.5));
    }

    #[test]
    fn rejects_uncovered_top() {
        let err = TerrainProfile::new(vec![
            Band::new(0.5, TerrainKind::Water),
            Band::new(0.9, TerrainKind::Forest),
        ])
        .unwrap_err();
        assert_eq!(err, ProfileError::UncoveredTop(0.9));
    }

    #[test]
    fn alternate_profile_substitutes_cleanly() {
        // A two-band archipelago profile: mostly water, some grass.
        let profile = TerrainProfile::new(vec![
            Band::new(0.6, TerrainKind::Water),
            Band::new(1.0, TerrainKind::Grass),
        ])
        .unwrap();
        assert_eq!(profile.classify(raw(0.59)), TerrainKind::Water);
        assert_eq!(profile.classify(raw(0.6)), TerrainKind::Grass);
    }
}
