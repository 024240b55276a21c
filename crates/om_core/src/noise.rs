/// Trait for continuous 2D noise fields.
///
/// A field is a pure function of its seed state and the sample
/// coordinates: two calls with the same coordinates return the same
/// value until the field is reseeded. Values vary smoothly as the
/// coordinates vary (gradient noise, not per-cell randomness).
///
/// The trait is object-safe so generators can swap fields at the seam.
pub trait NoiseField: Send + Sync {
    /// Sample the field at the given world coordinates.
    ///
    /// # Returns
    /// A value in [-1.0, 1.0]. Defined for all finite coordinates.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Returns the name of this field for debugging.
    fn name(&self) -> &'static str {
        "NoiseField"
    }
}
