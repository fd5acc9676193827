pub mod points;
mod sampling_bounds;

pub use sampling_bounds::SamplingBounds;

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Options for distributing chordwise stations between the leading edge (x = 0) and the trailing
/// edge (x = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spacing {
    /// Stations evenly spaced along the chord, `x_i = i / n`
    Uniform,

    /// Stations clustered towards both edges, `x_i = 0.5 * (1 - cos(pi * i / n))`. Use this where
    /// the curvature near the edges would be under-resolved by uniform spacing.
    Cosine,
}

impl Spacing {
    /// Generate the `n + 1` chordwise stations for `n` intervals. The first value is always 0.0
    /// and the last is always 1.0 (exactly for `Uniform`, to within rounding for `Cosine`).
    ///
    /// # Arguments
    ///
    /// * `n`: the number of intervals between stations, must be at least 1
    ///
    /// returns: Vec<f64, Global>
    ///
    /// # Examples
    ///
    /// ```
    /// use nacafoil::common::Spacing;
    /// let stations = Spacing::Uniform.stations(4);
    /// assert_eq!(stations, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn stations(&self, n: usize) -> Vec<f64> {
        match self {
            Spacing::Uniform => (0..=n).map(|i| i as f64 / n as f64).collect(),
            Spacing::Cosine => cosine_space(n),
        }
    }
}

/// Generate `n + 1` values on [0, 1] with half-cosine spacing, so that the values are densest at
/// both ends of the interval.
pub fn cosine_space(n: usize) -> Vec<f64> {
    (0..=n)
        .map(|i| 0.5 * (1.0 - (PI * i as f64 / n as f64).cos()))
        .collect()
}
