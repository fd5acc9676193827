//! Bounds on the number of intervals a caller may request along the chord.

use crate::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// The accepted range of point counts, along with the count used when none is requested. The
/// bounds can only be built through `SamplingBounds::new` (or deserialized, which goes through
/// the same checks), so a resolved count is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoundsFields", into = "BoundsFields")]
pub struct SamplingBounds {
    min: usize,
    max: usize,
    default: usize,
}

/// The unchecked serialized form of `SamplingBounds`
#[derive(Clone, Copy, Serialize, Deserialize)]
struct BoundsFields {
    min: usize,
    max: usize,
    default: usize,
}

impl TryFrom<BoundsFields> for SamplingBounds {
    type Error = Box<dyn Error>;

    fn try_from(fields: BoundsFields) -> Result<Self> {
        SamplingBounds::new(fields.min, fields.max, fields.default)
    }
}

impl From<SamplingBounds> for BoundsFields {
    fn from(bounds: SamplingBounds) -> Self {
        BoundsFields {
            min: bounds.min,
            max: bounds.max,
            default: bounds.default,
        }
    }
}

impl Default for SamplingBounds {
    fn default() -> Self {
        Self {
            min: 20,
            max: 500,
            default: 80,
        }
    }
}

impl SamplingBounds {
    /// Create a new set of bounds, checking that they are valid. The bounds are valid if
    /// `1 <= min <= default <= max`.
    pub fn new(min: usize, max: usize, default: usize) -> Result<Self> {
        if min == 0 {
            return Err("The minimum point count must be at least 1".into());
        }
        if !(min <= default && default <= max) {
            return Err(format!(
                "Invalid point count bounds, expected min <= default <= max but got {} / {} / {}",
                min, default, max
            )
            .into());
        }
        Ok(Self { min, max, default })
    }

    /// The smallest accepted point count
    pub fn min(&self) -> usize {
        self.min
    }

    /// The largest accepted point count
    pub fn max(&self) -> usize {
        self.max
    }

    /// The point count used when the caller does not request one
    pub fn default_count(&self) -> usize {
        self.default
    }

    /// Returns true if the given count is within the bounds
    pub fn contains(&self, n: usize) -> bool {
        n >= self.min && n <= self.max
    }

    /// Resolve a requested point count, using the default if none was requested and clamping the
    /// result into [min, max].
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        let n = requested.unwrap_or(self.default);
        let clamped = n.clamp(self.min, self.max);
        if clamped != n {
            debug!("Point count {} clamped to {}", n, clamped);
        }
        clamped
    }
}
