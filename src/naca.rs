//! This module contains the NACA airfoil families and the generator which turns a designation
//! into upper and lower surface coordinates.
//!
//! Each family provides its mean line and thickness form through the `SectionShape` trait, and
//! the generator samples the chord, evaluates the shape, and offsets the thickness normal to the
//! mean line. The 4-digit and 5-digit families are sampled uniformly along the chord, the
//! 6-series with cosine spacing and with both edges closed.

mod coordinates;
pub mod five_digit;
pub mod four_digit;
pub mod six_series;
pub mod surface;
pub mod thickness;

use crate::common::{SamplingBounds, Spacing};
use crate::errors::InvalidDesignation;
use crate::naca::five_digit::FiveDigit;
use crate::naca::four_digit::FourDigit;
use crate::naca::six_series::{SixSeries, parse_six_series};
use crate::naca::surface::offset_surfaces;
use crate::Point2;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub use coordinates::Coordinates;

/// The minimal capability every airfoil family provides to the generator: a mean line with its
/// slope, a thickness distribution, and the way its chord should be sampled.
pub trait SectionShape {
    /// The mean line height and slope, `(yc, dyc)`, at chord position `x`
    fn camber(&self, x: f64) -> (f64, f64);

    /// The half-thickness `yt` at chord position `x`, measured normal to the mean line
    fn half_thickness(&self, x: f64) -> f64;

    /// The distribution of chordwise stations to use for this section
    fn spacing(&self) -> Spacing;

    /// If true, the first and last stations of both surfaces are forced to exactly (0, 0) and
    /// (1, 0), closing the leading and trailing edges.
    fn closes_edges(&self) -> bool {
        false
    }
}

/// Selects which designation grammar a piece of text should be read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Series {
    FourDigit,
    FiveDigit,
    SixSeries,
}

impl Display for Series {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Series::FourDigit => write!(f, "4-digit"),
            Series::FiveDigit => write!(f, "5-digit"),
            Series::SixSeries => write!(f, "6-series"),
        }
    }
}

/// A parsed and validated NACA designation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AirfoilCode {
    FourDigit(FourDigit),
    FiveDigit(FiveDigit),
    SixSeries(SixSeries),
}

impl AirfoilCode {
    /// Parse a designation using the grammar of the given series.
    ///
    /// # Arguments
    ///
    /// * `series`: the family the designation belongs to
    /// * `text`: the designation, e.g. "2412", "23012" or "65(2)-215"
    ///
    /// returns: Result<AirfoilCode, InvalidDesignation>
    ///
    /// # Examples
    ///
    /// ```
    /// use nacafoil::{AirfoilCode, InvalidDesignation, Series};
    /// assert!(AirfoilCode::parse(Series::FourDigit, "0012").is_ok());
    /// assert!(matches!(
    ///     AirfoilCode::parse(Series::SixSeries, "65215"),
    ///     Err(InvalidDesignation::ParseFailure(_))
    /// ));
    /// ```
    pub fn parse(series: Series, text: &str) -> Result<Self, InvalidDesignation> {
        match series {
            Series::FourDigit => FourDigit::parse(text).map(AirfoilCode::FourDigit),
            Series::FiveDigit => FiveDigit::parse(text).map(AirfoilCode::FiveDigit),
            Series::SixSeries => parse_six_series(text)
                .map(AirfoilCode::SixSeries)
                .ok_or_else(|| InvalidDesignation::ParseFailure(text.to_string())),
        }
    }

    pub fn series(&self) -> Series {
        match self {
            AirfoilCode::FourDigit(_) => Series::FourDigit,
            AirfoilCode::FiveDigit(_) => Series::FiveDigit,
            AirfoilCode::SixSeries(_) => Series::SixSeries,
        }
    }

    /// Build the evaluable mean line and thickness form of this section.
    pub fn shape(&self) -> Box<dyn SectionShape> {
        match self {
            AirfoilCode::FourDigit(c) => Box::new(*c),
            AirfoilCode::FiveDigit(c) => Box::new(c.shape()),
            AirfoilCode::SixSeries(c) => Box::new(c.shape()),
        }
    }

    /// Generate the upper and lower surface coordinates of this section with `num_points`
    /// intervals along the chord, giving `num_points + 1` points on each surface. No bounds are
    /// applied to the point count here, see `generate_with` for the clamped entry point.
    pub fn coordinates(&self, num_points: usize) -> Coordinates {
        debug!(
            "Generating NACA {} section with {} intervals",
            self.series(),
            num_points
        );
        sample_shape(self.shape().as_ref(), num_points)
    }
}

/// Sample a section shape at `num_points + 1` stations and build the surface coordinates.
/// `num_points` must be at least 1.
pub fn sample_shape(shape: &dyn SectionShape, num_points: usize) -> Coordinates {
    let closed = shape.closes_edges();
    let (upper, lower): (Vec<Point2>, Vec<Point2>) = shape
        .spacing()
        .stations(num_points)
        .into_iter()
        .enumerate()
        .map(|(i, x)| {
            if closed && i == 0 {
                (Point2::origin(), Point2::origin())
            } else if closed && i == num_points {
                (Point2::new(1.0, 0.0), Point2::new(1.0, 0.0))
            } else {
                let (yc, dyc) = shape.camber(x);
                offset_surfaces(x, yc, dyc, shape.half_thickness(x))
            }
        })
        .unzip();

    Coordinates { upper, lower }
}

/// Parse a designation and generate its coordinates, clamping the point count into the default
/// bounds of [20, 500].
///
/// # Arguments
///
/// * `series`: the family the designation belongs to
/// * `text`: the designation
/// * `num_points`: the requested number of intervals along the chord
///
/// returns: Result<Coordinates, InvalidDesignation>
///
/// # Examples
///
/// ```
/// use nacafoil::{generate, Series};
/// let coords = generate(Series::FourDigit, "2412", 100).unwrap();
/// assert_eq!(coords.upper.len(), 101);
/// assert_eq!(coords.lower.len(), 101);
/// ```
pub fn generate(
    series: Series,
    text: &str,
    num_points: usize,
) -> Result<Coordinates, InvalidDesignation> {
    generate_with(series, text, num_points, &SamplingBounds::default())
}

/// Parse a designation and generate its coordinates, clamping the point count into the given
/// bounds.
pub fn generate_with(
    series: Series,
    text: &str,
    num_points: usize,
    bounds: &SamplingBounds,
) -> Result<Coordinates, InvalidDesignation> {
    let code = AirfoilCode::parse(series, text)?;
    Ok(code.coordinates(bounds.resolve(Some(num_points))))
}

pub(crate) fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split `code` into exactly `count` decimal digits, or `None` if it is any other length or
/// contains anything but ASCII digits.
pub(crate) fn to_digits(code: &str, count: usize) -> Option<Vec<u32>> {
    if code.len() != count {
        return None;
    }
    code.chars().map(|c| c.to_digit(10)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use test_case::test_case;

    fn random_code(rng: &mut impl Rng, series: Series) -> String {
        match series {
            Series::FourDigit => format!(
                "{}{}{:02}",
                rng.random_range(0..10),
                rng.random_range(0..10),
                rng.random_range(1..40)
            ),
            Series::FiveDigit => format!(
                "{}{}{}{:02}",
                rng.random_range(1..10),
                rng.random_range(0..10),
                rng.random_range(0..2),
                rng.random_range(1..40)
            ),
            Series::SixSeries => format!(
                "6{}-{}{:02}",
                rng.random_range(3..8),
                rng.random_range(0..10),
                rng.random_range(1..25)
            ),
        }
    }

    #[test]
    fn test_four_digit_leading_edge_coincides() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let code = random_code(&mut rng, Series::FourDigit);
            let coords = generate(Series::FourDigit, &code, 80).unwrap();
            assert_relative_eq!(coords.upper[0], coords.lower[0], epsilon = 1.0e-9);
            assert_relative_eq!(coords.upper[0], Point2::origin(), epsilon = 1.0e-9);
        }
    }

    #[test_case("0012")]
    #[test_case("0009")]
    #[test_case("0412")]
    #[test_case("2012")]
    fn test_symmetric_sections_mirror(code: &str) {
        let coords = generate(Series::FourDigit, code, 60).unwrap();
        for (u, l) in coords.upper.iter().zip(coords.lower.iter()) {
            assert_relative_eq!(u.x, l.x, epsilon = 1.0e-9);
            assert_relative_eq!(u.y, -l.y, epsilon = 1.0e-9);
        }
        let (_, camber) = coords.max_camber();
        assert_relative_eq!(camber, 0.0, epsilon = 1.0e-12);
    }

    #[test_case(Series::FourDigit, 20)]
    #[test_case(Series::FourDigit, 333)]
    #[test_case(Series::FiveDigit, 57)]
    #[test_case(Series::FiveDigit, 500)]
    #[test_case(Series::SixSeries, 21)]
    #[test_case(Series::SixSeries, 499)]
    fn test_point_count(series: Series, n: usize) {
        let mut rng = rand::rng();
        for _ in 0..20 {
            let code = random_code(&mut rng, series);
            let coords = generate(series, &code, n).unwrap();
            assert_eq!(coords.upper.len(), n + 1);
            assert_eq!(coords.lower.len(), n + 1);
            assert_eq!(coords.len(), n + 1);
        }
    }

    #[test_case(1, 20)]
    #[test_case(19, 20)]
    #[test_case(501, 500)]
    #[test_case(100_000, 500)]
    fn test_point_count_is_clamped(requested: usize, expected: usize) {
        let coords = generate(Series::FiveDigit, "23012", requested).unwrap();
        assert_eq!(coords.len(), expected + 1);
    }

    #[test]
    fn test_explicit_bounds() {
        let bounds = SamplingBounds::new(2, 5000, 100).unwrap();
        let coords = generate_with(Series::FourDigit, "2412", 4, &bounds).unwrap();
        assert_eq!(coords.len(), 5);
        let coords = generate_with(Series::FourDigit, "2412", 2000, &bounds).unwrap();
        assert_eq!(coords.len(), 2001);
    }

    #[test]
    fn test_smallest_bounds_give_finite_section() {
        let bounds = SamplingBounds::new(1, 1, 1).unwrap();
        for (series, text) in [
            (Series::FourDigit, "2412"),
            (Series::FiveDigit, "23012"),
            (Series::SixSeries, "65-215"),
        ] {
            let coords = generate_with(series, text, 0, &bounds).unwrap();
            assert_eq!(coords.len(), 2);
            assert!(coords.outline().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        }
    }

    #[test]
    fn test_six_series_edges_closed() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let code = random_code(&mut rng, Series::SixSeries);
            let coords = generate(Series::SixSeries, &code, 120).unwrap();
            let n = coords.len() - 1;
            assert_eq!(coords.upper[0], Point2::new(0.0, 0.0));
            assert_eq!(coords.lower[0], Point2::new(0.0, 0.0));
            assert_eq!(coords.upper[n], Point2::new(1.0, 0.0));
            assert_eq!(coords.lower[n], Point2::new(1.0, 0.0));
        }
    }

    #[test]
    fn test_2412_envelope() {
        let code = AirfoilCode::parse(Series::FourDigit, "2412").unwrap();
        let coords = code.coordinates(4);
        assert_eq!(coords.len(), 5);

        // Coarse sampling stays within discretization error of the nominal section
        let (_, thickness) = coords.max_thickness();
        assert_relative_eq!(thickness, 0.12, epsilon = 2.0e-3);
        let (x, camber) = coords.max_camber();
        assert_relative_eq!(camber, 0.02, epsilon = 1.0e-3);
        assert_relative_eq!(x, 0.4, epsilon = 0.15);

        // Finer sampling recovers the nominal values closely
        let fine = code.coordinates(500);
        let (x, thickness) = fine.max_thickness();
        assert_relative_eq!(thickness, 0.12, epsilon = 2.0e-4);
        assert_relative_eq!(x, 0.3, epsilon = 0.01);
        let (x, camber) = fine.max_camber();
        assert_relative_eq!(camber, 0.02, epsilon = 1.0e-6);
        assert_relative_eq!(x, 0.4, epsilon = 1.0e-9);
    }

    #[test]
    fn test_six_series_camber_at_mid_chord() {
        let coords = generate(Series::SixSeries, "65-415", 100).unwrap();
        let (x, camber) = coords.max_camber();
        assert_relative_eq!(x, 0.5, epsilon = 1.0e-9);
        let expected = 0.4 * 2.0_f64.ln() / (4.0 * std::f64::consts::PI);
        assert_relative_eq!(camber, expected, epsilon = 1.0e-9);
    }

    #[test_case(Series::FourDigit, "241")]
    #[test_case(Series::FourDigit, "2412a")]
    #[test_case(Series::FourDigit, "abcd")]
    #[test_case(Series::FiveDigit, "2301")]
    #[test_case(Series::FiveDigit, "23012x")]
    fn test_invalid_code(series: Series, text: &str) {
        assert!(matches!(
            generate(series, text, 80),
            Err(InvalidDesignation::InvalidCode(_))
        ));
    }

    #[test_case("65215")]
    #[test_case("2412")]
    #[test_case("65-")]
    fn test_parse_failure(text: &str) {
        assert_eq!(
            generate(Series::SixSeries, text, 80),
            Err(InvalidDesignation::ParseFailure(text.to_string()))
        );
    }

    #[test_case(Series::FourDigit, "4415")]
    #[test_case(Series::FiveDigit, "23012")]
    #[test_case(Series::FiveDigit, "23112")]
    #[test_case(Series::SixSeries, "63A-412")]
    fn test_generation_is_repeatable(series: Series, text: &str) {
        let a = generate(series, text, 250).unwrap();
        let b = generate(series, text, 250).unwrap();
        for (p, q) in a.outline().iter().zip(b.outline().iter()) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }

    #[test]
    fn test_all_points_finite() {
        let mut rng = rand::rng();
        for series in [Series::FourDigit, Series::FiveDigit, Series::SixSeries] {
            for _ in 0..50 {
                let code = random_code(&mut rng, series);
                let coords = generate(series, &code, 200).unwrap();
                assert!(
                    coords.outline().iter().all(|p| p.x.is_finite() && p.y.is_finite()),
                    "non-finite point in {} {}",
                    series,
                    code
                );
            }
        }
    }
}
