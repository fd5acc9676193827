//! The NACA 5-digit family, with both the standard cubic mean line (third digit 0) and the
//! reflexed mean line (third digit 1), combined with the standard thickness form.

use crate::common::Spacing;
use crate::errors::InvalidDesignation;
use crate::naca::thickness::half_thickness;
use crate::naca::{SectionShape, strip_whitespace, to_digits};
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The maximum number of fixed-point iterations used to locate the camber break `r`
pub const MAX_ITERATIONS: usize = 30;

/// The difference between successive iterates below which the camber break is considered solved
pub const CONVERGENCE_TOL: f64 = 1.0e-10;

const SQRT_TOL: f64 = 1.0e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveDigit {
    /// The design lift coefficient, 0.15 times the first digit
    pub design_cl: f64,

    /// The chordwise position of maximum camber, 0.05 times the second digit
    pub max_camber_pos: f64,

    /// True if the third digit is non-zero, selecting the reflexed mean line
    pub reflex: bool,

    /// The maximum thickness as a fraction of chord (last two digits / 100)
    pub t: f64,
}

impl FiveDigit {
    /// Parse a designation such as "23012". Whitespace is ignored, and anything other than
    /// exactly five decimal digits is rejected.
    pub fn parse(text: &str) -> Result<Self, InvalidDesignation> {
        let code = strip_whitespace(text);
        let d = to_digits(&code, 5).ok_or(InvalidDesignation::InvalidCode(code))?;

        Ok(FiveDigit {
            design_cl: 0.15 * d[0] as f64,
            max_camber_pos: 0.05 * d[1] as f64,
            reflex: d[2] != 0,
            t: (d[3] * 10 + d[4]) as f64 / 100.0,
        })
    }

    /// Build the evaluable mean line and thickness form for this designation, solving for (or
    /// looking up) the camber break and the scaling coefficients.
    pub fn shape(&self) -> FiveDigitShape {
        let xmc = self.max_camber_pos;
        let r = if self.reflex {
            reflex_camber_break(xmc)
        } else {
            solve_camber_break(xmc).r
        };

        let n = normalization(r);
        let k1 = if n > SQRT_TOL {
            6.0 * self.design_cl / n
        } else {
            0.0
        };
        let k21 = self.reflex.then(|| reflex_k21(r, xmc));

        FiveDigitShape {
            r,
            k1,
            k21,
            t: self.t,
        }
    }
}

/// The outcome of the fixed-point search for the camber break location `r` of a standard
/// 5-digit mean line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberBreak {
    /// The camber break location as a fraction of chord
    pub r: f64,

    /// The number of iterations performed
    pub iterations: usize,

    /// True if successive iterates came within `CONVERGENCE_TOL` before `MAX_ITERATIONS` was
    /// reached
    pub converged: bool,
}

/// Find the camber break `r` of the standard 5-digit mean line whose maximum camber sits at
/// `xmc`, by iterating `r = xmc + r * sqrt(r / 3)` from a seed of 0.1. The iteration stops after
/// `MAX_ITERATIONS` or once successive values differ by less than `CONVERGENCE_TOL`, whichever
/// comes first. When the iteration does not converge the last iterate is returned.
///
/// # Arguments
///
/// * `xmc`: the chordwise position of maximum camber
///
/// returns: CamberBreak
///
/// # Examples
///
/// ```
/// use nacafoil::naca::five_digit::solve_camber_break;
/// use approx::assert_relative_eq;
/// let solved = solve_camber_break(0.15);
/// assert!(solved.converged);
/// assert_relative_eq!(solved.r, 0.2027, epsilon = 1.0e-4);
/// ```
pub fn solve_camber_break(xmc: f64) -> CamberBreak {
    let mut r: f64 = 0.1;
    for i in 0..MAX_ITERATIONS {
        let next = xmc + r * (r / 3.0).sqrt();
        trace!("camber break iteration {}: r = {}", i, next);
        if (next - r).abs() < CONVERGENCE_TOL {
            return CamberBreak {
                r,
                iterations: i + 1,
                converged: true,
            };
        }
        r = next;
    }

    warn!(
        "Camber break for xmc = {} did not converge within {} iterations, using r = {}",
        xmc, MAX_ITERATIONS, r
    );
    CamberBreak {
        r,
        iterations: MAX_ITERATIONS,
        converged: false,
    }
}

/// Look up the camber break of a reflexed 5-digit mean line from the coarse three-bucket table
/// keyed on the position of maximum camber. The buckets line up with second digits 1-2, 3 and
/// 4 and above.
pub fn reflex_camber_break(xmc: f64) -> f64 {
    // Bucket edges are compared with a little slack because 0.05 * 3 is not exactly 0.15
    if xmc <= 0.1 + 1.0e-9 {
        0.13
    } else if xmc <= 0.15 + 1.0e-9 {
        0.217
    } else {
        0.25
    }
}

/// The ratio coefficient `k2 / k1` of the reflexed mean line's aft segment.
pub fn reflex_k21(r: f64, xmc: f64) -> f64 {
    let ri = 1.0 - r;
    (3.0 * (r - xmc).powi(2) - r.powi(3)) / ri.powi(3)
}

/// The integral normalization constant `N(r)` which relates the mean line scaling factor `k1` to
/// the design lift coefficient. Returns 1.0 where `sqrt(r - r^2)` vanishes or is undefined
/// (r at or beyond 0 or 1).
pub fn normalization(r: f64) -> f64 {
    let sr = (r - r * r).sqrt();
    if sr.is_nan() || sr <= SQRT_TOL {
        return 1.0;
    }

    let r2 = r * r;
    let r3 = r2 * r;
    let r4 = r3 * r;
    let acos_term = PI / 2.0 - (1.0 - 2.0 * r).clamp(-1.0, 1.0).asin();
    (3.0 * r - 7.0 * r2 + 8.0 * r3 - 4.0 * r4) / sr - 1.5 * (1.0 - 2.0 * r) * acos_term
}

/// The solved mean line and thickness form of a 5-digit section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveDigitShape {
    /// The camber break location where the cubic forward segment meets the aft segment
    pub r: f64,

    /// The mean line scaling factor
    pub k1: f64,

    /// The aft segment coefficient ratio for a reflexed mean line, `None` for a standard one
    pub k21: Option<f64>,

    /// The maximum thickness as a fraction of chord
    pub t: f64,
}

impl SectionShape for FiveDigitShape {
    fn camber(&self, x: f64) -> (f64, f64) {
        let r = self.r;
        let r3 = r * r * r;
        let k = self.k1 / 6.0;

        match self.k21 {
            None => {
                if x < r {
                    (
                        k * (x * x * x - 3.0 * r * x * x + r * r * (3.0 - r) * x),
                        k * (3.0 * x * x - 6.0 * r * x + r * r * (3.0 - r)),
                    )
                } else {
                    (k * r3 * (1.0 - x), -k * r3)
                }
            }
            Some(k21) => {
                let ri3 = (1.0 - r).powi(3);
                let dx = x - r;
                // Only the cubic term differs between the two segments
                let lead = if x < r { 1.0 } else { k21 };
                (
                    k * (lead * dx * dx * dx - k21 * ri3 * x - r3 * x + r3),
                    k * (3.0 * lead * dx * dx - k21 * ri3 - r3),
                )
            }
        }
    }

    fn half_thickness(&self, x: f64) -> f64 {
        half_thickness(x, self.t)
    }

    fn spacing(&self) -> Spacing {
        Spacing::Uniform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(1, 0.0581)]
    #[test_case(2, 0.1257)]
    #[test_case(3, 0.2027)]
    #[test_case(4, 0.2903)]
    fn test_camber_break_converges(p: u32, expected: f64) {
        let solved = solve_camber_break(0.05 * p as f64);
        assert!(solved.converged);
        assert!(solved.iterations <= MAX_ITERATIONS);
        assert_relative_eq!(solved.r, expected, epsilon = 1.0e-4);
    }

    #[test]
    fn test_camber_break_stabilizes() {
        for p in 1..=4 {
            let xmc = 0.05 * p as f64;
            let solved = solve_camber_break(xmc);
            let next = xmc + solved.r * (solved.r / 3.0).sqrt();
            assert!((next - solved.r).abs() < CONVERGENCE_TOL);
        }
    }

    #[test]
    fn test_camber_break_iteration_is_bounded() {
        for p in 1..=9 {
            let solved = solve_camber_break(0.05 * p as f64);
            assert!(solved.iterations <= MAX_ITERATIONS);
            assert!(solved.r.is_finite());
        }
    }

    #[test]
    fn test_slow_camber_break_is_close() {
        // The 250 mean line is still within a hair of its fixed point at the iteration limit
        let solved = solve_camber_break(0.25);
        assert_relative_eq!(solved.r, 0.391344, epsilon = 1.0e-6);
    }

    #[test_case(0.05, 0.13)]
    #[test_case(0.1, 0.13)]
    #[test_case(0.05 * 3.0, 0.217)]
    #[test_case(0.2, 0.25)]
    #[test_case(0.45, 0.25)]
    fn test_reflex_table(xmc: f64, expected: f64) {
        assert_eq!(reflex_camber_break(xmc), expected);
    }

    #[test_case(0.0)]
    #[test_case(1.0)]
    #[test_case(1.27)]
    fn test_normalization_guard(r: f64) {
        assert_eq!(normalization(r), 1.0);
    }

    #[test]
    fn test_23012_mean_line() {
        let shape = FiveDigit::parse("23012").unwrap().shape();
        assert!(shape.k21.is_none());
        assert_relative_eq!(shape.k1, 15.92, epsilon = 0.01);

        let (x_max, yc_max) = Spacing::Uniform
            .stations(2000)
            .into_iter()
            .map(|x| (x, shape.camber(x).0))
            .fold((0.0, 0.0), |acc, v| if v.1 > acc.1 { v } else { acc });
        assert_relative_eq!(x_max, 0.15, epsilon = 0.005);
        assert_relative_eq!(yc_max, 0.0184, epsilon = 1.0e-3);
    }

    #[test_case("23012")]
    #[test_case("23112")]
    #[test_case("44012")]
    #[test_case("21112")]
    fn test_mean_line_closes(code: &str) {
        let shape = FiveDigit::parse(code).unwrap().shape();
        assert_relative_eq!(shape.camber(0.0).0, 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(shape.camber(1.0).0, 0.0, epsilon = 1.0e-12);
    }

    #[test_case("23012")]
    #[test_case("23112")]
    fn test_mean_line_is_continuous_at_break(code: &str) {
        let shape = FiveDigit::parse(code).unwrap().shape();
        let r = shape.r;
        let (a, da) = shape.camber(r - 1.0e-9);
        let (b, db) = shape.camber(r);
        assert_relative_eq!(a, b, epsilon = 1.0e-8);
        assert_relative_eq!(da, db, epsilon = 1.0e-6);
    }

    #[test]
    fn test_reflex_shape() {
        let section = FiveDigit::parse("23112").unwrap();
        assert!(section.reflex);
        let shape = section.shape();
        assert_eq!(shape.r, 0.217);
        let k21 = shape.k21.unwrap();
        assert_relative_eq!(k21, reflex_k21(0.217, section.max_camber_pos));
    }

    #[test]
    fn test_slope_matches_finite_difference() {
        let h = 1.0e-6;
        for code in ["23012", "23112"] {
            let shape = FiveDigit::parse(code).unwrap().shape();
            for x in [0.05, 0.1, 0.4, 0.8] {
                let fd = (shape.camber(x + h).0 - shape.camber(x - h).0) / (2.0 * h);
                assert_relative_eq!(shape.camber(x).1, fd, epsilon = 1.0e-5);
            }
        }
    }

    #[test_case("2301")]
    #[test_case("230120")]
    #[test_case("23O12")]
    fn test_rejects_malformed(text: &str) {
        assert_eq!(
            FiveDigit::parse(text),
            Err(InvalidDesignation::InvalidCode(text.to_string()))
        );
    }
}
