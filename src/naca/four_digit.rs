//! The NACA 4-digit family: a two-segment parabolic mean line with the standard thickness form.

use crate::common::Spacing;
use crate::errors::InvalidDesignation;
use crate::naca::thickness::half_thickness;
use crate::naca::{SectionShape, strip_whitespace, to_digits};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourDigit {
    /// The maximum camber as a fraction of chord (first digit / 100)
    pub m: f64,

    /// The chordwise position of maximum camber as a fraction of chord (second digit / 10)
    pub p: f64,

    /// The maximum thickness as a fraction of chord (last two digits / 100)
    pub t: f64,
}

impl FourDigit {
    /// Parse a designation such as "2412". Whitespace is ignored, and anything other than exactly
    /// four decimal digits is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use nacafoil::naca::four_digit::FourDigit;
    /// let section = FourDigit::parse("2412").unwrap();
    /// assert_eq!(section.m, 0.02);
    /// assert_eq!(section.p, 0.4);
    /// assert_eq!(section.t, 0.12);
    /// ```
    pub fn parse(text: &str) -> Result<Self, InvalidDesignation> {
        let code = strip_whitespace(text);
        let d = to_digits(&code, 4).ok_or(InvalidDesignation::InvalidCode(code))?;

        Ok(FourDigit {
            m: d[0] as f64 / 100.0,
            p: d[1] as f64 / 10.0,
            t: (d[2] * 10 + d[3]) as f64 / 100.0,
        })
    }
}

impl SectionShape for FourDigit {
    fn camber(&self, x: f64) -> (f64, f64) {
        let (m, p) = (self.m, self.p);
        // A section with no camber position is symmetric regardless of the camber digit
        if m == 0.0 || p == 0.0 {
            return (0.0, 0.0);
        }

        if x < p {
            let k = m / (p * p);
            (k * (2.0 * p * x - x * x), k * (2.0 * p - 2.0 * x))
        } else {
            let k = m / ((1.0 - p) * (1.0 - p));
            (
                k * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x),
                k * (2.0 * p - 2.0 * x),
            )
        }
    }

    fn half_thickness(&self, x: f64) -> f64 {
        half_thickness(x, self.t)
    }

    fn spacing(&self) -> Spacing {
        Spacing::Uniform
    }
}
