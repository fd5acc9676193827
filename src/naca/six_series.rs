//! The NACA 6-series family: tabulated basic thickness forms scaled to the requested thickness,
//! combined with the uniform-loading (a = 1.0) mean line.

use crate::common::Spacing;
use crate::naca::SectionShape;
use itertools::Itertools;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::sync::LazyLock;

/// Chordwise positions closer than this to either edge are pulled back before the mean line's
/// logarithms are evaluated
const EDGE_EPS: f64 = 1.0e-10;

/// The thickness ratio of the tabulated basic thickness forms
const TABLE_THICKNESS: f64 = 0.1;

static BUCKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)").expect("bucket pattern is a valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SixSeries {
    /// The family digit following the leading 6, e.g. 5 for a 65-215
    pub family: u8,

    /// The half-width of the low drag bucket in lift coefficient, from the parenthesized digits
    /// divided by 10. Defaults to 0.2 when not given.
    pub bucket: f64,

    /// The design lift coefficient, the first digit after the dash divided by 10
    pub design_cl: f64,

    /// The maximum thickness as a fraction of chord, the remaining digits divided by 100
    pub t: f64,

    /// True if the designation carries the 'A' modifier (e.g. 63A-412)
    pub modified_a: bool,
}

impl SixSeries {
    /// The basic thickness form used for this section's family.
    pub fn thickness_family(&self) -> ThicknessFamily {
        ThicknessFamily::for_family(self.family)
    }

    /// Build the evaluable mean line and thickness form for this designation.
    pub fn shape(&self) -> SixSeriesShape {
        SixSeriesShape {
            family: self.thickness_family(),
            design_cl: self.design_cl,
            t: self.t,
        }
    }
}

/// Parse a 6-series designation such as "65-215", "65(2)-215" or "63A-412". Whitespace is ignored
/// and letters are case-insensitive. Returns `None` if the designation does not start with a 6,
/// has no dash, has no family digit between the 6 and the dash, or does not follow the dash with
/// a design lift digit and at least one thickness digit.
///
/// # Arguments
///
/// * `text`: the designation as entered
///
/// returns: Option<SixSeries>
///
/// # Examples
///
/// ```
/// use nacafoil::naca::six_series::parse_six_series;
/// let section = parse_six_series("65(3)-418").unwrap();
/// assert_eq!(section.family, 5);
/// assert_eq!(section.bucket, 0.3);
/// assert_eq!(section.design_cl, 0.4);
/// assert_eq!(section.t, 0.18);
/// assert!(parse_six_series("65215").is_none());
/// ```
pub fn parse_six_series(text: &str) -> Option<SixSeries> {
    let raw = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if !raw.starts_with('6') {
        return None;
    }
    let modified_a = raw.contains('A');

    let (bucket, working) = match BUCKET.captures(&raw) {
        Some(caps) => {
            let value = caps[1].parse::<u32>().ok()? as f64 / 10.0;
            (value, BUCKET.replacen(&raw, 1, "").into_owned())
        }
        None => (0.2, raw.clone()),
    };

    let dash = working.find('-')?;
    let family = working[1..dash].chars().next()?.to_digit(10)? as u8;

    let mut suffix = working[dash + 1..].chars();
    let design_cl = suffix.next()?.to_digit(10)? as f64 / 10.0;
    let thickness = suffix.as_str();
    if thickness.is_empty() || !thickness.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let t = thickness.parse::<u32>().ok()? as f64 / 100.0;

    Some(SixSeries {
        family,
        bucket,
        design_cl,
        t,
        modified_a,
    })
}

/// The uniform-loading mean line for design lift coefficient `cl`, returning `(yc, dyc)` at
/// chord position `x`. The position is clamped a small distance away from both edges so that
/// the logarithms stay finite. A zero design lift coefficient gives a flat mean line.
///
/// # Examples
///
/// ```
/// use nacafoil::naca::six_series::mean_line;
/// assert_eq!(mean_line(0.3, 0.0), (0.0, 0.0));
/// ```
pub fn mean_line(x: f64, cl: f64) -> (f64, f64) {
    if cl == 0.0 {
        return (0.0, 0.0);
    }

    let xs = x.clamp(EDGE_EPS, 1.0 - EDGE_EPS);
    let xi = 1.0 - xs;
    let factor = -cl / (4.0 * PI);
    (
        factor * (xs * xs.ln() + xi * xi.ln()),
        factor * (xs.ln() - xi.ln()),
    )
}

/// The four families with tabulated basic thickness forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThicknessFamily {
    S63,
    S64,
    S65,
    S66,
}

impl ThicknessFamily {
    /// Look up the family with the given digit, if it has a tabulated thickness form.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            3 => Some(ThicknessFamily::S63),
            4 => Some(ThicknessFamily::S64),
            5 => Some(ThicknessFamily::S65),
            6 => Some(ThicknessFamily::S66),
            _ => None,
        }
    }

    /// Look up the family with the given digit, falling back to the 64 series for families
    /// without a table.
    pub fn for_family(digit: u8) -> Self {
        Self::from_digit(digit).unwrap_or_else(|| {
            debug!("No thickness table for the 6{} family, using 64", digit);
            ThicknessFamily::S64
        })
    }

    /// The tabulated (percent chord, percent half-thickness) pairs for a 10% thick section,
    /// ordered from leading to trailing edge.
    pub fn table(&self) -> &'static [(f64, f64)] {
        match self {
            ThicknessFamily::S63 => &TABLE_63,
            ThicknessFamily::S64 => &TABLE_64,
            ThicknessFamily::S65 => &TABLE_65,
            ThicknessFamily::S66 => &TABLE_66,
        }
    }

    /// Linearly interpolate the basic half-thickness (as a fraction of chord, for a 10% thick
    /// section) at chord position `x`. Zero at and beyond both edges.
    pub fn interpolate(&self, x: f64) -> f64 {
        let x_pct = x * 100.0;
        if x_pct <= 0.0 || x_pct >= 100.0 {
            return 0.0;
        }

        self.table()
            .iter()
            .tuple_windows()
            .find(|(p0, p1)| x_pct >= p0.0 && x_pct <= p1.0)
            .map(|(p0, p1)| {
                let f = (x_pct - p0.0) / (p1.0 - p0.0);
                (p0.1 + f * (p1.1 - p0.1)) / 100.0
            })
            .unwrap_or(0.0)
    }
}

/// The evaluable mean line and thickness form of a 6-series section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SixSeriesShape {
    pub family: ThicknessFamily,
    pub design_cl: f64,
    pub t: f64,
}

impl SectionShape for SixSeriesShape {
    fn camber(&self, x: f64) -> (f64, f64) {
        mean_line(x, self.design_cl)
    }

    fn half_thickness(&self, x: f64) -> f64 {
        self.family.interpolate(x) * self.t / TABLE_THICKNESS
    }

    fn spacing(&self) -> Spacing {
        Spacing::Cosine
    }

    fn closes_edges(&self) -> bool {
        true
    }
}

const TABLE_63: [(f64, f64); 26] = [
    (0.0, 0.0),
    (0.5, 0.767),
    (0.75, 0.927),
    (1.25, 1.168),
    (2.5, 1.597),
    (5.0, 2.223),
    (7.5, 2.703),
    (10.0, 3.102),
    (15.0, 3.738),
    (20.0, 4.215),
    (25.0, 4.567),
    (30.0, 4.804),
    (35.0, 4.939),
    (40.0, 4.981),
    (45.0, 4.909),
    (50.0, 4.704),
    (55.0, 4.385),
    (60.0, 3.991),
    (65.0, 3.518),
    (70.0, 2.997),
    (75.0, 2.457),
    (80.0, 1.912),
    (85.0, 1.376),
    (90.0, 0.860),
    (95.0, 0.380),
    (100.0, 0.0),
];

const TABLE_64: [(f64, f64); 26] = [
    (0.0, 0.0),
    (0.5, 0.754),
    (0.75, 0.914),
    (1.25, 1.155),
    (2.5, 1.593),
    (5.0, 2.235),
    (7.5, 2.730),
    (10.0, 3.141),
    (15.0, 3.805),
    (20.0, 4.311),
    (25.0, 4.686),
    (30.0, 4.933),
    (35.0, 5.061),
    (40.0, 5.074),
    (45.0, 4.949),
    (50.0, 4.671),
    (55.0, 4.269),
    (60.0, 3.793),
    (65.0, 3.276),
    (70.0, 2.735),
    (75.0, 2.181),
    (80.0, 1.637),
    (85.0, 1.114),
    (90.0, 0.632),
    (95.0, 0.228),
    (100.0, 0.0),
];

const TABLE_65: [(f64, f64); 26] = [
    (0.0, 0.0),
    (0.5, 0.741),
    (0.75, 0.901),
    (1.25, 1.144),
    (2.5, 1.593),
    (5.0, 2.253),
    (7.5, 2.766),
    (10.0, 3.195),
    (15.0, 3.896),
    (20.0, 4.439),
    (25.0, 4.846),
    (30.0, 5.122),
    (35.0, 5.275),
    (40.0, 5.289),
    (45.0, 5.132),
    (50.0, 4.782),
    (55.0, 4.296),
    (60.0, 3.732),
    (65.0, 3.123),
    (70.0, 2.502),
    (75.0, 1.892),
    (80.0, 1.319),
    (85.0, 0.820),
    (90.0, 0.414),
    (95.0, 0.128),
    (100.0, 0.0),
];

const TABLE_66: [(f64, f64); 26] = [
    (0.0, 0.0),
    (0.5, 0.728),
    (0.75, 0.888),
    (1.25, 1.134),
    (2.5, 1.596),
    (5.0, 2.274),
    (7.5, 2.804),
    (10.0, 3.253),
    (15.0, 4.001),
    (20.0, 4.582),
    (25.0, 5.031),
    (30.0, 5.347),
    (35.0, 5.530),
    (40.0, 5.549),
    (45.0, 5.352),
    (50.0, 4.881),
    (55.0, 4.271),
    (60.0, 3.559),
    (65.0, 2.812),
    (70.0, 2.063),
    (75.0, 1.353),
    (80.0, 0.747),
    (85.0, 0.312),
    (90.0, 0.041),
    (95.0, 0.0),
    (100.0, 0.0),
];
