//! This module has writers for the plain text coordinate formats generated sections are commonly
//! exchanged in, along with the naming conventions for the files.

use crate::naca::{Coordinates, Series};
use crate::{Point2, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));
static NOT_FILE_SAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.\-]").expect("file name pattern is a valid regex"));

/// The point orderings and precisions available for `.dat` coordinate files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatFormat {
    /// A name line, then the upper surface from trailing edge to leading edge followed by the
    /// lower surface from just after the leading edge to the trailing edge. The x values have
    /// four decimals and the y values five.
    Original,

    /// A name line, then the upper surface and then the lower surface, each from leading edge to
    /// trailing edge, with six decimals.
    #[default]
    Selig,

    /// An "Upper surface" line and the upper surface, then a "Lower surface" line and the lower
    /// surface, each from leading edge to trailing edge, with six decimals.
    Lednicer,
}

impl Display for DatFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatFormat::Original => write!(f, "original"),
            DatFormat::Selig => write!(f, "selig"),
            DatFormat::Lednicer => write!(f, "lednicer"),
        }
    }
}

impl FromStr for DatFormat {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(DatFormat::Original),
            "selig" => Ok(DatFormat::Selig),
            "lednicer" => Ok(DatFormat::Lednicer),
            other => Err(format!("Unknown dat format '{}'", other).into()),
        }
    }
}

/// The display name of a section, "NACA " followed by the designation as entered with leading and
/// trailing whitespace removed. Inside a 6-series designation every whitespace character is
/// replaced by a plain space.
///
/// # Examples
///
/// ```
/// use nacafoil::export::airfoil_name;
/// use nacafoil::Series;
/// assert_eq!(airfoil_name(Series::FourDigit, " 2412 "), "NACA 2412");
/// ```
pub fn airfoil_name(series: Series, text: &str) -> String {
    let trimmed = text.trim();
    match series {
        Series::SixSeries => {
            let spaced = trimmed
                .chars()
                .map(|c| if c.is_whitespace() { ' ' } else { c })
                .collect::<String>();
            format!("NACA {}", spaced)
        }
        _ => format!("NACA {}", trimmed),
    }
}

/// Turn a section name into a safe file stem. Runs of whitespace become a single underscore and
/// anything other than ASCII letters, digits, '_', '-' and '.' is dropped. An empty result becomes
/// "airfoil".
///
/// # Examples
///
/// ```
/// use nacafoil::export::file_stem;
/// assert_eq!(file_stem("NACA 65(2)-215"), "NACA_652-215");
/// assert_eq!(file_stem("()"), "airfoil");
/// ```
pub fn file_stem(name: &str) -> String {
    let joined = WHITESPACE_RUN.replace_all(name, "_");
    let stem = NOT_FILE_SAFE.replace_all(&joined, "");
    if stem.is_empty() {
        "airfoil".to_string()
    } else {
        stem.into_owned()
    }
}

/// Write the section to the text of a `.dat` coordinate file in the given format.
///
/// # Arguments
///
/// * `name`: the section name, written as the first line by the formats that carry one
/// * `coords`: the generated section
/// * `format`: the point ordering and precision to use
///
/// returns: String
pub fn write_dat(name: &str, coords: &Coordinates, format: DatFormat) -> String {
    let mut s = String::new();
    match format {
        DatFormat::Original => {
            s.push_str(&format!("{}\n", name));
            let upper = coords.upper.iter().rev();
            let lower = coords.lower.iter().skip(1);
            for p in upper.chain(lower) {
                s.push_str(&format!("{:.4}     {:.5}\n", p.x, p.y));
            }
        }
        DatFormat::Selig => {
            s.push_str(&format!("{}\n", name));
            push_points(&mut s, &coords.upper);
            push_points(&mut s, &coords.lower);
        }
        DatFormat::Lednicer => {
            s.push_str("Upper surface\n");
            push_points(&mut s, &coords.upper);
            s.push_str("Lower surface\n");
            push_points(&mut s, &coords.lower);
        }
    }
    s
}

fn push_points(s: &mut String, points: &[Point2]) {
    for p in points {
        s.push_str(&format!("{:.6} {:.6}\n", p.x, p.y));
    }
}

/// Write the section to CSV text with an `x,y,side` header, the upper surface rows first and then
/// the lower surface rows, each from leading edge to trailing edge.
pub fn write_csv(coords: &Coordinates) -> String {
    let mut s = String::from("x,y,side\n");
    let tagged = coords
        .upper
        .iter()
        .map(|p| (p, "upper"))
        .chain(coords.lower.iter().map(|p| (p, "lower")));
    for (p, side) in tagged {
        s.push_str(&format!("{:.6},{:.6},{}\n", p.x, p.y, side));
    }
    s
}

/// Save the section as a `.dat` file at the given path.
pub fn save_dat(path: &Path, name: &str, coords: &Coordinates, format: DatFormat) -> Result<()> {
    save_text(path, &write_dat(name, coords, format))
}

/// Save the section as a `.csv` file at the given path.
pub fn save_csv(path: &Path, coords: &Coordinates) -> Result<()> {
    save_text(path, &write_csv(coords))
}

fn save_text(path: &Path, text: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}
