//! This module holds the state of an interactive session: the configuration used for each
//! generation request and the most recently generated section, which renderers and exporters
//! read from.

use crate::common::SamplingBounds;
use crate::errors::InvalidDesignation;
use crate::export::{DatFormat, airfoil_name, file_stem, write_csv, write_dat};
use crate::naca::{AirfoilCode, Coordinates, Series};
use crate::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Configuration for a generation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// The accepted range of point counts and the count used when none is requested
    pub bounds: SamplingBounds,

    /// The `.dat` format used when exporting without naming one
    pub dat_format: DatFormat,
}

impl GeneratorConfig {
    /// Read a configuration from JSON. Missing fields take their default values, and point count
    /// bounds which could resolve to zero or are out of order are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use nacafoil::GeneratorConfig;
    /// let config = GeneratorConfig::from_json(r#"{"dat_format": "lednicer"}"#).unwrap();
    /// assert_eq!(config.bounds.max(), 500);
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(text)?;
        Ok(config)
    }
}

/// A section produced by a session, along with the designation it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// The display name, e.g. "NACA 2412"
    pub name: String,

    pub code: AirfoilCode,

    pub coords: Coordinates,
}

impl Generated {
    /// The file stem exports of this section should be saved under
    pub fn file_stem(&self) -> String {
        file_stem(&self.name)
    }
}

/// Owns the most recently generated section. Each successful generation replaces the previous
/// result entirely, and a failed one leaves it untouched.
#[derive(Debug, Default)]
pub struct Session {
    config: GeneratorConfig,
    last: Option<Generated>,
}

impl Session {
    pub fn new(config: GeneratorConfig) -> Self {
        Session { config, last: None }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Parse the designation and generate its section, replacing the session's last result.
    ///
    /// # Arguments
    ///
    /// * `series`: the family the designation belongs to
    /// * `text`: the designation as entered
    /// * `requested_points`: the number of intervals along the chord, the configured default is
    /// used when `None`. The count is clamped into the configured bounds.
    ///
    /// returns: Result<&Coordinates, InvalidDesignation>
    ///
    /// # Examples
    ///
    /// ```
    /// use nacafoil::{Series, Session};
    /// let mut session = Session::default();
    /// let coords = session.generate(Series::FiveDigit, "23012", None).unwrap();
    /// assert_eq!(coords.len(), 81);
    /// assert!(session.generate(Series::FiveDigit, "2301", None).is_err());
    /// assert_eq!(session.last_name(), Some("NACA 23012"));
    /// ```
    pub fn generate(
        &mut self,
        series: Series,
        text: &str,
        requested_points: Option<usize>,
    ) -> std::result::Result<&Coordinates, InvalidDesignation> {
        let code = AirfoilCode::parse(series, text)?;
        let n = self.config.bounds.resolve(requested_points);
        let generated = Generated {
            name: airfoil_name(series, text),
            code,
            coords: code.coordinates(n),
        };
        debug!("Replacing last result with {}", generated.name);

        let last = self.last.insert(generated);
        Ok(&last.coords)
    }

    /// The most recently generated section, if any
    pub fn last(&self) -> Option<&Generated> {
        self.last.as_ref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last.as_ref().map(|g| g.name.as_str())
    }

    /// Discard the last result
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// The last result as `.dat` text in the given format, or the configured format if `None`.
    pub fn export_dat(&self, format: Option<DatFormat>) -> Option<String> {
        let format = format.unwrap_or(self.config.dat_format);
        self.last
            .as_ref()
            .map(|g| write_dat(&g.name, &g.coords, format))
    }

    /// The last result as CSV text
    pub fn export_csv(&self) -> Option<String> {
        self.last.as_ref().map(|g| write_csv(&g.coords))
    }
}
