//! Generation of NACA 4-digit, 5-digit and 6-series airfoil sections from their designation
//! codes, along with the coordinate file writers that consume the generated sections.

use std::error::Error;

pub mod common;
pub mod errors;
pub mod export;
pub mod naca;
pub mod session;

pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub type Point2 = parry2d_f64::na::Point2<f64>;
pub type Aabb2 = parry2d_f64::bounding_volume::Aabb;

pub use errors::InvalidDesignation;
pub use export::DatFormat;
pub use naca::{AirfoilCode, Coordinates, SectionShape, Series, generate, generate_with};
pub use session::{GeneratorConfig, Session};
