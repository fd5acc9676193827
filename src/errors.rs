use std::error::Error;
use std::fmt::{Display, Formatter};

/// The ways an airfoil designation can be rejected before any geometry is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDesignation {
    /// A 4-digit or 5-digit designation that does not have exactly the right number of decimal
    /// digits. Carries the offending text after whitespace removal.
    InvalidCode(String),

    /// A 6-series designation that does not match the expected `6<family>[(bucket)]-<cl><t>`
    /// grammar. Carries the offending text as it was given.
    ParseFailure(String),
}

impl Display for InvalidDesignation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidDesignation::InvalidCode(code) => {
                write!(f, "invalid NACA designation '{}', expected 4 or 5 digits", code)
            }
            InvalidDesignation::ParseFailure(code) => write!(
                f,
                "could not parse NACA 6-series designation '{}', expected e.g. 65-215, 65(2)-215, 63A-412",
                code
            ),
        }
    }
}

impl Error for InvalidDesignation {}
