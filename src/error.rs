//! Error type for the bundlelint crate.
//!
//! Mismatches between declared keys and catalog keys are results, not errors:
//! they are reported as [`crate::Discrepancy`] values. This type covers genuine
//! faults only, which a caller must not silently swallow.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A declared locale identifier could not be parsed.
    ///
    /// Locale identifiers are expected to be validated at declaration time,
    /// so a malformed one is a precondition violation rather than a
    /// reportable discrepancy.
    #[error("invalid locale identifier `{0}`")]
    InvalidLocale(String),
}
