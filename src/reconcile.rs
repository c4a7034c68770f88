//! Key-set reconciliation: the comparison core of the crate.
//!
//! Given the declared key list of one key type and the key set actually
//! present in one locale's catalog, [`Reconciler::reconcile`] produces the
//! complete list of discrepancies. Mismatches are data, not failures; the
//! reconciler never returns an error and never mutates its inputs.

use std::collections::HashSet;

use unic_langid::LanguageIdentifier;

use crate::discrepancy::Discrepancy;

/// The key set found (or not found) in one locale's resource catalog.
///
/// A catalog that could not be resolved at all is `Absent`, which is distinct
/// from a catalog that resolved but holds zero keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActualKeySet {
    Absent,
    Present(HashSet<String>),
}

impl ActualKeySet {
    /// Builds a `Present` set from any iterator of keys.
    pub fn present<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ActualKeySet::Present(keys.into_iter().map(Into::into).collect())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ActualKeySet::Absent)
    }
}

/// Compares one key type's declared keys against one locale's catalog keys.
///
/// Carries the key-type name and locale so every produced [`Discrepancy`] is
/// self-describing.
pub struct Reconciler<'a> {
    key_type: &'a str,
    locale: &'a LanguageIdentifier,
}

impl<'a> Reconciler<'a> {
    pub fn new(key_type: &'a str, locale: &'a LanguageIdentifier) -> Self {
        Self { key_type, locale }
    }

    /// Computes the full discrepancy list for `expected` versus `actual`.
    ///
    /// `expected` is the declared key list in declaration order; missing keys
    /// are reported in that order. Unexpected catalog keys form an unordered
    /// tail (the set reported always equals `actual \ expected`).
    ///
    /// A catalog-level failure (absent or empty catalog) suppresses the
    /// key-by-key comparison: comparing against a known-bad catalog would
    /// only bury the root cause under one report per declared key. An empty
    /// declared key list is reported but does not suppress the comparison.
    pub fn reconcile(&self, expected: &[String], actual: &ActualKeySet) -> Vec<Discrepancy> {
        let actual_keys = match actual {
            ActualKeySet::Absent => {
                return vec![Discrepancy::catalog_not_found(self.key_type, self.locale)];
            }
            ActualKeySet::Present(keys) => keys,
        };

        let mut discrepancies = Vec::new();

        if actual_keys.is_empty() {
            discrepancies.push(Discrepancy::empty_catalog(self.key_type, self.locale));
        }

        if !discrepancies.is_empty() {
            return discrepancies;
        }

        if expected.is_empty() {
            discrepancies.push(Discrepancy::empty_key_set(self.key_type, self.locale));
        }

        // Working copy: matched keys are removed so the leftover is exactly
        // the set of catalog keys no declaration accounts for.
        let mut unmatched: HashSet<&str> = actual_keys.iter().map(String::as_str).collect();

        for key in expected {
            if !unmatched.remove(key.as_str()) {
                discrepancies.push(Discrepancy::missing_from_catalog(
                    self.key_type,
                    self.locale,
                    key,
                ));
            }
        }

        for key in unmatched {
            discrepancies.push(Discrepancy::unexpected_in_catalog(
                self.key_type,
                self.locale,
                key,
            ));
        }

        discrepancies
    }
}
