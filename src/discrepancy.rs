//! Discrepancy types produced by verification.
//!
//! Each discrepancy is a self-contained, immutable record of one mismatch
//! between a key type's declared message keys and a locale's resource catalog.
//! The `Display` rendering is a single line derived deterministically from the
//! other fields, so snapshot tests on reports are stable.

use std::{cmp::Ordering, fmt};

use serde::Serialize;
use unic_langid::LanguageIdentifier;

/// Kind of mismatch between declared keys and a resource catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscrepancyKind {
    /// The key type declares no resource base name.
    NoBaseName,
    /// The key type declares no locale list.
    NoLocaleMetadata,
    /// No catalog is resolvable for the base name, locale, and charset.
    CatalogNotFound,
    /// The catalog resolved but contains zero keys.
    EmptyCatalog,
    /// The key type declares zero keys.
    EmptyKeySet,
    /// A declared key has no corresponding catalog entry.
    MissingFromCatalog,
    /// A catalog key has no corresponding declared key.
    UnexpectedInCatalog,
}

impl fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscrepancyKind::NoBaseName => write!(f, "no-base-name"),
            DiscrepancyKind::NoLocaleMetadata => write!(f, "no-locale-metadata"),
            DiscrepancyKind::CatalogNotFound => write!(f, "catalog-not-found"),
            DiscrepancyKind::EmptyCatalog => write!(f, "empty-catalog"),
            DiscrepancyKind::EmptyKeySet => write!(f, "empty-key-set"),
            DiscrepancyKind::MissingFromCatalog => write!(f, "missing-from-catalog"),
            DiscrepancyKind::UnexpectedInCatalog => write!(f, "unexpected-in-catalog"),
        }
    }
}

/// One reported mismatch between declared keys and a locale catalog.
///
/// `locale` is `None` only for [`DiscrepancyKind::NoLocaleMetadata`], which
/// concerns every locale at once and renders with a `*` wildcard. `key` is
/// non-empty only for the key-specific kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discrepancy {
    pub kind: DiscrepancyKind,
    pub key_type: String,
    pub locale: Option<LanguageIdentifier>,
    pub key: String,
}

impl Discrepancy {
    fn new(
        kind: DiscrepancyKind,
        key_type: &str,
        locale: Option<&LanguageIdentifier>,
        key: &str,
    ) -> Self {
        Self {
            kind,
            key_type: key_type.to_string(),
            locale: locale.cloned(),
            key: key.to_string(),
        }
    }

    pub fn no_base_name(key_type: &str, locale: &LanguageIdentifier) -> Self {
        Self::new(DiscrepancyKind::NoBaseName, key_type, Some(locale), "")
    }

    pub fn no_locale_metadata(key_type: &str) -> Self {
        Self::new(DiscrepancyKind::NoLocaleMetadata, key_type, None, "")
    }

    pub fn catalog_not_found(key_type: &str, locale: &LanguageIdentifier) -> Self {
        Self::new(DiscrepancyKind::CatalogNotFound, key_type, Some(locale), "")
    }

    pub fn empty_catalog(key_type: &str, locale: &LanguageIdentifier) -> Self {
        Self::new(DiscrepancyKind::EmptyCatalog, key_type, Some(locale), "")
    }

    pub fn empty_key_set(key_type: &str, locale: &LanguageIdentifier) -> Self {
        Self::new(DiscrepancyKind::EmptyKeySet, key_type, Some(locale), "")
    }

    pub fn missing_from_catalog(key_type: &str, locale: &LanguageIdentifier, key: &str) -> Self {
        Self::new(
            DiscrepancyKind::MissingFromCatalog,
            key_type,
            Some(locale),
            key,
        )
    }

    pub fn unexpected_in_catalog(key_type: &str, locale: &LanguageIdentifier, key: &str) -> Self {
        Self::new(
            DiscrepancyKind::UnexpectedInCatalog,
            key_type,
            Some(locale),
            key,
        )
    }

    /// Locale rendered for display: the canonical identifier, or `*` for
    /// discrepancies that concern all locales.
    pub fn locale_label(&self) -> String {
        match &self.locale {
            Some(locale) => locale.to_string(),
            None => "*".to_string(),
        }
    }

    /// Human-readable message without the kind prefix or locale suffix.
    pub fn description(&self) -> String {
        match self.kind {
            DiscrepancyKind::NoBaseName => {
                format!("key type '{}' declares no resource base name", self.key_type)
            }
            DiscrepancyKind::NoLocaleMetadata => {
                format!("key type '{}' declares no locale metadata", self.key_type)
            }
            DiscrepancyKind::CatalogNotFound => {
                format!("no catalog resolvable for key type '{}'", self.key_type)
            }
            DiscrepancyKind::EmptyCatalog => {
                format!("catalog for key type '{}' contains no keys", self.key_type)
            }
            DiscrepancyKind::EmptyKeySet => {
                format!("key type '{}' declares no keys", self.key_type)
            }
            DiscrepancyKind::MissingFromCatalog => {
                format!(
                    "key '{}' of type '{}' has no catalog entry",
                    self.key, self.key_type
                )
            }
            DiscrepancyKind::UnexpectedInCatalog => {
                format!(
                    "catalog key '{}' matches no declared key of type '{}'",
                    self.key, self.key_type
                )
            }
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}]",
            self.kind,
            self.description(),
            self.locale_label()
        )
    }
}

impl Ord for Discrepancy {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by: key type, locale, kind, key.
        //
        // Key comparison is needed for deterministic ordering because the
        // unexpected-in-catalog tail is derived from HashSet iteration, whose
        // order is non-deterministic across runs.
        self.key_type
            .cmp(&other.key_type)
            .then_with(|| self.locale_label().cmp(&other.locale_label()))
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for Discrepancy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn locale(tag: &str) -> LanguageIdentifier {
        tag.parse().unwrap()
    }

    #[test]
    fn missing_key_renders_kind_key_type_and_locale() {
        let locale = locale("fr-FR");
        let discrepancy = Discrepancy::missing_from_catalog("Colors", &locale, "BLUE");
        assert_eq!(
            discrepancy.to_string(),
            "missing-from-catalog: key 'BLUE' of type 'Colors' has no catalog entry [fr-FR]"
        );
    }

    #[test]
    fn no_locale_metadata_renders_wildcard_locale() {
        let discrepancy = Discrepancy::no_locale_metadata("Colors");
        assert_eq!(discrepancy.locale, None);
        assert_eq!(
            discrepancy.to_string(),
            "no-locale-metadata: key type 'Colors' declares no locale metadata [*]"
        );
    }

    #[test]
    fn non_key_specific_kinds_carry_empty_key() {
        let locale = locale("en");
        for discrepancy in [
            Discrepancy::no_base_name("Colors", &locale),
            Discrepancy::catalog_not_found("Colors", &locale),
            Discrepancy::empty_catalog("Colors", &locale),
            Discrepancy::empty_key_set("Colors", &locale),
        ] {
            assert_eq!(discrepancy.key, "");
        }
    }

    #[test]
    fn rendering_is_reproducible() {
        let locale = locale("de");
        let a = Discrepancy::unexpected_in_catalog("Fruit", &locale, "KIWI");
        let b = Discrepancy::unexpected_in_catalog("Fruit", &locale, "KIWI");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn ordering_is_total_over_locale_then_kind_then_key() {
        let en = locale("en");
        let fr = locale("fr");
        let mut discrepancies = vec![
            Discrepancy::unexpected_in_catalog("Colors", &fr, "B"),
            Discrepancy::missing_from_catalog("Colors", &fr, "A"),
            Discrepancy::unexpected_in_catalog("Colors", &en, "Z"),
            Discrepancy::unexpected_in_catalog("Colors", &en, "A"),
        ];
        discrepancies.sort();
        let keys: Vec<_> = discrepancies
            .iter()
            .map(|d| (d.locale_label(), d.key.clone()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("en".to_string(), "A".to_string()),
                ("en".to_string(), "Z".to_string()),
                ("fr".to_string(), "A".to_string()),
                ("fr".to_string(), "B".to_string()),
            ]
        );
    }
}
