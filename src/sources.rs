//! Collaborator contracts for key declarations and catalog lookup.
//!
//! The verifier core does no introspection and no file I/O of its own: it
//! asks a [`KeySource`] what a key type declares and a [`CatalogSource`] what
//! a locale's catalog actually contains. The in-memory implementations here
//! cover code-generated declarations, configuration-driven setups, and tests;
//! file- or bundle-backed sources plug in through the same traits.

use std::collections::{HashMap, HashSet};

use unic_langid::LanguageIdentifier;

use crate::reconcile::ActualKeySet;

/// Default resource decoding charset when a locale declares none.
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Canonicalizes a locale tag to the form `LanguageIdentifier` renders:
/// POSIX-style `fr_FR` becomes BCP 47 `fr-FR`, and subtag casing is
/// normalized. Unparsable tags are kept as written (separator-replaced), so
/// construction stays infallible.
fn canonical_tag(tag: &str) -> String {
    let tag = tag.replace('_', "-");
    tag.parse::<LanguageIdentifier>()
        .map(|locale| locale.to_string())
        .unwrap_or(tag)
}

/// Supplies the declared message keys and catalog metadata for one key type.
pub trait KeySource {
    /// Name of the key type, used to label discrepancies.
    fn type_name(&self) -> &str;

    /// Base resource name the catalogs are published under, if declared.
    fn base_name(&self) -> Option<&str>;

    /// Declared locale identifiers (e.g. `"en"`, `"fr-FR"`), in declaration
    /// order. Empty means no locales are declared.
    fn locale_identifiers(&self) -> &[String];

    /// Charset the given locale's catalog is encoded in.
    fn charset_for(&self, locale: &LanguageIdentifier) -> &str;

    /// Declared keys, unique, in declaration order. Stable across locales.
    fn expected_keys(&self) -> &[String];
}

/// Resolves the key set of one locale's catalog.
///
/// Implementations must report an unresolvable catalog as
/// [`ActualKeySet::Absent`] rather than blocking or failing. When catalog
/// verification runs locales in parallel, `resolve` is called concurrently.
pub trait CatalogSource {
    fn resolve(
        &self,
        base_name: &str,
        locale: &LanguageIdentifier,
        charset: &str,
    ) -> ActualKeySet;
}

/// Data-driven [`KeySource`] populated at construction time.
#[derive(Debug, Clone)]
pub struct StaticKeySource {
    type_name: String,
    base_name: Option<String>,
    locales: Vec<String>,
    charsets: HashMap<String, String>,
    keys: Vec<String>,
}

impl StaticKeySource {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            base_name: None,
            locales: Vec::new(),
            charsets: HashMap::new(),
            keys: Vec::new(),
        }
    }

    pub fn base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = Some(base_name.into());
        self
    }

    pub fn locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales.extend(locales.into_iter().map(Into::into));
        self
    }

    /// Overrides the charset for one locale; others fall back to
    /// [`DEFAULT_CHARSET`].
    ///
    /// The locale tag is canonicalized the same way declared locale
    /// identifiers are, so `"fr_FR"` and `"fr-FR"` address the same entry.
    pub fn charset(mut self, locale: impl Into<String>, charset: impl Into<String>) -> Self {
        self.charsets
            .insert(canonical_tag(&locale.into()), charset.into());
        self
    }

    /// Appends declared keys, collapsing duplicates while keeping the first
    /// occurrence's position.
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            let key = key.into();
            if !self.keys.contains(&key) {
                self.keys.push(key);
            }
        }
        self
    }
}

impl KeySource for StaticKeySource {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn base_name(&self) -> Option<&str> {
        self.base_name.as_deref()
    }

    fn locale_identifiers(&self) -> &[String] {
        &self.locales
    }

    fn charset_for(&self, locale: &LanguageIdentifier) -> &str {
        self.charsets
            .get(&locale.to_string())
            .map(String::as_str)
            .unwrap_or(DEFAULT_CHARSET)
    }

    fn expected_keys(&self) -> &[String] {
        &self.keys
    }
}

/// Map-backed [`CatalogSource`]: one key set per locale under one base name.
///
/// Charset is irrelevant to an in-memory store and is ignored.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogSource {
    base_name: String,
    catalogs: HashMap<String, HashSet<String>>,
}

impl MemoryCatalogSource {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            catalogs: HashMap::new(),
        }
    }

    pub fn catalog<I, S>(mut self, locale: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalogs
            .insert(locale.into(), keys.into_iter().map(Into::into).collect());
        self
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn resolve(
        &self,
        base_name: &str,
        locale: &LanguageIdentifier,
        _charset: &str,
    ) -> ActualKeySet {
        if base_name != self.base_name {
            return ActualKeySet::Absent;
        }
        match self.catalogs.get(&locale.to_string()) {
            Some(keys) => ActualKeySet::Present(keys.clone()),
            None => ActualKeySet::Absent,
        }
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
    fn static_source_collapses_duplicate_keys_keeping_order() {
        let source = StaticKeySource::new("Colors").keys(["RED", "GREEN", "RED", "BLUE"]);
        let keys: Vec<&str> = source.expected_keys().iter().map(String::as_str).collect();
        assert_eq!(keys, ["RED", "GREEN", "BLUE"]);
    }

    #[test]
    fn charset_falls_back_to_default() {
        let source = StaticKeySource::new("Colors").charset("ru", "ISO-8859-5");
        assert_eq!(source.charset_for(&locale("ru")), "ISO-8859-5");
        assert_eq!(source.charset_for(&locale("en")), DEFAULT_CHARSET);
    }

    #[test]
    fn charset_declared_under_posix_tag_matches_canonical_locale() {
        let source = StaticKeySource::new("Colors")
            .charset("fr_FR", "ISO-8859-1")
            .charset("ru-ru", "ISO-8859-5");
        assert_eq!(source.charset_for(&locale("fr-FR")), "ISO-8859-1");
        assert_eq!(source.charset_for(&locale("ru-RU")), "ISO-8859-5");
    }

    #[test]
    fn memory_catalog_resolves_known_locales() {
        let catalogs = MemoryCatalogSource::new("colors").catalog("en", ["RED"]);
        assert_eq!(
            catalogs.resolve("colors", &locale("en"), DEFAULT_CHARSET),
            ActualKeySet::present(["RED"])
        );
    }

    #[test]
    fn memory_catalog_is_absent_for_unknown_locale_or_base_name() {
        let catalogs = MemoryCatalogSource::new("colors").catalog("en", ["RED"]);
        assert!(
            catalogs
                .resolve("colors", &locale("fr"), DEFAULT_CHARSET)
                .is_absent()
        );
        assert!(
            catalogs
                .resolve("fruit", &locale("en"), DEFAULT_CHARSET)
                .is_absent()
        );
    }

    #[test]
    fn empty_catalog_is_present_not_absent() {
        let catalogs =
            MemoryCatalogSource::new("colors").catalog("en", Vec::<String>::new());
        assert_eq!(
            catalogs.resolve("colors", &locale("en"), DEFAULT_CHARSET),
            ActualKeySet::present(Vec::<String>::new())
        );
    }
}
