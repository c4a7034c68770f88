//! Verification orchestration over key and catalog sources.

use unic_langid::LanguageIdentifier;

use crate::{
    discrepancy::Discrepancy,
    error::Error,
    reconcile::Reconciler,
    sources::{CatalogSource, KeySource},
};

/// Checks a key type's declared keys against its locale catalogs.
///
/// Stateless beyond its two collaborators: every call is a single synchronous
/// pass, and locales are independent of each other, so one locale's failure
/// never hides another's discrepancies.
pub struct Verifier<K, C> {
    keys: K,
    catalogs: C,
}

impl<K: KeySource, C: CatalogSource> Verifier<K, C> {
    pub fn new(keys: K, catalogs: C) -> Self {
        Self { keys, catalogs }
    }

    /// Verifies one locale's catalog against the declared keys.
    ///
    /// Without a declared base name no catalog can be resolved at all, so the
    /// result is a lone `NoBaseName` and the catalog source is not consulted.
    pub fn verify_locale(&self, locale: &LanguageIdentifier) -> Vec<Discrepancy> {
        let key_type = self.keys.type_name();

        let Some(base_name) = self.keys.base_name() else {
            return vec![Discrepancy::no_base_name(key_type, locale)];
        };

        let charset = self.keys.charset_for(locale);
        let actual = self.catalogs.resolve(base_name, locale, charset);

        Reconciler::new(key_type, locale).reconcile(self.keys.expected_keys(), &actual)
    }

    /// Verifies every declared locale, concatenating per-locale results in
    /// declaration order.
    ///
    /// With no declared locales the result is a lone `NoLocaleMetadata`. A
    /// malformed locale identifier is a declaration bug, not a catalog
    /// mismatch, and aborts with [`Error::InvalidLocale`].
    pub fn verify_all_locales(&self) -> Result<Vec<Discrepancy>, Error> {
        let identifiers = self.keys.locale_identifiers();

        if identifiers.is_empty() {
            return Ok(vec![Discrepancy::no_locale_metadata(self.keys.type_name())]);
        }

        let mut discrepancies = Vec::new();
        for identifier in identifiers {
            // POSIX-style tags ("fr_FR") are canonicalized to BCP 47 ("fr-FR").
            let locale: LanguageIdentifier = identifier
                .replace('_', "-")
                .parse()
                .map_err(|_| Error::InvalidLocale(identifier.clone()))?;
            discrepancies.extend(self.verify_locale(&locale));
        }
        Ok(discrepancies)
    }

    /// Like [`verify_all_locales`](Self::verify_all_locales), but flattened
    /// to one rendered diagnostic line per discrepancy.
    pub fn verify_all_rendered(&self) -> Result<Vec<String>, Error> {
        Ok(self
            .verify_all_locales()?
            .iter()
            .map(ToString::to_string)
            .collect())
    }
}
