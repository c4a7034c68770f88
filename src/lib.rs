//! Bundlelint - declared message keys vs. localized resource catalogs
//!
//! Bundlelint verifies that the symbolic message keys a program declares (an
//! enumeration, a generated constant list, a config-driven registry) exactly
//! match the keys present in each locale's resource catalog. Missing keys,
//! stale keys, and empty or unresolvable catalogs are reported as
//! [`Discrepancy`] values before they can surface at runtime.
//!
//! ## Module Structure
//!
//! - `discrepancy`: Discrepancy kinds, records, and their rendering
//! - `reconcile`: Key-set reconciliation (the comparison core)
//! - `sources`: Key-declaration and catalog-lookup collaborator traits
//! - `verifier`: Per-locale and all-locales orchestration
//! - `report`: Report rendering (text, colored terminal, JSON)
//! - `error`: Fault type for precondition violations
//!
//! ## Example
//!
//! ```
//! use bundlelint::{MemoryCatalogSource, StaticKeySource, Verifier};
//!
//! let keys = StaticKeySource::new("Colors")
//!     .base_name("colors")
//!     .locales(["en", "fr"])
//!     .keys(["RED", "GREEN", "BLUE"]);
//! let catalogs = MemoryCatalogSource::new("colors")
//!     .catalog("en", ["RED", "GREEN", "BLUE"])
//!     .catalog("fr", ["RED", "GREEN"]);
//!
//! let discrepancies = Verifier::new(keys, catalogs).verify_all_locales()?;
//! assert_eq!(discrepancies.len(), 1);
//! assert_eq!(discrepancies[0].key, "BLUE");
//! # Ok::<(), bundlelint::Error>(())
//! ```

pub mod discrepancy;
pub mod error;
pub mod reconcile;
pub mod report;
pub mod sources;
pub mod verifier;

pub use discrepancy::{Discrepancy, DiscrepancyKind};
pub use error::Error;
pub use reconcile::{ActualKeySet, Reconciler};
pub use sources::{CatalogSource, DEFAULT_CHARSET, KeySource, MemoryCatalogSource, StaticKeySource};
pub use verifier::Verifier;
