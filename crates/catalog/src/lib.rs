//! # Palpath Catalog
//!
//! Immutable in-memory roster of pals plus the manually curated
//! unique-breeding override list.
//!
//! The catalog is loaded once from a snapshot (a JSON file produced by
//! an external ingestion step) and never mutated afterwards. Every
//! consumer (the resolver, the breeding graph, the CLI) reads from the
//! same snapshot for the lifetime of the process; reloading the data
//! means constructing a new catalog.
//!
//! ```text
//! Snapshot (JSON)
//!     │
//!     ├──> Catalog
//!     │      ├─ id index (primary key, lexicographic sort key)
//!     │      ├─ code index (secondary key, first occurrence wins)
//!     │      └─ breedable view (ignoreCombi filtered out)
//!     │
//!     └──> PalSearch (fuzzy lookup over id / name / nameEn)
//! ```

mod catalog;
mod error;
mod search;
mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use search::PalSearch;
pub use types::{Pal, Snapshot, UniqueBreeding};
