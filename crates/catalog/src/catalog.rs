use crate::error::{CatalogError, Result};
use crate::types::{Pal, Snapshot, UniqueBreeding};
use std::collections::HashMap;

/// Immutable pal roster with id and code side-indexes.
///
/// Built once from a [`Snapshot`]; nothing here mutates afterwards, so
/// shared references can be handed out freely across threads.
pub struct Catalog {
    pals: Vec<Pal>,
    overrides: Vec<UniqueBreeding>,
    version: String,
    updated_at: String,

    /// Pal id -> position in `pals`.
    id_index: HashMap<String, usize>,

    /// Secondary code -> position in `pals`. First occurrence wins.
    code_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a parsed snapshot.
    ///
    /// Rejects an empty roster and duplicate ids; a snapshot that
    /// fails here is an ingestion bug, not a runtime condition.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        if snapshot.pals.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut id_index = HashMap::with_capacity(snapshot.pals.len());
        let mut code_index = HashMap::with_capacity(snapshot.pals.len());

        for (pos, pal) in snapshot.pals.iter().enumerate() {
            if id_index.insert(pal.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(pal.id.clone()));
            }
            code_index.entry(pal.code.clone()).or_insert(pos);
        }

        log::info!(
            "Loaded catalog: {} pals, {} unique breedings (version {})",
            snapshot.pals.len(),
            snapshot.unique_breedings.len(),
            snapshot.version
        );

        Ok(Self {
            pals: snapshot.pals,
            overrides: snapshot.unique_breedings,
            version: snapshot.version,
            updated_at: snapshot.updated_at,
            id_index,
            code_index,
        })
    }

    /// Parse and build from raw snapshot JSON.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_slice(bytes)?;
        Self::from_snapshot(snapshot)
    }

    /// Lookup by primary id.
    pub fn get(&self, id: &str) -> Option<&Pal> {
        self.id_index.get(id).map(|&pos| &self.pals[pos])
    }

    /// Lookup by secondary code.
    pub fn get_by_code(&self, code: &str) -> Option<&Pal> {
        self.code_index.get(code).map(|&pos| &self.pals[pos])
    }

    /// Full roster in snapshot order.
    pub fn pals(&self) -> &[Pal] {
        &self.pals
    }

    /// Roster restricted to pals that may take part in ordinary
    /// breeding, in snapshot order.
    pub fn breedable(&self) -> impl Iterator<Item = &Pal> {
        self.pals.iter().filter(|pal| !pal.ignore_combi)
    }

    /// The curated unique-breeding override list.
    pub fn overrides(&self) -> &[UniqueBreeding] {
        &self.overrides
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn len(&self) -> usize {
        self.pals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pals.is_empty()
    }
}
