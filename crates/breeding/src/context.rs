use crate::graph::BreedingGraph;
use once_cell::sync::OnceCell;
use palpath_catalog::Catalog;
use std::collections::{HashMap, HashSet};

/// Owns the catalog and everything derived from it: the override
/// lookup table, the set of override children barred from numeric
/// resolution, and the lazily built breeding graph.
///
/// This is the single shared resource of the crate. Construct one per
/// loaded dataset and pass it by reference; reloading the catalog
/// means constructing a new context. The graph cell publishes exactly
/// one build even under concurrent first calls, and reads after
/// publication need no synchronization.
pub struct BreedingContext {
    pub(crate) catalog: Catalog,

    /// Canonical (smaller id, larger id) pair -> child id.
    pub(crate) overrides: HashMap<(String, String), String>,

    /// Children of overrides, precomputed once. An override result is
    /// reachable only through its designated parent pair.
    pub(crate) override_children: HashSet<String>,

    pub(crate) graph: OnceCell<BreedingGraph>,
}

impl BreedingContext {
    pub fn new(catalog: Catalog) -> Self {
        let mut overrides = HashMap::new();
        let mut override_children = HashSet::new();

        for combo in catalog.overrides() {
            overrides.insert(
                canonical_pair(&combo.parent1, &combo.parent2),
                combo.child.clone(),
            );
            override_children.insert(combo.child.clone());
        }

        Self {
            catalog,
            overrides,
            override_children,
            graph: OnceCell::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The breeding graph, built on first access and cached for the
    /// lifetime of the context.
    pub fn graph(&self) -> &BreedingGraph {
        if let Some(graph) = self.graph.get() {
            log::debug!("Breeding graph cache hit");
            return graph;
        }
        self.graph.get_or_init(|| self.build_graph())
    }

    pub(crate) fn override_for(&self, parent1: &str, parent2: &str) -> Option<&str> {
        self.overrides
            .get(&canonical_pair(parent1, parent2))
            .map(String::as_str)
    }
}

fn canonical_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palpath_catalog::{Pal, Snapshot, UniqueBreeding};

    fn pal(id: &str, power: i64) -> Pal {
        Pal {
            id: id.to_string(),
            name: id.to_string(),
            name_en: id.to_string(),
            code: id.to_string(),
            breeding_power: power,
            icon_url: String::new(),
            ignore_combi: false,
        }
    }

    #[test]
    fn override_lookup_is_unordered() {
        let catalog = Catalog::from_snapshot(Snapshot {
            pals: vec![pal("001", 100), pal("002", 200), pal("003", 300)],
            unique_breedings: vec![UniqueBreeding {
                parent1: "002".to_string(),
                parent2: "001".to_string(),
                child: "003".to_string(),
            }],
            version: String::new(),
            updated_at: String::new(),
        })
        .unwrap();

        let ctx = BreedingContext::new(catalog);
        assert_eq!(ctx.override_for("001", "002"), Some("003"));
        assert_eq!(ctx.override_for("002", "001"), Some("003"));
        assert_eq!(ctx.override_for("001", "003"), None);
        assert!(ctx.override_children.contains("003"));
    }
}
