use crate::context::BreedingContext;
use crate::types::{ParentOptions, ParentPair};
use std::collections::{BTreeMap, BTreeSet};

impl BreedingContext {
    /// One pal's outgoing outcomes grouped by child.
    ///
    /// Groups are sorted by child id ascending and each group's
    /// partner list is distinct and ascending, so two builds of the
    /// same catalog produce byte-identical output. Unknown parents
    /// yield an empty list.
    pub fn options_for_parent(&self, parent_id: &str) -> Vec<ParentOptions> {
        let graph = self.graph();

        let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (partner, child) in graph.outgoing(parent_id) {
            grouped.entry(child).or_default().insert(partner);
        }

        grouped
            .into_iter()
            .map(|(child, partners)| ParentOptions {
                child: child.to_string(),
                partners: partners.into_iter().map(str::to_string).collect(),
            })
            .collect()
    }

    /// Every unordered parent pair producing `child_id`, in canonical
    /// smaller-id-first form, deduplicated and sorted by
    /// (parent1, parent2).
    pub fn combinations_for_child(&self, child_id: &str) -> Vec<ParentPair> {
        let graph = self.graph();

        let mut pairs: BTreeSet<(String, String)> = BTreeSet::new();
        for (source, partner) in graph.producers(child_id) {
            let (first, second) = if source <= partner {
                (source, partner)
            } else {
                (partner, source)
            };
            pairs.insert((first.to_string(), second.to_string()));
        }

        pairs
            .into_iter()
            .map(|(parent1, parent2)| ParentPair { parent1, parent2 })
            .collect()
    }
}
