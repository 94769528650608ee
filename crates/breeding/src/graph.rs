use crate::context::BreedingContext;
use crate::types::BreedEdge;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

/// One-step breeding outcomes for the whole catalog.
///
/// Nodes are pal ids (every catalog entry gets one, so override
/// children that cannot breed are still addressable as targets);
/// an edge `p1 -> child` carries the partner that produces it.
/// The graph is a pure function of the catalog and is never mutated
/// after [`BreedingContext::graph`] publishes it.
pub struct BreedingGraph {
    graph: DiGraph<String, BreedEdge>,

    /// Pal id -> NodeIndex for fast lookup.
    id_index: HashMap<String, NodeIndex>,
}

impl BreedingGraph {
    fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            id_index: HashMap::new(),
        }
    }

    fn add_pal(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.id_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.id_index.insert(id.to_string(), idx);
        idx
    }

    fn add_outcome(&mut self, from: NodeIndex, child: NodeIndex, partner: &str) {
        self.graph.add_edge(
            from,
            child,
            BreedEdge {
                partner: partner.to_string(),
            },
        );
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// Outgoing `(partner, child)` outcomes of one pal, in catalog
    /// insertion order. Unknown ids yield an empty list.
    pub fn outgoing(&self, id: &str) -> Vec<(&str, &str)> {
        let Some(&idx) = self.id_index.get(id) else {
            return Vec::new();
        };

        let mut edges: Vec<(&str, &str)> = self
            .graph
            .edges(idx)
            .map(|edge| {
                (
                    edge.weight().partner.as_str(),
                    self.graph[edge.target()].as_str(),
                )
            })
            .collect();

        // petgraph walks a node's adjacency newest-first; reverse to
        // get back the order edges were recorded in.
        edges.reverse();
        edges
    }

    /// Every `(source, partner)` pair whose offspring is `child_id`.
    pub fn producers(&self, child_id: &str) -> Vec<(&str, &str)> {
        let Some(&idx) = self.id_index.get(child_id) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Incoming)
            .map(|edge| {
                (
                    self.graph[edge.source()].as_str(),
                    edge.weight().partner.as_str(),
                )
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl BreedingContext {
    /// Full O(n²) resolver sweep over the breedable roster, including
    /// self-pairs. An edge is recorded only when a child is produced
    /// and differs from the source pal, and each (partner, child)
    /// combination is recorded once per source.
    pub(crate) fn build_graph(&self) -> BreedingGraph {
        let mut graph = BreedingGraph::new();

        let mut breedable = Vec::new();
        for pal in self.catalog.pals() {
            let idx = graph.add_pal(&pal.id);
            if !pal.ignore_combi {
                breedable.push((idx, pal));
            }
        }

        for &(from, parent1) in &breedable {
            let mut seen: HashSet<(String, String)> = HashSet::new();

            for &(_, parent2) in &breedable {
                let Some(child) = self.resolve_child(&parent1.id, &parent2.id) else {
                    continue;
                };
                if child == parent1.id {
                    continue;
                }
                if !seen.insert((parent2.id.clone(), child.clone())) {
                    continue;
                }

                match graph.id_index.get(&child).copied() {
                    Some(to) => graph.add_outcome(from, to, &parent2.id),
                    None => log::warn!(
                        "Override child {child} is not in the catalog, edge {} x {} skipped",
                        parent1.id,
                        parent2.id
                    ),
                }
            }
        }

        log::info!(
            "Built breeding graph: {} pals, {} outcomes",
            graph.node_count(),
            graph.edge_count()
        );

        graph
    }
}
