use serde::Serialize;

/// Edge payload in the breeding graph: the partner paired with the
/// source pal. The resulting child is the edge's target node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedEdge {
    pub partner: String,
}

/// One generation in a breeding sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedingStep {
    /// Pal bred from (carried over from the previous step).
    pub from: String,

    /// Pal paired with `from`.
    pub partner: String,

    /// Offspring produced by the pair.
    pub result: String,
}

/// A breeding sequence from start to target.
///
/// Depth 0 (no steps) is the legitimate "start equals target" path,
/// not an absence marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreedingPath {
    pub steps: Vec<BreedingStep>,
    pub depth: usize,
}

/// Hard ceilings for the path search. These are the only bounds on
/// traversal; there is no timeout or cancellation primitive.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Stop after this many completed paths.
    pub max_paths: usize,

    /// States at this depth are dropped without expansion.
    pub max_depth: usize,

    /// Per child, only the first N partners are followed. Bounds the
    /// branching factor; raise it for exhaustive enumeration.
    pub partners_per_child: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_paths: 5,
            max_depth: 10,
            partners_per_child: 3,
        }
    }
}

/// All partners pairing one parent to one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentOptions {
    pub child: String,

    /// Distinct partner ids, ascending.
    pub partners: Vec<String>,
}

/// An unordered parent pair in canonical (smaller id first) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentPair {
    pub parent1: String,
    pub parent2: String,
}
