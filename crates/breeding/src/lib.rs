//! # Palpath Breeding
//!
//! Breeding resolution and multi-generation path search over an
//! immutable pal catalog.
//!
//! ## Architecture
//!
//! ```text
//! Catalog (+ unique-breeding overrides)
//!     │
//!     ├──> BreedingContext
//!     │      ├─ override map (unordered parent pair -> child)
//!     │      ├─ override-child set (excluded from numeric resolution)
//!     │      └─ OnceCell<BreedingGraph> (built once, read many)
//!     │
//!     ├──> Resolver
//!     │      ├─ override check first
//!     │      ├─ target power = floor((p1 + p2 + 1) / 2)
//!     │      └─ closest breeding power, smaller id on ties
//!     │
//!     ├──> BreedingGraph (petgraph)
//!     │      ├─ Nodes: pal ids
//!     │      └─ Edges: (partner) -> child, self-results dropped
//!     │
//!     ├──> Path Finder (level-synchronous BFS)
//!     │      ├─ first hit fixes the shortest depth
//!     │      └─ same-depth work drains, deeper work never starts
//!     │
//!     └──> Query Helpers
//!            ├─ outcomes for one parent, grouped by child
//!            └─ parent pairs producing one child
//! ```
//!
//! Every operation is a pure read over data owned by the context;
//! nothing mutates after the one-time graph build, so a shared
//! reference to the context can cross threads freely.

mod context;
mod graph;
mod pathfinder;
mod queries;
mod resolver;
mod types;

pub use context::BreedingContext;
pub use graph::BreedingGraph;
pub use resolver::offspring_power;
pub use types::{BreedEdge, BreedingPath, BreedingStep, ParentOptions, ParentPair, SearchLimits};
