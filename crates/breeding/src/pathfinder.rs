use crate::context::BreedingContext;
use crate::types::{BreedingPath, BreedingStep, SearchLimits};
use std::collections::{HashMap, VecDeque};

/// One frontier entry: the pal reached so far and the steps taken.
struct SearchState {
    pal_id: String,
    steps: Vec<BreedingStep>,
    depth: usize,
}

impl BreedingContext {
    /// Find shortest breeding sequences from `start_id` to `target_id`.
    ///
    /// Level-synchronous BFS over the breeding graph. The first path
    /// found fixes the shortest depth; work already queued at that
    /// depth still drains, so ties discovered later in the same level
    /// are kept, but deeper levels are never started. Results come
    /// back in discovery order.
    ///
    /// Unknown ids yield an empty list. `start_id == target_id` yields
    /// exactly one zero-step path of depth 0 without touching the
    /// graph.
    pub fn find_paths(
        &self,
        start_id: &str,
        target_id: &str,
        limits: SearchLimits,
    ) -> Vec<BreedingPath> {
        if self.catalog.get(start_id).is_none() || self.catalog.get(target_id).is_none() {
            return Vec::new();
        }

        if start_id == target_id {
            return vec![BreedingPath {
                steps: Vec::new(),
                depth: 0,
            }];
        }

        let graph = self.graph();
        let mut paths: Vec<BreedingPath> = Vec::new();

        let mut queue = VecDeque::new();
        queue.push_back(SearchState {
            pal_id: start_id.to_string(),
            steps: Vec::new(),
            depth: 0,
        });

        // Best depth seen per intermediate pal. Strictly longer
        // revisits are pruned; equal-depth ties re-enqueue so every
        // equally short route survives.
        let mut best_depth: HashMap<String, usize> = HashMap::new();

        // Set by the first completed path; phase two only drains
        // states already queued at this depth.
        let mut target_depth: Option<usize> = None;

        'search: while let Some(state) = queue.pop_front() {
            if paths.len() >= limits.max_paths {
                break;
            }
            if let Some(found) = target_depth {
                if state.depth > found {
                    break;
                }
            }
            if state.depth >= limits.max_depth {
                continue;
            }

            let next_depth = state.depth + 1;

            for (child_id, partners) in group_by_child(graph.outgoing(&state.pal_id)) {
                if let Some(&known) = best_depth.get(child_id) {
                    if known < next_depth {
                        continue;
                    }
                }

                // Parallel breeding options for the same child, capped
                // to bound the branching factor.
                for partner_id in partners.iter().take(limits.partners_per_child) {
                    let mut steps = state.steps.clone();
                    steps.push(BreedingStep {
                        from: state.pal_id.clone(),
                        partner: (*partner_id).to_string(),
                        result: child_id.to_string(),
                    });

                    if child_id == target_id {
                        target_depth.get_or_insert(next_depth);
                        paths.push(BreedingPath {
                            steps,
                            depth: next_depth,
                        });
                        if paths.len() >= limits.max_paths {
                            break 'search;
                        }
                    } else {
                        best_depth.insert(child_id.to_string(), next_depth);
                        queue.push_back(SearchState {
                            pal_id: child_id.to_string(),
                            steps,
                            depth: next_depth,
                        });
                    }
                }
            }
        }

        paths
    }
}

/// Group edges by child, keeping the first-seen child order and each
/// child's partner order.
fn group_by_child<'a>(edges: Vec<(&'a str, &'a str)>) -> Vec<(&'a str, Vec<&'a str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (partner, child) in edges {
        match positions.get(child) {
            Some(&pos) => groups[pos].1.push(partner),
            None => {
                positions.insert(child, groups.len());
                groups.push((child, vec![partner]));
            }
        }
    }

    groups
}
