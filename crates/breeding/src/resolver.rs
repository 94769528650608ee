use crate::context::BreedingContext;
use palpath_catalog::Pal;

/// Offspring breeding power: floor((p1 + p2 + 1) / 2).
///
/// The +1 makes a fractional .5 round up. Half of an odd sum goes to
/// the higher value, never down and never to even; replacing this
/// with float rounding changes resolution results.
pub fn offspring_power(parent1_power: i64, parent2_power: i64) -> i64 {
    (parent1_power + parent2_power + 1) / 2
}

impl BreedingContext {
    /// Resolve the offspring of two parents.
    ///
    /// Returns `None` for unknown ids and for parents excluded from
    /// breeding. Unique-breeding overrides win before any numeric
    /// work; otherwise the breedable pal whose power is closest to
    /// [`offspring_power`] is chosen, smaller id on ties. Children of
    /// overrides never appear as numeric results.
    pub fn resolve_child(&self, parent1_id: &str, parent2_id: &str) -> Option<String> {
        let parent1 = self.catalog.get(parent1_id)?;
        let parent2 = self.catalog.get(parent2_id)?;

        if parent1.ignore_combi || parent2.ignore_combi {
            return None;
        }

        if let Some(child) = self.override_for(&parent1.id, &parent2.id) {
            return Some(child.to_string());
        }

        let target = offspring_power(parent1.breeding_power, parent2.breeding_power);
        self.closest_by_power(target).map(|pal| pal.id.clone())
    }

    /// Breedable pal with power closest to `target`, skipping override
    /// children. Ties prefer the lexicographically smaller id, which
    /// puts base forms ("010") before variants ("010B").
    fn closest_by_power(&self, target: i64) -> Option<&Pal> {
        let mut closest: Option<&Pal> = None;
        let mut closest_diff = i64::MAX;

        for pal in self.catalog.breedable() {
            if self.override_children.contains(&pal.id) {
                continue;
            }

            let diff = (pal.breeding_power - target).abs();
            if diff < closest_diff {
                closest_diff = diff;
                closest = Some(pal);
            } else if diff == closest_diff {
                if let Some(best) = closest {
                    if pal.id < best.id {
                        closest = Some(pal);
                    }
                }
            }
        }

        closest
    }
}
