use crate::catalog::Catalog;
use crate::types::Pal;
use nucleo_matcher::{pattern::Pattern, Matcher};

/// Fuzzy roster search using nucleo-matcher.
///
/// A query is matched against a pal's id, localized name and
/// reference-language name; the best of the three scores ranks the
/// pal. Ties are broken by ascending id so results are deterministic.
pub struct PalSearch {
    matcher: Matcher,
}

impl PalSearch {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Search the roster.
    ///
    /// An empty or whitespace query returns the roster head up to
    /// `limit`. `only_breedable` restricts both branches to pals that
    /// can take part in breeding.
    pub fn search<'c>(
        &mut self,
        catalog: &'c Catalog,
        query: &str,
        only_breedable: bool,
        limit: usize,
    ) -> Vec<&'c Pal> {
        let roster: Vec<&Pal> = if only_breedable {
            catalog.breedable().collect()
        } else {
            catalog.pals().iter().collect()
        };

        let query = query.trim();
        if query.is_empty() {
            return roster.into_iter().take(limit).collect();
        }

        let pattern = Pattern::parse(
            query,
            nucleo_matcher::pattern::CaseMatching::Smart,
            nucleo_matcher::pattern::Normalization::Smart,
        );

        let mut scored: Vec<(&Pal, u32)> = roster
            .into_iter()
            .filter_map(|pal| {
                let id_haystack = nucleo_matcher::Utf32String::from(pal.id.as_str());
                let id_score = pattern.score(id_haystack.slice(..), &mut self.matcher);

                let name_haystack = nucleo_matcher::Utf32String::from(pal.name.as_str());
                let name_score = pattern.score(name_haystack.slice(..), &mut self.matcher);

                let name_en_haystack = nucleo_matcher::Utf32String::from(pal.name_en.as_str());
                let name_en_score = pattern.score(name_en_haystack.slice(..), &mut self.matcher);

                let best = [id_score, name_score, name_en_score]
                    .into_iter()
                    .flatten()
                    .max()?;

                Some((pal, best))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.id.cmp(&b.0.id)));
        scored.truncate(limit);

        scored.into_iter().map(|(pal, _)| pal).collect()
    }
}

impl Default for PalSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Snapshot;

    fn pal(id: &str, name_en: &str, ignore_combi: bool) -> Pal {
        Pal {
            id: id.to_string(),
            name: format!("名-{id}"),
            name_en: name_en.to_string(),
            code: name_en.to_string(),
            breeding_power: 100,
            icon_url: String::new(),
            ignore_combi,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_snapshot(Snapshot {
            pals: vec![
                pal("001", "Lamball", false),
                pal("002", "Cattiva", false),
                pal("003", "Chikipi", false),
                pal("111", "Frostallion", true),
            ],
            unique_breedings: vec![],
            version: String::new(),
            updated_at: String::new(),
        })
        .unwrap()
    }

    #[test]
    fn exact_id_query_ranks_that_pal_first() {
        let catalog = catalog();
        let mut search = PalSearch::new();

        let results = search.search(&catalog, "002", false, 10);
        assert_eq!(results[0].id, "002");
    }

    #[test]
    fn name_query_finds_pal() {
        let catalog = catalog();
        let mut search = PalSearch::new();

        let results = search.search(&catalog, "chiki", false, 10);
        assert!(results.iter().any(|p| p.id == "003"));
    }

    #[test]
    fn empty_query_returns_roster_head_with_limit() {
        let catalog = catalog();
        let mut search = PalSearch::new();

        let results = search.search(&catalog, "  ", false, 2);
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["001", "002"]);
    }

    #[test]
    fn only_breedable_drops_flagged_pals() {
        let catalog = catalog();
        let mut search = PalSearch::new();

        let results = search.search(&catalog, "", true, 10);
        assert!(results.iter().all(|p| !p.ignore_combi));
        assert_eq!(results.len(), 3);
    }
}
