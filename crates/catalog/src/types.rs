use serde::{Deserialize, Serialize};

/// One breedable creature in the roster.
///
/// Field names mirror the upstream data file, which is camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pal {
    /// Stable dex-derived key. Variants carry a letter suffix
    /// ("010" vs "010B"), so plain lexicographic order puts the base
    /// form first.
    pub id: String,

    /// Localized display name.
    pub name: String,

    /// Reference-language display name.
    pub name_en: String,

    /// Secondary lookup code used by the upstream data source.
    pub code: String,

    /// The sole numeric trait driving ordinary offspring resolution.
    pub breeding_power: i64,

    /// Opaque icon reference; never interpreted here.
    pub icon_url: String,

    /// Pals flagged here cannot take part in ordinary breeding,
    /// as parent or as numeric result.
    #[serde(default)]
    pub ignore_combi: bool,
}

/// A manually curated breeding outcome the numeric rule would not
/// produce. The parent pair is unordered: (A, B) and (B, A) yield the
/// same child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueBreeding {
    pub parent1: String,
    pub parent2: String,
    pub child: String,
}

/// The opaque immutable load-time input: roster, overrides and a
/// version/update tag from the ingestion step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub pals: Vec<Pal>,

    #[serde(default)]
    pub unique_breedings: Vec<UniqueBreeding>,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub updated_at: String,
}
