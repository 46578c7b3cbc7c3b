//! core/lists.rs
//! Sortable key lists for the side panel (genres, countries, artists).

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use super::types::Dataset;
use super::visibility::Dimension;

/// Secondary sort for a side-panel list. Cycles az -> za -> popular -> unpopular -> az.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListSort {
    #[default]
    Az,
    Za,
    Popular,
    Unpopular,
}

impl ListSort {
    pub fn next(self) -> Self {
        match self {
            ListSort::Az => ListSort::Za,
            ListSort::Za => ListSort::Popular,
            ListSort::Popular => ListSort::Unpopular,
            ListSort::Unpopular => ListSort::Az,
        }
    }

    /// Button label describing the current order.
    pub fn label(self) -> &'static str {
        match self {
            ListSort::Az => "Sort: A-Z",
            ListSort::Za => "Sort: Z-A",
            ListSort::Popular => "Sort: most songs",
            ListSort::Unpopular => "Sort: fewest songs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub key: String,
    pub label: String,
    pub count: usize,
}

/// Number of songs referencing each key of `dim`.
///
/// A song counts once per key even if it lists the key twice
/// (e.g. a genre as both primary and subgenre). Genres are counted
/// under their resolved entry id.
pub fn frequency(dataset: &Dataset, dim: Dimension) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for song in &dataset.songs {
        let keys: BTreeSet<&str> = match dim {
            Dimension::Genre => song.genres().map(|g| dataset.genre_key(g)).collect(),
            Dimension::Taxonomy => std::iter::once(song.genre_taxonomy.as_str()).collect(),
            Dimension::Country => song.country_code.iter().map(String::as_str).collect(),
            Dimension::Artist => song.artists.iter().map(String::as_str).collect(),
        };
        for key in keys {
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
    }

    counts
}

/// Entries for every key in `keys`, labelled and ordered by `sort`.
///
/// Alphabetical order is on the lowercased label, then the raw key.
/// Count ties fall back to alphabetical order.
pub fn sorted_entries<'a>(
    dataset: &Dataset,
    dim: Dimension,
    keys: impl IntoIterator<Item = &'a String>,
    counts: &BTreeMap<String, usize>,
    sort: ListSort,
) -> Vec<ListEntry> {
    let mut entries: Vec<ListEntry> = keys
        .into_iter()
        .map(|key| ListEntry {
            key: key.clone(),
            label: display_label(dataset, dim, key),
            count: counts.get(key).copied().unwrap_or(0),
        })
        .collect();

    entries.sort_by(|a, b| match sort {
        ListSort::Az => alphabetical(a, b),
        ListSort::Za => alphabetical(b, a),
        ListSort::Popular => b.count.cmp(&a.count).then_with(|| alphabetical(a, b)),
        ListSort::Unpopular => a.count.cmp(&b.count).then_with(|| alphabetical(a, b)),
    });

    entries
}

fn alphabetical(a: &ListEntry, b: &ListEntry) -> Ordering {
    a.label
        .to_lowercase()
        .cmp(&b.label.to_lowercase())
        .then_with(|| a.key.cmp(&b.key))
}

fn display_label(dataset: &Dataset, dim: Dimension, key: &str) -> String {
    match dim {
        Dimension::Genre => dataset.genre_label(key).to_string(),
        Dimension::Taxonomy => dataset.taxonomy_label(key).to_string(),
        Dimension::Country | Dimension::Artist => key.to_string(),
    }
}
