//! core/grid.rs
//!
//! Grid layout: turns songs + visibility into a rows x years table of cells.
//!
//! Two layouts:
//! - `Chart`: one row per rank (1..=10), one column per year.
//! - `Taxonomy`: each year's songs grouped by taxonomy, visible songs pinned to the bottom.
//!
//! The layout is rebuilt from scratch on every filter/sort change; the dataset is small.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dataset::MAX_RANK;
use super::types::Dataset;
use super::visibility::Visibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    #[default]
    Chart,
    Taxonomy,
}

/// One grid cell. `song` is an index into `Dataset::songs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCell {
    pub song: Option<usize>,
    pub visible: bool,
}

impl GridCell {
    const EMPTY: GridCell = GridCell {
        song: None,
        visible: false,
    };

    /// Song index, only when the cell is shown as interactive.
    pub fn shown_song(&self) -> Option<usize> {
        self.song.filter(|_| self.visible)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub mode: GridMode,
    pub years: Vec<i32>,
    /// `cells[row][col]`, top row first.
    pub cells: Vec<Vec<GridCell>>,
    /// Every song that occupies a cell, in navigation order (column-major).
    pub order: Vec<usize>,
}

impl GridLayout {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

}

pub fn build_grid(
    dataset: &Dataset,
    visibility: &Visibility,
    mode: GridMode,
    taxonomy_order: &[String],
) -> GridLayout {
    let layout = match mode {
        GridMode::Chart => build_chart_grid(dataset, visibility),
        GridMode::Taxonomy => build_taxonomy_grid(dataset, visibility, taxonomy_order),
    };

    log::debug!(
        "build_grid: {:?} {} rows x {} years, {} songs placed",
        mode,
        layout.rows(),
        layout.years.len(),
        layout.order.len()
    );
    layout
}

fn build_chart_grid(dataset: &Dataset, visibility: &Visibility) -> GridLayout {
    let years = dataset.years();

    // (year, rank) -> first matching song
    let mut by_key: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for (i, song) in dataset.songs.iter().enumerate() {
        by_key.entry((song.chart_year, song.rank)).or_insert(i);
    }

    let cells: Vec<Vec<GridCell>> = (1..=MAX_RANK)
        .map(|rank| {
            years
                .iter()
                .map(|&year| match by_key.get(&(year, rank)) {
                    Some(&i) => GridCell {
                        song: Some(i),
                        visible: visibility.is_visible(&dataset.songs[i]),
                    },
                    None => GridCell::EMPTY,
                })
                .collect()
        })
        .collect();

    // Year-major, rank-minor.
    let by_key = &by_key;
    let order = years
        .iter()
        .flat_map(|&year| {
            (1..=MAX_RANK).filter_map(move |rank| by_key.get(&(year, rank)).copied())
        })
        .collect();

    GridLayout {
        mode: GridMode::Chart,
        years,
        cells,
        order,
    }
}

fn build_taxonomy_grid(
    dataset: &Dataset,
    visibility: &Visibility,
    taxonomy_order: &[String],
) -> GridLayout {
    let years = dataset.years();

    let columns: Vec<Vec<GridCell>> = years
        .iter()
        .map(|&year| {
            let mut hidden: Vec<usize> = Vec::new();
            let mut visible: Vec<usize> = Vec::new();

            for (i, song) in dataset.songs.iter().enumerate() {
                if song.chart_year != year {
                    continue;
                }
                if visibility.is_visible(song) {
                    visible.push(i);
                } else {
                    hidden.push(i);
                }
            }

            // Stable sort: ties keep dataset order.
            let priority =
                |i: &usize| taxonomy_priority(&dataset.songs[*i].genre_taxonomy, taxonomy_order);
            hidden.sort_by_key(priority);
            visible.sort_by_key(priority);

            hidden
                .into_iter()
                .map(|i| GridCell {
                    song: Some(i),
                    visible: false,
                })
                .chain(visible.into_iter().map(|i| GridCell {
                    song: Some(i),
                    visible: true,
                }))
                .collect()
        })
        .collect();

    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    // Bottom-align each column; shorter columns get blank cells on top.
    let cells: Vec<Vec<GridCell>> = (0..rows)
        .map(|row| {
            columns
                .iter()
                .map(|col| {
                    let pad = rows - col.len();
                    if row < pad {
                        GridCell::EMPTY
                    } else {
                        col[row - pad]
                    }
                })
                .collect()
        })
        .collect();

    let order = columns
        .iter()
        .flat_map(|col| col.iter().filter_map(|c| c.song))
        .collect();

    GridLayout {
        mode: GridMode::Taxonomy,
        years,
        cells,
        order,
    }
}

/// Position of `taxonomy` in the display order; unknown taxonomies sort last.
pub fn taxonomy_priority(taxonomy: &str, taxonomy_order: &[String]) -> usize {
    taxonomy_order
        .iter()
        .position(|t| t == taxonomy)
        .unwrap_or(taxonomy_order.len())
}

/// Label for the timeline marker under column `index`: first year, last year,
/// and every year divisible by 10.
pub fn timeline_label(years: &[i32], index: usize) -> Option<i32> {
    let year = *years.get(index)?;
    let is_edge = index == 0 || index + 1 == years.len();
    (is_edge || year % 10 == 0).then_some(year)
}
