//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs are "boring bags of data" deserialized straight from the dataset JSON
//! - No GUI code
//! - No filesystem code
//!
//! The dataset is read-only: nothing in the app ever mutates a `Song`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One recording attached to a chart entry.
/// `tracks[0]` is the A-side, `tracks[1]` (if any) the B-side or an alternate version.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Track {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "youtubeId")]
    pub youtube_id: Option<String>,
}

impl Track {
    /// Display title, if the track has a non-blank one.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Playable video id, if the track has a non-blank one.
    pub fn playable_id(&self) -> Option<&str> {
        self.youtube_id
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// One chart entry: the song at `rank` for `chart_year`.
///
/// `(chart_year, rank)` is the natural key.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Song {
    #[serde(rename = "chartYear")]
    pub chart_year: i32,
    pub rank: u32,
    #[serde(default, rename = "releaseYear")]
    pub release_year: Option<i32>,

    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default, rename = "countryCode")]
    pub country_code: Vec<String>,

    #[serde(rename = "primarygenre")]
    pub primary_genre: String,
    #[serde(default)]
    pub subgenres: Vec<String>,
    #[serde(rename = "genretaxonomy")]
    pub genre_taxonomy: String,

    #[serde(default)]
    pub tracks: Vec<Track>,

    #[serde(default, rename = "peakPos")]
    pub peak_pos: Option<u32>,
    #[serde(default, rename = "weeksOnChart")]
    pub weeks_on_chart: Option<u32>,
}

impl Song {
    /// Primary genre followed by subgenres.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_genre.as_str())
            .chain(self.subgenres.iter().map(String::as_str))
    }

    pub fn a_side(&self) -> Option<&Track> {
        self.tracks.first()
    }

    pub fn b_side(&self) -> Option<&Track> {
        self.tracks.get(1)
    }
}

/// High-level genre category (hip-hop, rock, ...). Drives cell colors.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub related: Vec<String>,
}

/// Finer-grained genre metadata. Songs may reference genres with no entry.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GenreEntry {
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub related: Vec<String>,
    #[serde(default)]
    pub taxonomy: String,
    #[serde(default, rename = "genreGroup")]
    pub genre_group: Option<String>,
    /// External reference page, opened outside the app.
    #[serde(default)]
    pub link: Option<String>,
}

/// The whole dataset document: `{ songs, taxonomy, genres }`.
///
/// `taxonomy` and `genres` fall back to empty maps when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    pub songs: Vec<Song>,
    #[serde(default)]
    pub taxonomy: BTreeMap<String, TaxonomyEntry>,
    #[serde(default)]
    pub genres: BTreeMap<String, GenreEntry>,
}
