//! core/dataset.rs
//!
//! Reading the dataset JSON + read-only lookups over it.
//! Missing genre/taxonomy metadata is never an error: lookups return `None`
//! (or the raw key) and the UI falls back to it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{Dataset, GenreEntry, Song};

/// Highest rank shown in chart mode.
pub const MAX_RANK: u32 = 10;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse the dataset document at `path`.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = Dataset::from_json_str(&contents).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "load_dataset: {} songs, {} taxonomies, {} genres from {:?}",
        dataset.songs.len(),
        dataset.taxonomy.len(),
        dataset.genres.len(),
        path
    );
    Ok(dataset)
}

impl Dataset {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Sorted unique chart years.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.songs.iter().map(|s| s.chart_year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Resolve a genre key to its entry.
    /// Exact match first, then a case-insensitive match (datasets are not always consistent).
    pub fn resolve_genre(&self, key: &str) -> Option<(&str, &GenreEntry)> {
        if let Some((id, entry)) = self.genres.get_key_value(key) {
            return Some((id.as_str(), entry));
        }

        let lowered = key.to_lowercase();
        self.genres
            .iter()
            .find(|(id, _)| id.to_lowercase() == lowered)
            .map(|(id, entry)| (id.as_str(), entry))
    }

    /// Key a song's genre string is filtered and counted under:
    /// the resolved entry id, or the raw string when no entry matches.
    pub fn genre_key<'a>(&'a self, raw: &'a str) -> &'a str {
        self.resolve_genre(raw).map(|(id, _)| id).unwrap_or(raw)
    }

    /// Label for a genre key, or the raw key when it has no entry.
    pub fn genre_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.resolve_genre(key)
            .map(|(_, entry)| entry.label.as_str())
            .unwrap_or(key)
    }

    /// Label for a taxonomy key, or the raw key when it has no entry.
    pub fn taxonomy_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.taxonomy
            .get(key)
            .map(|entry| entry.label.as_str())
            .unwrap_or(key)
    }

    /// Hex color string for a taxonomy, if the taxonomy is known.
    pub fn taxonomy_color(&self, key: &str) -> Option<&str> {
        self.taxonomy.get(key).map(|entry| entry.color.as_str())
    }

    /// Genre ids whose entry belongs to `taxonomy`, sorted by label.
    pub fn genres_in_taxonomy(&self, taxonomy: &str) -> Vec<&str> {
        let mut ids: Vec<(&str, &str)> = self
            .genres
            .iter()
            .filter(|(_, entry)| entry.taxonomy == taxonomy)
            .map(|(id, entry)| (id.as_str(), entry.label.as_str()))
            .collect();
        ids.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()).then(a.0.cmp(b.0)));
        ids.into_iter().map(|(id, _)| id).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    /// Small dataset shared by the core test modules.
    pub(crate) const FIXTURE: &str = r##"{
        "songs": [
            {"chartYear": 1960, "rank": 1, "releaseYear": 1959, "artists": ["Percy Faith"],
             "countryCode": ["US"], "primarygenre": "easy listening", "subgenres": ["orchestral"],
             "genretaxonomy": "pop", "tracks": [{"title": "Theme from A Summer Place", "youtubeId": "abc"}]},
            {"chartYear": 1960, "rank": 2, "releaseYear": 1960, "artists": ["Elvis Presley"],
             "countryCode": ["US"], "primarygenre": "rock and roll", "subgenres": [],
             "genretaxonomy": "rock", "tracks": [{"title": "Stuck on You", "youtubeId": "def"},
                                                 {"title": "Fame and Fortune", "youtubeId": "ghi"}]},
            {"chartYear": 1961, "rank": 1, "releaseYear": 1961, "artists": ["Bobby Lewis"],
             "countryCode": ["US"], "primarygenre": "Rhythm and Blues", "subgenres": ["doo-wop"],
             "genretaxonomy": "rnb", "tracks": [{"title": "Tossin' and Turnin'", "youtubeId": "jkl"},
                                                {"title": "", "youtubeId": "mno"}]},
            {"chartYear": 1961, "rank": 2, "releaseYear": 1961, "artists": ["The Shadows", "Cliff Richard"],
             "countryCode": ["GB"], "primarygenre": "surf rock", "subgenres": ["instrumental"],
             "genretaxonomy": "rock", "tracks": [{"title": "Apache", "youtubeId": "pqr"}],
             "peakPos": 1, "weeksOnChart": 21}
        ],
        "taxonomy": {
            "pop": {"label": "Pop", "color": "#e377c2", "related": ["rnb"]},
            "rock": {"label": "Rock", "color": "#d62728", "description": "Guitars.", "related": []},
            "rnb": {"label": "R&B", "color": "#9467bd", "related": ["pop"]}
        },
        "genres": {
            "easy listening": {"label": "Easy Listening", "taxonomy": "pop", "related": []},
            "rock and roll": {"label": "Rock and Roll", "taxonomy": "rock", "related": ["surf rock"],
                              "genreGroup": "early rock"},
            "rhythm and blues": {"label": "Rhythm & Blues", "taxonomy": "rnb", "related": []},
            "surf rock": {"label": "Surf Rock", "taxonomy": "rock", "related": [],
                          "link": "https://en.wikipedia.org/wiki/Surf_music"}
        }
    }"##;

    pub(crate) fn fixture() -> Dataset {
        Dataset::from_json_str(FIXTURE).expect("fixture parses")
    }

    #[test]
    fn test_parse_fixture() {
        let ds = fixture();
        assert_eq!(ds.songs.len(), 4);
        assert_eq!(ds.taxonomy.len(), 3);
        assert_eq!(ds.songs[3].peak_pos, Some(1));
        assert_eq!(ds.songs[0].weeks_on_chart, None);
    }

    #[test]
    fn test_missing_maps_default_to_empty() {
        let ds = Dataset::from_json_str(r#"{"songs": []}"#).unwrap();
        assert!(ds.taxonomy.is_empty());
        assert!(ds.genres.is_empty());
    }

    #[test]
    fn test_years_sorted_unique() {
        assert_eq!(fixture().years(), vec![1960, 1961]);
    }

    #[test]
    fn test_resolve_genre_case_insensitive() {
        let ds = fixture();
        let (id, entry) = ds.resolve_genre("Rhythm and Blues").unwrap();
        assert_eq!(id, "rhythm and blues");
        assert_eq!(entry.label, "Rhythm & Blues");
        assert!(ds.resolve_genre("doo-wop").is_none());
    }

    #[test]
    fn test_genre_key_normalises_case() {
        let ds = fixture();
        assert_eq!(ds.genre_key("Rhythm and Blues"), "rhythm and blues");
        assert_eq!(ds.genre_key("surf rock"), "surf rock");
        assert_eq!(ds.genre_key("doo-wop"), "doo-wop");
    }

    #[test]
    fn test_label_fallbacks() {
        let ds = fixture();
        assert_eq!(ds.genre_label("surf rock"), "Surf Rock");
        assert_eq!(ds.genre_label("doo-wop"), "doo-wop");
        assert_eq!(ds.taxonomy_label("rnb"), "R&B");
        assert_eq!(ds.taxonomy_label("jazz"), "jazz");
        assert_eq!(ds.taxonomy_color("jazz"), None);
    }

    #[test]
    fn test_genres_in_taxonomy() {
        let ds = fixture();
        assert_eq!(ds.genres_in_taxonomy("rock"), vec!["rock and roll", "surf rock"]);
    }

    #[test]
    fn test_load_dataset_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        let ds = load_dataset(file.path()).unwrap();
        assert_eq!(ds.songs.len(), 4);
    }

    #[test]
    fn test_load_dataset_errors() {
        let missing = load_dataset(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(DatasetError::Read { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let bad = load_dataset(file.path());
        assert!(matches!(bad, Err(DatasetError::Parse { .. })));
    }
}
