//! core/visibility.rs
//!
//! The four visibility mappings (genre, taxonomy, country, artist) and the
//! composite predicate deciding whether a song is shown.
//!
//! Defaults are deliberately asymmetric:
//! - genres + taxonomies start all-checked (everything visible)
//! - countries + artists start all-unchecked (they only narrow once the user opts in)

use std::collections::BTreeMap;

use super::types::{Dataset, Song};

/// Which visibility mapping an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Genre,
    Taxonomy,
    Country,
    Artist,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    pub genres: BTreeMap<String, bool>,
    pub taxonomy: BTreeMap<String, bool>,
    pub countries: BTreeMap<String, bool>,
    pub artists: BTreeMap<String, bool>,
    /// Song genre strings that resolve to a differently-cased entry id.
    genre_aliases: BTreeMap<String, String>,
}

impl Visibility {
    /// Build the initial mappings for a freshly loaded dataset.
    ///
    /// Keys cover both the metadata maps and every value referenced by a song,
    /// so genres without an entry can still be filtered. Song genres are keyed
    /// by their resolved entry id (see `Dataset::genre_key`).
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut vis = Self::default();

        for key in dataset.genres.keys() {
            vis.genres.insert(key.clone(), true);
        }
        for key in dataset.taxonomy.keys() {
            vis.taxonomy.insert(key.clone(), true);
        }

        for song in &dataset.songs {
            for genre in song.genres() {
                let key = dataset.genre_key(genre);
                if key != genre {
                    vis.genre_aliases.insert(genre.to_string(), key.to_string());
                }
                vis.genres.entry(key.to_string()).or_insert(true);
            }
            vis.taxonomy
                .entry(song.genre_taxonomy.clone())
                .or_insert(true);
            for country in &song.country_code {
                vis.countries.entry(country.clone()).or_insert(false);
            }
            for artist in &song.artists {
                vis.artists.entry(artist.clone()).or_insert(false);
            }
        }

        vis
    }

    pub fn map(&self, dim: Dimension) -> &BTreeMap<String, bool> {
        match dim {
            Dimension::Genre => &self.genres,
            Dimension::Taxonomy => &self.taxonomy,
            Dimension::Country => &self.countries,
            Dimension::Artist => &self.artists,
        }
    }

    fn map_mut(&mut self, dim: Dimension) -> &mut BTreeMap<String, bool> {
        match dim {
            Dimension::Genre => &mut self.genres,
            Dimension::Taxonomy => &mut self.taxonomy,
            Dimension::Country => &mut self.countries,
            Dimension::Artist => &mut self.artists,
        }
    }

    /// Whether `key` is checked. Unknown keys count as unchecked.
    pub fn is_checked(&self, dim: Dimension, key: &str) -> bool {
        self.map(dim).get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, dim: Dimension, key: &str, checked: bool) {
        self.map_mut(dim).insert(key.to_string(), checked);
    }

    pub fn any_checked(&self, dim: Dimension) -> bool {
        self.map(dim).values().any(|&v| v)
    }

    pub fn all_checked(&self, dim: Dimension) -> bool {
        self.map(dim).values().all(|&v| v)
    }

    /// "Toggle all": all checked -> uncheck everything, otherwise check everything.
    ///
    /// Toggling genres also syncs taxonomies to the same state.
    /// Returns the new state.
    pub fn toggle_all(&mut self, dim: Dimension) -> bool {
        let new_state = !self.all_checked(dim);
        set_all(self.map_mut(dim), new_state);

        if dim == Dimension::Genre {
            set_all(&mut self.taxonomy, new_state);
        }

        log::debug!("toggle_all: {:?} -> {}", dim, new_state);
        new_state
    }

    fn genre_key<'a>(&'a self, raw: &'a str) -> &'a str {
        self.genre_aliases.get(raw).map(String::as_str).unwrap_or(raw)
    }

    /// Composite visibility predicate over all four mappings.
    pub fn is_visible(&self, song: &Song) -> bool {
        let genre_ok = || {
            song.genres()
                .any(|g| self.is_checked(Dimension::Genre, self.genre_key(g)))
        };

        let genre_pass = if !self.any_checked(Dimension::Taxonomy) {
            genre_ok()
        } else {
            let tax_ok = self.is_checked(Dimension::Taxonomy, &song.genre_taxonomy);
            if tax_ok && !self.any_checked(Dimension::Genre) {
                true
            } else {
                tax_ok && genre_ok()
            }
        };

        let country_ok = !self.any_checked(Dimension::Country)
            || song
                .country_code
                .iter()
                .any(|c| self.is_checked(Dimension::Country, c));

        let artist_ok = !self.any_checked(Dimension::Artist)
            || song
                .artists
                .iter()
                .any(|a| self.is_checked(Dimension::Artist, a));

        genre_pass && country_ok && artist_ok
    }

    pub fn visible_count(&self, dataset: &Dataset) -> usize {
        dataset.songs.iter().filter(|s| self.is_visible(s)).count()
    }
}

fn set_all(map: &mut BTreeMap<String, bool>, value: bool) {
    for v in map.values_mut() {
        *v = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::tests::fixture;

    #[test]
    fn test_defaults_are_asymmetric() {
        let vis = Visibility::from_dataset(&fixture());
        assert!(vis.all_checked(Dimension::Genre));
        assert!(vis.all_checked(Dimension::Taxonomy));
        assert!(!vis.any_checked(Dimension::Country));
        assert!(!vis.any_checked(Dimension::Artist));
        // Genres referenced only by songs are tracked too.
        assert!(vis.is_checked(Dimension::Genre, "doo-wop"));
        // Differently-cased song genres share the entry's key.
        assert!(vis.is_checked(Dimension::Genre, "rhythm and blues"));
        assert!(!vis.genres.contains_key("Rhythm and Blues"));
    }

    #[test]
    fn test_unchecking_resolved_genre_hides_differently_cased_song() {
        let ds = fixture();
        let mut vis = Visibility::from_dataset(&ds);
        // Song 2 lists "Rhythm and Blues" + "doo-wop"; the entry id is lowercase.
        vis.set(Dimension::Genre, "doo-wop", false);
        assert!(vis.is_visible(&ds.songs[2]));

        vis.set(Dimension::Genre, "rhythm and blues", false);
        assert!(!vis.is_visible(&ds.songs[2]));
        assert_eq!(vis.visible_count(&ds), 3);
    }

    #[test]
    fn test_everything_visible_initially() {
        let ds = fixture();
        let vis = Visibility::from_dataset(&ds);
        assert_eq!(vis.visible_count(&ds), ds.songs.len());
    }

    #[test]
    fn test_taxonomy_off_hides_its_songs() {
        let ds = fixture();
        let mut vis = Visibility::from_dataset(&ds);
        vis.set(Dimension::Taxonomy, "rock", false);
        assert!(!vis.is_visible(&ds.songs[1]));
        assert!(!vis.is_visible(&ds.songs[3]));
        assert!(vis.is_visible(&ds.songs[0]));
    }

    #[test]
    fn test_taxonomy_alone_suffices_when_no_genre_checked() {
        let ds = fixture();
        let mut vis = Visibility::from_dataset(&ds);
        for key in vis.genres.clone().keys() {
            vis.set(Dimension::Genre, key, false);
        }
        for key in vis.taxonomy.clone().keys() {
            vis.set(Dimension::Taxonomy, key, false);
        }
        vis.set(Dimension::Taxonomy, "rock", true);

        assert!(vis.is_visible(&ds.songs[1]));
        assert!(vis.is_visible(&ds.songs[3]));
        assert!(!vis.is_visible(&ds.songs[0]));
    }

    #[test]
    fn test_genre_only_when_no_taxonomy_checked() {
        let ds = fixture();
        let mut vis = Visibility::from_dataset(&ds);
        for key in vis.taxonomy.clone().keys() {
            vis.set(Dimension::Taxonomy, key, false);
        }
        for key in vis.genres.clone().keys() {
            vis.set(Dimension::Genre, key, false);
        }
        // Subgenre match is enough.
        vis.set(Dimension::Genre, "instrumental", true);

        assert!(vis.is_visible(&ds.songs[3]));
        assert!(!vis.is_visible(&ds.songs[1]));
    }

    #[test]
    fn test_taxonomy_and_genre_must_both_pass() {
        let ds = fixture();
        let mut vis = Visibility::from_dataset(&ds);
        vis.set(Dimension::Genre, "surf rock", false);
        vis.set(Dimension::Genre, "instrumental", false);
        assert!(!vis.is_visible(&ds.songs[3]));
        assert!(vis.is_visible(&ds.songs[1]));
    }

    #[test]
    fn test_country_and_artist_are_positive_filters() {
        let ds = fixture();
        let mut vis = Visibility::from_dataset(&ds);

        vis.set(Dimension::Country, "GB", true);
        assert!(vis.is_visible(&ds.songs[3]));
        assert!(!vis.is_visible(&ds.songs[0]));

        vis.set(Dimension::Country, "GB", false);
        vis.set(Dimension::Artist, "Cliff Richard", true);
        assert!(vis.is_visible(&ds.songs[3]));
        assert!(!vis.is_visible(&ds.songs[2]));
    }

    #[test]
    fn test_toggle_all_genres_syncs_taxonomy() {
        let ds = fixture();
        let mut vis = Visibility::from_dataset(&ds);

        assert!(!vis.toggle_all(Dimension::Genre));
        assert!(!vis.any_checked(Dimension::Genre));
        assert!(!vis.any_checked(Dimension::Taxonomy));
        assert_eq!(vis.visible_count(&ds), 0);

        assert!(vis.toggle_all(Dimension::Genre));
        assert!(vis.all_checked(Dimension::Taxonomy));
    }

    #[test]
    fn test_toggle_all_partial_checks_everything() {
        let ds = fixture();
        let mut vis = Visibility::from_dataset(&ds);
        vis.set(Dimension::Country, "US", true);
        assert!(vis.toggle_all(Dimension::Country));
        assert!(vis.all_checked(Dimension::Country));
        // Taxonomy untouched by non-genre toggles.
        assert!(vis.all_checked(Dimension::Taxonomy));
    }

    #[test]
    fn test_double_toggle_restores_mapping() {
        let ds = fixture();
        for dim in [Dimension::Taxonomy, Dimension::Country, Dimension::Artist] {
            let mut vis = Visibility::from_dataset(&ds);
            let before = vis.clone();
            vis.toggle_all(dim);
            vis.toggle_all(dim);
            assert_eq!(vis.map(dim), before.map(dim), "{dim:?}");
        }

        let mut vis = Visibility::from_dataset(&ds);
        let before = vis.clone();
        vis.toggle_all(Dimension::Genre);
        vis.toggle_all(Dimension::Genre);
        assert_eq!(vis, before);
    }
}
