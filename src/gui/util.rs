//! Small pure helper functions used by the GUI.
//! - no widgets or state mutation

use iced::Color;

use crate::core::Dataset;
use crate::core::navigation::combined_title;
use crate::core::types::Song;

/// Cell/badge color for a taxonomy; unknown taxonomies or bad colors use `fallback`.
/// Accepts `#rgb` and `#rrggbb` (with or without `#`).
pub(crate) fn taxonomy_color(dataset: &Dataset, taxonomy: &str, fallback: Color) -> Color {
    dataset
        .taxonomy_color(taxonomy)
        .and_then(|hex| hex.trim().parse::<Color>().ok())
        .unwrap_or(fallback)
}

/// Multi-line tooltip text for a grid cell.
pub(crate) fn tooltip_text(song: &Song) -> String {
    let released = song
        .release_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "?".into());

    format!(
        "{}\n{}\nReleased: {}\nRank #{} for {}\n{}",
        combined_title(song),
        song.artists.join(", "),
        released,
        song.rank,
        song.chart_year,
        song.primary_genre
    )
}

/// "primary, sub1, sub2"
pub(crate) fn combined_genres(song: &Song) -> String {
    song.genres().collect::<Vec<_>>().join(", ")
}

pub(crate) fn video_url(youtube_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={youtube_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::tests::fixture;

    #[test]
    fn test_taxonomy_color_fallback() {
        let ds = fixture();
        let fallback = Color::from_rgb8(1, 2, 3);
        assert_eq!(taxonomy_color(&ds, "rock", fallback), Color::from_rgb8(0xd6, 0x27, 0x28));
        assert_eq!(taxonomy_color(&ds, "jazz", fallback), fallback);
    }

    #[test]
    fn test_taxonomy_color_formats() {
        let mut ds = fixture();
        let fallback = Color::from_rgb8(1, 2, 3);
        let mut set = |key: &str, hex: &str| {
            if let Some(entry) = ds.taxonomy.get_mut(key) {
                entry.color = hex.to_string();
            }
        };
        set("pop", "ff0000");
        set("rock", "#0f0");
        set("rnb", "#gg0000");

        assert_eq!(taxonomy_color(&ds, "pop", fallback), Color::from_rgb8(255, 0, 0));
        assert_ne!(taxonomy_color(&ds, "rock", fallback), fallback);
        assert_eq!(taxonomy_color(&ds, "rnb", fallback), fallback);
    }

    #[test]
    fn test_tooltip_and_genres() {
        let ds = fixture();
        let text = tooltip_text(&ds.songs[1]);
        assert!(text.starts_with("Stuck on You / Fame and Fortune\nElvis Presley"));
        assert!(text.contains("Rank #2 for 1960"));
        assert_eq!(combined_genres(&ds.songs[3]), "surf rock, instrumental");
    }
}
