//! core/navigation.rs
//!
//! Song detail navigation: the visible-song list, wrap-around prev/next,
//! and the A/B track toggle rules.

use super::types::{Dataset, Song, Track};
use super::visibility::Visibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackSide {
    #[default]
    A,
    B,
}

impl TrackSide {
    pub fn flip(self) -> Self {
        match self {
            TrackSide::A => TrackSide::B,
            TrackSide::B => TrackSide::A,
        }
    }
}

/// Songs of the navigation `order` that pass the visibility predicate.
pub fn visible_order(order: &[usize], dataset: &Dataset, visibility: &Visibility) -> Vec<usize> {
    order
        .iter()
        .copied()
        .filter(|&i| dataset.song(i).is_some_and(|s| visibility.is_visible(s)))
        .collect()
}

/// Neighbour of `current` in `visible`, wrapping around both ends.
///
/// - empty list -> `None` (navigation is a no-op)
/// - `current` no longer in the list (filters changed) -> first / last entry
pub fn step(visible: &[usize], current: usize, direction: Direction) -> Option<usize> {
    let len = visible.len();
    if len == 0 {
        return None;
    }

    let next_pos = match (visible.iter().position(|&i| i == current), direction) {
        (Some(pos), Direction::Next) => (pos + 1) % len,
        (Some(pos), Direction::Prev) => (pos + len - 1) % len,
        (None, Direction::Next) => 0,
        (None, Direction::Prev) => len - 1,
    };

    visible.get(next_pos).copied()
}

/// True when the song carries a second, playable recording.
pub fn has_second_track(song: &Song) -> bool {
    song.b_side().and_then(Track::playable_id).is_some()
}

/// Label for the A/B toggle button, or `None` when no toggle is shown.
///
/// An untitled second track is an alternate clip of the same song,
/// so its label does not depend on the current side.
pub fn side_toggle_label(song: &Song, side: TrackSide) -> Option<&'static str> {
    if !has_second_track(song) {
        return None;
    }

    let titled = song.b_side().and_then(Track::display_title).is_some();
    Some(match (titled, side) {
        (false, _) => "View other charting version",
        (true, TrackSide::A) => "Show B-side",
        (true, TrackSide::B) => "Show A-side",
    })
}

/// Track for `side`, falling back to the A-side.
pub fn track_for_side(song: &Song, side: TrackSide) -> Option<&Track> {
    match side {
        TrackSide::B if has_second_track(song) => song.b_side(),
        _ => song.a_side(),
    }
}

/// "A / B" when the B-side has a title, otherwise just the A-side title.
pub fn combined_title(song: &Song) -> String {
    let a = song
        .a_side()
        .and_then(Track::display_title)
        .unwrap_or("Untitled");

    match song.b_side().and_then(Track::display_title) {
        Some(b) => format!("{a} / {b}"),
        None => a.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::tests::fixture;
    use crate::core::grid::{GridMode, build_grid};
    use crate::core::visibility::Dimension;

    #[test]
    fn test_step_wraps() {
        let visible = vec![3, 5, 9];
        assert_eq!(step(&visible, 9, Direction::Next), Some(3));
        assert_eq!(step(&visible, 3, Direction::Prev), Some(9));
        assert_eq!(step(&visible, 5, Direction::Next), Some(9));
    }

    #[test]
    fn test_step_empty_is_noop() {
        assert_eq!(step(&[], 0, Direction::Next), None);
        assert_eq!(step(&[], 0, Direction::Prev), None);
    }

    #[test]
    fn test_step_single_song_wraps_to_itself() {
        assert_eq!(step(&[7], 7, Direction::Next), Some(7));
        assert_eq!(step(&[7], 7, Direction::Prev), Some(7));
    }

    #[test]
    fn test_step_from_hidden_song() {
        let visible = vec![3, 5];
        assert_eq!(step(&visible, 4, Direction::Next), Some(3));
        assert_eq!(step(&visible, 4, Direction::Prev), Some(5));
    }

    #[test]
    fn test_visible_order_skips_hidden() {
        let ds = fixture();
        let mut vis = Visibility::from_dataset(&ds);
        let grid = build_grid(&ds, &vis, GridMode::Chart, &[]);
        assert_eq!(visible_order(&grid.order, &ds, &vis), vec![0, 1, 2, 3]);

        vis.set(Dimension::Taxonomy, "rock", false);
        let visible = visible_order(&grid.order, &ds, &vis);
        assert_eq!(visible, vec![0, 2]);
        assert_eq!(step(&visible, 0, Direction::Next), Some(2));
    }

    #[test]
    fn test_two_year_taxonomy_scenario() {
        let ds = fixture();
        let order: Vec<String> = ["pop", "rock", "rnb"].iter().map(|s| s.to_string()).collect();
        let mut vis = Visibility::from_dataset(&ds);
        vis.set(Dimension::Taxonomy, "rock", false);

        let grid = build_grid(&ds, &vis, GridMode::Taxonomy, &order);
        // rock songs (1, 3) are not shown anywhere
        let shown: Vec<usize> = grid
            .cells
            .iter()
            .flatten()
            .filter_map(|c| c.shown_song())
            .collect();
        assert!(!shown.contains(&1));
        assert!(!shown.contains(&3));
        // each column: hidden rock on top, visible song at the bottom
        assert_eq!(grid.cell(1, 0).unwrap().shown_song(), Some(0));
        assert_eq!(grid.cell(1, 1).unwrap().shown_song(), Some(2));

        let visible = visible_order(&grid.order, &ds, &vis);
        assert_eq!(visible, vec![0, 2]);
    }

    #[test]
    fn test_a_side_only_has_no_toggle() {
        let ds = fixture();
        let song = &ds.songs[0];
        assert!(!has_second_track(song));
        assert_eq!(side_toggle_label(song, TrackSide::A), None);
        assert_eq!(track_for_side(song, TrackSide::B), song.a_side());
    }

    #[test]
    fn test_b_side_labels() {
        let ds = fixture();
        let song = &ds.songs[1];
        assert!(has_second_track(song));
        assert_eq!(side_toggle_label(song, TrackSide::A), Some("Show B-side"));
        assert_eq!(side_toggle_label(song, TrackSide::B), Some("Show A-side"));
        assert_eq!(
            track_for_side(song, TrackSide::B).and_then(Track::playable_id),
            Some("ghi")
        );
    }

    #[test]
    fn test_untitled_alternate_label_is_constant() {
        let ds = fixture();
        let song = &ds.songs[2];
        assert!(has_second_track(song));
        assert_eq!(
            side_toggle_label(song, TrackSide::A),
            Some("View other charting version")
        );
        assert_eq!(
            side_toggle_label(song, TrackSide::A.flip()),
            Some("View other charting version")
        );
    }

    #[test]
    fn test_combined_title() {
        let ds = fixture();
        assert_eq!(combined_title(&ds.songs[1]), "Stuck on You / Fame and Fortune");
        assert_eq!(combined_title(&ds.songs[2]), "Tossin' and Turnin'");
    }
}
