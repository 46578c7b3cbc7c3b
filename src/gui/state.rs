//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::Config;
use crate::core::Dataset;
use crate::core::grid::{GridLayout, GridMode, build_grid};
use crate::core::lists::{ListSort, frequency};
use crate::core::navigation::{Direction, TrackSide};
use crate::core::visibility::{Dimension, Visibility};

/// App lifecycle. Nothing is interactive until the dataset is `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Phase {
    Loading,
    Failed(String),
    Ready,
}

/// What the side panel shows.
///
/// `Taxonomy`/`Genre` are detail panels for one key; the rest are tabs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Panel {
    #[default]
    Closed,
    Genres,
    Taxonomy(String),
    Genre(String),
    Countries,
    Artists,
    Help,
}

/// Open song detail: which song, and which recording is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModalState {
    pub song: usize,
    pub side: TrackSide,
}

/// Per-dimension song counts, computed once per dataset.
#[derive(Debug, Clone, Default)]
pub(crate) struct Counts {
    pub genres: BTreeMap<String, usize>,
    pub taxonomy: BTreeMap<String, usize>,
    pub countries: BTreeMap<String, usize>,
    pub artists: BTreeMap<String, usize>,
}

impl Counts {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            genres: frequency(dataset, Dimension::Genre),
            taxonomy: frequency(dataset, Dimension::Taxonomy),
            countries: frequency(dataset, Dimension::Country),
            artists: frequency(dataset, Dimension::Artist),
        }
    }

    pub fn get(&self, dim: Dimension) -> &BTreeMap<String, usize> {
        match dim {
            Dimension::Genre => &self.genres,
            Dimension::Taxonomy => &self.taxonomy,
            Dimension::Country => &self.countries,
            Dimension::Artist => &self.artists,
        }
    }

    pub fn count(&self, dim: Dimension, key: &str) -> usize {
        self.get(dim).get(key).copied().unwrap_or(0)
    }
}

/// App state
pub(crate) struct Hitgrid {
    pub config: Config,
    pub phase: Phase,
    pub status: String,

    // Data (read-only once loaded)
    pub dataset: Arc<Dataset>,
    pub counts: Counts,

    // Filters
    pub visibility: Visibility,

    // Grid
    pub grid_mode: GridMode,
    pub grid: GridLayout,

    // Side panel
    pub panel: Panel,
    pub genre_sort: ListSort,
    pub country_sort: ListSort,
    pub artist_sort: ListSort,

    // Song detail
    pub modal: Option<ModalState>,
}

impl Hitgrid {
    pub fn with_config(config: Config) -> Self {
        Self {
            grid_mode: config.grid_mode,
            config,
            phase: Phase::Loading,
            status: "Loading dataset...".to_string(),

            dataset: Arc::new(Dataset::default()),
            counts: Counts::default(),

            visibility: Visibility::default(),

            grid: GridLayout::default(),

            panel: Panel::Closed,
            genre_sort: ListSort::Az,
            country_sort: ListSort::Az,
            artist_sort: ListSort::Az,

            modal: None,
        }
    }

    /// Full grid rebuild from the current filters + mode.
    pub fn rebuild_grid(&mut self) {
        self.grid = build_grid(
            &self.dataset,
            &self.visibility,
            self.grid_mode,
            &self.config.taxonomy_order,
        );
        self.status = format!(
            "{} of {} songs visible",
            self.visibility.visible_count(&self.dataset),
            self.dataset.songs.len()
        );
    }

    pub fn sort_for(&self, dim: Dimension) -> ListSort {
        match dim {
            Dimension::Genre | Dimension::Taxonomy => self.genre_sort,
            Dimension::Country => self.country_sort,
            Dimension::Artist => self.artist_sort,
        }
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Dataset
    DatasetLoaded(Result<Arc<Dataset>, String>),
    RetryLoad,

    // Grid
    SetGridMode(GridMode),

    // Filters
    SetVisibility(Dimension, String, bool),
    ToggleAll(Dimension),

    // Side panel
    OpenPanel(Panel),
    ClosePanel,
    CycleSort(Dimension),

    // Song detail
    OpenSong(usize),
    CloseModal,
    Navigate(Direction),
    ToggleSide,

    // External
    OpenLink(String),
}
