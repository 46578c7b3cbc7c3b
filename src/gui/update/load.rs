//! gui/update/load.rs
//! Dataset lifecycle: one background load, then build all view state from it.
//!
//! - The load is the only async work in the app.
//! - Until it succeeds there is no grid, panel or modal (`Phase::Loading` / `Phase::Failed`).

use std::path::PathBuf;
use std::sync::Arc;

use iced::Task;

use crate::core;
use crate::core::Dataset;
use crate::core::visibility::Visibility;

use super::super::state::{Counts, Hitgrid, Message, Panel, Phase};
use super::util::spawn_blocking;

pub(crate) fn start_load(state: &mut Hitgrid) -> Task<Message> {
    state.phase = Phase::Loading;
    state.status = format!("Loading {}...", state.config.dataset_path.display());

    let path: PathBuf = state.config.dataset_path.clone();
    log::info!("Loading dataset from {:?}", path);

    Task::perform(
        async move {
            spawn_blocking(move || core::load_dataset_for_ui(&path))
                .await
                .and_then(|result| result)
                .map(Arc::new)
        },
        Message::DatasetLoaded,
    )
}

/// "Retry" on the error screen. Ignored once loaded.
pub(crate) fn retry_load(state: &mut Hitgrid) -> Task<Message> {
    match state.phase {
        Phase::Failed(_) => start_load(state),
        Phase::Loading | Phase::Ready => Task::none(),
    }
}

pub(crate) fn dataset_loaded(
    state: &mut Hitgrid,
    result: Result<Arc<Dataset>, String>,
) -> Task<Message> {
    match result {
        Ok(dataset) => {
            state.visibility = Visibility::from_dataset(&dataset);
            state.counts = Counts::from_dataset(&dataset);
            state.dataset = dataset;

            state.panel = Panel::Closed;
            state.modal = None;
            state.phase = Phase::Ready;
            state.rebuild_grid();

            log::info!(
                "Dataset ready: {} songs across {} years",
                state.dataset.songs.len(),
                state.grid.years.len()
            );
        }
        Err(e) => {
            log::error!("Dataset load failed: {e}");
            state.status = format!("Could not load dataset: {e}");
            state.phase = Phase::Failed(e);
        }
    }

    Task::none()
}
