//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Hitgrid, Message};

mod filters;
mod load;
mod modal;
mod panel;
mod util;

pub(crate) use load::start_load;

pub(crate) fn update(state: &mut Hitgrid, message: Message) -> Task<Message> {
    match message {
        // Dataset
        Message::DatasetLoaded(result) => load::dataset_loaded(state, result),
        Message::RetryLoad => load::retry_load(state),

        // Grid
        Message::SetGridMode(mode) => filters::set_grid_mode(state, mode),

        // Filters
        Message::SetVisibility(dim, key, checked) => {
            filters::set_visibility(state, dim, key, checked)
        }
        Message::ToggleAll(dim) => filters::toggle_all(state, dim),

        // Side panel
        Message::OpenPanel(panel) => panel::open_panel(state, panel),
        Message::ClosePanel => panel::close_panel(state),
        Message::CycleSort(dim) => panel::cycle_sort(state, dim),

        // Song detail
        Message::OpenSong(i) => modal::open_song(state, i),
        Message::CloseModal => modal::close_modal(state),
        Message::Navigate(direction) => modal::navigate(state, direction),
        Message::ToggleSide => modal::toggle_side(state),

        // External
        Message::OpenLink(url) => panel::open_link(state, url),
    }
}
