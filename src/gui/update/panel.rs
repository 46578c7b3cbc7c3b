//! gui/update/panel.rs
//! Side panel tabs, detail panels, list sorting, external links.

use iced::Task;

use crate::core::visibility::Dimension;

use super::super::state::{Hitgrid, Message, Panel, Phase};

pub(crate) fn open_panel(state: &mut Hitgrid, panel: Panel) -> Task<Message> {
    if state.phase != Phase::Ready {
        return Task::none();
    }

    state.panel = match panel {
        // Match the key against known genres (case-insensitive fallback).
        // Unresolved keys stay raw; the view shows a minimal fallback for them.
        Panel::Genre(key) => match state.dataset.resolve_genre(&key) {
            Some((id, _)) => Panel::Genre(id.to_string()),
            None => {
                log::warn!("No genre entry for {:?}", key);
                Panel::Genre(key)
            }
        },
        other => other,
    };

    Task::none()
}

pub(crate) fn close_panel(state: &mut Hitgrid) -> Task<Message> {
    state.panel = Panel::Closed;
    Task::none()
}

pub(crate) fn cycle_sort(state: &mut Hitgrid, dim: Dimension) -> Task<Message> {
    let sort = match dim {
        Dimension::Genre | Dimension::Taxonomy => &mut state.genre_sort,
        Dimension::Country => &mut state.country_sort,
        Dimension::Artist => &mut state.artist_sort,
    };
    *sort = sort.next();

    log::debug!("List sort {:?} -> {:?}", dim, sort);
    Task::none()
}

pub(crate) fn open_link(state: &mut Hitgrid, url: String) -> Task<Message> {
    if let Err(e) = open::that_detached(&url) {
        log::warn!("Failed to open {url}: {e}");
        state.status = format!("Could not open link: {url}");
    }
    Task::none()
}
