//! gui/update/filters.rs
//! Visibility checkboxes, toggle-all, and grid mode.
//!
//! Every change rebuilds the grid in full. An open genre/taxonomy panel needs no
//! extra work: the next `view()` renders it from the new state in place.

use iced::Task;

use crate::core::grid::GridMode;
use crate::core::visibility::Dimension;

use super::super::state::{Hitgrid, Message, Phase};

pub(crate) fn set_grid_mode(state: &mut Hitgrid, mode: GridMode) -> Task<Message> {
    if state.phase != Phase::Ready || state.grid_mode == mode {
        return Task::none();
    }

    log::debug!("Grid mode -> {:?}", mode);
    state.grid_mode = mode;
    state.rebuild_grid();
    Task::none()
}

pub(crate) fn set_visibility(
    state: &mut Hitgrid,
    dim: Dimension,
    key: String,
    checked: bool,
) -> Task<Message> {
    if state.phase != Phase::Ready {
        return Task::none();
    }

    log::debug!("Visibility {:?} {:?} -> {}", dim, key, checked);
    state.visibility.set(dim, &key, checked);
    state.rebuild_grid();
    Task::none()
}

pub(crate) fn toggle_all(state: &mut Hitgrid, dim: Dimension) -> Task<Message> {
    if state.phase != Phase::Ready {
        return Task::none();
    }

    state.visibility.toggle_all(dim);
    state.rebuild_grid();
    Task::none()
}
