//! gui/update/modal.rs
//! Song detail modal: open/close, prev/next over visible songs, A/B side.
//!
//! - Songs are addressed by their index into `Dataset::songs`.
//! - Navigation follows the current grid order and skips hidden songs.

use iced::Task;

use crate::core::navigation::{Direction, TrackSide, has_second_track, step, visible_order};

use super::super::state::{Hitgrid, Message, ModalState, Phase};

pub(crate) fn open_song(state: &mut Hitgrid, index: usize) -> Task<Message> {
    if state.phase != Phase::Ready || state.dataset.song(index).is_none() {
        return Task::none();
    }

    state.modal = Some(ModalState {
        song: index,
        side: TrackSide::A,
    });
    Task::none()
}

pub(crate) fn close_modal(state: &mut Hitgrid) -> Task<Message> {
    state.modal = None;
    Task::none()
}

pub(crate) fn navigate(state: &mut Hitgrid, direction: Direction) -> Task<Message> {
    let Some(current) = state.modal.map(|m| m.song) else {
        return Task::none();
    };

    let visible = visible_order(&state.grid.order, &state.dataset, &state.visibility);
    let Some(target) = step(&visible, current, direction) else {
        log::debug!("navigate: no visible songs, ignoring {:?}", direction);
        return Task::none();
    };

    state.modal = Some(ModalState {
        song: target,
        side: TrackSide::A,
    });
    Task::none()
}

/// Flip A/B. Only the video region depends on `side`.
pub(crate) fn toggle_side(state: &mut Hitgrid) -> Task<Message> {
    let Some(modal) = state.modal.as_mut() else {
        return Task::none();
    };

    let Some(song) = state.dataset.song(modal.song) else {
        return Task::none();
    };

    if has_second_track(song) {
        modal.side = modal.side.flip();
    }
    Task::none()
}
