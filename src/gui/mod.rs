//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Hitgrid')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - small UI helpers ('util')

pub(crate) mod state;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

use iced::Task;

use crate::config::Config;

// Re-export the entry points main.rs needs.
pub(crate) use state::{Hitgrid, Message};
pub(crate) use update::update;
pub(crate) use view::view;

/// Initial state + the one-time dataset load.
pub(crate) fn boot(config: Config) -> (Hitgrid, Task<Message>) {
    let mut state = Hitgrid::with_config(config);
    let task = update::start_load(&mut state);
    (state, task)
}
