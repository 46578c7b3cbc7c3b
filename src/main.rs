//! Hitgrid
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) that shows yearly
//! top-10 chart songs as a grid: one column per year, one colored cell per song,
//! colored by the song's genre taxonomy.
//!
//! # How it's put together
//! - `Hitgrid` = all the state (dataset, filters, sort modes, open panel, open song)
//! - `Message` = something happened (checkbox toggled, cell clicked, dataset loaded)
//! - `update(state, message)` mutates state
//! - `view(state)` draws the UI from state
//!
//! # Behavior
//! - The dataset JSON is read once at startup, off the UI thread.
//!   If it fails, an error screen with a Retry button is shown instead of the grid.
//! - Grid layouts: Chart (rank x year) and Taxonomy (grouped by taxonomy,
//!   visible songs at the bottom).
//! - Side panel filters by genre, taxonomy, country and artist.
//! - Clicking a cell opens the song detail with prev/next over visible songs and an A/B toggle.
//!
//! # Architecture constraints
//! - `core::*` owns every data decision (filters, layout, ordering) and has no GUI code.
//! - `gui::*` renders what core returns and never touches the filesystem.

mod config;
mod core;
mod gui;

use clap::Parser;

fn main() -> iced::Result {
    // Set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = config::CliArgs::parse();
    let config = config::resolve(&cli);
    log::info!("hitgrid starting up, dataset {:?}", config.dataset_path);

    iced::application(move || gui::boot(config.clone()), gui::update, gui::view)
        .title("Hitgrid")
        .window_size(iced::Size::new(1400.0, 860.0))
        .theme(|_: &gui::Hitgrid| iced::Theme::Dark)
        .run()
}
