//! core/mod.rs
//!
//! The brain of the app:
//! - Load the dataset JSON (once, read-only)
//! - Decide which songs are visible (genre/taxonomy/country/artist filters)
//! - Shape plain data for the GUI: grid layout, sorted lists, navigation order
//!
//! Everything here is pure data in, data out. The GUI only renders what these
//! functions return, so all of it is unit tested without a window.

pub mod dataset;
pub mod grid;
pub mod lists;
pub mod navigation;
pub mod types;
pub mod visibility;

use std::path::Path;

pub use dataset::load_dataset;
pub use types::Dataset;

/// Async-boundary flavour of [`load_dataset`]: errors flattened to a display string
/// so the result can travel inside a `Message`.
pub fn load_dataset_for_ui(path: &Path) -> Result<Dataset, String> {
    load_dataset(path).map_err(|e| {
        log::error!("{e}");
        e.to_string()
    })
}
