//! View constants (layout/sizing/colors).
//! Cell sizes and panel width come from `DisplayConfig`.

use iced::Color;

pub(crate) const HEADER_TEXT: f32 = 14.0;
pub(crate) const ROW_TEXT: f32 = 13.0;
pub(crate) const SMALL_TEXT: f32 = 11.0;

pub(crate) const CELL_SPACING: f32 = 1.0;
pub(crate) const TIMELINE_H: f32 = 28.0;
pub(crate) const TIMELINE_TICK_H: f32 = 6.0;
pub(crate) const RANK_LABEL_W: f32 = 28.0;

pub(crate) const LEGEND_SWATCH: f32 = 14.0;
pub(crate) const MODAL_W: f32 = 560.0;
pub(crate) const VIDEO_H: f32 = 120.0;
pub(crate) const LIST_ROW_H: f32 = 24.0;

/// Cell with no song (or a hidden one).
pub(crate) const EMPTY_CELL: Color = Color::from_rgb(0.2, 0.2, 0.2);
/// Song whose taxonomy has no entry / no usable color.
pub(crate) const UNKNOWN_TAXONOMY: Color = Color::from_rgb(0.467, 0.467, 0.467);

pub(crate) const PANEL_BG: Color = Color::from_rgb(0.12, 0.12, 0.14);
pub(crate) const MODAL_BG: Color = Color::from_rgb(0.1, 0.1, 0.12);
pub(crate) const BORDER: Color = Color::from_rgb(0.3, 0.3, 0.35);
pub(crate) const MUTED: Color = Color::from_rgb(0.6, 0.6, 0.6);
pub(crate) const ERROR: Color = Color::from_rgb(0.9, 0.35, 0.35);
