//! Chart grid (rank/taxonomy x year) + timeline row.
//!
//! Renders the `GridLayout` built in core; no layout decisions happen here.

use iced::widget::{Column, Row, column, container, mouse_area, row, scrollable, text, tooltip};
use iced::{Alignment, Element, Length};

use super::super::state::{Hitgrid, Message};
use super::super::util::{taxonomy_color, tooltip_text};
use super::constants::{
    CELL_SPACING, EMPTY_CELL, MUTED, RANK_LABEL_W, SMALL_TEXT, TIMELINE_H, TIMELINE_TICK_H,
    UNKNOWN_TAXONOMY,
};
use super::widgets::{surface, swatch};
use crate::core::grid::{GridCell, GridMode, timeline_label};

pub(crate) fn build_grid(state: &Hitgrid) -> Element<'_, Message> {
    let mut rows: Column<'_, Message> = column![].spacing(CELL_SPACING);

    for r in 0..state.grid.rows() {
        let label = match state.grid.mode {
            GridMode::Chart => (r + 1).to_string(),
            GridMode::Taxonomy => String::new(),
        };

        let mut cells: Row<'_, Message> = row![
            text(label)
                .size(SMALL_TEXT)
                .color(MUTED)
                .width(Length::Fixed(RANK_LABEL_W))
        ]
        .spacing(CELL_SPACING)
        .align_y(Alignment::Center);

        for col in 0..state.grid.years.len() {
            let cell = state.grid.cell(r, col).copied().unwrap_or_default();
            cells = cells.push(build_cell(state, cell));
        }

        rows = rows.push(cells);
    }

    rows = rows.push(build_timeline(state));

    scrollable(container(rows).padding(8))
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::default(),
            horizontal: scrollable::Scrollbar::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn build_cell(state: &Hitgrid, cell: GridCell) -> Element<'_, Message> {
    let display = &state.config.display;

    // Hidden songs render exactly like empty cells and are not clickable.
    let Some(index) = cell.shown_song() else {
        return swatch(EMPTY_CELL, display.cell_width, display.cell_height).into();
    };
    let Some(song) = state.dataset.song(index) else {
        return swatch(EMPTY_CELL, display.cell_width, display.cell_height).into();
    };

    let color = taxonomy_color(&state.dataset, &song.genre_taxonomy, UNKNOWN_TAXONOMY);
    let block = mouse_area(swatch(color, display.cell_width, display.cell_height))
        .on_press(Message::OpenSong(index));

    tooltip(
        block,
        container(text(tooltip_text(song)).size(SMALL_TEXT))
            .padding(6)
            .style(surface(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.85))),
        tooltip::Position::FollowCursor,
    )
    .into()
}

/// One tick per year column; labels on the first/last year and every decade.
fn build_timeline(state: &Hitgrid) -> Element<'_, Message> {
    let width = state.config.display.cell_width;
    let years = &state.grid.years;

    let mut ticks: Row<'_, Message> = row![container(text("")).width(Length::Fixed(RANK_LABEL_W))]
        .spacing(CELL_SPACING);

    for i in 0..years.len() {
        let label = timeline_label(years, i)
            .map(|y| y.to_string())
            .unwrap_or_default();

        let marker = column![
            swatch(MUTED, 1.0, TIMELINE_TICK_H),
            text(label).size(SMALL_TEXT - 1.0).color(MUTED),
        ]
        .spacing(2)
        .width(Length::Fixed(width))
        .height(Length::Fixed(TIMELINE_H))
        .align_x(Alignment::Start);

        ticks = ticks.push(marker);
    }

    ticks.into()
}
