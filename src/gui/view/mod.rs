//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod grid;
mod legend;
mod modal;
mod panel;
mod widgets;

use iced::widget::{button, center, column, container, radio, row, text};
use iced::{Alignment, Element, Length};

use super::state::{Hitgrid, Message, Phase};
use crate::core::grid::GridMode;
use constants::{ERROR, HEADER_TEXT, MUTED};

pub(crate) fn view(state: &Hitgrid) -> Element<'_, Message> {
    match &state.phase {
        Phase::Loading => center(text(&state.status).size(HEADER_TEXT).color(MUTED)).into(),
        Phase::Failed(e) => build_error(e),
        Phase::Ready => {
            let main = column![
                build_header(state),
                legend::build_legend(state),
                grid::build_grid(state),
            ]
            .spacing(12)
            .width(Length::Fill);

            let body: Element<'_, Message> = match panel::build_panel(state) {
                Some(side) => row![main, side].spacing(12).into(),
                None => main.into(),
            };

            modal::with_modal(state, container(body).padding(12).into())
        }
    }
}

fn build_header(state: &Hitgrid) -> Element<'_, Message> {
    let mode = Some(state.grid_mode);

    row![
        column![
            text("Hitgrid").size(22),
            text(&state.status).size(12).color(MUTED),
        ]
        .spacing(2),
        container(text("")).width(Length::Fill),
        text("Sort:").size(HEADER_TEXT),
        radio("Chart", GridMode::Chart, mode, Message::SetGridMode),
        radio("Taxonomy", GridMode::Taxonomy, mode, Message::SetGridMode),
        panel::build_tabs(state),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn build_error(error: &str) -> Element<'_, Message> {
    center(
        column![
            text("Could not load the chart dataset").size(20),
            text(error).size(HEADER_TEXT).color(ERROR),
            button("Retry").on_press(Message::RetryLoad),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .into()
}
