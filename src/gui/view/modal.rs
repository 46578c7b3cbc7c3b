//! Song detail modal (overlay above the grid).

use iced::widget::{
    Column, Space, button, center, column, container, mouse_area, opaque, row, stack, text,
};
use iced::{Alignment, Color, Element, Length};

use super::super::state::{Hitgrid, Message, ModalState, Panel};
use super::super::util::{combined_genres, taxonomy_color, video_url};
use super::constants::{MODAL_BG, MODAL_W, MUTED, ROW_TEXT, UNKNOWN_TAXONOMY, VIDEO_H};
use super::widgets::{badge, field_line, surface};
use crate::core::navigation::{
    Direction, TrackSide, combined_title, side_toggle_label, track_for_side,
};
use crate::core::types::{Song, Track};

/// Stack the modal (if open) on top of `base`.
pub(crate) fn with_modal<'a>(
    state: &'a Hitgrid,
    base: Element<'a, Message>,
) -> Element<'a, Message> {
    let Some(modal) = state.modal else {
        return base;
    };
    let Some(song) = state.dataset.song(modal.song) else {
        return base;
    };

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
                ..Default::default()
            }),
    )
    .on_press(Message::CloseModal);

    let content = center(opaque(build_modal(state, song, modal)))
        .width(Length::Fill)
        .height(Length::Fill);

    stack![base, backdrop, content].into()
}

fn build_modal<'a>(state: &'a Hitgrid, song: &'a Song, modal: ModalState) -> Element<'a, Message> {
    let dataset = &state.dataset;

    let header = row![
        text(combined_title(song)).size(22).width(Length::Fill),
        button(text("×")).on_press(Message::CloseModal).style(button::text),
    ]
    .align_y(Alignment::Center);

    let mut details: Column<'_, Message> = column![
        field_line("By:", song.artists.join(", ")),
        field_line(
            "Released:",
            song.release_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "?".into()),
        ),
        field_line("Country:", song.country_code.join(", ")),
        text(format!("#{} for {}", song.rank, song.chart_year)).size(ROW_TEXT),
    ]
    .spacing(4);

    if let Some(peak) = song.peak_pos {
        details = details.push(field_line("Peak:", format!("#{peak}")));
    }
    if let Some(weeks) = song.weeks_on_chart {
        details = details.push(field_line("Weeks on chart:", weeks.to_string()));
    }

    let color = taxonomy_color(dataset, &song.genre_taxonomy, UNKNOWN_TAXONOMY);
    let genres = row![
        mouse_area(badge(
            dataset.taxonomy_label(&song.genre_taxonomy).to_string(),
            color,
        ))
        .on_press(Message::OpenPanel(Panel::Taxonomy(song.genre_taxonomy.clone()))),
        mouse_area(text(combined_genres(song)).size(ROW_TEXT))
            .on_press(Message::OpenPanel(Panel::Genre(song.primary_genre.clone()))),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut controls = row![
        button(text("‹ Prev")).on_press(Message::Navigate(Direction::Prev)),
        button(text("Next ›")).on_press(Message::Navigate(Direction::Next)),
    ]
    .spacing(8);
    if let Some(label) = side_toggle_label(song, modal.side) {
        controls = controls.push(
            button(text(label))
                .on_press(Message::ToggleSide)
                .style(button::secondary),
        );
    }

    let body = column![
        header,
        details,
        genres,
        build_video(track_for_side(song, modal.side), modal.side),
        controls,
    ]
    .spacing(12);

    container(body)
        .padding(20)
        .width(Length::Fixed(MODAL_W))
        .style(surface(MODAL_BG))
        .into()
}

/// The only region that changes when switching sides.
fn build_video(track: Option<&Track>, side: TrackSide) -> Element<'static, Message> {
    let side_label = match side {
        TrackSide::A => "A-side",
        TrackSide::B => "B-side",
    };

    let title = track
        .and_then(Track::display_title)
        .unwrap_or("Untitled")
        .to_string();

    let mut col = column![
        text(side_label).size(12).color(MUTED),
        text(title).size(16),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    match track.and_then(Track::playable_id) {
        Some(id) => {
            col = col.push(button(text("Open video")).on_press(Message::OpenLink(video_url(id))));
        }
        None => {
            col = col.push(text("No video available").size(ROW_TEXT).color(MUTED));
        }
    }

    container(col)
        .width(Length::Fill)
        .height(Length::Fixed(VIDEO_H))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(VIDEO_H))
        .style(surface(Color::BLACK))
        .into()
}
