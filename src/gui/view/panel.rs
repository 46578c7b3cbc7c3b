//! Side panel: genre/taxonomy detail panels and the genres/countries/artists/help tabs.
//!
//! Every render is built from scratch off the current state, so toggling a
//! checkbox re-renders an open panel in place with the new values.

use iced::widget::{Column, button, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::super::state::{Hitgrid, Message, Panel};
use super::super::util::taxonomy_color;
use super::constants::{MUTED, PANEL_BG, ROW_TEXT, SMALL_TEXT, UNKNOWN_TAXONOMY};
use super::widgets::{badge, entry_row, field_line, heading, list_controls, surface};
use crate::core::lists::{ListEntry, sorted_entries};
use crate::core::visibility::Dimension;

pub(crate) fn build_panel(state: &Hitgrid) -> Option<Element<'_, Message>> {
    let body: Element<'_, Message> = match &state.panel {
        Panel::Closed => return None,
        Panel::Genres => build_list_tab(state, Dimension::Genre, "Genres"),
        Panel::Countries => build_list_tab(state, Dimension::Country, "Countries"),
        Panel::Artists => build_list_tab(state, Dimension::Artist, "Artists"),
        Panel::Taxonomy(key) => build_taxonomy_panel(state, key),
        Panel::Genre(key) => build_genre_panel(state, key),
        Panel::Help => build_help(),
    };

    let close = row![
        container(text("")).width(Length::Fill),
        button(text("×")).on_press(Message::ClosePanel).style(button::text),
    ];

    Some(
        container(column![close, scrollable(body).height(Length::Fill)].spacing(4))
            .padding(12)
            .width(Length::Fixed(state.config.display.panel_width))
            .height(Length::Fill)
            .style(surface(PANEL_BG))
            .into(),
    )
}

/// Tab buttons shown above the grid.
pub(crate) fn build_tabs(state: &Hitgrid) -> Element<'_, Message> {
    let tab = |label: &'static str, panel: Panel| {
        let active = state.panel == panel;
        button(text(label).size(ROW_TEXT))
            .on_press(if active {
                Message::ClosePanel
            } else {
                Message::OpenPanel(panel)
            })
            .style(if active {
                button::primary
            } else {
                button::secondary
            })
    };

    row![
        tab("Genres", Panel::Genres),
        tab("Countries", Panel::Countries),
        tab("Artists", Panel::Artists),
        tab("Help", Panel::Help),
    ]
    .spacing(6)
    .into()
}

fn build_list_tab<'a>(state: &'a Hitgrid, dim: Dimension, title: &'a str) -> Element<'a, Message> {
    let sort = state.sort_for(dim);
    let map = state.visibility.map(dim);
    let entries = sorted_entries(&state.dataset, dim, map.keys(), state.counts.get(dim), sort);

    let mut list: Column<'_, Message> = column![].spacing(2);
    for entry in &entries {
        let open = (dim == Dimension::Genre)
            .then(|| Message::OpenPanel(Panel::Genre(entry.key.clone())));
        list = list.push(entry_row(
            dim,
            entry,
            state.visibility.is_checked(dim, &entry.key),
            open,
        ));
    }

    let hint = match dim {
        Dimension::Country | Dimension::Artist => {
            Some("Check entries to show only their songs. Nothing checked shows everything.")
        }
        Dimension::Genre | Dimension::Taxonomy => None,
    };

    let mut col = column![
        text(title).size(20),
        list_controls(dim, sort.label(), state.visibility.all_checked(dim)),
    ]
    .spacing(10);
    if let Some(h) = hint {
        col = col.push(text(h).size(SMALL_TEXT).color(MUTED));
    }
    col.push(list).into()
}

fn build_taxonomy_panel<'a>(state: &'a Hitgrid, key: &'a str) -> Element<'a, Message> {
    let dataset = &state.dataset;
    let entry = dataset.taxonomy.get(key);
    let color = taxonomy_color(dataset, key, UNKNOWN_TAXONOMY);

    let mut col = column![
        heading(
            dataset.taxonomy_label(key).to_string(),
            entry.and_then(|e| e.description.clone()),
        ),
        badge(format!("{} songs", state.counts.count(Dimension::Taxonomy, key)), color),
        visibility_row(state, Dimension::Taxonomy, key),
    ]
    .spacing(10);

    if let Some(e) = entry.filter(|e| !e.related.is_empty()) {
        col = col.push(related_links(
            "Related",
            e.related
                .iter()
                .map(|r| (dataset.taxonomy_label(r).to_string(), Panel::Taxonomy(r.clone())))
                .collect(),
        ));
    }

    let entries: Vec<ListEntry> = dataset
        .genres_in_taxonomy(key)
        .into_iter()
        .map(|id| ListEntry {
            key: id.to_string(),
            label: dataset.genre_label(id).to_string(),
            count: state.counts.count(Dimension::Genre, id),
        })
        .collect();

    let mut genres: Column<'_, Message> = column![text("Genres").size(16)].spacing(2);
    if entries.is_empty() {
        genres = genres.push(text("No genres listed.").size(ROW_TEXT).color(MUTED));
    }
    for entry in &entries {
        genres = genres.push(entry_row(
            Dimension::Genre,
            entry,
            state.visibility.is_checked(Dimension::Genre, &entry.key),
            Some(Message::OpenPanel(Panel::Genre(entry.key.clone()))),
        ));
    }

    col.push(genres).into()
}

fn build_genre_panel<'a>(state: &'a Hitgrid, key: &'a str) -> Element<'a, Message> {
    let dataset = &state.dataset;
    let count = state.counts.count(Dimension::Genre, key);

    // Unknown genre: raw key + count only.
    let Some((id, entry)) = dataset.resolve_genre(key) else {
        return column![
            heading(key.to_string(), None),
            text(format!("{count} songs")).size(ROW_TEXT),
            visibility_row(state, Dimension::Genre, key),
        ]
        .spacing(10)
        .into();
    };

    let color = taxonomy_color(dataset, &entry.taxonomy, UNKNOWN_TAXONOMY);
    let taxonomy_badge = mouse_area(badge(
        dataset.taxonomy_label(&entry.taxonomy).to_string(),
        color,
    ))
    .on_press(Message::OpenPanel(Panel::Taxonomy(entry.taxonomy.clone())));

    let mut col = column![
        heading(entry.label.clone(), entry.description.clone()),
        row![taxonomy_badge, text(format!("{count} songs")).size(ROW_TEXT)]
            .spacing(10)
            .align_y(Alignment::Center),
        visibility_row(state, Dimension::Genre, id),
    ]
    .spacing(10);

    if let Some(group) = &entry.genre_group {
        col = col.push(field_line("Group:", group.clone()));
    }

    if !entry.related.is_empty() {
        col = col.push(related_links(
            "Related",
            entry
                .related
                .iter()
                .map(|r| (dataset.genre_label(r).to_string(), Panel::Genre(r.clone())))
                .collect(),
        ));
    }

    if let Some(link) = &entry.link {
        col = col.push(
            button(text("Read more").size(ROW_TEXT))
                .on_press(Message::OpenLink(link.clone()))
                .style(button::secondary),
        );
    }

    col.into()
}

fn visibility_row<'a>(state: &'a Hitgrid, dim: Dimension, key: &'a str) -> Element<'a, Message> {
    let owned = key.to_string();
    iced::widget::checkbox(state.visibility.is_checked(dim, key))
        .label("Show in grid")
        .on_toggle(move |v| Message::SetVisibility(dim, owned.clone(), v))
        .size(14)
        .into()
}

fn related_links(title: &'static str, items: Vec<(String, Panel)>) -> Element<'static, Message> {
    let mut col = column![text(title).size(14).color(MUTED)].spacing(4);
    for (label, panel) in items {
        col = col.push(
            button(text(label).size(ROW_TEXT))
                .on_press(Message::OpenPanel(panel))
                .style(button::text)
                .padding(0),
        );
    }
    col.into()
}

fn build_help() -> Element<'static, Message> {
    column![
        text("Help").size(20),
        text("Each column is a chart year; each cell is one song, colored by its genre taxonomy.")
            .size(ROW_TEXT),
        text("Hover a cell for a summary, click it for details and the video.").size(ROW_TEXT),
        text("Chart mode orders cells by rank.").size(ROW_TEXT),
        text("Taxonomy mode groups each year by taxonomy and pins visible songs to the bottom.")
            .size(ROW_TEXT),
        text("Genres and taxonomies start visible; uncheck them to hide songs.").size(ROW_TEXT),
        text("Show all / Hide all next to the legend flips every taxonomy at once.").size(ROW_TEXT),
        text("Countries and artists start unchecked.").size(ROW_TEXT),
        text("Checking any of them narrows the grid to matching songs.").size(ROW_TEXT),
        text("List sort buttons cycle A-Z, Z-A, most songs, fewest songs.").size(ROW_TEXT),
        text("In the detail view, Prev/Next only visit visible songs and wrap around.")
            .size(ROW_TEXT),
    ]
    .spacing(8)
    .into()
}
