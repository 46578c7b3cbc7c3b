//! Reusable small widgets/helpers used across view modules.

use iced::widget::{Space, button, checkbox, column, container, mouse_area, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length};

use super::super::state::Message;
use super::constants::{BORDER, LIST_ROW_H, MUTED, ROW_TEXT, SMALL_TEXT};
use crate::core::lists::ListEntry;
use crate::core::visibility::Dimension;

/// Solid colored block (grid cells, legend swatches, timeline ticks).
pub(crate) fn swatch(
    color: Color,
    width: f32,
    height: f32,
) -> container::Container<'static, Message> {
    container(Space::new())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(move |_| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        })
}

/// Rounded taxonomy badge ("Rock" on the rock color).
pub(crate) fn badge(label: String, color: Color) -> container::Container<'static, Message> {
    container(text(label).size(ROW_TEXT).color(Color::WHITE))
        .padding([2, 8])
        .style(move |_| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                color,
                width: 0.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
}

/// Panel/modal surface.
pub(crate) fn surface(background: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// `label: value` line, skipped by callers when the value is missing.
pub(crate) fn field_line<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(ROW_TEXT).color(MUTED),
        text(value).size(ROW_TEXT),
    ]
    .spacing(6)
    .into()
}

/// Sort button + toggle-all button above a filter list.
pub(crate) fn list_controls(
    dim: Dimension,
    sort_label: &'static str,
    all_checked: bool,
) -> Element<'static, Message> {
    row![
        button(text(sort_label).size(SMALL_TEXT))
            .on_press(Message::CycleSort(dim))
            .style(button::secondary),
        toggle_all_button(dim, all_checked),
    ]
    .spacing(8)
    .into()
}

/// "Hide all" when every key of `dim` is checked, "Show all" otherwise.
pub(crate) fn toggle_all_button(dim: Dimension, all_checked: bool) -> Element<'static, Message> {
    let label = if all_checked { "Hide all" } else { "Show all" };

    button(text(label).size(SMALL_TEXT))
        .on_press(Message::ToggleAll(dim))
        .style(button::secondary)
        .into()
}

/// One checkbox row: `[x] Label (count)`, optionally with a link to open its panel.
pub(crate) fn entry_row(
    dim: Dimension,
    entry: &ListEntry,
    checked: bool,
    open: Option<Message>,
) -> Element<'static, Message> {
    let key = entry.key.clone();
    let toggle = checkbox(checked)
        .on_toggle(move |v| Message::SetVisibility(dim, key.clone(), v))
        .size(14);

    let label = text(entry.label.clone()).size(ROW_TEXT).width(Length::Fill);
    let label: Element<'static, Message> = match open {
        Some(msg) => mouse_area(label).on_press(msg).into(),
        None => label.into(),
    };

    row![
        toggle,
        label,
        text(entry.count.to_string()).size(SMALL_TEXT).color(MUTED),
    ]
    .spacing(8)
    .height(Length::Fixed(LIST_ROW_H))
    .align_y(Alignment::Center)
    .into()
}

/// Heading + optional muted description.
pub(crate) fn heading(title: String, description: Option<String>) -> Element<'static, Message> {
    let mut col = column![text(title).size(20)].spacing(4);
    if let Some(d) = description {
        col = col.push(text(d).size(ROW_TEXT).color(MUTED));
    }
    col.into()
}
