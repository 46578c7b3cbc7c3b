//! Taxonomy legend: swatch + label per taxonomy, in grid priority order,
//! led by a toggle-all button for taxonomies.

use iced::widget::{Row, checkbox, mouse_area, row, text};
use iced::{Alignment, Element};

use super::super::state::{Hitgrid, Message, Panel};
use super::super::util::taxonomy_color;
use super::constants::{LEGEND_SWATCH, ROW_TEXT, UNKNOWN_TAXONOMY};
use super::widgets::{swatch, toggle_all_button};
use crate::core::grid::taxonomy_priority;
use crate::core::visibility::Dimension;

pub(crate) fn build_legend(state: &Hitgrid) -> Element<'_, Message> {
    let order = &state.config.taxonomy_order;

    let mut keys: Vec<&String> = state.visibility.taxonomy.keys().collect();
    keys.sort_by_key(|k| taxonomy_priority(k, order));

    let all_checked = state.visibility.all_checked(Dimension::Taxonomy);
    let mut legend: Row<'_, Message> = row![toggle_all_button(Dimension::Taxonomy, all_checked)]
        .spacing(16)
        .align_y(Alignment::Center);

    for key in keys {
        let color = taxonomy_color(&state.dataset, key, UNKNOWN_TAXONOMY);
        let label = state.dataset.taxonomy_label(key).to_string();
        let checked = state.visibility.is_checked(Dimension::Taxonomy, key);

        let owned = key.clone();
        let toggle = checkbox(checked)
            .on_toggle(move |v| Message::SetVisibility(Dimension::Taxonomy, owned.clone(), v))
            .size(12);

        let item = mouse_area(
            row![swatch(color, LEGEND_SWATCH, LEGEND_SWATCH), text(label).size(ROW_TEXT)]
                .spacing(6)
                .align_y(Alignment::Center),
        )
        .on_press(Message::OpenPanel(Panel::Taxonomy(key.clone())));

        legend = legend.push(row![toggle, item].spacing(4).align_y(Alignment::Center));
    }

    legend.wrap().into()
}
