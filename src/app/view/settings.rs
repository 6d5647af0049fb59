//! Settings tab: theme choice plus a read-only view of the active limits

use crate::app::helpers::formatting::format_currency;
use crate::app::ui_components::{MUTED, card_container};
use crate::app::{Message, State};
use crate::config::ThemeChoice;
use iced::widget::{column, container, pick_list, row, text};
use iced::{Element, Length};
use strum::IntoEnumIterator;

pub fn view_settings(state: &State) -> Element<'_, Message> {
    let theme_row = row![
        text("Theme").size(14),
        pick_list(
            ThemeChoice::iter().collect::<Vec<_>>(),
            Some(state.config.theme_choice),
            Message::ThemeChanged,
        )
        .padding(8),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let limits = container(
        column![
            text("Form limits").size(16),
            limit_row("Maximum amount", format_currency(state.config.max_amount)),
            limit_row(
                "High amount warning above",
                format_currency(state.config.high_amount_threshold),
            ),
            limit_row(
                "Draft autosave delay",
                format!("{} ms", state.config.debounce_delay_ms),
            ),
            limit_row(
                "Banner auto-close",
                format!("{} ms", state.config.alert_auto_close_ms),
            ),
        ]
        .spacing(8)
        .padding(16),
    )
    .style(card_container)
    .width(Length::Fill);

    column![theme_row, limits].spacing(16).into()
}

fn limit_row(label: &str, value: String) -> Element<'_, Message> {
    row![
        text(label).size(14).color(MUTED),
        iced::widget::space::horizontal(),
        text(value).size(14),
    ]
    .into()
}
