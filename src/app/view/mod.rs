//! UI rendering module
//!
//! The view is a pure projection of [`State`]; nothing here mutates anything.

mod entry_form;
mod settings;
mod summary;

use crate::app::ui_components::{banner_container, modal_backdrop};
use crate::app::{Message, State, WorkspaceTab};
use iced::widget::space::horizontal as horizontal_space;
use iced::widget::{button, center, column, container, opaque, row, stack, text};
use iced::{Element, Length};

/// Main view entry point
pub fn view(state: &State) -> Element<'_, Message> {
    let banners = view_banners(state);

    let tab_bar = row![
        tab_button("Summary", WorkspaceTab::Summary, state.active_tab),
        tab_button("Settings", WorkspaceTab::Settings, state.active_tab),
        horizontal_space(),
        text(if state.online { "online" } else { "offline" })
            .size(13)
            .color(crate::app::ui_components::MUTED),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    let content: Element<'_, Message> = match state.active_tab {
        WorkspaceTab::Summary => summary::view_summary(state),
        WorkspaceTab::Settings => settings::view_settings(state),
    };

    let page: Element<'_, Message> = container(
        column![banners, tab_bar, content]
            .spacing(16)
            .padding(16)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into();

    // Delete confirmation gates the destructive action behind an explicit
    // choice; the backdrop swallows clicks on everything else
    if let Some(id) = state.deleting_id {
        let description = state
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .map_or("this entry", |entry| entry.description.as_str());

        let modal = container(
            column![
                text("Delete entry?").size(18),
                text(format!(
                    "\"{description}\" will be removed. This cannot be undone."
                ))
                .size(14),
                row![
                    button(text("Cancel")).on_press(Message::CancelDelete),
                    button(text("Delete"))
                        .style(button::danger)
                        .on_press(Message::ConfirmDelete),
                ]
                .spacing(8),
            ]
            .spacing(12)
            .padding(20)
            .max_width(380),
        )
        .style(crate::app::ui_components::card_container);

        stack![page, opaque(center(modal).style(modal_backdrop))].into()
    } else {
        page
    }
}

fn view_banners(state: &State) -> Element<'_, Message> {
    if state.notifications.is_empty() {
        return column![].into();
    }

    let banners = state.notifications.iter().map(|banner| {
        let severity = banner.severity;
        container(
            row![
                text(&banner.message).size(14),
                horizontal_space(),
                button(text("x").size(12))
                    .style(button::text)
                    .on_press(Message::DismissNotification(banner.id)),
            ]
            .align_y(iced::Alignment::Center),
        )
        .style(move |theme| banner_container(theme, severity))
        .padding([6, 12])
        .width(Length::Fill)
        .into()
    });

    column(banners).spacing(6).into()
}

fn tab_button(label: &str, tab: WorkspaceTab, active: WorkspaceTab) -> Element<'_, Message> {
    let style = if tab == active {
        button::primary
    } else {
        button::secondary
    };
    button(text(label).size(14))
        .style(style)
        .on_press(Message::TabChanged(tab))
        .into()
}
