//! Summary tab: totals, the entry form and the session ledger

use crate::app::helpers::formatting::{format_currency, format_date};
use crate::app::ui_components::{ERROR, MUTED, SUCCESS, card_container};
use crate::app::{Entry, Message, State};
use iced::widget::space::horizontal as horizontal_space;
use iced::widget::{button, column, container, row, scrollable, text, tooltip};
use iced::{Element, Length};

pub fn view_summary(state: &State) -> Element<'_, Message> {
    let totals = state.totals();

    let stats = row![
        stat_tile("Income", format_currency(totals.income), true),
        stat_tile("Expenses", format_currency(totals.expense), false),
        stat_tile(
            "Balance",
            format_currency(totals.balance()),
            totals.balance() >= 0.0
        ),
    ]
    .spacing(12);

    let ledger: Element<'_, Message> = if state.entries.is_empty() {
        container(
            text("No entries this session yet")
                .size(14)
                .color(MUTED),
        )
        .padding(16)
        .into()
    } else {
        let rows = state.entries.iter().map(view_entry_row);
        scrollable(column(rows).spacing(6))
            .height(Length::Fill)
            .into()
    };

    column![
        stats,
        super::entry_form::view_entry_form(state),
        ledger
    ]
    .spacing(16)
    .into()
}

fn stat_tile(label: &str, value: String, positive: bool) -> Element<'_, Message> {
    let value_text = if positive {
        text(value).size(18).color(SUCCESS)
    } else {
        text(value).size(18).color(ERROR)
    };

    container(column![text(label).size(13).color(MUTED), value_text].spacing(4))
        .style(card_container)
        .padding(12)
        .width(Length::Fill)
        .into()
}

fn view_entry_row(entry: &Entry) -> Element<'_, Message> {
    let amount = format_currency(entry.signed_amount());
    let amount_text = if entry.signed_amount() >= 0.0 {
        text(amount).size(14).color(SUCCESS)
    } else {
        text(amount).size(14).color(ERROR)
    };

    let copy = tooltip(
        button(text("copy").size(12))
            .style(button::text)
            .on_press(Message::CopyEntry(entry.id)),
        container(text("Copy this entry").size(12))
            .style(card_container)
            .padding(6),
        tooltip::Position::Top,
    );
    let delete = tooltip(
        button(text("delete").size(12))
            .style(button::text)
            .on_press(Message::DeleteRequested(entry.id)),
        container(text("Remove from the session").size(12))
            .style(card_container)
            .padding(6),
        tooltip::Position::Top,
    );

    container(
        row![
            column![
                text(&entry.description).size(14),
                text(format_date(entry.created_at.date_naive()))
                    .size(12)
                    .color(MUTED),
            ]
            .spacing(2),
            horizontal_space(),
            amount_text,
            copy,
            delete,
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center),
    )
    .style(card_container)
    .padding([8, 12])
    .into()
}
