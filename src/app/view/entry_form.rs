//! Entry form card
//!
//! Field styling and feedback are projections of each field's
//! `FieldState`; nothing is computed here beyond layout.

use crate::app::forms::EntryKind;
use crate::app::ui_components::{ERROR, MUTED, WARNING, card_container, input_group, validated_input};
use crate::app::{Message, State};
use iced::widget::space::horizontal as horizontal_space;
use iced::widget::{button, column, container, pick_list, row, text, text_input, tooltip};
use iced::{Element, Length};
use strum::IntoEnumIterator;

pub fn view_entry_form(state: &State) -> Element<'_, Message> {
    let form = &state.form;

    let kind_picker = pick_list(
        EntryKind::iter().collect::<Vec<_>>(),
        Some(form.kind),
        Message::KindSelected,
    )
    .padding(8);

    // Description with live character counter
    let description_shown = form
        .description
        .show_state(form.visited)
        .then_some(form.description.is_valid);
    let description_input = text_input("What was this for?", &form.description.value)
        .on_input(Message::DescriptionChanged)
        .style(move |theme, status| validated_input(theme, status, description_shown))
        .padding(8);

    let counter = tooltip(
        text(format!("{}/255", form.description_char_count()))
            .size(12)
            .color(MUTED),
        container(text("Between 3 and 255 characters").size(12))
            .style(card_container)
            .padding(6),
        tooltip::Position::Top,
    );

    let mut description_block = column![
        row![
            text("Description").size(14),
            horizontal_space(),
            counter
        ]
        .align_y(iced::Alignment::Center),
        description_input,
    ]
    .spacing(4);
    if let Some(message) = form.description.feedback(form.visited) {
        description_block = description_block.push(text(message).size(13).color(ERROR));
    }

    // Amount inside its currency input group; the group carries the
    // validity border
    let amount_shown = form
        .amount
        .show_state(form.visited)
        .then_some(form.amount.is_valid);
    let amount_input = text_input("0.00", &form.amount.value)
        .on_input(Message::AmountChanged)
        .on_submit(Message::AmountBlurred)
        .style(|theme, status| {
            // The group border signals validity; keep the inner input plain
            validated_input(theme, status, None)
        })
        .padding(8);

    let amount_group = container(
        row![
            container(text("R$").size(14)).padding([8, 10]),
            amount_input
        ]
        .align_y(iced::Alignment::Center),
    )
    .style(move |theme| input_group(theme, amount_shown))
    .width(Length::Fill);

    let mut amount_block = column![text("Amount").size(14), amount_group].spacing(4);
    if let Some(message) = form.amount.feedback(form.visited) {
        amount_block = amount_block.push(text(message).size(13).color(ERROR));
    }
    if let Some(warning) = &form.amount_warning {
        amount_block = amount_block.push(text(warning.as_str()).size(13).color(WARNING));
    }

    let submit_label = if form.submitting { "Saving..." } else { "Save entry" };
    let submit = button(text(submit_label).size(14))
        .on_press_maybe((!form.submitting).then_some(Message::SubmitForm))
        .padding([8, 16]);

    container(
        column![
            text("New entry").size(18),
            kind_picker,
            description_block,
            amount_block,
            submit
        ]
        .spacing(12)
        .padding(16),
    )
    .style(card_container)
    .width(Length::Fill)
    .into()
}
