//! Session ledger handlers
//!
//! Deletion is confirmation-gated: the first request opens a modal and the
//! destructive step only runs on explicit confirmation.

use crate::app::helpers::formatting::{format_currency, format_date};
use crate::app::notifications::Severity;
use crate::app::{Message, State};
use iced::Task;
use uuid::Uuid;

pub(crate) fn handle_delete_requested(state: &mut State, id: Uuid) {
    state.deleting_id = Some(id);
}

pub(crate) fn handle_cancel_delete(state: &mut State) {
    state.deleting_id = None;
}

pub(crate) fn handle_confirm_delete(state: &mut State) {
    let Some(id) = state.deleting_id.take() else {
        return;
    };

    let before = state.entries.len();
    state.entries.retain(|entry| entry.id != id);

    if state.entries.len() < before {
        state.notifications.push(
            "Entry deleted",
            Severity::Info,
            state.config.alert_auto_close_ms,
        );
    }
}

/// Copies one entry as a readable line and reports the handoff with a banner
pub(crate) fn handle_copy_entry(state: &mut State, id: Uuid) -> Task<Message> {
    let Some(entry) = state.entries.iter().find(|entry| entry.id == id) else {
        return Task::none();
    };

    let line = format!(
        "{} ({}): {}",
        entry.description,
        format_date(entry.created_at.date_naive()),
        format_currency(entry.signed_amount()),
    );

    state
        .notifications
        .push("Copied to clipboard", Severity::Success, 2000);
    iced::clipboard::write(line)
}
