//! Entry form handlers
//!
//! Validation runs synchronously on every edit; the draft autosave is the
//! only deferred side effect, debounced with a generation counter so stale
//! timers fall through harmlessly.

use crate::app::notifications::Severity;
use crate::app::{DRAFT_KEY, Entry, Message, State, WorkspaceTab};
use crate::app::forms::EntryKind;
use chrono::Utc;
use iced::Task;
use std::time::Duration;
use uuid::Uuid;

/// Handles a description keystroke: validate immediately, save the draft
/// after the configured quiet period
pub(crate) fn handle_description_changed(state: &mut State, value: String) -> Task<Message> {
    state.form.description_changed(value);
    schedule_draft_save(state)
}

/// Bumps the draft generation and schedules a save for it. An edit arriving
/// before the timer fires bumps the generation again, orphaning this timer.
fn schedule_draft_save(state: &mut State) -> Task<Message> {
    state.draft_generation += 1;
    let generation = state.draft_generation;
    let delay = Duration::from_millis(state.config.debounce_delay_ms);
    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
        Message::DraftSaveDue(generation)
    })
}

/// Persists the draft if this timer is still the latest one
pub(crate) fn handle_draft_save_due(state: &mut State, generation: u64) {
    if generation != state.draft_generation {
        return;
    }
    if let Some(storage) = &state.storage {
        storage.set(DRAFT_KEY, &state.form.description.value);
    }
}

pub(crate) fn handle_amount_changed(state: &mut State, value: String) {
    state.form.amount_changed(value, &state.config);
}

pub(crate) fn handle_amount_blurred(state: &mut State) {
    state.form.amount_blurred(&state.config);
}

pub(crate) fn handle_kind_selected(state: &mut State, kind: EntryKind) {
    state.form.kind = kind;
}

/// Handles a submit attempt.
///
/// An invalid form is marked visited and stays put; a valid one becomes a
/// ledger entry, clears the saved draft, and settles back to the summary tab
/// after a short hold.
pub(crate) fn handle_submit(state: &mut State) -> Task<Message> {
    if state.form.submitting {
        return Task::none();
    }

    let Some(valid) = state.form.try_submit(&state.config) else {
        return Task::none();
    };

    state.entries.insert(
        0,
        Entry {
            id: Uuid::new_v4(),
            description: valid.description,
            amount: valid.amount,
            kind: valid.kind,
            created_at: Utc::now(),
        },
    );

    // The draft served its purpose; orphan any timer still in flight
    state.draft_generation += 1;
    if let Some(storage) = &state.storage {
        storage.remove(DRAFT_KEY);
    }

    state.notifications.push(
        "Entry saved",
        Severity::Success,
        state.config.alert_auto_close_ms,
    );
    state.form.submitting = true;

    Task::batch(vec![
        Task::perform(
            async { tokio::time::sleep(Duration::from_millis(600)).await },
            |()| Message::SubmitSettled,
        ),
        super::redirect_after(WorkspaceTab::Summary, Duration::from_millis(600)),
    ])
}

/// Clears the busy flag and resets the form once the submit hold elapses
pub(crate) fn handle_submit_settled(state: &mut State) {
    state.form = crate::app::forms::EntryForm::default();
}
