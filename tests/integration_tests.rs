//! Integration tests for finentry
//!
//! These tests drive the app state through the same messages the widgets
//! emit, verifying the keystroke-to-ledger flow, draft persistence and the
//! confirmation-gated delete. The GUI itself is a pure projection of the
//! state checked here.

use finentry::AppConfig;
use finentry::app::forms::{EntryForm, EntryKind};
use finentry::app::{Message, State};
use finentry::storage::Storage;
use serde_json::json;

/// App state isolated from the user's real storage directory
fn test_state() -> (tempfile::TempDir, State) {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _) = State::new();
    state.storage = Some(Storage::open(dir.path().join("store")));
    state.config = AppConfig::default();
    state.entries.clear();
    state.notifications = Default::default();
    state.form = EntryForm::default();
    (dir, state)
}

#[test]
fn test_entry_flow_from_keystrokes_to_ledger() {
    let (_dir, mut state) = test_state();

    // Typing runs validation on every keystroke
    let _ = state.update(Message::DescriptionChanged("Gr".to_string()));
    assert!(!state.form.description.is_valid);
    let _ = state.update(Message::DescriptionChanged("Groceries".to_string()));
    assert!(state.form.description.is_valid);

    // A high but valid amount raises the advisory without blocking
    let _ = state.update(Message::AmountChanged("15000".to_string()));
    assert!(state.form.amount.is_valid);
    assert!(state.form.amount_warning.is_some());

    // Committing the field masks it to two decimal places
    let _ = state.update(Message::AmountBlurred);
    assert_eq!(state.form.amount.value, "15000.00");

    let _ = state.update(Message::KindSelected(EntryKind::Expense));
    let _ = state.update(Message::SubmitForm);

    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].description, "Groceries");
    assert_eq!(state.entries[0].amount, 15_000.0);
    assert!(state.form.submitting);
    assert!(!state.notifications.is_empty());

    // The deferred settle resets the form
    let _ = state.update(Message::SubmitSettled);
    assert!(!state.form.submitting);
    assert_eq!(state.form.description.value, "");
}

#[test]
fn test_invalid_submit_is_cancelled_and_marks_form_visited() {
    let (_dir, mut state) = test_state();

    let _ = state.update(Message::AmountChanged("-5".to_string()));
    assert!(
        state
            .form
            .amount
            .message
            .as_deref()
            .unwrap()
            .contains("positive")
    );

    let _ = state.update(Message::SubmitForm);

    assert!(state.entries.is_empty());
    assert!(state.form.visited);
    // The untouched description now shows its error too
    assert!(state.form.description.feedback(state.form.visited).is_some());
}

#[test]
fn test_validity_always_tracks_last_value() {
    let (_dir, mut state) = test_state();

    let _ = state.update(Message::AmountChanged("100".to_string()));
    assert!(state.form.amount.is_valid);
    let _ = state.update(Message::AmountChanged("".to_string()));
    assert!(!state.form.amount.is_valid);
    let _ = state.update(Message::AmountChanged("0.01".to_string()));
    assert!(state.form.amount.is_valid);
    assert_eq!(state.form.amount_warning, None);
}

#[test]
fn test_delete_is_confirmation_gated() {
    let (_dir, mut state) = test_state();
    let _ = state.update(Message::DescriptionChanged("Rent".to_string()));
    let _ = state.update(Message::AmountChanged("1200".to_string()));
    let _ = state.update(Message::SubmitForm);
    let id = state.entries[0].id;

    let _ = state.update(Message::DeleteRequested(id));
    assert_eq!(state.entries.len(), 1);

    let _ = state.update(Message::CancelDelete);
    assert_eq!(state.entries.len(), 1);

    let _ = state.update(Message::DeleteRequested(id));
    let _ = state.update(Message::ConfirmDelete);
    assert!(state.entries.is_empty());
}

#[test]
fn test_draft_saved_and_restored() {
    let (_dir, mut state) = test_state();

    let _ = state.update(Message::DescriptionChanged("Groceri".to_string()));
    let _ = state.update(Message::DraftSaveDue(state.draft_generation));

    // A fresh form over the same store restores the draft, visually neutral
    let draft = state
        .storage
        .as_ref()
        .unwrap()
        .get::<String>(finentry::app::DRAFT_KEY);
    let form = EntryForm::with_draft(draft);
    assert_eq!(form.description.value, "Groceri");
    assert!(!form.description.touched);
    assert_eq!(form.description.feedback(form.visited), None);
}

#[test]
fn test_submit_clears_draft() {
    let (_dir, mut state) = test_state();

    let _ = state.update(Message::DescriptionChanged("Groceries".to_string()));
    let _ = state.update(Message::DraftSaveDue(state.draft_generation));
    let _ = state.update(Message::AmountChanged("50".to_string()));
    let _ = state.update(Message::SubmitForm);

    let draft = state
        .storage
        .as_ref()
        .unwrap()
        .get::<String>(finentry::app::DRAFT_KEY);
    assert_eq!(draft, None);
}

#[test]
fn test_storage_round_trip_through_public_api() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path().join("store"));

    let value = json!({
        "entries": [{"description": "Rent", "amount": 1200.0}],
        "meta": {"exported": true}
    });
    assert!(storage.set("export", &value));
    let back: serde_json::Value = storage.get("export").unwrap();
    assert_eq!(back, value);

    assert_eq!(storage.get::<serde_json::Value>("absent"), None);
    assert!(storage.clear());
    assert_eq!(storage.get::<serde_json::Value>("export"), None);
}

#[test]
fn test_totals_follow_the_ledger() {
    let (_dir, mut state) = test_state();

    let _ = state.update(Message::KindSelected(EntryKind::Income));
    let _ = state.update(Message::DescriptionChanged("Salary".to_string()));
    let _ = state.update(Message::AmountChanged("3000".to_string()));
    let _ = state.update(Message::SubmitForm);
    let _ = state.update(Message::SubmitSettled);

    let _ = state.update(Message::KindSelected(EntryKind::Expense));
    let _ = state.update(Message::DescriptionChanged("Rent".to_string()));
    let _ = state.update(Message::AmountChanged("1200".to_string()));
    let _ = state.update(Message::SubmitForm);

    let totals = state.totals();
    assert_eq!(totals.income, 3000.0);
    assert_eq!(totals.expense, 1200.0);
    assert_eq!(totals.balance(), 1800.0);
}
