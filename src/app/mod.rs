//! GUI application state and event handling
//!
//! One-directional flow: a widget event becomes a [`Message`], its handler
//! mutates [`State`] (running validators synchronously), and the view
//! re-renders as a pure projection of the state.

pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod notifications;
pub mod ui_components;
pub mod view;

use crate::config::{AppConfig, ThemeChoice};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use forms::{EntryForm, EntryKind};
use iced::{Element, Task};
use notifications::{Notifications, Severity};
use std::time::Duration;
use uuid::Uuid;

/// Storage key for the autosaved description draft
pub const DRAFT_KEY: &str = "entry_draft";

/// A submitted ledger entry. Session-scoped: lives in memory only and is
/// discarded when the app closes.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            EntryKind::Income => self.amount,
            EntryKind::Expense => -self.amount,
        }
    }
}

/// Per-kind totals over the session entries
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkspaceTab {
    #[default]
    Summary,
    Settings,
}

pub struct State {
    pub config: AppConfig,
    pub storage: Option<Storage>,
    pub entries: Vec<Entry>,
    pub form: EntryForm,
    pub notifications: Notifications,
    pub active_tab: WorkspaceTab,
    /// Entry awaiting delete confirmation; the modal is open while `Some`
    pub deleting_id: Option<Uuid>,
    /// Monotonic counter pairing draft edits with their deferred save tasks
    pub draft_generation: u64,
    /// Connectivity snapshot taken at startup, shown in the status row
    pub online: bool,
    pub theme: iced::Theme,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Entry form
    DescriptionChanged(String),
    AmountChanged(String),
    AmountBlurred,
    KindSelected(EntryKind),
    SubmitForm,
    SubmitSettled,
    DraftSaveDue(u64),
    // Ledger
    DeleteRequested(Uuid),
    ConfirmDelete,
    CancelDelete,
    CopyEntry(Uuid),
    // Notifications
    DismissNotification(Uuid),
    NotificationTick,
    // UI state
    TabChanged(WorkspaceTab),
    ThemeChanged(ThemeChoice),
    ConfigSaved(bool),
}

impl State {
    pub fn new() -> (Self, Task<Message>) {
        let config = crate::config::load_config_blocking();
        let storage = Storage::open_default();
        let draft = storage
            .as_ref()
            .and_then(|storage| storage.get::<String>(DRAFT_KEY));
        let form = EntryForm::with_draft(draft);
        let theme = config.theme_choice.to_theme();

        let online = crate::utils::is_online();
        let mut notifications = Notifications::default();
        if !online {
            // Sticky: connectivity problems should not silently fade away
            notifications.push("No network connection detected", Severity::Warning, 0);
        }

        (
            Self {
                config,
                storage,
                entries: Vec::new(),
                form,
                notifications,
                active_tab: WorkspaceTab::Summary,
                deleting_id: None,
                draft_generation: 0,
                online,
                theme,
            },
            Task::none(),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DescriptionChanged(value) => {
                handlers::handle_description_changed(self, value)
            }
            Message::AmountChanged(value) => {
                handlers::handle_amount_changed(self, value);
                Task::none()
            }
            Message::AmountBlurred => {
                handlers::handle_amount_blurred(self);
                Task::none()
            }
            Message::KindSelected(kind) => {
                handlers::handle_kind_selected(self, kind);
                Task::none()
            }
            Message::SubmitForm => handlers::handle_submit(self),
            Message::SubmitSettled => {
                handlers::handle_submit_settled(self);
                Task::none()
            }
            Message::DraftSaveDue(generation) => {
                handlers::handle_draft_save_due(self, generation);
                Task::none()
            }
            Message::DeleteRequested(id) => {
                handlers::handle_delete_requested(self, id);
                Task::none()
            }
            Message::ConfirmDelete => {
                handlers::handle_confirm_delete(self);
                Task::none()
            }
            Message::CancelDelete => {
                handlers::handle_cancel_delete(self);
                Task::none()
            }
            Message::CopyEntry(id) => handlers::handle_copy_entry(self, id),
            Message::DismissNotification(id) => {
                handlers::handle_dismiss_notification(self, id);
                Task::none()
            }
            Message::NotificationTick => {
                handlers::handle_notification_tick(self);
                Task::none()
            }
            Message::TabChanged(tab) => {
                handlers::handle_tab_changed(self, tab);
                Task::none()
            }
            Message::ThemeChanged(choice) => handlers::handle_theme_changed(self, choice),
            Message::ConfigSaved(ok) => {
                handlers::handle_config_saved(self, ok);
                Task::none()
            }
        }
    }

    /// Tick only while a banner deadline is pending; idle apps get no timer
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.notifications.has_deadlines() {
            iced::time::every(Duration::from_millis(500)).map(|_| Message::NotificationTick)
        } else {
            iced::Subscription::none()
        }
    }

    pub fn totals(&self) -> Totals {
        let mut totals = Totals::default();
        for entry in &self.entries {
            match entry.kind {
                EntryKind::Income => totals.income += entry.amount,
                EntryKind::Expense => totals.expense += entry.amount,
            }
        }
        totals
    }
}
