//! UI state handlers: tabs, theme, notification lifecycle

use crate::app::notifications::Severity;
use crate::app::{Message, State, WorkspaceTab};
use crate::config::ThemeChoice;
use chrono::Utc;
use iced::Task;
use std::time::Duration;
use uuid::Uuid;

pub(crate) fn handle_tab_changed(state: &mut State, tab: WorkspaceTab) {
    state.active_tab = tab;
}

/// Navigates to `tab` after a delay
pub(crate) fn redirect_after(tab: WorkspaceTab, delay: Duration) -> Task<Message> {
    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
        Message::TabChanged(tab)
    })
}

/// Applies a theme change and persists the config in the background
pub(crate) fn handle_theme_changed(state: &mut State, choice: ThemeChoice) -> Task<Message> {
    state.config.theme_choice = choice;
    state.theme = choice.to_theme();

    let config = state.config.clone();
    Task::perform(
        async move { crate::config::save_config(&config).await.is_ok() },
        Message::ConfigSaved,
    )
}

pub(crate) fn handle_config_saved(state: &mut State, ok: bool) {
    if !ok {
        tracing::warn!("failed to persist configuration");
        state.notifications.push(
            "Could not save settings",
            Severity::Error,
            state.config.alert_auto_close_ms,
        );
    }
}

pub(crate) fn handle_dismiss_notification(state: &mut State, id: Uuid) {
    state.notifications.dismiss(id);
}

/// Periodic sweep of expired banners while any deadline is pending
pub(crate) fn handle_notification_tick(state: &mut State) {
    state.notifications.remove_expired(Utc::now());
}
