//! Dismissible notification banners
//!
//! Banners stack at the top of the window. Each carries an optional deadline;
//! while any deadline is pending, the app subscribes to a coarse tick and
//! sweeps expired banners. A zero duration means dismiss-button only.

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

/// Banner severity, mapped to colors in the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Active banner stack, newest first
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    /// Inserts a banner at the top of the stack.
    ///
    /// `duration_ms` of 0 disables auto-close for this banner. Messages are
    /// truncated to keep banners one line tall.
    pub fn push(&mut self, message: &str, severity: Severity, duration_ms: u64) -> Uuid {
        let id = Uuid::new_v4();
        let expires_at = if duration_ms == 0 {
            None
        } else {
            let millis = i64::try_from(duration_ms).unwrap_or(i64::MAX);
            Some(Utc::now() + TimeDelta::milliseconds(millis))
        };
        self.items.insert(
            0,
            Notification {
                id,
                message: crate::utils::truncate_string(message, 200),
                severity,
                expires_at,
            },
        );
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }

    /// Sweeps banners whose deadline has passed
    pub fn remove_expired(&mut self, now: DateTime<Utc>) {
        self.items
            .retain(|n| n.expires_at.is_none_or(|deadline| deadline > now));
    }

    /// Whether any banner still has a pending deadline; drives the tick
    /// subscription
    pub fn has_deadlines(&self) -> bool {
        self.items.iter().any(|n| n.expires_at.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notifications = Notifications::default();
        let id = notifications.push("saved", Severity::Success, 5000);
        assert!(!notifications.is_empty());

        notifications.dismiss(id);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_newest_first() {
        let mut notifications = Notifications::default();
        notifications.push("first", Severity::Info, 0);
        notifications.push("second", Severity::Info, 0);
        let messages: Vec<_> = notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn test_zero_duration_never_expires() {
        let mut notifications = Notifications::default();
        notifications.push("sticky", Severity::Error, 0);
        assert!(!notifications.has_deadlines());

        let far_future = Utc::now() + TimeDelta::days(365);
        notifications.remove_expired(far_future);
        assert!(!notifications.is_empty());
    }

    #[test]
    fn test_expiry_sweep() {
        let mut notifications = Notifications::default();
        notifications.push("short lived", Severity::Info, 100);
        notifications.push("sticky", Severity::Error, 0);
        assert!(notifications.has_deadlines());

        notifications.remove_expired(Utc::now() + TimeDelta::seconds(1));
        let messages: Vec<_> = notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["sticky"]);
        assert!(!notifications.has_deadlines());
    }

    #[test]
    fn test_long_messages_are_truncated() {
        let mut notifications = Notifications::default();
        notifications.push(&"x".repeat(500), Severity::Info, 0);
        let banner = notifications.iter().next().unwrap();
        assert!(banner.message.len() <= 200);
        assert!(banner.message.ends_with("..."));
    }
}
