use crate::task::{Priority, Task};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NOTIFICATION_GROUP: &str = "TaskFlow";
pub const DEFAULT_NOTIFICATION_SOUND: &str = "bell";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationLevel {
    Active,
    TimeSensitive,
    Passive,
    Critical,
}

/// Optional styling attributes, passed through to the push transport
/// without interpretation.
#[derive(Debug, Clone, Default)]
pub struct NotificationOptions {
    pub group: Option<String>,
    pub sound: Option<String>,
    pub icon: Option<String>,
    pub url: Option<String>,
    pub is_archive: Option<bool>,
    pub level: Option<NotificationLevel>,
    pub call: bool,
}

/// One logical notification, built once per firing task and sent identically
/// to every enabled device.
#[derive(Debug, Clone)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    pub options: NotificationOptions,
}

impl NotificationPayload {
    /// Reminder for a firing task.
    pub fn task_reminder(task: &Task) -> Self {
        Self::for_task(task, format!("{} Task reminder", task.priority.emoji()))
    }

    /// Variant for the forced trigger, marked so it cannot be mistaken for a
    /// scheduled reminder.
    pub fn forced_task_reminder(task: &Task) -> Self {
        Self::for_task(
            task,
            format!("{} Task reminder (test)", task.priority.emoji()),
        )
    }

    fn for_task(task: &Task, title: String) -> Self {
        let mut body = task.title.clone();
        if let Some(due_date) = task.due_date {
            body.push_str(&format!("\n📅 Due: {}", due_date));
        }
        if let Some(remind_time) = &task.reminder.remind_time {
            body.push_str(&format!("\n⏰ Remind at: {}", remind_time));
        }

        let level = if task.reminder.critical {
            NotificationLevel::Critical
        } else if task.priority == Priority::High {
            NotificationLevel::TimeSensitive
        } else {
            NotificationLevel::Active
        };

        Self {
            title,
            body,
            options: NotificationOptions {
                group: Some(
                    task.reminder
                        .group
                        .clone()
                        .unwrap_or_else(|| DEFAULT_NOTIFICATION_GROUP.into()),
                ),
                sound: Some(
                    task.reminder
                        .sound
                        .clone()
                        .unwrap_or_else(|| DEFAULT_NOTIFICATION_SOUND.into()),
                ),
                icon: task.reminder.icon.clone(),
                level: Some(level),
                ..Default::default()
            },
        }
    }

    /// Canned payload for verifying a device registration end to end.
    pub fn test_notification() -> Self {
        Self {
            title: "Test notification".into(),
            body: "TaskFlow push test succeeded! 🎉".into(),
            options: NotificationOptions {
                group: Some(DEFAULT_NOTIFICATION_GROUP.into()),
                sound: Some(DEFAULT_NOTIFICATION_SOUND.into()),
                ..Default::default()
            },
        }
    }
}

/// Outcome of one send to one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResult {
    pub url: String,
    pub success: bool,
    pub error: Option<String>,
}

impl DeliveryResult {
    pub fn delivered(url: &str) -> Self {
        Self {
            url: url.into(),
            success: true,
            error: None,
        }
    }

    pub fn failed<E: Into<String>>(url: &str, error: E) -> Self {
        Self {
            url: url.into(),
            success: false,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn task() -> Task {
        let mut task = Task::new("Water the plants");
        task.due_date = NaiveDate::from_ymd_opt(2025, 1, 10);
        task.reminder.enabled = true;
        task.reminder.remind_time = Some("09:00".into());
        task
    }

    #[test]
    fn it_builds_the_reminder_body_from_task_fields() {
        let payload = NotificationPayload::task_reminder(&task());
        assert_eq!(payload.title, "🟡 Task reminder");
        assert_eq!(
            payload.body,
            "Water the plants\n📅 Due: 2025-01-10\n⏰ Remind at: 09:00"
        );
        assert_eq!(payload.options.group.as_deref(), Some("TaskFlow"));
        assert_eq!(payload.options.sound.as_deref(), Some("bell"));
        assert_eq!(payload.options.icon, None);
    }

    #[test]
    fn it_maps_priority_and_critical_to_notification_levels() {
        let mut plain = task();
        plain.priority = Priority::Low;
        let payload = NotificationPayload::task_reminder(&plain);
        assert_eq!(payload.options.level, Some(NotificationLevel::Active));

        let mut high = task();
        high.priority = Priority::High;
        let payload = NotificationPayload::task_reminder(&high);
        assert_eq!(payload.options.level, Some(NotificationLevel::TimeSensitive));

        // Critical wins over priority
        let mut critical = task();
        critical.priority = Priority::High;
        critical.reminder.critical = true;
        let payload = NotificationPayload::task_reminder(&critical);
        assert_eq!(payload.options.level, Some(NotificationLevel::Critical));
    }

    #[test]
    fn it_passes_styling_attributes_through() {
        let mut styled = task();
        styled.reminder.group = Some("Work".into());
        styled.reminder.sound = Some("minuet".into());
        styled.reminder.icon = Some("https://example.com/icon.png".into());

        let payload = NotificationPayload::task_reminder(&styled);
        assert_eq!(payload.options.group.as_deref(), Some("Work"));
        assert_eq!(payload.options.sound.as_deref(), Some("minuet"));
        assert_eq!(
            payload.options.icon.as_deref(),
            Some("https://example.com/icon.png")
        );
    }

    #[test]
    fn forced_reminders_are_marked_as_tests() {
        let payload = NotificationPayload::forced_task_reminder(&task());
        assert_eq!(payload.title, "🟡 Task reminder (test)");
    }

    #[test]
    fn test_notifications_use_the_default_styling() {
        let payload = NotificationPayload::test_notification();
        assert_eq!(payload.title, "Test notification");
        assert_eq!(payload.options.group.as_deref(), Some("TaskFlow"));
        assert_eq!(payload.options.level, None);
    }
}
