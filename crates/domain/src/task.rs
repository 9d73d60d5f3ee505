use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Error, Debug)]
pub enum InvalidPriorityError {
    #[error("Priority: {0} is not one of high, medium, low")]
    Malformed(String),
}

impl FromStr for Priority {
    type Err = InvalidPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(InvalidPriorityError::Malformed(s.to_string())),
        }
    }
}

/// Per-task notification preferences, the engine reads these and never
/// writes any of them except `last_fired_at`.
#[derive(Debug, Clone, Default)]
pub struct ReminderSettings {
    pub enabled: bool,
    /// Wall-clock `HH:MM` kept as stored; parsed per evaluation pass so a
    /// malformed value skips only that task.
    pub remind_time: Option<String>,
    pub remind_before_minutes: u32,
    pub critical: bool,
    pub sound: Option<String>,
    pub icon: Option<String>,
    pub group: Option<String>,
    pub last_fired_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Task {
    pub id: ID,
    pub title: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub reminder: ReminderSettings,
}

impl Task {
    pub fn new(title: &str) -> Self {
        Self {
            id: Default::default(),
            title: title.into(),
            priority: Default::default(),
            due_date: None,
            completed: false,
            created_at: Utc::now(),
            reminder: Default::default(),
        }
    }

    /// A task enters reminder evaluation only when all four gates hold.
    pub fn is_reminder_candidate(&self) -> bool {
        self.reminder.enabled
            && !self.completed
            && self.due_date.is_some()
            && self.reminder.remind_time.is_some()
    }
}

impl Entity for Task {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn candidate_task() -> Task {
        let mut task = Task::new("Ship the release");
        task.due_date = NaiveDate::from_ymd_opt(2025, 1, 10);
        task.reminder.enabled = true;
        task.reminder.remind_time = Some("09:00".into());
        task
    }

    #[test]
    fn it_accepts_a_complete_candidate() {
        assert!(candidate_task().is_reminder_candidate());
    }

    #[test]
    fn it_rejects_non_candidates() {
        let mut disabled = candidate_task();
        disabled.reminder.enabled = false;
        assert!(!disabled.is_reminder_candidate());

        let mut completed = candidate_task();
        completed.completed = true;
        assert!(!completed.is_reminder_candidate());

        let mut without_due_date = candidate_task();
        without_due_date.due_date = None;
        assert!(!without_due_date.is_reminder_candidate());

        let mut without_remind_time = candidate_task();
        without_remind_time.reminder.remind_time = None;
        assert!(!without_remind_time.is_reminder_candidate());
    }

    #[test]
    fn it_parses_priorities() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }
}
