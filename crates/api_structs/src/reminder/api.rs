use crate::dtos::TaskDispatchReportDTO;
use serde::{Deserialize, Serialize};
use taskflow_domain::{ReminderPassSummary, TaskDispatchReport, ID};

pub mod run_reminder_pass {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub tasks_checked: usize,
        pub tasks_fired: usize,
        /// Civil wall clock `HH:MM` at the start of the pass
        pub current_time: String,
        pub reports: Vec<TaskDispatchReportDTO>,
    }

    impl APIResponse {
        pub fn new(summary: ReminderPassSummary) -> Self {
            Self {
                message: format!(
                    "Dispatched reminders for {} of {} candidate tasks",
                    summary.tasks_fired, summary.tasks_checked
                ),
                tasks_checked: summary.tasks_checked,
                tasks_fired: summary.tasks_fired,
                current_time: summary.current_time,
                reports: summary.reports.iter().map(TaskDispatchReportDTO::new).collect(),
            }
        }
    }
}

pub mod force_task_reminder {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub task_id: Option<ID>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub reports: Vec<TaskDispatchReportDTO>,
    }

    impl APIResponse {
        pub fn new(reports: Vec<TaskDispatchReport>) -> Self {
            Self {
                message: format!("Dispatched test reminders for {} tasks", reports.len()),
                reports: reports.iter().map(TaskDispatchReportDTO::new).collect(),
            }
        }
    }
}
