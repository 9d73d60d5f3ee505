use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use taskflow_api_structs::*;
use taskflow_domain::ID;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct ForceTaskReminderInput {
    pub task_id: Option<ID>,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn run(&self) -> APIResponse<run_reminder_pass::APIResponse> {
        self.base
            .post_empty("reminders/run".into(), StatusCode::OK)
            .await
    }

    pub async fn force(
        &self,
        input: ForceTaskReminderInput,
    ) -> APIResponse<force_task_reminder::APIResponse> {
        let body = force_task_reminder::RequestBody {
            task_id: input.task_id,
        };
        self.base
            .post(body, "reminders/test".into(), StatusCode::OK)
            .await
    }
}
