use crate::error::TaskflowError;
use crate::shared::usecase::{execute, UseCase};

use actix_web::{web, HttpResponse};
use std::time::Duration;
use taskflow_api_structs::force_task_reminder::{APIResponse, RequestBody};
use taskflow_domain::{NotificationPayload, TaskDispatchReport, ID};
use taskflow_infra::{BarkClient, TaskflowContext};

pub async fn force_task_reminder_controller(
    ctx: web::Data<TaskflowContext>,
    body: Option<web::Json<RequestBody>>,
) -> Result<HttpResponse, TaskflowError> {
    let body = body.map(|body| body.into_inner()).unwrap_or_default();

    let usecase = ForceTaskReminderUseCase {
        task_id: body.task_id,
    };
    execute(usecase, &ctx)
        .await
        .map(|reports| HttpResponse::Ok().json(APIResponse::new(reports)))
        .map_err(TaskflowError::from)
}

/// Dispatches reminders right away, without consulting the schedule or the
/// cool-down, and without recording a fire. Meant for verifying a setup.
#[derive(Debug)]
pub struct ForceTaskReminderUseCase {
    /// When unset every reminder-enabled task is dispatched
    pub task_id: Option<ID>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    NoEnabledDevices,
    NoRemindableTasks,
    TaskNotFound(ID),
}

impl From<UseCaseError> for TaskflowError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            UseCaseError::NoEnabledDevices => {
                Self::BadClientData("No enabled devices registered".into())
            }
            UseCaseError::NoRemindableTasks => {
                Self::BadClientData("No tasks with reminders enabled".into())
            }
            UseCaseError::TaskNotFound(task_id) => Self::NotFound(format!(
                "Task with id: {} was not found or has reminders disabled",
                task_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ForceTaskReminderUseCase {
    type Response = Vec<TaskDispatchReport>;
    type Error = UseCaseError;

    const NAME: &'static str = "ForceTaskReminder";

    async fn execute(&mut self, ctx: &TaskflowContext) -> Result<Self::Response, Self::Error> {
        let devices = ctx
            .repos
            .devices
            .find_enabled()
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if devices.is_empty() {
            return Err(UseCaseError::NoEnabledDevices);
        }

        let tasks = match &self.task_id {
            Some(task_id) => {
                let task = ctx
                    .repos
                    .tasks
                    .find(task_id)
                    .await
                    .ok_or_else(|| UseCaseError::TaskNotFound(task_id.clone()))?;
                if !task.reminder.enabled || task.completed {
                    return Err(UseCaseError::TaskNotFound(task_id.clone()));
                }
                vec![task]
            }
            None => ctx
                .repos
                .tasks
                .list_reminder_enabled()
                .await
                .map_err(|_| UseCaseError::StorageError)?,
        };
        if tasks.is_empty() {
            return Err(UseCaseError::NoRemindableTasks);
        }

        let client = BarkClient::new(Duration::from_millis(ctx.config.push_timeout_millis));
        let device_urls: Vec<_> = devices.iter().map(|device| device.url.clone()).collect();

        let mut reports = Vec::with_capacity(tasks.len());
        for task in &tasks {
            let payload = NotificationPayload::forced_task_reminder(task);
            let deliveries = client.broadcast(&device_urls, &payload).await;
            reports.push(TaskDispatchReport {
                task_id: task.id.clone(),
                task_title: task.title.clone(),
                deliveries,
            });
        }

        Ok(reports)
    }
}
