use crate::error::TaskflowError;
use crate::shared::auth::protect_cron_route;
use crate::shared::usecase::{execute, UseCase};

use actix_web::{web, HttpRequest, HttpResponse};
use std::time::Duration;
use taskflow_api_structs::run_reminder_pass::APIResponse;
use taskflow_domain::{
    date, evaluate_reminder, is_suppressed, NotificationPayload, ReminderPassSummary,
    TaskDispatchReport,
};
use taskflow_infra::{BarkClient, TaskflowContext};
use tracing::{debug, error, info, warn};

pub async fn run_reminder_pass_controller(
    http_req: HttpRequest,
    ctx: web::Data<TaskflowContext>,
) -> Result<HttpResponse, TaskflowError> {
    protect_cron_route(&http_req, &ctx.config)?;

    let usecase = RunReminderPassUseCase;
    execute(usecase, &ctx)
        .await
        .map(|summary| HttpResponse::Ok().json(APIResponse::new(summary)))
        .map_err(TaskflowError::from)
}

#[derive(Debug)]
pub struct RunReminderPassUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for TaskflowError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RunReminderPassUseCase {
    type Response = ReminderPassSummary;
    type Error = UseCaseError;

    const NAME: &'static str = "RunReminderPass";

    async fn execute(&mut self, ctx: &TaskflowContext) -> Result<Self::Response, Self::Error> {
        // Passes never overlap. A scheduled tick and an HTTP trigger arriving
        // together run one after the other.
        let _pass_guard = ctx.reminder_run_lock.lock().await;

        let now = ctx.sys.now();
        let today = ctx.sys.today();
        let current_minute = date::minute_of_day(now);
        let current_time = date::format_civil_hhmm(now);

        let devices = ctx
            .repos
            .devices
            .find_enabled()
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if devices.is_empty() {
            debug!("No enabled devices, skipping reminder evaluation");
            return Ok(ReminderPassSummary {
                tasks_checked: 0,
                tasks_fired: 0,
                current_time,
                reports: Vec::new(),
            });
        }

        let tasks = ctx
            .repos
            .tasks
            .list_reminder_candidates()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let client = BarkClient::new(Duration::from_millis(ctx.config.push_timeout_millis));
        let device_urls: Vec<_> = devices.iter().map(|device| device.url.clone()).collect();

        let mut tasks_fired = 0;
        let mut reports = Vec::new();

        for task in &tasks {
            // Cool-down first, before any time math
            if is_suppressed(task.reminder.last_fired_at, now) {
                debug!("Task {} fired recently, still in cool-down", task.id);
                continue;
            }

            let (due_date, remind_time) = match (task.due_date, &task.reminder.remind_time) {
                (Some(due_date), Some(remind_time)) => (due_date, remind_time),
                _ => continue,
            };
            let remind_time = match remind_time.parse() {
                Ok(remind_time) => remind_time,
                Err(e) => {
                    warn!("Task {} has an unusable remind time: {}", task.id, e);
                    continue;
                }
            };

            let days_until_due = (due_date - today).num_days();
            let evaluation = evaluate_reminder(
                days_until_due,
                &remind_time,
                task.reminder.remind_before_minutes,
                current_minute,
            );
            debug!(
                "Task {} evaluated: should_fire={} minutes_until_remind={:?}",
                task.id, evaluation.should_fire, evaluation.minutes_until_remind
            );
            if !evaluation.should_fire {
                continue;
            }

            let payload = NotificationPayload::task_reminder(task);
            let deliveries = client.broadcast(&device_urls, &payload).await;
            tasks_fired += 1;
            reports.push(TaskDispatchReport {
                task_id: task.id.clone(),
                task_title: task.title.clone(),
                deliveries,
            });

            // Recorded after the dispatch attempt, whatever its outcome. A
            // failed write means the task may fire again on the next pass.
            if let Err(e) = ctx.repos.tasks.set_last_fired(&task.id, now).await {
                error!(
                    "Unable to record last fired time for task {}: {:?}",
                    task.id, e
                );
            }
        }

        info!(
            "Reminder pass at {} checked {} tasks and fired {}",
            current_time,
            tasks.len(),
            tasks_fired
        );

        Ok(ReminderPassSummary {
            tasks_checked: tasks.len(),
            tasks_fired,
            current_time,
            reports,
        })
    }
}
