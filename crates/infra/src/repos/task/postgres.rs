use super::ITaskRepo;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use taskflow_domain::{ReminderSettings, Task, ID};

pub struct PostgresTaskRepo {
    pool: PgPool,
}

impl PostgresTaskRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TaskRaw {
    task_uid: Uuid,
    title: String,
    priority: String,
    due_date: Option<NaiveDate>,
    completed: bool,
    created_at: DateTime<Utc>,
    reminder_enabled: bool,
    remind_time: Option<String>,
    remind_before_minutes: i32,
    critical: bool,
    sound: Option<String>,
    icon: Option<String>,
    notification_group: Option<String>,
    last_fired_at: Option<DateTime<Utc>>,
}

impl Into<Task> for TaskRaw {
    fn into(self) -> Task {
        Task {
            id: self.task_uid.into(),
            title: self.title,
            // A row with an unknown priority still needs to evaluate
            priority: self.priority.parse().unwrap_or_default(),
            due_date: self.due_date,
            completed: self.completed,
            created_at: self.created_at,
            reminder: ReminderSettings {
                enabled: self.reminder_enabled,
                remind_time: self.remind_time,
                remind_before_minutes: self.remind_before_minutes.max(0) as u32,
                critical: self.critical,
                sound: self.sound,
                icon: self.icon,
                group: self.notification_group,
                last_fired_at: self.last_fired_at,
            },
        }
    }
}

#[async_trait::async_trait]
impl ITaskRepo for PostgresTaskRepo {
    async fn insert(&self, task: &Task) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO tasks
            (task_uid, title, priority, due_date, completed, created_at,
             reminder_enabled, remind_time, remind_before_minutes, critical,
             sound, icon, notification_group, last_fired_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(task.id.inner_ref())
        .bind(&task.title)
        .bind(task.priority.as_str())
        .bind(task.due_date)
        .bind(task.completed)
        .bind(task.created_at)
        .bind(task.reminder.enabled)
        .bind(&task.reminder.remind_time)
        .bind(task.reminder.remind_before_minutes as i32)
        .bind(task.reminder.critical)
        .bind(&task.reminder.sound)
        .bind(&task.reminder.icon)
        .bind(&task.reminder.group)
        .bind(task.reminder.last_fired_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, task_id: &ID) -> Option<Task> {
        sqlx::query_as::<_, TaskRaw>(
            r#"
            SELECT * FROM tasks
            WHERE task_uid = $1
            "#,
        )
        .bind(task_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|task| task.into())
    }

    async fn list_reminder_candidates(&self) -> anyhow::Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, TaskRaw>(
            r#"
            SELECT * FROM tasks
            WHERE reminder_enabled AND NOT completed
                AND remind_time IS NOT NULL
                AND due_date IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks.into_iter().map(|task| task.into()).collect())
    }

    async fn list_reminder_enabled(&self) -> anyhow::Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, TaskRaw>(
            r#"
            SELECT * FROM tasks
            WHERE reminder_enabled AND NOT completed
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks.into_iter().map(|task| task.into()).collect())
    }

    async fn set_last_fired(&self, task_id: &ID, fired_at: DateTime<Utc>) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE tasks
            SET last_fired_at = $2
            WHERE task_uid = $1
            "#,
        )
        .bind(task_id.inner_ref())
        .bind(fired_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, task_id: &ID) -> Option<Task> {
        sqlx::query_as::<_, TaskRaw>(
            r#"
            DELETE FROM tasks
            WHERE task_uid = $1
            RETURNING *
            "#,
        )
        .bind(task_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|task| task.into())
    }
}
