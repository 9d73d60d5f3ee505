mod inmemory;
mod postgres;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryTaskRepo;
pub use postgres::PostgresTaskRepo;
use taskflow_domain::{Task, ID};

#[async_trait::async_trait]
pub trait ITaskRepo: Send + Sync {
    async fn insert(&self, task: &Task) -> anyhow::Result<()>;
    async fn find(&self, task_id: &ID) -> Option<Task>;
    /// Tasks that can possibly fire a reminder: reminders enabled, not
    /// completed, and carrying both a due date and a remind time.
    async fn list_reminder_candidates(&self) -> anyhow::Result<Vec<Task>>;
    /// Tasks addressable by the forced reminder: reminders enabled and not
    /// completed. Due date and remind time are not required here.
    async fn list_reminder_enabled(&self) -> anyhow::Result<Vec<Task>>;
    async fn set_last_fired(&self, task_id: &ID, fired_at: DateTime<Utc>) -> anyhow::Result<()>;
    async fn delete(&self, task_id: &ID) -> Option<Task>;
}

#[cfg(test)]
mod tests {
    use crate::repos::Repos;
    use chrono::Utc;
    use taskflow_domain::Task;

    fn reminder_ready_task(title: &str) -> Task {
        let mut task = Task::new(title);
        task.due_date = Some("2025-03-10".parse().unwrap());
        task.reminder.enabled = true;
        task.reminder.remind_time = Some("09:00".into());
        task
    }

    #[tokio::test]
    async fn create_find_and_delete() {
        let repos = Repos::create_inmemory();
        let task = reminder_ready_task("Water the plants");

        assert!(repos.tasks.insert(&task).await.is_ok());
        let found = repos.tasks.find(&task.id).await.expect("To find task");
        assert_eq!(found.id, task.id);
        assert_eq!(found.title, task.title);

        let deleted = repos.tasks.delete(&task.id).await.expect("To delete task");
        assert_eq!(deleted.id, task.id);
        assert!(repos.tasks.find(&task.id).await.is_none());
    }

    #[tokio::test]
    async fn lists_only_reminder_candidates() {
        let repos = Repos::create_inmemory();

        let ready = reminder_ready_task("Ready");
        let mut completed = reminder_ready_task("Completed");
        completed.completed = true;
        let mut disabled = reminder_ready_task("Reminders off");
        disabled.reminder.enabled = false;
        let mut no_due_date = reminder_ready_task("No due date");
        no_due_date.due_date = None;
        let mut no_remind_time = reminder_ready_task("No remind time");
        no_remind_time.reminder.remind_time = None;

        for task in [&ready, &completed, &disabled, &no_due_date, &no_remind_time] {
            repos.tasks.insert(task).await.unwrap();
        }

        let candidates = repos.tasks.list_reminder_candidates().await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, ready.id);

        // The forced path only requires the reminder toggle
        let enabled = repos.tasks.list_reminder_enabled().await.unwrap();
        assert_eq!(enabled.len(), 3);
    }

    #[tokio::test]
    async fn set_last_fired_touches_only_the_given_task() {
        let repos = Repos::create_inmemory();
        let task = reminder_ready_task("Pay rent");
        let other = reminder_ready_task("Book flights");
        repos.tasks.insert(&task).await.unwrap();
        repos.tasks.insert(&other).await.unwrap();

        let fired_at = Utc::now();
        repos
            .tasks
            .set_last_fired(&task.id, fired_at)
            .await
            .unwrap();

        let task = repos.tasks.find(&task.id).await.unwrap();
        assert_eq!(task.reminder.last_fired_at, Some(fired_at));
        let other = repos.tasks.find(&other.id).await.unwrap();
        assert!(other.reminder.last_fired_at.is_none());
    }
}
