use super::ITaskRepo;
use crate::repos::shared::inmemory_repo::*;

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use taskflow_domain::{Task, ID};

pub struct InMemoryTaskRepo {
    tasks: Mutex<Vec<Task>>,
}

impl InMemoryTaskRepo {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITaskRepo for InMemoryTaskRepo {
    async fn insert(&self, task: &Task) -> anyhow::Result<()> {
        insert(task, &self.tasks);
        Ok(())
    }

    async fn find(&self, task_id: &ID) -> Option<Task> {
        find(task_id, &self.tasks)
    }

    async fn list_reminder_candidates(&self) -> anyhow::Result<Vec<Task>> {
        Ok(find_by(&self.tasks, |task| {
            task.reminder.enabled
                && !task.completed
                && task.reminder.remind_time.is_some()
                && task.due_date.is_some()
        }))
    }

    async fn list_reminder_enabled(&self) -> anyhow::Result<Vec<Task>> {
        Ok(find_by(&self.tasks, |task| {
            task.reminder.enabled && !task.completed
        }))
    }

    async fn set_last_fired(&self, task_id: &ID, fired_at: DateTime<Utc>) -> anyhow::Result<()> {
        update_many(
            &self.tasks,
            |task| task.id == *task_id,
            |task| task.reminder.last_fired_at = Some(fired_at),
        );
        Ok(())
    }

    async fn delete(&self, task_id: &ID) -> Option<Task> {
        delete(task_id, &self.tasks)
    }
}
