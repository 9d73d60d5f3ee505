mod base;
mod notification;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use notification::NotificationClient;
pub use notification::SendTestNotificationInput;
use reminder::ReminderClient;
pub use reminder::ForceTaskReminderInput;
use status::StatusClient;
use std::sync::Arc;

pub use taskflow_api_structs::dtos::*;
pub use taskflow_domain::ID;

/// TaskFlow Server SDK
///
/// The SDK contains methods for interacting with the TaskFlow reminder
/// server API.
#[derive(Clone)]
pub struct TaskflowSDK {
    pub notification: NotificationClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl TaskflowSDK {
    pub fn new<T: Into<String>>(address: String, cron_secret: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_cron_secret(cron_secret.into());
        let base = Arc::new(base);
        let notification = NotificationClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            notification,
            reminder,
            status,
        }
    }
}
