pub mod date;
mod device;
mod notification;
mod reminder;
mod shared;
mod task;

pub use date::RemindTime;
pub use device::Device;
pub use notification::{
    DeliveryResult, NotificationLevel, NotificationOptions, NotificationPayload,
    DEFAULT_NOTIFICATION_GROUP, DEFAULT_NOTIFICATION_SOUND,
};
pub use reminder::{
    evaluate_reminder, is_suppressed, ReminderEvaluation, ReminderPassSummary, TaskDispatchReport,
    COOLDOWN_MINUTES,
};
pub use shared::entity::{Entity, ID};
pub use task::{Priority, ReminderSettings, Task};
