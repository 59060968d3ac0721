use crate::errors::Result;
use crate::reminders::reminders_model::{
    NewReminder, NotificationContent, PermissionStatus, Reminder, ReminderTrigger,
};
use async_trait::async_trait;

/// Trait for the external notification scheduler.
///
/// Platform adapters (Expo notifications on device, a cron shim on desktop)
/// implement this; the core never talks to a notification runtime directly.
#[async_trait]
pub trait NotificationSchedulerTrait: Send + Sync {
    async fn request_permission(&self) -> Result<PermissionStatus>;

    /// Schedules a notification and returns the scheduler-assigned id.
    async fn schedule(
        &self,
        content: NotificationContent,
        trigger: ReminderTrigger,
    ) -> Result<String>;

    async fn cancel(&self, notification_id: &str) -> Result<()>;
}

/// Trait for reminder service operations
#[async_trait]
pub trait ReminderServiceTrait: Send + Sync {
    fn get_reminders(&self, goal_id: &str) -> Result<Vec<Reminder>>;
    async fn ensure_permission(&self) -> Result<()>;
    async fn schedule_reminder(&self, new_reminder: NewReminder) -> Result<Reminder>;
    async fn cancel_reminder(&self, reminder_id: &str) -> Result<()>;
}
