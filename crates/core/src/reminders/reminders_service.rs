use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::{Result, SchedulerError};
use crate::store::AppStore;

use super::reminders_model::{
    NewReminder, NotificationContent, PermissionStatus, Reminder, ReminderTrigger,
};
use super::reminders_traits::{NotificationSchedulerTrait, ReminderServiceTrait};

pub struct ReminderService {
    store: Arc<AppStore>,
    scheduler: Arc<dyn NotificationSchedulerTrait>,
}

impl ReminderService {
    pub fn new(store: Arc<AppStore>, scheduler: Arc<dyn NotificationSchedulerTrait>) -> Self {
        ReminderService { store, scheduler }
    }
}

#[async_trait]
impl ReminderServiceTrait for ReminderService {
    fn get_reminders(&self, goal_id: &str) -> Result<Vec<Reminder>> {
        Ok(self.store.reminders(goal_id))
    }

    async fn ensure_permission(&self) -> Result<()> {
        match self.scheduler.request_permission().await? {
            PermissionStatus::Granted => Ok(()),
            PermissionStatus::Denied => Err(SchedulerError::PermissionDenied.into()),
        }
    }

    /// Schedules at the external scheduler first; the reminder is only
    /// stored once an id has been assigned.
    async fn schedule_reminder(&self, new_reminder: NewReminder) -> Result<Reminder> {
        new_reminder.validate()?;

        let trigger = ReminderTrigger::for_schedule(
            new_reminder.scheduled_time,
            new_reminder.repeat_interval,
            Utc::now(),
        );
        let content =
            NotificationContent::for_reminder(&new_reminder.goal_id, &new_reminder.message);
        let notification_id = self.scheduler.schedule(content, trigger).await?;

        let now = Utc::now();
        let reminder = Reminder {
            id: notification_id,
            goal_id: new_reminder.goal_id,
            message: new_reminder.message,
            scheduled_time: new_reminder.scheduled_time,
            repeat_interval: new_reminder.repeat_interval,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.store.add_reminder(reminder.clone());
        Ok(reminder)
    }

    /// Cancels at the scheduler and removes the local record.
    async fn cancel_reminder(&self, reminder_id: &str) -> Result<()> {
        self.scheduler.cancel(reminder_id).await?;
        self.store.delete_reminder(reminder_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NoOpStoreEventSink;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;
    use std::sync::Mutex;

    // ============== Mock Scheduler ==============

    #[derive(Default)]
    struct MockScheduler {
        scheduled: Mutex<Vec<(NotificationContent, ReminderTrigger)>>,
        cancelled: Mutex<Vec<String>>,
        deny_permission: bool,
    }

    impl MockScheduler {
        fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl NotificationSchedulerTrait for MockScheduler {
        async fn request_permission(&self) -> Result<PermissionStatus> {
            Ok(if self.deny_permission {
                PermissionStatus::Denied
            } else {
                PermissionStatus::Granted
            })
        }

        async fn schedule(
            &self,
            content: NotificationContent,
            trigger: ReminderTrigger,
        ) -> Result<String> {
            let mut scheduled = self.scheduled.lock().unwrap();
            scheduled.push((content, trigger));
            Ok(format!("notif-{}", scheduled.len()))
        }

        async fn cancel(&self, notification_id: &str) -> Result<()> {
            self.cancelled.lock().unwrap().push(notification_id.to_string());
            Ok(())
        }
    }

    fn make_service() -> (ReminderService, Arc<AppStore>, Arc<MockScheduler>) {
        let store = Arc::new(AppStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(NoOpStoreEventSink),
        ));
        let scheduler = Arc::new(MockScheduler::new());
        (
            ReminderService::new(store.clone(), scheduler.clone()),
            store,
            scheduler,
        )
    }

    fn weekly_reminder() -> NewReminder {
        NewReminder {
            goal_id: "goal-1".to_string(),
            message: "Log your savings".to_string(),
            // 2025-06-02 is a Monday
            scheduled_time: Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
            repeat_interval: Some(crate::reminders::RepeatInterval::Weekly),
        }
    }

    #[tokio::test]
    async fn test_schedule_reminder_stores_scheduler_id() {
        let (service, store, scheduler) = make_service();

        let reminder = service.schedule_reminder(weekly_reminder()).await.unwrap();
        assert_eq!(reminder.id, "notif-1");
        assert!(reminder.is_active);
        assert_eq!(store.reminders("goal-1"), vec![reminder]);

        let scheduled = scheduler.scheduled.lock().unwrap();
        let (content, trigger) = &scheduled[0];
        assert_eq!(content.goal_id, "goal-1");
        assert_eq!(content.body, "Log your savings");
        assert_eq!(
            *trigger,
            ReminderTrigger::Weekly {
                weekday: 2,
                hour: 9,
                minute: 0
            }
        );
    }

    #[tokio::test]
    async fn test_schedule_reminder_rejects_empty_message() {
        let (service, store, scheduler) = make_service();

        let mut new = weekly_reminder();
        new.message = "".to_string();
        assert!(service.schedule_reminder(new).await.is_err());

        // Nothing reached the scheduler or the store.
        assert!(scheduler.scheduled.lock().unwrap().is_empty());
        assert!(store.reminders("goal-1").is_empty());
    }

    #[tokio::test]
    async fn test_cancel_reminder_hits_scheduler_and_store() {
        let (service, store, scheduler) = make_service();
        let reminder = service.schedule_reminder(weekly_reminder()).await.unwrap();

        service.cancel_reminder(&reminder.id).await.unwrap();

        assert_eq!(*scheduler.cancelled.lock().unwrap(), vec!["notif-1"]);
        assert!(store.reminders("goal-1").is_empty());
    }

    #[tokio::test]
    async fn test_get_reminders_filters_by_goal() {
        let (service, _store, _scheduler) = make_service();
        service.schedule_reminder(weekly_reminder()).await.unwrap();

        let mut other = weekly_reminder();
        other.goal_id = "goal-2".to_string();
        service.schedule_reminder(other).await.unwrap();

        assert_eq!(service.get_reminders("goal-1").unwrap().len(), 1);
        assert_eq!(service.get_reminders("goal-2").unwrap().len(), 1);
        assert!(service.get_reminders("goal-3").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_permission_denied() {
        let store = Arc::new(AppStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(NoOpStoreEventSink),
        ));
        let scheduler = Arc::new(MockScheduler {
            deny_permission: true,
            ..Default::default()
        });
        let service = ReminderService::new(store, scheduler);

        assert!(service.ensure_permission().await.is_err());
    }
}
