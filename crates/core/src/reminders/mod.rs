//! Reminders module - domain models, trigger computation, service, and the
//! external scheduler trait.

mod reminders_model;
mod reminders_service;
mod reminders_traits;

pub use reminders_model::{
    NewReminder, NotificationContent, PermissionStatus, Reminder, ReminderTrigger,
    RepeatInterval,
};
pub use reminders_service::ReminderService;
pub use reminders_traits::{NotificationSchedulerTrait, ReminderServiceTrait};
