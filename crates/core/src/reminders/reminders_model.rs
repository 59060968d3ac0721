//! Reminder domain models and trigger computation.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::REMINDER_NOTIFICATION_TITLE;
use crate::errors::{Error, Result, ValidationError};

/// Repeat cadence for a scheduled reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RepeatInterval {
    Daily,
    Weekly,
    Monthly,
}

/// A scheduled notification tied to a goal.
///
/// `id` is assigned by the notification scheduler, never generated locally;
/// a reminder only exists once the scheduler has accepted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub goal_id: String,
    pub message: String,
    pub scheduled_time: DateTime<Utc>,
    pub repeat_interval: Option<RepeatInterval>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for scheduling a reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub goal_id: String,
    pub message: String,
    pub scheduled_time: DateTime<Utc>,
    pub repeat_interval: Option<RepeatInterval>,
}

impl NewReminder {
    /// Validates the reminder input: a non-empty message.
    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "message".to_string(),
            )));
        }
        Ok(())
    }
}

/// Notification payload handed to the scheduler.
///
/// `goal_id` rides along so a notification tap can deep-link back to the
/// goal detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub goal_id: String,
}

impl NotificationContent {
    pub fn for_reminder(goal_id: impl Into<String>, message: impl Into<String>) -> Self {
        NotificationContent {
            title: REMINDER_NOTIFICATION_TITLE.to_string(),
            body: message.into(),
            goal_id: goal_id.into(),
        }
    }
}

/// Scheduler trigger derived from a scheduled time and repeat cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReminderTrigger {
    /// Fire once after a relative delay.
    OneShot { seconds: i64 },
    /// Fire every day at the given wall-clock time.
    Daily { hour: u32, minute: u32 },
    /// Fire every week; weekday is 1-indexed from Sunday (Sunday = 1).
    Weekly { weekday: u32, hour: u32, minute: u32 },
    /// Fire every month on the given day of month.
    Monthly { day: u32, hour: u32, minute: u32 },
}

impl ReminderTrigger {
    /// Computes the trigger for a scheduled time.
    ///
    /// One-shot delays are relative to `now` and floored at zero, so a time
    /// already in the past fires immediately.
    pub fn for_schedule(
        scheduled_time: DateTime<Utc>,
        repeat_interval: Option<RepeatInterval>,
        now: DateTime<Utc>,
    ) -> Self {
        match repeat_interval {
            Some(RepeatInterval::Daily) => ReminderTrigger::Daily {
                hour: scheduled_time.hour(),
                minute: scheduled_time.minute(),
            },
            Some(RepeatInterval::Weekly) => ReminderTrigger::Weekly {
                weekday: scheduled_time.weekday().num_days_from_sunday() + 1,
                hour: scheduled_time.hour(),
                minute: scheduled_time.minute(),
            },
            Some(RepeatInterval::Monthly) => ReminderTrigger::Monthly {
                day: scheduled_time.day(),
                hour: scheduled_time.hour(),
                minute: scheduled_time.minute(),
            },
            None => ReminderTrigger::OneShot {
                seconds: (scheduled_time - now).num_seconds().max(0),
            },
        }
    }

    /// Whether the scheduler should re-fire this trigger.
    pub fn repeats(&self) -> bool {
        !matches!(self, ReminderTrigger::OneShot { .. })
    }
}

/// Outcome of a notification permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_weekly_trigger_monday_morning() {
        // 2025-06-02 is a Monday
        let scheduled = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let trigger =
            ReminderTrigger::for_schedule(scheduled, Some(RepeatInterval::Weekly), now);
        assert_eq!(
            trigger,
            ReminderTrigger::Weekly {
                weekday: 2,
                hour: 9,
                minute: 0
            }
        );
        assert!(trigger.repeats());
    }

    #[test]
    fn test_daily_trigger_keeps_wall_clock_time() {
        let scheduled = Utc.with_ymd_and_hms(2025, 6, 2, 21, 30, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let trigger = ReminderTrigger::for_schedule(scheduled, Some(RepeatInterval::Daily), now);
        assert_eq!(
            trigger,
            ReminderTrigger::Daily {
                hour: 21,
                minute: 30
            }
        );
        assert!(trigger.repeats());
    }

    #[test]
    fn test_monthly_trigger_uses_day_of_month() {
        let scheduled = Utc.with_ymd_and_hms(2025, 6, 15, 8, 15, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        let trigger =
            ReminderTrigger::for_schedule(scheduled, Some(RepeatInterval::Monthly), now);
        assert_eq!(
            trigger,
            ReminderTrigger::Monthly {
                day: 15,
                hour: 8,
                minute: 15
            }
        );
    }

    #[test]
    fn test_one_shot_trigger_relative_delay() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let scheduled = now + chrono::Duration::seconds(90);

        let trigger = ReminderTrigger::for_schedule(scheduled, None, now);
        assert_eq!(trigger, ReminderTrigger::OneShot { seconds: 90 });
        assert!(!trigger.repeats());
    }

    #[test]
    fn test_one_shot_trigger_in_the_past_floors_at_zero() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let scheduled = now - chrono::Duration::minutes(5);

        let trigger = ReminderTrigger::for_schedule(scheduled, None, now);
        assert_eq!(trigger, ReminderTrigger::OneShot { seconds: 0 });
    }

    #[test]
    fn test_new_reminder_requires_message() {
        let new = NewReminder {
            goal_id: "g1".to_string(),
            message: " ".to_string(),
            scheduled_time: Utc::now(),
            repeat_interval: None,
        };
        assert!(new.validate().is_err());
    }
}
