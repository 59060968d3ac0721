/// Storage key holding the serialized user record.
pub const USER_STORAGE_KEY: &str = "user";

/// Storage key holding the onboarding flag (literal "true" or absent).
pub const ONBOARDING_STORAGE_KEY: &str = "hasCompletedOnboarding";

/// Storage key holding the full application state snapshot.
pub const STORE_STORAGE_KEY: &str = "goal-tracker-storage";

/// Notification title used for every goal reminder.
pub const REMINDER_NOTIFICATION_TITLE: &str = "Goal Reminder";
