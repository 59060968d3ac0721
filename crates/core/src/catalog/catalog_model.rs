//! Catalog identifier enums and snapshot types.
//!
//! The taxonomy is closed and compiled in: every id is an enum variant, so a
//! dangling category/goal-type/metric reference cannot be expressed. String
//! forms (used in persisted JSON) are the camelCase serde names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::goals::GoalMetric;

/// Identifier of a goal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryId {
    Finance,
    HealthAndFitness,
    PersonalDevelopment,
    LearningAndEducation,
    ProductivityAndTimeManagement,
    ProjectManagement,
}

/// Identifier of a goal type within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalTypeId {
    RevenueTracking,
    Savings,
    BudgetManagement,
    Workouts,
    WeightManagement,
    StepCount,
    Meditation,
    Journaling,
    HabitTracking,
    ReadingBooks,
    CompletingCourses,
    SkillDevelopment,
    DailyTasks,
    WeeklyToDos,
    TimeBlocking,
    BuildingAProject,
    EventPlanning,
}

/// Identifier of a measurable metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricId {
    TargetAmount,
    CurrentAmount,
    PercentageAchieved,
    StartDate,
    EndDate,
    NumberOfSessions,
    DurationOfWorkouts,
    CaloriesBurned,
    StartWeight,
    CurrentWeight,
    GoalWeight,
    StepsCounted,
    NumberOfDaysPracticed,
    DurationPerSession,
    EntriesCompleted,
    HabitsMaintained,
    NumberOfBooksRead,
    PagesCompleted,
    CoursesCompleted,
    CoursesEnrolled,
    HoursSpentStudying,
    SkillLevelProgression,
    HoursSpentPracticing,
    NumberOfTasksCompleted,
    TotalTasks,
    PercentageOfToDoCompletion,
    TimeSpentOnTasks,
    PomodoroSessionsCompleted,
    NumberOfMilestonesCompleted,
    TotalMilestones,
    ProjectCompletionPercentage,
    TasksCompleted,
    TimeSpentOnPlanning,
    EventDate,
}

/// Category snapshot as embedded into goals and templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Material Symbols icon name
    pub icon: String,
    pub goal_types: Vec<GoalType>,
}

/// Goal type snapshot with its candidate metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalType {
    pub id: GoalTypeId,
    pub name: String,
    /// Material Symbols icon name
    pub icon: String,
    pub metrics: Vec<GoalMetric>,
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for GoalTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string id does not name a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIdError(pub String);

impl fmt::Display for UnknownIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown catalog id '{}'", self.0)
    }
}

impl std::error::Error for UnknownIdError {}

impl FromStr for CategoryId {
    type Err = UnknownIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownIdError(s.to_string()))
    }
}

impl FromStr for GoalTypeId {
    type Err = UnknownIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownIdError(s.to_string()))
    }
}

impl FromStr for MetricId {
    type Err = UnknownIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownIdError(s.to_string()))
    }
}
