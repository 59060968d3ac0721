//! Compiled-in catalog data: display names, icons, and taxonomy edges.
//!
//! Enumeration functions return entries in declaration order, which is the
//! fixed display order for every selector screen.

use crate::goals::GoalMetric;

use super::catalog_model::{Category, CategoryId, GoalType, GoalTypeId, MetricId};

impl CategoryId {
    pub const ALL: [CategoryId; 6] = [
        CategoryId::Finance,
        CategoryId::HealthAndFitness,
        CategoryId::PersonalDevelopment,
        CategoryId::LearningAndEducation,
        CategoryId::ProductivityAndTimeManagement,
        CategoryId::ProjectManagement,
    ];

    /// String form, identical to the serde camelCase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Finance => "finance",
            CategoryId::HealthAndFitness => "healthAndFitness",
            CategoryId::PersonalDevelopment => "personalDevelopment",
            CategoryId::LearningAndEducation => "learningAndEducation",
            CategoryId::ProductivityAndTimeManagement => "productivityAndTimeManagement",
            CategoryId::ProjectManagement => "projectManagement",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryId::Finance => "Financial Goals",
            CategoryId::HealthAndFitness => "Health and Fitness Goals",
            CategoryId::PersonalDevelopment => "Personal Development Goals",
            CategoryId::LearningAndEducation => "Learning and Educational Goals",
            CategoryId::ProductivityAndTimeManagement => {
                "Productivity and Time Management Goals"
            }
            CategoryId::ProjectManagement => "Project Management Goals",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryId::Finance => "attach_money",
            CategoryId::HealthAndFitness => "fitness_center",
            CategoryId::PersonalDevelopment => "self_improvement",
            CategoryId::LearningAndEducation => "school",
            CategoryId::ProductivityAndTimeManagement => "schedule",
            CategoryId::ProjectManagement => "assignment",
        }
    }

    /// Goal types offered by this category, in display order.
    pub fn goal_types(&self) -> &'static [GoalTypeId] {
        match self {
            CategoryId::Finance => &[
                GoalTypeId::RevenueTracking,
                GoalTypeId::Savings,
                GoalTypeId::BudgetManagement,
            ],
            CategoryId::HealthAndFitness => &[
                GoalTypeId::Workouts,
                GoalTypeId::WeightManagement,
                GoalTypeId::StepCount,
            ],
            CategoryId::PersonalDevelopment => &[
                GoalTypeId::Meditation,
                GoalTypeId::Journaling,
                GoalTypeId::HabitTracking,
            ],
            CategoryId::LearningAndEducation => &[
                GoalTypeId::ReadingBooks,
                GoalTypeId::CompletingCourses,
                GoalTypeId::SkillDevelopment,
            ],
            CategoryId::ProductivityAndTimeManagement => &[
                GoalTypeId::DailyTasks,
                GoalTypeId::WeeklyToDos,
                GoalTypeId::TimeBlocking,
            ],
            CategoryId::ProjectManagement => {
                &[GoalTypeId::BuildingAProject, GoalTypeId::EventPlanning]
            }
        }
    }
}

impl GoalTypeId {
    pub const ALL: [GoalTypeId; 17] = [
        GoalTypeId::RevenueTracking,
        GoalTypeId::Savings,
        GoalTypeId::BudgetManagement,
        GoalTypeId::Workouts,
        GoalTypeId::WeightManagement,
        GoalTypeId::StepCount,
        GoalTypeId::Meditation,
        GoalTypeId::Journaling,
        GoalTypeId::HabitTracking,
        GoalTypeId::ReadingBooks,
        GoalTypeId::CompletingCourses,
        GoalTypeId::SkillDevelopment,
        GoalTypeId::DailyTasks,
        GoalTypeId::WeeklyToDos,
        GoalTypeId::TimeBlocking,
        GoalTypeId::BuildingAProject,
        GoalTypeId::EventPlanning,
    ];

    /// String form, identical to the serde camelCase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalTypeId::RevenueTracking => "revenueTracking",
            GoalTypeId::Savings => "savings",
            GoalTypeId::BudgetManagement => "budgetManagement",
            GoalTypeId::Workouts => "workouts",
            GoalTypeId::WeightManagement => "weightManagement",
            GoalTypeId::StepCount => "stepCount",
            GoalTypeId::Meditation => "meditation",
            GoalTypeId::Journaling => "journaling",
            GoalTypeId::HabitTracking => "habitTracking",
            GoalTypeId::ReadingBooks => "readingBooks",
            GoalTypeId::CompletingCourses => "completingCourses",
            GoalTypeId::SkillDevelopment => "skillDevelopment",
            GoalTypeId::DailyTasks => "dailyTasks",
            GoalTypeId::WeeklyToDos => "weeklyToDos",
            GoalTypeId::TimeBlocking => "timeBlocking",
            GoalTypeId::BuildingAProject => "buildingAProject",
            GoalTypeId::EventPlanning => "eventPlanning",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GoalTypeId::RevenueTracking => "Revenue Tracking",
            GoalTypeId::Savings => "Savings",
            GoalTypeId::BudgetManagement => "Budget Management",
            GoalTypeId::Workouts => "Workouts",
            GoalTypeId::WeightManagement => "Weight Management",
            GoalTypeId::StepCount => "Step Count",
            GoalTypeId::Meditation => "Meditation",
            GoalTypeId::Journaling => "Journaling",
            GoalTypeId::HabitTracking => "Habit Tracking",
            GoalTypeId::ReadingBooks => "Reading Books",
            GoalTypeId::CompletingCourses => "Completing Courses",
            GoalTypeId::SkillDevelopment => "Skill Development",
            GoalTypeId::DailyTasks => "Daily Tasks",
            GoalTypeId::WeeklyToDos => "Weekly To-Dos",
            GoalTypeId::TimeBlocking => "Time Blocking",
            GoalTypeId::BuildingAProject => "Building a Project",
            GoalTypeId::EventPlanning => "Event Planning",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GoalTypeId::RevenueTracking => "trending_up",
            GoalTypeId::Savings => "savings",
            GoalTypeId::BudgetManagement => "account_balance_wallet",
            GoalTypeId::Workouts => "fitness_center",
            GoalTypeId::WeightManagement => "monitor_weight",
            GoalTypeId::StepCount => "directions_walk",
            GoalTypeId::Meditation => "self_improvement",
            GoalTypeId::Journaling => "menu_book",
            GoalTypeId::HabitTracking => "track_changes",
            GoalTypeId::ReadingBooks => "menu_book",
            GoalTypeId::CompletingCourses => "school",
            GoalTypeId::SkillDevelopment => "build",
            GoalTypeId::DailyTasks => "today",
            GoalTypeId::WeeklyToDos => "date_range",
            GoalTypeId::TimeBlocking => "schedule",
            GoalTypeId::BuildingAProject => "build",
            GoalTypeId::EventPlanning => "event",
        }
    }

    /// Candidate metrics offered when this goal type is picked.
    pub fn metrics(&self) -> &'static [MetricId] {
        match self {
            GoalTypeId::RevenueTracking => &[
                MetricId::TargetAmount,
                MetricId::CurrentAmount,
                MetricId::StartDate,
                MetricId::EndDate,
                MetricId::PercentageAchieved,
            ],
            GoalTypeId::Savings => &[
                MetricId::TargetAmount,
                MetricId::CurrentAmount,
                MetricId::StartDate,
                MetricId::EndDate,
                MetricId::PercentageAchieved,
            ],
            GoalTypeId::BudgetManagement => &[
                MetricId::TargetAmount,
                MetricId::CurrentAmount,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::Workouts => &[
                MetricId::NumberOfSessions,
                MetricId::DurationOfWorkouts,
                MetricId::CaloriesBurned,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::WeightManagement => &[
                MetricId::StartWeight,
                MetricId::CurrentWeight,
                MetricId::GoalWeight,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::StepCount => {
                &[MetricId::StepsCounted, MetricId::StartDate, MetricId::EndDate]
            }
            GoalTypeId::Meditation => &[
                MetricId::NumberOfDaysPracticed,
                MetricId::DurationPerSession,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::Journaling => &[
                MetricId::EntriesCompleted,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::HabitTracking => &[
                MetricId::HabitsMaintained,
                MetricId::NumberOfDaysPracticed,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::ReadingBooks => &[
                MetricId::NumberOfBooksRead,
                MetricId::PagesCompleted,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::CompletingCourses => &[
                MetricId::CoursesCompleted,
                MetricId::CoursesEnrolled,
                MetricId::HoursSpentStudying,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::SkillDevelopment => &[
                MetricId::SkillLevelProgression,
                MetricId::HoursSpentPracticing,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::DailyTasks => &[
                MetricId::NumberOfTasksCompleted,
                MetricId::TotalTasks,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::WeeklyToDos => &[
                MetricId::PercentageOfToDoCompletion,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::TimeBlocking => &[
                MetricId::TimeSpentOnTasks,
                MetricId::PomodoroSessionsCompleted,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::BuildingAProject => &[
                MetricId::NumberOfMilestonesCompleted,
                MetricId::TotalMilestones,
                MetricId::ProjectCompletionPercentage,
                MetricId::TimeSpentOnTasks,
                MetricId::StartDate,
                MetricId::EndDate,
            ],
            GoalTypeId::EventPlanning => &[
                MetricId::TasksCompleted,
                MetricId::TotalTasks,
                MetricId::TimeSpentOnPlanning,
                MetricId::StartDate,
                MetricId::EventDate,
            ],
        }
    }
}

impl MetricId {
    pub const ALL: [MetricId; 34] = [
        MetricId::TargetAmount,
        MetricId::CurrentAmount,
        MetricId::PercentageAchieved,
        MetricId::StartDate,
        MetricId::EndDate,
        MetricId::NumberOfSessions,
        MetricId::DurationOfWorkouts,
        MetricId::CaloriesBurned,
        MetricId::StartWeight,
        MetricId::CurrentWeight,
        MetricId::GoalWeight,
        MetricId::StepsCounted,
        MetricId::NumberOfDaysPracticed,
        MetricId::DurationPerSession,
        MetricId::EntriesCompleted,
        MetricId::HabitsMaintained,
        MetricId::NumberOfBooksRead,
        MetricId::PagesCompleted,
        MetricId::CoursesCompleted,
        MetricId::CoursesEnrolled,
        MetricId::HoursSpentStudying,
        MetricId::SkillLevelProgression,
        MetricId::HoursSpentPracticing,
        MetricId::NumberOfTasksCompleted,
        MetricId::TotalTasks,
        MetricId::PercentageOfToDoCompletion,
        MetricId::TimeSpentOnTasks,
        MetricId::PomodoroSessionsCompleted,
        MetricId::NumberOfMilestonesCompleted,
        MetricId::TotalMilestones,
        MetricId::ProjectCompletionPercentage,
        MetricId::TasksCompleted,
        MetricId::TimeSpentOnPlanning,
        MetricId::EventDate,
    ];

    /// String form, identical to the serde camelCase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::TargetAmount => "targetAmount",
            MetricId::CurrentAmount => "currentAmount",
            MetricId::PercentageAchieved => "percentageAchieved",
            MetricId::StartDate => "startDate",
            MetricId::EndDate => "endDate",
            MetricId::NumberOfSessions => "numberOfSessions",
            MetricId::DurationOfWorkouts => "durationOfWorkouts",
            MetricId::CaloriesBurned => "caloriesBurned",
            MetricId::StartWeight => "startWeight",
            MetricId::CurrentWeight => "currentWeight",
            MetricId::GoalWeight => "goalWeight",
            MetricId::StepsCounted => "stepsCounted",
            MetricId::NumberOfDaysPracticed => "numberOfDaysPracticed",
            MetricId::DurationPerSession => "durationPerSession",
            MetricId::EntriesCompleted => "entriesCompleted",
            MetricId::HabitsMaintained => "habitsMaintained",
            MetricId::NumberOfBooksRead => "numberOfBooksRead",
            MetricId::PagesCompleted => "pagesCompleted",
            MetricId::CoursesCompleted => "coursesCompleted",
            MetricId::CoursesEnrolled => "coursesEnrolled",
            MetricId::HoursSpentStudying => "hoursSpentStudying",
            MetricId::SkillLevelProgression => "skillLevelProgression",
            MetricId::HoursSpentPracticing => "hoursSpentPracticing",
            MetricId::NumberOfTasksCompleted => "numberOfTasksCompleted",
            MetricId::TotalTasks => "totalTasks",
            MetricId::PercentageOfToDoCompletion => "percentageOfToDoCompletion",
            MetricId::TimeSpentOnTasks => "timeSpentOnTasks",
            MetricId::PomodoroSessionsCompleted => "pomodoroSessionsCompleted",
            MetricId::NumberOfMilestonesCompleted => "numberOfMilestonesCompleted",
            MetricId::TotalMilestones => "totalMilestones",
            MetricId::ProjectCompletionPercentage => "projectCompletionPercentage",
            MetricId::TasksCompleted => "tasksCompleted",
            MetricId::TimeSpentOnPlanning => "timeSpentOnPlanning",
            MetricId::EventDate => "eventDate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MetricId::TargetAmount => "Target Amount",
            MetricId::CurrentAmount => "Current Amount",
            MetricId::PercentageAchieved => "Percentage Achieved",
            MetricId::StartDate => "Start Date",
            MetricId::EndDate => "End Date",
            MetricId::NumberOfSessions => "Number of Sessions",
            MetricId::DurationOfWorkouts => "Duration of Workouts",
            MetricId::CaloriesBurned => "Calories Burned",
            MetricId::StartWeight => "Start Weight",
            MetricId::CurrentWeight => "Current Weight",
            MetricId::GoalWeight => "Goal Weight",
            MetricId::StepsCounted => "Steps Counted",
            MetricId::NumberOfDaysPracticed => "Number of Days Practiced",
            MetricId::DurationPerSession => "Duration per Session",
            MetricId::EntriesCompleted => "Entries Completed",
            MetricId::HabitsMaintained => "Habits Maintained",
            MetricId::NumberOfBooksRead => "Number of Books Read",
            MetricId::PagesCompleted => "Pages Completed",
            MetricId::CoursesCompleted => "Courses Completed",
            MetricId::CoursesEnrolled => "Courses Enrolled",
            MetricId::HoursSpentStudying => "Hours Spent Studying",
            MetricId::SkillLevelProgression => "Skill Level Progression",
            MetricId::HoursSpentPracticing => "Hours Spent Practicing",
            MetricId::NumberOfTasksCompleted => "Number of Tasks Completed",
            MetricId::TotalTasks => "Total Tasks",
            MetricId::PercentageOfToDoCompletion => "Percentage of To-Do Completion",
            MetricId::TimeSpentOnTasks => "Time Spent on Tasks",
            MetricId::PomodoroSessionsCompleted => "Pomodoro Sessions Completed",
            MetricId::NumberOfMilestonesCompleted => "Number of Milestones Completed",
            MetricId::TotalMilestones => "Total Milestones",
            MetricId::ProjectCompletionPercentage => "Project Completion Percentage",
            MetricId::TasksCompleted => "Tasks Completed",
            MetricId::TimeSpentOnPlanning => "Time Spent on Planning",
            MetricId::EventDate => "Event Date",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MetricId::TargetAmount => "attach_money",
            MetricId::CurrentAmount => "account_balance_wallet",
            MetricId::PercentageAchieved => "percent",
            MetricId::StartDate => "today",
            MetricId::EndDate => "event",
            MetricId::NumberOfSessions => "format_list_numbered",
            MetricId::DurationOfWorkouts => "timer",
            MetricId::CaloriesBurned => "local_fire_department",
            MetricId::StartWeight => "fitness_center",
            MetricId::CurrentWeight => "fitness_center",
            MetricId::GoalWeight => "flag",
            MetricId::StepsCounted => "directions_walk",
            MetricId::NumberOfDaysPracticed => "calendar_today",
            MetricId::DurationPerSession => "timer",
            MetricId::EntriesCompleted => "edit",
            MetricId::HabitsMaintained => "check_circle",
            MetricId::NumberOfBooksRead => "book",
            MetricId::PagesCompleted => "chrome_reader_mode",
            MetricId::CoursesCompleted => "assignment_turned_in",
            MetricId::CoursesEnrolled => "assignment",
            MetricId::HoursSpentStudying => "timer",
            MetricId::SkillLevelProgression => "trending_up",
            MetricId::HoursSpentPracticing => "timer",
            MetricId::NumberOfTasksCompleted => "check_box",
            MetricId::TotalTasks => "format_list_bulleted",
            MetricId::PercentageOfToDoCompletion => "donut_large",
            MetricId::TimeSpentOnTasks => "timer",
            MetricId::PomodoroSessionsCompleted => "alarm",
            MetricId::NumberOfMilestonesCompleted => "flag",
            MetricId::TotalMilestones => "format_list_numbered",
            MetricId::ProjectCompletionPercentage => "donut_large",
            MetricId::TasksCompleted => "check_box",
            MetricId::TimeSpentOnPlanning => "timer",
            MetricId::EventDate => "event",
        }
    }
}

/// Materializes the metric instance for a catalog id, with zeroed values.
pub fn metric(id: MetricId) -> GoalMetric {
    GoalMetric {
        id,
        name: id.display_name().to_string(),
        icon: id.icon().to_string(),
        current_value: 0.0,
        target_value: 0.0,
    }
}

/// Materializes the goal type snapshot for a catalog id.
pub fn goal_type(id: GoalTypeId) -> GoalType {
    GoalType {
        id,
        name: id.display_name().to_string(),
        icon: id.icon().to_string(),
        metrics: id.metrics().iter().copied().map(metric).collect(),
    }
}

/// Materializes the category snapshot for a catalog id.
pub fn category(id: CategoryId) -> Category {
    Category {
        id,
        name: id.display_name().to_string(),
        icon: id.icon().to_string(),
        goal_types: id.goal_types().iter().copied().map(goal_type).collect(),
    }
}

/// All categories in display order.
pub fn categories() -> Vec<Category> {
    CategoryId::ALL.iter().copied().map(category).collect()
}

/// All goal types in display order.
pub fn goal_types() -> Vec<GoalType> {
    GoalTypeId::ALL.iter().copied().map(goal_type).collect()
}

/// All metrics in display order.
pub fn metrics() -> Vec<GoalMetric> {
    MetricId::ALL.iter().copied().map(metric).collect()
}

/// Looks up a category by string id. Unknown ids are `None`, never a default.
pub fn lookup_category(id: &str) -> Option<Category> {
    id.parse::<CategoryId>().ok().map(category)
}

/// Looks up a goal type by string id.
pub fn lookup_goal_type(id: &str) -> Option<GoalType> {
    id.parse::<GoalTypeId>().ok().map(goal_type)
}

/// Looks up a metric by string id.
pub fn lookup_metric(id: &str) -> Option<GoalMetric> {
    id.parse::<MetricId>().ok().map(metric)
}
