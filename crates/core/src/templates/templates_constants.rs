//! Built-in starter templates offered to every new user.

use chrono::Utc;

use crate::catalog::{self, CategoryId, GoalTypeId, MetricId};
use crate::goals::GoalMetric;

use super::templates_model::Template;

struct StarterSpec {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: CategoryId,
    goal_type: GoalTypeId,
    metrics: &'static [(MetricId, f64)],
    icon: &'static str,
}

/// Starter templates carry only numeric metric targets; date metrics are
/// picked per goal during the creation workflow.
const STARTERS: &[StarterSpec] = &[
    StarterSpec {
        id: "starter-savings",
        title: "Save $5,000 in 6 Months",
        description: "A plan to save $5,000 over the next 6 months.",
        category: CategoryId::Finance,
        goal_type: GoalTypeId::Savings,
        metrics: &[(MetricId::TargetAmount, 5000.0), (MetricId::CurrentAmount, 0.0)],
        icon: "savings",
    },
    StarterSpec {
        id: "starter-steps",
        title: "Walk 10,000 Steps Daily",
        description: "Aim to walk 10,000 steps every day for better health.",
        category: CategoryId::HealthAndFitness,
        goal_type: GoalTypeId::StepCount,
        metrics: &[(MetricId::StepsCounted, 10000.0)],
        icon: "directions_walk",
    },
    StarterSpec {
        id: "starter-reading",
        title: "Read 12 Books This Year",
        description: "Challenge yourself to read one book per month.",
        category: CategoryId::LearningAndEducation,
        goal_type: GoalTypeId::ReadingBooks,
        metrics: &[(MetricId::NumberOfBooksRead, 12.0)],
        icon: "menu_book",
    },
    StarterSpec {
        id: "starter-weight",
        title: "Lose 10kg in 3 Months",
        description: "A weight loss plan to lose 10kg over 3 months.",
        category: CategoryId::HealthAndFitness,
        goal_type: GoalTypeId::WeightManagement,
        // Target weight is filled in by the user
        metrics: &[
            (MetricId::StartWeight, 0.0),
            (MetricId::CurrentWeight, 0.0),
            (MetricId::GoalWeight, 0.0),
        ],
        icon: "fitness_center",
    },
    StarterSpec {
        id: "starter-study",
        title: "Study 200 Hours for the Upcoming Exam",
        description: "Prepare for your exam by dedicating sufficient study time.",
        category: CategoryId::LearningAndEducation,
        goal_type: GoalTypeId::CompletingCourses,
        metrics: &[(MetricId::HoursSpentStudying, 200.0)],
        icon: "school",
    },
    StarterSpec {
        id: "starter-workouts",
        title: "Complete 50 Workouts in 6 Months",
        description: "Stay active by completing regular workout sessions.",
        category: CategoryId::HealthAndFitness,
        goal_type: GoalTypeId::Workouts,
        metrics: &[(MetricId::NumberOfSessions, 50.0)],
        icon: "fitness_center",
    },
];

/// Materializes the starter template set for a user.
pub fn starter_templates(user_id: &str) -> Vec<Template> {
    let now = Utc::now();
    STARTERS
        .iter()
        .map(|starter| Template {
            id: starter.id.to_string(),
            user_id: user_id.to_string(),
            title: starter.title.to_string(),
            description: Some(starter.description.to_string()),
            category: catalog::category(starter.category),
            goal_type: catalog::goal_type(starter.goal_type),
            default_metrics: starter
                .metrics
                .iter()
                .map(|(id, target)| GoalMetric::with_target(*id, *target))
                .collect(),
            icon: starter.icon.to_string(),
            is_custom: false,
            created_at: now,
            updated_at: now,
        })
        .collect()
}
