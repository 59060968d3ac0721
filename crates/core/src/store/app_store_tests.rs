use std::sync::Arc;

use chrono::Utc;
use proptest::prelude::*;
use uuid::Uuid;

use crate::catalog::{self, CategoryId, GoalTypeId, MetricId};
use crate::constants::STORE_STORAGE_KEY;
use crate::events::{MockStoreEventSink, NoOpStoreEventSink, StoreEvent};
use crate::goals::{Goal, GoalBuilder, GoalMetric, GoalUpdate};
use crate::reminders::Reminder;
use crate::storage::{MemoryStorage, StorageBackend};
use crate::store::{AppState, AppStore};
use crate::subgoals::{SubGoal, SubGoalUpdate};

// ============== Helpers ==============

fn make_store() -> (Arc<AppStore>, Arc<MemoryStorage>, Arc<MockStoreEventSink>) {
    let storage = Arc::new(MemoryStorage::new());
    let events = Arc::new(MockStoreEventSink::new());
    let store = Arc::new(AppStore::new(storage.clone(), events.clone()));
    (store, storage, events)
}

fn make_goal(title: &str) -> Goal {
    GoalBuilder::new("user-1")
        .title(title)
        .category(catalog::category(CategoryId::Finance))
        .goal_type(catalog::goal_type(GoalTypeId::Savings))
        .metric(GoalMetric::with_target(MetricId::TargetAmount, 5000.0))
        .build()
        .unwrap()
}

fn make_sub_goal(goal_id: &str, id: &str, order: i32) -> SubGoal {
    let now = Utc::now();
    SubGoal {
        id: id.to_string(),
        goal_id: goal_id.to_string(),
        title: format!("step {id}"),
        description: None,
        metrics: vec![GoalMetric::with_target(MetricId::CurrentAmount, 1000.0)],
        is_completed: false,
        order,
        created_at: now,
        updated_at: now,
    }
}

fn make_reminder(goal_id: &str, id: &str) -> Reminder {
    let now = Utc::now();
    Reminder {
        id: id.to_string(),
        goal_id: goal_id.to_string(),
        message: "Log your progress".to_string(),
        scheduled_time: now,
        repeat_interval: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// The snapshot written to storage after the last mutation.
fn persisted_state(storage: &MemoryStorage) -> AppState {
    let raw = storage.get(STORE_STORAGE_KEY).unwrap().expect("no snapshot");
    serde_json::from_str(&raw).unwrap()
}

// ============== Goal operations ==============

#[test]
fn test_add_and_get_goal() {
    let (store, _storage, _events) = make_store();
    let goal = make_goal("Save $5,000");

    store.add_goal(goal.clone());
    assert_eq!(store.goals(), vec![goal.clone()]);
    assert_eq!(store.goal(&goal.id), Some(goal));
    assert_eq!(store.goal("missing"), None);
}

#[test]
fn test_set_goals_replaces_list() {
    let (store, _storage, _events) = make_store();
    store.add_goal(make_goal("Old"));

    let replacement = vec![make_goal("New A"), make_goal("New B")];
    store.set_goals(replacement.clone());
    assert_eq!(store.goals(), replacement);
}

#[test]
fn test_update_goal_merges_and_stamps() {
    let (store, _storage, _events) = make_store();
    let goal = make_goal("Save $5,000");
    store.add_goal(goal.clone());

    store.update_goal(
        &goal.id,
        GoalUpdate {
            progress: Some(25.0),
            is_completed: Some(false),
            ..Default::default()
        },
    );

    let updated = store.goal(&goal.id).unwrap();
    assert_eq!(updated.progress, 25.0);
    assert_eq!(updated.title, goal.title);
    assert!(updated.updated_at >= goal.updated_at);
    assert_eq!(updated.created_at, goal.created_at);
}

#[test]
fn test_update_goal_empty_patch_only_stamps_updated_at() {
    let (store, _storage, _events) = make_store();
    let goal = make_goal("Save $5,000");
    store.add_goal(goal.clone());

    store.update_goal(&goal.id, GoalUpdate::default());

    let after = store.goal(&goal.id).unwrap();
    assert!(after.updated_at >= goal.updated_at);
    let mut normalized = after.clone();
    normalized.updated_at = goal.updated_at;
    assert_eq!(normalized, goal);
}

#[test]
fn test_update_goal_unknown_id_is_silent_noop() {
    let (store, _storage, _events) = make_store();
    let goal = make_goal("Save $5,000");
    store.add_goal(goal.clone());

    store.update_goal(
        "missing",
        GoalUpdate {
            progress: Some(99.0),
            ..Default::default()
        },
    );
    assert_eq!(store.goals(), vec![goal]);
}

#[test]
fn test_delete_goal_does_not_cascade() {
    let (store, _storage, _events) = make_store();
    let goal = make_goal("Save $5,000");
    let goal_id = goal.id.clone();
    store.add_goal(goal);
    store.add_sub_goal(make_sub_goal(&goal_id, "sg-1", 0));
    store.add_reminder(make_reminder(&goal_id, "notif-1"));

    store.delete_goal(&goal_id);

    assert!(store.goals().is_empty());
    // Orphans stay behind; cleanup is an explicit caller decision.
    assert_eq!(store.sub_goals(&goal_id).len(), 1);
    assert_eq!(store.reminders(&goal_id).len(), 1);
}

// ============== Sub-goal operations ==============

#[test]
fn test_add_sub_goal_groups_by_parent() {
    let (store, _storage, _events) = make_store();
    store.add_sub_goal(make_sub_goal("g1", "a", 0));
    store.add_sub_goal(make_sub_goal("g1", "b", 1));
    store.add_sub_goal(make_sub_goal("g2", "c", 0));

    assert_eq!(store.sub_goals("g1").len(), 2);
    assert_eq!(store.sub_goals("g2").len(), 1);
    assert!(store.sub_goals("g3").is_empty());
}

#[test]
fn test_set_sub_goals_replaces_grouping() {
    let (store, _storage, _events) = make_store();
    store.add_sub_goal(make_sub_goal("g1", "old", 0));

    store.set_sub_goals(
        "g1",
        vec![make_sub_goal("g1", "new-a", 0), make_sub_goal("g1", "new-b", 1)],
    );

    let ids: Vec<String> = store.sub_goals("g1").into_iter().map(|sg| sg.id).collect();
    assert_eq!(ids, vec!["new-a", "new-b"]);
}

#[test]
fn test_update_sub_goal_matches_across_all_goals() {
    let (store, _storage, _events) = make_store();
    store.add_sub_goal(make_sub_goal("g1", "a", 0));
    store.add_sub_goal(make_sub_goal("g2", "b", 0));
    let untouched_before = store.sub_goals("g2");

    store.update_sub_goal(
        "a",
        SubGoalUpdate {
            is_completed: Some(true),
            ..Default::default()
        },
    );

    let updated = &store.sub_goals("g1")[0];
    assert!(updated.is_completed);
    // The other goal's grouping was iterated but not mutated.
    assert_eq!(store.sub_goals("g2"), untouched_before);
}

#[test]
fn test_delete_sub_goal_is_goal_scoped() {
    let (store, _storage, _events) = make_store();
    store.add_sub_goal(make_sub_goal("g1", "a", 0));
    store.add_sub_goal(make_sub_goal("g2", "b", 0));

    store.delete_sub_goal("g1", "a");
    assert!(store.sub_goals("g1").is_empty());
    assert_eq!(store.sub_goals("g2").len(), 1);

    // Unknown goal id is a silent no-op.
    store.delete_sub_goal("g3", "b");
    assert_eq!(store.sub_goals("g2").len(), 1);
}

#[test]
fn test_reorder_sub_goals_scenario() {
    let (store, _storage, _events) = make_store();
    store.add_sub_goal(make_sub_goal("g1", "a", 0));
    store.add_sub_goal(make_sub_goal("g1", "b", 1));
    store.add_sub_goal(make_sub_goal("g1", "c", 2));

    store.reorder_sub_goals(
        "g1",
        &["c".to_string(), "a".to_string(), "b".to_string()],
    );

    let reordered = store.sub_goals("g1");
    let ids: Vec<&str> = reordered.iter().map(|sg| sg.id.as_str()).collect();
    let orders: Vec<i32> = reordered.iter().map(|sg| sg.order).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
    assert_eq!(orders, vec![0, 1, 2]);
}

#[test]
fn test_reorder_sub_goals_drops_ids_not_listed() {
    let (store, _storage, _events) = make_store();
    store.add_sub_goal(make_sub_goal("g1", "a", 0));
    store.add_sub_goal(make_sub_goal("g1", "b", 1));
    store.add_sub_goal(make_sub_goal("g1", "c", 2));

    store.reorder_sub_goals("g1", &["b".to_string()]);

    let remaining = store.sub_goals("g1");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "b");
    assert_eq!(remaining[0].order, 0);
}

#[test]
fn test_reorder_sub_goals_ignores_unknown_listed_ids() {
    let (store, _storage, _events) = make_store();
    store.add_sub_goal(make_sub_goal("g1", "a", 0));

    store.reorder_sub_goals("g1", &["ghost".to_string(), "a".to_string()]);

    let remaining = store.sub_goals("g1");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "a");
    assert_eq!(remaining[0].order, 0);
}

#[test]
fn test_reorder_sub_goals_unknown_goal_is_noop() {
    let (store, _storage, _events) = make_store();
    store.reorder_sub_goals("missing", &["a".to_string()]);
    assert!(store.sub_goals("missing").is_empty());
}

proptest! {
    /// For any permutation of the stored id set, the result's order fields
    /// are exactly 0..N-1 matching each id's position in the permutation.
    #[test]
    fn prop_reorder_assigns_dense_order(perm in Just(vec!["a", "b", "c", "d", "e"]).prop_shuffle()) {
        let store = AppStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(NoOpStoreEventSink),
        );
        for (i, id) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            store.add_sub_goal(make_sub_goal("g1", id, i as i32));
        }

        let ordered_ids: Vec<String> = perm.iter().map(|s| s.to_string()).collect();
        store.reorder_sub_goals("g1", &ordered_ids);

        let result = store.sub_goals("g1");
        prop_assert_eq!(result.len(), ordered_ids.len());
        for (index, sub_goal) in result.iter().enumerate() {
            prop_assert_eq!(&sub_goal.id, &ordered_ids[index]);
            prop_assert_eq!(sub_goal.order, index as i32);
        }
    }

    /// Ids left out of the ordered list are dropped, and the survivors are
    /// still densely ordered.
    #[test]
    fn prop_reorder_filters_to_listed_ids(subset in proptest::sample::subsequence(vec!["a", "b", "c", "d", "e"], 0..=5)) {
        let store = AppStore::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(NoOpStoreEventSink),
        );
        for (i, id) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            store.add_sub_goal(make_sub_goal("g1", id, i as i32));
        }

        let ordered_ids: Vec<String> = subset.iter().map(|s| s.to_string()).collect();
        store.reorder_sub_goals("g1", &ordered_ids);

        let result = store.sub_goals("g1");
        prop_assert_eq!(result.len(), ordered_ids.len());
        for (index, sub_goal) in result.iter().enumerate() {
            prop_assert_eq!(&sub_goal.id, &ordered_ids[index]);
            prop_assert_eq!(sub_goal.order, index as i32);
        }
    }
}

// ============== Persistence ==============

#[test]
fn test_every_mutation_persists_full_snapshot() {
    let (store, storage, _events) = make_store();
    let goal = make_goal("Save $5,000");
    store.add_goal(goal.clone());
    assert_eq!(persisted_state(&storage), store.state());

    store.add_sub_goal(make_sub_goal(&goal.id, "a", 0));
    assert_eq!(persisted_state(&storage), store.state());

    store.set_error(Some("storage unavailable".to_string()));
    assert_eq!(persisted_state(&storage), store.state());
}

#[test]
fn test_snapshot_round_trip_is_deep_equal() {
    let (store, storage, _events) = make_store();
    let goal = make_goal("Save $5,000");
    let goal_id = goal.id.clone();
    store.add_goal(goal);
    store.add_sub_goal(make_sub_goal(&goal_id, "a", 0));
    store.add_sub_goal(make_sub_goal(&goal_id, "b", 1));
    store.add_reminder(make_reminder(&goal_id, "notif-1"));
    store.set_has_completed_onboarding(true);

    let reloaded = AppStore::load(storage, Arc::new(NoOpStoreEventSink));
    assert_eq!(reloaded.state(), store.state());
}

#[test]
fn test_load_with_absent_snapshot_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    let store = AppStore::load(storage, Arc::new(NoOpStoreEventSink));
    assert_eq!(store.state(), AppState::default());
}

#[test]
fn test_load_with_corrupt_snapshot_defaults_silently() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(STORE_STORAGE_KEY, "{not json").unwrap();

    let store = AppStore::load(storage, Arc::new(NoOpStoreEventSink));
    assert_eq!(store.state(), AppState::default());
}

#[test]
fn test_transient_flags_survive_restart() {
    let (store, storage, _events) = make_store();
    store.set_is_loading(true);
    store.set_error(Some("scheduler permission denied".to_string()));

    let reloaded = AppStore::load(storage, Arc::new(NoOpStoreEventSink));
    assert!(reloaded.is_loading());
    assert_eq!(
        reloaded.error().as_deref(),
        Some("scheduler permission denied")
    );
}

// ============== Events ==============

#[test]
fn test_mutations_emit_events() {
    let (store, _storage, events) = make_store();
    let goal = make_goal("Save $5,000");
    let goal_id = goal.id.clone();

    store.add_goal(goal);
    store.update_goal(&goal_id, GoalUpdate::default());
    store.add_sub_goal(make_sub_goal(&goal_id, "a", 0));

    let emitted = events.events();
    assert_eq!(emitted.len(), 3);
    assert!(matches!(&emitted[0], StoreEvent::GoalsChanged { goal_ids } if goal_ids == &vec![goal_id.clone()]));
    assert!(matches!(&emitted[1], StoreEvent::GoalsChanged { .. }));
    assert!(matches!(&emitted[2], StoreEvent::SubGoalsChanged { goal_id: g } if g == &goal_id));
}

#[test]
fn test_update_sub_goal_without_match_emits_nothing() {
    let (store, _storage, events) = make_store();
    store.update_sub_goal("missing", SubGoalUpdate::default());
    assert!(events.is_empty());
}

// ============== Reminders / templates through the store ==============

#[test]
fn test_delete_reminder_by_id() {
    let (store, _storage, _events) = make_store();
    store.add_reminder(make_reminder("g1", "notif-1"));
    store.add_reminder(make_reminder("g1", "notif-2"));

    store.delete_reminder("notif-1");
    let remaining = store.reminders("g1");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "notif-2");
    assert_eq!(store.all_reminders().len(), 1);
}

#[test]
fn test_fresh_store_starts_empty() {
    let (store, _storage, _events) = make_store();
    let state = store.state();
    assert_eq!(state.user, None);
    assert!(!state.has_completed_onboarding);
    assert!(state.goals.is_empty());
    assert!(state.sub_goals.is_empty());
    assert!(state.reminders.is_empty());
    assert!(state.templates.is_empty());
    assert!(state.progress_logs.is_empty());
    assert!(!state.is_loading);
    assert_eq!(state.error, None);
}

#[test]
fn test_concurrent_readers_see_consistent_snapshots() {
    let (store, _storage, _events) = make_store();
    for i in 0..10 {
        store.add_goal(make_goal(&format!("goal {i}")));
    }

    // Snapshot reads are clones; later mutations don't reach into them.
    let snapshot = store.goals();
    store.delete_goal(&snapshot[0].id);
    assert_eq!(snapshot.len(), 10);
    assert_eq!(store.goals().len(), 9);
}

#[test]
fn test_sub_goal_ids_generated_by_services_stay_unique() {
    // Sanity check on the global-uniqueness assumption update_sub_goal
    // relies on: v4 ids do not collide across goals in practice.
    let a = Uuid::new_v4().to_string();
    let b = Uuid::new_v4().to_string();
    assert_ne!(a, b);
}
