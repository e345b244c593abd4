use chrono::{NaiveDate, Utc};
use std::collections::HashSet;
use taskdeck_core::seed::{demo_categories, demo_task_id, demo_tasks};
use taskdeck_core::{
    DashboardConfig, Priority, Session, Task, TaskFilter, TaskStore, User,
};

fn session() -> Session {
    Session {
        user: User {
            id: "user-1".to_string(),
            name: Some("Ada Lovelace".to_string()),
            email: "ada@example.com".to_string(),
            image: None,
        },
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
}

fn empty_store() -> TaskStore {
    TaskStore::new(session(), DashboardConfig::default(), demo_categories())
}

fn seeded_store() -> TaskStore {
    TaskStore::with_tasks(
        session(),
        DashboardConfig::default(),
        demo_categories(),
        demo_tasks(),
    )
}

fn titles(view: Vec<&Task>) -> Vec<String> {
    view.into_iter().map(|task| task.title.clone()).collect()
}

#[test]
fn add_task_appends_open_task_with_fresh_id() {
    let mut store = seeded_store();
    let before: HashSet<_> = store.tasks().iter().map(|task| task.id).collect();

    store.draft_mut().set_title("Call the bank");
    let id = store.add_task_on(day()).expect("non-blank title is accepted");

    assert_eq!(store.tasks().len(), before.len() + 1);
    assert!(!before.contains(&id));
    let added = store.tasks().last().unwrap();
    assert_eq!(added.id, id);
    assert!(!added.completed);
    assert_eq!(added.created_at, day());
    assert_eq!(added.category, "Personal");
    assert_eq!(added.priority, Priority::Medium);
}

#[test]
fn repeated_adds_never_reuse_ids() {
    let mut store = empty_store();
    let mut ids = HashSet::new();
    for n in 0..50 {
        store.draft_mut().set_title(format!("task {n}"));
        ids.insert(store.add_task_on(day()).unwrap());
    }
    assert_eq!(ids.len(), 50);
    assert_eq!(store.tasks().len(), 50);
}

#[test]
fn blank_titles_leave_collection_unchanged() {
    let mut store = seeded_store();
    let before = store.tasks().to_vec();

    for title in ["", "   ", "\t\n"] {
        store.draft_mut().set_title(title);
        assert!(store.add_task_on(day()).is_none());
    }
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut store = seeded_store();
    let id = demo_task_id(0).unwrap();
    let original = store.task(id).unwrap().completed;

    assert!(store.toggle_completed(id));
    assert_eq!(store.task(id).unwrap().completed, !original);
    assert!(store.toggle_completed(id));
    assert_eq!(store.task(id).unwrap().completed, original);
}

#[test]
fn unknown_ids_are_silent_no_ops() {
    let mut store = seeded_store();
    let before = store.tasks().to_vec();
    let missing = uuid::Uuid::new_v4();

    assert!(!store.toggle_completed(missing));
    assert!(!store.delete_task(missing));
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn delete_removes_exactly_the_matching_task() {
    let mut store = seeded_store();
    let id = demo_task_id(1).unwrap();

    assert!(store.delete_task(id));
    assert_eq!(store.tasks().len(), 3);
    assert!(store.task(id).is_none());
    assert!(store.visible_tasks().iter().all(|task| task.id != id));
    assert_eq!(
        titles(store.visible_tasks()),
        vec!["Complete project proposal", "Exercise routine", "Read chapter 5"]
    );
}

#[test]
fn view_filters_by_status_and_priority() {
    let mut store = seeded_store();
    let all_ids: Vec<_> = store.visible_tasks().iter().map(|task| task.id).collect();
    let expected_ids: Vec<_> = (0..4).map(|index| demo_task_id(index).unwrap()).collect();
    assert_eq!(all_ids, expected_ids);
    assert_eq!(
        titles(store.visible_tasks()),
        vec![
            "Complete project proposal",
            "Buy groceries",
            "Exercise routine",
            "Read chapter 5"
        ]
    );

    store.set_filter(TaskFilter::Completed);
    assert_eq!(
        titles(store.visible_tasks()),
        vec!["Buy groceries", "Read chapter 5"]
    );

    store.set_filter(TaskFilter::Pending);
    assert_eq!(
        titles(store.visible_tasks()),
        vec!["Complete project proposal", "Exercise routine"]
    );

    store.set_filter(TaskFilter::Priority(Priority::Medium));
    assert_eq!(
        titles(store.visible_tasks()),
        vec!["Buy groceries", "Exercise routine"]
    );
}

#[test]
fn search_matches_description_case_insensitively() {
    let mut store = seeded_store();
    store.set_search("ATOMIC");
    assert_eq!(titles(store.visible_tasks()), vec!["Read chapter 5"]);

    store.set_filter(TaskFilter::Pending);
    assert!(store.visible_tasks().is_empty());
}

#[test]
fn seed_with_duplicate_ids_keeps_first() {
    let mut tasks = demo_tasks();
    let mut duplicate = tasks[0].clone();
    duplicate.title = "shadow".to_string();
    tasks.push(duplicate);

    let store = TaskStore::with_tasks(
        session(),
        DashboardConfig::default(),
        demo_categories(),
        tasks,
    );
    assert_eq!(store.tasks().len(), 4);
    assert_eq!(store.tasks()[0].title, "Complete project proposal");
}

#[test]
fn cancel_discards_draft() {
    let mut store = empty_store();
    store.show_add_form();
    store.draft_mut().set_title("half typed").set_priority(Priority::High);

    store.cancel_add_form();
    assert!(!store.is_add_form_visible());
    assert_eq!(store.draft().title(), "");
    assert_eq!(store.draft().priority(), Priority::Medium);
    assert!(store.tasks().is_empty());
}

#[test]
fn config_defaults_drive_the_draft() {
    let config = DashboardConfig {
        default_category: "Work".to_string(),
        default_priority: Priority::High,
        streak_days: 3,
    };
    let mut store = TaskStore::new(session(), config, demo_categories());
    store.draft_mut().set_title("Ship release");
    store.add_task_on(day()).unwrap();

    let task = &store.tasks()[0];
    assert_eq!(task.category, "Work");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(store.stats().streak, 3);
}

#[test]
fn add_task_stamps_utc_calendar_date() {
    let mut store = empty_store();
    store.draft_mut().set_title("Renew passport");

    let before = Utc::now().date_naive();
    let id = store.add_task().expect("non-blank title is accepted");
    let after = Utc::now().date_naive();

    let created_at = store.task(id).unwrap().created_at;
    assert!(
        before <= created_at && created_at <= after,
        "created_at {created_at} outside UTC window {before}..={after}"
    );
}

#[test]
fn empty_hint_depends_on_filter() {
    let mut store = empty_store();
    assert!(store.visible_tasks().is_empty());
    assert_eq!(store.empty_hint(), "Add your first task!");

    store.set_filter(TaskFilter::Completed);
    assert_eq!(store.empty_hint(), "Try adjusting your filters.");

    store.set_filter(TaskFilter::Priority(Priority::Low));
    assert_eq!(store.empty_hint(), "Try adjusting your filters.");
}
