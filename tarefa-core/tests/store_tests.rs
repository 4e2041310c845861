//! Integration tests for the store, run against an in-memory database.

use tarefa_core::models::task::{CreateTask, DEFAULT_CATEGORY, DEFAULT_PRIORITY};
use tarefa_core::{RegisterOutcome, Store, StoreConfig};

async fn open_store() -> Store {
    Store::open(StoreConfig::in_memory())
        .await
        .expect("failed to open in-memory store")
}

async fn register(store: &Store, email: &str, password: &str) -> i64 {
    match store.register_user(email, password).await.unwrap() {
        RegisterOutcome::Registered(user) => user.id,
        RegisterOutcome::EmailTaken => panic!("email unexpectedly taken: {email}"),
    }
}

fn quick_task(title: &str, description: &str, user_id: i64) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        description: Some(description.to_string()),
        priority: Some(DEFAULT_PRIORITY.to_string()),
        due_date: None,
        category: Some(DEFAULT_CATEGORY.to_string()),
        user_id,
    }
}

async fn user_count(store: &Store) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(store.pool())
        .await
        .unwrap()
}

async fn task_count(store: &Store) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(store.pool())
        .await
        .unwrap()
}

#[tokio::test]
async fn register_then_authenticate_returns_same_id() {
    let store = open_store().await;

    let id = register(&store, "user@gmail.com", "pw1").await;
    let user = store
        .authenticate_user("user@gmail.com", "pw1")
        .await
        .unwrap()
        .expect("valid credentials rejected");

    assert_eq!(user.id, id);
    assert_eq!(user.email, "user@gmail.com");
}

#[tokio::test]
async fn passwords_are_stored_hashed() {
    let store = open_store().await;
    register(&store, "user@gmail.com", "pw1").await;

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE email = ?")
        .bind("user@gmail.com")
        .fetch_one(store.pool())
        .await
        .unwrap();

    assert_ne!(stored, "pw1");
    assert!(stored.starts_with("$argon2id$"));
}

#[tokio::test]
async fn duplicate_email_is_rejected_and_leaves_one_row() {
    let store = open_store().await;

    register(&store, "user@gmail.com", "pw1").await;
    let second = store.register_user("user@gmail.com", "other").await.unwrap();

    assert!(matches!(second, RegisterOutcome::EmailTaken));
    assert_eq!(user_count(&store).await, 1);
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let store = open_store().await;
    register(&store, "user@gmail.com", "pw1").await;

    let wrong_password = store
        .authenticate_user("user@gmail.com", "wrong")
        .await
        .unwrap();
    let unknown_email = store
        .authenticate_user("nobody@gmail.com", "pw1")
        .await
        .unwrap();

    assert!(wrong_password.is_none());
    assert!(unknown_email.is_none());
}

#[tokio::test]
async fn task_listing_is_scoped_to_the_owner() {
    let store = open_store().await;

    let alice = register(&store, "alice@gmail.com", "pw1").await;
    let bob = register(&store, "bob@gmail.com", "pw2").await;

    store
        .add_task(quick_task("Buy milk", "2 liters", alice))
        .await
        .unwrap();

    let alices = store.tasks_for_user(alice).await.unwrap();
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].title, "Buy milk");
    assert_eq!(alices[0].description.as_deref(), Some("2 liters"));

    assert!(store.tasks_for_user(bob).await.unwrap().is_empty());
}

#[tokio::test]
async fn tasks_come_back_in_insertion_order() {
    let store = open_store().await;
    let user = register(&store, "user@gmail.com", "pw1").await;

    for title in ["first", "second", "third"] {
        store.add_task(quick_task(title, "", user)).await.unwrap();
    }

    let titles: Vec<String> = store
        .tasks_for_user(user)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();

    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn delete_removes_only_the_targeted_task() {
    let store = open_store().await;
    let user = register(&store, "user@gmail.com", "pw1").await;

    let keep = store.add_task(quick_task("keep", "", user)).await.unwrap();
    let gone = store.add_task(quick_task("gone", "", user)).await.unwrap();

    assert!(store.delete_task(gone.id).await.unwrap());

    let remaining = store.tasks_for_user(user).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
}

#[tokio::test]
async fn deleting_a_missing_id_is_a_quiet_no_op() {
    let store = open_store().await;
    let user = register(&store, "user@gmail.com", "pw1").await;
    store.add_task(quick_task("keep", "", user)).await.unwrap();

    assert!(!store.delete_task(9999).await.unwrap());
    assert_eq!(task_count(&store).await, 1);
}

#[tokio::test]
async fn update_overwrites_title_and_description() {
    let store = open_store().await;
    let user = register(&store, "user@gmail.com", "pw1").await;
    let task = store.add_task(quick_task("draft", "old", user)).await.unwrap();

    assert!(store
        .update_task(task.id, "final", Some("new"))
        .await
        .unwrap());

    let tasks = store.tasks_for_user(user).await.unwrap();
    assert_eq!(tasks[0].title, "final");
    assert_eq!(tasks[0].description.as_deref(), Some("new"));
    // Untouched fields survive the update.
    assert_eq!(tasks[0].priority.as_deref(), Some(DEFAULT_PRIORITY));
    assert_eq!(tasks[0].category.as_deref(), Some(DEFAULT_CATEGORY));
}

#[tokio::test]
async fn updating_a_missing_id_is_a_quiet_no_op() {
    let store = open_store().await;

    assert!(!store.update_task(9999, "title", None).await.unwrap());
}

#[tokio::test]
async fn due_dates_roundtrip_as_iso_dates() {
    let store = open_store().await;
    let user = register(&store, "user@gmail.com", "pw1").await;

    let due = chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let mut draft = quick_task("dated", "", user);
    draft.due_date = Some(due);
    store.add_task(draft).await.unwrap();

    let tasks = store.tasks_for_user(user).await.unwrap();
    assert_eq!(tasks[0].due_date, Some(due));
}
