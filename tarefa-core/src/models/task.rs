//! Task model and database operations.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE tasks (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     title TEXT NOT NULL,
//!     description TEXT,
//!     priority TEXT,
//!     due_date TEXT,
//!     category TEXT,
//!     user_id INTEGER REFERENCES users(id)
//! );
//! ```
//!
//! Priority and category are free-text labels, not closed enums. Listing
//! is always scoped to one owner and returns rows in insertion order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Priority assigned by quick-add when the user picks nothing.
pub const DEFAULT_PRIORITY: &str = "Média";

/// Category assigned by quick-add when the user picks nothing.
pub const DEFAULT_CATEGORY: &str = "Pessoal";

/// A titled, described unit of work owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Row id, generated on insert.
    pub id: i64,

    /// Never empty or whitespace-only; the flow controller enforces this
    /// before any insert or update.
    pub title: String,

    pub description: Option<String>,

    /// Free-text label, e.g. "Média".
    pub priority: Option<String>,

    /// Stored as ISO `YYYY-MM-DD` text.
    pub due_date: Option<NaiveDate>,

    /// Free-text label, e.g. "Pessoal".
    pub category: Option<String>,

    /// Owning user.
    pub user_id: i64,
}

/// Input for creating a new task.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub user_id: i64,
}

impl Task {
    /// The one-line rendering used by the task list screen:
    /// `[priority] title - description`.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} - {}",
            self.priority.as_deref().unwrap_or(""),
            self.title,
            self.description.as_deref().unwrap_or(""),
        )
    }

    /// Inserts a new task and returns the stored row.
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, priority, due_date, category, user_id)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, title, description, priority, due_date, category, user_id
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.priority)
        .bind(data.due_date)
        .bind(data.category)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks owned by `user_id`, in insertion order.
    pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, description, priority, due_date, category, user_id
            FROM tasks
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Overwrites title and description of an existing task.
    ///
    /// Returns `true` if a row was changed, `false` if no task has that
    /// id. A miss is not an error: the operation is an idempotent no-op.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        title: &str,
        description: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a task by id.
    ///
    /// Returns `true` if a row was removed, `false` if no task has that
    /// id. Like [`Task::update`], a miss is an idempotent no-op.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
