//! The `Store` facade.
//!
//! Owns the single SQLite connection and exposes the operations the flow
//! controller calls: schema setup, registration, authentication, and the
//! task CRUD. Constraint violations on registration are converted into a
//! [`RegisterOutcome`] instead of leaking a raw database error; every
//! other storage failure is surfaced as [`StoreError`] and treated as
//! fatal by the caller.
//!
//! # Example
//!
//! ```no_run
//! use tarefa_core::{RegisterOutcome, Store, StoreConfig};
//!
//! # async fn example() -> Result<(), tarefa_core::StoreError> {
//! let store = Store::open(StoreConfig::file("task_manager.db")).await?;
//!
//! match store.register_user("user@gmail.com", "pw1").await? {
//!     RegisterOutcome::Registered(user) => println!("registered #{}", user.id),
//!     RegisterOutcome::EmailTaken => println!("email already registered"),
//! }
//! # Ok(())
//! # }
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::auth::password::{self, PasswordError};
use crate::db::{migrations, pool};
use crate::models::task::{CreateTask, Task};
use crate::models::user::{CreateUser, User};

pub use crate::db::pool::StoreConfig;

/// Errors produced by the store.
///
/// Anything beyond [`RegisterOutcome::EmailTaken`] has no in-application
/// recovery path; startup aborts on open/migration failures and the flow
/// controller surfaces the rest as a generic storage error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Result of a registration attempt.
#[derive(Debug)]
pub enum RegisterOutcome {
    /// The account was created.
    Registered(User),

    /// Another account already uses this email.
    EmailTaken,
}

/// The persistence component: a handle on the open database plus the
/// operations over users and tasks.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens the store and brings the schema up to date.
    ///
    /// Must succeed before any other operation; a failure here aborts
    /// startup.
    pub async fn open(config: StoreConfig) -> Result<Self, StoreError> {
        let pool = pool::create_pool(&config).await?;
        migrations::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// The underlying connection pool, mainly for tests and shutdown.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Releases the store's connection. Called on application exit.
    pub async fn close(self) {
        pool::close_pool(self.pool).await;
    }

    /// Registers a new account.
    ///
    /// The password is hashed before it touches the database. A duplicate
    /// email is reported as [`RegisterOutcome::EmailTaken`], not as an
    /// error.
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<RegisterOutcome, StoreError> {
        let password_hash = password::hash_password(password)?;

        let created = User::create(
            &self.pool,
            CreateUser {
                email: email.to_string(),
                password_hash,
            },
        )
        .await;

        match created {
            Ok(user) => {
                info!(user_id = user.id, "Registered new user");
                Ok(RegisterOutcome::Registered(user))
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                debug!("Registration rejected: email already taken");
                Ok(RegisterOutcome::EmailTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Looks up an account by credentials.
    ///
    /// Returns the full record when the email exists and the password
    /// verifies, `None` otherwise. Unknown email and wrong password are
    /// deliberately indistinguishable to the caller.
    pub async fn authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let user = match User::find_by_email(&self.pool, email).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if password::verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Inserts a new task and returns the stored row.
    pub async fn add_task(&self, data: CreateTask) -> Result<Task, StoreError> {
        let task = Task::create(&self.pool, data).await?;
        debug!(task_id = task.id, user_id = task.user_id, "Added task");
        Ok(task)
    }

    /// All tasks owned by `user_id`, in insertion order.
    pub async fn tasks_for_user(&self, user_id: i64) -> Result<Vec<Task>, StoreError> {
        Ok(Task::list_for_user(&self.pool, user_id).await?)
    }

    /// Overwrites title and description of an existing task.
    ///
    /// Returns `false` when no task has that id; a miss is an idempotent
    /// no-op, not an error.
    pub async fn update_task(
        &self,
        id: i64,
        title: &str,
        description: Option<&str>,
    ) -> Result<bool, StoreError> {
        Ok(Task::update(&self.pool, id, title, description).await?)
    }

    /// Removes a task. Returns `false` when no task has that id.
    pub async fn delete_task(&self, id: i64) -> Result<bool, StoreError> {
        Ok(Task::delete(&self.pool, id).await?)
    }
}
