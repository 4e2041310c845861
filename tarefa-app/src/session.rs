//! The session and screen flow.
//!
//! [`SessionFlow`] is the single object the shell drives. It holds the
//! open store, the configured email policy, the active screen, and the
//! id of the authenticated user (if any); there is no process-wide
//! session state. Input that fails validation is rejected here and never
//! reaches the store; every mutation on the task list returns the
//! refreshed list so the shell can redraw immediately.
//!
//! # State machine
//!
//! ```text
//! Login ──open_register──▶ Register ──back_to_login/register──▶ Login
//! Login ──login(ok)──▶ Tasks ──logout──▶ Login
//! Tasks ──add/update/delete──▶ Tasks (store side effect + refresh)
//! ```

use chrono::NaiveDate;
use tracing::{info, warn};

use tarefa_core::models::task::{CreateTask, Task, DEFAULT_CATEGORY, DEFAULT_PRIORITY};
use tarefa_core::{RegisterOutcome, Store};

use crate::error::FlowError;
use crate::validate::{title_is_valid, EmailPolicy};

/// Which screen the shell should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Tasks,
}

/// User input for a new task.
///
/// The quick-add path fills in the defaults the dialog does not ask for.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: Option<NaiveDate>,
    pub category: String,
}

impl TaskDraft {
    /// Quick-add: title and description from the dialog, defaults for
    /// the rest.
    pub fn quick(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: DEFAULT_PRIORITY.to_string(),
            due_date: None,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// The flow controller: session identity plus screen state over the store.
#[derive(Debug)]
pub struct SessionFlow {
    store: Store,
    policy: EmailPolicy,
    screen: Screen,
    user: Option<i64>,
}

impl SessionFlow {
    pub fn new(store: Store, policy: EmailPolicy) -> Self {
        Self {
            store,
            policy,
            screen: Screen::Login,
            user: None,
        }
    }

    /// The screen the shell should currently render.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Id of the authenticated user, if any.
    pub fn current_user(&self) -> Option<i64> {
        self.user
    }

    /// The underlying store (used by the shell at shutdown and by tests).
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Login screen → registration screen.
    pub fn open_register(&mut self) {
        self.screen = Screen::Register;
    }

    /// Registration screen → login screen, discarding the form.
    pub fn back_to_login(&mut self) {
        self.screen = Screen::Login;
    }

    /// Registers a new account.
    ///
    /// Email shape, password presence, and the confirmation must all
    /// check out before the store is involved. On success the flow
    /// returns to the login screen for the fresh account to sign in.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<(), FlowError> {
        if !self.policy.is_allowed(email) {
            return Err(FlowError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(FlowError::EmptyPassword);
        }
        if password != confirm {
            return Err(FlowError::PasswordMismatch);
        }

        match self.store.register_user(email, password).await? {
            RegisterOutcome::Registered(_) => {
                self.screen = Screen::Login;
                Ok(())
            }
            RegisterOutcome::EmailTaken => Err(FlowError::EmailTaken),
        }
    }

    /// Authenticates and, on success, moves to the task screen.
    ///
    /// Returns the user's task list for the first render. The error is
    /// the same whether the email is unknown or the password is wrong.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Vec<Task>, FlowError> {
        match self.store.authenticate_user(email, password).await? {
            Some(user) => {
                info!(user_id = user.id, "User signed in");
                self.user = Some(user.id);
                self.screen = Screen::Tasks;
                self.tasks().await
            }
            None => {
                warn!("Sign-in rejected");
                Err(FlowError::InvalidCredentials)
            }
        }
    }

    /// Drops the session and returns to the login screen.
    ///
    /// No store interaction.
    pub fn logout(&mut self) {
        self.user = None;
        self.screen = Screen::Login;
    }

    /// The current user's tasks, in insertion order.
    pub async fn tasks(&self) -> Result<Vec<Task>, FlowError> {
        let user = self.user.ok_or(FlowError::NotSignedIn)?;
        Ok(self.store.tasks_for_user(user).await?)
    }

    /// Adds a task for the current user and returns the refreshed list.
    pub async fn add_task(&mut self, draft: TaskDraft) -> Result<Vec<Task>, FlowError> {
        let user = self.user.ok_or(FlowError::NotSignedIn)?;
        if !title_is_valid(&draft.title) {
            return Err(FlowError::EmptyTitle);
        }

        self.store
            .add_task(CreateTask {
                title: draft.title,
                description: Some(draft.description),
                priority: Some(draft.priority),
                due_date: draft.due_date,
                category: Some(draft.category),
                user_id: user,
            })
            .await?;

        self.tasks().await
    }

    /// Rewrites a task's title and description, then returns the
    /// refreshed list.
    ///
    /// An empty title is rejected before the store is touched; a missing
    /// id is a quiet no-op.
    pub async fn update_task(
        &mut self,
        id: i64,
        title: &str,
        description: &str,
    ) -> Result<Vec<Task>, FlowError> {
        if self.user.is_none() {
            return Err(FlowError::NotSignedIn);
        }
        if !title_is_valid(title) {
            return Err(FlowError::EmptyTitle);
        }

        self.store.update_task(id, title, Some(description)).await?;
        self.tasks().await
    }

    /// Deletes a task and returns the refreshed list.
    ///
    /// A missing id is a quiet no-op.
    pub async fn delete_task(&mut self, id: i64) -> Result<Vec<Task>, FlowError> {
        if self.user.is_none() {
            return Err(FlowError::NotSignedIn);
        }

        self.store.delete_task(id).await?;
        self.tasks().await
    }
}
