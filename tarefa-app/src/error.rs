//! Flow errors and their presentation as modal dialogs.
//!
//! The shell renders every failure as a modal with a title and a body;
//! [`FlowError::dialog`] is the single place where flow outcomes turn
//! into user-facing text. Validation errors are produced before any
//! store call and change no state; the store variant covers failures the
//! user cannot fix.

use serde::{Deserialize, Serialize};
use tarefa_core::StoreError;

/// Errors surfaced by the session flow.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Registration email failed the shape/allow-list check.
    #[error("invalid email address")]
    InvalidEmail,

    /// Registration password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Registration password is empty.
    #[error("empty password")]
    EmptyPassword,

    /// Task title is empty or whitespace-only.
    #[error("empty task title")]
    EmptyTitle,

    /// Another account already uses this email.
    #[error("email already registered")]
    EmailTaken,

    /// Unknown email or wrong password; deliberately not distinguished.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A task operation was attempted with no authenticated user.
    #[error("no authenticated user")]
    NotSignedIn,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Payload for a modal dialog: a title and a body the shell renders as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub title: String,
    pub body: String,
}

impl Dialog {
    fn error(body: &str) -> Self {
        Self {
            title: "Erro".to_string(),
            body: body.to_string(),
        }
    }
}

impl FlowError {
    /// The dialog the shell shows for this failure.
    pub fn dialog(&self) -> Dialog {
        match self {
            FlowError::InvalidEmail => {
                Dialog::error("Insira um e-mail válido, como @gmail.com ou @hotmail.com.")
            }
            FlowError::PasswordMismatch => Dialog::error("As senhas não coincidem."),
            FlowError::EmptyPassword => Dialog::error("A senha não pode estar vazia."),
            FlowError::EmptyTitle => Dialog::error("O título da tarefa não pode estar vazio."),
            FlowError::EmailTaken => Dialog::error("Este email já está registrado."),
            FlowError::InvalidCredentials => Dialog::error("Login inválido"),
            FlowError::NotSignedIn => Dialog::error("Nenhum usuário autenticado."),
            FlowError::Store(_) => Dialog::error("Falha ao acessar o banco de dados."),
        }
    }
}
