//! Password-recovery flow.
//!
//! The flow advances through four states, one per screen:
//! `Start` (username) → `QuestionsFetched` (answer the account's security
//! questions) → `AnswersVerified` (choose a new password, holding the
//! short-lived reset token) → `PasswordReset` (back to login).
//!
//! All local gates live here as pure functions so the page component only
//! wires inputs to transitions. Expiry of the reset token is the backend's
//! business and surfaces as a rejected reset.

#[cfg(test)]
#[path = "recovery_test.rs"]
mod recovery_test;

use crate::net::auth::AuthError;

/// Current position in the recovery flow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecoveryFlow {
    #[default]
    Start,
    QuestionsFetched {
        username: String,
        questions: Vec<String>,
    },
    AnswersVerified {
        username: String,
        reset_token: String,
    },
    PasswordReset,
}

impl RecoveryFlow {
    /// Advance from `Start` once the backend returned the account's questions.
    ///
    /// An account with zero configured questions cannot be recovered this way;
    /// the flow stays put and the caller surfaces the error.
    pub fn questions_fetched(username: &str, questions: Vec<String>) -> Result<Self, AuthError> {
        if questions.is_empty() {
            return Err(AuthError::Validation(
                "Esta cuenta no tiene preguntas de seguridad configuradas.".to_owned(),
            ));
        }
        Ok(Self::QuestionsFetched {
            username: username.to_owned(),
            questions,
        })
    }

    /// Local gate before the verify call: one non-empty answer per question.
    ///
    /// Returns the trimmed answers in question order, ready to send.
    pub fn check_answers(&self, answers: &[String]) -> Result<Vec<String>, AuthError> {
        let Self::QuestionsFetched { questions, .. } = self else {
            return Err(AuthError::Validation(
                "Primero ingresa tu nombre de usuario.".to_owned(),
            ));
        };

        if answers.len() != questions.len() {
            return Err(AuthError::Validation(
                "Por favor responde todas las preguntas.".to_owned(),
            ));
        }

        let trimmed: Vec<String> = answers.iter().map(|a| a.trim().to_owned()).collect();
        if trimmed.iter().any(String::is_empty) {
            return Err(AuthError::Validation(
                "Por favor responde todas las preguntas.".to_owned(),
            ));
        }
        Ok(trimmed)
    }

    /// Advance once the backend accepted the answers and issued a reset token.
    pub fn answers_verified(&self, reset_token: &str) -> Self {
        let username = match self {
            Self::QuestionsFetched { username, .. } | Self::AnswersVerified { username, .. } => {
                username.clone()
            }
            _ => String::new(),
        };
        Self::AnswersVerified {
            username,
            reset_token: reset_token.to_owned(),
        }
    }

    /// Terminal state after a successful reset.
    pub fn reset_done(&self) -> Self {
        Self::PasswordReset
    }
}

/// Password policy plus confirmation check, applied before any network call.
///
/// Each violation has its own message so the user knows what to fix.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), AuthError> {
    if password.chars().count() < 8 {
        return Err(AuthError::Validation(
            "La contraseña debe tener al menos 8 caracteres.".to_owned(),
        ));
    }
    if password.chars().any(char::is_whitespace) {
        return Err(AuthError::Validation(
            "La contraseña no puede contener espacios.".to_owned(),
        ));
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(AuthError::Validation(
            "La contraseña debe incluir al menos una letra mayúscula.".to_owned(),
        ));
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(AuthError::Validation(
            "La contraseña debe incluir al menos una letra minúscula.".to_owned(),
        ));
    }
    if !password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        return Err(AuthError::Validation(
            "La contraseña debe incluir al menos un carácter especial.".to_owned(),
        ));
    }
    if password != confirmation {
        return Err(AuthError::Validation(
            "Las contraseñas no coinciden.".to_owned(),
        ));
    }
    Ok(())
}
