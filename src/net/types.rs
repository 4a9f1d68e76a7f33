//! Wire types for the authentication endpoints.
//!
//! The backend is a FastAPI service mounted under `/api/v1`; errors come back
//! as `{"detail": "..."}` with a human-readable message.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// The two recovery questions every account is registered with. They are
/// fixed, well-known strings supplied by the UI, not user-chosen free text.
pub const SECURITY_QUESTION_1: &str = "¿Cuál es el nombre de tu primera mascota?";
pub const SECURITY_QUESTION_2: &str = "¿En qué ciudad naciste?";

#[derive(Clone, Debug, serde::Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Role object optionally attached to the login response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoleInfo {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
    pub user_id: i64,
    #[serde(default)]
    pub role: Option<RoleInfo>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub security_question1: String,
    pub security_answer1: String,
    pub security_question2: String,
    pub security_answer2: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct RecoveryStartRequest {
    pub username: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct SecurityQuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct VerifyAnswersRequest {
    pub username: String,
    /// Same order as the questions returned by recovery start.
    pub answers: Vec<String>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct VerifyAnswersResponse {
    pub reset_token: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub username: String,
    pub new_password: String,
}

/// FastAPI error payload.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
