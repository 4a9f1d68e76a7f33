//! Authentication client for the backend's `/userses` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. On the server or in
//! tests the network functions fail with a generic network error; nothing here
//! panics on a bad response.
//!
//! ERROR HANDLING
//! ==============
//! Every operation is terminal: no retries, no timeouts. Server rejections
//! surface the backend's `detail` message verbatim when present, otherwise a
//! generic localized fallback. Logout is the one call that always succeeds
//! locally: the stored session is cleared whether or not the server heard us.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use crate::net::types::{ErrorBody, LoginResponse, RegisterRequest};
use crate::state::session::Session;
use crate::storage::session_store::SessionStore;

/// Default mount point of the backend API.
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Generic message for unreachable-server failures.
const NETWORK_FALLBACK: &str = "No se pudo conectar con el servidor.";

/// Failure modes of the auth client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server could not be reached or its response was unreadable.
    #[error("{0}")]
    Network(String),
    /// The server explicitly rejected the request.
    #[error("{0}")]
    Rejected(String),
    /// Local checks blocked the request before any network call.
    #[error("{0}")]
    Validation(String),
}

/// Base URL for API calls.
///
/// The hosting page may override the default with a `data-api-base` attribute
/// on the document element; the crate ships as static WASM, so the page is the
/// configuration carrier.
#[cfg(feature = "hydrate")]
fn api_base() -> String {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Some(base) = el.get_attribute("data-api-base") {
            if !base.is_empty() {
                return base;
            }
        }
    }
    DEFAULT_API_BASE.to_owned()
}

/// Map a login response body into the session we persist.
///
/// The backend may omit the role object; the session then carries a zero role
/// id and an empty role name, which resolves to `Role::Unknown`.
pub fn session_from_login(resp: LoginResponse) -> Session {
    let (role_id, role_name) = resp
        .role
        .map_or((0, String::new()), |role| (role.id, role.name));
    Session {
        token: resp.access_token,
        username: resp.username,
        user_id: resp.user_id,
        role_id,
        role_name,
    }
}

/// Build the rejection error for a non-2xx response body.
pub fn rejection(body: &str, fallback: &str) -> AuthError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty());
    AuthError::Rejected(detail.unwrap_or_else(|| fallback.to_owned()))
}

#[cfg(feature = "hydrate")]
fn network_error(err: &gloo_net::Error) -> AuthError {
    log::warn!("auth request failed: {err}");
    AuthError::Network(NETWORK_FALLBACK.to_owned())
}

#[cfg(not(feature = "hydrate"))]
fn offline() -> AuthError {
    AuthError::Network(NETWORK_FALLBACK.to_owned())
}

/// Authenticate against `POST /userses/login`.
///
/// On success the session is written to the store before returning, so a
/// reload lands the user back in the dashboard.
pub async fn login(
    store: &SessionStore,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = crate::net::types::LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&format!("{}/userses/login", api_base()))
            .json(&body)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(rejection(&text, "Credenciales incorrectas."));
        }

        let body: LoginResponse = resp.json().await.map_err(|e| network_error(&e))?;
        let session = session_from_login(body);
        store.save_session(&session);
        log::info!("login ok: {}", session.username);
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, username, password);
        Err(offline())
    }
}

/// Create an account via `POST /userses`.
///
/// The caller supplies the fixed security questions and the user's answers in
/// the request; the backend enforces the password policy and username
/// uniqueness and answers with a `detail` message on rejection.
pub async fn register(request: &RegisterRequest) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{}/userses", api_base()))
            .json(request)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(rejection(&text, "No se pudo crear el usuario."));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(offline())
    }
}

/// Fetch the account's security questions via `POST /userses/recovery/start`.
pub async fn recovery_start(username: &str) -> Result<Vec<String>, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = crate::net::types::RecoveryStartRequest {
            username: username.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&format!("{}/userses/recovery/start", api_base()))
            .json(&body)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(rejection(&text, "Usuario no encontrado."));
        }

        let body: crate::net::types::SecurityQuestionsResponse =
            resp.json().await.map_err(|e| network_error(&e))?;
        Ok(body.questions)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err(offline())
    }
}

/// Verify the answers via `POST /userses/recovery/verify`; returns the
/// short-lived reset token.
pub async fn recovery_verify(username: &str, answers: Vec<String>) -> Result<String, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = crate::net::types::VerifyAnswersRequest {
            username: username.to_owned(),
            answers,
        };
        let resp =
            gloo_net::http::Request::post(&format!("{}/userses/recovery/verify", api_base()))
                .json(&body)
                .map_err(|e| network_error(&e))?
                .send()
                .await
                .map_err(|e| network_error(&e))?;

        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(rejection(&text, "Respuestas incorrectas."));
        }

        let body: crate::net::types::VerifyAnswersResponse =
            resp.json().await.map_err(|e| network_error(&e))?;
        Ok(body.reset_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, answers);
        Err(offline())
    }
}

/// Set the new password via `POST /userses/recovery/reset`.
pub async fn recovery_reset(
    token: &str,
    username: &str,
    new_password: &str,
) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = crate::net::types::ResetPasswordRequest {
            token: token.to_owned(),
            username: username.to_owned(),
            new_password: new_password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&format!("{}/userses/recovery/reset", api_base()))
            .json(&body)
            .map_err(|e| network_error(&e))?
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(rejection(&text, "No se pudo actualizar la contraseña."));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, username, new_password);
        Err(offline())
    }
}

/// Notify the server and terminate the local session.
///
/// The clear is unconditional: a dead network must never leave the user
/// locked into a stale session.
pub async fn logout(store: &SessionStore) {
    let identity = store.identity();
    logout_with(store, notify_logout(identity)).await;
}

/// Logout with an injectable server notification, so the unconditional clear
/// is testable without a browser.
pub async fn logout_with<F>(store: &SessionStore, notify: F)
where
    F: Future<Output = Result<(), AuthError>>,
{
    if let Err(_err) = notify.await {
        #[cfg(feature = "hydrate")]
        log::warn!("logout notification failed: {_err}");
    }
    store.clear_session();
}

/// `POST /userses/logout` with the caller's identity as request metadata.
/// The response body is not consumed.
async fn notify_logout(identity: (Option<String>, Option<String>)) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let (user_id, username) = identity;
        let resp = gloo_net::http::Request::post(&format!("{}/userses/logout", api_base()))
            .header("X-User-Id", user_id.as_deref().unwrap_or(""))
            .header("X-Username", username.as_deref().unwrap_or(""))
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        if resp.ok() {
            Ok(())
        } else {
            Err(AuthError::Rejected(format!(
                "logout rechazado: {}",
                resp.status()
            )))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = identity;
        Err(offline())
    }
}
