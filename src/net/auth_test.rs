use super::*;
use crate::net::types::RoleInfo;
use futures::executor::block_on;

fn login_response(role: Option<RoleInfo>) -> LoginResponse {
    LoginResponse {
        access_token: "tok-1".to_owned(),
        username: "jdoe".to_owned(),
        user_id: 7,
        role,
    }
}

// =============================================================
// Login response → session mapping
// =============================================================

#[test]
fn session_from_login_carries_role() {
    let role = RoleInfo {
        id: 2,
        name: "operador".to_owned(),
    };
    let session = session_from_login(login_response(Some(role)));
    assert_eq!(session.token, "tok-1");
    assert_eq!(session.username, "jdoe");
    assert_eq!(session.user_id, 7);
    assert_eq!(session.role_id, 2);
    assert_eq!(session.role_name, "operador");
}

#[test]
fn session_from_login_without_role_is_unknown() {
    let session = session_from_login(login_response(None));
    assert_eq!(session.role_id, 0);
    assert_eq!(session.role_name, "");
    assert_eq!(session.role(), crate::state::session::Role::Unknown);
}

// =============================================================
// Rejection body parsing
// =============================================================

#[test]
fn rejection_uses_server_detail() {
    let err = rejection(r#"{"detail":"Usuario no encontrado"}"#, "fallback");
    assert_eq!(err, AuthError::Rejected("Usuario no encontrado".to_owned()));
}

#[test]
fn rejection_falls_back_without_detail() {
    assert_eq!(
        rejection("{}", "Credenciales incorrectas."),
        AuthError::Rejected("Credenciales incorrectas.".to_owned())
    );
}

#[test]
fn rejection_falls_back_on_unparsable_body() {
    assert_eq!(
        rejection("<html>502</html>", "fallback"),
        AuthError::Rejected("fallback".to_owned())
    );
}

#[test]
fn rejection_ignores_blank_detail() {
    assert_eq!(
        rejection(r#"{"detail":"   "}"#, "fallback"),
        AuthError::Rejected("fallback".to_owned())
    );
}

#[test]
fn auth_error_displays_its_message() {
    let err = AuthError::Validation("Las contraseñas no coinciden.".to_owned());
    assert_eq!(err.to_string(), "Las contraseñas no coinciden.");
}

// =============================================================
// Logout clears locally no matter what the server said
// =============================================================

fn stored_session() -> crate::state::session::Session {
    crate::state::session::Session {
        token: "tok-1".to_owned(),
        username: "jdoe".to_owned(),
        user_id: 7,
        role_id: 1,
        role_name: "admin".to_owned(),
    }
}

#[test]
fn logout_clears_store_when_notification_fails() {
    let store = SessionStore::memory();
    store.save_session(&stored_session());

    block_on(logout_with(&store, async {
        Err(AuthError::Network("servidor caído".to_owned()))
    }));

    assert!(!store.is_authenticated());
    assert_eq!(store.load_session(), None);
}

#[test]
fn logout_clears_store_when_notification_succeeds() {
    let store = SessionStore::memory();
    store.save_session(&stored_session());

    block_on(logout_with(&store, async { Ok(()) }));

    assert_eq!(store.load_session(), None);
}
