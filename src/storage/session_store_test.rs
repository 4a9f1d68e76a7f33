use super::*;

fn session() -> Session {
    Session {
        token: "tok-9".to_owned(),
        username: "jdoe".to_owned(),
        user_id: 7,
        role_id: 1,
        role_name: "admin".to_owned(),
    }
}

// =============================================================
// Raw set / get / clear semantics
// =============================================================

#[test]
fn get_after_set_returns_value() {
    let store = SessionStore::memory();
    store.set(KEY_TOKEN, "abc");
    assert_eq!(store.get(KEY_TOKEN), Some("abc".to_owned()));
}

#[test]
fn set_overwrites_previous_value() {
    let store = SessionStore::memory();
    store.set(KEY_USERNAME, "first");
    store.set(KEY_USERNAME, "second");
    assert_eq!(store.get(KEY_USERNAME), Some("second".to_owned()));
}

#[test]
fn get_missing_key_is_absent() {
    let store = SessionStore::memory();
    assert_eq!(store.get(KEY_TOKEN), None);
}

#[test]
fn clear_removes_every_session_field() {
    let store = SessionStore::memory();
    store.save_session(&session());
    store.clear_session();
    for key in SESSION_KEYS {
        assert_eq!(store.get(key), None, "{key}");
    }
}

#[test]
fn clones_share_the_same_map() {
    let store = SessionStore::memory();
    let other = store.clone();
    store.set(KEY_TOKEN, "shared");
    assert_eq!(other.get(KEY_TOKEN), Some("shared".to_owned()));
}

// =============================================================
// Typed session round trip
// =============================================================

#[test]
fn load_returns_saved_session() {
    let store = SessionStore::memory();
    store.save_session(&session());
    assert_eq!(store.load_session(), Some(session()));
}

#[test]
fn load_with_missing_field_is_none() {
    let store = SessionStore::memory();
    store.save_session(&session());
    store.remove(KEY_ROLE_NAME);
    assert_eq!(store.load_session(), None);
}

#[test]
fn load_with_unparsable_id_is_none() {
    let store = SessionStore::memory();
    store.save_session(&session());
    store.set(KEY_USER_ID, "not-a-number");
    assert_eq!(store.load_session(), None);
}

// =============================================================
// Authentication check
// =============================================================

#[test]
fn authenticated_requires_token_and_username() {
    let store = SessionStore::memory();
    assert!(!store.is_authenticated());

    store.set(KEY_TOKEN, "tok");
    assert!(!store.is_authenticated());

    store.set(KEY_USERNAME, "jdoe");
    assert!(store.is_authenticated());
}

#[test]
fn username_alone_is_not_authenticated() {
    let store = SessionStore::memory();
    store.set(KEY_USERNAME, "jdoe");
    assert!(!store.is_authenticated());
}

#[test]
fn clear_drops_authentication() {
    let store = SessionStore::memory();
    store.save_session(&session());
    assert!(store.is_authenticated());
    store.clear_session();
    assert!(!store.is_authenticated());
}
