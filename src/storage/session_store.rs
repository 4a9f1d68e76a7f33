//! Durable persistence for the session fields.
//!
//! Browser builds write through `localStorage`; everywhere else (SSR, tests,
//! storage disabled by the user) a shared in-memory map stands in. Every
//! operation is best-effort: storage failures degrade to "absent" and are
//! never surfaced, so the UI keeps working with storage blocked.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::state::session::Session;

const KEY_TOKEN: &str = "despacho_token";
const KEY_USERNAME: &str = "despacho_username";
const KEY_USER_ID: &str = "despacho_user_id";
const KEY_ROLE_ID: &str = "despacho_role_id";
const KEY_ROLE_NAME: &str = "despacho_role_name";

const SESSION_KEYS: [&str; 5] = [
    KEY_TOKEN,
    KEY_USERNAME,
    KEY_USER_ID,
    KEY_ROLE_ID,
    KEY_ROLE_NAME,
];

/// Key-value store for session fields.
///
/// Cheap to clone; clones of a memory-backed store share the same map, so a
/// single instance provided via context behaves like the browser original.
#[derive(Clone)]
pub struct SessionStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    #[cfg(feature = "hydrate")]
    Browser,
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl SessionStore {
    /// Store backed by `localStorage` when a browser window with storage is
    /// available, falling back to an in-memory map otherwise.
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(_)) = window.local_storage() {
                    return Self {
                        backend: Backend::Browser,
                    };
                }
            }
        }
        Self::memory()
    }

    /// Purely in-memory store.
    pub fn memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(Mutex::new(HashMap::new()))),
        }
    }

    /// Best-effort write; failures are swallowed.
    pub fn set(&self, key: &str, value: &str) {
        match &self.backend {
            #[cfg(feature = "hydrate")]
            Backend::Browser => {
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(storage)) = window.local_storage() {
                        let _ = storage.set_item(key, value);
                    }
                }
            }
            Backend::Memory(map) => {
                if let Ok(mut map) = map.lock() {
                    map.insert(key.to_owned(), value.to_owned());
                }
            }
        }
    }

    /// Best-effort read; `None` on failure or missing key.
    pub fn get(&self, key: &str) -> Option<String> {
        match &self.backend {
            #[cfg(feature = "hydrate")]
            Backend::Browser => {
                let storage = web_sys::window()?.local_storage().ok()??;
                storage.get_item(key).ok()?
            }
            Backend::Memory(map) => map.lock().ok()?.get(key).cloned(),
        }
    }

    /// Best-effort delete; failures are swallowed.
    pub fn remove(&self, key: &str) {
        match &self.backend {
            #[cfg(feature = "hydrate")]
            Backend::Browser => {
                if let Some(window) = web_sys::window() {
                    if let Ok(Some(storage)) = window.local_storage() {
                        let _ = storage.remove_item(key);
                    }
                }
            }
            Backend::Memory(map) => {
                if let Ok(mut map) = map.lock() {
                    map.remove(key);
                }
            }
        }
    }

    /// Persist every field of the session.
    pub fn save_session(&self, session: &Session) {
        self.set(KEY_TOKEN, &session.token);
        self.set(KEY_USERNAME, &session.username);
        self.set(KEY_USER_ID, &session.user_id.to_string());
        self.set(KEY_ROLE_ID, &session.role_id.to_string());
        self.set(KEY_ROLE_NAME, &session.role_name);
    }

    /// Load the stored session, all-or-nothing.
    ///
    /// Any missing or unparsable field yields `None`, so a partial write never
    /// reads back as an authenticated session.
    pub fn load_session(&self) -> Option<Session> {
        Some(Session {
            token: self.get(KEY_TOKEN)?,
            username: self.get(KEY_USERNAME)?,
            user_id: self.get(KEY_USER_ID)?.parse().ok()?,
            role_id: self.get(KEY_ROLE_ID)?.parse().ok()?,
            role_name: self.get(KEY_ROLE_NAME)?,
        })
    }

    /// Remove every session field. No rollback on partial failure; a reader
    /// that only goes through `get` never observes an inconsistent session
    /// because `load_session` requires all fields.
    pub fn clear_session(&self) {
        for key in SESSION_KEYS {
            self.remove(key);
        }
    }

    /// True iff both a token and a username are stored.
    pub fn is_authenticated(&self) -> bool {
        self.get(KEY_TOKEN).is_some() && self.get(KEY_USERNAME).is_some()
    }

    /// Identity fields attached to the logout notification, if present.
    pub fn identity(&self) -> (Option<String>, Option<String>) {
        (self.get(KEY_USER_ID), self.get(KEY_USERNAME))
    }
}
