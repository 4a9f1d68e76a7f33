#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Client-held record of the authenticated user, persisted across reloads.
///
/// Created on successful login, loaded from the session store on boot, and
/// destroyed on logout. The store only ever yields a fully populated
/// `Session`; a partial set of stored fields reads back as no session at all.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub user_id: i64,
    pub role_id: i64,
    pub role_name: String,
}

impl Session {
    /// Resolve the stored role name into the closed [`Role`] enum.
    pub fn role(&self) -> Role {
        Role::from_name(&self.role_name)
    }
}

/// Closed set of roles the UI distinguishes.
///
/// Resolved once from the backend's free-form role name; anything the client
/// does not recognize maps to `Unknown` and sees the minimal menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    Operator,
    #[default]
    Unknown,
}

impl Role {
    /// Case-insensitive mapping from the backend role name.
    ///
    /// The backend has shipped both `"operador"` and `"operadores"` for the
    /// operator role, and some older accounts carry `"user"`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "admin" => Self::Admin,
            "operador" | "operadores" | "user" => Self::Operator,
            _ => Self::Unknown,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }

    pub fn is_operator(self) -> bool {
        self == Self::Operator
    }
}

/// Shared session state provided via context at the app root.
///
/// `loading` is true while the stored session is being restored on boot so
/// guarded pages do not redirect before the restore has run.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    pub fn authenticated(session: Session) -> Self {
        Self {
            session: Some(session),
            loading: false,
        }
    }

    /// Role of the current user, `Unknown` when no session is present.
    pub fn role(&self) -> Role {
        self.session.as_ref().map_or(Role::Unknown, Session::role)
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }
}
