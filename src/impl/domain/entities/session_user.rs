use fractic_server_error::ServerError;
use serde_derive::{Deserialize, Serialize};

use crate::{
    domain::repositories::session_store::{SessionStore, USER_KEY},
    errors::{InvalidSessionUser, SessionWriteError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// The identity written to session storage at login. Read once at the
/// application boundary and injected into each controller; the controllers
/// never re-read or mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl SessionUser {
    /// Read the current user from the `"user"` key. `Ok(None)` when no user
    /// is stored; an error only when the stored record is not valid JSON.
    pub fn read_from(store: &dyn SessionStore) -> Result<Option<SessionUser>, ServerError> {
        match store.get_item(USER_KEY)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| InvalidSessionUser::with_debug(&e)),
        }
    }

    pub fn write_to(&self, store: &dyn SessionStore) -> Result<(), ServerError> {
        let raw = serde_json::to_string(self).map_err(|e| SessionWriteError::with_debug(&e))?;
        store.set_item(USER_KEY, &raw)
    }
}
