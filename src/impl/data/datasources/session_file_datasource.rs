use std::{collections::HashMap, fs, path::PathBuf};

use fractic_server_error::ServerError;

use crate::{
    domain::repositories::session_store::SessionStore,
    errors::{SessionReadError, SessionWriteError},
};

/// File-backed session storage: one JSON object per file, keys and values
/// both strings. A missing file reads as an empty store.
pub(crate) struct SessionFileDatasource {
    path: PathBuf,
}

impl SessionFileDatasource {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, ServerError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| SessionReadError::with_debug(&e))?;
        serde_json::from_str(&raw).map_err(|e| SessionReadError::with_debug(&e))
    }
}

impl SessionStore for SessionFileDatasource {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServerError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionWriteError::with_debug(&e))?;
        }
        let raw = serde_json::to_string(&map).map_err(|e| SessionWriteError::with_debug(&e))?;
        fs::write(&self.path, raw).map_err(|e| SessionWriteError::with_debug(&e))
    }
}
