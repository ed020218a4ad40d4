use fractic_server_error::ServerError;

/// Storage key of the JSON-encoded session user.
pub(crate) const USER_KEY: &str = "user";

/// Local persistent key-value storage, mirroring the synchronous
/// getItem/setItem surface of browser local storage.
pub trait SessionStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, ServerError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ServerError>;
}
