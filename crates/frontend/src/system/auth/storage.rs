use contracts::system::auth::{TokenPair, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use web_sys::window;

/// Key/value persistence behind the session
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        window()?.local_storage().ok()?
    }
}

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Save both tokens
pub fn save_tokens(storage: &dyn TokenStorage, tokens: &TokenPair) {
    storage.set(ACCESS_TOKEN_KEY, &tokens.access_token);
    storage.set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
}

/// Stored access token; blank values count as absent
pub fn access_token(storage: &dyn TokenStorage) -> Option<String> {
    storage
        .get(ACCESS_TOKEN_KEY)
        .filter(|token| !token.trim().is_empty())
}

/// Clear all authentication tokens
pub fn clear_tokens(storage: &dyn TokenStorage) {
    storage.remove(ACCESS_TOKEN_KEY);
    storage.remove(REFRESH_TOKEN_KEY);
}

/// In-process storage for native tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    items: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_clear() {
        let storage = MemoryStorage::default();
        assert_eq!(access_token(&storage), None);

        save_tokens(
            &storage,
            &TokenPair {
                access_token: "access".into(),
                refresh_token: "refresh".into(),
            },
        );
        assert_eq!(access_token(&storage).as_deref(), Some("access"));
        assert_eq!(storage.get("refresh_token").as_deref(), Some("refresh"));

        clear_tokens(&storage);
        assert_eq!(access_token(&storage), None);
        assert_eq!(storage.get("refresh_token"), None);
    }

    #[test]
    fn test_blank_token_is_absent() {
        let storage = MemoryStorage::default();
        storage.set("token", "  ");
        assert_eq!(access_token(&storage), None);
    }
}
