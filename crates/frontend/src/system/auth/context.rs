//! Reactive session shared by the whole app
//!
//! The access token lives in a signal mirrored to a `TokenStorage`. Guards and
//! pages read the signal; another tab logging out (a `storage` event on the
//! token key) clears it here too.

use super::storage::{self, BrowserStorage, TokenStorage};
use contracts::system::auth::{TokenPair, ACCESS_TOKEN_KEY};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

type SharedStorage = Arc<dyn TokenStorage + Send + Sync>;

#[derive(Clone, Copy)]
pub struct SessionContext {
    access_token: RwSignal<Option<String>>,
    storage: StoredValue<SharedStorage>,
}

impl SessionContext {
    pub fn new(storage: SharedStorage) -> Self {
        let access_token = RwSignal::new(storage::access_token(storage.as_ref()));
        Self {
            access_token,
            storage: StoredValue::new(storage),
        }
    }

    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Current token, without subscribing
    pub fn token(&self) -> Option<String> {
        self.access_token.get_untracked()
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let access_token = self.access_token;
        Signal::derive(move || access_token.with(|t| t.is_some()))
    }

    pub fn sign_in(&self, tokens: &TokenPair) {
        self.storage
            .with_value(|s| storage::save_tokens(s.as_ref(), tokens));
        self.access_token.set(Some(tokens.access_token.clone()));
    }

    /// Drops both tokens; guarded routes redirect to login
    pub fn clear(&self) {
        self.storage.with_value(|s| storage::clear_tokens(s.as_ref()));
        self.access_token.set(None);
    }

    /// Re-reads the token from storage
    pub fn reload(&self) {
        let stored = self
            .storage
            .with_value(|s| storage::access_token(s.as_ref()));
        if self.access_token.get_untracked() != stored {
            log::debug!("session token changed in storage");
            self.access_token.set(stored);
        }
    }

    /// Follows token changes made by other tabs
    pub fn listen_cross_tab(&self) {
        let session = *self;
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(storage_event) = event.dyn_ref::<StorageEvent>() {
                // `key` is None when the whole storage was cleared
                match storage_event.key() {
                    Some(key) if key != ACCESS_TOKEN_KEY => {}
                    _ => session.reload(),
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryStorage;

    #[test]
    fn test_sign_in_and_clear() {
        let backing = Arc::new(MemoryStorage::default());
        let session = SessionContext::new(backing.clone());
        assert_eq!(session.token(), None);

        session.sign_in(&TokenPair {
            access_token: "a".into(),
            refresh_token: "r".into(),
        });
        assert_eq!(session.token().as_deref(), Some("a"));
        assert_eq!(backing.get("token").as_deref(), Some("a"));

        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(backing.get("refresh_token"), None);
    }

    #[test]
    fn test_reload_sees_external_logout() {
        let backing = Arc::new(MemoryStorage::default());
        backing.set("token", "a");
        let session = SessionContext::new(backing.clone());
        assert_eq!(session.token().as_deref(), Some("a"));

        backing.remove("token");
        session.reload();
        assert_eq!(session.token(), None);
    }
}
