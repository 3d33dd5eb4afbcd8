use std::sync::{Arc, RwLock};

/// Client-local persistence of the bearer token — the only value this
/// library ever persists. Absence means unauthenticated.
///
/// The browser shell backs this with `localStorage`; native hosts and
/// tests use [`MemoryTokenStore`].
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory token store. Default for tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn save(&self, token: &str) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// Explicit session object passed to every component that makes
/// authenticated calls, instead of ambient global token reads.
///
/// Writes only happen from login/logout flows (single writer); every
/// authenticated request reads. Cloning shares the underlying store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by a [`MemoryTokenStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::default()))
    }

    /// Store a freshly issued bearer token (login/register).
    pub fn set(&self, token: impl Into<String>) {
        self.store.save(&token.into());
    }

    /// Destroy the session (logout or auth failure).
    pub fn clear(&self) {
        self.store.clear();
    }

    /// The current bearer token, if any.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.store.load()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
