//! Session-token persistence in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth forms write the token after a successful submit and the route
//! guard reads it on mount. Both go through `TokenStore` so the flow can be
//! exercised without a browser.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write token: {0}")]
    Write(String),
}

/// Read/write access to the persisted session token.
pub trait TokenStore {
    /// Return the stored token, if any.
    fn token(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing store cannot be written.
    fn store_token(&self, token: &str) -> Result<(), StorageError>;
}

/// `TokenStore` backed by `window.localStorage`.
///
/// On the server every read returns `None` and writes report `Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(TOKEN_KEY, token)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory `TokenStore` used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryTokenStore {
    token: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub(crate) fn with_token(token: &str) -> Self {
        Self { token: std::cell::RefCell::new(Some(token.to_owned())) }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store_token(&self, token: &str) -> Result<(), StorageError> {
        *self.token.borrow_mut() = Some(token.to_owned());
        Ok(())
    }
}
