//! Sessions
//!
//! The cart persists into a key-value store scoped to one user session,
//! owned by the surrounding web framework. The store is an explicit,
//! injected collaborator rather than ambient global state, so embedders
//! decide the cross-request consistency model (typically last-write-wins).

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised by a session store.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session backing the store is gone or was never established.
    #[error("session is unavailable")]
    Unavailable,

    /// Backend-specific failure, wrapped by the implementation.
    #[error("session backend error: {0}")]
    Backend(String),
}

/// A key-value store scoped to a user session.
///
/// Values are opaque serialized blobs; the cart store owns their encoding.
pub trait SessionStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the session cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the session cannot be written.
    fn insert(&mut self, key: &str, value: String) -> Result<(), SessionError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        (**self).get(key)
    }

    fn insert(&mut self, key: &str, value: String) -> Result<(), SessionError> {
        (**self).insert(key, value)
    }
}

/// In-process session store for tests and framework-less embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: FxHashMap<String, String>,
}

impl MemorySession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        MemorySession::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values.get(key).cloned())
    }

    fn insert(&mut self, key: &str, value: String) -> Result<(), SessionError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}
