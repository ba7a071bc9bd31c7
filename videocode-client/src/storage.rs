/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Persistent key-value storage contract.
//!
//! The browser build backs this with `window.localStorage`; tests and
//! environments without storage use [`MemoryStore`].

use crate::error::StorageError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key holding the saved note text.
pub const NOTEPAD_CONTENT_KEY: &str = "notepad-content";
/// Storage key holding the saved note mode (`code` or `notes`).
pub const NOTEPAD_MODE_KEY: &str = "notepad-mode";

/// Synchronous string key-value storage, single writer.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage. Clones share the same map, which lets a test simulate
/// a page reload by building a fresh buffer from a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Returns `true` when storage holds a non-empty saved note.
pub fn has_persisted_note<S: KeyValueStore + ?Sized>(storage: &S) -> bool {
    match storage.get(NOTEPAD_CONTENT_KEY) {
        Ok(Some(content)) => !content.is_empty(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("Could not read saved note: {e}");
            false
        }
    }
}

/// Removes the saved note text. The saved mode is a preference and stays.
pub fn clear_persisted_note<S: KeyValueStore + ?Sized>(storage: &S) {
    if let Err(e) = storage.remove(NOTEPAD_CONTENT_KEY) {
        log::warn!("Could not clear saved note: {e}");
    }
}
