use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::db::Database;

/// A durable key-value location outside the store's own memory.
pub trait Slot {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl Slot for Database {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.read_slot(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.write_slot(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.remove_slot(key)?;
        Ok(())
    }
}

/// In-process slot. Clones share the same storage, which lets several stores
/// observe one another's writes the way two tabs share one browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw contents of a key, bypassing any store.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Overwrite a key directly, e.g. with foreign data.
    pub fn poke(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.peek(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.poke(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
