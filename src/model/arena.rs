//! Named, index-addressed storage for model records

use std::collections::HashMap;

use crate::error::{FrameError, FrameResult};

/// Records in insertion order, looked up by index or by unique name
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    names: Vec<String>,
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Arena<T> {
    /// Store a record under a new name and return its index
    pub fn insert(&mut self, name: &str, item: T) -> FrameResult<usize> {
        if self.index.contains_key(name) {
            return Err(FrameError::DuplicateName(name.to_string()));
        }
        let id = self.items.len();
        self.names.push(name.to_string());
        self.items.push(item);
        self.index.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn get(&self, id: usize) -> Option<&T> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
