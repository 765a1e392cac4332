//! In-memory todo store.
//!
//! # Design
//! `TodoStore` owns an ordered `Vec<Todo>`; insertion order is the list
//! order. Ids are assigned as `len + 1`, which stays unique because nothing
//! is ever removed. Sorting and search return fresh copies and never reorder
//! the store itself.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TodoError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub message: String,
    pub completed: bool,
}

impl Todo {
    fn new(id: u64, message: &str, completed: bool) -> Self {
        Self {
            id,
            message: message.to_string(),
            completed,
        }
    }
}

/// Ordering requested through the `k` query parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only the literal `desc` selects descending order.
    pub fn from_param(k: &str) -> Self {
        if k == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store the service boots with.
    pub fn seeded() -> Self {
        Self {
            todos: vec![
                Todo::new(1, "Learn Express.js", false),
                Todo::new(2, "Happy Birthday reminder", true),
                Todo::new(3, "Test the todos app", false),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn create(&mut self, message: Option<String>, completed: bool) -> Result<Todo, TodoError> {
        let message = message
            .filter(|m| !m.is_empty())
            .ok_or_else(|| TodoError::Validation("Message is required".to_string()))?;

        let todo = Todo {
            id: self.todos.len() as u64 + 1,
            message,
            completed,
        };
        debug!(id = todo.id, "todo created");
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Overwrite every field of the todo with `id`. The id is looked up
    /// before the fields are checked, so an unknown id wins over a bad body.
    pub fn replace(
        &mut self,
        id: u64,
        message: Option<String>,
        completed: Option<bool>,
    ) -> Result<Todo, TodoError> {
        let slot = self.find_mut(id)?;
        let (Some(message), Some(completed)) = (message, completed) else {
            return Err(TodoError::Validation(
                "PUT requires both message and completed fields".to_string(),
            ));
        };

        *slot = Todo {
            id,
            message,
            completed,
        };
        debug!(id, "todo replaced");
        Ok(slot.clone())
    }

    pub fn patch(
        &mut self,
        id: u64,
        message: Option<String>,
        completed: Option<bool>,
    ) -> Result<Todo, TodoError> {
        let todo = self.find_mut(id)?;
        if let Some(message) = message {
            todo.message = message;
        }
        if let Some(completed) = completed {
            todo.completed = completed;
        }
        debug!(id, "todo patched");
        Ok(todo.clone())
    }

    pub fn sort_by_id(&self, direction: SortDirection) -> Vec<Todo> {
        let mut sorted = self.todos.clone();
        sorted.sort_by(|a, b| direction.apply(a.id.cmp(&b.id)));
        sorted
    }

    /// Messages are ordered with root-locale collation.
    pub fn sort_by_message(&self, direction: SortDirection) -> Result<Vec<Todo>, TodoError> {
        let collator = message_collator()?;
        let mut sorted = self.todos.clone();
        sorted.sort_by(|a, b| direction.apply(collator.compare(&a.message, &b.message)));
        Ok(sorted)
    }

    /// Case-insensitive substring search over messages.
    pub fn search(&self, query: Option<&str>) -> Result<Vec<Todo>, TodoError> {
        let query = query
            .filter(|q| !q.is_empty())
            .ok_or_else(|| TodoError::Validation("Search query is required".to_string()))?;

        let needle = query.to_lowercase();
        Ok(self
            .todos
            .iter()
            .filter(|todo| todo.message.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Todo, TodoError> {
        self.todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(TodoError::NotFound)
    }
}

/// Root-locale collator at default (tertiary) strength: punctuation sorts
/// before digits, digits before letters, lowercase before uppercase, and
/// accented letters next to their base letter.
fn message_collator() -> Result<Collator, TodoError> {
    Collator::try_new(&Default::default(), CollatorOptions::new())
        .map_err(|err| TodoError::Collation(err.to_string()))
}
