use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Ordered collection of categories. Ids come from a counter that only ever
/// moves forward, so an id is never reused even after its record is removed.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
    next_id: u64,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{} - {} | {} | Created at: {}",
            self.id,
            self.name,
            self.description,
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

#[allow(dead_code)]
impl CategoryList {
    pub fn new() -> Self {
        CategoryList {
            categories: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(&mut self, name: &str, description: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.categories.push(Category {
            id,
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
        });
        info!("Category {} created", id);
        id
    }

    pub fn category(&self, id: u64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_mut(&mut self, id: u64) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// First record matching the term as an id, or as a name compared
    /// case-insensitively, in insertion order.
    pub fn find(&self, term: &str) -> Option<&Category> {
        let id = term.parse::<u64>().ok();
        let term = term.to_lowercase();
        self.categories
            .iter()
            .find(|c| Some(c.id) == id || c.name.to_lowercase() == term)
    }

    /// Removal is a plain filter, as in the original: an absent id is a no-op.
    pub fn remove(&mut self, id: u64) {
        self.categories.retain(|c| c.id != id);
        info!("Category {} removed", id);
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

impl Default for CategoryList {
    fn default() -> Self {
        CategoryList::new()
    }
}
