//! Event categories (indoor, outdoor, vehicles, ...) matched by event name.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Event-name prefixes that put an event in this category.
    pub prefixes: Vec<String>,
}

/// Ordered category table; the first category with a matching prefix wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        for category in &categories {
            if category.prefixes.iter().all(|p| p.trim().is_empty()) {
                return Err(ModelError::EmptyCategory {
                    name: category.name.clone(),
                });
            }
        }
        Ok(Self { categories })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Case-insensitive prefix match against the trimmed event name.
    pub fn classify(&self, event_name: &str) -> Option<&str> {
        let name = event_name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|category| {
                category.prefixes.iter().any(|prefix| {
                    let prefix = prefix.trim().to_lowercase();
                    !prefix.is_empty() && name.starts_with(&prefix)
                })
            })
            .map(|category| category.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CategoryTable {
        CategoryTable::new(vec![
            Category {
                name: "Indoor".to_string(),
                prefixes: vec!["Inomhus".to_string(), "Indoor".to_string()],
            },
            Category {
                name: "Outdoor".to_string(),
                prefixes: vec!["Utomhus".to_string()],
            },
        ])
        .unwrap()
    }

    #[test]
    fn classifies_by_prefix() {
        let table = table();
        assert_eq!(table.classify("Inomhus 2"), Some("Indoor"));
        assert_eq!(table.classify("  indoor kitchen"), Some("Indoor"));
        assert_eq!(table.classify("UTOMHUS"), Some("Outdoor"));
        assert_eq!(table.classify("Fordon"), None);
    }

    #[test]
    fn rejects_category_without_prefixes() {
        let err = CategoryTable::new(vec![Category {
            name: "Vehicles".to_string(),
            prefixes: vec![" ".to_string()],
        }])
        .unwrap_err();
        assert!(matches!(err, ModelError::EmptyCategory { .. }));
    }
}
