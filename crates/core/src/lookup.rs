//! Foreign-key display names.
//!
//! List screens show ids resolved against `GET /{resource}/lookup`, which
//! returns `[{id, nombre}]`.

use crate::models::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupItem {
    #[serde(
        rename = "id",
        alias = "Id",
        default,
        deserialize_with = "normalize::id"
    )]
    pub id: i64,

    #[serde(
        rename = "nombre",
        alias = "Nombre",
        alias = "name",
        alias = "descripcion",
        default,
        deserialize_with = "normalize::text"
    )]
    pub name: String,
}

/// Id to display-name table for one resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameLookup {
    names: HashMap<i64, String>,
}

impl NameLookup {
    pub fn new(items: impl IntoIterator<Item = LookupItem>) -> Self {
        Self {
            names: items.into_iter().map(|item| (item.id, item.name)).collect(),
        }
    }

    pub fn get(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Name for `id`, or `#id` when it is unknown; `None` renders as `-`
    pub fn display(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => self
                .get(id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{id}")),
            None => "-".to_string(),
        }
    }

    /// All entries ordered by name, for select boxes
    pub fn entries(&self) -> Vec<(i64, &str)> {
        let mut entries: Vec<_> = self
            .names
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(&b.0)));
        entries
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<LookupItem> for NameLookup {
    fn from_iter<T: IntoIterator<Item = LookupItem>>(iter: T) -> Self {
        Self::new(iter)
    }
}
