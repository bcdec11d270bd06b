// Domain data shapes shared by the catalog, the aggregator and the GraphQL layer

use serde::{Deserialize, Serialize};

/// A single show or movie entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub name: String,
    pub artwork_id: Option<String>,
}

impl Title {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artwork_id: None,
        }
    }

    /// Copy of this title carrying a resolved artwork identifier
    pub fn with_artwork(&self, artwork_id: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            artwork_id: Some(artwork_id.into()),
        }
    }
}

/// A named, ordered group of titles shown together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub titles: Vec<Title>,
}

impl Category {
    pub fn new(id: i32, name: impl Into<String>, titles: Vec<Title>) -> Self {
        Self {
            id,
            name: name.into(),
            titles,
        }
    }
}
