use crate::constants::{BUILTIN_TITLES, CONTINUE_WATCHING_ID, CONTINUE_WATCHING_POSITIONS, TOP_10_ID};
use crate::domain::Title;
use crate::error::Result;
use tracing::debug;

/// Read-only source of titles
///
/// Implementations must never return an absent list: an unknown category is an
/// empty vec. Errors are reserved for genuine backend failures and are passed
/// through to callers untouched.
pub trait Catalog: Send + Sync {
    /// Every title, in catalog order
    fn all_titles(&self) -> Result<Vec<Title>>;

    /// Titles belonging to the given category, in category order
    fn titles_for_category(&self, category_id: i32) -> Result<Vec<Title>>;
}

/// In-memory catalog, fixed at construction
pub struct InMemoryCatalog {
    titles: Vec<Title>,
}

impl InMemoryCatalog {
    pub fn new(titles: Vec<Title>) -> Self {
        Self { titles }
    }

    /// Catalog holding the ten built-in titles
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TITLES.iter().map(|name| Title::new(*name)).collect())
    }

    fn continue_watching(&self) -> Vec<Title> {
        let picked: Option<Vec<Title>> = CONTINUE_WATCHING_POSITIONS
            .iter()
            .map(|&pos| self.titles.get(pos).cloned())
            .collect();

        // A catalog too short for the fixed positions has nothing to continue
        picked.unwrap_or_default()
    }
}

impl Catalog for InMemoryCatalog {
    fn all_titles(&self) -> Result<Vec<Title>> {
        Ok(self.titles.clone())
    }

    fn titles_for_category(&self, category_id: i32) -> Result<Vec<Title>> {
        let titles = match category_id {
            TOP_10_ID => self.titles.clone(),
            CONTINUE_WATCHING_ID => self.continue_watching(),
            _ => Vec::new(),
        };
        debug!(category_id, count = titles.len(), "Resolved category titles");
        Ok(titles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(titles: &[Title]) -> Vec<&str> {
        titles.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_all_titles_is_stable() {
        let catalog = InMemoryCatalog::builtin();
        let first = catalog.all_titles().unwrap();
        let second = catalog.all_titles().unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(first, second);
        assert_eq!(names(&first), BUILTIN_TITLES.to_vec());
        assert!(first.iter().all(|t| t.artwork_id.is_none()));
    }

    #[test]
    fn test_top_10_is_full_list() {
        let catalog = InMemoryCatalog::builtin();
        assert_eq!(
            catalog.titles_for_category(TOP_10_ID).unwrap(),
            catalog.all_titles().unwrap()
        );
    }

    #[test]
    fn test_continue_watching_positions() {
        let catalog = InMemoryCatalog::builtin();
        let titles = catalog.titles_for_category(CONTINUE_WATCHING_ID).unwrap();
        assert_eq!(names(&titles), vec!["The Last Dance", "You", "The Witcher"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = InMemoryCatalog::builtin();
        for id in [0, 3, -1, 999] {
            assert!(
                catalog.titles_for_category(id).unwrap().is_empty(),
                "category {id} should be empty"
            );
        }
    }

    #[test]
    fn test_short_catalog_has_empty_continue_watching() {
        let catalog = InMemoryCatalog::new(vec![Title::new("Only One")]);
        assert!(catalog
            .titles_for_category(CONTINUE_WATCHING_ID)
            .unwrap()
            .is_empty());
        assert_eq!(catalog.titles_for_category(TOP_10_ID).unwrap().len(), 1);
    }
}
