use crate::domain::Category;
use crate::graphql::types::Show;
use async_graphql::Object;

/// GraphQL representation of a Category
#[derive(Clone)]
pub struct ShowCategory {
    pub inner: Category,
}

impl From<Category> for ShowCategory {
    fn from(category: Category) -> Self {
        Self { inner: category }
    }
}

#[Object]
impl ShowCategory {
    async fn id(&self) -> i32 {
        self.inner.id
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Shows in this category, in display order
    async fn shows(&self) -> Vec<Show> {
        self.inner.titles.iter().cloned().map(Show::from).collect()
    }
}
