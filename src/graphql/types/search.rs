use async_graphql::InputObject;

/// Filter for the `search` query
#[derive(InputObject, Debug, Clone)]
pub struct SearchFilter {
    /// Prefix the show title must start with; empty matches everything
    pub title: String,
}
