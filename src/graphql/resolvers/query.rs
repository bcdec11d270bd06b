use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{SearchFilter, Show, ShowCategory};
use async_graphql::{Context, FieldResult, Object};

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// The home page rows: "Top 10" followed by "Continue Watching"
    async fn lolomo(&self, ctx: &Context<'_>) -> FieldResult<Vec<ShowCategory>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.lolomo.list_categories() {
            Ok(categories) => Ok(categories.into_iter().map(|c| c.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Shows whose title starts with the filter title (case-sensitive)
    async fn search(
        &self,
        ctx: &Context<'_>,
        search_filter: SearchFilter,
    ) -> FieldResult<Vec<Show>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.lolomo.search(&search_filter.title) {
            Ok(titles) => Ok(titles.into_iter().map(|t| t.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }
}
