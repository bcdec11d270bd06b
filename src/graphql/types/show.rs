use crate::domain::Title;
use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, FieldResult, Object};

/// GraphQL representation of a Title
#[derive(Clone)]
pub struct Show {
    pub inner: Title,
}

impl From<Title> for Show {
    fn from(title: Title) -> Self {
        Self { inner: title }
    }
}

#[Object]
impl Show {
    /// The display title of the show
    async fn title(&self) -> &str {
        &self.inner.name
    }

    /// Generated artwork for the show; resolved on demand, never an error
    async fn artwork_url(&self, ctx: &Context<'_>) -> FieldResult<String> {
        if let Some(artwork) = &self.inner.artwork_id {
            return Ok(artwork.clone());
        }

        let context = ctx.data::<GraphQLContext>()?;
        Ok(context.lolomo.resolve_artwork(&self.inner).await)
    }
}
