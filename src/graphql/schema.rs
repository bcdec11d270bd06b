use crate::graphql::resolvers::Query;
use crate::lolomo::Lolomo;
use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub lolomo: Arc<Lolomo>,
}

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Create a new GraphQL schema around the given aggregator
pub fn create_schema(lolomo: Arc<Lolomo>) -> GraphQLSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(GraphQLContext { lolomo })
        .finish()
}
