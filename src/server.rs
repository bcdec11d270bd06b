use crate::error::{LolomoError, Result};
use crate::graphql::schema::{create_schema, GraphQLSchema};
use crate::lolomo::Lolomo;
use crate::observability::metrics;
use axum::{
    http::Method,
    response::{Html, IntoResponse, Json},
    routing::get,
    Extension, Router,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use hyper::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "lolomo-graphql",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GraphQL handler (supports GET and POST)
async fn graphql_handler(
    Extension(schema): Extension<GraphQLSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL IDE endpoint
async fn graphiql() -> impl IntoResponse {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint("/graphql")
            .finish(),
    )
}

/// Prometheus text exposition; empty when no recorder is installed
async fn metrics_handler() -> impl IntoResponse {
    metrics::render().unwrap_or_default()
}

/// Create the HTTP server with all routes
pub fn create_server(lolomo: Arc<Lolomo>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let schema = create_schema(lolomo);

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_handler))
        .route("/graphql", get(graphql_handler).post(graphql_handler))
        .route("/graphiql", get(graphiql))
        .layer(Extension(schema))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(lolomo: Arc<Lolomo>, port: u16) -> Result<()> {
    let app = create_server(lolomo);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("HTTP server running on http://localhost:{port}");
    info!("GraphQL:      http://localhost:{port}/graphql");
    info!("GraphiQL UI:  http://localhost:{port}/graphiql");
    info!("Health check: http://localhost:{port}/health");

    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|e| LolomoError::Server(e.to_string()))?;

    Ok(())
}
