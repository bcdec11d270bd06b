use axum::body::Body;
use axum::http::{Request, StatusCode};
use lolomo::artwork::{ArtworkPool, UuidArtworkGenerator};
use lolomo::catalog::InMemoryCatalog;
use lolomo::domain::Title;
use lolomo::lolomo::Lolomo;
use lolomo::observability;
use lolomo::server::create_server;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

// Single test in this binary: the Prometheus recorder is process-global.
#[tokio::test]
async fn test_metrics_endpoint_renders_recorded_counters() {
    observability::init().unwrap();

    let lolomo = Arc::new(Lolomo::new(
        Arc::new(InMemoryCatalog::builtin()),
        Arc::new(UuidArtworkGenerator::new(Duration::ZERO)),
        ArtworkPool::new(2),
    ));

    lolomo.search("The").unwrap();
    lolomo.list_categories().unwrap();
    let artwork = lolomo.resolve_artwork(&Title::new("You")).await;
    assert!(artwork.ends_with("-you"));

    let rendered = observability::render().unwrap();
    assert!(rendered.contains("lolomo_search_requests_total"), "{rendered}");
    assert!(rendered.contains("lolomo_lolomo_requests_total"), "{rendered}");
    assert!(rendered.contains("lolomo_artwork_generated_total"), "{rendered}");

    let app = create_server(lolomo);
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("lolomo_search_requests_total"), "{body}");
}
