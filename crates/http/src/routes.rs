//! Route assembly and request handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use offerscope_codec::render_offer;
use offerscope_types::Offer;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::sample::sample_offer;
use crate::state::AppState;

/// Builds the introspection router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/offers", get(get_offers))
        .route("/healthz", get(health))
        .with_state(state)
}

/// Dumps the offers the scheduler currently holds.
///
/// Reads one pool snapshot, optionally appends the diagnostic sample offer,
/// decodes each held offer once and renders the presentation document. The
/// response is the complete document or an error status; a single offer
/// that fails to decode fails the whole request.
async fn get_offers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Map<String, Value>>>, ApiError> {
    let mut held = state.pool().snapshot()?;
    if state.include_sample_offer() {
        held.push(sample_offer());
    }

    let mut documents = Vec::with_capacity(held.len());
    for wire_offer in held {
        let offer_id = wire_offer.id.clone();
        let offer =
            Offer::try_from(wire_offer).map_err(|source| ApiError::render(offer_id, source))?;
        documents.push(render_offer(&offer));
    }

    debug!(offers = documents.len(), "rendered offer snapshot");
    Ok(Json(documents))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use offerscope_pool::{InMemoryOfferPool, OfferPool, PoolError};
    use offerscope_types::wire;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    struct FailingPool;

    impl OfferPool for FailingPool {
        fn snapshot(&self) -> Result<Vec<wire::Offer>, PoolError> {
            Err(PoolError::unavailable("tracker offline"))
        }
    }

    fn held_offer(id: &str) -> wire::Offer {
        wire::Offer {
            id: id.to_string(),
            framework_id: "fw-1".to_string(),
            slave_id: "slave-1".to_string(),
            hostname: "host-1".to_string(),
            resources: vec![wire::Resource {
                name: "cpu".to_string(),
                kind: wire::ValueKind::Scalar,
                scalar: Some(4.0),
                ranges: None,
                set: None,
            }],
            attributes: vec![wire::Attribute {
                name: "rack".to_string(),
                kind: wire::ValueKind::Text,
                scalar: None,
                ranges: None,
                set: None,
                text: Some("rack-3".to_string()),
            }],
            executor_ids: vec!["exec-1".to_string()],
        }
    }

    fn router_over(offers: Vec<wire::Offer>, include_sample_offer: bool) -> Router {
        let pool = Arc::new(InMemoryOfferPool::with_offers(offers));
        router(AppState::new(pool, include_sample_offer))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_zero_offers_render_as_empty_array() {
        let (status, body) = get_json(router_over(Vec::new(), false), "/offers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_held_offer_renders_full_document() {
        let (status, body) = get_json(router_over(vec![held_offer("offer-1")], false), "/offers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": "offer-1",
                "framework_id": "fw-1",
                "slave_id": "slave-1",
                "hostname": "host-1",
                "resources": [{"name": "cpu", "scalar": 4.0}],
                "attributes": [{"name": "rack", "text": "rack-3"}],
                "executor_ids": ["exec-1"],
            }])
        );
    }

    #[tokio::test]
    async fn test_offers_keep_snapshot_order() {
        let app = router_over(vec![held_offer("offer-1"), held_offer("offer-2")], false);
        let (_, body) = get_json(app, "/offers").await;
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|offer| offer["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["offer-1", "offer-2"]);
    }

    #[tokio::test]
    async fn test_response_is_json() {
        let app = router_over(Vec::new(), false);
        let response = app
            .oneshot(Request::builder().uri("/offers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn test_pool_failure_returns_service_unavailable() {
        let app = router(AppState::new(Arc::new(FailingPool), false));
        let (status, body) = get_json(app, "/offers").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "offer_pool_unavailable");
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_malformed_offer_fails_whole_request() {
        let mut broken = held_offer("offer-2");
        broken.resources.push(wire::Resource {
            name: "ports".to_string(),
            kind: wire::ValueKind::Ranges,
            scalar: None,
            ranges: None,
            set: None,
        });

        let app = router_over(vec![held_offer("offer-1"), broken], false);
        let (status, body) = get_json(app, "/offers").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "offer_render_failed");
        assert!(body["message"].as_str().unwrap().contains("offer-2"));
    }

    #[tokio::test]
    async fn test_sample_offer_is_absent_by_default() {
        let (_, body) = get_json(router_over(vec![held_offer("offer-1")], false), "/offers").await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sample_offer_appends_after_live_offers() {
        let (status, body) = get_json(router_over(vec![held_offer("offer-1")], true), "/offers").await;
        assert_eq!(status, StatusCode::OK);

        let offers = body.as_array().unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0]["id"], "offer-1");
        assert_eq!(offers[1]["id"], "offer-id");
        assert_eq!(offers[1]["resources"], json!([{"name": "cpu", "scalar": 16.7}]));
        assert_eq!(offers[1]["attributes"], json!([{"name": "attr", "text": "some text"}]));
    }

    #[tokio::test]
    async fn test_health_stays_up_when_pool_is_down() {
        let app = router(AppState::new(Arc::new(FailingPool), false));
        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
