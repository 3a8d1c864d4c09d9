//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use solar_sizer::api::{AppState, router};
use solar_sizer::config::DesignConfig;
use solar_sizer::sizing::recalculate;

fn cabin_state() -> Arc<AppState> {
    let cfg = DesignConfig::cabin();
    let registry = cfg.build_registry();
    let results = recalculate(registry.loads(), &cfg.system);
    Arc::new(AppState {
        params: cfg.system,
        loads: registry.into_loads(),
        results,
    })
}

#[tokio::test]
async fn results_endpoint_serves_the_computed_design() {
    let state = cabin_state();
    let expected_total = state.results.energy.total_wh;
    let app = router(state);

    let req = Request::builder()
        .uri("/results")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["energy"]["total_wh"].as_f64(), Some(expected_total));
    assert!(json["battery"]["recommended_battery_ah"].as_f64().unwrap_or(0.0) > 0.0);
    assert!(json["cost"]["total_cost_usd"].as_f64().unwrap_or(0.0) > 0.0);
}

#[tokio::test]
async fn loads_endpoint_round_trips_the_registry() {
    let state = cabin_state();
    let expected = state.loads.len();
    let app = router(state);

    let req = Request::builder()
        .uri("/loads")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let loads = json["loads"].as_array().expect("loads array");
    assert_eq!(loads.len(), expected);
    for load in loads {
        assert!(load["daily_wh"].is_number());
        let circuit = load["circuit"].as_str().unwrap_or("");
        assert!(circuit == "AC" || circuit == "DC");
    }
}

#[tokio::test]
async fn report_endpoint_preserves_section_order() {
    let app = router(cabin_state());

    let req = Request::builder()
        .uri("/report")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();

    let energy = text.find("ENERGY REQUIREMENTS").expect("energy section");
    let design = text.find("SYSTEM DESIGN").expect("design section");
    let cost = text.find("COST ESTIMATION").expect("cost section");
    assert!(energy < design && design < cost);
}
