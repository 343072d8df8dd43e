//! Integration tests for the menu HTTP API

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use menu_combos_api::config::ServiceConfig;
use menu_combos_api::storage::parse_catalog;
use menu_combos_api::{build_router, AppState, MenuSnapshot};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

const MENU: &str = "\
id,name,price,category
1,Pizza Margherita,42.90,Pizza
2,Pizza Calabresa,45.50,Pizza
3,X-Burger,24.00,Lanches
4,Salada Caesar,22.00,Saladas
5,Refrigerante,6.00,Bebidas
";

fn setup_state(csv: &str) -> AppState {
    let catalog = parse_catalog(csv).expect("Should parse test menu");
    AppState::new(MenuSnapshot::new(catalog), ServiceConfig::default())
}

fn setup_app() -> Router {
    build_router(setup_state(MENU))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Info / health
// =============================================================================

#[tokio::test]
async fn test_info_reports_item_count() {
    let response = setup_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_items"], 5);
    assert!(body["title"].is_string());
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = setup_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

// =============================================================================
// Read endpoints
// =============================================================================

#[tokio::test]
async fn test_list_items_in_catalog_order() {
    let response = setup_app().oneshot(get("/items")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["name"], "Pizza Margherita");
    assert_eq!(items[0]["price"], 42.9);
    assert_eq!(items[0]["category"], "Pizza");
}

#[tokio::test]
async fn test_get_item_by_id() {
    let response = setup_app().oneshot(get("/items/id/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["name"], "X-Burger");
}

#[tokio::test]
async fn test_get_missing_item_is_404() {
    let response = setup_app().oneshot(get("/items/id/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "Item with ID 99 not found");
}

#[tokio::test]
async fn test_category_filter_ignores_case() {
    let response = setup_app().oneshot(get("/items/category/pIZZA")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_limits_results_but_counts_all() {
    let response = setup_app()
        .oneshot(get("/items/search?name=pizza&limit=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["filters"]["name"], "pizza");
    assert_eq!(body["filters"]["category"], Value::Null);
    assert_eq!(body["filters"]["limit"], 1);
    assert_eq!(body["results"].as_array().unwrap().len(), 1);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_search_default_limit() {
    let response = setup_app().oneshot(get("/items/search")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["filters"]["limit"], 5);
    assert_eq!(body["total"], 5);
}

#[tokio::test]
async fn test_search_rejects_zero_limit() {
    let response = setup_app()
        .oneshot(get("/items/search?limit=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Write endpoint
// =============================================================================

#[tokio::test]
async fn test_add_item_then_read_back() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/items",
            json!({"id": 6, "name": "Pudim", "price": 10.0, "category": "Sobremesas"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["id"], 6);

    let response = app.oneshot(get("/items/id/6")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_add_duplicate_id_is_400() {
    let response = setup_app()
        .oneshot(post_json(
            "/items",
            json!({"id": 1, "name": "Outra", "price": 1.0, "category": "Pizza"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["message"], "ID 1 already exists.");
}

#[tokio::test]
async fn test_add_invalid_record_is_400() {
    let response = setup_app()
        .oneshot(post_json(
            "/items",
            json!({"id": 7, "name": "", "price": 1.0, "category": "Pizza"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_oversized_price_is_400() {
    let response = setup_app()
        .oneshot(post_json(
            "/items",
            json!({"id": 8, "name": "Caviar", "price": 1.0e300, "category": "Entradas"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Combos
// =============================================================================

#[tokio::test]
async fn test_combos_are_cheapest_without_repeats() {
    let response = setup_app()
        .oneshot(get("/menu/combos?count=10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    // Sorted by price: 5 (6.00), 4 (22.00), 3 (24.00), 1 (42.90), 2 (45.50)
    // Greedy picks (5,4)=28.0, then (3,1)=66.9; 2 is left alone.
    assert_eq!(body["count"], 2);
    assert_eq!(body["combos"][0]["items"], json!([5, 4]));
    assert_eq!(body["combos"][0]["categories"], json!(["Bebidas", "Saladas"]));
    assert_eq!(body["combos"][0]["total"], 28.0);
    assert_eq!(body["combos"][1]["items"], json!([3, 1]));
    assert_eq!(body["combos"][1]["total"], 66.9);
    assert!(body["criterion"].is_string());
}

#[tokio::test]
async fn test_combos_default_count() {
    let response = setup_app().oneshot(get("/menu/combos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_combos_count_out_of_range() {
    for uri in ["/menu/combos?count=0", "/menu/combos?count=51"] {
        let response = setup_app().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_combos_unavailable_for_single_category() {
    let app = build_router(setup_state("id,name,price,category\n1,A,1,X\n2,B,2,X\n"));
    let response = app.oneshot(get("/menu/combos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_combos_refresh_after_append() {
    let app = build_router(setup_state("id,name,price,category\n1,A,1,X\n2,B,2,X\n"));

    let response = app
        .clone()
        .oneshot(post_json(
            "/items",
            json!({"id": 3, "name": "C", "price": 0.5, "category": "Y"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/menu/combos?count=5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["combos"][0]["items"], json!([3, 1]));
    assert_eq!(body["combos"][0]["total"], 1.5);
}
