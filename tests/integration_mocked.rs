//! Integration tests with mocked external services.
//!
//! The AI provider and the Unsplash search are both stood in for by
//! wiremock servers; the config points every base URL at them so the full
//! request pipeline runs without touching the network.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use rust_travel_api::config::Config;
use rust_travel_api::handlers::{self, AppState};
use rust_travel_api::images::ImageClient;
use rust_travel_api::models::PlanRequest;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(ai_uri: &str, unsplash_uri: &str, unsplash_key: Option<&str>) -> Config {
    Config {
        port: 0,
        ai_api_key: "test-ai-key".to_string(),
        ai_base_url: ai_uri.to_string(),
        ai_model: "gpt-4o-mini".to_string(),
        unsplash_access_key: unsplash_key.map(String::from),
        unsplash_base_url: unsplash_uri.to_string(),
        placeholder_image_base_url: "https://picsum.photos".to_string(),
    }
}

fn chat_completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}}
        ]
    })
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/trip-architect", post(handlers::trip_architect))
        .route("/api/v1/generate-plan", post(handlers::generate_plan))
        .route("/api/v1/spot-discovery", post(handlers::spot_discovery))
        .route("/api/v1/food-discovery", post(handlers::food_discovery))
        .route("/api/v1/places", get(handlers::places))
        .with_state(state)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn food_discovery_end_to_end_with_unsplash() {
    let ai = MockServer::start().await;
    let unsplash = MockServer::start().await;

    let model_output = json!({
        "country": "Georgia",
        "overview": "[MISSING_DATA]",
        "recommendations": [
            {"name": "Khinkali", "description": "Dumplings"},
            {"name": "Khachapuri", "description": "Cheese bread"}
        ],
        "famous_culinary_spots": [
            {"name": "Dezerter Bazaar", "city": "Tbilisi"}
        ]
    });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-ai-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion(&model_output.to_string())),
        )
        .expect(1)
        .mount(&ai)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("per_page", "1"))
        .and(query_param("orientation", "landscape"))
        .and(header("Authorization", "Client-ID unsplash-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"urls": {"regular": "https://images.test/photo-1?auto=format"}}
            ]
        })))
        // Two recommendations plus one culinary spot
        .expect(3)
        .mount(&unsplash)
        .await;

    let state = Arc::new(AppState::new(test_config(
        &ai.uri(),
        &unsplash.uri(),
        Some("unsplash-test-key"),
    )));

    let (status, body) = post_json(
        app(state),
        "/api/v1/food-discovery",
        json!({
            "formData": {"country": "Georgia", "tastes": "Spicy", "budget": "200"},
            "language": "en"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["country"], "Georgia");
    // Sentinels never leak to the client
    assert_eq!(data["overview"], "Data not provided");
    assert!(!body.to_string().contains("[MISSING_DATA]"));

    let recs = data["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 2);
    for rec in recs {
        assert_eq!(
            rec["image_url"],
            "https://images.test/photo-1?auto=format&w=400&h=300&fit=crop"
        );
    }
    let spots = data["famous_culinary_spots"].as_array().unwrap();
    assert_eq!(spots.len(), 1);
    assert!(spots[0]["image_url"].is_string());
}

#[tokio::test]
async fn trip_architect_backfills_country_code_and_builds_gallery() {
    let ai = MockServer::start().await;

    let model_output = json!({
        "recommended_country": "Georgia",
        "reasoning": "Affordable and visa-free",
        "attractions_activities": ["Old Tbilisi", "Kazbegi"]
    });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion(&model_output.to_string())),
        )
        .mount(&ai)
        .await;

    // No Unsplash key configured, so every image is a placeholder
    let state = Arc::new(AppState::new(test_config(&ai.uri(), "http://unused", None)));

    let result = handlers::trip_architect(
        State(state),
        Json(
            serde_json::from_value::<PlanRequest>(json!({
                "formData": {
                    "budget": "1000",
                    "continent": ["Asia", "Europe"],
                    "knownLanguages": [{"language": "English", "level": "B2"}]
                },
                "language": "en"
            }))
            .unwrap(),
        ),
    )
    .await
    .unwrap();

    let data = &result.0["data"];
    assert_eq!(data["recommended_country"], "Georgia");
    assert_eq!(data["country_code"], "GE");

    let gallery = data["gallery_images"].as_array().unwrap();
    assert_eq!(gallery.len(), 2);
    for url in gallery {
        assert!(url.as_str().unwrap().starts_with("https://picsum.photos/seed/"));
        assert!(url.as_str().unwrap().ends_with("/400/300"));
    }
    assert_eq!(data["image_url"], gallery[0]);
    assert_eq!(
        data["gallery_captions"],
        json!(["Old Tbilisi", "Kazbegi"])
    );
}

#[tokio::test]
async fn generate_plan_attaches_hero_and_list_images() {
    let ai = MockServer::start().await;

    let model_output = json!({
        "country_overview": "A classic route",
        "recommended_destinations": [{"name": "Prague"}],
        "attractions": [{"name": "Charles Bridge"}],
        "food_recommendations": [{"restaurant": "Lokal", "dish": "Svickova"}]
    });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion(&model_output.to_string())),
        )
        .mount(&ai)
        .await;

    let state = Arc::new(AppState::new(test_config(&ai.uri(), "http://unused", None)));

    let (status, body) = post_json(
        app(state),
        "/api/v1/generate-plan",
        json!({
            "formData": {"from": "Baku", "to": "Czech Republic", "duration": "5"},
            "language": "ru"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let plan = &body["plan"];
    assert!(plan["hero_image_url"].as_str().unwrap().contains("picsum.photos"));
    assert!(plan["recommended_destinations"][0]["image_url"].is_string());
    assert!(plan["attractions"][0]["image_url"].is_string());
    assert!(plan["food_recommendations"][0]["image_url"].is_string());
}

#[tokio::test]
async fn spot_discovery_tolerates_missing_optional_lists() {
    let ai = MockServer::start().await;

    // No "spots" array at all; the endpoint still answers with an empty list
    let model_output = json!({"country": "Japan", "summary": "Many options"});
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion(&model_output.to_string())),
        )
        .mount(&ai)
        .await;

    let state = Arc::new(AppState::new(test_config(&ai.uri(), "http://unused", None)));

    let (status, body) = post_json(
        app(state),
        "/api/v1/spot-discovery",
        json!({"formData": {"country": "Japan", "interest": "Hiking"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["spots"], json!([]));
}

#[tokio::test]
async fn provider_failure_surfaces_as_500_with_error_body() {
    let ai = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&ai)
        .await;

    let state = Arc::new(AppState::new(test_config(&ai.uri(), "http://unused", None)));

    let (status, body) = post_json(
        app(state),
        "/api/v1/spot-discovery",
        json!({"formData": {"country": "Japan"}}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("429"));
}

#[tokio::test]
async fn unparseable_model_output_surfaces_as_500() {
    let ai = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion("Sorry, I cannot help with that.")),
        )
        .mount(&ai)
        .await;

    let state = Arc::new(AppState::new(test_config(&ai.uri(), "http://unused", None)));

    let (status, body) = post_json(
        app(state),
        "/api/v1/food-discovery",
        json!({"formData": {"country": "Italy"}}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "AI did not return valid JSON");
}

#[tokio::test]
async fn unsplash_miss_falls_back_to_placeholder() {
    let unsplash = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&unsplash)
        .await;

    let config = test_config("http://unused", &unsplash.uri(), Some("key"));
    let images = ImageClient::new(&config);

    let url = images.image_for_query("Kazbegi mountain", 400, 300).await;
    assert!(url.unwrap().starts_with("https://picsum.photos/seed/"));
}

#[tokio::test]
async fn empty_image_query_makes_no_request() {
    let unsplash = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(0)
        .mount(&unsplash)
        .await;

    let config = test_config("http://unused", &unsplash.uri(), Some("key"));
    let images = ImageClient::new(&config);

    assert_eq!(images.image_for_query("", 400, 300).await, None);
    assert_eq!(images.image_for_query("   ", 400, 300).await, None);
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let state = Arc::new(AppState::new(test_config(
        "http://unused",
        "http://unused",
        None,
    )));

    let response = app(state)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}
