use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use ul_api::{configure_routes, AppState};
use ul_core::{MemoryKvStore, RecommendationStore, StoreOptions};

async fn state() -> web::Data<AppState> {
    let store = RecommendationStore::open(Arc::new(MemoryKvStore::new()), StoreOptions::default())
        .await
        .unwrap();
    web::Data::new(AppState::new(store))
}

macro_rules! app {
    ($data:expr) => {
        test::init_service(App::new().app_data($data.clone()).configure(configure_routes)).await
    };
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn creating_requires_a_viewer() {
    let data = state().await;
    let app = app!(data);

    let body = json!({"title": "Tacos", "category": "food", "rating": 5, "image": "/t.jpg"});
    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/recommendations")
        .insert_header(("x-user-name", "Ana"))
        .insert_header(("x-user-avatar", "/ana.png"))
        .set_json(&body)
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["author"], json!({"name": "Ana", "avatar": "/ana.png"}));
    assert_eq!(created["liked"], false);

    let req = test::TestRequest::get().uri("/api/users/Ana/recommendations").to_request();
    let mine: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&mine), [created["id"].as_str().unwrap()]);
}

#[actix_web::test]
async fn create_rejects_bad_input() {
    let data = state().await;
    let app = app!(data);

    for body in [
        json!({"title": "Tacos", "category": "food", "rating": 4.2, "image": "/t.jpg"}),
        json!({"title": "Tacos", "category": "food", "rating": 4, "image": ""}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/recommendations")
            .insert_header(("x-user-name", "Ana"))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn only_the_author_may_edit_or_delete() {
    let data = state().await;
    let app = app!(data);

    let req = test::TestRequest::patch()
        .uri("/api/recommendations/1")
        .insert_header(("x-user-name", "Mike Johnson"))
        .set_json(json!({"title": "Mine now"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::patch()
        .uri("/api/recommendations/1")
        .insert_header(("x-user-name", "Sarah Chen"))
        .set_json(json!({"title": "Best Coffee Uptown", "rating": 4.5}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["title"], "Best Coffee Uptown");
    assert_eq!(updated["rating"], 4.5);

    // the full edit form resends the seed's 4.9 rating untouched
    let req = test::TestRequest::patch()
        .uri("/api/recommendations/2")
        .insert_header(("x-user-name", "Mike Johnson"))
        .set_json(json!({
            "title": "Riverside Park",
            "category": "parks",
            "description": "Trails and river views.",
            "location": "Riverside",
            "rating": 4.9,
            "image": "/park.jpg"
        }))
        .to_request();
    let edited: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(edited["title"], "Riverside Park");
    assert_eq!(edited["rating"], 4.9);

    // bare-name authors are matched too
    let req = test::TestRequest::delete()
        .uri("/api/recommendations/3")
        .insert_header(("x-user-name", "Emma Davis"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/api/recommendations/3").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn liking_reorders_the_feed() {
    let data = state().await;
    let app = app!(data);

    let req = test::TestRequest::get().uri("/api/recommendations/feed").to_request();
    let cold: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&cold), ["1", "2", "3"]);
    assert!(cold[0].get("score").is_none());

    let req = test::TestRequest::post().uri("/api/recommendations/3/like").to_request();
    let liked: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(liked["liked"], true);

    let req = test::TestRequest::get().uri("/api/recommendations/feed").to_request();
    let warm: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&warm)[0], "3");
    assert_eq!(warm[0]["liked"], true);

    let req = test::TestRequest::get().uri("/api/recommendations/liked").to_request();
    let liked_list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&liked_list), ["3"]);
}

#[actix_web::test]
async fn comments_thread_and_count() {
    let data = state().await;
    let app = app!(data);

    for text in ["first!", "second"] {
        let req = test::TestRequest::post()
            .uri("/api/recommendations/2/comments")
            .insert_header(("x-user-name", "Bo"))
            .set_json(json!({"content": text}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/recommendations/2/comments").to_request();
    let thread: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(thread[0]["content"], "first!");
    assert_eq!(thread[1]["content"], "second");
    assert_eq!(thread[0]["author"]["avatar"], ul_core::PLACEHOLDER_AVATAR);

    let req = test::TestRequest::get().uri("/api/recommendations/2").to_request();
    let card: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(card["commentCount"], 2);

    let req = test::TestRequest::post()
        .uri("/api/recommendations/missing/comments")
        .insert_header(("x-user-name", "Bo"))
        .set_json(json!({"content": "hello?"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn search_filters_by_text_and_category() {
    let data = state().await;
    let app = app!(data);

    let req = test::TestRequest::get().uri("/api/recommendations?q=yoga").to_request();
    let hits: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&hits), ["3"]);

    let req = test::TestRequest::get().uri("/api/recommendations?category=parks").to_request();
    let hits: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&hits), ["2"]);

    let req = test::TestRequest::get().uri("/api/recommendations?category=&q=").to_request();
    let everything: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&everything), ["1", "2", "3"]);

    let req = test::TestRequest::get().uri("/api/services?category=education").to_request();
    let listings: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&listings), ["6", "15"]);
}

#[actix_web::test]
async fn views_count_once_per_post() {
    let data = state().await;
    let app = app!(data);

    for expected in [true, false] {
        let req = test::TestRequest::post().uri("/api/recommendations/1/view").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["firstView"], expected);
    }

    let store = data.store.read().await;
    assert_eq!(store.interactions().unwrap().preference(ul_core::Category::Food), 1);
}

#[actix_web::test]
async fn profile_needs_a_viewer_and_sums_activity() {
    let data = state().await;
    let app = app!(data);

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/recommendations/1/comments")
        .insert_header(("x-user-name", "Bo"))
        .set_json(json!({"content": "great coffee"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/profile")
        .insert_header(("x-user-name", "Sarah Chen"))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile["postCount"], 1);
    assert_eq!(profile["commentsReceived"], 1);
    assert_eq!(ids(&profile["posts"]), ["1"]);
}

#[actix_web::test]
async fn uninitialized_store_answers_503() {
    let store = RecommendationStore::new(Arc::new(MemoryKvStore::new()), StoreOptions::default());
    let data = web::Data::new(AppState::new(store));
    let app = app!(data);

    let req = test::TestRequest::get().uri("/api/recommendations").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
