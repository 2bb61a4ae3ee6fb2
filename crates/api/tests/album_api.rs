//! HTTP-level integration tests for the `/api/v1/albums` resource.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use albums_db::repositories::AlbumRepo;
use axum::http::StatusCode;
use common::{
    body_is_empty, body_json, get_auth, id_from_location, location, post_json, post_json_auth,
    token, READ, WRITE,
};
use serde_json::json;
use sqlx::PgPool;

fn cdz_payload() -> serde_json::Value {
    json!({
        "code": "CDZ",
        "name": "Cavaleiros do Zodiaco",
        "stickers": [
            {"description": "Seya", "imageUrl": "http://animes.com/cdz/seya.png"},
            {"description": "Hyoga", "imageUrl": "http://animes.com/cdz/hyoga.png"},
            {"description": "Shiryu", "imageUrl": "http://animes.com/cdz/shiryu.png"}
        ]
    })
}

fn violation_fields(json: &serde_json::Value) -> Vec<String> {
    json["violations"]
        .as_array()
        .expect("violations should be an array")
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_album_returns_201_with_location(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/albums",
        cdz_payload(),
        &token("rponte", &[WRITE]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = location(&response);
    assert!(body_is_empty(response).await);

    let id = id_from_location(&location);
    assert_eq!(location, format!("/api/v1/albums/{id}"));

    let mut conn = pool.acquire().await.unwrap();
    let album = AlbumRepo::find_by_id_with_stickers(&mut conn, id)
        .await
        .unwrap()
        .expect("album should have been persisted");
    assert_eq!(album.album.owner, "rponte");
    assert_eq!(album.album.code, "CDZ");
    let descriptions: Vec<&str> = album
        .stickers
        .iter()
        .map(|s| s.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["Seya", "Hyoga", "Shiryu"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_album_with_empty_sticker_list(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/albums",
        json!({"code": "CDZ", "name": "Empty", "stickers": []}),
        &token("rponte", &[WRITE]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(AlbumRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_invalid_album_returns_400_with_violations(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/albums",
        json!({
            "code": "",
            "name": "",
            "stickers": [
                {"description": "Seya", "imageUrl": "http://animes.com/cdz/seya.png"},
                {"description": "", "imageUrl": "not a url"}
            ]
        }),
        &token("rponte", &[WRITE]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let fields = violation_fields(&json);
    assert!(fields.contains(&"code".to_string()));
    assert!(fields.contains(&"name".to_string()));
    assert!(fields.contains(&"stickers[1].description".to_string()));
    assert!(fields.contains(&"stickers[1].imageUrl".to_string()));
    assert!(!fields.iter().any(|f| f.starts_with("stickers[0]")));

    assert_eq!(AlbumRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_album_without_stickers_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/albums",
        json!({"code": "CDZ", "name": "No list"}),
        &token("rponte", &[WRITE]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(violation_fields(&json), vec!["stickers".to_string()]);
    assert_eq!(json["violations"][0]["message"], "must not be null");
    assert_eq!(AlbumRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_album_with_malformed_json_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/albums")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token("rponte", &[WRITE])))
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = common::send(app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(AlbumRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_album_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/albums", cdz_payload()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(AlbumRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_album_with_garbage_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/albums", cdz_payload(), "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_album_without_write_scope_returns_403(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/albums",
        cdz_payload(),
        &token("rponte", &[READ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(AlbumRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_album_returns_stickers_in_order(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = post_json_auth(
        app,
        "/api/v1/albums",
        cdz_payload(),
        &token("rponte", &[WRITE]),
    )
    .await;
    let location = location(&created);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &location, &token("rponte", &[READ])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["code"], "CDZ");
    assert_eq!(json["data"]["owner"], "rponte");
    assert_eq!(json["data"]["stickers"][0]["description"], "Seya");
    assert_eq!(json["data"]["stickers"][2]["description"], "Shiryu");
    assert_eq!(
        json["data"]["stickers"][1]["imageUrl"],
        "http://animes.com/cdz/hyoga.png"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_album_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/albums/-2022", &token("rponte", &[READ])).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "album not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_album_without_read_scope_returns_403(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/albums/1", &token("rponte", &[WRITE])).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_albums_only_returns_callers_albums(pool: PgPool) {
    for (owner, code) in [("rponte", "CDZ"), ("r.ponte", "DBZ"), ("rponte", "YYH")] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            "/api/v1/albums",
            json!({"code": code, "name": code, "stickers": []}),
            &token(owner, &[WRITE]),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/albums", &token("rponte", &[READ])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let codes: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["YYH", "CDZ"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_album_with_non_numeric_id_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/albums/abc", &token("rponte", &[READ])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}
