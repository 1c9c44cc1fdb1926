mod common;

use actix_web::{http::StatusCode, test};
use sea_orm::EntityTrait;
use serde_json::{Value, json};

use tube_backend::create_app;
use tube_backend::models::users::Role;
use tube_backend::models::{comments, likes, videos};

use common::{bearer, create_user, setup};

fn video_payload(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A short clip",
        "video_url": "https://cdn.example.com/clip.mp4"
    })
}

#[actix_web::test]
async fn test_upload_requires_creator_or_admin() {
    let ctx = setup().await;
    let viewer = create_user(&ctx, "viewer", Role::Viewer).await;
    let creator = create_user(&ctx, "creator", Role::Creator).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let req = test::TestRequest::post()
        .uri("/videos")
        .insert_header(bearer(&viewer.token))
        .set_json(video_payload("Forbidden clip"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::post()
        .uri("/videos")
        .insert_header(bearer(&creator.token))
        .set_json(video_payload("My first clip"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "My first clip");
    assert_eq!(body["uploader_id"], creator.id);
    assert!(body["thumbnail_url"].is_null());
    assert!(body["upload_time"].is_string());
}

#[actix_web::test]
async fn test_upload_rejects_invalid_url() {
    let ctx = setup().await;
    let creator = create_user(&ctx, "creator", Role::Creator).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let req = test::TestRequest::post()
        .uri("/videos")
        .insert_header(bearer(&creator.token))
        .set_json(json!({ "title": "Bad", "video_url": "not a url" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn test_list_and_get_videos() {
    let ctx = setup().await;
    let creator = create_user(&ctx, "creator", Role::Creator).await;
    let admin = create_user(&ctx, "admin", Role::Admin).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let mut ids = Vec::new();
    for (user, title) in [(&creator, "one"), (&creator, "two"), (&admin, "three")] {
        let req = test::TestRequest::post()
            .uri("/videos")
            .insert_header(bearer(&user.token))
            .set_json(video_payload(title))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::get().uri("/videos").to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 3);

    let req = test::TestRequest::get()
        .uri(&format!("/videos/uploader/{}", creator.id))
        .to_request();
    let mine: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|v| v["uploader_id"] == creator.id));

    let req = test::TestRequest::get()
        .uri(&format!("/videos/{}", ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let detail: Value = test::read_body_json(resp).await;
    assert_eq!(detail["title"], "one");
    assert_eq!(detail["uploader"]["username"], "creator");
    assert_eq!(detail["comments"], json!([]));
    assert_eq!(detail["liked_by"], json!([]));

    let req = test::TestRequest::get().uri("/videos/4242").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_toggle_like_twice_returns_to_not_liked() {
    let ctx = setup().await;
    let creator = create_user(&ctx, "creator", Role::Creator).await;
    let viewer = create_user(&ctx, "viewer", Role::Viewer).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let req = test::TestRequest::post()
        .uri("/videos")
        .insert_header(bearer(&creator.token))
        .set_json(video_payload("likeable"))
        .to_request();
    let video: Value = test::call_and_read_body_json(&app, req).await;
    let like_uri = format!("/videos/{}/like", video["id"]);

    let req = test::TestRequest::post()
        .uri(&like_uri)
        .insert_header(bearer(&viewer.token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["liked"], true);
    assert_eq!(body["message"], "Video liked successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/videos/{}", video["id"]))
        .to_request();
    let detail: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(detail["liked_by"][0]["id"], viewer.id);

    let req = test::TestRequest::post()
        .uri(&like_uri)
        .insert_header(bearer(&viewer.token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["liked"], false);
    assert_eq!(body["message"], "Video unliked successfully");

    let remaining = likes::Entity::find().all(&ctx.db).await.unwrap();
    assert!(remaining.is_empty());

    let req = test::TestRequest::post()
        .uri("/videos/4242/like")
        .insert_header(bearer(&viewer.token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_delete_video_permissions_and_cascade() {
    let ctx = setup().await;
    let owner = create_user(&ctx, "owner", Role::Creator).await;
    let other = create_user(&ctx, "other", Role::Creator).await;
    let viewer = create_user(&ctx, "viewer", Role::Viewer).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let req = test::TestRequest::post()
        .uri("/videos")
        .insert_header(bearer(&owner.token))
        .set_json(video_payload("doomed"))
        .to_request();
    let video: Value = test::call_and_read_body_json(&app, req).await;
    let video_id = video["id"].as_i64().unwrap() as i32;

    let req = test::TestRequest::post()
        .uri("/comments")
        .insert_header(bearer(&viewer.token))
        .set_json(json!({ "video_id": video_id, "content": "first!" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );

    let req = test::TestRequest::post()
        .uri(&format!("/videos/{}/like", video_id))
        .insert_header(bearer(&viewer.token))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/users/watchlater/{}", video_id))
        .insert_header(bearer(&viewer.token))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/videos/{}", video_id))
        .insert_header(bearer(&other.token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/videos/{}", video_id))
        .insert_header(bearer(&owner.token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    assert!(videos::Entity::find_by_id(video_id).one(&ctx.db).await.unwrap().is_none());
    assert!(comments::Entity::find().all(&ctx.db).await.unwrap().is_empty());
    assert!(likes::Entity::find().all(&ctx.db).await.unwrap().is_empty());

    let req = test::TestRequest::delete()
        .uri(&format!("/videos/{}", video_id))
        .insert_header(bearer(&owner.token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_admin_can_delete_any_video() {
    let ctx = setup().await;
    let owner = create_user(&ctx, "owner", Role::Creator).await;
    let admin = create_user(&ctx, "admin", Role::Admin).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let req = test::TestRequest::post()
        .uri("/videos")
        .insert_header(bearer(&owner.token))
        .set_json(video_payload("moderated"))
        .to_request();
    let video: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/videos/{}", video["id"]))
        .insert_header(bearer(&admin.token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
}
