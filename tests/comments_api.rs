mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use tube_backend::create_app;
use tube_backend::models::users::Role;

use common::{bearer, create_user, setup};

#[actix_web::test]
async fn test_comment_lifecycle_between_three_users() {
    let ctx = setup().await;
    let alice = create_user(&ctx, "alice", Role::Creator).await;
    let bob = create_user(&ctx, "bob", Role::Viewer).await;
    let carol = create_user(&ctx, "carol", Role::Viewer).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let req = test::TestRequest::post()
        .uri("/videos")
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "V", "video_url": "https://cdn.example.com/v.mp4" }))
        .to_request();
    let video: Value = test::call_and_read_body_json(&app, req).await;
    let video_id = video["id"].clone();

    let mut comment_ids = Vec::new();
    for content in ["older comment", "newer comment"] {
        let req = test::TestRequest::post()
            .uri("/comments")
            .insert_header(bearer(&bob.token))
            .set_json(json!({ "video_id": video_id, "content": content }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let comment: Value = test::read_body_json(resp).await;
        assert_eq!(comment["user_id"], bob.id);
        comment_ids.push(comment["id"].clone());
    }

    // plus récent d'abord
    let req = test::TestRequest::get()
        .uri(&format!("/comments/video/{}", video_id))
        .to_request();
    let listed: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["content"], "newer comment");
    assert_eq!(listed[1]["content"], "older comment");

    let req = test::TestRequest::get()
        .uri(&format!("/comments/user/{}", bob.id))
        .to_request();
    let by_bob: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(by_bob.len(), 2);

    // carol n'est ni l'auteur ni admin
    let req = test::TestRequest::delete()
        .uri(&format!("/comments/{}", comment_ids[0]))
        .insert_header(bearer(&carol.token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/comments/{}", comment_ids[0]))
        .insert_header(bearer(&bob.token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/comments/{}", comment_ids[0]))
        .insert_header(bearer(&bob.token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_comment_on_missing_video() {
    let ctx = setup().await;
    let bob = create_user(&ctx, "bob", Role::Viewer).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let req = test::TestRequest::post()
        .uri("/comments")
        .insert_header(bearer(&bob.token))
        .set_json(json!({ "video_id": 4242, "content": "hello?" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_edit_comment_author_only() {
    let ctx = setup().await;
    let alice = create_user(&ctx, "alice", Role::Creator).await;
    let admin = create_user(&ctx, "admin", Role::Admin).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let req = test::TestRequest::post()
        .uri("/videos")
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "V", "video_url": "https://cdn.example.com/v.mp4" }))
        .to_request();
    let video: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/comments")
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "video_id": video["id"], "content": "typo" }))
        .to_request();
    let comment: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/comments/{}", comment["id"]);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&admin.token))
        .set_json(json!({ "content": "hijacked" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "content": "fixed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["content"], "fixed");
    assert_eq!(updated["created_at"], comment["created_at"]);

    let req = test::TestRequest::put()
        .uri("/comments/4242")
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "content": "nothing here" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    // l'admin peut supprimer le commentaire d'un autre
    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&admin.token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
}

#[actix_web::test]
async fn test_comment_stats() {
    let ctx = setup().await;
    let alice = create_user(&ctx, "alice", Role::Creator).await;
    let app = test::init_service(create_app(ctx.db.clone(), ctx.keys.clone())).await;

    let req = test::TestRequest::post()
        .uri("/videos")
        .insert_header(bearer(&alice.token))
        .set_json(json!({ "title": "V", "video_url": "https://cdn.example.com/v.mp4" }))
        .to_request();
    let video: Value = test::call_and_read_body_json(&app, req).await;
    let stats_uri = format!("/comments/video/{}/stats", video["id"]);

    let req = test::TestRequest::get().uri(&stats_uri).to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["video_id"], video["id"]);
    assert_eq!(stats["total_comments"], 0);
    assert!(stats["latest_comment"].is_null());
    assert!(stats["latest_comment_time"].is_null());

    for content in ["first", "second"] {
        let req = test::TestRequest::post()
            .uri("/comments")
            .insert_header(bearer(&alice.token))
            .set_json(json!({ "video_id": video["id"], "content": content }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri(&stats_uri).to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["total_comments"], 2);
    assert_eq!(stats["latest_comment"], "second");
    assert!(stats["latest_comment_time"].is_string());
}
