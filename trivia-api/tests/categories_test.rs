mod common;

use actix_web::test;
use common::{insert_question, insert_questions, seed_categories, setup_test_app};
use serde_json::Value;

#[actix_rt::test]
async fn test_list_categories_ordered_by_id() {
    let test_app = setup_test_app().await.unwrap();
    seed_categories(&test_app.storage).await.unwrap();

    let req = test::TestRequest::get().uri("/categories").to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert_eq!(resp.status(), 200);

    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains(
        r#""categories":{"1":"Science","2":"Art","3":"Geography","4":"History","5":"Entertainment","6":"Sports"}"#
    ));

    let json: Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["success"], true);
}

#[actix_rt::test]
async fn test_list_categories_empty_is_not_found() {
    let test_app = setup_test_app().await.unwrap();

    let req = test::TestRequest::get().uri("/categories").to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "resource not found");
}

#[actix_rt::test]
async fn test_questions_by_category() {
    let test_app = setup_test_app().await.unwrap();
    seed_categories(&test_app.storage).await.unwrap();
    insert_questions(&test_app.storage, 3, "1").await.unwrap();
    insert_question(&test_app.storage, "Who painted the Mona Lisa?", "2")
        .await
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/categories/1/questions")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 3);
    assert_eq!(body["current_category"], 1);

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert!(questions.iter().all(|q| q["category"] == "1"));
}

#[actix_rt::test]
async fn test_questions_by_category_without_questions() {
    let test_app = setup_test_app().await.unwrap();
    seed_categories(&test_app.storage).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/categories/1000/questions")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["questions"].as_array().unwrap().len(), 0);
    assert_eq!(body["current_category"], 1000);
}

#[actix_rt::test]
async fn test_questions_by_category_with_large_ids() {
    let test_app = setup_test_app().await.unwrap();
    seed_categories(&test_app.storage).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/categories/4294967296/questions")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["current_category"], 4294967296_i64);

    let req = test::TestRequest::get()
        .uri("/categories/99999999999999999999/questions")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_questions_by_category_non_numeric_id() {
    let test_app = setup_test_app().await.unwrap();
    seed_categories(&test_app.storage).await.unwrap();

    let req = test::TestRequest::get()
        .uri("/categories/science/questions")
        .to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], 404);
}

#[actix_rt::test]
async fn test_categories_rejects_post() {
    let test_app = setup_test_app().await.unwrap();

    let req = test::TestRequest::post().uri("/categories").to_request();
    let resp = test::call_service(&test_app.app, req).await;

    assert_eq!(resp.status(), 405);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 405);
    assert_eq!(body["message"], "method not allowed");
}
