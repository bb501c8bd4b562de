// HTTP scenario tests for the /products routes over in-memory storage

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use helpers::{test_app, TestDataFactory};
use pluto::products::models::ProductResponse;

#[actix_web::test]
async fn test_negative_price_update_is_rejected() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(TestDataFactory::product_payload("Pen", "1.50"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let pen: ProductResponse = test::read_body_json(resp).await;
    assert_eq!(pen.id, Some(1));
    assert_eq!(pen.price, dec!(1.50));
    assert_eq!(pen.status, "active");

    let req = test::TestRequest::patch()
        .uri("/products/1/price")
        .set_json(json!({"price": -5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);

    let req = test::TestRequest::get().uri("/products/1").to_request();
    let stored: ProductResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored.price, dec!(1.50));
}

#[actix_web::test]
async fn test_create_rejects_non_positive_price() {
    let app = test::init_service(test_app()).await;

    for price in [json!(0), json!("-0.01"), json!(-3)] {
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({"name": "Pen", "price": price}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    let req = test::TestRequest::get().uri("/products").to_request();
    let products: Vec<ProductResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(products.is_empty());
}

#[actix_web::test]
async fn test_price_is_exact_and_serialized_as_string() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(TestDataFactory::product_payload("Notebook", "19.99"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["price"], "19.99");
    assert!(body["description"].is_null());
}

#[actix_web::test]
async fn test_update_deactivate_and_delete() {
    let app = test::init_service(test_app()).await;

    for (name, price) in [("Pen", "1.50"), ("Ink", "4.25")] {
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(TestDataFactory::product_payload(name, price))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::put()
        .uri("/products/1")
        .set_json(json!({"name": "Gel Pen", "price": "2.10", "description": "Black"}))
        .to_request();
    let replaced: ProductResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(replaced.name, "Gel Pen");
    assert_eq!(replaced.price, dec!(2.10));
    assert_eq!(replaced.description.as_deref(), Some("Black"));

    let req = test::TestRequest::patch()
        .uri("/products/1")
        .set_json(json!({"description": "Blue"}))
        .to_request();
    let patched: ProductResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(patched.name, "Gel Pen");
    assert_eq!(patched.description.as_deref(), Some("Blue"));

    let req = test::TestRequest::patch()
        .uri("/products/1")
        .set_json(json!({"price": "2.20"}))
        .to_request();
    let repriced: ProductResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(repriced.description.as_deref(), Some("Blue"));

    let req = test::TestRequest::patch()
        .uri("/products/1")
        .set_json(json!({"description": null}))
        .to_request();
    let cleared: ProductResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cleared.description, None);
    assert_eq!(cleared.price, dec!(2.20));

    let req = test::TestRequest::patch()
        .uri("/products/1")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete().uri("/products/2/soft").to_request();
    let ink: ProductResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ink.status, "inactive");

    let req = test::TestRequest::get()
        .uri("/products?status=inactive")
        .to_request();
    let inactive: Vec<ProductResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].name, "Ink");

    let req = test::TestRequest::get()
        .uri("/products?status=inactive&offset=1")
        .to_request();
    let past_end: Vec<ProductResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(past_end.is_empty());

    let req = test::TestRequest::delete().uri("/products/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri("/products/1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::patch()
        .uri("/products/1/price")
        .set_json(json!({"price": "3.00"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_health_routes_share_the_app() {
    let app = test::init_service(test_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "OK");

    let req = test::TestRequest::get().uri("/ready").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
