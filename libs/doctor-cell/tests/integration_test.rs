use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use serde_json::{json, Value};
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, query_param, body_partial_json};

use doctor_cell::router::doctor_routes;
use shared_utils::test_utils::{TestConfig, MockSupabaseResponses};

fn create_test_app(mock_server: &MockServer) -> Router {
    doctor_routes(TestConfig::with_url(&mock_server.uri()).to_arc())
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn setup_doctor_list(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::doctor_response(1, "د. أحمد", "القلب", Some("صباحي")),
            MockSupabaseResponses::doctor_response(2, "د. منى", "أطفال", Some("مسائي")),
            MockSupabaseResponses::doctor_response(3, "د. أحمد سالم", "عيون", None),
        ])))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_list_doctors_filters_by_category() {
    let mock_server = MockServer::start().await;
    setup_doctor_list(&mock_server).await;
    let app = create_test_app(&mock_server);

    let request = Request::builder()
        .method("GET")
        .uri("/?category=%D8%A3%D8%B7%D9%81%D8%A7%D9%84")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json_response = read_json(response).await;
    assert_eq!(json_response["total"], 1);
    assert_eq!(json_response["doctors"][0]["name"], "د. منى");
}

#[tokio::test]
async fn test_list_doctors_searches_names() {
    let mock_server = MockServer::start().await;
    setup_doctor_list(&mock_server).await;
    let app = create_test_app(&mock_server);

    // "أحمد"
    let request = Request::builder()
        .method("GET")
        .uri("/?search=%D8%A3%D8%AD%D9%85%D8%AF")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let json_response = read_json(response).await;
    assert_eq!(json_response["total"], 2);
}

#[tokio::test]
async fn test_list_doctors_degrades_to_empty_on_store_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(500).set_body_json(
            MockSupabaseResponses::error_response("boom", "XX000"),
        ))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server);
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["total"], 0);
}

#[tokio::test]
async fn test_featured_doctors_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("home_page_order", "not.is.null"))
        .and(query_param("limit", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::doctor_response(4, "د. هدى", "نساء وولادة", None),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server);
    let request = Request::builder().uri("/featured").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["doctors"][0]["id"], 4);
}

#[tokio::test]
async fn test_get_doctor_offers_only_evening_for_evening_shift() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("id", "eq.2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::doctor_response(2, "د. منى", "أطفال", Some("مسائي من 4 إلى 8")),
        ])))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server);
    let request = Request::builder().uri("/2").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json_response = read_json(response).await;
    assert_eq!(json_response["name"], "د. منى");
    assert_eq!(json_response["periods"], json!([
        { "id": "evening", "label": "الفترة المسائية (4:00 م - 8:00 م)" }
    ]));
    assert_eq!(json_response["qualifications_list"], json!(["بكالوريوس طب وجراحة", "ماجستير"]));
}

#[tokio::test]
async fn test_get_doctor_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server);
    let request = Request::builder().uri("/99").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quick_booking_requires_name_and_phone() {
    let mock_server = MockServer::start().await;
    let app = create_test_app(&mock_server);

    let request = Request::builder()
        .method("POST")
        .uri("/1/quick-booking")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "name": "سالم", "phone": "  " }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(response).await["error"], "يرجى كتابة الاسم ورقم الهاتف لإتمام الحجز");
}

#[tokio::test]
async fn test_quick_booking_inserts_pending_appointment() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("id", "eq.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::doctor_response(1, "أحمد", "القلب", None),
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/appointments"))
        .and(body_partial_json(json!([{
            "patient_name": "سالم",
            "phone_number": "777123456",
            "doctor_id": 1,
            "status": "pending",
            "appointment_date": null
        }])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            { "id": 10, "patient_name": "سالم", "doctor_id": 1, "status": "pending" }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = create_test_app(&mock_server);
    let request = Request::builder()
        .method("POST")
        .uri("/1/quick-booking")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "name": "سالم", "phone": "777123456" }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json_response = read_json(response).await;
    assert_eq!(json_response["appointment"]["id"], 10);
    assert!(json_response["message"].as_str().unwrap().contains("أحمد"));
}
