use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use serde_json::{json, Value};
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{method, path, query_param};

use catalog_cell::router::catalog_routes;
use shared_utils::test_utils::{TestConfig, MockSupabaseResponses};

fn create_test_app(mock_server: &MockServer) -> Router {
    catalog_routes(TestConfig::with_url(&mock_server.uri()).to_arc())
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_scans_page_groups_scans() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/scans"))
        .and(query_param("order", "id.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::named_record(1, "الأشعة المقطعية"),
            MockSupabaseResponses::named_record(2, "الموجات فوق الصوتية للبطن"),
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/equipments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 9, "name": "Siemens CT", "badge": "جديد" }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/gastrointestinal_and_liver_endoscopy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "منظار القولون" }
        ])))
        .mount(&mock_server)
        .await;

    let response = get(create_test_app(&mock_server), "/scans").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json_response = read_json(response).await;
    let groups = json_response["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 5);
    assert_eq!(groups[0]["kind"], "single");
    assert_eq!(groups[0]["id"], 1);
    assert!(groups[0]["image"].as_str().unwrap().ends_with("/storage/v1/object/public/equipment-images/ct-scan.jpg.png"));
    assert_eq!(groups[1]["children"][0]["name"], "منظار القولون");
    assert_eq!(groups[3]["children"], json!([{ "name": "الموجات فوق الصوتية للبطن", "id": 2 }]));
    assert_eq!(json_response["equipments"][0]["badge"], "جديد");
}

#[tokio::test]
async fn test_scans_page_survives_endoscopy_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/scans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockSupabaseResponses::named_record(1, "المقطعية"),
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/equipments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/gastrointestinal_and_liver_endoscopy"))
        .respond_with(ResponseTemplate::new(500).set_body_json(
            MockSupabaseResponses::error_response("boom", "XX000"),
        ))
        .mount(&mock_server)
        .await;

    let response = get(create_test_app(&mock_server), "/scans").await;
    let json_response = read_json(response).await;
    assert_eq!(json_response["groups"][0]["id"], 1);
    assert_eq!(json_response["groups"][1]["children"], json!([]));
}

#[tokio::test]
async fn test_all_tests_filters_and_lists_categories() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/medical_tests_guide"))
        .and(query_param("order", "category.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "CBC", "category": "الدم" },
            { "id": 2, "name": "HbA1c", "category": "السكر" },
            { "id": 3, "name": "ESR", "category": "الدم" }
        ])))
        .mount(&mock_server)
        .await;

    let response = get(create_test_app(&mock_server), "/examinations/all-tests?search=hba").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json_response = read_json(response).await;
    assert_eq!(json_response["total"], 1);
    assert_eq!(json_response["tests"][0]["name"], "HbA1c");
    assert_eq!(json_response["categories"], json!(["الكل", "الدم", "السكر"]));
}

#[tokio::test]
async fn test_examinations_resolve_icons() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/examinations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "المناعة", "icon_class": "Shield", "header_color": "bg-teal-600" },
            { "id": 2, "title": "الهرمونات", "icon_class": "Hormone" }
        ])))
        .mount(&mock_server)
        .await;

    let response = get(create_test_app(&mock_server), "/examinations").await;
    let json_response = read_json(response).await;
    assert_eq!(json_response["examinations"][0]["icon"], "Shield");
    assert_eq!(json_response["examinations"][0]["header_class"], "bg-teal-600");
    assert_eq!(json_response["examinations"][1]["icon"], "Activity");
    assert_eq!(json_response["examinations"][1]["header_class"], "bg-blue-600");
    assert_eq!(json_response["quality_standards"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_package_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/medical_packages"))
        .and(query_param("id", "eq.12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let response = get(create_test_app(&mock_server), "/examinations/packages/12").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await["error"], "الباقة غير موجودة");
}

#[tokio::test]
async fn test_static_pages() {
    let mock_server = MockServer::start().await;

    let response = get(create_test_app(&mock_server), "/examinations/safety-rules").await;
    assert_eq!(read_json(response).await["rules"].as_array().unwrap().len(), 12);

    let response = get(create_test_app(&mock_server), "/about").await;
    let json_response = read_json(response).await;
    assert_eq!(json_response["name"], "مركز المدينة الطبي");
    assert_eq!(json_response["phone"], "777552666");
    assert_eq!(json_response["bank_account"], "123456");
}
