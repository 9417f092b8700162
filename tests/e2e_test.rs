use axum::body::Body;
use axum::http::{Request, StatusCode};
use garage_booking_ddd::adapters::mock::{
    CarService, MaintenanceStore, NotificationService, VehicleStatusPublisher, VisitStore,
};
use garage_booking_ddd::api::handlers::AppState;
use garage_booking_ddd::api::router::create_router;
use garage_booking_ddd::application::visit::ServiceDependencies;
use garage_booking_ddd::bootstrap::build_dependencies;
use garage_booking_ddd::config::{AppConfig, StorageBackend};
use garage_booking_ddd::domain::value_objects::*;
use garage_booking_ddd::domain::{MaintenanceRecord, VehicleStatusSignal};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// E2Eテスト用のアプリケーション
///
/// インメモリアダプターと実際のAPIルーターを使用する。
/// 副作用を検証できるよう、アダプターへの参照も保持する。
struct TestApp {
    router: axum::Router,
    visit_store: Arc<VisitStore>,
    car_service: Arc<CarService>,
    maintenance_store: Arc<MaintenanceStore>,
    notification_service: Arc<NotificationService>,
    status_publisher: Arc<VehicleStatusPublisher>,
}

fn setup_e2e_app() -> TestApp {
    let visit_store = Arc::new(VisitStore::new());
    let car_service = Arc::new(CarService::new());
    let maintenance_store = Arc::new(MaintenanceStore::new());
    let notification_service = Arc::new(NotificationService::new());
    let status_publisher = Arc::new(VehicleStatusPublisher::new());

    let service_deps = ServiceDependencies {
        visit_store: visit_store.clone(),
        maintenance_store: maintenance_store.clone(),
        car_service: car_service.clone(),
        notification_service: notification_service.clone(),
        status_publisher: status_publisher.clone(),
    };

    let app_state = Arc::new(AppState { service_deps });

    TestApp {
        router: create_router(app_state),
        visit_store,
        car_service,
        maintenance_store,
        notification_service,
        status_publisher,
    }
}

/// リクエストを送信し、ステータスとJSONボディを返す
async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    user: Option<UserId>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user.value().to_string());
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

fn booking_request(car_id: CarId, start: &str) -> Value {
    json!({
        "car_id": car_id.value(),
        "start": start,
        "description": "Brake check",
        "_token": "form-token",
    })
}

// ============================================================================
// E2Eテスト: 正常系フロー
// ============================================================================

#[tokio::test]
async fn test_e2e_full_visit_flow() {
    // Arrange
    let app = setup_e2e_app();
    let user = UserId::new();
    let car_id = app.car_service.add_car(user, "GA-001");
    app.maintenance_store.add_record(MaintenanceRecord {
        maintenance_id: MaintenanceId::new(),
        car_id,
        status: MaintenanceStatus::Open,
        finish_date: None,
    });

    // Step 1: 予約登録（POST /visits）
    let (status, body) = send(
        &app,
        "POST",
        "/visits",
        Some(user),
        Some(booking_request(car_id, "2099-03-01T10:00:00Z")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["outcome"], "visit_booked");
    assert_eq!(body["message_key"], "done-visit-booked");
    assert_eq!(body["severity"], "success");
    assert_eq!(body["redirect_to"], "/visits");
    let visit_id = body["visit_id"].as_str().unwrap().to_string();

    // Step 2: 予約詳細（GET /visits/:id）
    let (status, body) = send(&app, "GET", &format!("/visits/{}", visit_id), Some(user), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["visit_id"], visit_id.as_str());
    assert_eq!(body["car_id"], car_id.value().to_string());
    assert_eq!(body["start"], "2099-03-01T10:00:00Z");
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["status_code"], 1);
    assert_eq!(body["description"], "Brake check");

    // Step 3: 今後の予約一覧（GET /visits）
    let (status, body) = send(&app, "GET", "/visits", Some(user), None).await;

    assert_eq!(status, StatusCode::OK);
    let visits = body.as_array().unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0]["visit_id"], visit_id.as_str());

    // Step 4: キャンセル（POST /visits/:id/cancel）
    let (status, body) = send(
        &app,
        "POST",
        &format!("/visits/{}/cancel", visit_id),
        Some(user),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "visit_booking_revoked");
    assert_eq!(body["message_key"], "visit-booking-revoked");
    assert_eq!(body["severity"], "success");
    assert_eq!(body["redirect_to"], "/visits");

    // Assert: 副作用の確認
    assert!(app.visit_store.is_empty());
    assert_eq!(app.notification_service.sent().len(), 1);
    assert_eq!(
        app.status_publisher.published(),
        vec![
            VehicleStatusSignal::new(car_id, VehicleStatus::VisitBooked),
            VehicleStatusSignal::new(car_id, VehicleStatus::Available),
            VehicleStatusSignal::new(car_id, VehicleStatus::InProgress),
        ]
    );

    // キャンセル後の一覧は空
    let (status, body) = send(&app, "GET", "/visits", Some(user), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_e2e_booking_options() {
    let app = setup_e2e_app();
    let user = UserId::new();
    let other = UserId::new();
    let car_id = app.car_service.add_car(user, "OPT-1");
    let other_car = app.car_service.add_car(other, "OPT-2");

    let (status, _) = send(
        &app,
        "POST",
        "/visits",
        Some(other),
        Some(booking_request(other_car, "2099-04-01T09:00:00Z")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", "/visits/new", Some(user), None).await;

    assert_eq!(status, StatusCode::OK);
    let cars = body["cars"].as_array().unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0]["car_id"], car_id.value().to_string());
    assert_eq!(cars[0]["licence_plate"], "OPT-1");
    assert_eq!(body["maintenance_types"], json!([]));
    assert_eq!(body["booked_slots"], json!(["2099-04-01T09:00:00Z"]));
}

#[tokio::test]
async fn test_e2e_memory_backend_books_seeded_car() {
    // Arrange: 起動時と同じ手順で、シード付きのインメモリ構成を組み立てる
    let user = UserId::new();
    let car_id = CarId::new();
    let seed_cars = format!("{}:{}:SEED-01", car_id.value(), user.value());
    let config = AppConfig::from_lookup(|key| match key {
        "VISIT_STORAGE" => Some("memory".to_string()),
        "MEMORY_SEED_CARS" => Some(seed_cars.clone()),
        "MEMORY_SEED_MAINTENANCE_TYPES" => Some("Oil change,Brake check".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.storage, StorageBackend::Memory);

    let service_deps = build_dependencies(&config).await.unwrap();
    let router = create_router(Arc::new(AppState { service_deps }));

    let call = |method: &str, uri: String, body: Option<Value>| {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-user-id", user.value().to_string());
        let body = match body {
            Some(body) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_string(&body).unwrap())
            }
            None => Body::empty(),
        };
        router.clone().oneshot(builder.body(body).unwrap())
    };

    // Step 1: 予約フォームにシードした車両と整備種別が出る
    let response = call("GET", "/visits/new".to_string(), None).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(
        &axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap(),
    )
    .unwrap();
    assert_eq!(body["cars"][0]["car_id"], car_id.value().to_string());
    let names: Vec<_> = body["maintenance_types"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Brake check", "Oil change"]);

    // Step 2: シードした車両で予約できる
    let response = call(
        "POST",
        "/visits".to_string(),
        Some(json!({
            "car_id": car_id.value(),
            "start": "2099-01-01T10:00:00Z",
            "maintenance_type_id": body["maintenance_types"][0]["maintenance_type_id"],
        })),
    )
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Step 3: 一覧に表示される
    let response = call("GET", "/visits".to_string(), None).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_slice(
        &axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap(),
    )
    .unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["car_id"], car_id.value().to_string());
}

#[tokio::test]
async fn test_e2e_health_check_without_user() {
    let app = setup_e2e_app();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// E2Eテスト: エラーケース
// ============================================================================

#[tokio::test]
async fn test_e2e_book_visit_slot_unavailable() {
    // Arrange: 先に別のユーザーが同じ枠を予約
    let app = setup_e2e_app();
    let first = UserId::new();
    let second = UserId::new();
    let first_car = app.car_service.add_car(first, "SLOT-1");
    let second_car = app.car_service.add_car(second, "SLOT-2");

    let (status, _) = send(
        &app,
        "POST",
        "/visits",
        Some(first),
        Some(booking_request(first_car, "2099-05-01T10:00:00Z")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Act
    let (status, body) = send(
        &app,
        "POST",
        "/visits",
        Some(second),
        Some(booking_request(second_car, "2099-05-01T10:00:00Z")),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["outcome"], "time_unavailable");
    assert_eq!(body["message_key"], "error-time-unavailable");
    assert_eq!(body["severity"], "danger");
    assert_eq!(body["redirect_to"], "/visits");
    assert!(body.get("visit_id").is_none());

    assert_eq!(app.visit_store.len(), 1);
    assert_eq!(app.notification_service.sent().len(), 1);
    assert_eq!(app.status_publisher.published().len(), 1);
}

#[tokio::test]
async fn test_e2e_book_visit_unknown_car() {
    let app = setup_e2e_app();

    let (status, body) = send(
        &app,
        "POST",
        "/visits",
        Some(UserId::new()),
        Some(booking_request(CarId::new(), "2099-05-02T10:00:00Z")),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "CAR_NOT_FOUND");
    assert!(app.visit_store.is_empty());
}

#[tokio::test]
async fn test_e2e_book_visit_with_other_users_car() {
    let app = setup_e2e_app();
    let owner = UserId::new();
    let car_id = app.car_service.add_car(owner, "NOT-YOURS");

    let (status, body) = send(
        &app,
        "POST",
        "/visits",
        Some(UserId::new()),
        Some(booking_request(car_id, "2099-05-03T10:00:00Z")),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "CAR_NOT_FOUND");
    assert!(app.visit_store.is_empty());
    assert!(app.status_publisher.published().is_empty());
    assert!(app.notification_service.sent().is_empty());
}

#[tokio::test]
async fn test_e2e_cancel_nonexistent_visit() {
    let app = setup_e2e_app();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/visits/{}/cancel", VisitId::new().value()),
        Some(UserId::new()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["outcome"], "visit_not_found");
    assert_eq!(body["message_key"], "visit-not-found");
    assert_eq!(body["severity"], "danger");
    assert_eq!(body["redirect_to"], "/visits");
    assert!(app.status_publisher.published().is_empty());
}

#[tokio::test]
async fn test_e2e_other_users_visit_is_hidden() {
    // Arrange
    let app = setup_e2e_app();
    let owner = UserId::new();
    let stranger = UserId::new();
    let car_id = app.car_service.add_car(owner, "HIDE-1");

    let (_, body) = send(
        &app,
        "POST",
        "/visits",
        Some(owner),
        Some(booking_request(car_id, "2099-06-01T10:00:00Z")),
    )
    .await;
    let visit_id = body["visit_id"].as_str().unwrap().to_string();

    // Act & Assert: 詳細取得は汎用の404
    let (status, body) = send(
        &app,
        "GET",
        &format!("/visits/{}", visit_id),
        Some(stranger),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    // キャンセルも汎用の404で、予約は残る
    let (status, body) = send(
        &app,
        "POST",
        &format!("/visits/{}/cancel", visit_id),
        Some(stranger),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(app.visit_store.len(), 1);

    // 他人の一覧には表示されない
    let (status, body) = send(&app, "GET", "/visits", Some(stranger), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_e2e_requires_current_user() {
    let app = setup_e2e_app();

    let (status, body) = send(&app, "GET", "/visits", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHENTICATED");

    let (status, _) = send(
        &app,
        "POST",
        "/visits",
        None,
        Some(booking_request(CarId::new(), "2099-07-01T10:00:00Z")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(app.visit_store.is_empty());
}

#[tokio::test]
async fn test_e2e_invalid_user_header() {
    let app = setup_e2e_app();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/visits")
                .header("x-user-id", "not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_e2e_invalid_visit_id() {
    let app = setup_e2e_app();

    let (status, _) = send(&app, "GET", "/visits/not-a-uuid", Some(UserId::new()), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
