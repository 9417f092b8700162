use crate::application::visit::{
    FlashMessage, ServiceDependencies, book_visit as execute_book_visit,
    cancel_visit as execute_cancel_visit, get_booking_options as execute_get_booking_options,
    get_visit as execute_get_visit, list_upcoming_visits as execute_list_upcoming_visits,
};
use crate::domain::value_objects::VisitId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{
    current_user::CurrentUser,
    error::ApiError,
    types::{BookVisitRequest, BookingOptionsResponse, OutcomeResponse, VisitResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /visits - 来店予約を登録
///
/// 強制されるビジネスルール:
/// - 同じ開始日時の予約が存在しないこと（埋まっていれば409とerror-time-unavailable）
/// - 予約対象の車両が存在し、現在のユーザーが所有していること
pub async fn create_visit(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<BookVisitRequest>,
) -> Result<(StatusCode, Json<OutcomeResponse>), ApiError> {
    let cmd = req.to_command();

    let visit_id = execute_book_visit(&state.service_deps, user_id, cmd).await?;

    let response = OutcomeResponse::new(FlashMessage::visit_booked()).with_visit_id(visit_id);
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /visits/:id/cancel - 来店予約をキャンセル
///
/// 予約が存在しない場合は404とvisit-not-found。
/// 他人の予約の場合は存在を漏らさないよう汎用の404。
pub async fn cancel_visit(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(visit_id): Path<Uuid>,
) -> Result<Json<OutcomeResponse>, ApiError> {
    let visit_id = VisitId::from_uuid(visit_id);

    execute_cancel_visit(&state.service_deps, visit_id, user_id).await?;

    Ok(Json(OutcomeResponse::new(
        FlashMessage::visit_booking_revoked(),
    )))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /visits - 今後の予約一覧（当日以降、開始日時の昇順）
pub async fn list_upcoming_visits(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<VisitResponse>>, ApiError> {
    let visits =
        execute_list_upcoming_visits(&state.service_deps, user_id, chrono::Utc::now()).await?;

    Ok(Json(visits.into_iter().map(VisitResponse::from).collect()))
}

/// GET /visits/new - 予約フォームの選択肢
///
/// 自分の車両、整備種別、当日以降に埋まっている開始日時を返す。
pub async fn booking_options(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<BookingOptionsResponse>, ApiError> {
    let options =
        execute_get_booking_options(&state.service_deps, user_id, chrono::Utc::now()).await?;

    Ok(Json(BookingOptionsResponse::from(options)))
}

/// GET /visits/:id - 予約詳細
///
/// 存在しない予約、他人の予約はいずれも404。
pub async fn get_visit(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(visit_id): Path<Uuid>,
) -> Result<Json<VisitResponse>, ApiError> {
    let visit_id = VisitId::from_uuid(visit_id);

    let visit = execute_get_visit(&state.service_deps, visit_id, user_id).await?;

    Ok(Json(VisitResponse::from(visit)))
}
