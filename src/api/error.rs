use crate::application::visit::VisitApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::{ErrorResponse, OutcomeResponse};

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// フラッシュを持つエラーは操作結果レスポンス、それ以外は汎用のエラーレスポンスになる。
#[derive(Debug)]
pub enum ApiError {
    /// 認証済みユーザーが特定できない
    Unauthenticated,
    Application(VisitApplicationError),
}

impl From<VisitApplicationError> for ApiError {
    fn from(err: VisitApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            ApiError::Unauthenticated => {
                let body = Json(ErrorResponse::new(
                    "UNAUTHENTICATED",
                    "Authenticated user is required",
                ));
                return (StatusCode::UNAUTHORIZED, body).into_response();
            }
            ApiError::Application(err) => err,
        };

        // フラッシュ付きの結果（予約枠の競合、キャンセル対象なし）
        if let Some(flash) = err.flash() {
            let status = match err {
                VisitApplicationError::SlotUnavailable => StatusCode::CONFLICT,
                _ => StatusCode::NOT_FOUND,
            };
            return (status, Json(OutcomeResponse::new(flash))).into_response();
        }

        let (status, error_type, message) = match err {
            // 404 Not Found - 存在しない、または他人の予約
            VisitApplicationError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "Not found"),

            // 422 Unprocessable Entity - ビジネスルール違反
            VisitApplicationError::CarNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "CAR_NOT_FOUND",
                "Car not found",
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            VisitApplicationError::VisitStoreError(ref e) => {
                tracing::error!("Visit store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "VISIT_STORE_ERROR",
                    "Failed to access visits",
                )
            }
            VisitApplicationError::MaintenanceStoreError(ref e) => {
                tracing::error!("Maintenance store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MAINTENANCE_STORE_ERROR",
                    "Failed to access maintenance records",
                )
            }
            VisitApplicationError::CarServiceError(ref e) => {
                tracing::error!("Car service error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CAR_SERVICE_ERROR",
                    "Car service error",
                )
            }
            VisitApplicationError::NotificationError(ref e) => {
                tracing::error!("Notification error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "NOTIFICATION_ERROR",
                    "Failed to send notification",
                )
            }
            VisitApplicationError::StatusPublisherError(ref e) => {
                tracing::error!("Vehicle status publisher error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STATUS_PUBLISHER_ERROR",
                    "Failed to publish vehicle status",
                )
            }

            // フラッシュ付きのエラーは上で処理済み
            VisitApplicationError::SlotUnavailable | VisitApplicationError::VisitNotFound => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An unexpected error occurred",
            ),
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
