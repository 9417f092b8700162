use thiserror::Error;

use super::flash::FlashMessage;

/// 来店予約アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum VisitApplicationError {
    /// 予約が存在しない、または予約者本人ではない
    ///
    /// 他人の予約の存在を漏らさないため、両者を区別せずに返す。
    #[error("Not found")]
    NotFound,

    /// キャンセル時に予約が存在しない
    #[error("Visit not found")]
    VisitNotFound,

    /// 指定した日時は既に予約済み
    #[error("Requested time is unavailable")]
    SlotUnavailable,

    /// 予約対象の車両が存在しない、または現在のユーザーの車両ではない
    #[error("Car not found")]
    CarNotFound,

    /// VisitStoreのエラー
    #[error("Visit store error")]
    VisitStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MaintenanceStoreのエラー
    #[error("Maintenance store error")]
    MaintenanceStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// CarServiceのエラー
    #[error("Car service error")]
    CarServiceError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// NotificationServiceのエラー
    #[error("Notification service error")]
    NotificationError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// VehicleStatusPublisherのエラー
    #[error("Vehicle status publisher error")]
    StatusPublisherError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl VisitApplicationError {
    /// 利用者に表示するフラッシュメッセージ
    ///
    /// フラッシュを持たないエラーは汎用のエラーレスポンスとして扱われる。
    pub fn flash(&self) -> Option<FlashMessage> {
        match self {
            VisitApplicationError::SlotUnavailable => Some(FlashMessage::time_unavailable()),
            VisitApplicationError::VisitNotFound => Some(FlashMessage::visit_not_found()),
            _ => None,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, VisitApplicationError>;
