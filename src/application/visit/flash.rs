use serde::Serialize;

/// 予約登録成功
pub const DONE_VISIT_BOOKED: &str = "done-visit-booked";
/// 指定日時は予約済み
pub const ERROR_TIME_UNAVAILABLE: &str = "error-time-unavailable";
/// 予約キャンセル成功
pub const VISIT_BOOKING_REVOKED: &str = "visit-booking-revoked";
/// キャンセル対象の予約が存在しない
pub const VISIT_NOT_FOUND: &str = "visit-not-found";

/// 操作結果の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    VisitBooked,
    TimeUnavailable,
    VisitBookingRevoked,
    VisitNotFound,
}

/// 表示上の重要度（アラートクラス）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Danger,
}

/// 操作結果のフラッシュメッセージ
///
/// メッセージキーは翻訳キーとして表示層で解決される。
/// 表示方法やリダイレクトは呼び出し側が決める。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub outcome: Outcome,
    pub message_key: &'static str,
    pub severity: Severity,
}

impl FlashMessage {
    pub fn visit_booked() -> Self {
        Self {
            outcome: Outcome::VisitBooked,
            message_key: DONE_VISIT_BOOKED,
            severity: Severity::Success,
        }
    }

    pub fn time_unavailable() -> Self {
        Self {
            outcome: Outcome::TimeUnavailable,
            message_key: ERROR_TIME_UNAVAILABLE,
            severity: Severity::Danger,
        }
    }

    pub fn visit_booking_revoked() -> Self {
        Self {
            outcome: Outcome::VisitBookingRevoked,
            message_key: VISIT_BOOKING_REVOKED,
            severity: Severity::Success,
        }
    }

    pub fn visit_not_found() -> Self {
        Self {
            outcome: Outcome::VisitNotFound,
            message_key: VISIT_NOT_FOUND,
            severity: Severity::Danger,
        }
    }
}
