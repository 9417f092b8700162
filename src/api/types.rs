use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::visit::{BookingOptions, FlashMessage, Outcome, Severity};
use crate::domain::{
    Car, MaintenanceType,
    commands::BookVisit,
    value_objects::{CarId, MaintenanceTypeId, VisitId},
    visit::Visit,
};

/// 操作後に戻る今後の予約一覧
pub const UPCOMING_VISITS_PATH: &str = "/visits";

/// 来店予約リクエスト（POST /visits）
#[derive(Debug, Deserialize)]
pub struct BookVisitRequest {
    pub car_id: Uuid,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub maintenance_type_id: Option<Uuid>,
    #[serde(default)]
    pub description: Option<String>,
    /// フォームの偽造防止トークン。受け取るだけで永続化しない。
    #[serde(rename = "_token", default)]
    pub token: Option<String>,
}

impl BookVisitRequest {
    pub fn to_command(&self) -> BookVisit {
        BookVisit {
            car_id: CarId::from_uuid(self.car_id),
            start: self.start,
            maintenance_type_id: self.maintenance_type_id.map(MaintenanceTypeId::from_uuid),
            description: self.description.clone(),
        }
    }
}

/// 予約レスポンス（GET /visits/:id と GET /visits）
#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub visit_id: Uuid,
    pub car_id: Uuid,
    pub start: DateTime<Utc>,
    pub status: String,
    pub status_code: i16,
    pub maintenance_type_id: Option<Uuid>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Visit> for VisitResponse {
    fn from(visit: Visit) -> Self {
        Self {
            visit_id: visit.visit_id.value(),
            car_id: visit.car_id.value(),
            start: visit.start,
            status: visit.status.as_str().to_string(),
            status_code: visit.status.code(),
            maintenance_type_id: visit.maintenance_type_id.map(|id| id.value()),
            description: visit.description,
            created_at: visit.created_at,
        }
    }
}

/// 操作結果レスポンス（予約登録・キャンセル）
///
/// クライアントはmessage_keyを表示し、redirect_toへ遷移する。
#[derive(Debug, Serialize)]
pub struct OutcomeResponse {
    pub outcome: Outcome,
    pub message_key: &'static str,
    pub severity: Severity,
    pub redirect_to: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<Uuid>,
}

impl OutcomeResponse {
    pub fn new(flash: FlashMessage) -> Self {
        Self {
            outcome: flash.outcome,
            message_key: flash.message_key,
            severity: flash.severity,
            redirect_to: UPCOMING_VISITS_PATH,
            visit_id: None,
        }
    }

    pub fn with_visit_id(mut self, visit_id: VisitId) -> Self {
        self.visit_id = Some(visit_id.value());
        self
    }
}

/// 車両レスポンス
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub car_id: Uuid,
    pub licence_plate: String,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            car_id: car.car_id.value(),
            licence_plate: car.licence_plate,
        }
    }
}

/// 整備種別レスポンス
#[derive(Debug, Serialize)]
pub struct MaintenanceTypeResponse {
    pub maintenance_type_id: Uuid,
    pub name: String,
}

impl From<MaintenanceType> for MaintenanceTypeResponse {
    fn from(maintenance_type: MaintenanceType) -> Self {
        Self {
            maintenance_type_id: maintenance_type.maintenance_type_id.value(),
            name: maintenance_type.name,
        }
    }
}

/// 予約フォームの選択肢レスポンス（GET /visits/new）
#[derive(Debug, Serialize)]
pub struct BookingOptionsResponse {
    pub cars: Vec<CarResponse>,
    pub maintenance_types: Vec<MaintenanceTypeResponse>,
    pub booked_slots: Vec<DateTime<Utc>>,
}

impl From<BookingOptions> for BookingOptionsResponse {
    fn from(options: BookingOptions) -> Self {
        Self {
            cars: options.cars.into_iter().map(CarResponse::from).collect(),
            maintenance_types: options
                .maintenance_types
                .into_iter()
                .map(MaintenanceTypeResponse::from)
                .collect(),
            booked_slots: options.booked_slots,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
