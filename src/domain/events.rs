use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CarId, VehicleStatus, VisitId};

/// 車両ステータスシグナル
///
/// 車両管理側へ送られる外向きイベント。保存はしない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStatusSignal {
    pub car_id: CarId,
    pub status: VehicleStatus,
}

impl VehicleStatusSignal {
    pub fn new(car_id: CarId, status: VehicleStatus) -> Self {
        Self { car_id, status }
    }

    /// 来店予約あり（コード4）
    pub fn visit_booked(car_id: CarId) -> Self {
        Self::new(car_id, VehicleStatus::VisitBooked)
    }

    /// 利用可能（コード1）
    pub fn available(car_id: CarId) -> Self {
        Self::new(car_id, VehicleStatus::Available)
    }
}

/// 予約確認通知の内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub visit_id: VisitId,
    pub start: DateTime<Utc>,
    pub licence_plate: String,
}
