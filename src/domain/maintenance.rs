use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CarId, MaintenanceId, MaintenanceStatus, MaintenanceTypeId};

/// 整備記録（整備管理コンテキストの読み取り専用ビュー）
///
/// 作業中（status = Open）かつ完了日時が未設定の記録があれば、
/// その車両は整備中とみなす。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub maintenance_id: MaintenanceId,
    pub car_id: CarId,
    pub status: MaintenanceStatus,
    pub finish_date: Option<DateTime<Utc>>,
}

impl MaintenanceRecord {
    pub fn is_open(&self) -> bool {
        self.status == MaintenanceStatus::Open && self.finish_date.is_none()
    }
}

/// 整備種別（予約フォームで選択する作業内容）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceType {
    pub maintenance_type_id: MaintenanceTypeId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: MaintenanceStatus, finish_date: Option<DateTime<Utc>>) -> MaintenanceRecord {
        MaintenanceRecord {
            maintenance_id: MaintenanceId::new(),
            car_id: CarId::new(),
            status,
            finish_date,
        }
    }

    #[test]
    fn test_open_without_finish_date_is_open() {
        assert!(record(MaintenanceStatus::Open, None).is_open());
    }

    #[test]
    fn test_open_with_finish_date_is_not_open() {
        assert!(!record(MaintenanceStatus::Open, Some(Utc::now())).is_open());
    }

    #[test]
    fn test_closed_is_not_open() {
        assert!(!record(MaintenanceStatus::Closed, None).is_open());
    }
}
