use chrono::{DateTime, Utc};

use crate::domain::{self, Car, MaintenanceType, value_objects::UserId};

use super::errors::{Result, VisitApplicationError};
use super::visit_service::ServiceDependencies;

/// 予約フォームの選択肢
#[derive(Debug, Clone)]
pub struct BookingOptions {
    /// 現在のユーザーが所有する車両
    pub cars: Vec<Car>,
    /// 選択可能な整備種別
    pub maintenance_types: Vec<MaintenanceType>,
    /// 当日以降の予約済み開始日時（全ユーザー、予約者情報は含まない）
    pub booked_slots: Vec<DateTime<Utc>>,
}

/// 予約フォームの選択肢を取得する
///
/// 空き枠の表示用。予約登録時のスロット確認の代わりにはならない。
pub async fn get_booking_options(
    deps: &ServiceDependencies,
    current_user: UserId,
    now: DateTime<Utc>,
) -> Result<BookingOptions> {
    let cars = deps
        .car_service
        .find_by_owner(current_user)
        .await
        .map_err(VisitApplicationError::CarServiceError)?;

    let maintenance_types = deps
        .maintenance_store
        .find_maintenance_types()
        .await
        .map_err(VisitApplicationError::MaintenanceStoreError)?;

    let booked_slots = deps
        .visit_store
        .find_booked_slots(domain::visit::start_of_day(now))
        .await
        .map_err(VisitApplicationError::VisitStoreError)?;

    Ok(BookingOptions {
        cars,
        maintenance_types,
        booked_slots,
    })
}
