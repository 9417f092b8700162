#![allow(dead_code)]

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    CarId, MaintenanceTypeId, UserId, VehicleStatus, VisitAccessError, VisitId, VisitStatus,
    commands::BookVisit,
};

/// Visit集約 - 1台の車両の1回の来店予約
///
/// 不変条件：同じ開始日時（スロット）を持つ予約はシステム全体で1件まで。
/// 車両ごとではなく全体で一意である点に注意。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    // 識別子
    pub visit_id: VisitId,

    // 他の集約への参照（IDのみ）
    pub user_id: UserId,
    pub car_id: CarId,

    // 予約枠
    pub start: DateTime<Utc>,
    pub status: VisitStatus,

    // 予約リクエストから複写される項目
    pub maintenance_type_id: Option<MaintenanceTypeId>,
    pub description: Option<String>,

    // 監査情報
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 来店予約を作成する（純粋関数）
///
/// 予約者は現在のユーザー、ステータスは常に`Scheduled`。
/// 開始日時・車両・その他の項目はコマンドから変更せずに複写する。
/// スロットの空き確認は永続化を伴うためアプリケーション層で行う。
pub fn book_visit(current_user: UserId, cmd: BookVisit, now: DateTime<Utc>) -> Visit {
    Visit {
        visit_id: VisitId::new(),
        user_id: current_user,
        car_id: cmd.car_id,
        start: cmd.start,
        status: VisitStatus::Scheduled,
        maintenance_type_id: cmd.maintenance_type_id,
        description: cmd.description,
        created_at: now,
        updated_at: now,
    }
}

/// 予約者本人であることを確認する
pub fn ensure_owner(visit: &Visit, user: UserId) -> Result<(), VisitAccessError> {
    if visit.user_id != user {
        return Err(VisitAccessError::NotOwner);
    }
    Ok(())
}

/// 当日の0時（UTC）
pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// キャンセル後の車両ステータスを決定する
///
/// 作業中の整備記録があれば整備中、なければ利用可能。
pub fn status_after_cancel(has_open_maintenance: bool) -> VehicleStatus {
    if has_open_maintenance {
        VehicleStatus::InProgress
    } else {
        VehicleStatus::Available
    }
}
