use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CarId, MaintenanceTypeId};

/// コマンド：来店予約を登録する
///
/// 予約者（現在のユーザー）はコマンドに含めず、各操作に明示的に渡す。
/// 送信元フォームの偽造防止トークンはAPI層で破棄され、ここには届かない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookVisit {
    pub car_id: CarId,
    pub start: DateTime<Utc>,
    pub maintenance_type_id: Option<MaintenanceTypeId>,
    pub description: Option<String>,
}
