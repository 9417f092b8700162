use serde::{Deserialize, Serialize};

use super::{CarId, UserId};

/// 車両（車両管理コンテキストの読み取り専用ビュー）
///
/// 来店予約で参照する項目のみを持つ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub car_id: CarId,
    pub owner_id: UserId,
    pub licence_plate: String,
}
