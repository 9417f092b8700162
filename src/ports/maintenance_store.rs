use crate::domain::{MaintenanceType, value_objects::CarId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 整備記録ストアポート（読み取り専用）
///
/// 整備記録の作成・更新は整備管理コンテキストが担う。
#[allow(dead_code)]
#[async_trait]
pub trait MaintenanceStore: Send + Sync {
    /// 車両に作業中の整備記録があるか確認する
    ///
    /// status = Open かつ finish_date が未設定の記録を対象とする。
    /// 予約キャンセル後の車両ステータス判定に使用される。
    async fn has_open_maintenance(&self, car_id: CarId) -> Result<bool>;

    /// すべての整備種別を名前順で返す
    ///
    /// 予約フォームの選択肢に使用される。
    async fn find_maintenance_types(&self) -> Result<Vec<MaintenanceType>>;
}
