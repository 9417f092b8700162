use crate::domain::{
    Car,
    value_objects::{CarId, UserId},
};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 車両サービスポート
///
/// 来店予約コンテキストと車両管理コンテキストの境界を維持する。
/// 予約コンテキストはCarIDとナンバープレートのみを知る。
#[allow(dead_code)]
#[async_trait]
pub trait CarService: Send + Sync {
    /// IDで車両を取得する
    ///
    /// 予約確認通知にナンバープレートを載せるために使用される。
    async fn get_car(&self, car_id: CarId) -> Result<Option<Car>>;

    /// ユーザーが所有する車両を取得する
    ///
    /// 予約フォームの車両選択肢に使用される。
    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Car>>;
}
