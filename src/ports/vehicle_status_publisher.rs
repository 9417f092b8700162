use crate::domain::VehicleStatusSignal;
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 車両ステータス発行ポート
///
/// 車両ステータスシグナルを車両管理コンテキストへ送る。
/// 受信側はシグナルを発行順に処理するため、実装は順序を保持すること。
#[allow(dead_code)]
#[async_trait]
pub trait VehicleStatusPublisher: Send + Sync {
    /// シグナルを発行する
    async fn publish(&self, signal: VehicleStatusSignal) -> Result<()>;
}
