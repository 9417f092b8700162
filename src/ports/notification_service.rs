use crate::domain::{BookingConfirmation, value_objects::UserId};
use async_trait::async_trait;

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// ユーザーへの通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
#[allow(dead_code)]
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// 予約確認通知をユーザーに送信する
    ///
    /// 来店予約の登録直後に呼ばれる。
    async fn send_booking_confirmation(
        &self,
        user_id: UserId,
        confirmation: BookingConfirmation,
    ) -> Result<()>;
}
