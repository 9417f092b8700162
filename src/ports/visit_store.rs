use crate::domain::{
    value_objects::{UserId, VisitId},
    visit::Visit,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// スロット確保の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotClaim {
    /// 予約を保存した
    Claimed,
    /// 同じ開始日時の予約が既に存在したため保存しなかった
    AlreadyTaken,
}

/// 来店予約ストアポート
///
/// 予約の永続化と取得を抽象化する。
/// 更新操作は持たない（予約は作成と削除のみ）。
#[allow(dead_code)]
#[async_trait]
pub trait VisitStore: Send + Sync {
    /// 予約を保存する
    ///
    /// 開始日時の一意性はストア側で原子的に保証する。
    /// 同じ開始日時が既に存在する場合は保存せず`SlotClaim::AlreadyTaken`を返す。
    async fn insert(&self, visit: Visit) -> Result<SlotClaim>;

    /// IDで予約を取得する
    async fn get_by_id(&self, visit_id: VisitId) -> Result<Option<Visit>>;

    /// 開始日時が完全一致する予約を取得する
    ///
    /// 予約登録前のスロット空き確認に使用される。
    async fn find_by_start(&self, start: DateTime<Utc>) -> Result<Option<Visit>>;

    /// ユーザーの今後の予約を取得する
    ///
    /// start >= from の予約を開始日時の昇順で返す。
    async fn find_upcoming_for_user(
        &self,
        user_id: UserId,
        from: DateTime<Utc>,
    ) -> Result<Vec<Visit>>;

    /// 予約済みの開始日時を取得する
    ///
    /// 全ユーザーの start >= from の開始日時を昇順で返す。
    /// 予約フォームで埋まっている枠を示すために使用される。
    async fn find_booked_slots(&self, from: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>>;

    /// 予約を削除する
    ///
    /// 削除した場合はtrue、存在しなかった場合はfalseを返す。
    async fn delete(&self, visit_id: VisitId) -> Result<bool>;
}
