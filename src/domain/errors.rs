#![allow(dead_code)]

/// 予約へのアクセスエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitAccessError {
    /// 予約者本人ではない
    NotOwner,
}
