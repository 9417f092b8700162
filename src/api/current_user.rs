use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::domain::value_objects::UserId;

use super::error::ApiError;

/// 上流の認証レイヤーが設定する認証済みユーザーIDのヘッダー
pub const USER_ID_HEADER: &str = "x-user-id";

/// 現在のユーザー
///
/// 認証・セッション管理はこのサービスの外側で行われる。
/// ハンドラーはこの抽出器で受け取ったユーザーを各操作に明示的に渡す。
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .ok_or(ApiError::Unauthenticated)?;

        Ok(CurrentUser(UserId::from_uuid(user_id)))
    }
}
