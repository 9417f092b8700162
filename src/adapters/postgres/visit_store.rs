use crate::domain::{
    value_objects::{CarId, MaintenanceTypeId, UserId, VisitId, VisitStatus},
    visit::Visit,
};
use crate::ports::visit_store::{Result, SlotClaim, VisitStore as VisitStoreTrait};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

/// PostgreSQLの行データをVisitに変換する
///
/// status_idの数値コードからVisitStatusへの変換でエラーハンドリングを行う。
fn map_row_to_visit(row: &PgRow) -> Result<Visit> {
    let status_id: i16 = row.get("status_id");
    let status = VisitStatus::try_from(status_id)?;

    let maintenance_type_id: Option<Uuid> = row.get("maintenance_type_id");

    Ok(Visit {
        visit_id: VisitId::from_uuid(row.get("visit_id")),
        user_id: UserId::from_uuid(row.get("user_id")),
        car_id: CarId::from_uuid(row.get("car_id")),
        start: row.get("start_at"),
        status,
        maintenance_type_id: maintenance_type_id.map(MaintenanceTypeId::from_uuid),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// VisitStoreのPostgreSQL実装
///
/// visits.start_at のUNIQUE制約で予約枠の一意性を保証する。
#[allow(dead_code)]
pub struct VisitStore {
    pool: PgPool,
}

#[allow(dead_code)]
impl VisitStore {
    /// PostgreSQLコネクションプールから新しいVisitStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitStoreTrait for VisitStore {
    /// 予約を保存
    ///
    /// INSERT ... ON CONFLICT (start_at) DO NOTHING を使用し、
    /// 同時に同じ枠を予約しようとした場合でも1件しか保存されない。
    async fn insert(&self, visit: Visit) -> Result<SlotClaim> {
        let result = sqlx::query(
            r#"
            INSERT INTO visits (
                visit_id,
                user_id,
                car_id,
                start_at,
                status_id,
                maintenance_type_id,
                description,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (start_at) DO NOTHING
            "#,
        )
        .bind(visit.visit_id.value())
        .bind(visit.user_id.value())
        .bind(visit.car_id.value())
        .bind(visit.start)
        .bind(visit.status.code())
        .bind(visit.maintenance_type_id.map(|id| id.value()))
        .bind(visit.description)
        .bind(visit.created_at)
        .bind(visit.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(SlotClaim::AlreadyTaken);
        }
        Ok(SlotClaim::Claimed)
    }

    /// IDで予約を取得
    async fn get_by_id(&self, visit_id: VisitId) -> Result<Option<Visit>> {
        let row = sqlx::query(
            r#"
            SELECT
                visit_id,
                user_id,
                car_id,
                start_at,
                status_id,
                maintenance_type_id,
                description,
                created_at,
                updated_at
            FROM visits
            WHERE visit_id = $1
            "#,
        )
        .bind(visit_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_visit).transpose()
    }

    /// 開始日時が一致する予約を取得（スロット空き確認用）
    async fn find_by_start(&self, start: DateTime<Utc>) -> Result<Option<Visit>> {
        let row = sqlx::query(
            r#"
            SELECT
                visit_id,
                user_id,
                car_id,
                start_at,
                status_id,
                maintenance_type_id,
                description,
                created_at,
                updated_at
            FROM visits
            WHERE start_at = $1
            "#,
        )
        .bind(start)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_row_to_visit).transpose()
    }

    /// ユーザーの今後の予約を開始日時の昇順で取得
    ///
    /// (user_id, start_at)のインデックスを使用する。
    async fn find_upcoming_for_user(
        &self,
        user_id: UserId,
        from: DateTime<Utc>,
    ) -> Result<Vec<Visit>> {
        let rows = sqlx::query(
            r#"
            SELECT
                visit_id,
                user_id,
                car_id,
                start_at,
                status_id,
                maintenance_type_id,
                description,
                created_at,
                updated_at
            FROM visits
            WHERE user_id = $1 AND start_at >= $2
            ORDER BY start_at ASC
            "#,
        )
        .bind(user_id.value())
        .bind(from)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_row_to_visit).collect()
    }

    /// 予約済みの開始日時を昇順で取得
    async fn find_booked_slots(&self, from: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>> {
        let slots: Vec<DateTime<Utc>> = sqlx::query_scalar(
            r#"
            SELECT start_at
            FROM visits
            WHERE start_at >= $1
            ORDER BY start_at ASC
            "#,
        )
        .bind(from)
        .fetch_all(&self.pool)
        .await?;

        Ok(slots)
    }

    async fn delete(&self, visit_id: VisitId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM visits WHERE visit_id = $1")
            .bind(visit_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
