use crate::domain::VehicleStatusSignal;
use crate::ports::vehicle_status_publisher::{
    Result, VehicleStatusPublisher as VehicleStatusPublisherTrait,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// VehicleStatusPublisherのPostgreSQL実装（アウトボックス）
///
/// シグナルを追記専用のvehicle_status_outboxテーブルに書き込む。
/// 車両管理側はsequence_number順に読み取るため、発行順が保持される。
#[allow(dead_code)]
pub struct StatusOutbox {
    pool: PgPool,
}

#[allow(dead_code)]
impl StatusOutbox {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStatusPublisherTrait for StatusOutbox {
    async fn publish(&self, signal: VehicleStatusSignal) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO vehicle_status_outbox (car_id, status_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(signal.car_id.value())
        .bind(signal.status.code())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
