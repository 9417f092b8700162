use crate::domain::{
    MaintenanceType,
    value_objects::{CarId, MaintenanceStatus, MaintenanceTypeId},
};
use crate::ports::maintenance_store::{MaintenanceStore as MaintenanceStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_maintenance_type(row: &PgRow) -> MaintenanceType {
    MaintenanceType {
        maintenance_type_id: MaintenanceTypeId::from_uuid(row.get("maintenance_type_id")),
        name: row.get("name"),
    }
}

/// MaintenanceStoreのPostgreSQL実装
///
/// maintenances・maintenance_typesテーブルは整備管理コンテキストが所有し、ここでは読み取りのみ行う。
#[allow(dead_code)]
pub struct MaintenanceStore {
    pool: PgPool,
}

#[allow(dead_code)]
impl MaintenanceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceStoreTrait for MaintenanceStore {
    /// 作業中かつ未完了の整備記録の有無
    ///
    /// (car_id) WHERE maintenance_status_id = 1 AND finish_date IS NULL の部分インデックスを使用。
    async fn has_open_maintenance(&self, car_id: CarId) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM maintenances
                WHERE car_id = $1
                  AND finish_date IS NULL
                  AND maintenance_status_id = $2
            )
            "#,
        )
        .bind(car_id.value())
        .bind(MaintenanceStatus::Open.code())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_maintenance_types(&self) -> Result<Vec<MaintenanceType>> {
        let rows = sqlx::query(
            r#"
            SELECT maintenance_type_id, name
            FROM maintenance_types
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_maintenance_type).collect())
    }
}
