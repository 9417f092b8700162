use crate::domain::{
    Car,
    value_objects::{CarId, UserId},
};
use crate::ports::car_service::{CarService as CarServiceTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

fn map_row_to_car(row: &PgRow) -> Car {
    Car {
        car_id: CarId::from_uuid(row.get("car_id")),
        owner_id: UserId::from_uuid(row.get("owner_id")),
        licence_plate: row.get("licence_plate"),
    }
}

/// CarServiceのPostgreSQL実装
///
/// carsテーブルは車両管理コンテキストが所有し、ここでは参照項目のみ読み取る。
#[allow(dead_code)]
pub struct CarService {
    pool: PgPool,
}

#[allow(dead_code)]
impl CarService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarServiceTrait for CarService {
    async fn get_car(&self, car_id: CarId) -> Result<Option<Car>> {
        let row = sqlx::query(
            r#"
            SELECT car_id, owner_id, licence_plate
            FROM cars
            WHERE car_id = $1
            "#,
        )
        .bind(car_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_car))
    }

    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Car>> {
        let rows = sqlx::query(
            r#"
            SELECT car_id, owner_id, licence_plate
            FROM cars
            WHERE owner_id = $1
            ORDER BY licence_plate ASC
            "#,
        )
        .bind(owner_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_car).collect())
    }
}
