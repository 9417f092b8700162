use crate::domain::{
    Car,
    value_objects::{CarId, UserId},
};
use crate::ports::car_service::{CarService as CarServiceTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// CarServiceのモック実装
///
/// 車両を登録することで状態を持ったテストをサポート。
#[allow(dead_code)]
pub struct CarService {
    cars: Mutex<HashMap<CarId, Car>>,
}

#[allow(dead_code)]
impl CarService {
    pub fn new() -> Self {
        Self {
            cars: Mutex::new(HashMap::new()),
        }
    }

    /// テスト用に車両を登録
    pub fn add_car(&self, owner_id: UserId, licence_plate: &str) -> CarId {
        let car_id = CarId::new();
        self.insert_car(Car {
            car_id,
            owner_id,
            licence_plate: licence_plate.to_string(),
        });
        car_id
    }

    /// IDを指定して車両を登録（インメモリ起動時のシード用）
    pub fn insert_car(&self, car: Car) {
        self.cars.lock().unwrap().insert(car.car_id, car);
    }
}

impl Default for CarService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarServiceTrait for CarService {
    async fn get_car(&self, car_id: CarId) -> Result<Option<Car>> {
        Ok(self.cars.lock().unwrap().get(&car_id).cloned())
    }

    /// 登録された車両の中から所有者で絞り込み、ナンバープレート順で返す
    async fn find_by_owner(&self, owner_id: UserId) -> Result<Vec<Car>> {
        let mut cars: Vec<Car> = self
            .cars
            .lock()
            .unwrap()
            .values()
            .filter(|car| car.owner_id == owner_id)
            .cloned()
            .collect();
        cars.sort_by(|a, b| a.licence_plate.cmp(&b.licence_plate));
        Ok(cars)
    }
}
