use std::net::SocketAddr;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::domain::{
    Car,
    value_objects::{CarId, UserId},
};

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/garage_booking";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// 予約データの保存先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL（本番）
    Postgres,
    /// インメモリ（ローカル実行用、再起動で消える）
    Memory,
}

/// アプリケーション設定
///
/// 環境変数から読み込む。未設定の項目は既定値を使う。
/// - `DATABASE_URL`
/// - `PORT`
/// - `DATABASE_MAX_CONNECTIONS`
/// - `VISIT_STORAGE` (`postgres` | `memory`)
/// - `MEMORY_SEED_CARS` (`car_id:owner_id:licence_plate` をカンマ区切り、memoryのみ)
/// - `MEMORY_SEED_MAINTENANCE_TYPES` (整備種別名をカンマ区切り、memoryのみ)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub database_max_connections: u32,
    pub storage: StorageBackend,
    pub seed_cars: Vec<Car>,
    pub seed_maintenance_types: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から設定を組み立てる
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value,
                    });
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let storage = match lookup("VISIT_STORAGE").as_deref().map(str::trim) {
            None | Some("postgres") => StorageBackend::Postgres,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "VISIT_STORAGE",
                    value: other.to_string(),
                });
            }
        };

        let seed_cars = match lookup("MEMORY_SEED_CARS") {
            Some(value) => parse_seed_cars(&value)?,
            None => Vec::new(),
        };

        let seed_maintenance_types = lookup("MEMORY_SEED_MAINTENANCE_TYPES")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            port,
            database_max_connections,
            storage,
            seed_cars,
            seed_maintenance_types,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// ログ出力用にパスワードを伏せた接続文字列
    pub fn redacted_database_url(&self) -> String {
        match Url::parse(&self.database_url) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("***"));
                }
                url.to_string()
            }
            Err(_) => "<invalid database url>".to_string(),
        }
    }
}

/// `car_id:owner_id:licence_plate` のカンマ区切りリストを解析する
fn parse_seed_cars(value: &str) -> Result<Vec<Car>, ConfigError> {
    let invalid = |entry: &str| ConfigError::InvalidValue {
        key: "MEMORY_SEED_CARS",
        value: entry.to_string(),
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let mut parts = entry.splitn(3, ':');
            let car_id = parts.next().and_then(|p| Uuid::parse_str(p.trim()).ok());
            let owner_id = parts.next().and_then(|p| Uuid::parse_str(p.trim()).ok());
            let licence_plate = parts.next().map(str::trim).filter(|p| !p.is_empty());

            match (car_id, owner_id, licence_plate) {
                (Some(car_id), Some(owner_id), Some(licence_plate)) => Ok(Car {
                    car_id: CarId::from_uuid(car_id),
                    owner_id: UserId::from_uuid(owner_id),
                    licence_plate: licence_plate.to_string(),
                }),
                _ => Err(invalid(entry)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.storage, StorageBackend::Postgres);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
        assert!(config.seed_cars.is_empty());
        assert!(config.seed_maintenance_types.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/visits"),
            ("PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("VISIT_STORAGE", "memory"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "postgres://db/visits");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_max_connections, 20);
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_seed_cars() {
        let car_id = Uuid::new_v4();
        let owner_id = Uuid::new_v4();
        let seed = format!("{}:{}:AB-123-CD, ", car_id, owner_id);

        let config = AppConfig::from_lookup(lookup_from(&[
            ("MEMORY_SEED_CARS", seed.as_str()),
            ("MEMORY_SEED_MAINTENANCE_TYPES", "Oil change, Tyre swap,"),
        ]))
        .unwrap();

        assert_eq!(
            config.seed_cars,
            vec![Car {
                car_id: CarId::from_uuid(car_id),
                owner_id: UserId::from_uuid(owner_id),
                licence_plate: "AB-123-CD".to_string(),
            }]
        );
        assert_eq!(config.seed_maintenance_types, vec!["Oil change", "Tyre swap"]);
    }

    #[test]
    fn test_invalid_seed_car_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(
            "MEMORY_SEED_CARS",
            "not-a-uuid:also-not:PLATE",
        )]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "MEMORY_SEED_CARS",
                value: "not-a-uuid:also-not:PLATE".to_string()
            }
        );
    }

    #[test]
    fn test_redacted_database_url_hides_password() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://garage:s3cret@db:5432/garage_booking",
        )]))
        .unwrap();

        let redacted = config.redacted_database_url();
        assert!(!redacted.contains("s3cret"));
        assert_eq!(redacted, "postgres://garage:***@db:5432/garage_booking");
    }

    #[test]
    fn test_redacted_database_url_without_password() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.redacted_database_url(), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_invalid_port() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "PORT",
                value: "http".to_string()
            }
        );
    }

    #[test]
    fn test_zero_max_connections_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_storage_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("VISIT_STORAGE", "redis")]));
        assert!(result.is_err());
    }
}
