#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 予約ID - 来店予約コンテキストの集約ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisitId(Uuid);

impl VisitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for VisitId {
    fn default() -> Self {
        Self::new()
    }
}

/// ユーザーID - 認証コンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// 車両ID - 車両管理コンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarId(Uuid);

impl CarId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for CarId {
    fn default() -> Self {
        Self::new()
    }
}

/// 整備記録ID - 整備管理コンテキストへの参照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaintenanceId(Uuid);

impl MaintenanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for MaintenanceId {
    fn default() -> Self {
        Self::new()
    }
}

/// 整備種別ID - 予約リクエストからそのまま複写される
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaintenanceTypeId(Uuid);

impl MaintenanceTypeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for MaintenanceTypeId {
    fn default() -> Self {
        Self::new()
    }
}

/// 不明なステータスコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatusCode(pub i16);

impl std::fmt::Display for UnknownStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown status code: {}", self.0)
    }
}

impl std::error::Error for UnknownStatusCode {}

/// 予約ステータス
///
/// 現時点で設定されるのは`Scheduled`のみ。
/// 数値コードは他システムと共有されるため変更不可。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    /// 予約済み
    Scheduled,
}

impl VisitStatus {
    pub fn code(&self) -> i16 {
        match self {
            VisitStatus::Scheduled => 1,
        }
    }

    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "scheduled",
        }
    }
}

impl TryFrom<i16> for VisitStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(VisitStatus::Scheduled),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

/// 車両ステータス（車両ステータスシグナルで送信されるコード）
///
/// 不変条件：コード値（1, 2, 4）は車両管理側との互換性のため固定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// 利用可能
    Available,
    /// 整備中
    InProgress,
    /// 来店予約あり
    VisitBooked,
}

impl VehicleStatus {
    pub fn code(&self) -> i16 {
        match self {
            VehicleStatus::Available => 1,
            VehicleStatus::InProgress => 2,
            VehicleStatus::VisitBooked => 4,
        }
    }
}

impl TryFrom<i16> for VehicleStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(VehicleStatus::Available),
            2 => Ok(VehicleStatus::InProgress),
            4 => Ok(VehicleStatus::VisitBooked),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

/// 整備記録ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    /// 作業中
    Open,
    /// 完了
    Closed,
}

impl MaintenanceStatus {
    pub fn code(&self) -> i16 {
        match self {
            MaintenanceStatus::Open => 1,
            MaintenanceStatus::Closed => 2,
        }
    }
}

impl TryFrom<i16> for MaintenanceStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(MaintenanceStatus::Open),
            2 => Ok(MaintenanceStatus::Closed),
            other => Err(UnknownStatusCode(other)),
        }
    }
}
