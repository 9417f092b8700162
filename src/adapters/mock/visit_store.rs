use crate::domain::{
    value_objects::{UserId, VisitId},
    visit::Visit,
};
use crate::ports::visit_store::{Result, SlotClaim, VisitStore as VisitStoreTrait};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// VisitStoreのインメモリ実装
///
/// ローカル実行とテスト用。プロセス終了で状態は失われる。
/// 開始日時の一意性はロック内で確認・保存することで保証する。
#[allow(dead_code)]
pub struct VisitStore {
    visits: Mutex<HashMap<VisitId, Visit>>,
}

#[allow(dead_code)]
impl VisitStore {
    pub fn new() -> Self {
        Self {
            visits: Mutex::new(HashMap::new()),
        }
    }

    /// 保存されている予約の件数
    pub fn len(&self) -> usize {
        self.visits.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for VisitStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisitStoreTrait for VisitStore {
    async fn insert(&self, visit: Visit) -> Result<SlotClaim> {
        let mut visits = self.visits.lock().unwrap();
        if visits.values().any(|v| v.start == visit.start) {
            return Ok(SlotClaim::AlreadyTaken);
        }
        visits.insert(visit.visit_id, visit);
        Ok(SlotClaim::Claimed)
    }

    async fn get_by_id(&self, visit_id: VisitId) -> Result<Option<Visit>> {
        Ok(self.visits.lock().unwrap().get(&visit_id).cloned())
    }

    async fn find_by_start(&self, start: DateTime<Utc>) -> Result<Option<Visit>> {
        Ok(self
            .visits
            .lock()
            .unwrap()
            .values()
            .find(|v| v.start == start)
            .cloned())
    }

    async fn find_upcoming_for_user(
        &self,
        user_id: UserId,
        from: DateTime<Utc>,
    ) -> Result<Vec<Visit>> {
        let mut visits: Vec<Visit> = self
            .visits
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.user_id == user_id && v.start >= from)
            .cloned()
            .collect();
        visits.sort_by_key(|v| v.start);
        Ok(visits)
    }

    async fn find_booked_slots(&self, from: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>> {
        let mut slots: Vec<DateTime<Utc>> = self
            .visits
            .lock()
            .unwrap()
            .values()
            .map(|v| v.start)
            .filter(|start| *start >= from)
            .collect();
        slots.sort();
        Ok(slots)
    }

    async fn delete(&self, visit_id: VisitId) -> Result<bool> {
        Ok(self.visits.lock().unwrap().remove(&visit_id).is_some())
    }
}
