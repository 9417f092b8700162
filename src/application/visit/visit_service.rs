use crate::domain::{
    self, BookingConfirmation, VehicleStatusSignal, commands::BookVisit, value_objects::*,
    visit::Visit,
};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{Result, VisitApplicationError};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、純粋な関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub visit_store: Arc<dyn VisitStore>,
    pub maintenance_store: Arc<dyn MaintenanceStore>,
    pub car_service: Arc<dyn CarService>,
    pub notification_service: Arc<dyn NotificationService>,
    pub status_publisher: Arc<dyn VehicleStatusPublisher>,
}

/// 予約を取得し、予約者本人であることを確認するヘルパー関数
///
/// 存在しない場合は`None`を返す。
/// 予約者本人でない場合は存在を漏らさないよう`NotFound`を返す。
async fn load_owned_visit(
    deps: &ServiceDependencies,
    visit_id: VisitId,
    current_user: UserId,
) -> Result<Option<Visit>> {
    let visit = deps
        .visit_store
        .get_by_id(visit_id)
        .await
        .map_err(VisitApplicationError::VisitStoreError)?;

    let Some(visit) = visit else {
        return Ok(None);
    };

    if domain::visit::ensure_owner(&visit, current_user).is_err() {
        tracing::debug!(
            visit_id = %visit_id.value(),
            user_id = %current_user.value(),
            "visit requested by non-owner"
        );
        return Err(VisitApplicationError::NotFound);
    }

    Ok(Some(visit))
}

/// 車両ステータスシグナルを発行するヘルパー関数
async fn publish_status(deps: &ServiceDependencies, signal: VehicleStatusSignal) -> Result<()> {
    deps.status_publisher
        .publish(signal)
        .await
        .map_err(VisitApplicationError::StatusPublisherError)
}

/// ユーザーの今後の予約一覧を取得する
///
/// 当日0時以降に開始する予約を開始日時の昇順で返す。
/// 該当がない場合は空のリスト（エラーではない）。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `current_user` - 現在のユーザー
/// * `now` - 現在日時（当日の判定に使用）
pub async fn list_upcoming_visits(
    deps: &ServiceDependencies,
    current_user: UserId,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<Vec<Visit>> {
    deps.visit_store
        .find_upcoming_for_user(current_user, domain::visit::start_of_day(now))
        .await
        .map_err(VisitApplicationError::VisitStoreError)
}

/// 予約詳細を取得する
///
/// 存在しない予約、他人の予約はいずれも`NotFound`。
pub async fn get_visit(
    deps: &ServiceDependencies,
    visit_id: VisitId,
    current_user: UserId,
) -> Result<Visit> {
    load_owned_visit(deps, visit_id, current_user)
        .await?
        .ok_or(VisitApplicationError::NotFound)
}

/// 来店予約を登録する
///
/// ビジネスルール：
/// - 同じ開始日時の予約が存在しないこと（全体で一意）
/// - 予約対象の車両は現在のユーザーが所有していること
/// - 予約者は現在のユーザー、ステータスは予約済み（1）
///
/// 処理フロー：
/// 1. スロットの空きを再確認
/// 2. 予約対象の車両を取得し、所有者を確認（通知にナンバープレートが必要）
/// 3. 予約を保存（ストアが開始日時の一意性を原子的に保証）
/// 4. 車両ステータスシグナル（予約あり: 4）を発行
/// 5. 予約確認通知を送信
///
/// 1または3でスロットが埋まっていた場合は`SlotUnavailable`を返し、
/// 保存もシグナル発行も通知も行わない。
///
/// # 冪等性
///
/// 同じ開始日時での再送は`SlotUnavailable`となる。
///
/// # 戻り値
/// 成功時は作成された予約のID
pub async fn book_visit(
    deps: &ServiceDependencies,
    current_user: UserId,
    cmd: BookVisit,
) -> Result<VisitId> {
    // 1. スロットの空き確認
    let existing = deps
        .visit_store
        .find_by_start(cmd.start)
        .await
        .map_err(VisitApplicationError::VisitStoreError)?;

    if existing.is_some() {
        tracing::info!(start = %cmd.start, "requested slot already booked");
        return Err(VisitApplicationError::SlotUnavailable);
    }

    // 2. 車両の取得（他人の車両は存在しないものとして扱う）
    let car = deps
        .car_service
        .get_car(cmd.car_id)
        .await
        .map_err(VisitApplicationError::CarServiceError)?
        .filter(|car| car.owner_id == current_user)
        .ok_or(VisitApplicationError::CarNotFound)?;

    // 3. ドメイン層の純粋関数で予約を作成し、保存
    let visit = domain::visit::book_visit(current_user, cmd, chrono::Utc::now());
    let visit_id = visit.visit_id;
    let car_id = visit.car_id;
    let start = visit.start;

    let claim = deps
        .visit_store
        .insert(visit)
        .await
        .map_err(VisitApplicationError::VisitStoreError)?;

    if claim == SlotClaim::AlreadyTaken {
        // 事前確認と保存の間に同じ枠が予約された
        tracing::info!(start = %start, "slot taken by a concurrent booking");
        return Err(VisitApplicationError::SlotUnavailable);
    }

    // 4. 車両ステータス：予約あり
    publish_status(deps, VehicleStatusSignal::visit_booked(car_id)).await?;

    // 5. 予約確認通知
    let confirmation = BookingConfirmation {
        visit_id,
        start,
        licence_plate: car.licence_plate,
    };
    deps.notification_service
        .send_booking_confirmation(current_user, confirmation)
        .await
        .map_err(VisitApplicationError::NotificationError)?;

    tracing::info!(
        visit_id = %visit_id.value(),
        car_id = %car_id.value(),
        start = %start,
        "visit booked"
    );

    Ok(visit_id)
}

/// 来店予約をキャンセルする
///
/// 処理フロー：
/// 1. 予約を取得（存在しなければ`VisitNotFound`）
/// 2. 予約者本人であることを確認（違えば`NotFound`）
/// 3. 車両ステータスシグナル（利用可能: 1）を発行
/// 4. 予約を削除
/// 5. 作業中の整備記録を確認し、あれば整備中（2）、なければ利用可能（1）を再発行
///
/// 3のシグナルは5で必ず上書きされるが、発行順序は変えないこと。
pub async fn cancel_visit(
    deps: &ServiceDependencies,
    visit_id: VisitId,
    current_user: UserId,
) -> Result<()> {
    // 1, 2. 予約の取得と本人確認
    let visit = load_owned_visit(deps, visit_id, current_user)
        .await?
        .ok_or(VisitApplicationError::VisitNotFound)?;

    // 3. 車両ステータス：利用可能（仮）
    publish_status(deps, VehicleStatusSignal::available(visit.car_id)).await?;

    // 4. 予約の削除
    let deleted = deps
        .visit_store
        .delete(visit_id)
        .await
        .map_err(VisitApplicationError::VisitStoreError)?;

    if !deleted {
        tracing::warn!(visit_id = %visit_id.value(), "visit already removed during cancel");
    }

    // 5. 車両ステータスの再判定
    let has_open_maintenance = deps
        .maintenance_store
        .has_open_maintenance(visit.car_id)
        .await
        .map_err(VisitApplicationError::MaintenanceStoreError)?;

    let status = domain::visit::status_after_cancel(has_open_maintenance);
    publish_status(deps, VehicleStatusSignal::new(visit.car_id, status)).await?;

    tracing::info!(
        visit_id = %visit_id.value(),
        car_id = %visit.car_id.value(),
        status_code = status.code(),
        "visit cancelled"
    );

    Ok(())
}
