//! 测试辅助模块
//!
//! 提供网关 mock 实现和便捷的测试工厂方法。

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use fleet_console_gateway::{
    GatewayError, Result, Status, StatusGateway, Vehicle, VehicleDraft, VehicleGateway,
};

use crate::notify::{Notice, Notifier};

// ===== 工厂方法 =====

pub fn status(id: i64, label: &str) -> Status {
    Status {
        id: Some(id),
        label: label.to_string(),
    }
}

pub fn vehicle(id: Option<i64>, plate: &str) -> Vehicle {
    Vehicle {
        id,
        plate: plate.to_string(),
        model: "Sprinter".to_string(),
        capacity: Some(4),
        height: Some(2.1),
        price: Some(15000.0),
        status_id: Some(1),
    }
}

pub fn network_error(resource: &str) -> GatewayError {
    GatewayError::NetworkError {
        resource: resource.to_string(),
        detail: "connection refused".to_string(),
    }
}

fn draft_to_vehicle(id: Option<i64>, draft: &VehicleDraft) -> Vehicle {
    Vehicle {
        id,
        plate: draft.plate.clone(),
        model: draft.model.clone(),
        capacity: Some(draft.capacity),
        height: Some(draft.height),
        price: Some(draft.price),
        status_id: Some(draft.status_id),
    }
}

// ===== MockVehicleGateway =====

pub struct MockVehicleGateway {
    vehicles: RwLock<Vec<Vehicle>>,
    search_results: RwLock<Vec<Vehicle>>,
    last_filter: RwLock<Option<String>>,
    fail_list: RwLock<Option<GatewayError>>,
    fail_search: RwLock<Option<GatewayError>>,
    /// 如果 Some，create/update 时返回此错误（用于测试保存失败路径）
    fail_save: RwLock<Option<GatewayError>>,
    pub list_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    next_id: AtomicI64,
}

impl MockVehicleGateway {
    pub fn new() -> Self {
        Self {
            vehicles: RwLock::new(Vec::new()),
            search_results: RwLock::new(Vec::new()),
            last_filter: RwLock::new(None),
            fail_list: RwLock::new(None),
            fail_search: RwLock::new(None),
            fail_save: RwLock::new(None),
            list_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            next_id: AtomicI64::new(100),
        }
    }

    pub async fn set_vehicles(&self, vehicles: Vec<Vehicle>) {
        *self.vehicles.write().await = vehicles;
    }

    pub async fn set_search_results(&self, vehicles: Vec<Vehicle>) {
        *self.search_results.write().await = vehicles;
    }

    pub async fn set_fail_list(&self, err: Option<GatewayError>) {
        *self.fail_list.write().await = err;
    }

    pub async fn set_fail_search(&self, err: Option<GatewayError>) {
        *self.fail_search.write().await = err;
    }

    pub async fn set_fail_save(&self, err: Option<GatewayError>) {
        *self.fail_save.write().await = err;
    }

    pub async fn last_filter(&self) -> Option<String> {
        self.last_filter.read().await.clone()
    }
}

#[async_trait]
impl VehicleGateway for MockVehicleGateway {
    async fn list(&self) -> Result<Vec<Vehicle>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_list.read().await.clone() {
            return Err(err);
        }
        Ok(self.vehicles.read().await.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Vehicle> {
        self.vehicles
            .read()
            .await
            .iter()
            .find(|v| v.id == Some(id))
            .cloned()
            .ok_or_else(|| GatewayError::NotFound {
                resource: "vehiculos".to_string(),
                id: id.to_string(),
                raw_message: None,
            })
    }

    async fn create(&self, draft: &VehicleDraft) -> Result<Vehicle> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_save.read().await.clone() {
            return Err(err);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = draft_to_vehicle(Some(id), draft);
        self.vehicles.write().await.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, draft: &VehicleDraft) -> Result<Vehicle> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_save.read().await.clone() {
            return Err(err);
        }
        let updated = draft_to_vehicle(Some(id), draft);
        let mut vehicles = self.vehicles.write().await;
        match vehicles.iter_mut().find(|v| v.id == Some(id)) {
            Some(slot) => {
                *slot = updated.clone();
                Ok(updated)
            }
            None => Err(GatewayError::NotFound {
                resource: "vehiculos".to_string(),
                id: id.to_string(),
                raw_message: None,
            }),
        }
    }

    async fn search(&self, filter: &str) -> Result<Vec<Vehicle>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filter.write().await = Some(filter.to_string());
        if let Some(err) = self.fail_search.read().await.clone() {
            return Err(err);
        }
        Ok(self.search_results.read().await.clone())
    }
}

// ===== MockStatusGateway =====

pub struct MockStatusGateway {
    statuses: RwLock<Vec<Status>>,
    fail_list: RwLock<Option<GatewayError>>,
    pub list_calls: AtomicUsize,
}

impl MockStatusGateway {
    pub fn new() -> Self {
        Self {
            statuses: RwLock::new(Vec::new()),
            fail_list: RwLock::new(None),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_statuses(&self, statuses: Vec<Status>) {
        *self.statuses.write().await = statuses;
    }

    pub async fn set_fail_list(&self, err: Option<GatewayError>) {
        *self.fail_list.write().await = err;
    }
}

#[async_trait]
impl StatusGateway for MockStatusGateway {
    async fn list(&self) -> Result<Vec<Status>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_list.read().await.clone() {
            return Err(err);
        }
        Ok(self.statuses.read().await.clone())
    }

    async fn create(&self, status: &Status) -> Result<Status> {
        let mut persisted = status.clone();
        if persisted.id.is_none() {
            persisted.id = Some(1);
        }
        self.statuses.write().await.push(persisted.clone());
        Ok(persisted)
    }

    async fn update(&self, id: i64, status: &Status) -> Result<Status> {
        let mut persisted = status.clone();
        persisted.id = Some(id);
        Ok(persisted)
    }
}

// ===== RecordingNotifier =====

/// 记录所有通知的测试替身
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
        }
    }

    /// 已发布通知的快照
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn publish(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}
