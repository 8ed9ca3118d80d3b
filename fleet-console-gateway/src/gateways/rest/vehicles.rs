//! 车辆资源的 `VehicleGateway` 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::VehicleGateway;
use crate::types::{Vehicle, VehicleDraft};

use super::RestVehicleGateway;

#[async_trait]
impl VehicleGateway for RestVehicleGateway {
    async fn list(&self) -> Result<Vec<Vehicle>> {
        self.endpoint.get("", None).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Vehicle> {
        self.endpoint.get(&format!("/{id}"), Some(id)).await
    }

    async fn create(&self, draft: &VehicleDraft) -> Result<Vehicle> {
        self.endpoint.post(draft).await
    }

    async fn update(&self, id: i64, draft: &VehicleDraft) -> Result<Vehicle> {
        self.endpoint.put(id, draft).await
    }

    async fn search(&self, filter: &str) -> Result<Vec<Vehicle>> {
        // 组合过滤串整体作为单一查询参数传给后端
        let path = format!("/buscar?filtro={}", urlencoding::encode(filter));
        self.endpoint.get(&path, None).await
    }
}
