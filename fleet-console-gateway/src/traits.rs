use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Status, Vehicle, VehicleDraft};

/// 车辆网关 Trait
///
/// 工作流层只依赖此 trait，测试可注入内存替身。
#[async_trait]
pub trait VehicleGateway: Send + Sync {
    /// 获取全部车辆（顺序由后端决定）
    async fn list(&self) -> Result<Vec<Vehicle>>;

    /// 按 ID 获取车辆
    async fn get_by_id(&self, id: i64) -> Result<Vehicle>;

    /// 创建车辆，返回带服务端 ID 的记录
    async fn create(&self, draft: &VehicleDraft) -> Result<Vehicle>;

    /// 更新车辆
    async fn update(&self, id: i64, draft: &VehicleDraft) -> Result<Vehicle>;

    /// 自由文本搜索
    ///
    /// `filter` 是把车牌/型号/年份子条件拼成的单一查询串，
    /// 匹配语义完全委托给后端。
    async fn search(&self, filter: &str) -> Result<Vec<Vehicle>>;
}

/// 状态网关 Trait
///
/// `create` / `update` 在合同中存在，但记录管理工作流只读取状态列表。
#[async_trait]
pub trait StatusGateway: Send + Sync {
    /// 获取全部状态
    async fn list(&self) -> Result<Vec<Status>>;

    /// 创建状态
    async fn create(&self, status: &Status) -> Result<Status>;

    /// 更新状态
    async fn update(&self, id: i64, status: &Status) -> Result<Status>;
}
