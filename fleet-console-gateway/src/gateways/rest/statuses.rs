//! 状态资源的 `StatusGateway` 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::StatusGateway;
use crate::types::Status;

use super::RestStatusGateway;

#[async_trait]
impl StatusGateway for RestStatusGateway {
    async fn list(&self) -> Result<Vec<Status>> {
        self.endpoint.get("", None).await
    }

    async fn create(&self, status: &Status) -> Result<Status> {
        self.endpoint.post(status).await
    }

    async fn update(&self, id: i64, status: &Status) -> Result<Status> {
        self.endpoint.put(id, status).await
    }
}
