//! REST 网关 HTTP 请求方法

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, Result};
use crate::http::HttpUtils;

/// 单个资源端点（`{base}/vehiculos` 或 `{base}/estados`）
///
/// 两个网关共享同一套请求/错误映射流程，只是资源路径不同。
pub(crate) struct RestEndpoint {
    client: Client,
    /// 资源根 URL，如 `http://localhost:9090/api/v1/vehiculos`
    base: String,
    /// 资源名（用于日志与错误上下文）
    resource: &'static str,
}

impl RestEndpoint {
    pub(crate) fn new(client: Client, base_url: &str, resource: &'static str) -> Self {
        Self {
            client,
            base: format!("{}/{resource}", base_url.trim_end_matches('/')),
            resource,
        }
    }

    /// 执行 GET 请求
    ///
    /// `path` 为资源根之后的路径（空串、`/{id}` 或 `/buscar?...`）。
    /// `id` 仅用于 404 错误上下文。
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, id: Option<i64>) -> Result<T> {
        let url = format!("{}{path}", self.base);
        let request = self.client.get(&url);

        let (status, body) =
            HttpUtils::execute_request(request, self.resource, "GET", &url).await?;
        self.expect_success(status, body, id)
    }

    /// 执行 POST 请求（创建）
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(&self, body: &B) -> Result<T> {
        let url = self.base.clone();
        let request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(self.serialize_body(body)?);

        let (status, text) =
            HttpUtils::execute_request(request, self.resource, "POST", &url).await?;
        self.expect_success(status, text, None)
    }

    /// 执行 PUT 请求（更新）
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        id: i64,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}/{id}", self.base);
        let request = self
            .client
            .put(&url)
            .header("Content-Type", "application/json")
            .body(self.serialize_body(body)?);

        let (status, text) =
            HttpUtils::execute_request(request, self.resource, "PUT", &url).await?;
        self.expect_success(status, text, Some(id))
    }

    /// 序列化请求体并记录日志
    fn serialize_body<B: Serialize>(&self, body: &B) -> Result<String> {
        let json = serde_json::to_string(body).map_err(|e| GatewayError::SerializationError {
            resource: self.resource.to_string(),
            detail: e.to_string(),
        })?;
        log::debug!("[{}] Request Body: {json}", self.resource);
        Ok(json)
    }

    /// 成功时解析响应体，失败时映射为域错误
    fn expect_success<T: DeserializeOwned>(
        &self,
        status: u16,
        body: String,
        id: Option<i64>,
    ) -> Result<T> {
        if (200..300).contains(&status) {
            return HttpUtils::parse_json(&body, self.resource);
        }
        Err(status_to_error(self.resource, status, body, id))
    }
}

/// 将非 2xx 状态码映射为 `GatewayError`
pub(crate) fn status_to_error(
    resource: &str,
    status: u16,
    body: String,
    id: Option<i64>,
) -> GatewayError {
    match status {
        404 => GatewayError::NotFound {
            resource: resource.to_string(),
            id: id.map_or_else(String::new, |i| i.to_string()),
            raw_message: (!body.is_empty()).then_some(body),
        },
        400 | 422 => GatewayError::ValidationRejected {
            resource: resource.to_string(),
            raw_message: body,
        },
        _ => GatewayError::Unknown {
            resource: resource.to_string(),
            status: Some(status),
            raw_message: body,
        },
    }
}
