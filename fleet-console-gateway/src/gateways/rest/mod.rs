//! 车队后端 REST 网关
//!
//! 固定路径约定（与后端合同一致）：
//! - `GET/POST {base}/vehiculos`、`GET/PUT {base}/vehiculos/{id}`、
//!   `GET {base}/vehiculos/buscar?filtro={text}`
//! - `GET/POST {base}/estados`、`PUT {base}/estados/{id}`

mod http;
mod statuses;
mod vehicles;

use crate::gateways::common::create_http_client;

use http::RestEndpoint;

/// 默认 API 基地址
pub(crate) const DEFAULT_API_BASE: &str = "http://localhost:9090/api/v1";
/// 车辆资源路径段
pub(crate) const VEHICLES_RESOURCE: &str = "vehiculos";
/// 状态资源路径段
pub(crate) const STATUSES_RESOURCE: &str = "estados";

/// 覆盖 API 基地址的环境变量名
pub const API_BASE_ENV: &str = "FLEET_API_BASE";

/// REST 网关配置
#[derive(Debug, Clone)]
pub struct RestApiConfig {
    /// API 基地址（不含资源路径段）
    pub base_url: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl RestApiConfig {
    /// 使用指定基地址创建配置
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// 从环境变量读取基地址，缺失时使用默认值
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(API_BASE_ENV).map_or_else(|_| Self::default(), Self::new)
    }
}

/// 车辆资源 REST 网关
pub struct RestVehicleGateway {
    pub(crate) endpoint: RestEndpoint,
}

impl RestVehicleGateway {
    #[must_use]
    pub fn new(config: RestApiConfig) -> Self {
        Self {
            endpoint: RestEndpoint::new(create_http_client(), &config.base_url, VEHICLES_RESOURCE),
        }
    }
}

/// 状态资源 REST 网关
pub struct RestStatusGateway {
    pub(crate) endpoint: RestEndpoint,
}

impl RestStatusGateway {
    #[must_use]
    pub fn new(config: RestApiConfig) -> Self {
        Self {
            endpoint: RestEndpoint::new(create_http_client(), &config.base_url, STATUSES_RESOURCE),
        }
    }
}
