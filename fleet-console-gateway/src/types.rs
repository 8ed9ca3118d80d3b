//! 车辆与状态的线上数据类型
//!
//! 后端使用西班牙语字段名（placa/modelo/...），通过 `serde(rename)` 映射。

use serde::{Deserialize, Serialize};

/// 车辆记录
///
/// Numeric fields and the status reference are optional on the wire; the
/// backend may omit them on partially filled records, and the form layer
/// falls back to defaults when editing such a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// 服务端分配的 ID（创建前为 None）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 车牌（固定 6 位）
    #[serde(rename = "placa")]
    pub plate: String,
    /// 型号
    #[serde(rename = "modelo")]
    pub model: String,
    /// 载客量
    #[serde(rename = "capacidad")]
    pub capacity: Option<u32>,
    /// 车高（米）
    #[serde(rename = "altura")]
    pub height: Option<f64>,
    /// 价格
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    /// 状态引用（`Status::id`）
    #[serde(rename = "estadoId")]
    pub status_id: Option<i64>,
}

/// 车辆创建/更新请求体
///
/// A draft never carries an `id` (assigned by the backend on creation) and
/// only exists after client-side validation passed, so every field is
/// required here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleDraft {
    /// 车牌（固定 6 位）
    #[serde(rename = "placa")]
    pub plate: String,
    /// 型号
    #[serde(rename = "modelo")]
    pub model: String,
    /// 载客量（≥ 1）
    #[serde(rename = "capacidad")]
    pub capacity: u32,
    /// 车高（≥ 0）
    #[serde(rename = "altura")]
    pub height: f64,
    /// 价格（≥ 0）
    #[serde(rename = "precio")]
    pub price: f64,
    /// 状态引用（必填）
    #[serde(rename = "estadoId")]
    pub status_id: i64,
}

/// 状态记录（如 "Activo" / "Inactivo"）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    /// 服务端分配的 ID（创建前为 None）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 状态标签
    #[serde(rename = "estado")]
    pub label: String,
}
