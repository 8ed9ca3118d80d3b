//! 车辆编辑表单草稿与校验
//!
//! 校验是一个纯函数，返回被违反的规则集合；任何一条违反都会阻止保存分发。

use serde::Serialize;

use fleet_console_gateway::{Vehicle, VehicleDraft};

/// 车牌固定长度
pub const PLATE_LENGTH: usize = 6;
/// 型号最小长度
pub const MODEL_MIN_LENGTH: usize = 2;
/// 新建草稿的默认载客量
pub const DEFAULT_CAPACITY: u32 = 1;
/// 新建草稿的默认车高
pub const DEFAULT_HEIGHT: f64 = 0.0;
/// 新建草稿的默认价格
pub const DEFAULT_PRICE: f64 = 0.0;

/// 表单校验规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationRule {
    /// 车牌必填且固定 6 位
    PlateLength,
    /// 型号必填且至少 2 位
    ModelLength,
    /// 载客量 ≥ 1
    CapacityMin,
    /// 车高 ≥ 0
    HeightMin,
    /// 价格 ≥ 0
    PriceMin,
    /// 必须选择状态
    StatusRequired,
}

/// 车辆编辑表单
///
/// 可能处于无效状态的草稿；只有 [`validate`](Self::validate) 通过后
/// 才会被转换为网关请求体。
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleForm {
    pub plate: String,
    pub model: String,
    pub capacity: u32,
    pub height: f64,
    pub price: f64,
    pub status_id: Option<i64>,
}

impl Default for VehicleForm {
    /// 新建模式的默认草稿（状态引用由调用方填入默认活动状态）
    fn default() -> Self {
        Self {
            plate: String::new(),
            model: String::new(),
            capacity: DEFAULT_CAPACITY,
            height: DEFAULT_HEIGHT,
            price: DEFAULT_PRICE,
            status_id: None,
        }
    }
}

impl VehicleForm {
    /// 从已有车辆填充表单（编辑模式）
    ///
    /// 缺失的数值字段回退到新建默认值。
    #[must_use]
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            plate: vehicle.plate.clone(),
            model: vehicle.model.clone(),
            capacity: vehicle.capacity.unwrap_or(DEFAULT_CAPACITY),
            height: vehicle.height.unwrap_or(DEFAULT_HEIGHT),
            price: vehicle.price.unwrap_or(DEFAULT_PRICE),
            status_id: vehicle.status_id,
        }
    }

    /// 校验草稿，返回被违反的规则集合（空集合表示可保存）
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationRule> {
        let mut violations = Vec::new();

        if self.plate.chars().count() != PLATE_LENGTH {
            violations.push(ValidationRule::PlateLength);
        }
        if self.model.chars().count() < MODEL_MIN_LENGTH {
            violations.push(ValidationRule::ModelLength);
        }
        if self.capacity < 1 {
            violations.push(ValidationRule::CapacityMin);
        }
        if self.height < 0.0 {
            violations.push(ValidationRule::HeightMin);
        }
        if self.price < 0.0 {
            violations.push(ValidationRule::PriceMin);
        }
        if self.status_id.is_none() {
            violations.push(ValidationRule::StatusRequired);
        }

        violations
    }

    /// 转换为网关请求体
    ///
    /// 状态引用缺失时返回 `None`（此时 [`validate`](Self::validate) 必然非空）。
    #[must_use]
    pub fn to_draft(&self) -> Option<VehicleDraft> {
        let status_id = self.status_id?;
        Some(VehicleDraft {
            plate: self.plate.clone(),
            model: self.model.clone(),
            capacity: self.capacity,
            height: self.height,
            price: self.price,
            status_id,
        })
    }
}
