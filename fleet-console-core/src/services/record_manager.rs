//! 车辆记录管理工作流
//!
//! 持有当前车辆/状态集合、表单草稿与弹窗状态，按
//! 加载 → 展示 → 编辑 → 保存 → 刷新 的流程编排网关调用。
//! 所有用户可见的失败经由 [`Notifier`] 发布，状态字段由表现层读取。

use std::sync::Arc;

use fleet_console_gateway::{Status, StatusGateway, Vehicle, VehicleGateway};

use crate::error::{CoreError, CoreResult};
use crate::form::VehicleForm;
use crate::notify::{Notice, Notifier};

/// 新建模式下可选状态的标签（精确匹配，区分大小写）
const ACTIVE_STATUS_LABEL: &str = "Activo";
/// 状态引用为空时的占位标签
const STATUS_NONE_PLACEHOLDER: &str = "—";
/// 状态引用无法解析时的占位标签
const STATUS_UNKNOWN_LABEL: &str = "Desconocido";

/// 搜索子条件（车牌 / 型号 / 年份）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub plate: String,
    pub model: String,
    pub year: Option<i32>,
}

impl SearchFilters {
    /// 把三个子条件修剪后用单个空格拼成一个过滤串
    ///
    /// 空字段不参与拼接，因此结果没有多余空格；匹配语义完全交给后端。
    #[must_use]
    pub fn combined(&self) -> String {
        let year = self.year.map(|y| y.to_string());
        [self.plate.trim(), self.model.trim(), year.as_deref().unwrap_or("")]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 车辆记录管理器
///
/// 单线程事件驱动：所有方法都经由 `&mut self` 顺序调用，
/// 每次网关调用独立，失败只影响本次操作，不回滚已有状态。
pub struct RecordManager {
    vehicle_gateway: Arc<dyn VehicleGateway>,
    status_gateway: Arc<dyn StatusGateway>,
    notifier: Arc<dyn Notifier>,

    /// 当前展示的车辆集合
    pub vehicles: Vec<Vehicle>,
    /// 参考状态集合（每次会话加载一次，只读）
    pub statuses: Vec<Status>,
    /// 编辑表单草稿
    pub form: VehicleForm,
    /// 弹窗是否可见（表现层据此渲染对话框）
    pub modal_visible: bool,
    /// 正在编辑的车辆 ID（None ⇒ 新建模式）
    pub editing_id: Option<i64>,
    /// 是否处于新建模式（决定可选状态过滤）
    pub creating: bool,
    /// 搜索子条件
    pub filters: SearchFilters,
    /// 搜索是否进行中
    pub loading: bool,
}

impl RecordManager {
    /// 创建记录管理器
    #[must_use]
    pub fn new(
        vehicle_gateway: Arc<dyn VehicleGateway>,
        status_gateway: Arc<dyn StatusGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            vehicle_gateway,
            status_gateway,
            notifier,
            vehicles: Vec::new(),
            statuses: Vec::new(),
            form: VehicleForm::default(),
            modal_visible: false,
            editing_id: None,
            creating: false,
            filters: SearchFilters::default(),
            loading: false,
        }
    }

    /// 初始化：先加载状态，再加载车辆
    ///
    /// 状态加载失败只发出警告并继续加载车辆——参考数据缺失
    /// 不能阻塞主数据。
    pub async fn initialize(&mut self) {
        match self.status_gateway.list().await {
            Ok(statuses) => self.statuses = statuses,
            Err(e) => {
                log::warn!("Failed to load statuses: {}", CoreError::from(e));
                self.notifier
                    .publish(Notice::Warning("No se pudieron cargar los estados.".to_string()));
            }
        }
        self.refresh().await;
    }

    /// 全量刷新车辆列表
    ///
    /// 成功时整体替换集合；失败时保留原有数据并发出错误通知。
    pub async fn refresh(&mut self) {
        match self.vehicle_gateway.list().await {
            Ok(vehicles) => self.vehicles = vehicles,
            Err(e) => self.report(
                &CoreError::from(e),
                "No se pudieron cargar los vehículos.",
            ),
        }
    }

    /// 按组合过滤串搜索
    ///
    /// 搜索失败只记录日志、保留原有数据，不发用户通知——与列表刷新
    /// 的失败处理不对称，按既有行为保留。
    pub async fn search(&mut self) {
        self.loading = true;

        let filter = self.filters.combined();
        match self.vehicle_gateway.search(&filter).await {
            Ok(vehicles) => self.vehicles = vehicles,
            Err(e) => log::error!("Search failed: {e}"),
        }

        self.loading = false;
    }

    /// 打开新建弹窗
    ///
    /// 重置草稿为默认值，状态引用默认指向第一个 "Activo" 状态。
    pub fn open_create(&mut self) {
        self.creating = true;
        self.editing_id = None;
        self.form = VehicleForm {
            status_id: self.default_status_id(),
            ..VehicleForm::default()
        };
        self.modal_visible = true;
    }

    /// 打开编辑弹窗
    ///
    /// 没有服务端 ID 的草稿无法编辑：发出错误并中止，状态不变。
    pub fn open_edit(&mut self, vehicle: &Vehicle) {
        let Some(id) = vehicle.id else {
            self.report(
                &CoreError::MissingVehicleId,
                "Vehículo sin ID. No se puede editar.",
            );
            return;
        };

        self.creating = false;
        self.editing_id = Some(id);
        self.form = VehicleForm::from_vehicle(vehicle);
        self.modal_visible = true;
    }

    /// 保存草稿（新建或更新，由 `editing_id` 决定）
    ///
    /// 校验不通过时静默不做任何事；成功时隐藏弹窗并触发一次全量刷新；
    /// 失败时保持弹窗打开，让用户修正后重试。
    pub async fn save(&mut self) {
        let violations = self.form.validate();
        if !violations.is_empty() {
            log::debug!("Save blocked by validation: {violations:?}");
            return;
        }

        match self.dispatch_save().await {
            Ok(_) => {
                self.modal_visible = false;
                self.refresh().await;
            }
            Err(e) => self.report(&e, "Error al guardar el vehículo."),
        }
    }

    /// 查询状态标签（三段回退）
    ///
    /// 引用为空 → "—"；无匹配 → "Desconocido"；否则返回状态标签。
    #[must_use]
    pub fn status_label(&self, status_id: Option<i64>) -> &str {
        let Some(id) = status_id else {
            return STATUS_NONE_PLACEHOLDER;
        };
        self.statuses
            .iter()
            .find(|s| s.id == Some(id))
            .map_or(STATUS_UNKNOWN_LABEL, |s| s.label.as_str())
    }

    /// 状态引用相等判断（用于选择框绑定）
    ///
    /// 双空相等；空与非空不等；否则按值比较。
    #[must_use]
    pub fn status_refs_equal(a: Option<i64>, b: Option<i64>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// 表单可选的状态列表
    ///
    /// 新建模式只允许标签精确等于 "Activo" 的状态；编辑模式不限制。
    #[must_use]
    pub fn selectable_statuses(&self) -> Vec<&Status> {
        if self.creating {
            self.statuses
                .iter()
                .filter(|s| s.label == ACTIVE_STATUS_LABEL)
                .collect()
        } else {
            self.statuses.iter().collect()
        }
    }

    /// 分发创建或更新请求
    async fn dispatch_save(&self) -> CoreResult<Vehicle> {
        let Some(draft) = self.form.to_draft() else {
            return Err(CoreError::ValidationFailed(self.form.validate()));
        };

        let saved = match self.editing_id {
            Some(id) => self.vehicle_gateway.update(id, &draft).await?,
            None => self.vehicle_gateway.create(&draft).await?,
        };
        Ok(saved)
    }

    /// 新建草稿的默认状态引用：第一个 "Activo" 状态，否则第一个状态
    fn default_status_id(&self) -> Option<i64> {
        self.statuses
            .iter()
            .find(|s| s.label == ACTIVE_STATUS_LABEL)
            .or_else(|| self.statuses.first())
            .and_then(|s| s.id)
    }

    /// 记录错误日志并发布用户可见通知
    fn report(&self, err: &CoreError, message: &str) {
        if err.is_expected() {
            log::warn!("{err}");
        } else {
            log::error!("{err}");
        }
        self.notifier.publish(Notice::Error(message.to_string()));
    }
}
