//! 用户可见通知通道
//!
//! 管理器不直接触碰任何 UI 原语；所有需要用户看到的警告/错误都经由
//! [`Notifier`] 发布，表现层自行决定如何呈现（弹窗、状态栏等）。

/// 用户可见通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// 降级运行的警告（如参考数据加载失败）
    Warning(String),
    /// 操作失败的错误
    Error(String),
}

impl Notice {
    /// 通知文本
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Warning(msg) | Self::Error(msg) => msg,
        }
    }
}

/// 通知发布 Trait
///
/// 表现层实现此 trait 订阅管理器的用户可见事件；测试用记录替身。
pub trait Notifier: Send + Sync {
    /// 发布一条通知
    fn publish(&self, notice: Notice);
}

/// 把通知写入日志的缺省实现（无界面场景）
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn publish(&self, notice: Notice) {
        match notice {
            Notice::Warning(msg) => log::warn!("{msg}"),
            Notice::Error(msg) => log::error!("{msg}"),
        }
    }
}
