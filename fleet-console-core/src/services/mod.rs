//! 业务逻辑服务层

mod record_manager;

pub use record_manager::{RecordManager, SearchFilters};
