// 服务层模块
// 包含所有业务逻辑服务

pub mod discount_service;
pub mod validation_service;

// 重新导出服务
pub use validation_service::{ValidationError, ValidationService};
