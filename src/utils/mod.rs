// 工具函数模块
// 包含签名、时间戳、字段验证等通用工具

pub mod crypto;
pub mod timestamp;
pub mod validation;

// 重新导出常用函数
pub use crypto::*;
pub use timestamp::*;
pub use validation::*;
