// 交易网关数据模型定义
// 包含合作伙伴、交易提交请求与响应等核心数据结构

mod partner;
mod transaction;

// 重新导出核心类型
pub use partner::*;
pub use transaction::*;
