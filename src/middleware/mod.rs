// 中间件模块
// 包含请求日志等HTTP中间件

pub mod logging;

pub use logging::{request_id, RequestLogging};
