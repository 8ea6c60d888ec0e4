// API路由配置
// 定义所有HTTP接口的路由规则

use actix_web::{web, Scope};
use crate::handlers::*;

/// 交易API路由配置
pub fn api_routes() -> Scope {
    web::scope("/api")
        // 交易提交路由
        .route("/submittrxmessage", web::post().to(submit_trx_message))
}

/// 公共路由 (无需认证)
pub fn public_routes() -> Scope {
    web::scope("")
        .route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info))
}
