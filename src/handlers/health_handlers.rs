// 健康检查和系统状态API处理器
// 提供服务健康状态与版本信息查询接口

use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Serialize;

use crate::state::AppState;
use crate::utils::format_iso8601_utc;

/// 系统健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 版本信息
    pub version: String,
    /// 已加载的合作伙伴数量
    pub partners: usize,
    /// 当前服务器时间 (严格ISO 8601 UTC格式)
    pub timestamp: String,
}

/// 基础健康检查
///
/// GET /health
///
/// 无需认证
/// 响应: HealthResponse
pub async fn health_check(data: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let health = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        partners: data.directory.len(),
        timestamp: format_iso8601_utc(&chrono::Utc::now()),
    };

    Ok(HttpResponse::Ok().json(health))
}

/// 系统版本信息
///
/// GET /version
///
/// 无需认证
/// 响应: 版本信息
pub async fn version_info() -> ActixResult<HttpResponse> {
    let version_info = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    });

    Ok(HttpResponse::Ok().json(version_info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new_for_test()))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["partners"], 2);

        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(crate::utils::parse_iso8601_utc_strict(timestamp).is_some());
    }

    #[actix_web::test]
    async fn test_version_info() {
        let app = test::init_service(App::new().route("/version", web::get().to(version_info))).await;

        let req = test::TestRequest::get().uri("/version").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "trxgate");
    }
}
