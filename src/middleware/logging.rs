// 请求日志中间件
// 为每个请求分配追踪ID, 并记录方法、路径、状态码与耗时

use actix_web::{
    dev::{ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::{ok, Ready};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;
use uuid::Uuid;

/// 请求追踪ID (写入请求扩展, 供处理器关联业务日志)
#[derive(Debug, Clone, Copy)]
pub struct RequestId(pub Uuid);

/// 读取当前请求的追踪ID, 不存在时现场生成一个
pub fn request_id(req: &HttpRequest) -> Uuid {
    req.extensions()
        .get::<RequestId>()
        .map(|id| id.0)
        .unwrap_or_else(Uuid::new_v4)
}

/// 请求日志中间件
pub struct RequestLogging;

impl<S, B> Transform<S, ServiceRequest> for RequestLogging
where
    S: actix_web::dev::Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestLoggingMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequestLoggingMiddleware { service })
    }
}

pub struct RequestLoggingMiddleware<S> {
    service: S,
}

impl<S, B> actix_web::dev::Service<ServiceRequest> for RequestLoggingMiddleware<S>
where
    S: actix_web::dev::Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4();
        req.extensions_mut().insert(RequestId(trace_id));

        let start_time = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let remote_addr = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let duration = start_time.elapsed();

            match &result {
                Ok(response) => {
                    let status = response.status().as_u16();

                    if status >= 400 {
                        log::warn!(
                            "[{}] {} {} {} {}ms - {}",
                            trace_id, remote_addr, method, path, duration.as_millis(), status
                        );
                    } else {
                        log::info!(
                            "[{}] {} {} {} {}ms - {}",
                            trace_id, remote_addr, method, path, duration.as_millis(), status
                        );
                    }
                }
                Err(e) => {
                    log::error!(
                        "[{}] {} {} {} {}ms - ERROR: {}",
                        trace_id, remote_addr, method, path, duration.as_millis(), e
                    );
                }
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    async fn echo_request_id(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(request_id(&req).to_string())
    }

    #[actix_web::test]
    async fn test_request_id_is_available_to_handlers() {
        let app = test::init_service(
            App::new()
                .wrap(RequestLogging)
                .route("/echo", web::get().to(echo_request_id)),
        )
        .await;

        let req = test::TestRequest::get().uri("/echo").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let id = std::str::from_utf8(&body).unwrap().to_string();
        assert!(Uuid::parse_str(&id).is_ok());

        // 每个请求分配独立的追踪ID
        let req = test::TestRequest::get().uri("/echo").to_request();
        let resp = test::call_service(&app, req).await;
        let body = test::read_body(resp).await;
        let second_id = std::str::from_utf8(&body).unwrap().to_string();
        assert_ne!(id, second_id);
    }
}
