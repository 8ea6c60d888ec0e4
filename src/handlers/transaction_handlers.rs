// 交易提交API处理器
// 处理合作伙伴的交易提交请求

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};

use crate::middleware::request_id;
use crate::models::{SubmitTrxErrorResponse, SubmitTrxRequest, SubmitTrxResponse};
use crate::services::discount_service;
use crate::services::{ValidationError, ValidationService};
use crate::state::AppState;

/// 提交交易
///
/// POST /api/submittrxmessage
///
/// 合作伙伴身份通过请求内的签名验证, 无需额外认证头
/// 请求体: SubmitTrxRequest
/// 响应: SubmitTrxResponse (200) 或 SubmitTrxErrorResponse (400)
pub async fn submit_trx_message(
    data: web::Data<AppState>,
    request: web::Json<SubmitTrxRequest>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let trx_id = request_id(&req);
    log::info!("Start submit transaction: {}", trx_id);

    let request = request.into_inner();

    // 字段级验证
    let validator = request.validate_fields();
    if validator.has_errors() {
        log::warn!("[{}] Request failed field validation", trx_id);
        return Ok(HttpResponse::BadRequest().json(validator.get_errors()));
    }

    // 业务验证管线
    let validation_service = ValidationService::new(data.directory.clone());
    if let Err(err) = validation_service.validate(&request) {
        return match err {
            ValidationError::Internal(cause) => {
                log::error!("[{}] Validation failed with internal error: {}", trx_id, cause);
                Err(actix_web::error::ErrorInternalServerError("Internal Server Error"))
            }
            rejection => {
                log::warn!("[{}] Request rejected: {}", trx_id, rejection);
                Ok(HttpResponse::BadRequest()
                    .json(SubmitTrxErrorResponse::new(&rejection.to_string())))
            }
        };
    }

    // 折扣计算
    let total_amount = request.total_amount;
    let total_discount = match discount_service::calculate_discount_amount(total_amount) {
        Some(amount) => amount,
        None => {
            log::error!(
                "[{}] Discount calculation out of range for amount {}",
                trx_id, total_amount
            );
            return Err(actix_web::error::ErrorInternalServerError("Internal Server Error"));
        }
    };

    let response = SubmitTrxResponse::new(total_amount, total_discount);
    log::info!(
        "End submit transaction: {} [result=1, totalAmount={}, totalDiscount={}, finalAmount={}]",
        trx_id, response.total_amount, response.total_discount, response.final_amount
    );

    Ok(HttpResponse::Ok().json(response))
}
