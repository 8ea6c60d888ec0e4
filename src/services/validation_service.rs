// 交易请求验证服务
// 按固定顺序执行密码、时间戳、授权、总金额、时效五项检查

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use thiserror::Error;

use crate::models::{PartnerDirectory, SubmitTrxRequest};
use crate::utils::{
    is_base64_string, parse_iso8601_utc_strict, to_compact_timestamp, verify_signature,
};

/// 请求时效窗口 (分钟)
const EXPIRY_MARGIN_MINUTES: i64 = 5;

/// 验证失败原因
///
/// 前五个变体是业务拒绝, 映射为400响应;
/// Internal是内部故障, 映射为500而不暴露细节
#[derive(Debug, Error)]
pub enum ValidationError {
    /// 密码不是合法的Base64文本
    #[error("PartnerPassword must be a valid Base64 encoded string.")]
    PasswordNotBase64,
    /// 时间戳不符合严格ISO-8601 UTC格式
    #[error("Timestamp must be a valid ISO 8601 UTC datetime string (e.g., 2024-08-15T02:11:22.0000000Z).")]
    InvalidTimestamp,
    /// 合作伙伴未授权或签名不匹配
    #[error("Access Denied!")]
    AccessDenied,
    /// 总金额与商品明细合计不一致
    #[error("Invalid Total Amount.")]
    InvalidTotalAmount,
    /// 请求超出时效窗口
    #[error("Expired.")]
    Expired,
    /// 内部故障
    #[error("{0}")]
    Internal(anyhow::Error),
}

/// 交易请求验证服务
pub struct ValidationService {
    directory: PartnerDirectory,
}

impl ValidationService {
    /// 创建新的验证服务实例
    pub fn new(directory: PartnerDirectory) -> Self {
        Self { directory }
    }

    /// 按固定顺序验证交易请求
    ///
    /// 检查顺序: Base64密码 → 时间戳格式 → 授权 → 总金额 → 时效,
    /// 命中第一个失败项立即返回
    ///
    /// # Arguments
    /// * `request` - 交易提交请求
    ///
    /// # Returns
    /// * 验证通过返回Ok, 否则返回具体失败原因
    pub fn validate(&self, request: &SubmitTrxRequest) -> Result<(), ValidationError> {
        log::debug!("Validating request: {}", request.partner_ref_no);

        if !is_base64_string(&request.partner_password) {
            return Err(ValidationError::PasswordNotBase64);
        }

        if parse_iso8601_utc_strict(&request.timestamp).is_none() {
            return Err(ValidationError::InvalidTimestamp);
        }

        if !self.is_authorized(request).map_err(ValidationError::Internal)? {
            return Err(ValidationError::AccessDenied);
        }

        if !self.is_valid_total_amount(request) {
            return Err(ValidationError::InvalidTotalAmount);
        }

        if self.is_expired(&request.timestamp).map_err(ValidationError::Internal)? {
            return Err(ValidationError::Expired);
        }

        Ok(())
    }

    /// 验证合作伙伴授权
    ///
    /// 先做目录成员匹配, 命中后再重算签名比对;
    /// 目录不命中时直接拒绝, 不计算签名
    fn is_authorized(&self, request: &SubmitTrxRequest) -> Result<bool> {
        log::debug!("Validate authorization.");

        if !self.directory.exists(
            &request.partner_ref_no,
            &request.partner_key,
            &request.partner_password,
        ) {
            return Ok(false);
        }

        let request_time = parse_iso8601_utc_strict(&request.timestamp)
            .context("Failed to parse timestamp while building signature")?;
        let sig_timestamp = to_compact_timestamp(&request_time);

        Ok(verify_signature(
            &sig_timestamp,
            &request.partner_key,
            &request.partner_ref_no,
            request.total_amount,
            &request.partner_password,
            &request.sig,
        ))
    }

    /// 校验总金额与商品明细合计一致
    ///
    /// 空明细列表视为金额无效, 求和溢出同样视为不一致
    fn is_valid_total_amount(&self, request: &SubmitTrxRequest) -> bool {
        log::debug!("Validate Total Amount.");

        if request.items.is_empty() {
            return false;
        }

        match request.items_total() {
            Some(items_amount) => items_amount == request.total_amount,
            None => false,
        }
    }

    /// 校验请求时效 (与服务器时间的绝对差不超过5分钟)
    fn is_expired(&self, timestamp: &str) -> Result<bool> {
        log::debug!("Validate Expiry.");

        let request_time = parse_iso8601_utc_strict(timestamp)
            .context("Failed to parse timestamp while checking expiry")?;
        let server_time = Utc::now();

        let mut difference = server_time - request_time;
        if difference < Duration::zero() {
            difference = -difference;
        }

        Ok(difference > Duration::minutes(EXPIRY_MARGIN_MINUTES))
    }
}
