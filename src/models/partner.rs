// 合作伙伴数据模型
// 定义允许提交交易的合作伙伴及其只读目录

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::sync::Arc;

/// 合作伙伴信息模型
#[derive(Debug, Clone, PartialEq)]
pub struct Partner {
    /// 合作伙伴参考编号
    pub partner_ref_no: String,
    /// 合作伙伴密钥
    pub partner_key: String,
    /// Base64编码的接入密码
    pub partner_password: String,
}

impl Partner {
    /// 由明文密码创建合作伙伴 (密码编码为Base64后存储)
    ///
    /// # Arguments
    /// * `partner_ref_no` - 合作伙伴参考编号
    /// * `partner_key` - 合作伙伴密钥
    /// * `plain_password` - 明文密码
    pub fn new(partner_ref_no: &str, partner_key: &str, plain_password: &str) -> Self {
        Self {
            partner_ref_no: partner_ref_no.to_string(),
            partner_key: partner_key.to_string(),
            partner_password: BASE64.encode(plain_password.as_bytes()),
        }
    }

    /// 由已编码的Base64密码创建合作伙伴 (不再二次编码)
    ///
    /// # Arguments
    /// * `partner_ref_no` - 合作伙伴参考编号
    /// * `partner_key` - 合作伙伴密钥
    /// * `password_base64` - Base64编码的密码
    pub fn from_base64(partner_ref_no: &str, partner_key: &str, password_base64: &str) -> Self {
        Self {
            partner_ref_no: partner_ref_no.to_string(),
            partner_key: partner_key.to_string(),
            partner_password: password_base64.to_string(),
        }
    }
}

/// 合作伙伴目录
///
/// 启动时构建一次, 运行期间只读共享
#[derive(Debug, Clone)]
pub struct PartnerDirectory {
    partners: Arc<Vec<Partner>>,
}

impl PartnerDirectory {
    /// 创建合作伙伴目录
    pub fn new(partners: Vec<Partner>) -> Self {
        Self {
            partners: Arc::new(partners),
        }
    }

    /// 检查目录中是否存在完全匹配的合作伙伴
    ///
    /// 编号、密钥、Base64密码三个字段必须逐一精确相等
    ///
    /// # Arguments
    /// * `partner_ref_no` - 合作伙伴参考编号
    /// * `partner_key` - 合作伙伴密钥
    /// * `partner_password` - Base64编码的密码
    ///
    /// # Returns
    /// * 是否存在匹配记录
    pub fn exists(&self, partner_ref_no: &str, partner_key: &str, partner_password: &str) -> bool {
        let candidate = Partner::from_base64(partner_ref_no, partner_key, partner_password);
        self.partners.iter().any(|partner| *partner == candidate)
    }

    /// 目录中的合作伙伴数量
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}
