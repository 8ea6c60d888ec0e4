// 交易数据模型
// 定义交易提交接口的请求与响应结构

use serde::{Deserialize, Serialize};

use crate::utils::validation::InputValidator;

/// 交易提交请求
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTrxRequest {
    /// 合作伙伴密钥
    pub partner_key: String,
    /// 合作伙伴参考编号
    pub partner_ref_no: String,
    /// Base64编码的接入密码
    pub partner_password: String,
    /// 总金额 (分)
    pub total_amount: i64,
    /// 商品明细 (可省略, 默认为空列表)
    #[serde(default)]
    pub items: Vec<ItemDetail>,
    /// ISO-8601 UTC时间戳 (7位小数秒)
    pub timestamp: String,
    /// 请求签名
    pub sig: String,
}

/// 商品明细
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    /// 合作伙伴商品编号
    pub partner_item_ref: String,
    /// 商品名称
    pub name: String,
    /// 数量 (1-5)
    pub qty: i32,
    /// 单价 (分)
    pub unit_price: i64,
}

impl SubmitTrxRequest {
    /// 计算商品明细的合计金额
    ///
    /// 每行金额为 qty * unitPrice, 全程使用checked运算
    ///
    /// # Returns
    /// * 求和结果, 溢出时返回None
    pub fn items_total(&self) -> Option<i64> {
        let mut total: i64 = 0;
        for item in &self.items {
            let line_amount = i64::from(item.qty).checked_mul(item.unit_price)?;
            total = total.checked_add(line_amount)?;
        }
        Some(total)
    }

    /// 字段级验证 (必填、最大长度、数值范围)
    ///
    /// # Returns
    /// * 收集了所有字段错误的验证器
    pub fn validate_fields(&self) -> InputValidator {
        let mut validator = InputValidator::new();

        validator.validate_required("partnerKey", &self.partner_key, "PartnerKey is required.");
        validator.validate_max_length(
            "partnerKey",
            &self.partner_key,
            50,
            "PartnerKey cannot exceed 50 characters.",
        );

        validator.validate_required("partnerRefNo", &self.partner_ref_no, "PartnerRefNo is required.");
        validator.validate_max_length(
            "partnerRefNo",
            &self.partner_ref_no,
            50,
            "PartnerRefNo cannot exceed 50 characters.",
        );

        validator.validate_required(
            "partnerPassword",
            &self.partner_password,
            "PartnerPassword is required.",
        );
        validator.validate_max_length(
            "partnerPassword",
            &self.partner_password,
            50,
            "PartnerPassword cannot exceed 50 characters.",
        );

        validator.validate_range(
            "totalAmount",
            self.total_amount,
            1,
            i64::MAX,
            "TotalAmount must be a positive value.",
        );

        validator.validate_required("timestamp", &self.timestamp, "Timestamp is required.");
        validator.validate_required("sig", &self.sig, "Sig is required.");

        for (index, item) in self.items.iter().enumerate() {
            let field = |name: &str| format!("items[{}].{}", index, name);

            validator.validate_required(
                &field("partnerItemRef"),
                &item.partner_item_ref,
                "PartnerItemRef is required.",
            );
            validator.validate_max_length(
                &field("partnerItemRef"),
                &item.partner_item_ref,
                50,
                "PartnerItemRef cannot exceed 50 characters.",
            );

            validator.validate_required(&field("name"), &item.name, "Name is required.");
            validator.validate_max_length(
                &field("name"),
                &item.name,
                100,
                "Name cannot exceed 100 characters.",
            );

            validator.validate_range(
                &field("qty"),
                i64::from(item.qty),
                1,
                5,
                "Quantity must be between 1 and 5.",
            );
            validator.validate_range(
                &field("unitPrice"),
                item.unit_price,
                1,
                i64::MAX,
                "UnitPrice must be a positive value.",
            );
        }

        validator
    }
}

/// 交易提交成功响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTrxResponse {
    /// 处理结果 (1 = 成功)
    pub result: i32,
    /// 总金额 (分)
    pub total_amount: i64,
    /// 折扣金额 (分)
    pub total_discount: i64,
    /// 实付金额 (分)
    pub final_amount: i64,
}

impl SubmitTrxResponse {
    /// 创建成功响应 (实付金额 = 总金额 - 折扣金额)
    pub fn new(total_amount: i64, total_discount: i64) -> Self {
        Self {
            result: 1,
            total_amount,
            total_discount,
            final_amount: total_amount - total_discount,
        }
    }
}

/// 交易提交失败响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTrxErrorResponse {
    /// 处理结果 (0 = 失败)
    pub result: i32,
    /// 失败原因
    pub result_message: String,
}

impl SubmitTrxErrorResponse {
    /// 创建失败响应
    pub fn new(message: &str) -> Self {
        Self {
            result: 0,
            result_message: message.to_string(),
        }
    }
}
