// 数据验证工具函数
// 提供请求字段级验证和错误收集功能

use std::collections::HashMap;

/// 通用输入验证器
///
/// 按字段收集验证错误消息, 一个字段可以累积多条错误
pub struct InputValidator {
    errors: HashMap<String, Vec<String>>,
}

impl InputValidator {
    /// 创建新的验证器
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// 添加字段验证错误
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(Vec::new)
            .push(message.to_string());
    }

    /// 验证必填字段
    pub fn validate_required(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add_error(field, message);
        }
    }

    /// 验证字符串最大长度 (按字符计数, 多字节字符算一个)
    pub fn validate_max_length(&mut self, field: &str, value: &str, max: usize, message: &str) {
        if value.chars().count() > max {
            self.add_error(field, message);
        }
    }

    /// 验证数值范围 (闭区间)
    pub fn validate_range(&mut self, field: &str, value: i64, min: i64, max: i64, message: &str) {
        if value < min || value > max {
            self.add_error(field, message);
        }
    }

    /// 检查是否有验证错误
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 获取验证错误
    pub fn get_errors(&self) -> &HashMap<String, Vec<String>> {
        &self.errors
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_validator_collects_errors() {
        let mut validator = InputValidator::new();

        validator.validate_required("PartnerKey", "", "PartnerKey is required.");
        validator.validate_max_length(
            "PartnerRefNo",
            &"X".repeat(51),
            50,
            "PartnerRefNo cannot exceed 50 characters.",
        );
        validator.validate_range("TotalAmount", 0, 1, i64::MAX, "TotalAmount must be a positive value.");

        assert!(validator.has_errors());
        assert_eq!(validator.get_errors().len(), 3);
        assert_eq!(
            validator.get_errors()["PartnerKey"],
            vec!["PartnerKey is required."]
        );
    }

    #[test]
    fn test_input_validator_passes_valid_input() {
        let mut validator = InputValidator::new();

        validator.validate_required("PartnerKey", "FAKEGOOGLE", "PartnerKey is required.");
        validator.validate_max_length(
            "PartnerKey",
            "FAKEGOOGLE",
            50,
            "PartnerKey cannot exceed 50 characters.",
        );
        validator.validate_range("TotalAmount", 100000, 1, i64::MAX, "TotalAmount must be a positive value.");
        validator.validate_range("Qty", 5, 1, 5, "Quantity must be between 1 and 5.");

        assert!(!validator.has_errors());
    }

    #[test]
    fn test_validate_max_length_counts_characters() {
        let mut validator = InputValidator::new();

        // 40个汉字共120字节, 以字符计远在100字符限制之内
        let cjk_name = "高".repeat(40);
        assert_eq!(cjk_name.len(), 120);
        validator.validate_max_length("Name", &cjk_name, 100, "Name cannot exceed 100 characters.");
        assert!(!validator.has_errors());

        validator.validate_max_length(
            "Name",
            &"高".repeat(101),
            100,
            "Name cannot exceed 100 characters.",
        );
        assert!(validator.has_errors());
    }

    #[test]
    fn test_input_validator_accumulates_per_field() {
        let mut validator = InputValidator::new();

        validator.validate_required("PartnerKey", "   ", "PartnerKey is required.");
        validator.add_error("PartnerKey", "PartnerKey cannot exceed 50 characters.");

        assert_eq!(validator.get_errors()["PartnerKey"].len(), 2);
    }

    #[test]
    fn test_validate_range_boundaries() {
        let mut validator = InputValidator::new();

        validator.validate_range("Qty", 1, 1, 5, "Quantity must be between 1 and 5.");
        validator.validate_range("Qty", 5, 1, 5, "Quantity must be between 1 and 5.");
        assert!(!validator.has_errors());

        validator.validate_range("Qty", 0, 1, 5, "Quantity must be between 1 and 5.");
        validator.validate_range("Qty", 6, 1, 5, "Quantity must be between 1 and 5.");
        assert_eq!(validator.get_errors()["Qty"].len(), 2);
    }
}
