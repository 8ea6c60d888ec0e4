// 签名工具函数
// 提供Base64校验、SHA-256哈希以及请求签名的构造、生成与验证

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sha2::{Digest, Sha256};

/// 校验字符串是否为合法的Base64编码文本
///
/// # Arguments
/// * `value` - 待校验的字符串
///
/// # Returns
/// * 非空、非纯空白且可解码时返回true
pub fn is_base64_string(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }

    BASE64.decode(value).is_ok()
}

/// 计算字符串UTF-8字节的SHA-256哈希
///
/// # Arguments
/// * `input` - 输入字符串
///
/// # Returns
/// * 64位小写十六进制摘要
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// 构造签名原文
///
/// 参与签名的请求字段按字段名字节序升序固定排列:
/// partnerKey, partnerRefNo, totalAmount
/// (sig、timestamp、partnerPassword、items不参与拼接)
///
/// 原文格式: 压缩时间戳(yyyyMMddHHmmss) + 字段值顺序拼接 + 请求中的Base64密码原样殿后
///
/// # Arguments
/// * `sig_timestamp` - 压缩形式的UTC时间戳
/// * `partner_key` - 合作伙伴密钥
/// * `partner_ref_no` - 合作伙伴参考编号
/// * `total_amount` - 总金额 (分)
/// * `partner_password` - 请求携带的Base64密码
///
/// # Returns
/// * 拼接后的签名原文
pub fn build_signing_string(
    sig_timestamp: &str,
    partner_key: &str,
    partner_ref_no: &str,
    total_amount: i64,
    partner_password: &str,
) -> String {
    format!(
        "{}{}{}{}{}",
        sig_timestamp, partner_key, partner_ref_no, total_amount, partner_password
    )
}

/// 对签名原文生成最终签名
///
/// 流程: SHA-256哈希 → 64位小写hex字符串 → 对hex字符串的UTF-8字节做Base64编码。
/// 注意是对hex字符串再编码而非对摘要原始字节编码, 这是对外接口契约的一部分。
///
/// # Arguments
/// * `signing_string` - 签名原文
///
/// # Returns
/// * Base64编码的最终签名 (88字符)
pub fn generate_signature(signing_string: &str) -> String {
    let hash_output = sha256_hex(signing_string);
    BASE64.encode(hash_output.as_bytes())
}

/// 计算请求签名
///
/// # Arguments
/// * `sig_timestamp` - 压缩形式的UTC时间戳
/// * `partner_key` - 合作伙伴密钥
/// * `partner_ref_no` - 合作伙伴参考编号
/// * `total_amount` - 总金额 (分)
/// * `partner_password` - 请求携带的Base64密码
///
/// # Returns
/// * 最终签名字符串
pub fn compute_signature(
    sig_timestamp: &str,
    partner_key: &str,
    partner_ref_no: &str,
    total_amount: i64,
    partner_password: &str,
) -> String {
    let signing_string = build_signing_string(
        sig_timestamp,
        partner_key,
        partner_ref_no,
        total_amount,
        partner_password,
    );
    generate_signature(&signing_string)
}

/// 验证请求签名
///
/// # Arguments
/// * `sig_timestamp` - 压缩形式的UTC时间戳
/// * `partner_key` - 合作伙伴密钥
/// * `partner_ref_no` - 合作伙伴参考编号
/// * `total_amount` - 总金额 (分)
/// * `partner_password` - 请求携带的Base64密码
/// * `claimed_sig` - 请求携带的签名
///
/// # Returns
/// * 签名是否有效
pub fn verify_signature(
    sig_timestamp: &str,
    partner_key: &str,
    partner_ref_no: &str,
    total_amount: i64,
    partner_password: &str,
    claimed_sig: &str,
) -> bool {
    let expected = compute_signature(
        sig_timestamp,
        partner_key,
        partner_ref_no,
        total_amount,
        partner_password,
    );
    constant_time_eq(&expected, claimed_sig)
}

/// 常量时间字符串比较 (防止时序攻击)
///
/// # Arguments
/// * `a` - 字符串A
/// * `b` - 字符串B
///
/// # Returns
/// * 字符串是否相等
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (byte_a, byte_b) in a.bytes().zip(b.bytes()) {
        result |= byte_a ^ byte_b;
    }

    result == 0
}
