// 时间戳工具函数
// 提供严格ISO-8601 UTC时间戳的解析、格式化与压缩转换

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use regex::Regex;

/// 严格解析ISO-8601 UTC时间戳
///
/// 仅接受形如 2024-08-15T02:11:22.1234567Z 的格式:
/// 小数秒必须恰好7位, 时区必须是字面量Z。
/// 格式正确但日历非法的值 (如2月30日或秒数60) 同样返回None。
///
/// # Arguments
/// * `value` - 待解析的时间戳字符串
///
/// # Returns
/// * 解析成功返回UTC时间, 否则返回None
pub fn parse_iso8601_utc_strict(value: &str) -> Option<DateTime<Utc>> {
    let layout_regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{7}Z$").unwrap();
    if !layout_regex.is_match(value) {
        return None;
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.fZ")
        .ok()
        // chrono把秒数60 (闰秒) 表示为纳秒字段>=1e9, 此处一并拒绝
        .filter(|naive| naive.nanosecond() < 1_000_000_000)
        .map(|naive| naive.and_utc())
}

/// 格式化为带7位小数秒的ISO-8601 UTC时间戳
///
/// # Arguments
/// * `dt` - UTC时间
///
/// # Returns
/// * 形如 2024-08-15T02:11:22.1234567Z 的字符串
pub fn format_iso8601_utc(dt: &DateTime<Utc>) -> String {
    // chrono的%.f不支持固定7位, 小数部分按100纳秒刻度手工拼接
    let ticks = dt.timestamp_subsec_nanos() % 1_000_000_000 / 100;
    format!("{}.{:07}Z", dt.format("%Y-%m-%dT%H:%M:%S"), ticks)
}

/// 转换为签名用的压缩时间戳 (yyyyMMddHHmmss)
///
/// # Arguments
/// * `dt` - UTC时间
///
/// # Returns
/// * 14位压缩时间戳字符串
pub fn to_compact_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%d%H%M%S").to_string()
}
