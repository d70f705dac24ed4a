//! 过期时间格式化模块
//!
//! # 设计思路
//!
//! 服务端返回的 `expires_at` 是 Unix 时间戳，但单位（秒 / 毫秒）并不自描述，
//! 需要按数量级推断：低于 1e12 视为秒，否则视为毫秒。
//! 该阈值只是启发式约定而非协议保证，上游契约应当显式声明单位，
//! 在此之前保持与现有服务完全一致的行为（决策记录见 DESIGN.md）。
//!
//! # 实现思路
//!
//! - 入参保留为原始 `serde_json::Value`，非数字（含缺失）降级为 "Unknown"。
//! - 数值 ≤ 0 表示永不过期，渲染为 "Never"。
//! - 推断出的毫秒时间戳若无法构成合法日历时间，回退为入参的字面字符串。
//! - 合法时间用 `chrono::Local` 按本地时区的日期时间惯例渲染。

use chrono::{Local, LocalResult, TimeZone};
use serde_json::Value;

/// 秒 / 毫秒分界阈值：低于该值按 Unix 秒处理，否则按毫秒处理
const MILLIS_THRESHOLD: f64 = 1_000_000_000_000.0;

/// 将服务端的 `expires_at` 渲染为用户可读文本。
///
/// # 返回
/// - 非数字或缺失 → `"Unknown"`
/// - 数值 ≤ 0 → `"Never"`
/// - 合法时间戳 → 本地时区的日期时间文本
/// - 数量级合法但无法构成日历时间 → 入参的字面字符串
pub fn format_expires_at(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return "Unknown".to_string();
    };
    let Some(number) = value.as_f64() else {
        return "Unknown".to_string();
    };

    if number <= 0.0 {
        return "Never".to_string();
    }

    let millis = if number < MILLIS_THRESHOLD {
        number * 1000.0
    } else {
        number
    };

    if !millis.is_finite() || millis >= i64::MAX as f64 {
        return value.to_string();
    }

    match Local.timestamp_millis_opt(millis as i64) {
        LocalResult::Single(datetime) => datetime.format("%c").to_string(),
        LocalResult::Ambiguous(earliest, _) => earliest.format("%c").to_string(),
        LocalResult::None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_value_is_unknown() {
        assert_eq!(format_expires_at(None), "Unknown");
    }

    #[test]
    fn test_non_numeric_value_is_unknown() {
        assert_eq!(format_expires_at(Some(&json!("x"))), "Unknown");
        assert_eq!(format_expires_at(Some(&json!(null))), "Unknown");
        assert_eq!(format_expires_at(Some(&json!({"at": 1}))), "Unknown");
    }

    #[test]
    fn test_zero_and_negative_mean_never() {
        assert_eq!(format_expires_at(Some(&json!(0))), "Never");
        assert_eq!(format_expires_at(Some(&json!(-5))), "Never");
    }

    #[test]
    fn test_seconds_and_millis_render_same_moment() {
        let seconds = format_expires_at(Some(&json!(1_700_000_000_u64)));
        let millis = format_expires_at(Some(&json!(1_700_000_000_000_u64)));
        assert_eq!(seconds, millis);
        assert_ne!(seconds, "Unknown");
        assert_ne!(seconds, "Never");
    }

    #[test]
    fn test_unrepresentable_value_falls_back_to_literal() {
        let value = json!(1e30);
        assert_eq!(format_expires_at(Some(&value)), value.to_string());
    }
}
