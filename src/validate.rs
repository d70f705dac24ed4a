//! 输入校验模块
//!
//! # 设计思路
//!
//! 在发起任何网络请求之前，对用户输入的长链接与可选 TTL 做本地校验。
//! 校验通过即产出可直接序列化发送的 `ShortenRequest`，
//! 失败则返回带固定用户提示文案的 `ValidationError`。
//!
//! # 实现思路
//!
//! - 两个输入先 trim 再检查。
//! - URL 用 `reqwest::Url` 解析判定绝对地址，协议仅接受 http/https。
//! - TTL 使用 `once_cell::sync::Lazy` 预编译的 `^\d+$` 正则做语法检查，
//!   再经整数解析确认为正整数；前导零（如 "007"）按数字序列接受。
//! - 纯同步函数，无任何副作用。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// 预编译的 TTL 语法正则：仅允许纯数字（无符号、无小数、无空白）
static TTL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// 短链创建请求体
///
/// 每次提交都重新构造，不做任何持久化。
/// `ttl_seconds` 为 `None` 时从请求体中省略，表示使用服务端默认 TTL。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    pub long_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_seconds: Option<u64>,
}

/// 输入校验错误
///
/// `Display` 输出即最终展示给用户的提示文案。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// 长链接为空
    #[error("Long URL is required.")]
    EmptyUrl,

    /// 长链接无法解析为绝对地址，或协议不是 http/https
    #[error("Please enter a valid URL including http:// or https://.")]
    InvalidUrl,

    /// TTL 不是正整数
    #[error("TTL must be an integer greater than 0.")]
    InvalidTtl,
}

/// 判断文本是否为合法的 http/https 绝对地址。
fn is_valid_url(text: &str) -> bool {
    match reqwest::Url::parse(text) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// 校验用户输入并构造请求体。
///
/// # 参数
/// * `long_url_text` - 长链接输入框的原始文本
/// * `ttl_text` - TTL 输入框的原始文本，空串表示不指定 TTL
///
/// # 返回
/// - `Ok(ShortenRequest)`：校验通过，可直接提交
/// - `Err(ValidationError)`：校验失败，携带用户提示文案
pub fn validate(long_url_text: &str, ttl_text: &str) -> Result<ShortenRequest, ValidationError> {
    let long_url = long_url_text.trim();
    let ttl_raw = ttl_text.trim();

    if long_url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }

    if !is_valid_url(long_url) {
        return Err(ValidationError::InvalidUrl);
    }

    let ttl_seconds = if ttl_raw.is_empty() {
        None
    } else {
        if !TTL_PATTERN.is_match(ttl_raw) {
            return Err(ValidationError::InvalidTtl);
        }
        // 位数超出 u64 的数字序列同样按非法 TTL 处理
        let ttl: u64 = ttl_raw.parse().map_err(|_| ValidationError::InvalidTtl)?;
        if ttl == 0 {
            return Err(ValidationError::InvalidTtl);
        }
        Some(ttl)
    };

    Ok(ShortenRequest {
        long_url: long_url.to_string(),
        ttl_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_https_url_accepted() {
        let request = validate("https://example.com/page", "").unwrap();
        assert_eq!(request.long_url, "https://example.com/page");
        assert_eq!(request.ttl_seconds, None);
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let request = validate("  http://example.com  ", " 60 ").unwrap();
        assert_eq!(request.long_url, "http://example.com");
        assert_eq!(request.ttl_seconds, Some(60));
    }

    #[test]
    fn test_empty_url_rejected() {
        assert_eq!(validate("", ""), Err(ValidationError::EmptyUrl));
        assert_eq!(validate("   ", ""), Err(ValidationError::EmptyUrl));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        assert_eq!(
            validate("ftp://example.com", ""),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(
            validate("javascript:alert(1)", ""),
            Err(ValidationError::InvalidUrl)
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        assert_eq!(
            validate("example.com/page", ""),
            Err(ValidationError::InvalidUrl)
        );
        assert_eq!(validate("not a url", ""), Err(ValidationError::InvalidUrl));
    }

    #[test]
    fn test_ttl_with_leading_zeros_accepted() {
        let request = validate("https://example.com", "007").unwrap();
        assert_eq!(request.ttl_seconds, Some(7));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        assert_eq!(
            validate("https://example.com", "0"),
            Err(ValidationError::InvalidTtl)
        );
        assert_eq!(
            validate("https://example.com", "000"),
            Err(ValidationError::InvalidTtl)
        );
    }

    #[test]
    fn test_non_digit_ttl_rejected() {
        for ttl in ["abc", "-5", "+5", "1.5", "1e3", "12 3"] {
            assert_eq!(
                validate("https://example.com", ttl),
                Err(ValidationError::InvalidTtl),
                "ttl text {:?} should be rejected",
                ttl
            );
        }
    }

    #[test]
    fn test_overlong_digit_ttl_rejected() {
        assert_eq!(
            validate("https://example.com", "99999999999999999999999999"),
            Err(ValidationError::InvalidTtl)
        );
    }

    #[test]
    fn test_ttl_omitted_from_serialized_body() {
        let request = validate("https://example.com", "").unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("ttl_seconds").is_none());

        let request = validate("https://example.com", "60").unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["ttl_seconds"], 60);
    }

    #[test]
    fn test_error_messages_match_ui_copy() {
        assert_eq!(ValidationError::EmptyUrl.to_string(), "Long URL is required.");
        assert_eq!(
            ValidationError::InvalidUrl.to_string(),
            "Please enter a valid URL including http:// or https://."
        );
        assert_eq!(
            ValidationError::InvalidTtl.to_string(),
            "TTL must be an integer greater than 0."
        );
    }

    proptest! {
        #[test]
        fn prop_wellformed_http_urls_accepted(
            host in "[a-z][a-z0-9]{0,10}(\\.[a-z]{2,6}){1,2}",
            path in "[a-z0-9/]{0,20}",
            secure in proptest::bool::ANY,
        ) {
            let scheme = if secure { "https" } else { "http" };
            let url = format!("{}://{}/{}", scheme, host, path);
            prop_assert!(validate(&url, "").is_ok());
        }

        #[test]
        fn prop_positive_digit_ttls_accepted(ttl in 1u64..1_000_000_000) {
            let request = validate("https://example.com", &ttl.to_string()).unwrap();
            prop_assert_eq!(request.ttl_seconds, Some(ttl));
        }

        #[test]
        fn prop_non_digit_ttls_rejected(ttl in "[a-zA-Z!@#.-]{1,12}") {
            prop_assert_eq!(
                validate("https://example.com", &ttl),
                Err(ValidationError::InvalidTtl)
            );
        }
    }
}
