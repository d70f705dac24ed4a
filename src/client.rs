//! 提交客户端模块
//!
//! # 设计思路
//!
//! 封装与短链服务的唯一一条 HTTP 契约：`POST <endpoint>`，JSON 请求体。
//! 成功与失败统一归一化为 `Result<ShortenResponse, AppError>`，
//! 上层不需要接触 HTTP 细节。
//!
//! 单次调用恰好发出一个请求：不重试、不设超时（由调用方按需叠加）。
//!
//! # 实现思路
//!
//! - 复用同一个 `reqwest::Client`，减少每次请求的初始化开销。
//! - 无论状态码如何都尝试把响应体解析为 JSON；解析失败不中断流程，
//!   仅在后续缺少必要字段时才暴露为错误。
//! - 失败状态优先透传服务端的 `error` 字符串，缺失时由状态码合成消息。
//! - 成功状态但缺少字符串 `short_url` 字段 → `UnexpectedResponse`。
//! - 传输层失败（未收到响应）→ `Network`，消息为底层错误文本。

use reqwest::Url;
use serde_json::Value;

use crate::error::AppError;
use crate::validate::ShortenRequest;

/// 短链创建响应
///
/// `expires_at` 保留原始 JSON 值：其类型与单位均不自描述，
/// 统一交给 `format::format_expires_at` 解读。仅在渲染期间短暂持有。
#[derive(Debug, Clone)]
pub struct ShortenResponse {
    pub short_url: String,
    pub expires_at: Option<Value>,
}

/// 短链服务提交客户端。
///
/// 持有复用型 HTTP 客户端，负责请求序列化与错误归一化。
pub struct SubmitClient {
    http: reqwest::Client,
}

impl Default for SubmitClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// 提交一次短链创建请求。
    ///
    /// 恰好发出一个 HTTP POST；调用结束后请求体即被丢弃。
    pub async fn submit(
        &self,
        endpoint: Url,
        request: &ShortenRequest,
    ) -> Result<ShortenResponse, AppError> {
        log::info!("🌐 提交短链创建请求 - 端点: {}", endpoint);

        let response = self
            .http
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();

        // 容忍非 JSON 响应体，让状态码信息仍能浮出
        let parsed_body: Option<Value> = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok());

        if !status.is_success() {
            let message = parsed_body
                .as_ref()
                .and_then(|body| body.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}.", status.as_u16()));
            log::warn!("⚠️ 服务端拒绝请求 - 状态: {}", status.as_u16());
            return Err(AppError::RequestFailed(message));
        }

        let Some(short_url) = parsed_body
            .as_ref()
            .and_then(|body| body.get("short_url"))
            .and_then(Value::as_str)
            .map(str::to_string)
        else {
            log::warn!("⚠️ 成功状态但响应体缺少 short_url 字段");
            return Err(AppError::UnexpectedResponse);
        };

        let expires_at = parsed_body
            .as_ref()
            .and_then(|body| body.get("expires_at"))
            .cloned();

        log::debug!("✅ 短链创建成功 - short_url: {}", short_url);
        Ok(ShortenResponse {
            short_url,
            expires_at,
        })
    }
}
