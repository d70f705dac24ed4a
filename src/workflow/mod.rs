//! 工作流控制器模块
//!
//! # 设计思路
//!
//! 编排两条相互独立的用户动作流：
//! - **创建流**：Idle → Submitting → Success / Error。
//!   校验 → 提交 → 渲染结果或反馈，提交按钮在途中禁用、结束后必定恢复。
//! - **复制流**：CopyIdle → CopyInFlight → CopyDone（定时回到 CopyIdle）/ CopyFailed。
//!
//! 两条流不共享可变状态，可自由交错（提交进行中允许复制）。
//! 并发防护仅靠"进行中禁用触发按钮"这一 UI 级约定，
//! 不做请求去重，也不支持取消：迟到的结果仍会覆盖展示区
//! （已知设计缺口，由集成测试钉住，见 DESIGN.md）。
//!
//! # 实现思路
//!
//! - 控制器不绑定任何 UI 框架：视图经 `ShortenerView` trait 注入，
//!   剪贴板经 `ClipboardWriter` trait 注入，动作经 [`Action`] 枚举分发。
//! - 所有错误在本层被捕获并转换为单条反馈消息，绝不向外传播。
//! - 复制成功后的文案回位用 `tokio::spawn` + `sleep` 实现非阻塞定时器，
//!   复位延迟可注入，便于测试缩短等待。

pub mod view;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

use crate::client::SubmitClient;
use crate::clipboard::ClipboardWriter;
use crate::endpoint::resolve_endpoint;
use crate::error::AppError;
use crate::format::format_expires_at;
use crate::validate::validate;

use self::view::{
    FeedbackLevel, ShortenerView, COPY_DONE_LABEL, COPY_LABEL, COPY_PENDING_LABEL,
    SUBMIT_LABEL, SUBMIT_PENDING_LABEL,
};

/// 复制成功确认文案的默认停留时长
pub const COPY_RESET_DELAY: Duration = Duration::from_millis(1200);

/// 用户动作
///
/// 宿主把具体 UI 事件翻译为本枚举后交给 [`WorkflowController::handle`]，
/// 控制器与任何具体 UI 工具包解耦。
#[derive(Debug, Clone)]
pub enum Action {
    /// 提交创建请求，携带两个输入框的原始文本
    Submit { long_url: String, ttl: String },
    /// 复制当前展示的短链
    Copy,
}

/// 工作流控制器。
///
/// 持有视图绑定、剪贴板实现、提交客户端与解析好的目标端点。
pub struct WorkflowController<V, C> {
    view: Arc<V>,
    clipboard: Arc<C>,
    client: SubmitClient,
    endpoint: Url,
    copy_reset_delay: Duration,
}

impl<V, C> WorkflowController<V, C>
where
    V: ShortenerView + 'static,
    C: ClipboardWriter,
{
    /// 按宿主主机名解析端点并创建控制器。
    pub fn new(hostname: &str, view: Arc<V>, clipboard: Arc<C>) -> Self {
        Self::with_endpoint(resolve_endpoint(hostname), view, clipboard)
    }

    /// 使用显式端点创建控制器（测试时指向桩服务）。
    pub fn with_endpoint(endpoint: Url, view: Arc<V>, clipboard: Arc<C>) -> Self {
        Self {
            view,
            clipboard,
            client: SubmitClient::new(),
            endpoint,
            copy_reset_delay: COPY_RESET_DELAY,
        }
    }

    /// 覆盖复制确认文案的停留时长。
    pub fn set_copy_reset_delay(&mut self, delay: Duration) {
        self.copy_reset_delay = delay;
    }

    /// 分发一个用户动作。
    pub async fn handle(&self, action: Action) {
        match action {
            Action::Submit { long_url, ttl } => self.handle_submit(&long_url, &ttl).await,
            Action::Copy => self.handle_copy().await,
        }
    }

    /// 创建流：校验 → 提交 → 渲染结果或反馈。
    ///
    /// 无论成败，提交按钮最终都会恢复默认文案与可用状态。
    pub async fn handle_submit(&self, long_url_text: &str, ttl_text: &str) {
        self.view.hide_feedback();
        self.view.hide_result();

        let request = match validate(long_url_text, ttl_text) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("⚠️ 输入校验未通过: {}", e);
                self.view.show_feedback(&e.to_string(), FeedbackLevel::Warning);
                return;
            }
        };

        self.view.set_submit_button(SUBMIT_PENDING_LABEL, false);

        match self.client.submit(self.endpoint.clone(), &request).await {
            Ok(response) => {
                let expires_at_text = format_expires_at(response.expires_at.as_ref());
                self.view.show_result(&response.short_url, &expires_at_text);
            }
            Err(e) => {
                log::warn!("⚠️ 短链创建失败: {}", e);
                self.view.show_feedback(
                    &display_message(&e, "Unable to create short URL."),
                    FeedbackLevel::Danger,
                );
            }
        }

        // 成败都恢复提交按钮
        self.view.set_submit_button(SUBMIT_LABEL, true);
    }

    /// 复制流：读取展示中的短链 → 写剪贴板 → 确认文案定时回位。
    pub async fn handle_copy(&self) {
        let short_url = self.view.displayed_short_url().trim().to_string();
        if short_url.is_empty() {
            self.view
                .show_feedback("No short URL to copy yet.", FeedbackLevel::Warning);
            return;
        }

        self.view.set_copy_button(COPY_PENDING_LABEL, false);

        match self.clipboard.copy_text(&short_url) {
            Ok(()) => {
                self.view.set_copy_button(COPY_DONE_LABEL, false);

                // 非阻塞定时器：到点恢复默认文案与可用状态
                let view = Arc::clone(&self.view);
                let delay = self.copy_reset_delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    view.set_copy_button(COPY_LABEL, true);
                });
            }
            Err(e) => {
                log::warn!("⚠️ 复制短链失败: {}", e);
                self.view.set_copy_button(COPY_LABEL, true);
                self.view.show_feedback(
                    &display_message(&e, "Unable to copy short URL."),
                    FeedbackLevel::Danger,
                );
            }
        }
    }
}

/// 取错误的展示消息，空消息时使用通用兜底文案。
fn display_message(error: &AppError, fallback: &str) -> String {
    let message = error.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
