//! 视图绑定模块
//!
//! # 设计思路
//!
//! 控制器不直接操作任何 UI 框架的元素引用，
//! 而是依赖一个显式注入的视图绑定对象（本 trait），
//! 由宿主（桌面壳、TUI、测试替身）负责把这些调用落到真实界面上。
//!
//! # 实现思路
//!
//! - 方法签名一一对应原型页面的 DOM 操作。
//! - 所有方法取 `&self`：视图自身通过内部可变性维护展示状态，
//!   控制器可跨任务共享同一个 `Arc<V>`。

/// 提交按钮默认文案
pub const SUBMIT_LABEL: &str = "Create Short URL";
/// 提交按钮进行中文案
pub const SUBMIT_PENDING_LABEL: &str = "Creating...";
/// 复制按钮默认文案
pub const COPY_LABEL: &str = "Copy";
/// 复制按钮进行中文案
pub const COPY_PENDING_LABEL: &str = "Copying...";
/// 复制按钮成功确认文案
pub const COPY_DONE_LABEL: &str = "Copied!";

/// 反馈消息级别
///
/// 校验类错误使用较温和的 `Warning`，提交 / 复制失败使用 `Danger`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackLevel {
    Warning,
    Danger,
}

/// 工作流视图绑定。
///
/// 不变式（所有实现必须遵守）：反馈区与结果区互斥展示，
/// `show_feedback` 必须同时隐藏结果区。
/// 隐藏结果区不清空其文本：复制流程读取的是最近一次展示的短链文本，
/// 与原型页面中 `textContent` 在 `d-none` 下仍然保留的行为一致。
pub trait ShortenerView: Send + Sync {
    /// 展示一条反馈消息，并隐藏结果区。
    fn show_feedback(&self, message: &str, level: FeedbackLevel);

    /// 清空并隐藏反馈区。
    fn hide_feedback(&self);

    /// 填充结果区（短链同时作为展示文本与可点击链接）并展示。
    fn show_result(&self, short_url: &str, expires_at_text: &str);

    /// 隐藏结果区（不清空文本）。
    fn hide_result(&self);

    /// 设置提交按钮的文案与可用状态。
    fn set_submit_button(&self, label: &str, enabled: bool);

    /// 设置复制按钮的文案与可用状态。
    fn set_copy_button(&self, label: &str, enabled: bool);

    /// 当前结果区展示的短链文本（未展示过则为空串）。
    fn displayed_short_url(&self) -> String;
}
