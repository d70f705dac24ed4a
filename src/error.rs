//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，覆盖短链创建工作流中的全部失败来源：
//! 本地校验、服务端拒绝、响应体异常、传输层失败、剪贴板写入失败。
//!
//! 所有可失败路径统一返回 `Result<T, AppError>`，
//! 由工作流控制器在边界处转换为单条用户可见的反馈消息。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ValidationError` 提供 `From` 转换，无需手动 map。
//! - 面向用户的消息文本直接作为 `Display` 输出，上层不再拼接。

use crate::validate::ValidationError;

/// 应用级统一错误类型
///
/// 校验类错误（`Validation`）在展示时使用较低的警告级别，
/// 其余错误均按危险级别展示，详见 `workflow` 模块。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 输入校验未通过（本地错误，无网络副作用）
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// 服务端拒绝了请求（非 2xx 状态）
    ///
    /// 消息优先取响应体中的 `error` 字符串字段，
    /// 缺失时由状态码合成。
    #[error("{0}")]
    RequestFailed(String),

    /// 成功状态但响应体缺少字符串 `short_url` 字段
    #[error("Unexpected response from server.")]
    UnexpectedResponse,

    /// 传输层失败（未收到响应），消息为底层传输错误文本
    #[error("{0}")]
    Network(String),

    /// 原生剪贴板写入失败，错误消息原样透传
    #[error("{0}")]
    Clipboard(String),

    /// 回退复制命令执行失败
    #[error("Copy failed. Please copy manually.")]
    CopyFailed,
}
