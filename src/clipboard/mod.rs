//! 剪贴板服务模块
//!
//! # 设计思路
//!
//! 复制短链到系统剪贴板，双路径设计：
//! - **首选路径**：原生剪贴板能力可用时（`arboard` 成功打开剪贴板），
//!   直接写入；写入失败原样透传，不再尝试回退。
//! - **回退路径**：原生剪贴板不可用时（无显示会话等），
//!   借助平台复制命令完成写入，详见 [`fallback`]。
//!
//! # 实现思路
//!
//! - 对外暴露 `ClipboardWriter` trait，工作流控制器依赖 trait 而非具体实现，
//!   测试时可注入替身。
//! - `SystemClipboard` 为生产实现；打开剪贴板成功与否即能力探测。
//! - 回退路径的瞬态资源是子进程，用完即回收，不留任何常驻状态。

pub mod fallback;

use crate::error::AppError;

/// 剪贴板写入能力。
///
/// 工作流控制器只通过该 trait 复制文本，便于在测试中替换为记录型替身。
pub trait ClipboardWriter: Send + Sync {
    /// 将文本写入系统剪贴板。
    fn copy_text(&self, text: &str) -> Result<(), AppError>;
}

/// 系统剪贴板实现：原生优先，命令回退。
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), AppError> {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                log::debug!("📋 使用原生剪贴板写入 ({} 字符)", text.chars().count());
                // 首选路径的失败原样透传，不落入回退路径
                clipboard
                    .set_text(text)
                    .map_err(|e| AppError::Clipboard(e.to_string()))
            }
            Err(e) => {
                log::debug!("📋 原生剪贴板不可用（{}），改用命令回退", e);
                fallback::copy_via_command(text)
            }
        }
    }
}
