//! 剪贴板命令回退模块
//!
//! # 设计思路
//!
//! 原生剪贴板 API 不可用时，把文本经标准输入喂给平台自带的复制命令。
//! 子进程即瞬态资源：写入、等待、回收，不在系统中留下任何痕迹。
//!
//! # 实现思路
//!
//! - 按平台给出候选命令表，依次尝试，首个成功即返回。
//! - 命令缺失或退出码非零都算本条失败，换下一条。
//! - 全部失败 → `CopyFailed`，向用户提示手动复制。

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::error::AppError;

#[cfg(target_os = "macos")]
const COPY_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const COPY_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const COPY_COMMANDS: &[&[&str]] = &[&["wl-copy"], &["xclip", "-selection", "clipboard"]];

/// 依次尝试平台复制命令，直到有一条成功。
pub fn copy_via_command(text: &str) -> Result<(), AppError> {
    for command in COPY_COMMANDS {
        match run_copy_command(command, text) {
            Ok(true) => {
                log::debug!("📋 命令回退复制成功 - 命令: {}", command[0]);
                return Ok(());
            }
            Ok(false) => {
                log::warn!("⚠️ 复制命令退出码非零 - 命令: {}", command[0]);
            }
            Err(e) => {
                log::debug!("📋 复制命令不可用 - 命令: {}，原因: {}", command[0], e);
            }
        }
    }

    Err(AppError::CopyFailed)
}

/// 运行单条复制命令，返回其是否成功退出。
fn run_copy_command(command: &[&str], text: &str) -> io::Result<bool> {
    let mut child = Command::new(command[0])
        .args(&command[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes())?;
    }
    // 关闭写端让命令读到 EOF
    drop(child.stdin.take());

    Ok(child.wait()?.success())
}
