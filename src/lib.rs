//! # 短链创建客户端工作流 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  宿主（桌面壳 / TUI / 测试）              │
//! │                                                          │
//! │   UI 事件 ──→ Action::{Submit, Copy}                     │
//! │   ShortenerView 实现 ←── 展示状态回写                     │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ trait 注入（视图 / 剪贴板）
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            本库                                   │
//! │                                                          │
//! │  ┌─ error ───── AppError (统一错误类型)                   │
//! │  │                                                       │
//! │  ├─ workflow ── 双状态机编排（创建流 / 复制流）            │
//! │  │   └─ view        视图绑定 trait + 文案常量             │
//! │  │                                                       │
//! │  ├─ validate ── 输入校验 + ShortenRequest 构造            │
//! │  ├─ endpoint ── 本地 / 生产端点二选一                      │
//! │  ├─ client ──── HTTP 提交 + 错误归一化                    │
//! │  ├─ format ──── expires_at 单位推断与渲染                 │
//! │  └─ clipboard ─ 原生写入 + 命令回退                       │
//! └──────────────────────────────────────────────────────────┘
//!         ↕ 唯一一条 HTTP 契约
//!       POST <endpoint>  {"long_url", "ttl_seconds"?}
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，全部可失败路径的返回类型 |
//! | [`validate`] | 长链接 / TTL 本地校验，产出 `ShortenRequest` |
//! | [`endpoint`] | 按注入的主机名选择本地或生产 API 端点 |
//! | [`client`] | 单次 HTTP POST 提交，成功 / 失败归一化 |
//! | [`format`] | `expires_at` 秒毫秒数量级推断与本地化渲染 |
//! | [`clipboard`] | 剪贴板写入：原生优先，平台命令回退 |
//! | [`workflow`] | 创建流与复制流两台独立状态机的编排 |

pub mod client;
pub mod clipboard;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod validate;
pub mod workflow;
