//! 端点选择模块
//!
//! # 设计思路
//!
//! 根据页面/宿主所处的主机名在本地开发端点与生产端点之间二选一。
//! 主机名作为显式参数注入，便于脱离真实运行环境测试；
//! 除主机名外不参考任何其他配置来源（无环境变量、无配置文件）。
//!
//! # 实现思路
//!
//! - 两个端点为固定常量，经 `Lazy` 预解析为 `reqwest::Url`，
//!   后续调用零成本克隆。
//! - 仅当主机名精确等于 `localhost` 或 `127.0.0.1` 时选择本地端点。

use once_cell::sync::Lazy;
use reqwest::Url;

/// 生产环境短链服务端点
pub const DEFAULT_API_ENDPOINT: &str = "https://api.jackshelata.com/urls";

/// 本地开发短链服务端点
pub const LOCAL_API_ENDPOINT: &str = "http://localhost:8000/urls";

static DEFAULT_ENDPOINT: Lazy<Url> = Lazy::new(|| Url::parse(DEFAULT_API_ENDPOINT).unwrap());
static LOCAL_ENDPOINT: Lazy<Url> = Lazy::new(|| Url::parse(LOCAL_API_ENDPOINT).unwrap());

/// 根据主机名选择目标 API 端点。
///
/// # 参数
/// * `hostname` - 当前执行环境的主机名
///
/// # 返回
/// - `localhost` / `127.0.0.1` → 本地开发端点
/// - 其他任意主机名 → 生产端点
pub fn resolve_endpoint(hostname: &str) -> Url {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_ENDPOINT.clone()
    } else {
        DEFAULT_ENDPOINT.clone()
    }
}
