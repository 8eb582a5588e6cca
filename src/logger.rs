//! 日志模块
//!
//! 路由字符串常带有 token 等敏感参数，写入日志前统一经过 [`sanitize_route_for_log`]。
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::level_filters::LevelFilter;

/// 敏感查询参数：只保留参数名，值替换为 `***`
static SENSITIVE_QUERY: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"(?i)([?&;](?:access[_-]?token|refresh[_-]?token|token|password|passwd|pwd|client[_-]?secret|secret|api[_-]?key|auth|code|sign)=)([^&#;\s]*)",
    )
    .ok()
});

/// 初始化控制台日志
///
/// 全局 subscriber 只能安装一次；已安装时返回 `false`。
pub fn init_logging(level: LevelFilter) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// 对路由字符串中的敏感参数脱敏
pub fn sanitize_route_for_log(route: &str) -> String {
    match SENSITIVE_QUERY.as_ref() {
        Some(re) => re.replace_all(route, "${1}***").into_owned(),
        None => route.to_string(),
    }
}
