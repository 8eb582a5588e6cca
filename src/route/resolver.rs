//! 路由字符串解析
//!
//! 支持两种策略（见 [`ResolveStrategy`]）：
//! - `SimpleSplit`: `key[?parameter]`，key 已包含 `{scheme}://` 前缀，参数原样传递
//! - `UrlStructured`: `[scheme://][host][/path][?query]`，key 为 `host/path`
//!
//! 所有无法匹配的情况（scheme 不符、URL 无法解析、key 为空）都返回 `None`，而不是错误。

use crate::config::{normalize_path_key, ResolveStrategy, RouterConfig};
use crate::logger::sanitize_route_for_log;
use indexmap::IndexMap;
use tracing::debug;
use url::{ParseError, Url};

/// 解析后的路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoute {
    /// 路由表查找 key
    pub key: String,
    /// 参数字符串（可能为空）
    pub parameter: String,
    /// 从参数字符串解码的查询参数，仅 `UrlStructured` 策略填充
    pub query: IndexMap<String, String>,
}

impl ParsedRoute {
    /// 获取查询参数
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// 路由解析器
#[derive(Debug, Clone)]
pub struct RouteResolver {
    config: RouterConfig,
}

impl RouteResolver {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// 解析路由字符串
    pub fn resolve(&self, raw: &str) -> Option<ParsedRoute> {
        let filtered = self.config.filter.apply(raw);

        let parsed = match self.config.strategy {
            ResolveStrategy::SimpleSplit => Self::split(&filtered),
            ResolveStrategy::UrlStructured => self.parse_url(&filtered),
        };

        if parsed.is_none() {
            debug!("路由无法解析: {}", sanitize_route_for_log(&filtered));
        }
        parsed
    }

    fn split(raw: &str) -> Option<ParsedRoute> {
        let (key, parameter) = match raw.split_once('?') {
            Some((key, parameter)) => (key, parameter),
            None => (raw, ""),
        };

        if key.is_empty() {
            return None;
        }

        Some(ParsedRoute {
            key: key.to_string(),
            parameter: parameter.to_string(),
            query: IndexMap::new(),
        })
    }

    fn parse_url(&self, raw: &str) -> Option<ParsedRoute> {
        let url = match Url::parse(raw) {
            Ok(url) => url,
            // 没有 scheme 时按配置的 scheme 处理
            Err(ParseError::RelativeUrlWithoutBase) => {
                let prefixed = if raw.starts_with("//") {
                    format!("{}:{}", self.config.scheme, raw)
                } else {
                    format!("{}://{}", self.config.scheme, raw)
                };
                Url::parse(&prefixed).ok()?
            }
            Err(_) => return None,
        };

        if !url.scheme().eq_ignore_ascii_case(&self.config.scheme) {
            debug!(
                "scheme 不匹配: {} (期望 {})",
                url.scheme(),
                self.config.scheme
            );
            return None;
        }

        let host = decode(url.host_str().unwrap_or(""))?;
        let path = decode(url.path())?;
        let key = join_key(&host, &path);
        if key.is_empty() {
            return None;
        }

        let parameter = url.query().unwrap_or("").to_string();
        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Some(ParsedRoute {
            key,
            parameter,
            query,
        })
    }
}

fn decode(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(|s| s.into_owned())
}

/// 拼接 host 与 path，按注册 key 的同一规则规范化
fn join_key(host: &str, path: &str) -> String {
    normalize_path_key(&format!("{host}/{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured() -> RouteResolver {
        RouteResolver::new(RouterConfig::default())
    }

    fn simple() -> RouteResolver {
        RouteResolver::new(RouterConfig::default().with_strategy(ResolveStrategy::SimpleSplit))
    }

    #[test]
    fn test_structured_host_only() {
        let route = structured().resolve("router://profile?42").unwrap();
        assert_eq!(route.key, "profile");
        assert_eq!(route.parameter, "42");
    }

    #[test]
    fn test_structured_host_and_path() {
        let route = structured().resolve("router://user/detail?id=9&tab=posts").unwrap();
        assert_eq!(route.key, "user/detail");
        assert_eq!(route.parameter, "id=9&tab=posts");
        assert_eq!(route.query_value("id"), Some("9"));
        assert_eq!(route.query_value("tab"), Some("posts"));
    }

    #[test]
    fn test_structured_empty_host_uses_path() {
        let route = structured().resolve("router:///settings/privacy").unwrap();
        assert_eq!(route.key, "settings/privacy");
        assert_eq!(route.parameter, "");
    }

    #[test]
    fn test_structured_trailing_slash() {
        assert_eq!(structured().resolve("router://profile/").unwrap().key, "profile");
        assert_eq!(structured().resolve("router://user/detail/").unwrap().key, "user/detail");
        assert_eq!(structured().resolve("router:///lead").unwrap().key, "lead");
        assert!(structured().resolve("router:///").is_none());
    }

    #[test]
    fn test_structured_without_scheme() {
        let route = structured().resolve("profile?42").unwrap();
        assert_eq!(route.key, "profile");
        assert_eq!(route.parameter, "42");

        assert_eq!(structured().resolve("/profile").unwrap().key, "profile");
        assert_eq!(structured().resolve("user/detail").unwrap().key, "user/detail");
    }

    #[test]
    fn test_structured_scheme_mismatch() {
        assert!(structured().resolve("other://profile").is_none());
        assert!(structured().resolve("https://example.com/profile").is_none());
    }

    #[test]
    fn test_structured_scheme_case_insensitive() {
        assert_eq!(structured().resolve("ROUTER://profile").unwrap().key, "profile");
    }

    #[test]
    fn test_structured_percent_decoding() {
        let route = structured().resolve("router://%E4%B8%AA%E4%BA%BA?name=%E5%BC%A0").unwrap();
        assert_eq!(route.key, "个人");
        assert_eq!(route.query_value("name"), Some("张"));
        // 原始参数字符串不解码
        assert_eq!(route.parameter, "name=%E5%BC%A0");
    }

    #[test]
    fn test_structured_unparsable() {
        assert!(structured().resolve("").is_none());
        assert!(structured().resolve("router://").is_none());
        assert!(structured().resolve("router://[::1").is_none());
    }

    #[test]
    fn test_structured_applies_filter() {
        let resolver = RouteResolver::new(
            RouterConfig::default().with_filter(|raw| raw.replacen("legacy-app://", "router://", 1)),
        );
        assert_eq!(resolver.resolve("legacy-app://home").unwrap().key, "home");
    }

    #[test]
    fn test_simple_split() {
        let route = simple().resolve("router://profile?42").unwrap();
        assert_eq!(route.key, "router://profile");
        assert_eq!(route.parameter, "42");
        assert!(route.query.is_empty());

        let route = simple().resolve("router://profile").unwrap();
        assert_eq!(route.parameter, "");
    }

    #[test]
    fn test_simple_split_only_first_question_mark() {
        let route = simple().resolve("router://search?q=a?b").unwrap();
        assert_eq!(route.key, "router://search");
        assert_eq!(route.parameter, "q=a?b");
    }

    #[test]
    fn test_simple_split_keeps_foreign_scheme_in_key() {
        // scheme 不校验，查表时自然不匹配
        assert_eq!(simple().resolve("other://profile").unwrap().key, "other://profile");
        assert!(simple().resolve("?42").is_none());
    }

    #[test]
    fn test_join_key() {
        assert_eq!(join_key("", "/a/b"), "a/b");
        assert_eq!(join_key("a", ""), "a");
        assert_eq!(join_key("a", "/b"), "a/b");
        assert_eq!(join_key("a", "//b"), "a/b");
        assert_eq!(join_key("a", "/b/"), "a/b");
        assert_eq!(join_key("", "/a/"), "a");
        assert_eq!(join_key("", "/"), "");
        assert_eq!(join_key("", ""), "");
    }
}
