//! 路由器配置
//!
//! scheme、解析策略和输入过滤函数在构建 `Router` 时一次性传入，之后不可修改。

use crate::error::RouterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// 默认 scheme
pub const DEFAULT_SCHEME: &str = "router";

/// 路由字符串解析策略
///
/// 两种策略的索引 key 约定不同，只能二选一：
/// - `SimpleSplit`: 索引 key 为 `{scheme}://{path_key}`，输入在第一个 `?` 处切分
/// - `UrlStructured`: 索引 key 为裸 path key，输入按 URL 解析
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveStrategy {
    SimpleSplit,
    #[default]
    UrlStructured,
}

/// 输入改写函数，在解析前作用于每一个路由字符串
#[derive(Clone)]
pub struct RouteFilter(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl RouteFilter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// 恒等过滤
    pub fn identity() -> Self {
        Self::new(|raw| raw.to_string())
    }

    pub fn apply(&self, raw: &str) -> String {
        (self.0)(raw)
    }
}

impl Default for RouteFilter {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for RouteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RouteFilter(..)")
    }
}

/// 路由器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// 项目的 scheme
    pub scheme: String,
    /// 解析策略
    pub strategy: ResolveStrategy,
    /// 输入过滤函数（只能在代码中设置）
    #[serde(skip)]
    pub filter: RouteFilter,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            strategy: ResolveStrategy::default(),
            filter: RouteFilter::identity(),
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 YAML 文本加载配置
    ///
    /// ```yaml
    /// scheme: myapp
    /// strategy: simple_split
    /// ```
    pub fn from_yaml(text: &str) -> Result<Self, RouterError> {
        let config: RouterConfig =
            serde_yaml::from_str(text).map_err(|e| RouterError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_strategy(mut self, strategy: ResolveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.filter = RouteFilter::new(filter);
        self
    }

    /// 验证配置
    ///
    /// scheme 必须符合 RFC 3986：字母开头，后接字母、数字、`+`、`-`、`.`
    pub fn validate(&self) -> Result<(), RouterError> {
        let mut chars = self.scheme.chars();
        let valid = match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {
                chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            }
            _ => false,
        };

        if !valid {
            return Err(RouterError::InvalidScheme(self.scheme.clone()));
        }

        Ok(())
    }

    /// 计算 path key 在路由表中的索引 key
    ///
    /// `UrlStructured` 下 key 按 [`normalize_path_key`] 规范化，与解析 URL 得到的 key 一致。
    pub fn index_key(&self, path_key: &str) -> String {
        match self.strategy {
            ResolveStrategy::SimpleSplit => format!("{}://{}", self.scheme, path_key),
            ResolveStrategy::UrlStructured => normalize_path_key(path_key),
        }
    }
}

/// 去掉首尾及重复的 `/`：`/user//detail/` -> `user/detail`
pub fn normalize_path_key(key: &str) -> String {
    key.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
