//! 路由表
//!
//! 由扫描结果一次性构建，构建后不可变。

use super::scanner::RouteRegistration;
use crate::config::RouterConfig;
use crate::error::RouterError;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::{error, info};

/// 路由表条目（用于调试输出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteListing {
    /// 索引 key
    pub key: String,
    /// 类型声明的 path key
    pub path_key: &'static str,
    /// 类型名
    pub type_name: &'static str,
}

/// 路由表
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: IndexMap<String, RouteRegistration>,
}

impl RouteTable {
    /// 构建路由表
    ///
    /// 按配置的解析策略计算索引 key；path key 为空、规范化后为空或索引 key 重复时构建失败。
    pub fn build<I>(registrations: I, config: &RouterConfig) -> Result<Self, RouterError>
    where
        I: IntoIterator<Item = RouteRegistration>,
    {
        let mut entries: IndexMap<String, RouteRegistration> = IndexMap::new();

        for registration in registrations {
            let path_key = registration.path_key();
            let key = config.index_key(path_key);
            // `UrlStructured` 下只含 `/` 的 key 规范化后为空，无法被任何 URL 命中
            if path_key.is_empty() || key.is_empty() {
                let err = RouterError::EmptyPathKey {
                    type_name: registration.type_name(),
                };
                error!("[RouteTable] {}", err);
                return Err(err);
            }

            if let Some(existing) = entries.get(&key) {
                let err = RouterError::DuplicatePathKey {
                    key,
                    existing: existing.type_name(),
                    duplicate: registration.type_name(),
                };
                error!("[RouteTable] {}", err);
                return Err(err);
            }

            entries.insert(key, registration);
        }

        info!("[RouteTable] 路由表构建完成: {} 条路由", entries.len());
        Ok(Self { entries })
    }

    /// 查找注册信息
    pub fn get(&self, key: &str) -> Option<&RouteRegistration> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 获取所有索引 key（按注册顺序）
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// 列出路由表内容
    pub fn listings(&self) -> Vec<RouteListing> {
        self.entries
            .iter()
            .map(|(key, registration)| RouteListing {
                key: key.clone(),
                path_key: registration.path_key(),
                type_name: registration.type_name(),
            })
            .collect()
    }
}

impl fmt::Display for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "路由表 ({} 条):", self.entries.len())?;
        for (key, registration) in &self.entries {
            writeln!(f, "  {} -> {}", key, registration.type_name())?;
        }
        Ok(())
    }
}
