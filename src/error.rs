//! 错误类型
//!
//! 只有配置错误才会以 `Err` 的形式出现；路由不匹配不是错误，统一用 `None` 表示。

use thiserror::Error;

/// 路由器错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// 路由类型声明了空的 path key
    #[error("类型 {type_name} 的 path key 不能为空字符串")]
    EmptyPathKey { type_name: &'static str },

    /// 两个路由类型的索引 key 冲突
    #[error("路由 key 冲突: {key} 已由 {existing} 注册，{duplicate} 不能重复注册")]
    DuplicatePathKey {
        key: String,
        existing: &'static str,
        duplicate: &'static str,
    },

    /// scheme 不合法
    #[error("无效的 scheme: {0:?}")]
    InvalidScheme(String),

    /// 配置解析失败
    #[error("配置错误: {0}")]
    InvalidConfig(String),

    /// 全局路由器已安装
    #[error("全局路由器已安装，不能重复安装")]
    AlreadyInstalled,
}

impl RouterError {
    /// 是否为路由表构建错误（注册的类型本身有问题，需要修改代码）
    ///
    /// 其余错误来自配置加载或全局安装，调用方可以换一份配置重试。
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            RouterError::EmptyPathKey { .. } | RouterError::DuplicatePathKey { .. }
        )
    }

    /// 获取错误类型字符串
    pub fn error_type(&self) -> &'static str {
        match self {
            RouterError::EmptyPathKey { .. } => "empty_path_key",
            RouterError::DuplicatePathKey { .. } => "duplicate_path_key",
            RouterError::InvalidScheme(_) => "invalid_scheme",
            RouterError::InvalidConfig(_) => "invalid_config",
            RouterError::AlreadyInstalled => "already_installed",
        }
    }
}

/// URL 打开拦截错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterceptError {
    /// 拦截谓词只能设置一次
    #[error("拦截谓词已设置，不能重复设置")]
    PredicateAlreadyInstalled,

    /// 默认打开行为失败
    #[error("打开 URL 失败: {0}")]
    Open(String),
}

impl From<std::io::Error> for InterceptError {
    fn from(err: std::io::Error) -> Self {
        InterceptError::Open(err.to_string())
    }
}
