//! 单次路由请求的选项

use crate::route::{Completion, RouteExtras};
use std::any::Any;
use std::fmt;

/// 路由请求
///
/// 默认：无附加参数、立即执行 `handle`、无完成回调。
pub struct RouteRequest {
    pub(crate) extras: RouteExtras,
    pub(crate) execute: bool,
    pub(crate) completion: Option<Completion>,
}

impl Default for RouteRequest {
    fn default() -> Self {
        Self {
            extras: RouteExtras::new(),
            execute: true,
            completion: None,
        }
    }
}

impl RouteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换全部附加参数
    pub fn extras(mut self, extras: RouteExtras) -> Self {
        self.extras = extras;
        self
    }

    /// 追加一个附加参数
    pub fn extra<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.extras.insert(key, value);
        self
    }

    /// 是否调用实例的 `handle`
    pub fn execute(mut self, execute: bool) -> Self {
        self.execute = execute;
        self
    }

    /// 完成回调，随 `handle` 一起传给实例
    pub fn on_complete<F>(mut self, completion: F) -> Self
    where
        F: FnOnce(serde_json::Value) + Send + 'static,
    {
        self.completion = Some(Box::new(completion));
        self
    }
}

impl fmt::Debug for RouteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRequest")
            .field("extras", &self.extras)
            .field("execute", &self.execute)
            .field("completion", &self.completion.is_some())
            .finish()
    }
}
