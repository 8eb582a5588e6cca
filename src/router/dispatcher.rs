//! 路由分发器
//!
//! `route()` 的执行顺序：
//! 1. 解析路由字符串，不匹配则返回 `None`
//! 2. 首次访问时构建路由表（并发安全，只扫描一次）
//! 3. 查表并调用类型的 `deploy`
//! 4. 需要执行时把 `handle` 投递到主执行上下文
//!
//! 实例同步返回；`handle` 一定在 `route()` 返回之后才会执行。

use super::request::RouteRequest;
use crate::config::RouterConfig;
use crate::error::RouterError;
use crate::logger::sanitize_route_for_log;
use crate::main_queue::MainExecutor;
use crate::registry::{InventoryScanner, RouteListing, RouteScanner, RouteTable};
use crate::route::{ParsedRoute, RouteInstance, RouteResolver};
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 路由器
pub struct Router {
    resolver: RouteResolver,
    scanner: Box<dyn RouteScanner>,
    table: OnceCell<RouteTable>,
    executor: Arc<dyn MainExecutor>,
}

impl Router {
    /// 创建构建器，`executor` 为主执行上下文
    pub fn builder<E>(executor: E) -> RouterBuilder
    where
        E: MainExecutor + 'static,
    {
        RouterBuilder::new(Arc::new(executor))
    }

    pub fn config(&self) -> &RouterConfig {
        self.resolver.config()
    }

    /// 立即构建路由表
    ///
    /// 建议在启动阶段调用，以便尽早暴露 path key 冲突等配置错误。
    pub fn prepare(&self) -> Result<&RouteTable, RouterError> {
        self.table
            .get_or_try_init(|| RouteTable::build(self.scanner.scan(), self.resolver.config()))
    }

    /// 获取路由表
    ///
    /// # Panics
    /// 路由表构建失败（path key 为空或冲突）时 panic：这是配置错误，进程不应继续运行。
    pub fn table(&self) -> &RouteTable {
        match self.prepare() {
            Ok(table) => table,
            Err(err) => {
                error!("[Router] 路由表构建失败: {}", err);
                panic!("路由表构建失败: {err}");
            }
        }
    }

    /// 解析路由字符串
    pub fn resolve(&self, raw: &str) -> Option<ParsedRoute> {
        self.resolver.resolve(raw)
    }

    /// 检查路由字符串是否能匹配到已注册的类型（不构造实例）
    pub fn contains(&self, raw: &str) -> bool {
        self.resolve(raw)
            .map(|route| self.table().contains(&route.key))
            .unwrap_or(false)
    }

    /// 使用默认选项路由
    pub fn route(&self, raw: &str) -> Option<RouteInstance> {
        self.route_with(raw, RouteRequest::default())
    }

    /// 路由到实例
    ///
    /// 返回 `None` 表示没有匹配的路由（scheme 不符、key 未注册、URL 无法解析、`deploy` 失败）。
    /// 返回的实例已经构造完成，但 `handle` 尚未执行。
    pub fn route_with(&self, raw: &str, request: RouteRequest) -> Option<RouteInstance> {
        let route = self.resolve(raw)?;

        let Some(registration) = self.table().get(&route.key) else {
            debug!("[Router] 未注册的路由: {}", sanitize_route_for_log(raw));
            return None;
        };

        let RouteRequest {
            extras,
            execute,
            completion,
        } = request;

        let Some(instance) = registration.deploy(&route.parameter, &extras) else {
            debug!(
                "[Router] {} 拒绝构造: {}",
                registration.type_name(),
                sanitize_route_for_log(raw)
            );
            return None;
        };

        debug!(
            "[Router] {} -> {} (execute={})",
            sanitize_route_for_log(raw),
            registration.type_name(),
            execute
        );

        if execute {
            let target = Arc::clone(&instance);
            self.executor
                .dispatch(Box::new(move || target.handle(completion)));
        }

        Some(instance)
    }

    /// 列出所有已注册的路由
    pub fn registered_routes(&self) -> Vec<RouteListing> {
        self.table().listings()
    }

    /// 输出路由表（调试用）
    pub fn print_debug_routes(&self) -> String {
        let rendered = self.table().to_string();
        debug!("[Router] {}", rendered);
        rendered
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("config", self.resolver.config())
            .field("table_built", &self.table.get().is_some())
            .finish()
    }
}

/// 路由器构建器
pub struct RouterBuilder {
    config: RouterConfig,
    scanner: Box<dyn RouteScanner>,
    executor: Arc<dyn MainExecutor>,
}

impl RouterBuilder {
    fn new(executor: Arc<dyn MainExecutor>) -> Self {
        Self {
            config: RouterConfig::default(),
            scanner: Box::new(InventoryScanner),
            executor,
        }
    }

    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// 替换扫描器，默认为 [`InventoryScanner`]
    pub fn scanner<S>(mut self, scanner: S) -> Self
    where
        S: RouteScanner + 'static,
    {
        self.scanner = Box::new(scanner);
        self
    }

    /// 构建路由器
    ///
    /// 只验证配置；路由表在首次使用时构建。
    pub fn build(self) -> Result<Router, RouterError> {
        self.config.validate()?;
        info!(
            "[Router] scheme={} strategy={:?}",
            self.config.scheme, self.config.strategy
        );

        Ok(Router {
            resolver: RouteResolver::new(self.config),
            scanner: self.scanner,
            table: OnceCell::new(),
            executor: self.executor,
        })
    }
}
