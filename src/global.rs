//! 进程级路由器
//!
//! 应用启动时安装一次，之后可在任意位置通过 [`to`] 路由。

use crate::error::RouterError;
use crate::route::RouteInstance;
use crate::router::{RouteRequest, Router};
use once_cell::sync::OnceCell;

static GLOBAL_ROUTER: OnceCell<Router> = OnceCell::new();

/// 安装全局路由器，只能调用一次
pub fn install(router: Router) -> Result<&'static Router, RouterError> {
    GLOBAL_ROUTER
        .set(router)
        .map_err(|_| RouterError::AlreadyInstalled)?;
    tracing::info!("[GlobalRouter] 全局路由器已安装");
    global().ok_or(RouterError::AlreadyInstalled)
}

/// 获取全局路由器
pub fn global() -> Option<&'static Router> {
    GLOBAL_ROUTER.get()
}

/// 通过全局路由器路由；未安装时返回 `None`
pub fn to(raw: &str) -> Option<RouteInstance> {
    global()?.route(raw)
}

/// 通过全局路由器路由（带选项）
pub fn to_with(raw: &str, request: RouteRequest) -> Option<RouteInstance> {
    global()?.route_with(raw, request)
}
