//! 进程内 URL 路由
//!
//! - 可路由类型通过 [`register_route!`] 或 [`RouteCatalog`] 注册
//! - [`Router`] 在首次使用时构建路由表，把 `scheme://path?query` 解析为对应类型的实例
//! - 实例的 `handle` 在主执行上下文中异步执行，一定晚于 `route()` 返回
//! - [`OpenUrlGate`] 包装宿主的 URL 打开入口，由谓词决定是否放行
//!
//! ```rust,ignore
//! use deeplink_router::{main_queue, register_route, Routable, RouteExtras, RouteTarget, Router};
//!
//! struct Profile { id: u64 }
//! impl RouteTarget for Profile {}
//! impl Routable for Profile {
//!     fn path_key() -> &'static str { "profile" }
//!     fn deploy(parameter: &str, _: &RouteExtras) -> Option<Self> {
//!         Some(Profile { id: parameter.parse().ok()? })
//!     }
//! }
//! register_route!(Profile);
//!
//! let (queue, mut main_loop) = main_queue();
//! let router = Router::builder(queue).build()?;
//! let profile = router.route("router://profile?42");
//! main_loop.run_pending();
//! ```

pub mod config;
pub mod error;
pub mod global;
pub mod intercept;
pub mod logger;
pub mod main_queue;
pub mod registry;
pub mod route;
pub mod router;

#[doc(hidden)]
pub use inventory;

pub use config::{normalize_path_key, ResolveStrategy, RouteFilter, RouterConfig, DEFAULT_SCHEME};
pub use error::{InterceptError, RouterError};
pub use intercept::{
    InterceptorState, OpenUrlGate, OpenUrlRequest, SystemOpener, UrlOpener,
};
pub use main_queue::{main_queue, MainExecutor, MainLoop, MainQueue, MainTask};
pub use registry::{
    InventoryScanner, RouteCatalog, RouteListing, RouteRegistration, RouteScanner, RouteTable,
};
pub use route::{
    Completion, ParsedRoute, Routable, RouteExtras, RouteInstance, RouteResolver, RouteTarget,
};
pub use router::{RouteRequest, Router, RouterBuilder};
