//! 路由分发模块
//!
//! 路由格式（`UrlStructured`）：
//! - `router://profile?42` - key 为 `profile`，参数为 `42`
//! - `router://user/detail?id=1` - key 为 `user/detail`
//! - `router:///settings` - host 为空时 key 取 path
//!
//! 路由格式（`SimpleSplit`）：
//! - `router://profile?42` - key 为 `router://profile`，参数原样传递

mod dispatcher;
mod request;

pub use dispatcher::{Router, RouterBuilder};
pub use request::RouteRequest;
