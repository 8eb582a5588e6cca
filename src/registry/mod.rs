//! 路由注册表模块
//!
//! 扫描器列出可路由类型，路由表由扫描结果一次性构建。

mod scanner;
mod table;

pub use scanner::{InventoryScanner, RouteCatalog, RouteRegistration, RouteScanner};
pub use table::{RouteListing, RouteTable};
