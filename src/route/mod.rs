//! 路由契约与解析
//!
//! - `target`: 可路由类型需要实现的 trait 和附加参数
//! - `resolver`: 路由字符串到 `(key, parameter, query)` 的解析

mod resolver;
mod target;

pub use resolver::{ParsedRoute, RouteResolver};
pub use target::{AsAny, Completion, Routable, RouteExtras, RouteInstance, RouteTarget};

#[cfg(test)]
mod tests;
