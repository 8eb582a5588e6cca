//! 路由类型发现
//!
//! 不依赖运行时反射：每个可路由类型通过显式注册进入扫描范围。
//! - [`InventoryScanner`]: 收集整个二进制中通过 [`register_route!`](crate::register_route) 提交的注册
//! - [`RouteCatalog`]: 显式的注册列表

use crate::route::{Routable, RouteExtras, RouteInstance};
use std::fmt;
use std::sync::Arc;

/// 类型擦除后的路由注册信息
#[derive(Clone, Copy)]
pub struct RouteRegistration {
    path_key: fn() -> &'static str,
    type_name: fn() -> &'static str,
    factory: fn(&str, &RouteExtras) -> Option<RouteInstance>,
}

impl RouteRegistration {
    /// 为具体类型创建注册信息
    pub const fn of<T: Routable>() -> Self {
        Self {
            path_key: T::path_key,
            type_name: std::any::type_name::<T>,
            factory: deploy_erased::<T>,
        }
    }

    pub fn path_key(&self) -> &'static str {
        (self.path_key)()
    }

    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// 调用类型的构造函数
    pub fn deploy(&self, parameter: &str, extras: &RouteExtras) -> Option<RouteInstance> {
        (self.factory)(parameter, extras)
    }
}

impl fmt::Debug for RouteRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRegistration")
            .field("path_key", &self.path_key())
            .field("type_name", &self.type_name())
            .finish()
    }
}

fn deploy_erased<T: Routable>(parameter: &str, extras: &RouteExtras) -> Option<RouteInstance> {
    T::deploy(parameter, extras).map(|target| Arc::new(target) as RouteInstance)
}

inventory::collect!(RouteRegistration);

/// 在二进制范围内注册可路由类型
///
/// ```rust,ignore
/// struct Profile;
/// impl RouteTarget for Profile {}
/// impl Routable for Profile { /* ... */ }
///
/// deeplink_router::register_route!(Profile);
/// ```
#[macro_export]
macro_rules! register_route {
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::inventory::submit! {
                $crate::RouteRegistration::of::<$ty>()
            }
        )+
    };
}

/// 路由类型扫描器
pub trait RouteScanner: Send + Sync {
    /// 列出所有可路由类型
    ///
    /// 扫描无副作用，可重复调用；不保证顺序。
    fn scan(&self) -> Vec<RouteRegistration>;
}

/// 基于 `inventory` 的全局扫描器
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryScanner;

impl RouteScanner for InventoryScanner {
    fn scan(&self) -> Vec<RouteRegistration> {
        inventory::iter::<RouteRegistration>
            .into_iter()
            .copied()
            .collect()
    }
}

/// 显式注册列表
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    registrations: Vec<RouteRegistration>,
}

impl RouteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个可路由类型
    pub fn register<T: Routable>(mut self) -> Self {
        self.registrations.push(RouteRegistration::of::<T>());
        self
    }

    /// 追加已有的注册信息
    pub fn push(&mut self, registration: RouteRegistration) {
        self.registrations.push(registration);
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl RouteScanner for RouteCatalog {
    fn scan(&self) -> Vec<RouteRegistration> {
        self.registrations.clone()
    }
}

impl<S: RouteScanner + ?Sized> RouteScanner for Arc<S> {
    fn scan(&self) -> Vec<RouteRegistration> {
        (**self).scan()
    }
}
