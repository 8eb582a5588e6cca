//! 可路由类型的能力契约
//!
//! 一个类型要参与路由，必须：
//! - 实现 [`RouteTarget`]（实例级，可选的 `handle`）
//! - 实现 [`Routable`]（类型级，`path_key` + `deploy`）
//! - 以自身类型注册（见 `registry` 模块）
//!
//! 注意：路由按具体类型注册。类型 B 内部包装或转发到 A，并不会让 B 可路由；
//! 如果 A、B 有相同的业务，应当把共同部分放到 C，然后 A 和 B 各自实现并注册。

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// 处理完成回调
pub type Completion = Box<dyn FnOnce(serde_json::Value) + Send + 'static>;

/// 路由得到的实例
pub type RouteInstance = Arc<dyn RouteTarget>;

/// 类型擦除辅助，用于从 `dyn RouteTarget` 还原具体类型
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// 路由实例 trait
pub trait RouteTarget: AsAny + Send + Sync + 'static {
    /// 处理路由
    ///
    /// 由路由器在主执行上下文中异步调用，且一定晚于 `route()` 返回。
    /// 默认不做任何处理，`completion` 被丢弃。
    fn handle(&self, completion: Option<Completion>) {
        let _ = completion;
    }
}

impl dyn RouteTarget {
    /// 检查实例是否为指定类型
    pub fn is<T: RouteTarget>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// 还原为具体类型的引用
    pub fn downcast_ref<T: RouteTarget>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RouteTarget(..)")
    }
}

/// 可路由类型 trait
pub trait Routable: RouteTarget + Sized {
    /// 类型在路由表中的 path key，进程内保持不变且不能为空
    fn path_key() -> &'static str;

    /// 由参数字符串和附加参数构造实例
    ///
    /// 参数不合法时返回 `None`，路由结果随之为 `None`。
    fn deploy(parameter: &str, extras: &RouteExtras) -> Option<Self>;
}

/// 附加参数
///
/// 可携带任意 `Send + Sync` 值，例如调用方对象、处理后的闭包等。
#[derive(Clone, Default)]
pub struct RouteExtras {
    values: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl RouteExtras {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个值，返回旧值是否存在
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) -> bool {
        self.values.insert(key.into(), Arc::new(value)).is_some()
    }

    /// 链式插入
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.insert(key, value);
        self
    }

    /// 按类型读取值，类型不符时返回 `None`
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for RouteExtras {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("RouteExtras").field("keys", &keys).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Article {
        id: u64,
    }

    impl RouteTarget for Article {}

    impl Routable for Article {
        fn path_key() -> &'static str {
            "article"
        }

        fn deploy(parameter: &str, _extras: &RouteExtras) -> Option<Self> {
            parameter.parse().ok().map(|id| Article { id })
        }
    }

    #[test]
    fn test_deploy_and_downcast() {
        let instance: RouteInstance = Arc::new(Article::deploy("7", &RouteExtras::new()).unwrap());

        assert!(instance.is::<Article>());
        assert_eq!(instance.downcast_ref::<Article>().map(|a| a.id), Some(7));
        assert!(Article::deploy("seven", &RouteExtras::new()).is_none());
    }

    #[test]
    fn test_default_handle_drops_completion() {
        let called = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = called.clone();
        let article = Article { id: 1 };

        article.handle(Some(Box::new(move |_| {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
        })));

        assert!(!called.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn test_extras_typed_access() {
        let mut extras = RouteExtras::new()
            .with("source", "home".to_string())
            .with("count", 3u32);

        assert_eq!(extras.get::<String>("source").map(String::as_str), Some("home"));
        assert_eq!(extras.get::<u32>("count"), Some(&3));
        // 类型不符
        assert_eq!(extras.get::<i64>("count"), None);
        assert_eq!(extras.len(), 2);

        assert!(extras.insert("count", 4u32));
        assert_eq!(extras.get::<u32>("count"), Some(&4));
        assert!(extras.remove("source"));
        assert!(!extras.contains_key("source"));
        assert_eq!(format!("{extras:?}"), "RouteExtras { keys: [\"count\"] }");
    }
}
