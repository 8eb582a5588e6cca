//! 路由解析属性测试
//!
//! 使用 proptest 进行属性测试

use crate::config::{ResolveStrategy, RouterConfig};
use crate::route::RouteResolver;
use proptest::prelude::*;

/// 生成随机的 path 片段
fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,11}".prop_map(|s| s)
}

/// 生成随机的参数字符串（不含 `#`）
fn arb_parameter() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9=&_.-]{0,24}".prop_map(|s| s)
}

proptest! {
    /// 结构化解析：`router://host/path?query` 的 key 为 `host/path`，参数为 query
    #[test]
    fn prop_structured_key_is_host_and_path(
        host in arb_segment(),
        path in prop::collection::vec(arb_segment(), 0..3),
        parameter in arb_parameter()
    ) {
        let resolver = RouteResolver::new(RouterConfig::default());
        let mut raw = format!("router://{}", host);
        for segment in &path {
            raw.push('/');
            raw.push_str(segment);
        }
        if !parameter.is_empty() {
            raw.push('?');
            raw.push_str(&parameter);
        }

        let route = resolver.resolve(&raw);
        prop_assert!(route.is_some(), "'{}' 应能解析", raw);
        let route = route.unwrap();

        let mut expected = vec![host.clone()];
        expected.extend(path.iter().cloned());
        prop_assert_eq!(route.key, expected.join("/"));
        prop_assert_eq!(route.parameter, parameter);
    }

    /// 结构化解析：带首尾 `/` 的 path key 与其路由字符串解析出的 key 一致
    #[test]
    fn prop_structured_index_key_matches_resolved_key(
        segments in prop::collection::vec(arb_segment(), 1..4),
        leading in any::<bool>(),
        trailing in any::<bool>()
    ) {
        let config = RouterConfig::default();
        let resolver = RouteResolver::new(config.clone());

        let mut path_key = segments.join("/");
        if leading {
            path_key.insert(0, '/');
        }
        if trailing {
            path_key.push('/');
        }

        let raw = format!("router://{}?1", path_key);
        let route = resolver.resolve(&raw);
        prop_assert!(route.is_some(), "'{}' 应能解析", raw);
        prop_assert_eq!(route.unwrap().key, config.index_key(&path_key));
    }

    /// 结构化解析：scheme 不一致时一律不匹配
    #[test]
    fn prop_structured_foreign_scheme_never_matches(
        scheme in "[a-z]{1,8}",
        host in arb_segment()
    ) {
        prop_assume!(scheme != "router");
        let resolver = RouteResolver::new(RouterConfig::default());

        let raw = format!("{}://{}", scheme, host);
        prop_assert!(resolver.resolve(&raw).is_none(), "'{}' 不应匹配", raw);
    }

    /// 简单切分：`key?parameter` 中 key 原样保留
    #[test]
    fn prop_simple_split_roundtrip(
        key in arb_segment(),
        parameter in arb_parameter()
    ) {
        let resolver = RouteResolver::new(
            RouterConfig::default().with_strategy(ResolveStrategy::SimpleSplit),
        );
        let full_key = format!("router://{}", key);
        let raw = format!("{}?{}", full_key, parameter);

        let route = resolver.resolve(&raw).unwrap();
        prop_assert_eq!(route.key, full_key);
        prop_assert_eq!(route.parameter, parameter);
    }
}
