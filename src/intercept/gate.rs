//! URL 打开拦截
//!
//! 宿主的默认打开行为包装在 [`OpenUrlGate`] 中，谓词决定每次打开是否放行。

use super::opener::{OpenUrlRequest, UrlOpener};
use crate::error::InterceptError;
use crate::logger::sanitize_route_for_log;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// 拦截谓词：返回 `true` 放行默认行为，返回 `false` 拦截
///
/// 谓词可以从请求中取走 `completion` 来通知调用方被拦截的结果。
pub type OpenUrlPredicate = Box<dyn Fn(&mut OpenUrlRequest) -> bool + Send + Sync + 'static>;

/// 拦截器状态
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterceptorState {
    pub installed: bool,
    pub allowed_count: u64,
    pub vetoed_count: u64,
    pub last_activity: Option<DateTime<Utc>>,
}

/// URL 打开入口的拦截包装
///
/// 所有打开 URL 的调用都必须经过 [`OpenUrlGate::open`]。谓词只能安装一次，
/// 安装后在进程生命周期内不可替换或卸载。
pub struct OpenUrlGate<O: UrlOpener> {
    opener: O,
    predicate: OnceCell<OpenUrlPredicate>,
    state: RwLock<InterceptorState>,
}

impl<O: UrlOpener> OpenUrlGate<O> {
    /// 包装默认打开行为
    pub fn new(opener: O) -> Self {
        Self {
            opener,
            predicate: OnceCell::new(),
            state: RwLock::new(InterceptorState::default()),
        }
    }

    /// 安装拦截谓词
    ///
    /// 第二次调用立即返回 [`InterceptError::PredicateAlreadyInstalled`]，已安装的谓词保持不变。
    pub fn install_predicate<F>(&self, predicate: F) -> Result<(), InterceptError>
    where
        F: Fn(&mut OpenUrlRequest) -> bool + Send + Sync + 'static,
    {
        if self.predicate.set(Box::new(predicate)).is_err() {
            tracing::error!("[OpenUrlGate] 拦截谓词已设置，拒绝重复设置");
            return Err(InterceptError::PredicateAlreadyInstalled);
        }

        self.state.write().installed = true;
        tracing::info!("[OpenUrlGate] URL 打开拦截已安装");
        Ok(())
    }

    pub fn is_installed(&self) -> bool {
        self.predicate.get().is_some()
    }

    /// 打开 URL
    ///
    /// 返回默认行为是否被执行。
    pub fn open(&self, mut request: OpenUrlRequest) -> bool {
        let allowed = match self.predicate.get() {
            Some(predicate) => predicate(&mut request),
            None => true,
        };

        {
            let mut state = self.state.write();
            if allowed {
                state.allowed_count += 1;
            } else {
                state.vetoed_count += 1;
            }
            state.last_activity = Some(Utc::now());
        }

        if allowed {
            self.opener.open(request);
        } else {
            tracing::info!(
                "[OpenUrlGate] 已拦截 URL 打开: {}",
                sanitize_route_for_log(&request.url)
            );
        }
        allowed
    }

    /// 获取当前状态
    pub fn state(&self) -> InterceptorState {
        self.state.read().clone()
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }
}
