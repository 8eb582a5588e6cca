//! 外部 URL 打开入口

use crate::error::InterceptError;
use std::collections::HashMap;
use std::fmt;

/// 打开结果回调，参数为是否成功
pub type OpenCompletion = Box<dyn FnOnce(bool) + Send + 'static>;

/// 打开选项
pub type OpenOptions = HashMap<String, serde_json::Value>;

/// 一次 URL 打开请求
pub struct OpenUrlRequest {
    pub url: String,
    pub options: OpenOptions,
    pub completion: Option<OpenCompletion>,
}

impl OpenUrlRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: OpenOptions::new(),
            completion: None,
        }
    }

    pub fn option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn on_complete<F>(mut self, completion: F) -> Self
    where
        F: FnOnce(bool) + Send + 'static,
    {
        self.completion = Some(Box::new(completion));
        self
    }

    /// 通知调用方结果（如果有回调）
    pub fn complete(&mut self, success: bool) {
        if let Some(completion) = self.completion.take() {
            completion(success);
        }
    }
}

impl fmt::Debug for OpenUrlRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenUrlRequest")
            .field("url", &self.url)
            .field("options", &self.options)
            .field("completion", &self.completion.is_some())
            .finish()
    }
}

/// 宿主环境的默认打开行为
pub trait UrlOpener: Send + Sync {
    fn open(&self, request: OpenUrlRequest);
}

impl<F> UrlOpener for F
where
    F: Fn(OpenUrlRequest) + Send + Sync,
{
    fn open(&self, request: OpenUrlRequest) {
        self(request)
    }
}

/// 使用系统默认程序打开 URL
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn launch(url: &str) -> Result<(), InterceptError> {
        open::that_detached(url)?;
        Ok(())
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, mut request: OpenUrlRequest) {
        match Self::launch(&request.url) {
            Ok(()) => {
                tracing::info!("[SystemOpener] 已通过系统打开 URL");
                request.complete(true);
            }
            Err(e) => {
                tracing::error!("[SystemOpener] {}", e);
                request.complete(false);
            }
        }
    }
}
