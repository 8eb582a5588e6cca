//! URL 打开拦截模块
//!
//! 在宿主的"打开 URL"入口外包一层谓词：
//! - 未安装谓词时，默认行为照常执行
//! - 谓词返回 `true` 时放行，返回 `false` 时拦截（默认行为不执行）
//! - 谓词全进程只能安装一次，不支持链式拦截

mod gate;
mod opener;

pub use gate::{InterceptorState, OpenUrlGate, OpenUrlPredicate};
pub use opener::{OpenCompletion, OpenOptions, OpenUrlRequest, SystemOpener, UrlOpener};
