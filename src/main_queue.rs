//! 主执行上下文
//!
//! 所有 `handle` 调用和完成回调都在唯一的主执行上下文（UI 线程）中运行。
//! 任务总是先入队，再由主循环取出执行，从不在调用方的调用栈中同步执行。

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// 主执行上下文任务
pub type MainTask = Box<dyn FnOnce() + Send + 'static>;

/// 主执行上下文调度器
pub trait MainExecutor: Send + Sync {
    /// 异步投递任务，实现不得在当前调用栈中执行任务
    fn dispatch(&self, task: MainTask);
}

/// 创建主队列及其主循环
pub fn main_queue() -> (MainQueue, MainLoop) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MainQueue { tx }, MainLoop { rx })
}

/// 主队列（发送端，可在任意线程克隆和使用）
#[derive(Debug, Clone)]
pub struct MainQueue {
    tx: mpsc::UnboundedSender<MainTask>,
}

impl MainQueue {
    /// 主循环是否已关闭
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl MainExecutor for MainQueue {
    fn dispatch(&self, task: MainTask) {
        if self.tx.send(task).is_err() {
            warn!("[MainQueue] 主循环已关闭，任务被丢弃");
        }
    }
}

/// 主循环（接收端，由 UI 线程独占）
pub struct MainLoop {
    rx: mpsc::UnboundedReceiver<MainTask>,
}

impl MainLoop {
    /// 执行当前已入队的任务，返回执行数量
    ///
    /// 执行过程中新入队的任务也会被执行。
    pub fn run_pending(&mut self) -> usize {
        let mut count = 0;
        while let Ok(task) = self.rx.try_recv() {
            task();
            count += 1;
        }
        if count > 0 {
            debug!("[MainLoop] 执行了 {} 个任务", count);
        }
        count
    }

    /// 持续执行任务，直到所有 `MainQueue` 都被释放
    pub async fn run(mut self) {
        while let Some(task) = self.rx.recv().await {
            task();
        }
        debug!("[MainLoop] 所有发送端已释放，主循环退出");
    }
}
