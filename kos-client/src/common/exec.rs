//! The exec module exposes helpers to execute futures
use async_executor::{LocalExecutor, Task};
use futures_lite::{
    future::{self, block_on},
    Future,
};

#[derive(Clone, Debug, Default)]
/// This executor is local and bounded to the thread that created it. Tasks spawned on it only
/// make progress while that thread is inside [Executor::block_on].
pub struct Executor {}

std::thread_local! {
    static EX: LocalExecutor<'static> = const { LocalExecutor::new() };
}

impl Executor {
    pub fn new() -> Self {
        Self {}
    }
    // Spawn a future onto the local executor
    pub fn spawn<T: 'static>(&self, future: impl Future<Output = T> + 'static) -> Task<T> {
        EX.with(|e| e.spawn(future))
    }

    pub fn block_on<T>(&self, future: impl Future<Output = T>) -> T {
        EX.with(|e| block_on(e.run(future)))
    }
}

/// helper trait for hyper to spawn future onto a local executor
impl<F> hyper::rt::Executor<F> for Executor
where
    F: future::Future + 'static,
{
    fn execute(&self, fut: F) {
        EX.with(|e| e.spawn(fut)).detach();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::Executor;

    #[test_log::test]
    fn test_spawned_task_runs_under_block_on() {
        let exec = Executor::new();
        let hit = Rc::new(Cell::new(false));
        let flag = hit.clone();
        let task = exec.spawn(async move {
            flag.set(true);
            7
        });
        assert_eq!(exec.block_on(task), 7);
        assert!(hit.get());
    }
}
