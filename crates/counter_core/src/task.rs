//! Single-threaded task queue
//!
//! Deferred continuations are queued here and run in FIFO order when the host
//! drains the queue. A task may queue further tasks; those run on a later
//! turn, after everything that was already waiting.
//!
//! ```rust
//! use counter_core::TaskQueue;
//! use std::sync::{Arc, Mutex};
//!
//! let queue = TaskQueue::new();
//! let log = Arc::new(Mutex::new(Vec::new()));
//!
//! let inner_queue = queue.clone();
//! let inner_log = log.clone();
//! queue.queue(move || {
//!     inner_log.lock().unwrap().push("first");
//!     let log = inner_log.clone();
//!     inner_queue.queue(move || log.lock().unwrap().push("deferred"));
//! });
//!
//! assert_eq!(queue.run_until_idle(), 2);
//! assert_eq!(*log.lock().unwrap(), vec!["first", "deferred"]);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A deferred unit of work
pub type Task = Box<dyn FnOnce() + Send>;

/// Cloneable handle to a FIFO of pending tasks
#[derive(Clone, Default)]
pub struct TaskQueue {
    inner: Arc<Mutex<VecDeque<Task>>>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task to run on a later turn
    pub fn queue<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.lock().unwrap().push_back(Box::new(task));
    }

    /// Number of tasks waiting to run
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run the oldest pending task, returning false if there was none
    pub fn run_next(&self) -> bool {
        // Pop before running so the task can queue more work
        let task = self.inner.lock().unwrap().pop_front();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run tasks until the queue is empty, returning how many ran
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        if ran > 0 {
            tracing::trace!("task queue drained after {} tasks", ran);
        }
        ran
    }

    /// Drop every pending task without running it
    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.len())
            .finish()
    }
}
