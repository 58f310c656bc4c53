//! The cooperative, single-threaded event loop that runs deferred tasks.
//!
//! Savegate never sleeps, polls timers or spawns threads. Work that must not
//! run inside the event handler that requested it (most importantly the
//! dialog's deferred hide on cancel) is posted here and runs on the next
//! turn. Hosts call [`EventLoop::process_pending`] once per pass of their own
//! loop; tests call it (or [`EventLoop::run_until_idle`]) to flush
//! deterministically.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::logging::{span_names, targets};
use crate::task::{TaskId, TaskQueue};

/// Default bound on the number of turns [`EventLoop::run_until_idle`] takes.
pub const DEFAULT_TURN_LIMIT: usize = 64;

struct LoopShared {
    tasks: Mutex<TaskQueue>,
    turn_limit: usize,
}

/// A cheap-clone handle to a deferred-task loop.
///
/// Every clone refers to the same queue. The queue lock is never held while a
/// task runs, so tasks may post further tasks or cancel pending ones.
#[derive(Clone)]
pub struct EventLoop {
    shared: Arc<LoopShared>,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLoop")
            .field("pending", &self.pending_count())
            .field("turn_limit", &self.shared.turn_limit)
            .finish()
    }
}

impl EventLoop {
    /// Create a new, empty event loop.
    pub fn new() -> Self {
        Self::with_turn_limit(DEFAULT_TURN_LIMIT)
    }

    /// Create an event loop whose [`run_until_idle`](Self::run_until_idle)
    /// stops after `turn_limit` turns.
    pub fn with_turn_limit(turn_limit: usize) -> Self {
        Self {
            shared: Arc::new(LoopShared {
                tasks: Mutex::new(TaskQueue::new()),
                turn_limit: turn_limit.max(1),
            }),
        }
    }

    /// Post a task to run on the next turn.
    pub fn post_task<F>(&self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.shared.tasks.lock().post(task);
        tracing::trace!(target: targets::EVENT_LOOP, task = id.as_u64(), "task posted");
        id
    }

    /// Cancel a task that has not run yet.
    ///
    /// Returns `false` if the task already ran or was already cancelled.
    pub fn cancel_task(&self, id: TaskId) -> bool {
        self.shared.tasks.lock().cancel(id)
    }

    /// Check if there are pending tasks.
    pub fn has_pending(&self) -> bool {
        self.shared.tasks.lock().has_pending()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.shared.tasks.lock().pending_count()
    }

    /// Run one turn: exactly the tasks that were queued when the turn began.
    ///
    /// Tasks posted while the turn runs wait for the next turn. Returns the
    /// number of tasks executed.
    pub fn process_pending(&self) -> usize {
        let batch = self.shared.tasks.lock().take_turn();
        if batch.is_empty() {
            return 0;
        }

        let _span = tracing::trace_span!(target: targets::EVENT_LOOP, span_names::EVENT_LOOP_TURN, tasks = batch.len()).entered();
        let count = batch.len();
        for (id, task) in batch {
            tracing::trace!(target: targets::EVENT_LOOP, task = id.as_u64(), "running task");
            task();
        }
        count
    }

    /// Run turns until the queue is empty or the turn limit is reached.
    ///
    /// Returns the total number of tasks executed.
    pub fn run_until_idle(&self) -> usize {
        let mut total = 0;
        for _ in 0..self.shared.turn_limit {
            if !self.has_pending() {
                return total;
            }
            total += self.process_pending();
        }

        if self.has_pending() {
            tracing::warn!(
                target: targets::EVENT_LOOP,
                turn_limit = self.shared.turn_limit,
                pending = self.pending_count(),
                "turn limit reached with tasks still pending"
            );
        }
        total
    }
}

static_assertions::assert_impl_all!(EventLoop: Send, Sync);
