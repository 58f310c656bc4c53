//! Core systems for Savegate.
//!
//! This crate provides the plumbing the save-confirmation dialog is built on:
//!
//! - **Signal/Slot System**: Type-safe, re-entrancy-safe notifications
//! - **Task Queue**: Deferred work that runs on a later turn
//! - **Event Loop**: A cooperative, single-threaded loop that tests can flush
//! - **Logging**: `tracing` targets and span names shared across crates
//!
//! # Deferred Work Example
//!
//! ```
//! use savegate_core::{EventLoop, Signal};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let event_loop = EventLoop::new();
//! let hidden = Arc::new(AtomicBool::new(false));
//!
//! let closed = Signal::<()>::new();
//! let loop_handle = event_loop.clone();
//! let hidden_clone = hidden.clone();
//! closed.connect(move |_| {
//!     let hidden = hidden_clone.clone();
//!     loop_handle.post_task(move || hidden.store(true, Ordering::SeqCst));
//! });
//!
//! closed.emit(());
//! assert!(!hidden.load(Ordering::SeqCst));
//!
//! event_loop.run_until_idle();
//! assert!(hidden.load(Ordering::SeqCst));
//! ```

mod event_loop;
pub mod logging;
pub mod signal;
mod task;

pub use event_loop::{DEFAULT_TURN_LIMIT, EventLoop};
pub use signal::{ConnectionId, Signal};
pub use task::{TaskId, TaskQueue};
