//! Logging facilities for Savegate.
//!
//! Savegate uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber; applications (and tests) pick their own:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("savegate=debug")
//!     .init();
//! ```

/// Span names used throughout Savegate for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// One turn of the deferred-task loop.
    pub const EVENT_LOOP_TURN: &str = "savegate::event_loop_turn";
    /// Showing the dialog for a new set of items.
    pub const PRESENTATION: &str = "savegate::presentation";
    /// A layout pass over the dialog's children.
    pub const LAYOUT: &str = "savegate::layout";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Event loop target.
    pub const EVENT_LOOP: &str = "savegate_core::event_loop";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "savegate_core::signal";
    /// Modal controller target.
    pub const DIALOG: &str = "savegate::dialog";
    /// Focus-link and window host target.
    pub const FOCUS: &str = "savegate::focus";
    /// Layout engine target.
    pub const LAYOUT: &str = "savegate::layout";
    /// Configuration loading target.
    pub const CONFIG: &str = "savegate::config";
}
