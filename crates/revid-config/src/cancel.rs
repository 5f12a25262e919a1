//! Cooperative cancellation for line reading

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shared flag the host sets to stop the parser from reading further lines.
///
/// Cloning shares the underlying flag. Cancellation is advisory: the parser
/// checks it between lines and returns whatever it has parsed so far.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    /// Create a flag that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Visible to every clone of this flag.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
