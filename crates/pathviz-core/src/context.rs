//! Cooperative cancellation for traversal runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Something a running traversal can poll to learn whether it should stop.
///
/// Implemented for [`Context`] and for any `Fn() -> bool` predicate.
pub trait Cancel {
    /// Whether the run should stop before finalizing another node.
    fn is_cancelled(&self) -> bool;
}

impl<F: Fn() -> bool + ?Sized> Cancel for F {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the same flag, so one clone can be handed to the run while
/// another stays with whoever decides to stop it. Create one per run.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Cancel for Context {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.is_done()
    }
}

/// A token that never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Cancel for Never {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}
