//! Cooperative cancellation signal shared between a run and its caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable handle around one shared cancellation flag.
///
/// Any clone may call [`cancel`](Self::cancel); the running algorithm polls
/// [`is_cancelled`](Self::is_cancelled) after every step it emits. Once set
/// the flag is never cleared, so a new token is minted for every run.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested by any clone.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
