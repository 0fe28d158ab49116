use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Count of live channel sessions currently held open by this process.
#[derive(Debug, Clone, Default)]
pub struct LiveSessions {
    open: Arc<AtomicUsize>,
}

impl LiveSessions {
    /// Reserve a slot; it is released when the returned guard drops.
    pub fn enter(&self) -> SessionSlot {
        self.open.fetch_add(1, Ordering::SeqCst);
        SessionSlot {
            open: Arc::clone(&self.open),
        }
    }

    pub fn count(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }
}

/// Held by a session actor for its whole lifetime
#[derive(Debug)]
pub struct SessionSlot {
    open: Arc<AtomicUsize>,
}

impl Drop for SessionSlot {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}
