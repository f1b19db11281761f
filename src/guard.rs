//! View Guard
//!
//! Tracks whether a view is still mounted so late network results can be dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ViewGuard {
    active: Arc<AtomicBool>,
}

impl ViewGuard {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the view as torn down. Shared by every clone.
    pub fn cancel(&self) {
        self.active.store(false, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Run `apply` only if the view is still mounted. Returns whether it ran.
    pub fn apply(&self, apply: impl FnOnce()) -> bool {
        if self.is_active() {
            apply();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_while_active() {
        let guard = ViewGuard::new();
        let mut applied = false;
        assert!(guard.apply(|| applied = true));
        assert!(applied);
    }

    #[test]
    fn test_cancel_is_shared_by_clones() {
        let guard = ViewGuard::new();
        let task_copy = guard.clone();
        guard.cancel();

        let mut applied = false;
        assert!(!task_copy.is_active());
        assert!(!task_copy.apply(|| applied = true));
        assert!(!applied);
    }
}
