//! Scroll lock facility
//!
//! Overlays acquire the lock while they are open; background views ask
//! [`ScrollLock::is_locked`] before scrolling. Locks are counted so that
//! nested overlays release independently.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::SeqCst);
        if previous == 0 {
            tracing::debug!("scroll lock engaged");
        }
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::SeqCst) > 0
    }

    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::SeqCst)
    }
}

/// Releases its share of the lock when dropped
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::SeqCst);
        if previous == 1 {
            tracing::debug!("scroll lock released");
        }
    }
}

/// Keeps a lock held exactly while a flag is set
#[derive(Debug)]
pub struct ScrollLockBinding {
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl ScrollLockBinding {
    pub fn new(lock: ScrollLock) -> Self {
        Self { lock, guard: None }
    }

    pub fn sync(&mut self, engaged: bool) {
        match (engaged, self.guard.is_some()) {
            (true, false) => self.guard = Some(self.lock.acquire()),
            (false, true) => self.guard = None,
            _ => {}
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.guard.is_some()
    }

    pub fn lock(&self) -> &ScrollLock {
        &self.lock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = ScrollLock::new();
        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_nested_guards() {
        let lock = ScrollLock::new();
        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);
        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_binding_follows_flag() {
        let lock = ScrollLock::new();
        let mut binding = ScrollLockBinding::new(lock.clone());

        binding.sync(true);
        assert!(lock.is_locked());

        // repeated syncs with the same flag do not stack
        binding.sync(true);
        assert_eq!(lock.holders(), 1);

        binding.sync(false);
        assert!(!lock.is_locked());
        assert!(!binding.is_engaged());
    }

    #[test]
    fn test_binding_releases_on_drop() {
        let lock = ScrollLock::new();
        {
            let mut binding = ScrollLockBinding::new(lock.clone());
            binding.sync(true);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }
}
