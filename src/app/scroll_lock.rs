// SPDX-License-Identifier: MPL-2.0
//! Process-wide scroll suppression for open viewers.
//!
//! While a lightbox is open the grid behind it must not scroll. The lock is
//! a reference count rather than a flag, so two viewers that happen to be
//! open at once cannot clobber each other's state: scrolling resumes only
//! when the last guard is dropped.

use std::sync::atomic::{AtomicUsize, Ordering};

static OPEN_VIEWERS: AtomicUsize = AtomicUsize::new(0);

/// RAII guard representing one open viewer's claim on the scroll lock.
#[derive(Debug)]
pub struct ScrollLock {
    _private: (),
}

impl ScrollLock {
    /// Acquires the lock, incrementing the open-viewer count.
    pub fn acquire() -> Self {
        OPEN_VIEWERS.fetch_add(1, Ordering::SeqCst);
        Self { _private: () }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        OPEN_VIEWERS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Whether any viewer currently holds the scroll lock.
pub fn is_locked() -> bool {
    OPEN_VIEWERS.load(Ordering::SeqCst) > 0
}

// The counter is process-wide, so every test that acquires a lock must
// serialize through this mutex or assertions on `is_locked` turn flaky.
#[cfg(test)]
pub(crate) static TEST_SERIAL: std::sync::Mutex<()> = std::sync::Mutex::new(());
