use std::cell::UnsafeCell;
use std::ptr;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

/// One shared counter, incremented concurrently by worker threads.
///
/// Workers only call `increment`; `value` is read before any worker starts
/// and again after every worker has joined.
pub trait Counter: Send + Sync {
    fn increment(&self);
    fn value(&self) -> i64;
}

/// No lock, no atomic read-modify-write. Concurrent increments from
/// different workers interleave arbitrarily and lose updates; that is the
/// behavior this variant exists to show.
///
/// Each increment is one volatile load plus one volatile store, so the
/// compiled loop keeps a read and a write per iteration instead of folding
/// the whole loop into a single add. The wrapping add absorbs torn reads.
pub struct RacyCounter {
    value: UnsafeCell<i64>,
}

// Multiple writers, no synchronization. The race is the experiment.
unsafe impl Sync for RacyCounter {}

impl RacyCounter {
    pub fn new() -> Self {
        RacyCounter {
            value: UnsafeCell::new(0),
        }
    }
}

impl Counter for RacyCounter {
    fn increment(&self) {
        let p = self.value.get();
        unsafe {
            let v = ptr::read_volatile(p);
            ptr::write_volatile(p, v.wrapping_add(1));
        }
    }

    fn value(&self) -> i64 {
        unsafe { ptr::read_volatile(self.value.get()) }
    }
}

/// Mutex flavor of the fix: every increment holds the lock across its
/// read-modify-write, so no update can be lost.
pub struct LockedCounter {
    value: Mutex<i64>,
}

impl LockedCounter {
    pub fn new() -> Self {
        LockedCounter {
            value: Mutex::new(0),
        }
    }
}

impl Counter for LockedCounter {
    fn increment(&self) {
        *self.value.lock().unwrap() += 1;
    }

    fn value(&self) -> i64 {
        *self.value.lock().unwrap()
    }
}

/// Atomic flavor of the fix: the read-modify-write is a single fetch_add.
pub struct AtomicCounter {
    value: AtomicI64,
}

impl AtomicCounter {
    pub fn new() -> Self {
        AtomicCounter {
            value: AtomicI64::new(0),
        }
    }
}

impl Counter for AtomicCounter {
    fn increment(&self) {
        self.value.fetch_add(1, Ordering::SeqCst);
    }

    fn value(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn racy_counter_starts_at_zero_and_steps_by_one() {
        let c = RacyCounter::new();
        assert_eq!(c.value(), 0);
        c.increment();
        c.increment();
        assert_eq!(c.value(), 2);
    }

    #[test]
    fn locked_counter_starts_at_zero_and_steps_by_one() {
        let c = LockedCounter::new();
        assert_eq!(c.value(), 0);
        c.increment();
        c.increment();
        assert_eq!(c.value(), 2);
    }

    #[test]
    fn atomic_counter_starts_at_zero_and_steps_by_one() {
        let c = AtomicCounter::new();
        assert_eq!(c.value(), 0);
        c.increment();
        c.increment();
        assert_eq!(c.value(), 2);
    }
}
