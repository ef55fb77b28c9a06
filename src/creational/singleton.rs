// Pattern: Singleton - One Instance per Process
// Eager statics for values known at compile time, double-checked locking
// for values that are only known at first use.

use std::convert::Infallible;
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use tracing::debug;

use crate::error::Result;

// ============================================================================
// Example: Double-checked locking cell
// ============================================================================

/// Lazily constructed, process-wide slot for a single `T`.
///
/// Readers take a lock-free fast path once the value exists. Construction
/// happens under `init_lock` after a second check, so at most one `T` is
/// ever built per cell.
pub struct SingletonCell<T> {
    instance: AtomicPtr<T>,
    init_lock: Mutex<()>,
    _owns: PhantomData<T>,
}

// SAFETY: the value may be built on one thread and read from any other, so
// it must be both Send and Sync. Publication goes through Release/Acquire.
unsafe impl<T: Send + Sync> Sync for SingletonCell<T> {}

impl<T> SingletonCell<T> {
    pub const fn new() -> Self {
        Self {
            instance: AtomicPtr::new(ptr::null_mut()),
            init_lock: Mutex::new(()),
            _owns: PhantomData,
        }
    }

    pub fn get(&self) -> Option<&T> {
        let instance = self.instance.load(Ordering::Acquire);
        // SAFETY: a non-null pointer came from Box::into_raw below and is
        // only freed in Drop, which cannot overlap with this borrow.
        unsafe { instance.as_ref() }
    }

    pub fn is_initialized(&self) -> bool {
        self.get().is_some()
    }

    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }

    /// A failed `init` leaves the cell empty; the next caller tries again.
    pub fn get_or_try_init<F, E>(&self, init: F) -> std::result::Result<&T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        // Fast path: no lock once constructed
        if let Some(instance) = self.get() {
            return Ok(instance);
        }

        // The guard is released on every return below, including `?`
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Another thread may have finished while we waited for the lock
        if let Some(instance) = self.get() {
            return Ok(instance);
        }

        let instance = Box::into_raw(Box::new(init()?));
        self.instance.store(instance, Ordering::Release);
        debug!(type_name = std::any::type_name::<T>(), "singleton constructed");

        // SAFETY: just published, lives until Drop
        Ok(unsafe { &*instance })
    }
}

impl<T> Default for SingletonCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SingletonCell<T> {
    fn drop(&mut self) {
        let instance = *self.instance.get_mut();
        if !instance.is_null() {
            // SAFETY: exclusive access, pointer came from Box::into_raw
            unsafe { drop(Box::from_raw(instance)) };
        }
    }
}

// ============================================================================
// Example: Thread-safe Singleton
// ============================================================================

#[derive(Debug)]
pub struct Singleton {
    value: String,
}

static INSTANCE: SingletonCell<Singleton> = SingletonCell::new();

impl Singleton {
    /// Returns the process-wide instance. Only the first caller's `value`
    /// is used; every later value is ignored.
    pub fn instance(value: impl Into<String>) -> &'static Singleton {
        INSTANCE.get_or_init(|| Singleton {
            value: value.into(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn some_business_logic(&self) -> String {
        format!("Singleton({}) is doing its business logic", self.value)
    }
}

// ============================================================================
// Example: Eager Singleton
// ============================================================================

/// Built at compile time, so there is nothing to guard.
#[derive(Debug)]
pub struct EagerSingleton {
    name: &'static str,
}

static EAGER: EagerSingleton = EagerSingleton { name: "eager" };

impl EagerSingleton {
    pub fn instance() -> &'static EagerSingleton {
        &EAGER
    }

    pub fn name(&self) -> &str {
        self.name
    }
}

fn eager_example() {
    let s1 = EagerSingleton::instance();
    let s2 = EagerSingleton::instance();

    if ptr::eq(s1, s2) {
        println!("Singleton works, both variables contain the same instance.");
    } else {
        println!("Singleton failed, variables contain different instances.");
    }
}

fn thread_safe_example() {
    println!("If you see the same value, then singleton was reused (yay!)");
    println!("If you see different values, then 2 singletons were created (booo!!)\n");
    println!("RESULT:\n");

    thread::scope(|scope| {
        for value in ["FOO", "BAR"] {
            scope.spawn(move || {
                let singleton = Singleton::instance(value);
                println!("{}", singleton.value());
            });
        }
    });
}

pub fn run() -> Result<()> {
    println!("--- Eager ---");
    eager_example();
    println!("\n--- Double-checked locking ---");
    thread_safe_example();
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Barrier};

    #[test]
    fn test_cell_constructs_once() {
        let cell: SingletonCell<String> = SingletonCell::new();
        let calls = AtomicUsize::new(0);

        let first = cell.get_or_init(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            "first".to_string()
        });
        let second = cell.get_or_init(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            "second".to_string()
        });

        assert!(ptr::eq(first, second));
        assert_eq!(second, "first");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cell_empty_until_first_use() {
        let cell: SingletonCell<u32> = SingletonCell::default();
        assert!(cell.get().is_none());
        assert!(!cell.is_initialized());

        cell.get_or_init(|| 7);
        assert_eq!(cell.get(), Some(&7));
    }

    #[test]
    fn test_failed_init_leaves_cell_empty() {
        let cell: SingletonCell<String> = SingletonCell::new();

        let failed: std::result::Result<&String, &str> = cell.get_or_try_init(|| Err("boom"));
        assert_eq!(failed, Err("boom"));
        assert!(!cell.is_initialized());

        let value = cell.get_or_try_init(|| Ok::<_, &str>("ok".to_string()));
        assert_eq!(value.map(String::as_str), Ok("ok"));
    }

    #[test]
    fn test_cell_recovers_after_panicking_init() {
        let cell: SingletonCell<u8> = SingletonCell::new();

        let panicked = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            cell.get_or_init(|| panic!("constructor failed"));
        }));
        assert!(panicked.is_err());

        assert_eq!(*cell.get_or_init(|| 1), 1);
    }

    #[test]
    fn test_concurrent_callers_share_one_value() {
        let cell: SingletonCell<usize> = SingletonCell::new();
        let constructions = AtomicUsize::new(0);
        let barrier = Barrier::new(8);

        let seen: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|id| {
                    let (cell, barrier, constructions) = (&cell, &barrier, &constructions);
                    scope.spawn(move || {
                        barrier.wait();
                        let value = cell.get_or_init(|| {
                            constructions.fetch_add(1, Ordering::SeqCst);
                            id
                        });
                        value as *const usize as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(constructions.load(Ordering::SeqCst), 1);
        assert!(seen.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_drop_releases_instance() {
        let tracker = Arc::new(());
        {
            let cell: SingletonCell<Arc<()>> = SingletonCell::new();
            cell.get_or_init(|| Arc::clone(&tracker));
            assert_eq!(Arc::strong_count(&tracker), 2);
        }
        assert_eq!(Arc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_global_instance_ignores_later_values() {
        let a = Singleton::instance("first");
        let b = Singleton::instance("second");
        assert!(ptr::eq(a, b));
        assert_eq!(a.value(), b.value());
        assert!(b.some_business_logic().contains(a.value()));
    }

    #[test]
    fn test_eager_singleton() {
        assert!(ptr::eq(EagerSingleton::instance(), EagerSingleton::instance()));
        assert_eq!(EagerSingleton::instance().name(), "eager");
    }
}
