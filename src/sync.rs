//! Poison-tolerant locking.
//!
//! The parse cache, the console writer and the logger each sit behind a
//! `Mutex`. A panic while one of them is held must not take the rest of the
//! program down with it: a stale cache entry or a half-written swatch line is
//! preferable to aborting the remaining inputs. All mutex access in non-test
//! code goes through [`lock_recover`].
//!
//! ```rust
//! use std::sync::Mutex;
//! use colorswatch::sync::lock_recover;
//!
//! let lines = Mutex::new(vec!["#fff"]);
//! lock_recover(&lines).push("tomato");
//! assert_eq!(lock_recover(&lines).len(), 2);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering from poison if necessary.
///
/// In debug builds a recovered poison is reported through `log::warn!`.
/// This function never panics.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        #[cfg(debug_assertions)]
        log::warn!("recovered poisoned mutex");
        PoisonError::into_inner(poisoned)
    })
}
