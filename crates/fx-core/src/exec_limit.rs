//! Scoped override of the cooperative execution-time ceiling.
//!
//! The scheduler that drives import cycles polls [`execution_ceiling`] to cap
//! how long one cycle may run. A slow upstream rate service must not trip the
//! ceiling mid-request, so the importer lifts it around the network call with
//! an [`ExecLimitGuard`] and the prior value comes back when the guard drops,
//! on every exit path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Ceiling in seconds; 0 means unlimited.
static EXECUTION_CEILING_SECS: AtomicU64 = AtomicU64::new(0);

/// Set the ambient execution ceiling. 0 removes it.
pub fn set_execution_ceiling(secs: u64) {
  EXECUTION_CEILING_SECS.store(secs, Ordering::SeqCst);
}

/// Current ambient execution ceiling, `None` when unlimited.
pub fn execution_ceiling() -> Option<Duration> {
  match EXECUTION_CEILING_SECS.load(Ordering::SeqCst) {
    0 => None,
    secs => Some(Duration::from_secs(secs)),
  }
}

/// RAII override of the execution ceiling.
///
/// Swaps the ambient ceiling on construction and restores the previous value
/// on drop, including during unwinding. Only one party may hold a guard at a
/// time; the import cycle is single-threaded so this is not enforced with a
/// lock.
#[must_use = "the previous ceiling is restored when the guard is dropped"]
pub struct ExecLimitGuard {
  previous: u64,
}

impl ExecLimitGuard {
  /// Lift the ceiling entirely for the lifetime of the guard.
  pub fn unlimited() -> Self {
    Self::apply(0)
  }

  /// Apply a temporary ceiling for the lifetime of the guard.
  pub fn apply(secs: u64) -> Self {
    let previous = EXECUTION_CEILING_SECS.swap(secs, Ordering::SeqCst);
    Self { previous }
  }
}

impl Drop for ExecLimitGuard {
  fn drop(&mut self) {
    EXECUTION_CEILING_SECS.store(self.previous, Ordering::SeqCst);
  }
}
