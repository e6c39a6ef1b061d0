//! Stack guard for nested `openfile` includes.
//!
//! Each include runs the included file on the same call stack as its
//! caller, so an include chain costs native frames per level on top of
//! the depth limit. On wasm the closure runs as is.

/// Headroom an include must leave before it runs.
#[cfg(not(target_arch = "wasm32"))]
const INCLUDE_RED_ZONE: usize = 100 * 1024;

/// Segment size when an include chain outgrows the current stack.
#[cfg(not(target_arch = "wasm32"))]
const INCLUDE_SEGMENT: usize = 1024 * 1024;

/// Run one level of an include chain with stack to spare.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(run_include: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(INCLUDE_RED_ZONE, INCLUDE_SEGMENT, run_include)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(run_include: impl FnOnce() -> R) -> R {
    run_include()
}
