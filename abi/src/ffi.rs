//! Callback shapes crossing the C boundary

use core::ffi::{c_int, c_void};

/// Three-way element comparator used by `qsort` and `bsearch`.
///
/// Returns a negative value, zero, or a positive value when the first element
/// orders before, equal to, or after the second.
pub type Comparator = unsafe extern "C" fn(*const c_void, *const c_void) -> c_int;

/// Byte sink for diagnostic text, supplied by the embedding kernel.
///
/// Receives a buffer and its length; the buffer is not terminated.
pub type TerminalWriteFn = unsafe extern "C" fn(buffer: *const u8, len: usize);
