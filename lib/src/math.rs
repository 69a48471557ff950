use core::ffi::{c_int, c_long};

/// Absolute value for 32-bit integers.
#[inline(always)]
pub const fn abs_i32(x: i32) -> i32 {
    // i32::MIN has no positive counterpart and maps to itself.
    x.wrapping_abs()
}

/// Absolute value for 64-bit integers.
#[inline(always)]
pub const fn abs_i64(x: i64) -> i64 {
    x.wrapping_abs()
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub extern "C" fn abs(i: c_int) -> c_int {
    abs_i32(i)
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub extern "C" fn labs(i: c_long) -> c_long {
    i.wrapping_abs()
}
