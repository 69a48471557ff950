//! Status codes shared between the runtime and its C callers

use core::ffi::c_int;

/// `errno` value for an argument outside the domain of a function.
pub const EINVAL: c_int = 22;
/// `errno` value for a result outside the representable range.
pub const ERANGE: c_int = 34;

/// Implement common methods for runtime status enums.
///
/// Generates `as_c_int()`, `from_c_int()`, `is_success()`, and `is_error()` methods
/// for `#[repr(i32)]` enums that follow the runtime's status convention.
macro_rules! impl_status_code {
    ($ty:ty, fallback: $fallback:ident, variants: { $($val:expr => $variant:ident),* $(,)? }) => {
        impl $ty {
            /// Convert to C-style integer for the exported surface.
            #[inline]
            pub fn as_c_int(self) -> c_int {
                self as c_int
            }

            /// Convert from C-style integer.
            #[inline]
            pub fn from_c_int(val: c_int) -> Self {
                $(
                    if val == $val {
                        return Self::$variant;
                    }
                )*
                Self::$fallback
            }

            /// Check if this is a success result.
            #[inline]
            pub fn is_success(self) -> bool {
                matches!(self, Self::Success)
            }

            /// Check if this is an error result.
            #[inline]
            pub fn is_error(self) -> bool {
                !self.is_success()
            }
        }
    };
}

/// Outcome of a string-to-integer conversion.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseStatus {
    /// At least one digit was consumed and the value fits
    #[default]
    Success = 0,
    /// No digits were found after whitespace, sign and prefix
    NoDigits = -1,
    /// Requested base is neither 0 nor in 2..=36
    InvalidBase = -EINVAL,
    /// Value was clamped to the boundary of the result type
    Overflow = -ERANGE,
}

impl_status_code!(ParseStatus, fallback: InvalidBase, variants: {
    0 => Success,
    -1 => NoDigits,
    -EINVAL => InvalidBase,
    -ERANGE => Overflow,
});

/// Memory view operation result type
pub type MemResult<T> = Result<T, MemError>;

/// Errors returned by the bounds-checked memory wrappers
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemError {
    /// Operation succeeded
    #[default]
    Success = 0,
    /// Source or destination range falls outside the buffer
    OutOfBounds = -1,
}

impl_status_code!(MemError, fallback: OutOfBounds, variants: {
    0 => Success,
    -1 => OutOfBounds,
});

/// String view operation result type
pub type StrResult<T> = Result<T, StrError>;

/// Errors returned by the terminator-aware string wrappers
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrError {
    /// Operation succeeded
    #[default]
    Success = 0,
    /// Destination holds no terminating zero byte
    Unterminated = -1,
    /// Destination cannot hold the result plus its terminator
    Capacity = -2,
}

impl_status_code!(StrError, fallback: Capacity, variants: {
    0 => Success,
    -1 => Unterminated,
    -2 => Capacity,
});
