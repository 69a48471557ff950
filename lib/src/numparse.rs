//! String to integer conversion (`atoi`, `atol`, `strtol`).
//!
//! All entry points funnel into [`parse_signed`], a single left-to-right pass:
//! whitespace, optional sign, optional base prefix, then the longest run of
//! digits valid in the active base. Values that leave the target range are
//! clamped and flagged while the remaining digits are still consumed, so the
//! reported end position always lies past the whole digit run.

use core::ffi::{CStr, c_char, c_int, c_long};
use core::ptr;

use kcrt_abi::ParseStatus;

use crate::klog_debug;
use crate::string::isspace;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Result of one conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedInt {
    pub value: i64,
    /// Bytes consumed from the start of the input; 0 when no digits were found.
    pub consumed: usize,
    pub status: ParseStatus,
}

impl ParsedInt {
    const fn rejected(status: ParseStatus) -> Self {
        Self {
            value: 0,
            consumed: 0,
            status,
        }
    }

    #[inline]
    pub fn overflowed(&self) -> bool {
        self.status == ParseStatus::Overflow
    }
}

/// Numeric value of `byte` as a digit, or `MAX_BASE` if it is not one.
#[inline]
pub fn digit_value(byte: u8) -> u32 {
    match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'a'..=b'z' => (byte - b'a') as u32 + 10,
        b'A'..=b'Z' => (byte - b'A') as u32 + 10,
        _ => MAX_BASE,
    }
}

/// Convert the text at the start of `input` into an integer within `[min, max]`.
///
/// `base` is 0 for auto-detection or 2..=36. The end of the slice and the
/// first zero byte both terminate the input.
pub fn parse_signed(input: &[u8], base: u32, min: i64, max: i64) -> ParsedInt {
    if base == 1 || base > MAX_BASE {
        klog_debug!("numparse: unsupported base {}", base);
        return ParsedInt::rejected(ParseStatus::InvalidBase);
    }

    let at = |i: usize| input.get(i).copied().unwrap_or(0);

    let mut pos = 0usize;
    while isspace(at(pos)) {
        pos += 1;
    }

    let negative = match at(pos) {
        b'-' => {
            pos += 1;
            true
        }
        b'+' => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut radix = base;
    // A bare "0x" with no hex digit after it is just the digit zero.
    let has_hex_prefix =
        at(pos) == b'0' && matches!(at(pos + 1), b'x' | b'X') && digit_value(at(pos + 2)) < 16;
    if (base == 0 || base == 16) && has_hex_prefix {
        pos += 2;
        radix = 16;
    } else if base == 0 {
        radix = if at(pos) == b'0' { 8 } else { 10 };
    }

    let limit = if negative {
        min.unsigned_abs()
    } else {
        max.max(0) as u64
    };

    let digits_start = pos;
    let mut magnitude = 0u64;
    let mut overflow = false;
    loop {
        let digit = digit_value(at(pos));
        if digit >= radix {
            break;
        }
        pos += 1;
        if overflow {
            continue;
        }
        match magnitude
            .checked_mul(radix as u64)
            .and_then(|v| v.checked_add(digit as u64))
            .filter(|v| *v <= limit)
        {
            Some(next) => magnitude = next,
            None => overflow = true,
        }
    }

    if pos == digits_start {
        return ParsedInt::rejected(ParseStatus::NoDigits);
    }

    let (value, status) = match (overflow, negative) {
        (true, true) => (min, ParseStatus::Overflow),
        (true, false) => (max, ParseStatus::Overflow),
        (false, true) => ((magnitude as i64).wrapping_neg(), ParseStatus::Success),
        (false, false) => (magnitude as i64, ParseStatus::Success),
    };

    ParsedInt {
        value,
        consumed: pos,
        status,
    }
}

/// `strtol` semantics over a borrowed view, clamped to `c_long`.
pub fn parse_long(input: &[u8], base: u32) -> ParsedInt {
    parse_signed(input, base, c_long::MIN as i64, c_long::MAX as i64)
}

/// Decimal conversion clamped to `c_int`, as used by `atoi`.
pub fn parse_int(input: &[u8]) -> ParsedInt {
    parse_signed(input, 10, c_int::MIN as i64, c_int::MAX as i64)
}

unsafe fn strtol_internal(
    str: *const c_char,
    endptr: *mut *mut c_char,
    base: c_int,
) -> ParsedInt {
    unsafe {
        if str.is_null() {
            if !endptr.is_null() {
                *endptr = ptr::null_mut();
            }
            return ParsedInt::rejected(ParseStatus::NoDigits);
        }

        let parsed = if base < 0 {
            ParsedInt::rejected(ParseStatus::InvalidBase)
        } else {
            parse_long(CStr::from_ptr(str).to_bytes(), base as u32)
        };

        if !endptr.is_null() {
            *endptr = str.add(parsed.consumed) as *mut c_char;
        }
        parsed
    }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn strtol(str: *const c_char, endptr: *mut *mut c_char, base: c_int) -> c_long {
    unsafe { strtol_internal(str, endptr, base).value as c_long }
}

/// `strtol` that also reports the [`ParseStatus`] code through `status`.
#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn strtol_status(
    str: *const c_char,
    endptr: *mut *mut c_char,
    base: c_int,
    status: *mut c_int,
) -> c_long {
    unsafe {
        let parsed = strtol_internal(str, endptr, base);
        if !status.is_null() {
            *status = parsed.status.as_c_int();
        }
        parsed.value as c_long
    }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn atol(str: *const c_char) -> c_long {
    unsafe { strtol(str, ptr::null_mut(), 10) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn atoi(str: *const c_char) -> c_int {
    unsafe {
        if str.is_null() {
            return 0;
        }
        parse_int(CStr::from_ptr(str).to_bytes()).value as c_int
    }
}
