//! Calendar time record

use core::ffi::c_int;

/// Broken-down calendar time, laid out exactly like C `struct tm`.
///
/// The ranges below are advisory. Nothing in the runtime validates or
/// normalizes them; the record is owned and populated by the caller.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tm {
    /// Seconds after the minute [0-60]
    pub tm_sec: c_int,
    /// Minutes after the hour [0-59]
    pub tm_min: c_int,
    /// Hours since midnight [0-23]
    pub tm_hour: c_int,
    /// Day of the month [1-31]
    pub tm_mday: c_int,
    /// Months since January [0-11]
    pub tm_mon: c_int,
    /// Years since 1900
    pub tm_year: c_int,
    /// Days since Sunday [0-6]
    pub tm_wday: c_int,
    /// Days since January 1 [0-365]
    pub tm_yday: c_int,
    /// Daylight saving flag: positive if in effect, zero if not, negative if unknown
    pub tm_isdst: c_int,
}

/// Offset of `tm_year` relative to the Gregorian year.
pub const TM_YEAR_BASE: c_int = 1900;

impl Tm {
    pub const fn zeroed() -> Self {
        Self {
            tm_sec: 0,
            tm_min: 0,
            tm_hour: 0,
            tm_mday: 0,
            tm_mon: 0,
            tm_year: 0,
            tm_wday: 0,
            tm_yday: 0,
            tm_isdst: 0,
        }
    }

    /// Gregorian year described by `tm_year`.
    #[inline]
    pub const fn full_year(&self) -> c_int {
        self.tm_year.wrapping_add(TM_YEAR_BASE)
    }
}
