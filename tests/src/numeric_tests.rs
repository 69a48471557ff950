use core::ffi::{c_char, c_int, c_long};
use core::ptr;

use kcrt::numfmt::{i64_to_decimal, u64_to_radix};
use kcrt::numparse::{atoi, atol, parse_long, parse_signed, strtol, strtol_status};
use kcrt::testing::{TestResult, SUITE_NUMERIC};
use kcrt::{check, define_test_suite, pass};
use kcrt_abi::ParseStatus;

const ROUND_TRIP_VALUES: [i64; 10] = [
    0,
    1,
    -1,
    42,
    -2_147_483_648,
    2_147_483_647,
    9_000_000_000,
    -123_456_789_012,
    i32::MAX as i64 + 1,
    -7,
];

fn test_decimal_round_trip() -> TestResult {
    let mut text = [0u8; 24];
    for value in ROUND_TRIP_VALUES {
        let len = i64_to_decimal(value, &mut text);
        check!(len > 0);
        let parsed = parse_signed(&text, 10, i64::MIN, i64::MAX);
        check!(parsed.value == value, "decimal round trip lost {}", value);
        check!(parsed.consumed == len);
    }
    pass!()
}

fn test_radix_round_trip() -> TestResult {
    let mut text = [0u8; 72];
    for base in 2u32..=36 {
        for value in [0u64, 1, 35, 1295, 0xDEAD_BEEF] {
            let len = u64_to_radix(value, base, base % 2 == 0, &mut text);
            let parsed = parse_signed(&text, base, i64::MIN, i64::MAX);
            check!(parsed.value as u64 == value, "base {} value {}", base, value);
            check!(parsed.consumed == len);
        }
    }
    pass!()
}

fn test_explicit_base_stops_at_foreign_digit() -> TestResult {
    // '8' is the first character outside base 8.
    let parsed = parse_long(b"12345678", 8);
    check!(parsed.value == 0o1234567);
    check!(parsed.consumed == 7);
    let parsed = parse_long(b"0777", 10);
    check!(parsed.value == 777);
    pass!()
}

fn test_overflow_reports_and_clamps() -> TestResult {
    let text = b"98765432109876543210 tail";
    let parsed = parse_signed(text, 10, i32::MIN as i64, i32::MAX as i64);
    check!(parsed.value == i32::MAX as i64);
    check!(parsed.status == ParseStatus::Overflow);
    check!(parsed.consumed == 20);

    let source = c"98765432109876543210987654321";
    let mut end: *mut c_char = ptr::null_mut();
    let mut status: c_int = 0;
    let value = unsafe { strtol_status(source.as_ptr(), &mut end, 10, &mut status) };
    check!(value == c_long::MAX);
    check!(status == ParseStatus::Overflow.as_c_int());
    check!(end as usize - source.as_ptr() as usize == source.to_bytes().len());
    pass!()
}

fn test_mixed_case_hex() -> TestResult {
    let mut end: *mut c_char = ptr::null_mut();
    let source = c"\t+0xBeEf!";
    let value = unsafe { strtol(source.as_ptr(), &mut end, 16) };
    check!(value == 0xBEEF);
    check!(unsafe { *end } == b'!' as c_char);
    pass!()
}

fn test_no_digits_leaves_end_at_start() -> TestResult {
    for source in [c"", c"   ", c"-", c"+ 5", c"x10"] {
        let mut end: *mut c_char = ptr::null_mut();
        let value = unsafe { strtol(source.as_ptr(), &mut end, 0) };
        check!(value == 0);
        check!(end as *const c_char == source.as_ptr());
    }
    pass!()
}

fn test_atoi_atol() -> TestResult {
    let expected_long: i64 = if c_long::BITS > 32 {
        -9_000_000_000
    } else {
        c_long::MIN as i64
    };
    unsafe {
        check!(atoi(c"  -17 apples".as_ptr()) == -17);
        check!(atoi(c"0x10".as_ptr()) == 0);
        check!(atoi(c"012".as_ptr()) == 12);
        check!(atol(c"-9000000000".as_ptr()) as i64 == expected_long);
    }
    pass!()
}

define_test_suite!(numeric, SUITE_NUMERIC, [
    test_decimal_round_trip,
    test_radix_round_trip,
    test_explicit_base_stops_at_foreign_digit,
    test_overflow_reports_and_clamps,
    test_mixed_case_hex,
    test_no_digits_leaves_end_at_start,
    test_atoi_atol,
]);
