use kcrt::math::{abs, labs};
use kcrt::numfmt::{u64_to_decimal, u64_to_hex};
use kcrt::testing::{TestResult, SUITE_MISC};
use kcrt::time::Tm;
use kcrt::{check, define_test_suite, pass};

fn test_abs() -> TestResult {
    check!(abs(-5) == 5);
    check!(abs(5) == 5);
    check!(abs(i32::MIN) == i32::MIN);
    check!(labs(-70) == 70);
    pass!()
}

fn test_tm_is_plain_data() -> TestResult {
    let mut tm = Tm::zeroed();
    tm.tm_year = 125;
    tm.tm_mon = 11;
    tm.tm_mday = 31;
    tm.tm_hour = 25;
    check!(tm.full_year() == 2025);
    check!(tm.tm_hour == 25, "out-of-range fields are not normalized");
    check!(core::mem::size_of::<Tm>() == 36);
    pass!()
}

fn test_number_formatting() -> TestResult {
    let mut buf = [0u8; 24];
    check!(u64_to_decimal(u64::MAX, &mut buf) == 20);
    check!(&buf[..21] == b"18446744073709551615\0");
    check!(u64_to_decimal(u64::MAX, &mut buf[..20]) == 0);
    check!(u64_to_decimal(1, &mut buf) == 1);
    check!(u64_to_hex(1, &mut buf, false) == 16);
    check!(u64_to_hex(1, &mut buf[..18], true) == 0);
    pass!()
}

define_test_suite!(misc, SUITE_MISC, [
    test_abs,
    test_tm_is_plain_data,
    test_number_formatting,
]);
