use core::ffi::c_int;

pub mod harness;
mod runner;
pub mod suite_masks;

pub use harness::{
    cycles_to_ms, estimate_cycles_per_ms, measure_elapsed_ms, run_suites, SuiteRunnerFn,
    TestRunSummary, TestSuiteDesc, TestSuiteResult, HARNESS_MAX_SUITES,
};
pub use runner::run_single_test;
pub use suite_masks::*;

/// Result of a single test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    /// Test passed successfully
    Pass,
    /// Test failed (assertion or explicit failure)
    Fail,
    /// Test was skipped
    Skipped,
}

impl TestResult {
    /// Returns true if the test passed.
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if the test failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Convert from C-style return code (0 = pass, non-zero = fail).
    #[inline]
    pub fn from_c_int(val: c_int) -> Self {
        if val == 0 { Self::Pass } else { Self::Fail }
    }

    /// Convert to C-style return code (0 = pass, -1 = fail).
    #[inline]
    pub fn to_c_int(self) -> c_int {
        match self {
            Self::Pass | Self::Skipped => 0,
            Self::Fail => -1,
        }
    }
}

impl From<i32> for TestResult {
    fn from(val: i32) -> Self {
        Self::from_c_int(val as c_int)
    }
}

impl From<TestResult> for c_int {
    fn from(val: TestResult) -> Self {
        val.to_c_int()
    }
}

/// Return a passing test result.
#[macro_export]
macro_rules! pass {
    () => {
        $crate::testing::TestResult::Pass
    };
}

/// Return a failing test result with optional message.
///
/// # Example
/// ```ignore
/// if end != expected_end {
///     return fail!("end pointer off by {}", end - expected_end);
/// }
/// ```
#[macro_export]
macro_rules! fail {
    () => {
        $crate::testing::TestResult::Fail
    };
    ($msg:expr) => {{
        $crate::klog_info!("TEST FAIL: {}", $msg);
        $crate::testing::TestResult::Fail
    }};
    ($fmt:expr, $($arg:tt)*) => {{
        $crate::klog_info!(concat!("TEST FAIL: ", $fmt), $($arg)*);
        $crate::testing::TestResult::Fail
    }};
}

/// Bail out of a test function with `fail!` unless `cond` holds.
#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        if !$cond {
            return $crate::fail!(concat!("check failed: ", stringify!($cond)));
        }
    };
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            return $crate::fail!($($arg)*);
        }
    };
}

/// Run a single test.
///
/// # Usage variants
///
/// ```ignore
/// // Basic: just function name
/// run_test!(test_function)
///
/// // With custom name
/// run_test!("custom name", test_function)
///
/// // Accumulating results (for suite runners)
/// run_test!(passed, total, test_function)
/// ```
#[macro_export]
macro_rules! run_test {
    // Accumulating variant: (passed, total, test_fn)
    ($passed:expr, $total:expr, $test_fn:expr) => {{
        $total += 1;
        let result = $crate::testing::run_single_test(stringify!($test_fn), || $test_fn().into());
        if result.is_pass() {
            $passed += 1;
        }
        result
    }};

    // Simple variant: just function
    ($test_fn:expr) => {{
        $crate::testing::run_single_test(stringify!($test_fn), || $test_fn().into())
    }};

    // Custom name
    ($name:expr, $test_fn:expr) => {{
        $crate::testing::run_single_test($name, || $test_fn().into())
    }};
}

/// Define a self-test suite.
///
/// Generates a runner function compatible with `TestSuiteDesc` and a static
/// `<NAME>_SUITE_DESC` descriptor for registration.
///
/// ```ignore
/// define_test_suite!(memory, SUITE_MEMORY, [
///     test_memmove_overlap,
///     test_memcmp_sign,
/// ]);
/// ```
#[macro_export]
macro_rules! define_test_suite {
    ($suite_name:ident, $mask:expr, [$($test_fn:path),* $(,)?]) => {
        $crate::paste::paste! {
            fn [<run_ $suite_name _suite>](out: &mut $crate::testing::TestSuiteResult) -> i32 {
                let start = $crate::tsc::rdtsc();
                let mut passed = 0u32;
                let mut total = 0u32;

                $(
                    $crate::run_test!(passed, total, $test_fn);
                )*

                let elapsed = $crate::testing::measure_elapsed_ms(start, $crate::tsc::rdtsc());
                out.name = stringify!($suite_name);
                out.fill(passed, total, elapsed);

                if passed == total { 0 } else { -1 }
            }

            pub static [<$suite_name:upper _SUITE_DESC>]: $crate::testing::TestSuiteDesc = $crate::testing::TestSuiteDesc {
                name: stringify!($suite_name),
                mask_bit: $mask,
                run: Some([<run_ $suite_name _suite>]),
            };
        }
    };
}

/// Register multiple test suites with the harness in one call.
#[macro_export]
macro_rules! register_test_suites {
    ($($suite_desc:expr),* $(,)?) => {
        [$(&$suite_desc),*]
    };
}
