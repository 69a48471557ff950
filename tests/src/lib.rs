//! Built-in self-test suites for the kcrt runtime.
//!
//! A kernel calls [`tests_run_all`] early in boot, after attaching its
//! diagnostic sink, to check the runtime on the real target. The host test
//! runner drives the same suites.

#![no_std]

use core::ffi::c_int;

use kcrt::register_test_suites;
use kcrt::testing::{run_suites, TestRunSummary, TestSuiteDesc};

pub mod memory_tests;
pub mod misc_tests;
pub mod numeric_tests;

pub use kcrt::testing::suite_masks::*;

/// Every suite, in the order they run.
pub fn registered_suites() -> [&'static TestSuiteDesc; 5] {
    register_test_suites!(
        memory_tests::MEMORY_SUITE_DESC,
        string_tests::STRING_SUITE_DESC,
        numeric_tests::NUMERIC_SUITE_DESC,
        sort_tests::SORT_SUITE_DESC,
        misc_tests::MISC_SUITE_DESC,
    )
}

pub fn tests_run_all(mask: u32) -> TestRunSummary {
    run_suites(&registered_suites(), mask)
}

/// Boot-time entry point; returns 0 when every selected test passed.
#[unsafe(no_mangle)]
pub extern "C" fn kcrt_selftest_run(mask: u32) -> c_int {
    if tests_run_all(mask).all_passed() { 0 } else { -1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtin_suites_pass() {
        let summary = tests_run_all(SUITE_ALL);
        assert_eq!(summary.suite_count, 5);
        for result in summary.results() {
            assert!(
                result.all_passed(),
                "suite {} failed {} of {}",
                result.name,
                result.failed,
                result.total
            );
        }
        assert!(summary.total_tests > 20);
    }

    #[test]
    fn mask_limits_the_run() {
        let summary = tests_run_all(SUITE_MISC | SUITE_NUMERIC);
        assert_eq!(summary.suite_count, 2);
        assert_eq!(summary.results()[0].name, "numeric");
        assert_eq!(summary.results()[1].name, "misc");
        assert_eq!(kcrt_selftest_run(SUITE_MEMORY), 0);
    }
}
