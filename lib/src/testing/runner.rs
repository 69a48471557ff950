use super::TestResult;
use crate::klog_info;

pub fn run_single_test(name: &str, test_fn: impl FnOnce() -> TestResult) -> TestResult {
    let result = test_fn();
    if result.is_failure() {
        klog_info!("TEST FAIL: {}", name);
    }
    result
}
