//! Self-test harness infrastructure.
//!
//! This module provides the low-level types used by the `define_test_suite!`
//! macro, so a kernel can run the runtime's self-tests at boot and the same
//! suites can be driven from a host test runner.
//!
//! # Architecture
//!
//! - `TestSuiteResult`: Per-suite execution results (passed/failed/elapsed time)
//! - `TestSuiteDesc`: Static descriptor for a test suite (name, mask, runner)
//! - `TestRunSummary`: Aggregated results across all suites
//!
//! # Usage
//!
//! ```ignore
//! define_test_suite!(memory, SUITE_MEMORY, [
//!     test_memmove_overlap,
//!     test_memcmp_sign,
//! ]);
//! ```

use core::sync::atomic::{AtomicU64, Ordering};

use crate::klog_info;

/// Maximum number of suites a single run can report on.
pub const HARNESS_MAX_SUITES: usize = 16;

/// Default cycles per millisecond estimate (3 GHz).
const DEFAULT_CYCLES_PER_MS: u64 = 3_000_000;

/// Result of executing a single test suite.
#[derive(Clone, Copy, Debug, Default)]
pub struct TestSuiteResult {
    pub name: &'static str,
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub elapsed_ms: u32,
}

impl TestSuiteResult {
    /// Create a new result with just the suite name set.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            total: 0,
            passed: 0,
            failed: 0,
            elapsed_ms: 0,
        }
    }

    /// Fill in results from a (passed, total) tuple and elapsed time.
    pub fn fill(&mut self, passed: u32, total: u32, elapsed_ms: u32) {
        self.total = total;
        self.passed = passed;
        self.failed = total.saturating_sub(passed);
        self.elapsed_ms = elapsed_ms;
    }

    /// Check if all tests in this suite passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Runner generated by `define_test_suite!`; returns 0 when every test passed.
pub type SuiteRunnerFn = fn(&mut TestSuiteResult) -> i32;

/// Static descriptor for a test suite.
#[derive(Clone, Copy)]
pub struct TestSuiteDesc {
    pub name: &'static str,
    pub mask_bit: u32,
    pub run: Option<SuiteRunnerFn>,
}

/// Aggregated results from running a set of suites.
#[derive(Clone, Copy, Debug)]
pub struct TestRunSummary {
    pub suites: [TestSuiteResult; HARNESS_MAX_SUITES],
    pub suite_count: usize,
    pub total_tests: u32,
    pub passed: u32,
    pub failed: u32,
    pub elapsed_ms: u32,
}

impl Default for TestRunSummary {
    fn default() -> Self {
        Self {
            suites: [TestSuiteResult::default(); HARNESS_MAX_SUITES],
            suite_count: 0,
            total_tests: 0,
            passed: 0,
            failed: 0,
            elapsed_ms: 0,
        }
    }
}

impl TestRunSummary {
    /// Add results from a single suite to the summary.
    pub fn add_suite_result(&mut self, result: &TestSuiteResult) {
        if self.suite_count < HARNESS_MAX_SUITES {
            self.suites[self.suite_count] = *result;
            self.suite_count += 1;
        }
        self.total_tests = self.total_tests.saturating_add(result.total);
        self.passed = self.passed.saturating_add(result.passed);
        self.failed = self.failed.saturating_add(result.failed);
        self.elapsed_ms = self.elapsed_ms.saturating_add(result.elapsed_ms);
    }

    /// Check if all tests across all suites passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn results(&self) -> &[TestSuiteResult] {
        &self.suites[..self.suite_count]
    }
}

/// Run every suite in `suites` whose mask bit is selected by `mask`.
pub fn run_suites(suites: &[&TestSuiteDesc], mask: u32) -> TestRunSummary {
    let mut summary = TestRunSummary::default();
    for desc in suites {
        if desc.mask_bit & mask == 0 {
            continue;
        }
        let Some(run) = desc.run else {
            continue;
        };
        let mut result = TestSuiteResult::new(desc.name);
        run(&mut result);
        klog_info!(
            "SUITE {}: {}/{} passed ({} ms)",
            result.name,
            result.passed,
            result.total,
            result.elapsed_ms
        );
        summary.add_suite_result(&result);
    }
    klog_info!(
        "TESTS: {}/{} passed across {} suites",
        summary.passed,
        summary.total_tests,
        summary.suite_count
    );
    summary
}

// =============================================================================
// Time measurement utilities
// =============================================================================

static CACHED_CYCLES_PER_MS: AtomicU64 = AtomicU64::new(0);

/// Estimate CPU cycles per millisecond using CPUID if available.
pub fn estimate_cycles_per_ms() -> u64 {
    let cached = CACHED_CYCLES_PER_MS.load(Ordering::Relaxed);
    if cached != 0 {
        return cached;
    }

    let (max_leaf, _, _, _) = crate::cpu::cpuid(0);
    let mut cycles_per_ms = DEFAULT_CYCLES_PER_MS;
    if max_leaf >= 0x16 {
        let (freq_mhz, _, _, _) = crate::cpu::cpuid(0x16);
        if freq_mhz != 0 {
            cycles_per_ms = freq_mhz as u64 * 1_000;
        }
    }

    CACHED_CYCLES_PER_MS.store(cycles_per_ms, Ordering::Relaxed);
    cycles_per_ms
}

/// Convert TSC cycles to milliseconds.
pub fn cycles_to_ms(cycles: u64) -> u32 {
    let cycles_per_ms = estimate_cycles_per_ms();
    if cycles_per_ms == 0 {
        return 0;
    }
    let ms = cycles / cycles_per_ms;
    if ms > u32::MAX as u64 {
        return u32::MAX;
    }
    ms as u32
}

/// Measure elapsed time in milliseconds between two TSC readings.
#[inline]
pub fn measure_elapsed_ms(start: u64, end: u64) -> u32 {
    cycles_to_ms(end.wrapping_sub(start))
}
