#![no_std]

#[cfg(test)]
extern crate std;

pub mod cpu {
    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    pub fn hlt() {
        x86_64::instructions::hlt();
    }

    #[cfg(not(target_arch = "x86_64"))]
    #[inline(always)]
    pub fn hlt() {
        core::hint::spin_loop();
    }

    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    pub fn disable_interrupts() {
        x86_64::instructions::interrupts::disable();
    }

    #[cfg(not(target_arch = "x86_64"))]
    #[inline(always)]
    pub fn disable_interrupts() {}

    #[inline(always)]
    pub fn halt_loop() -> ! {
        loop {
            hlt();
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    #[allow(unused_unsafe)]
    pub fn cpuid(leaf: u32) -> (u32, u32, u32, u32) {
        let res = unsafe { core::arch::x86_64::__cpuid(leaf) };
        (res.eax, res.ebx, res.ecx, res.edx)
    }

    #[cfg(not(target_arch = "x86_64"))]
    #[inline(always)]
    pub fn cpuid(_leaf: u32) -> (u32, u32, u32, u32) {
        (0, 0, 0, 0)
    }
}

pub mod tsc {
    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    #[allow(unused_unsafe)]
    pub fn rdtsc() -> u64 {
        unsafe { core::arch::x86_64::_rdtsc() }
    }

    #[cfg(not(target_arch = "x86_64"))]
    #[inline(always)]
    pub fn rdtsc() -> u64 {
        0
    }
}

pub mod abort;
pub mod klog;
pub mod math;
pub mod memory;
pub mod numfmt;
pub mod numparse;
pub mod sort;
pub mod string;
pub mod testing;

pub mod time {
    pub use kcrt_abi::time::{TM_YEAR_BASE, Tm};
}

#[doc(hidden)]
pub use paste;

pub use abort::abort;
pub use kcrt_abi::{Comparator, MemError, MemResult, ParseStatus, StrError, StrResult, TerminalWriteFn};
pub use klog::{klog_attach_sink, klog_get_level, klog_is_enabled, klog_set_level, KlogLevel};
pub use math::{abs_i32, abs_i64};
pub use numparse::{parse_int, parse_long, parse_signed, ParsedInt};
pub use sort::{search_elements, sort_elements, ElementArray};
