//! The runtime's only non-local exit.

use crate::cpu;
use crate::klog_error;

/// Stop the calling context for good.
///
/// Emits one diagnostic line if a sink is attached, masks interrupts and
/// parks the CPU. There is no process to exit to, so this never returns.
#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub extern "C" fn abort() -> ! {
    klog_error!("kcrt: abort() called, halting");
    cpu::disable_interrupts();
    cpu::halt_loop()
}
