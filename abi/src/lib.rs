//! kcrt C-ABI types
//!
//! Canonical definitions for every type shared between the freestanding
//! runtime and the kernel or application code that links against it.
//! All structs are `#[repr(C)]` and all status enums `#[repr(i32)]`.

#![no_std]
#![forbid(unsafe_code)]

pub mod error;
pub mod ffi;
pub mod time;

pub use error::*;
pub use ffi::*;
pub use time::*;
