use core::cmp::Ordering;
use core::ffi::c_int;
use core::ops::Range;

use kcrt_abi::{MemError, MemResult};

pub unsafe fn memmove_internal(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe {
        if dest as *const u8 == src || n == 0 {
            return dest;
        }

        // Walk away from the overlap: forward when dest trails src, backward otherwise.
        if (dest as *const u8) < src {
            let mut i = 0usize;
            while i < n {
                *dest.add(i) = *src.add(i);
                i += 1;
            }
        } else {
            let mut i = n;
            while i > 0 {
                i -= 1;
                *dest.add(i) = *src.add(i);
            }
        }

        dest
    }
}

pub unsafe fn memset_internal(dest: *mut u8, value: c_int, n: usize) -> *mut u8 {
    unsafe {
        let mut i = 0usize;
        let val = value as u8;
        while i < n {
            *dest.add(i) = val;
            i += 1;
        }
        dest
    }
}

pub unsafe fn memcpy_internal(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe {
        let mut i = 0usize;
        while i < n {
            *dest.add(i) = *src.add(i);
            i += 1;
        }
        dest
    }
}

pub unsafe fn memcmp_internal(s1: *const u8, s2: *const u8, n: usize) -> c_int {
    unsafe {
        let mut i = 0usize;
        while i < n {
            let a = *s1.add(i);
            let b = *s2.add(i);
            if a != b {
                return a as c_int - b as c_int;
            }
            i += 1;
        }
        0
    }
}

/// Copy as many bytes as both views hold. Returns the number copied.
pub fn copy_bytes(dest: &mut [u8], src: &[u8]) -> usize {
    let n = dest.len().min(src.len());
    unsafe {
        memcpy_internal(dest.as_mut_ptr(), src.as_ptr(), n);
    }
    n
}

/// Move `buf[src]` so that it starts at `dest`, tolerating overlap.
pub fn move_within(buf: &mut [u8], src: Range<usize>, dest: usize) -> MemResult<()> {
    if src.start > src.end || src.end > buf.len() {
        return Err(MemError::OutOfBounds);
    }
    let n = src.end - src.start;
    if dest > buf.len() - n {
        return Err(MemError::OutOfBounds);
    }

    let base = buf.as_mut_ptr();
    unsafe {
        memmove_internal(base.add(dest), base.add(src.start), n);
    }
    Ok(())
}

pub fn fill_bytes(dest: &mut [u8], value: u8) {
    unsafe {
        memset_internal(dest.as_mut_ptr(), value as c_int, dest.len());
    }
}

/// Bytewise ordering of the common prefix; a strict prefix orders first.
pub fn compare_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let n = a.len().min(b.len());
    let diff = unsafe { memcmp_internal(a.as_ptr(), b.as_ptr(), n) };
    diff.cmp(&0).then(a.len().cmp(&b.len()))
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn memmove(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe { memmove_internal(dest, src, n) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn memset(dest: *mut u8, value: c_int, n: usize) -> *mut u8 {
    unsafe { memset_internal(dest, value, n) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn memcpy(dest: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe { memcpy_internal(dest, src, n) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn memcmp(s1: *const u8, s2: *const u8, n: usize) -> c_int {
    unsafe { memcmp_internal(s1, s2, n) }
}
