use core::cmp::Ordering;
use core::ffi::{CStr, c_char, c_int};
use core::ptr;

use kcrt_abi::{StrError, StrResult};

use crate::memory;

#[inline(always)]
fn to_u8(c: c_char) -> u8 {
    c as u8
}

pub fn isspace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c' | b'\x0b')
}

pub fn isdigit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

pub fn isalpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

pub fn tolower(byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        byte - b'A' + b'a'
    } else {
        byte
    }
}

pub fn toupper(byte: u8) -> u8 {
    if byte.is_ascii_lowercase() {
        byte - b'a' + b'A'
    } else {
        byte
    }
}

pub unsafe fn strlen_internal(ptr: *const c_char) -> usize {
    unsafe {
        if ptr.is_null() {
            return 0;
        }

        let mut len = 0usize;
        while *ptr.add(len) != 0 {
            len += 1;
        }
        len
    }
}

pub unsafe fn strcmp_internal(lhs: *const c_char, rhs: *const c_char) -> c_int {
    unsafe {
        if lhs == rhs {
            return 0;
        }
        if lhs.is_null() {
            return -1;
        }
        if rhs.is_null() {
            return 1;
        }

        let mut l = lhs;
        let mut r = rhs;
        while *l != 0 && *l == *r {
            l = l.add(1);
            r = r.add(1);
        }

        to_u8(*l) as c_int - to_u8(*r) as c_int
    }
}

pub unsafe fn strncmp_internal(lhs: *const c_char, rhs: *const c_char, mut n: usize) -> c_int {
    unsafe {
        if n == 0 {
            return 0;
        }

        if lhs.is_null() {
            return if rhs.is_null() { 0 } else { -1 };
        }
        if rhs.is_null() {
            return 1;
        }

        let mut l = lhs;
        let mut r = rhs;

        while n > 0 && *l == *r {
            if *l == 0 {
                return 0;
            }
            l = l.add(1);
            r = r.add(1);
            n -= 1;
        }

        if n == 0 {
            0
        } else {
            to_u8(*l) as c_int - to_u8(*r) as c_int
        }
    }
}

/// Copies the terminator along with the text. `dest` must hold `strlen(src) + 1` bytes.
pub unsafe fn strcpy_internal(dest: *mut c_char, src: *const c_char) -> *mut c_char {
    unsafe {
        if dest.is_null() || src.is_null() {
            return dest;
        }

        let len = strlen_internal(src);
        memory::memcpy_internal(dest as *mut u8, src as *const u8, len + 1);
        dest
    }
}

pub unsafe fn strcat_internal(dest: *mut c_char, src: *const c_char) -> *mut c_char {
    unsafe {
        if dest.is_null() || src.is_null() {
            return dest;
        }

        let dest_len = strlen_internal(dest);
        strcpy_internal(dest.add(dest_len), src);
        dest
    }
}

pub unsafe fn strncpy_internal(dest: *mut c_char, src: *const c_char, n: usize) -> *mut c_char {
    unsafe {
        if dest.is_null() || n == 0 {
            return dest;
        }

        let mut i = 0usize;
        while i < n {
            let ch = if !src.is_null() { *src.add(i) } else { 0 };
            *dest.add(i) = ch;
            i += 1;
            if ch == 0 {
                break;
            }
        }

        memory::memset_internal(dest.add(i) as *mut u8, 0, n - i);
        dest
    }
}

pub unsafe fn strchr_internal(str: *const c_char, c: c_int) -> *mut c_char {
    unsafe {
        if str.is_null() {
            return ptr::null_mut();
        }
        let target = c as u8;
        let mut cursor = str;
        while *cursor != 0 {
            if to_u8(*cursor) == target {
                return cursor as *mut c_char;
            }
            cursor = cursor.add(1);
        }
        if target == 0 {
            cursor as *mut c_char
        } else {
            ptr::null_mut()
        }
    }
}

/// Length of the terminated string held in `buf`, if it holds one.
pub fn terminated_len(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == 0)
}

/// Copy `src` and its terminator into `dest`. Returns the string length.
pub fn str_copy(dest: &mut [u8], src: &CStr) -> StrResult<usize> {
    let bytes = src.to_bytes_with_nul();
    if bytes.len() > dest.len() {
        return Err(StrError::Capacity);
    }
    memory::copy_bytes(dest, bytes);
    Ok(bytes.len() - 1)
}

/// Append `src` after the string already in `dest`. Returns the combined length.
pub fn str_concat(dest: &mut [u8], src: &CStr) -> StrResult<usize> {
    let start = terminated_len(dest).ok_or(StrError::Unterminated)?;
    let copied = str_copy(&mut dest[start..], src)?;
    Ok(start + copied)
}

pub fn str_compare(lhs: &CStr, rhs: &CStr) -> Ordering {
    let diff = unsafe { strcmp_internal(lhs.as_ptr(), rhs.as_ptr()) };
    diff.cmp(&0)
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn strlen(str: *const c_char) -> usize {
    unsafe { strlen_internal(str) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn strcmp(lhs: *const c_char, rhs: *const c_char) -> c_int {
    unsafe { strcmp_internal(lhs, rhs) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn strncmp(lhs: *const c_char, rhs: *const c_char, n: usize) -> c_int {
    unsafe { strncmp_internal(lhs, rhs, n) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn strcpy(dest: *mut c_char, src: *const c_char) -> *mut c_char {
    unsafe { strcpy_internal(dest, src) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn strcat(dest: *mut c_char, src: *const c_char) -> *mut c_char {
    unsafe { strcat_internal(dest, src) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn strncpy(dest: *mut c_char, src: *const c_char, n: usize) -> *mut c_char {
    unsafe { strncpy_internal(dest, src, n) }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn strchr(str: *const c_char, c: c_int) -> *mut c_char {
    unsafe { strchr_internal(str, c) }
}
