use kcrt::memory::{compare_bytes, copy_bytes, memcmp, memcpy, memmove, memset, move_within};
use kcrt::testing::{TestResult, SUITE_MEMORY};
use kcrt::{check, define_test_suite, pass};

const BUF_LEN: usize = 32;

fn pattern() -> [u8; BUF_LEN] {
    let mut buf = [0u8; BUF_LEN];
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(29).wrapping_add(3);
    }
    buf
}

fn test_memcpy_then_memcmp_equal() -> TestResult {
    let src = pattern();
    let mut dst = [0u8; BUF_LEN];
    let ret = unsafe { memcpy(dst.as_mut_ptr(), src.as_ptr(), BUF_LEN) };
    check!(ret == dst.as_mut_ptr());
    check!(unsafe { memcmp(dst.as_ptr(), src.as_ptr(), BUF_LEN) } == 0);
    pass!()
}

/// Reference result of moving `n` bytes from `src` to `dest` through a staging copy.
fn staged_move(src: usize, dest: usize, n: usize) -> [u8; BUF_LEN] {
    let mut expected = pattern();
    let mut staging = [0u8; BUF_LEN];
    copy_bytes(&mut staging[..n], &expected[src..src + n]);
    copy_bytes(&mut expected[dest..dest + n], &staging[..n]);
    expected
}

fn test_memmove_dest_after_src() -> TestResult {
    for shift in 1..8 {
        let mut buf = pattern();
        let n = BUF_LEN - 8;
        let base = buf.as_mut_ptr();
        unsafe {
            memmove(base.add(shift), base, n);
        }
        check!(buf == staged_move(0, shift, n), "memmove forward overlap, shift {}", shift);
    }
    pass!()
}

fn test_memmove_dest_before_src() -> TestResult {
    for shift in 1..8 {
        let mut buf = pattern();
        let n = BUF_LEN - 8;
        let base = buf.as_mut_ptr();
        unsafe {
            memmove(base, base.add(shift), n);
        }
        check!(buf == staged_move(shift, 0, n), "memmove backward overlap, shift {}", shift);
    }
    pass!()
}

fn test_move_within_bounds() -> TestResult {
    let mut buf = pattern();
    check!(move_within(&mut buf, 4..20, 10).is_ok());
    check!(buf == staged_move(4, 10, 16));
    check!(move_within(&mut buf, 20..40, 0).is_err());
    pass!()
}

fn test_memset_low_byte() -> TestResult {
    let mut buf = [0u8; 8];
    unsafe {
        memset(buf.as_mut_ptr(), -1, buf.len());
    }
    check!(buf == [0xFF; 8]);
    unsafe {
        memset(buf.as_mut_ptr(), 0x3_41, 4);
    }
    check!(buf == [0x41, 0x41, 0x41, 0x41, 0xFF, 0xFF, 0xFF, 0xFF]);
    pass!()
}

fn test_memcmp_sign() -> TestResult {
    let a = *b"abcx";
    let b = *b"abcy";
    check!(unsafe { memcmp(a.as_ptr(), b.as_ptr(), 4) } < 0);
    check!(unsafe { memcmp(b.as_ptr(), a.as_ptr(), 4) } > 0);
    check!(unsafe { memcmp(a.as_ptr(), b.as_ptr(), 3) } == 0);
    check!(compare_bytes(&a, &b).is_lt());
    pass!()
}

fn test_zero_length_noop() -> TestResult {
    let mut buf = pattern();
    let other = [0u8; BUF_LEN];
    unsafe {
        memcpy(buf.as_mut_ptr(), other.as_ptr(), 0);
        memmove(buf.as_mut_ptr(), other.as_ptr(), 0);
        memset(buf.as_mut_ptr(), 0, 0);
        check!(memcmp(buf.as_ptr(), other.as_ptr(), 0) == 0);
    }
    check!(buf == pattern());
    pass!()
}

define_test_suite!(memory, SUITE_MEMORY, [
    test_memcpy_then_memcmp_equal,
    test_memmove_dest_after_src,
    test_memmove_dest_before_src,
    test_move_within_bounds,
    test_memset_low_byte,
    test_memcmp_sign,
    test_zero_length_noop,
]);
