use crate::memory;

const DIGITS_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS_LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[inline(always)]
fn ensure_null(buffer: &mut [u8]) {
    if let Some(first) = buffer.first_mut() {
        *first = 0;
    }
}

/// Render `value` in `radix` (2..=36) as a terminated string at the start of `buffer`.
///
/// Returns the length without the terminator, or 0 with an empty string left
/// behind if the digits and terminator do not fit.
pub fn u64_to_radix(value: u64, radix: u32, uppercase: bool, buffer: &mut [u8]) -> usize {
    if buffer.is_empty() || !(2..=36).contains(&radix) {
        ensure_null(buffer);
        return 0;
    }

    let digits = if uppercase { DIGITS_UPPER } else { DIGITS_LOWER };
    let buffer_len = buffer.len();
    let mut write_pos = buffer_len - 1;
    buffer[write_pos] = 0;

    let mut v = value;
    loop {
        if write_pos == 0 {
            ensure_null(buffer);
            return 0;
        }
        write_pos -= 1;
        buffer[write_pos] = digits[(v % radix as u64) as usize];
        v /= radix as u64;
        if v == 0 {
            break;
        }
    }

    let len = (buffer_len - 1) - write_pos;
    if memory::move_within(buffer, write_pos..buffer_len, 0).is_err() {
        ensure_null(buffer);
        return 0;
    }
    len
}

pub fn u64_to_decimal(value: u64, buffer: &mut [u8]) -> usize {
    u64_to_radix(value, 10, false, buffer)
}

pub fn i64_to_decimal(value: i64, buffer: &mut [u8]) -> usize {
    if value >= 0 {
        return u64_to_decimal(value as u64, buffer);
    }

    if buffer.len() < 2 {
        ensure_null(buffer);
        return 0;
    }

    buffer[0] = b'-';
    let len = u64_to_decimal(value.unsigned_abs(), &mut buffer[1..]);
    if len == 0 {
        buffer[0] = 0;
        return 0;
    }
    len + 1
}

/// Fixed-width, 16 digit uppercase hex rendering, optionally prefixed with `0x`.
pub fn u64_to_hex(value: u64, buffer: &mut [u8], with_prefix: bool) -> usize {
    let needed = 16 + if with_prefix { 2 } else { 0 } + 1;
    if buffer.len() < needed {
        ensure_null(buffer);
        return 0;
    }

    let mut pos = 0usize;
    if with_prefix {
        buffer[0] = b'0';
        buffer[1] = b'x';
        pos = 2;
    }

    let mut i = 16;
    while i > 0 {
        i -= 1;
        let digit = ((value >> (i * 4)) & 0xF) as usize;
        buffer[pos] = DIGITS_UPPER[digit];
        pos += 1;
    }

    buffer[pos] = 0;
    pos
}
