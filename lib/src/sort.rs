//! Comparator-driven sort and binary search over strided byte arrays.
//!
//! The engine never sees element types, only `stride`-sized byte windows of a
//! borrowed buffer, so every comparator call receives a view that lies inside
//! the caller's array. Sorting is an in-place introsort: median-of-three
//! quicksort that recurses into the smaller side only, insertion sort for
//! short ranges and a heapsort fallback once the depth budget is spent.

use core::cmp::Ordering;
use core::ffi::{c_int, c_void};
use core::ptr;
use core::slice;

use kcrt_abi::Comparator;

/// Ranges at or below this length are finished with insertion sort.
const INSERTION_THRESHOLD: usize = 12;

/// Mutable view of `len` consecutive elements of `stride` bytes each.
pub struct ElementArray<'a> {
    bytes: &'a mut [u8],
    stride: usize,
}

impl<'a> ElementArray<'a> {
    /// Returns `None` if `stride` is zero or does not divide the buffer length.
    pub fn new(bytes: &'a mut [u8], stride: usize) -> Option<Self> {
        if stride == 0 || bytes.len() % stride != 0 {
            return None;
        }
        Some(Self { bytes, stride })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / self.stride
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn element(&self, index: usize) -> &[u8] {
        let start = index * self.stride;
        &self.bytes[start..start + self.stride]
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let stride = self.stride;
        let (first, second) = self.bytes.split_at_mut(hi * stride);
        first[lo * stride..(lo + 1) * stride].swap_with_slice(&mut second[..stride]);
    }

    #[inline]
    fn less<F>(&self, a: usize, b: usize, cmp: &mut F) -> bool
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        cmp(self.element(a), self.element(b)) == Ordering::Less
    }
}

/// Sort `elements` ascending under `cmp`. Not stable; allocates nothing.
pub fn sort_elements<F>(elements: &mut ElementArray<'_>, mut cmp: F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let len = elements.len();
    if len < 2 {
        return;
    }
    let depth_budget = 2 * (usize::BITS - len.leading_zeros());
    introsort(elements, 0, len, depth_budget, &mut cmp);
}

fn introsort<F>(arr: &mut ElementArray<'_>, mut lo: usize, mut hi: usize, mut depth: u32, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    loop {
        if hi - lo <= INSERTION_THRESHOLD {
            insertion_sort(arr, lo, hi, cmp);
            return;
        }
        if depth == 0 {
            heap_sort(arr, lo, hi, cmp);
            return;
        }
        depth -= 1;

        let pivot = partition(arr, lo, hi - 1, cmp);
        if pivot - lo < hi - (pivot + 1) {
            introsort(arr, lo, pivot, depth, cmp);
            lo = pivot + 1;
        } else {
            introsort(arr, pivot + 1, hi, depth, cmp);
            hi = pivot;
        }
    }
}

fn insertion_sort<F>(arr: &mut ElementArray<'_>, lo: usize, hi: usize, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    for i in (lo + 1)..hi {
        let mut j = i;
        while j > lo && arr.less(j, j - 1, cmp) {
            arr.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Partition the inclusive range `[lo, last]` around a median-of-three pivot.
/// Returns the pivot's final index.
fn partition<F>(arr: &mut ElementArray<'_>, lo: usize, last: usize, cmp: &mut F) -> usize
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let mid = lo + (last - lo) / 2;
    if arr.less(mid, lo, cmp) {
        arr.swap(mid, lo);
    }
    if arr.less(last, mid, cmp) {
        arr.swap(last, mid);
        if arr.less(mid, lo, cmp) {
            arr.swap(mid, lo);
        }
    }
    // Pivot parks at `lo`; the element at `last` is now >= pivot.
    arr.swap(lo, mid);

    let mut i = lo + 1;
    let mut j = last;
    loop {
        while i <= j && arr.less(i, lo, cmp) {
            i += 1;
        }
        while i <= j && arr.less(lo, j, cmp) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        arr.swap(i, j);
        i += 1;
        j -= 1;
    }
    arr.swap(lo, j);
    j
}

fn heap_sort<F>(arr: &mut ElementArray<'_>, lo: usize, hi: usize, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let n = hi - lo;
    for root in (0..n / 2).rev() {
        sift_down(arr, lo, root, n, cmp);
    }
    for end in (1..n).rev() {
        arr.swap(lo, lo + end);
        sift_down(arr, lo, 0, end, cmp);
    }
}

fn sift_down<F>(arr: &mut ElementArray<'_>, lo: usize, mut root: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && arr.less(lo + child, lo + child + 1, cmp) {
            child += 1;
        }
        if !arr.less(lo + root, lo + child, cmp) {
            break;
        }
        arr.swap(lo + root, lo + child);
        root = child;
    }
}

/// Binary search over `count = bytes.len() / stride` elements sorted ascending.
///
/// `probe` returns the ordering of the key relative to the element it is
/// given. Returns the index of some matching element.
pub fn search_elements<F>(bytes: &[u8], stride: usize, mut probe: F) -> Option<usize>
where
    F: FnMut(&[u8]) -> Ordering,
{
    if stride == 0 {
        return None;
    }

    let mut lo = 0usize;
    let mut hi = bytes.len() / stride;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let start = mid * stride;
        match probe(&bytes[start..start + stride]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
        }
    }
    None
}

#[inline]
fn ordering_from_c(result: c_int) -> Ordering {
    result.cmp(&0)
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn qsort(
    base: *mut c_void,
    nmemb: usize,
    size: usize,
    compar: Option<Comparator>,
) {
    let Some(compar) = compar else {
        return;
    };
    if base.is_null() || nmemb < 2 || size == 0 {
        return;
    }
    let Some(total) = nmemb.checked_mul(size) else {
        return;
    };

    unsafe {
        let bytes = slice::from_raw_parts_mut(base as *mut u8, total);
        if let Some(mut elements) = ElementArray::new(bytes, size) {
            sort_elements(&mut elements, |a, b| {
                ordering_from_c(compar(a.as_ptr() as *const c_void, b.as_ptr() as *const c_void))
            });
        }
    }
}

#[cfg_attr(feature = "c-exports", unsafe(no_mangle))]
pub unsafe extern "C" fn bsearch(
    key: *const c_void,
    base: *const c_void,
    nmemb: usize,
    size: usize,
    compar: Option<Comparator>,
) -> *mut c_void {
    let Some(compar) = compar else {
        return ptr::null_mut();
    };
    if base.is_null() || nmemb == 0 || size == 0 {
        return ptr::null_mut();
    }
    let Some(total) = nmemb.checked_mul(size) else {
        return ptr::null_mut();
    };

    unsafe {
        let bytes = slice::from_raw_parts(base as *const u8, total);
        match search_elements(bytes, size, |elem| {
            ordering_from_c(compar(key, elem.as_ptr() as *const c_void))
        }) {
            Some(index) => (base as *mut u8).add(index * size) as *mut c_void,
            None => ptr::null_mut(),
        }
    }
}
