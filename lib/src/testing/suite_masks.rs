pub const SUITE_MEMORY: u32 = 1 << 0;
pub const SUITE_STRING: u32 = 1 << 1;
pub const SUITE_NUMERIC: u32 = 1 << 2;
pub const SUITE_SORT: u32 = 1 << 3;
pub const SUITE_MISC: u32 = 1 << 4;
pub const SUITE_ALL: u32 = SUITE_MEMORY | SUITE_STRING | SUITE_NUMERIC | SUITE_SORT | SUITE_MISC;
