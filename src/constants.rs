// Constants for heap constant lookups

/// Fallback label for instance type codes missing from the table
pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";

/// Fallback label for addresses that are not a known map
pub const UNKNOWN_MAP: &str = "UNKNOWN_MAP";

/// Fallback label for frame marker ordinals outside the sequence
pub const UNKNOWN_FRAME: &str = "UNKNOWN_FRAME";

/// Heap pages are 256 KiB
pub const PAGE_SIZE_BITS: u32 = 18;

/// Mask selecting the in-page offset of an address
/// Clearing these bits yields the page's address prefix
pub const PAGE_ALIGNMENT_MASK: u32 = (1 << PAGE_SIZE_BITS) - 1;

/// Instance type codes below this value are string representations
/// 128 is `SYMBOL_TYPE`, the first non-string type
pub const FIRST_NONSTRING_TYPE: u16 = 128;
