use crate::store::PagePrefix;

/// Lower 32 bits of the first page address of each heap space.
pub static HEAP_FIRST_PAGES: &[(PagePrefix, &str)] = &[
    (0x000c_0000, "old_space"),
    (0x0000_0000, "read_only_space"),
];
