//! Address composition over the constant tables
//!
//! Known maps and objects are recorded as offsets relative to the first page
//! of their heap space. A dump reader sees raw addresses instead, so this
//! module converts in both directions:
//!
//! ```text
//! (space, offset)  →  first_page(space) + offset            absolute_address
//! address          →  page_base(address & !mask), offset    classify_address
//! ```
//!
//! Only the lower 32 bits of an address take part; the first page table
//! records nothing wider.

use std::fmt;

use crate::constants::{PAGE_ALIGNMENT_MASK, UNKNOWN_MAP};
use crate::errors::LookupError;
use crate::store::{ConstantTables, KnownMap, PagePrefix, SpaceOffset};

/// What a resolved address points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownEntry {
    Map(KnownMap),
    Object(&'static str),
}

impl KnownEntry {
    pub fn name(&self) -> &'static str {
        match *self {
            KnownEntry::Map(map) => map.name,
            KnownEntry::Object(name) => name,
        }
    }
}

/// An address matched to a known map or object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub space: &'static str,
    pub offset: SpaceOffset,
    pub absolute: u32,
    pub entry: KnownEntry,
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+0x{:x}: ", self.space, self.offset)?;
        match self.entry {
            KnownEntry::Map(map) => write!(f, "{}", map),
            KnownEntry::Object(name) => f.write_str(name),
        }
    }
}

/// Split the lower 32 bits of an address into page prefix and in-page offset
pub fn split_address(address: u64) -> (PagePrefix, SpaceOffset) {
    let low = address as u32;
    (low & !PAGE_ALIGNMENT_MASK, low & PAGE_ALIGNMENT_MASK)
}

/// Absolute (lower 32 bit) address of an offset within a heap space
///
/// Wraps at 32 bits, like the address bits the first page table records.
pub fn absolute_address(
    tables: &ConstantTables,
    space: &str,
    offset: SpaceOffset,
) -> Result<u32, LookupError> {
    let base = tables.space_first_page(space)?;
    Ok(base.wrapping_add(offset))
}

/// Resolve an address to the known map or object it points at
///
/// Maps take precedence when a map and an object share an offset.
pub fn classify_address(
    tables: &ConstantTables,
    address: u64,
) -> Result<ResolvedAddress, LookupError> {
    let (prefix, offset) = split_address(address);
    let space = tables.page_base(prefix)?;

    let entry = match tables.known_map_for(space, offset) {
        Ok(map) => KnownEntry::Map(map),
        Err(_) => KnownEntry::Object(tables.known_object_for(space, offset)?),
    };

    Ok(ResolvedAddress {
        space,
        offset,
        absolute: prefix | offset,
        entry,
    })
}

/// Human readable label for an address; never fails
///
/// Known maps are labelled with their instance type name. Anything that
/// cannot be resolved is labelled [`UNKNOWN_MAP`].
pub fn describe_address(tables: &ConstantTables, address: u64) -> String {
    match classify_address(tables, address) {
        Ok(resolved) => match resolved.entry {
            KnownEntry::Map(map) => format!(
                "{}+0x{:x}: {} ({} {})",
                resolved.space,
                resolved.offset,
                map.name,
                map.instance_type,
                tables.instance_type_name_or_unknown(map.instance_type)
            ),
            KnownEntry::Object(_) => resolved.to_string(),
        },
        Err(_) => format!("0x{:08x}: {}", address as u32, UNKNOWN_MAP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_address_uses_page_mask() {
        assert_eq!(split_address(0x000c_43a5), (0x000c_0000, 0x43a5));
        assert_eq!(split_address(0x2141), (0, 0x2141));
        // Upper 32 bits are ignored
        assert_eq!(split_address(0x1234_5678_000c_0010), (0x000c_0000, 0x10));
    }
}
