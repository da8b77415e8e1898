//! Value types handed out by the store
//!
//! Everything here is `Copy` and borrows only `'static` names, so a caller can
//! never reach back into a table through a lookup result.

use std::fmt;

/// Instance type identifier
pub type InstanceTypeCode = u16;

/// Byte offset inside a heap space, relative to its first page
pub type SpaceOffset = u32;

/// Lower 32 bits of a heap space's first page address
pub type PagePrefix = u32;

/// A known map: the instance type it describes and its symbolic name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnownMap {
    pub instance_type: InstanceTypeCode,
    pub name: &'static str,
}

impl KnownMap {
    pub fn new(instance_type: InstanceTypeCode, name: &'static str) -> Self {
        KnownMap {
            instance_type,
            name,
        }
    }
}

impl From<(InstanceTypeCode, &'static str)> for KnownMap {
    fn from((instance_type, name): (InstanceTypeCode, &'static str)) -> Self {
        KnownMap::new(instance_type, name)
    }
}

impl fmt::Display for KnownMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.instance_type)
    }
}

/// Entry counts for each table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStats {
    pub instance_types: usize,
    pub known_maps: usize,
    pub known_objects: usize,
    pub heap_first_pages: usize,
    pub frame_markers: usize,
}

/// The literal slices a store is built from
///
/// [`TableSource::generated`] points at the generated data in [`crate::data`].
#[derive(Debug, Clone, Copy)]
pub struct TableSource {
    pub instance_types: &'static [(InstanceTypeCode, &'static str)],
    pub known_maps: &'static [((&'static str, SpaceOffset), (InstanceTypeCode, &'static str))],
    pub known_objects: &'static [((&'static str, SpaceOffset), &'static str)],
    pub heap_first_pages: &'static [(PagePrefix, &'static str)],
    pub frame_markers: &'static [&'static str],
}

impl TableSource {
    pub fn generated() -> Self {
        TableSource {
            instance_types: crate::data::INSTANCE_TYPES,
            known_maps: crate::data::KNOWN_MAPS,
            known_objects: crate::data::KNOWN_OBJECTS,
            heap_first_pages: crate::data::HEAP_FIRST_PAGES,
            frame_markers: crate::data::FRAME_MARKERS,
        }
    }
}

impl Default for TableSource {
    fn default() -> Self {
        TableSource::generated()
    }
}
