//! Constant table store
//!
//! This module indexes the generated literals in [`crate::data`] and answers
//! every lookup against them:
//! - [`types`]: value types handed back to callers ([`KnownMap`], [`TableStats`])
//!
//! # Lifecycle
//!
//! [`tables()`] returns the process-wide store. It is built from the literals
//! the first time it is touched and is never mutated afterwards, so any number
//! of threads may read it without locking. [`ConstantTables::build`] produces a
//! separate owned copy from the same data.
//!
//! # Misses
//!
//! Every keyed lookup returns [`LookupError::NotFound`] on a miss and frame
//! marker ordinals return [`LookupError::IndexOutOfRange`]. Matching is exact:
//! an offset one byte off a known map is a miss.
//!
//! # Referential integrity
//!
//! Known map instance types are not checked against the instance type table.
//! Generated data may reference codes that are not listed separately;
//! [`ConstantTables::dangling_map_types`] reports them without rejecting them.

pub mod types;

use std::sync::LazyLock;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::constants::{FIRST_NONSTRING_TYPE, UNKNOWN_FRAME, UNKNOWN_TYPE};
use crate::errors::{LookupError, Table};
pub use types::{InstanceTypeCode, KnownMap, PagePrefix, SpaceOffset, TableSource, TableStats};

static TABLES: LazyLock<ConstantTables> = LazyLock::new(ConstantTables::build);

/// The process-wide constant tables
pub fn tables() -> &'static ConstantTables {
    &TABLES
}

/// Per-space offset index
type SpaceIndex<V> = FxHashMap<&'static str, FxHashMap<SpaceOffset, V>>;

/// Immutable, hash-indexed view over one set of generated tables
#[derive(Debug, Clone)]
pub struct ConstantTables {
    source: TableSource,
    instance_types: FxHashMap<InstanceTypeCode, &'static str>,
    instance_type_codes: FxHashMap<&'static str, InstanceTypeCode>,
    known_maps: SpaceIndex<KnownMap>,
    known_objects: SpaceIndex<&'static str>,
    page_spaces: FxHashMap<PagePrefix, &'static str>,
    space_pages: FxHashMap<&'static str, PagePrefix>,
    frame_ordinals: FxHashMap<&'static str, usize>,
}

impl ConstantTables {
    /// Build the tables from the generated literals
    pub fn build() -> Self {
        Self::from_source(TableSource::generated())
    }

    /// Build the tables from an arbitrary set of literals
    ///
    /// A key that appears twice keeps its first entry; the repeat is logged.
    pub fn from_source(source: TableSource) -> Self {
        let mut instance_types = FxHashMap::default();
        let mut instance_type_codes = FxHashMap::default();
        for &(code, name) in source.instance_types {
            if instance_types.contains_key(&code) {
                warn!("Duplicate instance type code {} ({}) ignored", code, name);
                continue;
            }
            instance_types.insert(code, name);
            instance_type_codes.entry(name).or_insert(code);
        }

        let mut known_maps: SpaceIndex<KnownMap> = FxHashMap::default();
        for &((space, offset), map) in source.known_maps {
            let by_offset = known_maps.entry(space).or_default();
            if by_offset.contains_key(&offset) {
                warn!(
                    "Duplicate known map at ({}, 0x{:05x}) ignored",
                    space, offset
                );
                continue;
            }
            by_offset.insert(offset, KnownMap::from(map));
        }

        let mut known_objects: SpaceIndex<&'static str> = FxHashMap::default();
        for &((space, offset), name) in source.known_objects {
            let by_offset = known_objects.entry(space).or_default();
            if by_offset.contains_key(&offset) {
                warn!(
                    "Duplicate known object at ({}, 0x{:05x}) ignored",
                    space, offset
                );
                continue;
            }
            by_offset.insert(offset, name);
        }

        let mut page_spaces = FxHashMap::default();
        let mut space_pages = FxHashMap::default();
        for &(prefix, space) in source.heap_first_pages {
            if page_spaces.contains_key(&prefix) {
                warn!("Duplicate first page 0x{:08x} ({}) ignored", prefix, space);
                continue;
            }
            page_spaces.insert(prefix, space);
            space_pages.entry(space).or_insert(prefix);
        }

        let mut frame_ordinals = FxHashMap::default();
        for (ordinal, &name) in source.frame_markers.iter().enumerate() {
            frame_ordinals.entry(name).or_insert(ordinal);
        }

        let tables = ConstantTables {
            source,
            instance_types,
            instance_type_codes,
            known_maps,
            known_objects,
            page_spaces,
            space_pages,
            frame_ordinals,
        };

        let stats = tables.stats();
        debug!(
            "Built constant tables: {} instance types, {} known maps, {} known objects, \
             {} first pages, {} frame markers",
            stats.instance_types,
            stats.known_maps,
            stats.known_objects,
            stats.heap_first_pages,
            stats.frame_markers
        );
        let dangling = tables.dangling_map_types().count();
        if dangling > 0 {
            debug!("{} known maps reference unlisted instance types", dangling);
        }

        tables
    }

    /// Name of an instance type code
    pub fn instance_type_name(&self, code: InstanceTypeCode) -> Result<&'static str, LookupError> {
        self.instance_types
            .get(&code)
            .copied()
            .ok_or_else(|| LookupError::not_found(Table::InstanceTypes, code))
    }

    /// Name of an instance type code, or [`UNKNOWN_TYPE`] if it is not listed
    pub fn instance_type_name_or_unknown(&self, code: InstanceTypeCode) -> &'static str {
        self.instance_types.get(&code).copied().unwrap_or(UNKNOWN_TYPE)
    }

    /// Code of an instance type name
    pub fn instance_type_code(&self, name: &str) -> Result<InstanceTypeCode, LookupError> {
        self.instance_type_codes
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::not_found(Table::InstanceTypes, name))
    }

    /// Whether a code denotes one of the string representations
    pub fn is_string_type(&self, code: InstanceTypeCode) -> bool {
        code < FIRST_NONSTRING_TYPE
    }

    /// Known map at an exact offset within a heap space
    pub fn known_map_for(&self, space: &str, offset: SpaceOffset) -> Result<KnownMap, LookupError> {
        self.known_maps
            .get(space)
            .and_then(|by_offset| by_offset.get(&offset))
            .copied()
            .ok_or_else(|| {
                LookupError::not_found(
                    Table::KnownMaps,
                    format_args!("({}, 0x{:05x})", space, offset),
                )
            })
    }

    /// Known object at an exact offset within a heap space
    pub fn known_object_for(
        &self,
        space: &str,
        offset: SpaceOffset,
    ) -> Result<&'static str, LookupError> {
        self.known_objects
            .get(space)
            .and_then(|by_offset| by_offset.get(&offset))
            .copied()
            .ok_or_else(|| {
                LookupError::not_found(
                    Table::KnownObjects,
                    format_args!("({}, 0x{:05x})", space, offset),
                )
            })
    }

    /// Heap space whose first page has the given address prefix
    pub fn page_base(&self, prefix: PagePrefix) -> Result<&'static str, LookupError> {
        self.page_spaces.get(&prefix).copied().ok_or_else(|| {
            LookupError::not_found(Table::HeapFirstPages, format_args!("0x{:08x}", prefix))
        })
    }

    /// First page address prefix of a heap space
    pub fn space_first_page(&self, space: &str) -> Result<PagePrefix, LookupError> {
        self.space_pages
            .get(space)
            .copied()
            .ok_or_else(|| LookupError::not_found(Table::HeapFirstPages, space))
    }

    /// Frame marker at a position in the sequence
    ///
    /// Takes a signed ordinal because markers are read raw out of stack slots.
    pub fn frame_marker_name(&self, ordinal: i64) -> Result<&'static str, LookupError> {
        let markers = self.source.frame_markers;
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| markers.get(index))
            .copied()
            .ok_or_else(|| {
                let error = LookupError::IndexOutOfRange {
                    index: ordinal,
                    len: markers.len(),
                };
                log::trace!("{}", error);
                error
            })
    }

    /// Frame marker at a position, or [`UNKNOWN_FRAME`] outside the sequence
    pub fn frame_marker_name_or_unknown(&self, ordinal: i64) -> &'static str {
        self.frame_marker_name(ordinal).unwrap_or(UNKNOWN_FRAME)
    }

    /// Position of a frame marker name (first occurrence)
    pub fn frame_marker_ordinal(&self, name: &str) -> Result<usize, LookupError> {
        self.frame_ordinals
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::not_found(Table::FrameMarkers, name))
    }

    /// The frame marker sequence in ordinal order
    pub fn frame_markers(&self) -> &'static [&'static str] {
        self.source.frame_markers
    }

    /// Instance types in generated order
    pub fn instance_types(&self) -> impl Iterator<Item = (InstanceTypeCode, &'static str)> {
        let instance_types = self.source.instance_types;
        instance_types.iter().copied()
    }

    /// Known maps in generated order
    pub fn known_maps(&self) -> impl Iterator<Item = (&'static str, SpaceOffset, KnownMap)> {
        let known_maps = self.source.known_maps;
        known_maps
            .iter()
            .map(|&((space, offset), map)| (space, offset, KnownMap::from(map)))
    }

    /// Known objects in generated order
    pub fn known_objects(&self) -> impl Iterator<Item = (&'static str, SpaceOffset, &'static str)> {
        let known_objects = self.source.known_objects;
        known_objects
            .iter()
            .map(|&((space, offset), name)| (space, offset, name))
    }

    /// First page prefixes in generated order
    pub fn heap_first_pages(&self) -> impl Iterator<Item = (PagePrefix, &'static str)> {
        let heap_first_pages = self.source.heap_first_pages;
        heap_first_pages.iter().copied()
    }

    /// Known maps whose instance type is missing from the instance type table
    pub fn dangling_map_types(
        &self,
    ) -> impl Iterator<Item = (&'static str, SpaceOffset, KnownMap)> + '_ {
        self.known_maps()
            .filter(|(_, _, map)| !self.instance_types.contains_key(&map.instance_type))
    }

    /// Number of distinct entries in each table
    pub fn stats(&self) -> TableStats {
        TableStats {
            instance_types: self.instance_types.len(),
            known_maps: self.known_maps.values().map(|m| m.len()).sum(),
            known_objects: self.known_objects.values().map(|m| m.len()).sum(),
            heap_first_pages: self.page_spaces.len(),
            frame_markers: self.source.frame_markers.len(),
        }
    }
}

impl Default for ConstantTables {
    fn default() -> Self {
        Self::build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DUPLICATED_TYPES: &[(InstanceTypeCode, &str)] =
        &[(1, "FIRST"), (1, "SECOND"), (2, "OTHER")];
    static DANGLING_MAPS: &[((&str, SpaceOffset), (InstanceTypeCode, &str))] = &[
        (("old_space", 0x10), (2, "ListedMap")),
        (("old_space", 0x20), (999, "UnlistedMap")),
        (("old_space", 0x20), (2, "ShadowedMap")),
    ];
    static MARKERS: &[&str] = &["A", "B", "A"];

    fn custom_source() -> TableSource {
        TableSource {
            instance_types: DUPLICATED_TYPES,
            known_maps: DANGLING_MAPS,
            known_objects: &[],
            heap_first_pages: &[(0x4_0000, "old_space")],
            frame_markers: MARKERS,
        }
    }

    #[test]
    fn test_duplicate_keys_keep_first_entry() {
        let tables = ConstantTables::from_source(custom_source());
        assert_eq!(tables.instance_type_name(1), Ok("FIRST"));
        assert_eq!(
            tables.known_map_for("old_space", 0x20),
            Ok(KnownMap::new(999, "UnlistedMap"))
        );
        assert_eq!(tables.stats().instance_types, 2);
        assert_eq!(tables.stats().known_maps, 2);
    }

    #[test]
    fn test_dangling_types_are_reported_not_rejected() {
        let tables = ConstantTables::from_source(custom_source());
        let dangling: Vec<_> = tables.dangling_map_types().map(|(_, _, map)| map.name).collect();
        assert_eq!(dangling, vec!["UnlistedMap"]);
        assert_eq!(tables.instance_type_name_or_unknown(999), UNKNOWN_TYPE);
    }

    #[test]
    fn test_frame_markers_keep_repeats_in_place() {
        let tables = ConstantTables::from_source(custom_source());
        assert_eq!(tables.frame_markers(), &["A", "B", "A"]);
        assert_eq!(tables.frame_marker_name(2), Ok("A"));
        assert_eq!(tables.frame_marker_ordinal("A"), Ok(0));
    }

    #[test]
    fn test_empty_space_index_misses() {
        let tables = ConstantTables::from_source(custom_source());
        let err = tables.known_object_for("old_space", 0x10).unwrap_err();
        assert_eq!(err.table(), Table::KnownObjects);
        assert!(tables.known_map_for("new_space", 0x10).is_err());
    }
}
