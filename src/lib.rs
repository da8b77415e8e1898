//! # Introduction
//!
//! heapconst carries the constant tables V8's `mkgrokdump` extracts from an
//! engine build, and answers read-only lookups over them. Heap-dump readers use
//! the tables to put names on raw words: instance type codes, the maps and
//! objects at fixed offsets in the read-only and old spaces, and stack frame
//! markers.
//!
//! ## Layout
//!
//! ```text
//! data (generated literals) → store (hash indexes) → address (raw addresses)
//! ```
//!
//! 1. [`data`] — the generated tables, reproduced exactly. Not edited by hand.
//! 2. [`store`] — [`ConstantTables`], built once behind [`tables()`] and
//!    immutable afterwards.
//! 3. [`address`] — converts between `(space, offset)` pairs and absolute
//!    addresses.
//! 4. [`errors`] — [`LookupError`], the lookup-miss error.
//! 5. [`constants`] — page geometry and `UNKNOWN_*` fallback labels.
//!
//! ## Example
//!
//! ```
//! let tables = heapconst::tables();
//! let map = tables.known_map_for("read_only_space", 0x02141).unwrap();
//! assert_eq!((map.instance_type, map.name), (247, "MetaMap"));
//! assert_eq!(tables.page_base(0x0000_0000).unwrap(), "read_only_space");
//! ```
//!
//! The library logs through the [`log`] facade and never installs a logger.

pub mod address;
pub mod constants;
pub mod data;
pub mod errors;
pub mod store;

pub use address::{
    absolute_address, classify_address, describe_address, KnownEntry, ResolvedAddress,
};
pub use errors::{LookupError, Table};
pub use store::{
    tables, ConstantTables, InstanceTypeCode, KnownMap, PagePrefix, SpaceOffset, TableSource,
    TableStats,
};
