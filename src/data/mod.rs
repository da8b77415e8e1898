//! Generated heap constant literals
//!
//! These tables are emitted by V8's `mkgrokdump` from a specific engine build
//! and must not be edited by hand. Every value is matched bit-for-bit by dump
//! readers, so regenerate the whole set together when the engine changes.
//!
//! - [`instance_types`]: instance type code → name
//! - [`known_maps`]: `(space, offset)` → `(instance type, map name)`
//! - [`known_objects`]: `(space, offset)` → object name
//! - [`first_pages`]: first page address prefix → space name
//! - [`frame_markers`]: ordered frame marker names
//!
//! The slices keep the generated order. [`crate::store`] indexes them.

pub mod first_pages;
pub mod frame_markers;
pub mod instance_types;
pub mod known_maps;
pub mod known_objects;

pub use first_pages::HEAP_FIRST_PAGES;
pub use frame_markers::FRAME_MARKERS;
pub use instance_types::INSTANCE_TYPES;
pub use known_maps::KNOWN_MAPS;
pub use known_objects::KNOWN_OBJECTS;

/// The tables were generated from a shipping (release) build.
pub const SHIPPING_BUILD: bool = true;
