//! Lookup error types
//!
//! This module defines [`LookupError`], the only failure a table query can
//! produce: the key or ordinal is not present. Nothing inside the crate
//! recovers from it. Callers decide whether a miss is fatal or should be
//! replaced by one of the `UNKNOWN_*` labels in [`crate::constants`].

use std::fmt;
use thiserror::Error;

/// The table a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    InstanceTypes,
    KnownMaps,
    KnownObjects,
    HeapFirstPages,
    FrameMarkers,
}

impl Table {
    pub fn as_str(self) -> &'static str {
        match self {
            Table::InstanceTypes => "instance types",
            Table::KnownMaps => "known maps",
            Table::KnownObjects => "known objects",
            Table::HeapFirstPages => "heap first pages",
            Table::FrameMarkers => "frame markers",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lookup miss
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The key is not present in a keyed table
    #[error("{key} not found in {table} table")]
    NotFound { table: Table, key: String },

    /// The ordinal is negative or past the end of the frame marker sequence
    #[error("frame marker ordinal {index} out of range (0..{len})")]
    IndexOutOfRange { index: i64, len: usize },
}

impl LookupError {
    pub(crate) fn not_found(table: Table, key: impl fmt::Display) -> Self {
        let error = LookupError::NotFound {
            table,
            key: key.to_string(),
        };
        log::trace!("{}", error);
        error
    }

    /// The table the miss happened in
    pub fn table(&self) -> Table {
        match self {
            LookupError::NotFound { table, .. } => *table,
            LookupError::IndexOutOfRange { .. } => Table::FrameMarkers,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_table_and_key() {
        let err = LookupError::NotFound {
            table: Table::KnownMaps,
            key: "(old_space, 0x1)".to_string(),
        };
        assert_eq!(err.to_string(), "(old_space, 0x1) not found in known maps table");

        let err = LookupError::IndexOutOfRange { index: -1, len: 26 };
        assert_eq!(
            err.to_string(),
            "frame marker ordinal -1 out of range (0..26)"
        );
        assert_eq!(err.table(), Table::FrameMarkers);
        assert!(!err.is_not_found());
    }
}
