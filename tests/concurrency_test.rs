// Concurrent readers against the shared tables

use heapconst::data::{FRAME_MARKERS, KNOWN_MAPS};
use heapconst::{classify_address, tables, KnownMap};
use rayon::prelude::*;

#[test]
fn test_parallel_readers_see_identical_tables() {
    KNOWN_MAPS
        .par_iter()
        .for_each(|&((space, offset), (code, name))| {
            let tables = tables();
            assert_eq!(
                tables.known_map_for(space, offset),
                Ok(KnownMap::new(code, name))
            );
            let first_page = tables.space_first_page(space).unwrap();
            let resolved = classify_address(tables, (first_page + offset) as u64).unwrap();
            assert_eq!(resolved.entry.name(), name);
        });
}

#[test]
fn test_parallel_first_access() {
    let names: Vec<_> = (0..FRAME_MARKERS.len() as i64)
        .into_par_iter()
        .map(|ordinal| tables().frame_marker_name(ordinal).unwrap())
        .collect();
    assert_eq!(names, FRAME_MARKERS);
}
