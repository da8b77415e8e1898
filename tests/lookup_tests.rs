// Lookup tests against the generated constant tables

use heapconst::data::{FRAME_MARKERS, HEAP_FIRST_PAGES, INSTANCE_TYPES, KNOWN_MAPS, KNOWN_OBJECTS};
use heapconst::{tables, ConstantTables, KnownMap, LookupError, Table};

#[test]
fn test_table_sizes() {
    let stats = tables().stats();
    assert_eq!(stats.instance_types, 272);
    assert_eq!(stats.known_maps, 181);
    assert_eq!(stats.known_objects, 109);
    assert_eq!(stats.heap_first_pages, 2);
    assert_eq!(stats.frame_markers, 26);
}

#[test]
fn test_every_instance_type_resolves() {
    let tables = tables();
    for &(code, name) in INSTANCE_TYPES {
        assert_eq!(tables.instance_type_name(code), Ok(name), "code {}", code);
        assert_eq!(tables.instance_type_code(name), Ok(code), "name {}", name);
    }
}

#[test]
fn test_instance_type_samples() {
    let tables = tables();
    assert_eq!(tables.instance_type_name(0), Ok("INTERNALIZED_STRING_TYPE"));
    assert_eq!(tables.instance_type_name(32), Ok("STRING_TYPE"));
    assert_eq!(tables.instance_type_name(247), Ok("MAP_TYPE"));
    assert_eq!(tables.instance_type_name(2154), Ok("WASM_VALUE_OBJECT_TYPE"));
}

#[test]
fn test_missing_instance_type() {
    let tables = tables();
    for code in [1, 3, 127, u16::MAX] {
        let err = tables.instance_type_name(code).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.table(), Table::InstanceTypes);
    }
    assert_eq!(tables.instance_type_name_or_unknown(1), "UNKNOWN_TYPE");
    assert!(tables.instance_type_code("NOT_A_TYPE").is_err());
}

#[test]
fn test_string_type_boundary() {
    let tables = tables();
    assert!(tables.is_string_type(122));
    assert!(!tables.is_string_type(128));
    assert_eq!(tables.instance_type_name(128), Ok("SYMBOL_TYPE"));
}

#[test]
fn test_every_known_map_resolves() {
    let tables = tables();
    for &((space, offset), (code, name)) in KNOWN_MAPS {
        assert_eq!(
            tables.known_map_for(space, offset),
            Ok(KnownMap::new(code, name)),
            "({}, 0x{:05x})",
            space,
            offset
        );
    }
}

#[test]
fn test_known_map_samples() {
    let tables = tables();
    let meta = tables.known_map_for("read_only_space", 0x02141).unwrap();
    assert_eq!(meta.instance_type, 247);
    assert_eq!(meta.name, "MetaMap");

    assert_eq!(
        tables.known_map_for("old_space", 0x043a5),
        Ok(KnownMap::new(2116, "ExternalMap"))
    );
    // Several store handler maps share one instance type
    for (offset, name) in [
        (0x080e5, "StoreHandler1Map"),
        (0x0810d, "StoreHandler2Map"),
        (0x08135, "StoreHandler3Map"),
    ] {
        assert_eq!(
            tables.known_map_for("read_only_space", offset),
            Ok(KnownMap::new(138, name))
        );
    }
}

#[test]
fn test_known_map_requires_exact_match() {
    let tables = tables();
    assert!(tables.known_map_for("read_only_space", 0x02142).is_err());
    assert!(tables.known_map_for("read_only_space", 0x02140).is_err());
    assert!(tables.known_map_for("old_space", 0x02141).is_err());
    let err = tables.known_map_for("new_space", 0x02141).unwrap_err();
    assert_eq!(
        err,
        LookupError::NotFound {
            table: Table::KnownMaps,
            key: "(new_space, 0x02141)".to_string(),
        }
    );
}

#[test]
fn test_every_known_object_resolves() {
    let tables = tables();
    for &((space, offset), name) in KNOWN_OBJECTS {
        assert_eq!(tables.known_object_for(space, offset), Ok(name));
    }
    assert_eq!(
        tables.known_object_for("read_only_space", 0x021e1),
        Ok("EmptyWeakArrayList")
    );
    assert!(tables.known_object_for("read_only_space", 0x02141).is_err());
}

#[test]
fn test_maps_and_objects_stay_separate() {
    let tables = tables();
    // Same offsets recorded in both tables
    assert_eq!(
        tables.known_map_for("old_space", 0x043a5).map(|m| m.name),
        Ok("ExternalMap")
    );
    assert_eq!(tables.known_object_for("old_space", 0x043a5), Ok("ExternalMap"));
    assert_eq!(
        tables.known_map_for("old_space", 0x043d5),
        Ok(KnownMap::new(2120, "JSMessageObjectMap"))
    );
    assert_eq!(
        tables.known_object_for("old_space", 0x043d5),
        Ok("JSMessageObjectMap")
    );
    // An object offset is not a map offset
    assert!(tables.known_map_for("read_only_space", 0x021e1).is_err());
}

#[test]
fn test_page_base() {
    let tables = tables();
    assert_eq!(tables.page_base(0x000c_0000), Ok("old_space"));
    assert_eq!(tables.page_base(0x0000_0000), Ok("read_only_space"));
    for prefix in [0x0004_0000, 0x000c_0001, 0xffff_ffff] {
        let err = tables.page_base(prefix).unwrap_err();
        assert_eq!(err.table(), Table::HeapFirstPages);
    }
    for &(prefix, space) in HEAP_FIRST_PAGES {
        assert_eq!(tables.space_first_page(space), Ok(prefix));
    }
    assert!(tables.space_first_page("new_space").is_err());
}

#[test]
fn test_frame_markers() {
    let tables = tables();
    assert_eq!(tables.frame_marker_name(0), Ok("ENTRY"));
    assert_eq!(tables.frame_marker_name(12), Ok("INTERPRETED"));
    assert_eq!(tables.frame_marker_name(24), Ok("BUILTIN_EXIT"));
    assert_eq!(tables.frame_marker_name(25), Ok("NATIVE"));
    assert_eq!(
        tables.frame_marker_name(26),
        Err(LookupError::IndexOutOfRange { index: 26, len: 26 })
    );
    assert_eq!(
        tables.frame_marker_name(-1),
        Err(LookupError::IndexOutOfRange { index: -1, len: 26 })
    );
    assert!(tables.frame_marker_name(i64::MIN).is_err());
    assert_eq!(tables.frame_marker_name_or_unknown(25), "NATIVE");
    assert_eq!(tables.frame_marker_name_or_unknown(99), "UNKNOWN_FRAME");
}

#[test]
fn test_frame_marker_order_is_preserved() {
    let tables = tables();
    assert_eq!(tables.frame_markers(), FRAME_MARKERS);
    for (ordinal, &name) in FRAME_MARKERS.iter().enumerate() {
        assert_eq!(tables.frame_marker_name(ordinal as i64), Ok(name));
        assert_eq!(tables.frame_marker_ordinal(name), Ok(ordinal));
    }
    assert!(tables.frame_marker_ordinal("OPTIMIZED").is_err());
}

#[test]
fn test_iteration_follows_generated_order() {
    let tables = tables();
    let types: Vec<_> = tables.instance_types().collect();
    assert_eq!(types.first(), Some(&(0, "INTERNALIZED_STRING_TYPE")));
    assert_eq!(types.last(), Some(&(2154, "WASM_VALUE_OBJECT_TYPE")));

    let (space, offset, map) = tables.known_maps().next().unwrap();
    assert_eq!((space, offset, map.name), ("read_only_space", 0x02141, "MetaMap"));
    let (space, offset, name) = tables.known_objects().last().unwrap();
    assert_eq!(
        (space, offset, name),
        ("old_space", 0x05549, "SourceTextModuleExecuteAsyncModuleRejectedSFI")
    );
    let pages: Vec<_> = tables.heap_first_pages().collect();
    assert_eq!(pages, vec![(0x000c_0000, "old_space"), (0, "read_only_space")]);
}

#[test]
fn test_generated_maps_reference_listed_types() {
    assert_eq!(tables().dangling_map_types().count(), 0);
}

#[test]
fn test_lookups_are_idempotent() {
    let shared = tables();
    let owned = ConstantTables::build();
    for _ in 0..3 {
        assert_eq!(shared.instance_type_name(131), Ok("ODDBALL_TYPE"));
        assert_eq!(
            shared.known_map_for("read_only_space", 0x02169),
            owned.known_map_for("read_only_space", 0x02169)
        );
        assert_eq!(shared.frame_marker_name(3), owned.frame_marker_name(3));
    }
    assert_eq!(shared.stats(), owned.stats());
    assert!(std::ptr::eq(shared, tables()));
}
