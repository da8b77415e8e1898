// Address composition tests: (space, offset) pairs against raw addresses

use heapconst::address::split_address;
use heapconst::{
    absolute_address, classify_address, describe_address, tables, KnownEntry, KnownMap, LookupError,
};

#[test]
fn test_meta_map_round_trip() {
    let tables = tables();

    let map = tables.known_map_for("read_only_space", 0x02141).unwrap();
    assert_eq!(map, KnownMap::new(247, "MetaMap"));
    assert_eq!(tables.page_base(0x0000_0000), Ok("read_only_space"));

    let absolute = absolute_address(tables, "read_only_space", 0x02141).unwrap();
    assert_eq!(absolute, 0x0000_0000 + 0x02141);

    let resolved = classify_address(tables, absolute as u64).unwrap();
    assert_eq!(resolved.space, "read_only_space");
    assert_eq!(resolved.offset, 0x02141);
    assert_eq!(resolved.absolute, absolute);
    assert_eq!(resolved.entry, KnownEntry::Map(map));
    assert_eq!(resolved.entry.name(), "MetaMap");
    assert_eq!(tables.instance_type_name(map.instance_type), Ok("MAP_TYPE"));
}

#[test]
fn test_old_space_addresses() {
    let tables = tables();
    let absolute = absolute_address(tables, "old_space", 0x043d5).unwrap();
    assert_eq!(absolute, 0x000c_43d5);

    // Map wins over the object recorded at the same offset
    let resolved = classify_address(tables, absolute as u64).unwrap();
    assert_eq!(
        resolved.entry,
        KnownEntry::Map(KnownMap::new(2120, "JSMessageObjectMap"))
    );

    let resolved = classify_address(tables, 0x000c_54dd).unwrap();
    assert_eq!(resolved.entry, KnownEntry::Object("ProxyRevokeSharedFun"));
    assert_eq!(resolved.to_string(), "old_space+0x54dd: ProxyRevokeSharedFun");
}

#[test]
fn test_every_known_map_classifies_back() {
    let tables = tables();
    for (space, offset, map) in tables.known_maps() {
        let absolute = absolute_address(tables, space, offset).unwrap();
        let resolved = classify_address(tables, absolute as u64).unwrap();
        assert_eq!(resolved.space, space);
        assert_eq!(resolved.offset, offset);
        assert_eq!(resolved.entry, KnownEntry::Map(map));
    }
}

#[test]
fn test_upper_address_bits_are_ignored() {
    let tables = tables();
    let resolved = classify_address(tables, 0x0000_2a1b_0000_2141).unwrap();
    assert_eq!(resolved.entry.name(), "MetaMap");
    assert_eq!(split_address(0x0000_2a1b_000c_43a5), (0x000c_0000, 0x43a5));
}

#[test]
fn test_unresolvable_addresses() {
    let tables = tables();
    // Page no space starts on
    let err = classify_address(tables, 0x0004_2141).unwrap_err();
    assert!(err.is_not_found());
    // Known page, unknown offset
    assert!(matches!(
        classify_address(tables, 0x0000_2142),
        Err(LookupError::NotFound { .. })
    ));
    assert!(absolute_address(tables, "code_space", 0x10).is_err());
}

#[test]
fn test_describe_address() {
    let tables = tables();
    assert_eq!(
        describe_address(tables, 0x2141),
        "read_only_space+0x2141: MetaMap (247 MAP_TYPE)"
    );
    assert_eq!(
        describe_address(tables, 0x21e1),
        "read_only_space+0x21e1: EmptyWeakArrayList"
    );
    assert_eq!(describe_address(tables, 0x0004_0000), "0x00040000: UNKNOWN_MAP");
}
