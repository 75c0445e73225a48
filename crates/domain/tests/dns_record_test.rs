use rrdns_domain::{AddressFamily, RecordType};

#[test]
fn test_record_type_numeric_round_trip_for_known_types() {
    for rt in [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CNAME,
        RecordType::MX,
        RecordType::TXT,
        RecordType::AXFR,
        RecordType::IXFR,
    ] {
        assert_eq!(RecordType::from_u16(rt.to_u16()), rt);
    }
}

#[test]
fn test_record_type_unknown_code_is_preserved() {
    let rt = RecordType::from_u16(65);
    assert_eq!(rt, RecordType::Unknown(65));
    assert_eq!(rt.to_u16(), 65);
    assert_eq!(rt.to_string(), "TYPE65");
}

#[test]
fn test_record_type_zone_transfer_detection() {
    assert!(RecordType::AXFR.is_zone_transfer());
    assert!(RecordType::IXFR.is_zone_transfer());
    assert!(!RecordType::A.is_zone_transfer());
}

#[test]
fn test_record_type_parse_is_case_insensitive() {
    assert_eq!("aaaa".parse::<RecordType>().unwrap(), RecordType::AAAA);
    assert!("BOGUS".parse::<RecordType>().is_err());
}

#[test]
fn test_family_for_query_type() {
    assert_eq!(AddressFamily::for_query_type(RecordType::A), AddressFamily::A);
    assert_eq!(
        AddressFamily::for_query_type(RecordType::AAAA),
        AddressFamily::AAAA
    );
    assert_eq!(
        AddressFamily::for_query_type(RecordType::MX),
        AddressFamily::A
    );
}

#[test]
fn test_address_family_of_record_type() {
    assert_eq!(RecordType::A.address_family(), Some(AddressFamily::A));
    assert_eq!(RecordType::AAAA.address_family(), Some(AddressFamily::AAAA));
    assert_eq!(RecordType::CNAME.address_family(), None);
}
