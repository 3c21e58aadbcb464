//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//

use addrform::error::Error;
use addrform::ip::AddressFamily;
use addrform::kind::AddrKind;
use addrform::value::Value;

const KINDS: [AddrKind; 5] = [
    AddrKind::Mac,
    AddrKind::Duid,
    AddrKind::IpName,
    AddrKind::Ipv4Name,
    AddrKind::Ipv6Name,
];

#[test]
fn test_names_round_trip() {
    for kind in KINDS {
        assert_eq!(AddrKind::from_name(kind.name()), Some(kind));
        assert_eq!(kind.to_string(), kind.name());
    }
    assert_eq!(AddrKind::from_name("bogus"), None);
}

#[test]
fn test_family() {
    assert_eq!(AddrKind::Mac.family(), None);
    assert_eq!(AddrKind::Duid.family(), None);
    assert_eq!(AddrKind::IpName.family(), None);
    assert_eq!(AddrKind::Ipv4Name.family(), Some(AddressFamily::Ipv4));
    assert_eq!(AddrKind::Ipv6Name.family(), Some(AddressFamily::Ipv6));
}

#[test]
fn test_normalize_dispatch() {
    assert_eq!(
        AddrKind::Mac.normalize("AA-BB-CC-DD-EE-FF").as_deref(),
        Ok("aa:bb:cc:dd:ee:ff")
    );
    assert_eq!(
        AddrKind::Duid.normalize("0:1:2:3").as_deref(),
        Ok("00:01:02:03")
    );
    // The address part is canonicalized, the zone spelling is kept.
    assert_eq!(
        AddrKind::Ipv6Name.normalize("2001:0db8::0001.Zone").as_deref(),
        Ok("2001:db8::1.Zone")
    );
    assert_eq!(
        AddrKind::Ipv4Name.normalize("10.0.0.0/24.zone1").as_deref(),
        Ok("10.0.0.0/24.zone1")
    );
    assert_eq!(
        AddrKind::IpName.normalize("192.168.1.1.example.com").as_deref(),
        Ok("192.168.1.1.example.com")
    );
}

#[test]
fn test_validate_dispatch() {
    assert_eq!(AddrKind::Mac.validate("aa:bb:cc:dd:ee:ff"), Ok(()));
    assert_eq!(
        AddrKind::Mac.validate("bogus"),
        Err(Error::InvalidMacAddr("bogus".to_owned()))
    );
    assert_eq!(AddrKind::Duid.validate("0001:0002"), Ok(()));
    assert_eq!(
        AddrKind::Ipv4Name.validate("2001:db8::1.zone"),
        Err(Error::SplitNotFound("2001:db8::1.zone".to_owned()))
    );
    assert_eq!(AddrKind::Ipv6Name.validate("2001:db8::1.zone"), Ok(()));
}

#[test]
fn test_equality_dispatch() {
    assert!(
        AddrKind::Mac.semantically_equal("aa:bb:cc:dd:ee:ff", "AABB.CCDD.EEFF")
    );
    assert!(AddrKind::Duid.semantically_equal("0001:0002", "00.01.00.02"));
    assert!(AddrKind::Ipv6Name.semantically_equal(
        "2001:db8::1.zone",
        "2001:0db8:0000:0000:0000:0000:0000:0001.zone"
    ));
    assert!(
        !AddrKind::Ipv4Name.semantically_equal(
            "10.0.0.1.zoneA",
            "10.0.0.1.zoneB"
        )
    );
}

// Every kind treats a pair of blank strings as equal and a lone blank as
// unequal.
#[test]
fn test_equality_blank() {
    for kind in KINDS {
        assert!(kind.semantically_equal("", ""), "kind: {kind}");
        assert!(kind.semantically_equal("  ", ""), "kind: {kind}");
        assert!(
            !kind.semantically_equal("", "aa:bb:cc:dd:ee:ff"),
            "kind: {kind}"
        );
    }
}

#[test]
fn test_value_unknown() {
    // The unknown sentinel is propagated, never normalized.
    assert!(Value::Unknown.semantically_equal(&Value::Unknown, AddrKind::Mac));
    assert!(!Value::Unknown.semantically_equal(&Value::Null, AddrKind::Mac));
    assert!(
        !Value::Text("aa:bb:cc:dd:ee:ff".to_owned())
            .semantically_equal(&Value::Unknown, AddrKind::Mac)
    );
}

#[test]
fn test_value_absent() {
    assert!(Value::Null.semantically_equal(&Value::Null, AddrKind::Duid));
    assert!(
        Value::Null
            .semantically_equal(&Value::Text("  ".to_owned()), AddrKind::Duid)
    );
    assert!(
        !Value::Null.semantically_equal(
            &Value::Text("0001:0002".to_owned()),
            AddrKind::Duid
        )
    );
}

#[test]
fn test_value_text() {
    let old = Value::Text("AABB.CCDD.EEFF".to_owned());
    let new = Value::Text("aa:bb:cc:dd:ee:ff".to_owned());
    assert!(old.semantically_equal(&new, AddrKind::Mac));

    // "1.2.3" pads per MAC group rules to 00:01:00:02:00:03, but as a
    // DUID it is the three bytes 01:02:03.
    let old = Value::Text("1.2.3".to_owned());
    let new = Value::Text("000100020003".to_owned());
    assert!(old.semantically_equal(&new, AddrKind::Mac));
    assert!(!old.semantically_equal(&new, AddrKind::Duid));
}

#[test]
fn test_serde_round_trip() {
    let value = Value::Text("aa:bb:cc:dd:ee:ff".to_owned());
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), value);

    let kind = AddrKind::Ipv6Name;
    let json = serde_json::to_string(&kind).unwrap();
    assert_eq!(serde_json::from_str::<AddrKind>(&json).unwrap(), kind);
}
