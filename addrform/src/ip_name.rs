//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::IpAddr;

use derive_new::new;
use enum_as_inner::EnumAsInner;
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, ParseResult};
use crate::ip::{AddressFamily, AddressFamilyExt};

// Address portion of a compound name: a plain address or a CIDR prefix.
//
// A string is parsed as a prefix when and only when it contains a `/`,
// so "10.0.0.1" and "10.0.0.1/32" are distinct values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(EnumAsInner)]
#[derive(Deserialize, Serialize)]
pub enum IpNameAddr {
    Address(IpAddr),
    Prefix(IpNetwork),
}

// Compound name combining an address or prefix with the DNS zone it is
// recorded under. The zone keeps its configured spelling.
#[derive(Clone, Debug, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct IpName {
    pub addr: IpNameAddr,
    pub zone: String,
}

// ===== impl IpNameAddr =====

impl AddressFamilyExt for IpNameAddr {
    fn address_family(&self) -> AddressFamily {
        match self {
            IpNameAddr::Address(addr) => addr.address_family(),
            IpNameAddr::Prefix(prefix) => prefix.address_family(),
        }
    }
}

impl std::fmt::Display for IpNameAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpNameAddr::Address(addr) => addr.fmt(f),
            IpNameAddr::Prefix(prefix) => prefix.fmt(f),
        }
    }
}

// ===== impl IpName =====

impl IpName {
    pub fn parse(
        s: &str,
        family: Option<AddressFamily>,
    ) -> ParseResult<Self> {
        let (addr, zone) = split(s, family)?;
        let addr = parse_addr(addr, family)?;
        Ok(IpName::new(addr, zone.to_owned()))
    }
}

impl std::fmt::Display for IpName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.addr, self.zone)
    }
}

// ===== global functions =====

// Splits a compound name into its address and zone parts.
//
// The zone may itself contain dots, so the cut is made at the leftmost
// dot whose left side is a valid address or prefix of the requested
// family. IPv6 text contains no dots, so under an IPv6 constraint the
// first dot is the cut; the left side is vetted by the caller's
// follow-up parse.
pub fn split(
    s: &str,
    family: Option<AddressFamily>,
) -> ParseResult<(&str, &str)> {
    let s = s.trim();

    if family == Some(AddressFamily::Ipv6) {
        let dot =
            s.find('.').ok_or_else(|| Error::SplitNotFound(s.to_owned()))?;
        return Ok((&s[..dot], &s[dot + 1..]));
    }

    for (dot, _) in s.match_indices('.') {
        let addr = &s[..dot];
        if parse_addr(addr, family).is_ok() {
            return Ok((addr, &s[dot + 1..]));
        }
    }
    Err(Error::SplitNotFound(s.to_owned()))
}

// Parses the address part of a compound name and checks its family.
pub fn parse_addr(
    s: &str,
    family: Option<AddressFamily>,
) -> ParseResult<IpNameAddr> {
    let addr = if s.contains('/') {
        let prefix = s
            .parse::<IpNetwork>()
            .map_err(|_| Error::InvalidAddress(s.to_owned()))?;
        IpNameAddr::Prefix(prefix)
    } else {
        let addr = s
            .parse::<IpAddr>()
            .map_err(|_| Error::InvalidAddress(s.to_owned()))?;
        IpNameAddr::Address(addr)
    };
    if let Some(family) = family {
        if addr.address_family() != family {
            return Err(Error::WrongAddressFamily(s.to_owned(), family));
        }
    }
    Ok(addr)
}

// Checks that `s` is a well-formed compound name of the requested family.
// The error distinguishes a missing zone cut, an unparsable address part
// and a family mismatch.
pub fn validate(s: &str, family: Option<AddressFamily>) -> ParseResult<()> {
    let (addr, _) = split(s, family)?;
    parse_addr(addr, family).map(|_| ())
}

// Compares two raw compound names by parsed value: address parts compare
// by address or prefix value, zones compare literally (case included).
// Blank and parse-failure handling matches the MAC address contract.
pub fn semantically_equal(
    old: &str,
    new: &str,
    family: Option<AddressFamily>,
) -> bool {
    let (old, new) = (old.trim(), new.trim());
    if old.is_empty() || new.is_empty() {
        return old.is_empty() && new.is_empty();
    }
    match (IpName::parse(old, family), IpName::parse(new, family)) {
        (Ok(old), Ok(new)) => old == new,
        (Err(error), _) | (_, Err(error)) => {
            debug!(%error, input = error.input(), "comparison parse failure");
            false
        }
    }
}
