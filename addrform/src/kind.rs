//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::duid::{self, Duid};
use crate::error::ParseResult;
use crate::ip::AddressFamily;
use crate::ip_name::{self, IpName};
use crate::mac_addr::{self, MacAddr};

// Attribute kinds handled by the library.
//
// The set is closed: every kind supports normalization, validation and
// semantic comparison, dispatched by match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[derive(Arbitrary)]
pub enum AddrKind {
    Mac,
    Duid,
    IpName,
    Ipv4Name,
    Ipv6Name,
}

// ===== impl AddrKind =====

impl AddrKind {
    // Family constraint applied by the compound name kinds.
    pub fn family(&self) -> Option<AddressFamily> {
        match self {
            AddrKind::Ipv4Name => Some(AddressFamily::Ipv4),
            AddrKind::Ipv6Name => Some(AddressFamily::Ipv6),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AddrKind::Mac => "mac",
            AddrKind::Duid => "duid",
            AddrKind::IpName => "ip-name",
            AddrKind::Ipv4Name => "ipv4-name",
            AddrKind::Ipv6Name => "ipv6-name",
        }
    }

    pub fn from_name(name: &str) -> Option<AddrKind> {
        match name {
            "mac" => Some(AddrKind::Mac),
            "duid" => Some(AddrKind::Duid),
            "ip-name" => Some(AddrKind::IpName),
            "ipv4-name" => Some(AddrKind::Ipv4Name),
            "ipv6-name" => Some(AddrKind::Ipv6Name),
            _ => None,
        }
    }

    // Re-renders `s` in the kind's canonical text form.
    pub fn normalize(&self, s: &str) -> ParseResult<String> {
        match self {
            AddrKind::Mac => mac_addr::normalize(s),
            AddrKind::Duid => duid::normalize(s),
            AddrKind::IpName | AddrKind::Ipv4Name | AddrKind::Ipv6Name => {
                IpName::parse(s, self.family()).map(|name| name.to_string())
            }
        }
    }

    pub fn validate(&self, s: &str) -> ParseResult<()> {
        match self {
            AddrKind::Mac => s.parse::<MacAddr>().map(|_| ()),
            AddrKind::Duid => s.parse::<Duid>().map(|_| ()),
            AddrKind::IpName | AddrKind::Ipv4Name | AddrKind::Ipv6Name => {
                ip_name::validate(s, self.family())
            }
        }
    }

    pub fn semantically_equal(&self, a: &str, b: &str) -> bool {
        match self {
            AddrKind::Mac => mac_addr::semantically_equal(a, b),
            AddrKind::Duid => duid::semantically_equal(a, b),
            AddrKind::IpName | AddrKind::Ipv4Name | AddrKind::Ipv6Name => {
                ip_name::semantically_equal(a, b, self.family())
            }
        }
    }
}

impl std::fmt::Display for AddrKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
