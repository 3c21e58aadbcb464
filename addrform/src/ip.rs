//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::IpAddr;

use arbitrary::Arbitrary;
use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};

// IP address family.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
#[derive(Arbitrary)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

// Extension methods for types with an intrinsic address family.
pub trait AddressFamilyExt {
    // Returns the address family of the value.
    fn address_family(&self) -> AddressFamily;
}

// ===== impl AddressFamily =====

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}

// ===== impl IpAddr =====

impl AddressFamilyExt for IpAddr {
    fn address_family(&self) -> AddressFamily {
        match self {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }
}

// ===== impl IpNetwork =====

impl AddressFamilyExt for IpNetwork {
    fn address_family(&self) -> AddressFamily {
        match self {
            IpNetwork::V4(_) => AddressFamily::Ipv4,
            IpNetwork::V6(_) => AddressFamily::Ipv6,
        }
    }
}
