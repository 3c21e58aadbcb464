//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, ParseResult};
use crate::hexstr;

// 48-bit MAC address (IEEE EUI-48 format).
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub struct MacAddr([u8; 6]);

// ===== impl MacAddr =====

impl MacAddr {
    pub const LENGTH: usize = 6;
    pub const BROADCAST: Self = Self([0xff; 6]);

    pub fn as_bytes(&self) -> [u8; 6] {
        self.0
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddr(bytes)
    }
}

impl std::fmt::Display for MacAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5],
        ))
    }
}

impl FromStr for MacAddr {
    type Err = Error;

    /// Parse a MAC address from a string.
    ///
    /// Accepts formats:
    /// - Flat: "aabbccddeeff", in upper or lower case
    /// - Separated into groups by any mix of `.`, `:`, `;`, `-` or
    ///   whitespace: "aa:bb:cc:dd:ee:ff", "aa-bb-cc-dd-ee-ff", "a:b:c:d:e:f"
    /// - Dot-grouped triplets ("Cisco"): "aabb.ccdd.eeff", "1.2.3"
    /// - Two hyphen-separated groups: "aabbcc-ddeeff", "abc-def"
    ///
    /// Notations are tried in that order; groups shorter than their
    /// notation's width are zero-extended on the left.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || Error::InvalidMacAddr(s.to_owned());

        let tokens = hexstr::tokens(s);
        if tokens.iter().any(|token| token.is_empty()) {
            return Err(err());
        }
        let flat: String = tokens.concat();
        if flat.len() > 12 || !hexstr::is_hex(&flat) {
            return Err(err());
        }

        // Twelve digits make a full address no matter how they were
        // separated.
        if flat.len() == 12 {
            return parse_digit_pairs(&flat).ok_or_else(err);
        }

        // Dot-grouped notation: three groups of up to four digits.
        let groups: Vec<_> = s.split('.').collect();
        if groups.len() == 3
            && groups.iter().all(|g| hexstr::is_hex(g) && g.len() <= 4)
        {
            let padded: String =
                groups.iter().map(|g| format!("{g:0>4}")).collect();
            return parse_digit_pairs(&padded).ok_or_else(err);
        }

        // Hyphen-grouped notation: two groups of up to six digits.
        let groups: Vec<_> = s.split('-').collect();
        if groups.len() == 2
            && groups.iter().all(|g| hexstr::is_hex(g) && g.len() <= 6)
        {
            let padded: String =
                groups.iter().map(|g| format!("{g:0>6}")).collect();
            return parse_digit_pairs(&padded).ok_or_else(err);
        }

        // Standard notation with under-length groups: six tokens of one
        // or two digits each.
        if tokens.len() == 6 && tokens.iter().all(|token| token.len() <= 2) {
            let mut bytes = [0u8; 6];
            for (byte, token) in bytes.iter_mut().zip(&tokens) {
                *byte =
                    u8::from_str_radix(token, 16).map_err(|_| err())?;
            }
            return Ok(MacAddr(bytes));
        }

        Err(err())
    }
}

// ===== global functions =====

// Converts twelve hex digits into an address, two digits per byte.
fn parse_digit_pairs(digits: &str) -> Option<MacAddr> {
    let mut bytes = [0u8; 6];
    for (byte, pair) in bytes.iter_mut().zip(digits.as_bytes().chunks(2)) {
        let pair = std::str::from_utf8(pair).ok()?;
        *byte = u8::from_str_radix(pair, 16).ok()?;
    }
    Some(MacAddr(bytes))
}

// Parses `s` and re-renders it in canonical form: lowercase hex digit
// pairs separated by colons.
pub fn normalize(s: &str) -> ParseResult<String> {
    s.parse::<MacAddr>().map(|mac| mac.to_string())
}

// Compares two raw MAC address strings by parsed value. Two blank strings
// are equal, a blank and a non-blank string are not, and a string that
// fails to parse compares unequal to everything.
pub fn semantically_equal(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return a.is_empty() && b.is_empty();
    }
    match (a.parse::<MacAddr>(), b.parse::<MacAddr>()) {
        (Ok(a), Ok(b)) => a == b,
        (Err(error), _) | (_, Err(error)) => {
            debug!(%error, input = error.input(), "comparison parse failure");
            false
        }
    }
}
