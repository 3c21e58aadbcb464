//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//

use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, ParseResult};
use crate::hexstr;

// DHCP Unique Identifier (RFC 8415), 2 to 130 bytes.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub struct Duid(Vec<u8>);

// ===== impl Duid =====

impl Duid {
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 130;

    pub fn new(bytes: Vec<u8>) -> ParseResult<Self> {
        if bytes.len() < Self::MIN_LENGTH || bytes.len() > Self::MAX_LENGTH {
            let hex = bytes.iter().map(|byte| format!("{byte:02x}")).join("");
            return Err(Error::InvalidDuid(hex));
        }
        Ok(Duid(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Duid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            &self.0.iter().map(|byte| format!("{byte:02x}")).join(":"),
        )
    }
}

impl FromStr for Duid {
    type Err = Error;

    /// Parse a DUID from a string of hex digits, optionally separated into
    /// groups by any mix of `.`, `:`, `;`, `-` or whitespace. A single-digit
    /// group stands for a zero-extended pair, so "0:1:2:3" and "00010203"
    /// are the same identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || Error::InvalidDuid(s.to_owned());

        let tokens = hexstr::tokens(s);
        if tokens.iter().any(|token| token.is_empty()) {
            return Err(err());
        }
        let flat: String = tokens
            .iter()
            .map(|token| {
                if token.len() == 1 {
                    format!("0{token}")
                } else {
                    (*token).to_owned()
                }
            })
            .collect();
        if !hexstr::is_hex(&flat)
            || flat.len() % 2 != 0
            || flat.len() < 2 * Self::MIN_LENGTH
            || flat.len() > 2 * Self::MAX_LENGTH
        {
            return Err(err());
        }

        let mut bytes = Vec::with_capacity(flat.len() / 2);
        for pair in flat.as_bytes().chunks(2) {
            let pair = std::str::from_utf8(pair).map_err(|_| err())?;
            bytes.push(u8::from_str_radix(pair, 16).map_err(|_| err())?);
        }
        Ok(Duid(bytes))
    }
}

// ===== global functions =====

// Parses `s` and re-renders it in canonical form: lowercase hex digit
// pairs separated by colons.
pub fn normalize(s: &str) -> ParseResult<String> {
    s.parse::<Duid>().map(|duid| duid.to_string())
}

// Compares two raw DUID strings by parsed value, with the same blank and
// parse-failure handling as for MAC addresses.
pub fn semantically_equal(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return a.is_empty() && b.is_empty();
    }
    match (a.parse::<Duid>(), b.parse::<Duid>()) {
        (Ok(a), Ok(b)) => a == b,
        (Err(error), _) | (_, Err(error)) => {
            debug!(%error, input = error.input(), "comparison parse failure");
            false
        }
    }
}
