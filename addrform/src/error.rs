//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ip::AddressFamily;

// Type aliases.
pub type ParseResult<T> = Result<T, Error>;

// Address parsing and validation errors.
//
// Each variant retains the offending input so callers can build their own
// diagnostics around it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum Error {
    InvalidMacAddr(String),
    InvalidDuid(String),
    InvalidAddress(String),
    SplitNotFound(String),
    WrongAddressFamily(String, AddressFamily),
}

// ===== impl Error =====

impl Error {
    pub fn log(&self) {
        match self {
            Error::InvalidMacAddr(input)
            | Error::InvalidDuid(input)
            | Error::InvalidAddress(input)
            | Error::SplitNotFound(input) => {
                warn!(%input, "{}", self);
            }
            Error::WrongAddressFamily(input, family) => {
                warn!(%input, expected = %family, "{}", self);
            }
        }
    }

    // Returns the input that failed to parse or validate.
    pub fn input(&self) -> &str {
        match self {
            Error::InvalidMacAddr(input)
            | Error::InvalidDuid(input)
            | Error::InvalidAddress(input)
            | Error::SplitNotFound(input)
            | Error::WrongAddressFamily(input, _) => input,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidMacAddr(..) => {
                write!(f, "invalid MAC address format")
            }
            Error::InvalidDuid(..) => {
                write!(f, "invalid DUID format")
            }
            Error::InvalidAddress(..) => {
                write!(f, "invalid IP address or prefix")
            }
            Error::SplitNotFound(..) => {
                write!(f, "no address and zone separation found")
            }
            Error::WrongAddressFamily(..) => {
                write!(f, "address family mismatch")
            }
        }
    }
}

impl std::error::Error for Error {}
