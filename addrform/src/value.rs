//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//

use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};

use crate::kind::AddrKind;

// Attribute value as seen by the host at plan time.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(EnumAsInner)]
#[derive(Deserialize, Serialize)]
pub enum Value {
    // Not yet resolved by the host.
    Unknown,
    // Absent from the configuration.
    Null,
    // Configured text, possibly malformed.
    Text(String),
}

// ===== impl Value =====

impl Value {
    // Configured text, with Null standing for the empty string.
    fn text(&self) -> &str {
        match self {
            Value::Text(text) => text,
            _ => "",
        }
    }

    // Returns true if the value carries no usable text.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Unknown => false,
            _ => self.text().trim().is_empty(),
        }
    }

    // Compares two plan-time values under the given kind's semantics.
    //
    // The unknown sentinel is propagated, never normalized: two unknowns
    // are equal, an unknown never equals anything else. Null and blank
    // text are the same absent value.
    pub fn semantically_equal(&self, other: &Value, kind: AddrKind) -> bool {
        match (self, other) {
            (Value::Unknown, Value::Unknown) => true,
            (Value::Unknown, _) | (_, Value::Unknown) => false,
            _ => {
                if self.is_absent() || other.is_absent() {
                    return self.is_absent() && other.is_absent();
                }
                kind.semantically_equal(self.text(), other.text())
            }
        }
    }
}
