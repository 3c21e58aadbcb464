//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//

// Group separator characters shared by the MAC address and DUID notations.
pub(crate) fn is_separator(c: char) -> bool {
    matches!(c, '.' | ':' | ';' | '-') || c.is_whitespace()
}

// Splits a string at every separator occurrence. Adjacent, leading or
// trailing separators yield empty tokens, which callers must reject.
pub(crate) fn tokens(s: &str) -> Vec<&str> {
    s.split(is_separator).collect()
}

pub(crate) fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}
