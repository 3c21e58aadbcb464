//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//
#![no_main]

use addrform::mac_addr::MacAddr;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = data.parse::<MacAddr>();
});
