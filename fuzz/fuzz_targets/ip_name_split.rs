//
// Copyright (c) The Addrform Contributors
//
// SPDX-License-Identifier: MIT
//
#![no_main]

use addrform::ip::AddressFamily;
use addrform::ip_name;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for family in
        [None, Some(AddressFamily::Ipv4), Some(AddressFamily::Ipv6)]
    {
        let _ = ip_name::split(data, family);
        let _ = ip_name::validate(data, family);
    }
});
