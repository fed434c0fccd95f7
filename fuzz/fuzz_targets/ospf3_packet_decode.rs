//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
#![no_main]

use libfuzzer_sys::fuzz_target;
use ospf3::packet::Packet;

fuzz_target!(|data: &[u8]| {
    let _ = Packet::decode(data);
});
