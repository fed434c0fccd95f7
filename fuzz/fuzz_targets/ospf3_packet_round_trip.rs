//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
#![no_main]

use libfuzzer_sys::fuzz_target;
use ospf3::packet::Packet;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must survive a round trip.
    let Ok(packet1) = Packet::decode(data) else {
        return;
    };
    let bytes1 = packet1.encode().expect("failed to encode");
    let packet2 = Packet::decode(&bytes1).expect("failed to decode again");
    assert_eq!(packet1, packet2);

    // The input may have reserved bytes set, so only the re-encoded bytes are
    // compared.
    let bytes2 = packet2.encode().expect("failed to encode again");
    assert_eq!(bytes1, bytes2);
});
