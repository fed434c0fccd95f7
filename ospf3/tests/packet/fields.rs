//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::time::Duration;

use const_addrs::ip4;
use ospf3::packet::lsa::{FloodingScope, LsaHdr, LsaKey, LsaType};
use ospf3::packet::{
    DbDesc, DbDescFlags, Hello, LsAck, LsRequest, Options, Packet,
    PacketBase, PacketHdr,
};

use super::{HELLO1, hdr};

fn hello_with_neighbors(count: usize) -> Hello {
    Hello {
        hdr: hdr(),
        iface_id: 1,
        priority: 1,
        options: Options::V6 | Options::E,
        hello_interval: Duration::from_secs(10),
        dead_interval: Duration::from_secs(40),
        dr: ip4!("0.0.0.0"),
        bdr: ip4!("0.0.0.0"),
        neighbors: vec![ip4!("192.0.2.2"); count],
    }
}

#[test]
fn test_options_display() {
    assert_eq!(Options::empty().to_string(), "0");
    assert_eq!((Options::V6 | Options::E).to_string(), "V6-bit|E-bit");
    assert_eq!(
        (Options::V6 | Options::E | Options::R | Options::AF).to_string(),
        "V6-bit|E-bit|R-bit|AF-bit"
    );
    assert_eq!(Options::X.to_string(), "x-bit");
    assert_eq!(Options::from_bits_retain(0x00c0).to_string(), "*-bit|*-bit");
    assert_eq!(
        (Options::from_bits_retain(0x0800) | Options::AT).to_string(),
        "AT-bit|0x800"
    );
    assert_eq!(Options::from_bits_retain(0x0100_0000).to_string(), "0x1000000");
}

#[test]
fn test_options_is_valid() {
    assert!(Options::empty().is_valid());
    assert!(Options::from_bits_retain(0x00ff_ffff).is_valid());
    assert!(!Options::from_bits_retain(0x0100_0000).is_valid());
}

#[test]
fn test_options_unknown_bits_preserved() {
    let mut hello = hello_with_neighbors(0);
    hello.options = Options::from_bits_retain(0x00ff_ffff);
    let packet = Packet::Hello(hello);

    let bytes = packet.encode().unwrap();
    assert_eq!(&bytes[21..24], &[0xff, 0xff, 0xff]);
    assert_eq!(Packet::decode(&bytes).unwrap(), packet);
}

#[test]
fn test_dbdesc_flags_display() {
    assert_eq!(DbDescFlags::empty().to_string(), "0");
    assert_eq!((DbDescFlags::I | DbDescFlags::M).to_string(), "M-bit|I-bit");
    assert_eq!(
        (DbDescFlags::MS | DbDescFlags::from_bits_retain(0x80)).to_string(),
        "MS-bit|0x80"
    );
}

#[test]
fn test_lsa_type_display() {
    assert_eq!(LsaType::ROUTER.to_string(), "RouterLSA");
    assert_eq!(LsaType::NETWORK.to_string(), "NetworkLSA");
    assert_eq!(LsaType::INTER_AREA_PREFIX.to_string(), "InterAreaPrefixLSA");
    assert_eq!(LsaType::INTER_AREA_ROUTER.to_string(), "InterAreaRouterLSA");
    assert_eq!(LsaType::AS_EXTERNAL.to_string(), "ASExternalLSA");
    assert_eq!(LsaType::DEPRECATED.to_string(), "deprecatedLSA");
    assert_eq!(LsaType::NSSA.to_string(), "NSSALSA");
    assert_eq!(LsaType::LINK.to_string(), "LinkLSA");
    assert_eq!(LsaType::INTRA_AREA_PREFIX.to_string(), "IntraAreaPrefixLSA");
    assert_eq!(LsaType(0x1234).to_string(), "LSType(4660)");
}

#[test]
fn test_lsa_type_bits() {
    assert!(!LsaType::ROUTER.u_bit());
    assert!(LsaType(0x8001).u_bit());

    assert!(LsaType::ROUTER.lsa_handling());
    assert!(LsaType::AS_EXTERNAL.lsa_handling());
    assert!(LsaType(0x1001).lsa_handling());
    assert!(LsaType(0x8001).lsa_handling());
    assert!(!LsaType::LINK.lsa_handling());
    assert!(!LsaType(0x0fff).lsa_handling());

    assert_eq!(LsaType::LINK.scope(), FloodingScope::LinkLocal);
    assert_eq!(LsaType::ROUTER.scope(), FloodingScope::Area);
    assert_eq!(LsaType::AS_EXTERNAL.scope(), FloodingScope::As);
    assert_eq!(LsaType(0x6000).scope(), FloodingScope::Reserved);
    assert_eq!(LsaType(0xe001).scope(), FloodingScope::Reserved);

    assert_eq!(LsaType::ROUTER.function_code(), 1);
    assert_eq!(LsaType::AS_EXTERNAL.function_code(), 5);
    assert_eq!(LsaType(0xffff).function_code(), 0x1fff);
}

#[test]
fn test_lsa_hdr_key() {
    let lsa_hdr = LsaHdr::new(
        Duration::from_secs(3600),
        LsaType::NETWORK,
        ip4!("0.0.0.3"),
        ip4!("10.0.0.1"),
        0x80000001,
        0x1234,
        32,
    );
    assert_eq!(
        lsa_hdr.key(),
        LsaKey::new(LsaType::NETWORK, ip4!("0.0.0.3"), ip4!("10.0.0.1"))
    );
}

#[test]
fn test_duration_rounding() {
    let mut hello = hello_with_neighbors(0);
    hello.hello_interval = Duration::from_millis(4_500);
    hello.dead_interval = Duration::from_millis(39_400);
    let bytes = Packet::Hello(hello).encode().unwrap();
    assert_eq!(&bytes[24..28], &[0x00, 0x05, 0x00, 0x27]);

    // Decoding yields whole seconds.
    let packet = Packet::decode(&bytes).unwrap();
    let hello = packet.as_hello().unwrap();
    assert_eq!(hello.hello_interval, Duration::from_secs(5));
    assert_eq!(hello.dead_interval, Duration::from_secs(39));
}

#[test]
fn test_duration_saturation() {
    let mut hello = hello_with_neighbors(0);
    hello.hello_interval = Duration::from_secs(100_000);
    let bytes = Packet::Hello(hello).encode().unwrap();
    assert_eq!(&bytes[24..26], &[0xff, 0xff]);
}

#[test]
fn test_lsa_age_rounding() {
    let lsa_hdr = LsaHdr::new(
        Duration::from_millis(1_600),
        LsaType::ROUTER,
        ip4!("0.0.0.0"),
        ip4!("192.0.2.1"),
        1,
        0,
        LsaHdr::LENGTH,
    );
    let packet = Packet::LsAck(LsAck {
        hdr: hdr(),
        lsa_hdrs: vec![lsa_hdr],
    });
    let bytes = packet.encode().unwrap();
    assert_eq!(&bytes[16..18], &[0x00, 0x02]);

    let packet = Packet::decode(&bytes).unwrap();
    let lsack = packet.as_ls_ack().unwrap();
    assert_eq!(lsack.lsa_hdrs[0].age, Duration::from_secs(2));
}

#[test]
fn test_wire_len() {
    for count in 0..8 {
        let hello = hello_with_neighbors(count);
        assert_eq!(hello.wire_len(), 36 + 4 * count);
        let bytes = Packet::Hello(hello.clone()).encode().unwrap();
        assert_eq!(bytes.len(), hello.wire_len());

        let lsa_hdr = LsaHdr::new(
            Duration::ZERO,
            LsaType::LINK,
            ip4!("0.0.0.1"),
            ip4!("192.0.2.1"),
            1,
            0,
            LsaHdr::LENGTH,
        );
        let dbdesc = DbDesc {
            hdr: hdr(),
            options: Options::V6,
            mtu: 1500,
            dd_flags: DbDescFlags::empty(),
            dd_seq_no: 1,
            lsa_hdrs: vec![lsa_hdr; count],
        };
        assert_eq!(dbdesc.wire_len(), 28 + 20 * count);

        let request = LsRequest {
            hdr: hdr(),
            entries: vec![lsa_hdr.key(); count],
        };
        assert_eq!(request.wire_len(), 16 + 12 * count);

        let lsack = LsAck {
            hdr: hdr(),
            lsa_hdrs: vec![lsa_hdr; count],
        };
        assert_eq!(lsack.wire_len(), 16 + 20 * count);
    }
}

#[test]
fn test_length_field_matches_wire_len() {
    let (_, ref hello) = *HELLO1;
    let bytes = hello.encode().unwrap();
    let pkt_len = u16::from_be_bytes([bytes[2], bytes[3]]);
    assert_eq!(usize::from(pkt_len), hello.wire_len());
}

#[test]
fn test_header_fields() {
    let hdr = PacketHdr::new(ip4!("10.0.0.1"), ip4!("0.0.0.7"), 0xbeef, 42);
    let packet = Packet::LsRequest(LsRequest {
        hdr: hdr.clone(),
        entries: vec![],
    });
    let bytes = packet.encode().unwrap();
    assert_eq!(
        bytes.as_ref(),
        &[
            0x03, 0x03, 0x00, 0x10, 0x0a, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
            0x07, 0xbe, 0xef, 0x2a, 0x00,
        ]
    );
    assert_eq!(*Packet::decode(&bytes).unwrap().hdr(), hdr);
}
