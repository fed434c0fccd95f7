//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ospf3::error::IoError;
use ospf3::network::{
    ALL_DR_RTRS, ALL_SPF_RTRS, InterfaceCfg, MulticastAddr, encode_packet,
    multicast_groups,
};
use ospf3::packet::Options;
use ospf3::packet::error::EncodeError;

use crate::packet::HELLO1;

#[test]
fn test_multicast_groups() {
    assert_eq!(
        multicast_groups(false),
        vec![MulticastAddr::AllSpfRtrs, MulticastAddr::AllDrRtrs]
    );
    assert_eq!(multicast_groups(true), vec![MulticastAddr::AllSpfRtrs]);
}

#[test]
fn test_multicast_addrs() {
    assert_eq!(ALL_SPF_RTRS.to_string(), "ff02::5");
    assert_eq!(ALL_DR_RTRS.to_string(), "ff02::6");
    assert_eq!(*MulticastAddr::AllSpfRtrs.addr(), ALL_SPF_RTRS);
    assert_eq!(*MulticastAddr::AllDrRtrs.addr(), ALL_DR_RTRS);
}

#[test]
fn test_interface_cfg_deserialize() {
    let cfg: InterfaceCfg = serde_json::from_str(
        r#"{"name": "eth0", "ifindex": 2, "mtu": 1500}"#,
    )
    .unwrap();
    assert_eq!(cfg, InterfaceCfg::new("eth0".to_owned(), 2, 1500, false));

    let cfg: InterfaceCfg = serde_json::from_str(
        r#"{"name": "ppp0", "ifindex": 7, "mtu": 1492, "point_to_point": true}"#,
    )
    .unwrap();
    assert!(cfg.point_to_point);
    assert_eq!(multicast_groups(cfg.point_to_point).len(), 1);
}

#[test]
fn test_encode_packet() {
    let (ref bytes, ref hello) = *HELLO1;
    let buf = encode_packet("eth0", hello, &ALL_SPF_RTRS).unwrap();
    assert_eq!(buf.as_ref(), bytes.as_slice());

    let mut hello = hello.clone();
    hello.as_hello_mut().unwrap().options =
        Options::from_bits_retain(0x0100_0000);
    let error = encode_packet("eth0", &hello, &ALL_SPF_RTRS).unwrap_err();
    assert!(matches!(
        error,
        IoError::EncodeError(EncodeError::InvalidOptions(0x0100_0000))
    ));
}
