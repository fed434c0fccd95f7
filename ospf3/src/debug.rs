//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv6Addr;

use tracing::{debug, debug_span};

use crate::network::MulticastAddr;
use crate::packet::Packet;

// OSPFv3 transport debug messages.
#[derive(Debug)]
pub enum Debug<'a> {
    PacketRx(&'a str, &'a Ipv6Addr, Option<&'a Ipv6Addr>, &'a Packet),
    PacketTx(&'a str, &'a Ipv6Addr, &'a Packet),
    GroupJoin(&'a str, MulticastAddr),
    GroupLeave(&'a str, MulticastAddr),
}

// ===== impl Debug =====

impl Debug<'_> {
    // Log debug message using the tracing API.
    pub(crate) fn log(&self) {
        match self {
            Debug::PacketRx(interface, src, dst, packet) => {
                debug_span!("network").in_scope(|| {
                    debug_span!("input").in_scope(|| {
                        let data =
                            serde_json::to_string(&packet).unwrap_or_default();
                        match dst {
                            Some(dst) => {
                                debug!(%interface, %src, %dst, %data, "{}", self);
                            }
                            None => {
                                debug!(%interface, %src, %data, "{}", self);
                            }
                        }
                    })
                })
            }
            Debug::PacketTx(interface, dst, packet) => {
                debug_span!("network").in_scope(|| {
                    debug_span!("output").in_scope(|| {
                        let data =
                            serde_json::to_string(&packet).unwrap_or_default();
                        debug!(%interface, %dst, %data, "{}", self);
                    })
                })
            }
            Debug::GroupJoin(interface, addr)
            | Debug::GroupLeave(interface, addr) => {
                debug_span!("network").in_scope(|| {
                    debug!(%interface, ?addr, "{}", self);
                })
            }
        }
    }
}

impl std::fmt::Display for Debug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Debug::PacketRx(..) | Debug::PacketTx(..) => {
                write!(f, "packet")
            }
            Debug::GroupJoin(..) => {
                write!(f, "joined multicast group")
            }
            Debug::GroupLeave(..) => {
                write!(f, "left multicast group")
            }
        }
    }
}
