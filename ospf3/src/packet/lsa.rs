//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;
use std::time::Duration;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_new::new;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use ospf3_utils::bytes::{BytesExt, BytesMutExt};
use serde::{Deserialize, Serialize};

// OSPFv3 LSA type.
//
// Unknown codes are legal and must be preserved, so this is a plain wrapper
// around the 16-bit value rather than a closed enumeration.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
#[serde(transparent)]
pub struct LsaType(pub u16);

// OSPFv3 LSA flooding scope (S1 and S2 bits).
#[derive(Clone, Copy, Debug, Eq, FromPrimitive, Hash, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum FloodingScope {
    LinkLocal = 0b00,
    Area = 0b01,
    As = 0b10,
    Reserved = 0b11,
}

//
// OSPFv3 LSA key (LS type, Link State ID and Advertising Router).
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//                                 +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//                                 |           LS Type             |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                       Link State ID                           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                    Advertising Router                         |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct LsaKey {
    pub lsa_type: LsaType,
    pub lsa_id: Ipv4Addr,
    pub adv_rtr: Ipv4Addr,
}

//
// OSPFv3 LSA header.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |           LS Age              |           LS Type             |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                       Link State ID                           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                    Advertising Router                         |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                    LS Sequence Number                         |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |        LS Checksum            |             Length            |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
#[derive(Clone, Copy, Debug, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct LsaHdr {
    // Whole-second resolution on the wire.
    pub age: Duration,
    pub lsa_type: LsaType,
    pub lsa_id: Ipv4Addr,
    pub adv_rtr: Ipv4Addr,
    pub seq_no: u32,
    pub cksum: u16,
    pub length: u16,
}

// ===== impl LsaType =====

impl LsaType {
    pub const ROUTER: LsaType = LsaType(0x2001);
    pub const NETWORK: LsaType = LsaType(0x2002);
    pub const INTER_AREA_PREFIX: LsaType = LsaType(0x2003);
    pub const INTER_AREA_ROUTER: LsaType = LsaType(0x2004);
    pub const AS_EXTERNAL: LsaType = LsaType(0x4005);
    pub const DEPRECATED: LsaType = LsaType(0x2006);
    pub const NSSA: LsaType = LsaType(0x2007);
    pub const LINK: LsaType = LsaType(0x0008);
    pub const INTRA_AREA_PREFIX: LsaType = LsaType(0x2009);

    pub const U_BIT_MASK: u16 = 0x8000;
    pub const HANDLING_MASK: u16 = 0xf000;
    pub const SCOPE_MASK: u16 = 0x6000;
    pub const FUNCTION_CODE_MASK: u16 = 0x1fff;

    // Returns the U-bit alone (bit 15).
    pub fn u_bit(&self) -> bool {
        self.0 & Self::U_BIT_MASK != 0
    }

    // Returns whether an LSA of this type is stored and flooded as if its
    // type was understood.
    //
    // Any of the four high bits counts, so every standard type with area or
    // AS scope reports true. When false, a router that doesn't recognize the
    // function code treats the LSA as if it had link-local flooding scope.
    pub fn lsa_handling(&self) -> bool {
        self.0 & Self::HANDLING_MASK != 0
    }

    // Returns the flooding scope encoded in the S1 and S2 bits.
    pub fn scope(&self) -> FloodingScope {
        let code = (self.0 & Self::SCOPE_MASK) >> 13;
        // Two bits always map to one of the four scopes.
        FloodingScope::from_u16(code).unwrap_or(FloodingScope::Reserved)
    }

    pub fn function_code(&self) -> u16 {
        self.0 & Self::FUNCTION_CODE_MASK
    }

    fn name(&self) -> Option<&'static str> {
        let name = match *self {
            LsaType::ROUTER => "RouterLSA",
            LsaType::NETWORK => "NetworkLSA",
            LsaType::INTER_AREA_PREFIX => "InterAreaPrefixLSA",
            LsaType::INTER_AREA_ROUTER => "InterAreaRouterLSA",
            LsaType::AS_EXTERNAL => "ASExternalLSA",
            LsaType::DEPRECATED => "deprecatedLSA",
            LsaType::NSSA => "NSSALSA",
            LsaType::LINK => "LinkLSA",
            LsaType::INTRA_AREA_PREFIX => "IntraAreaPrefixLSA",
            _ => return None,
        };
        Some(name)
    }
}

impl std::fmt::Display for LsaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "LSType({})", self.0),
        }
    }
}

impl From<LsaType> for u16 {
    fn from(lsa_type: LsaType) -> u16 {
        lsa_type.0
    }
}

impl From<u16> for LsaType {
    fn from(value: u16) -> LsaType {
        LsaType(value)
    }
}

// ===== impl LsaKey =====

impl LsaKey {
    pub const LENGTH: u16 = 10;

    // Decodes LSA key from a bytes buffer.
    //
    // Assumes the buffer has at least `LsaKey::LENGTH` bytes remaining.
    pub fn decode(buf: &mut Bytes) -> Self {
        let lsa_type = LsaType(buf.get_u16());
        let lsa_id = buf.get_ipv4();
        let adv_rtr = buf.get_ipv4();

        LsaKey {
            lsa_type,
            lsa_id,
            adv_rtr,
        }
    }

    // Encodes LSA key into a bytes buffer.
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u16(self.lsa_type.0);
        buf.put_ipv4(&self.lsa_id);
        buf.put_ipv4(&self.adv_rtr);
    }
}

// ===== impl LsaHdr =====

impl LsaHdr {
    pub const LENGTH: u16 = 20;

    // Decodes LSA header from a bytes buffer.
    //
    // Assumes the buffer has at least `LsaHdr::LENGTH` bytes remaining.
    pub fn decode(buf: &mut Bytes) -> Self {
        let age = buf.get_u16_secs();
        let key = LsaKey::decode(buf);
        let seq_no = buf.get_u32();
        let cksum = buf.get_u16();
        let length = buf.get_u16();

        LsaHdr {
            age,
            lsa_type: key.lsa_type,
            lsa_id: key.lsa_id,
            adv_rtr: key.adv_rtr,
            seq_no,
            cksum,
            length,
        }
    }

    // Encodes LSA header into a bytes buffer.
    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u16_secs(self.age);
        self.key().encode(buf);
        buf.put_u32(self.seq_no);
        buf.put_u16(self.cksum);
        buf.put_u16(self.length);
    }

    pub fn key(&self) -> LsaKey {
        LsaKey {
            lsa_type: self.lsa_type,
            lsa_id: self.lsa_id,
            adv_rtr: self.adv_rtr,
        }
    }
}
