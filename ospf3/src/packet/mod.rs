//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

pub mod error;
pub mod lsa;

use std::net::Ipv4Addr;
use std::time::Duration;

use bitflags::bitflags;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_new::new;
use enum_as_inner::EnumAsInner;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use ospf3_utils::bytes::{BytesExt, BytesMutExt};
use serde::{Deserialize, Serialize};

use crate::packet::error::{
    DecodeError, DecodeResult, EncodeError, EncodeResult,
};
use crate::packet::lsa::{LsaHdr, LsaKey};

// OSPFv3 Options field.
//
// Only the low 24 bits are carried on the wire. Unknown bits are retained so
// they survive a decode/encode cycle.
//
// IANA registry:
// https://www.iana.org/assignments/ospfv3-parameters/ospfv3-parameters.xhtml#ospfv3-parameters-1
bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    #[derive(Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct Options: u32 {
        const V6 = 0x0001;
        const E = 0x0002;
        const X = 0x0004;
        const N = 0x0008;
        const R = 0x0010;
        const DC = 0x0020;
        const AF = 0x0100;
        const L = 0x0200;
        const AT = 0x0400;
    }
}

// Database Description flags.
//
// Only the low 8 bits are carried on the wire.
bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    #[derive(Deserialize, Serialize)]
    #[serde(transparent)]
    pub struct DbDescFlags: u16 {
        const MS = 0x01;
        const M = 0x02;
        const I = 0x04;
    }
}

// OSPF Packet Type.
//
// IANA registry:
// https://www.iana.org/assignments/ospfv2-parameters/ospfv2-parameters.xhtml#ospfv2-parameters-3
#[derive(Clone, Copy, Debug, Eq, Hash, FromPrimitive, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum PacketType {
    Hello = 0x01,
    DbDesc = 0x02,
    LsRequest = 0x03,
    LsUpdate = 0x04,
    LsAck = 0x05,
}

//
// OSPFv3 packet header.
//
// Encoding format:
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |   Version #   |     Type      |         Packet length         |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                         Router ID                             |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                          Area ID                              |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |          Checksum             |  Instance ID  |      0        |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//
// The version, type and packet length fields are derived from the packet
// being encoded and aren't stored here.
//
#[derive(Clone, Debug, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct PacketHdr {
    pub router_id: Ipv4Addr,
    pub area_id: Ipv4Addr,
    pub cksum: u16,
    pub instance_id: u8,
}

//
// OSPFv3 Hello packet.
//
// Encoding format (packet body):
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                        Interface ID                           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// | Rtr Priority  |             Options                           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |        HelloInterval          |       RouterDeadInterval      |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                   Designated Router ID                        |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                Backup Designated Router ID                    |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                         Neighbor ID                           |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                        ...                                    |
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Hello {
    pub hdr: PacketHdr,
    pub iface_id: u32,
    pub priority: u8,
    pub options: Options,
    pub hello_interval: Duration,
    pub dead_interval: Duration,
    pub dr: Ipv4Addr,
    pub bdr: Ipv4Addr,
    pub neighbors: Vec<Ipv4Addr>,
}

//
// OSPFv3 Database Description packet.
//
// Encoding format (packet body):
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+--+
// |       0       |               Options                          |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+--+
// |        Interface MTU          |      0        |0|0|0|0|0|I|M|MS|
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+--+
// |                    DD sequence number                          |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+--+
// |                                                                |
// +-                                                              -+
// |                                                                |
// +-                     An LSA Header                            -+
// |                                                                |
// +-                                                              -+
// |                                                                |
// +-                                                              -+
// |                                                                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+--+
// |                       ...                                      |
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct DbDesc {
    pub hdr: PacketHdr,
    pub options: Options,
    pub mtu: u16,
    pub dd_flags: DbDescFlags,
    pub dd_seq_no: u32,
    pub lsa_hdrs: Vec<LsaHdr>,
}

//
// OSPFv3 Link State Request packet.
//
// Encoding format (packet body):
//
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |              0                |        LS Type                |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                         Link State ID                         |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                       Advertising Router                      |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                                 ...                           |
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct LsRequest {
    pub hdr: PacketHdr,
    pub entries: Vec<LsaKey>,
}

//
// OSPFv3 Link State Acknowledgment packet.
//
// Encoding format (packet body):
//
//  0                   1                   2                   3
//  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                                                               |
// +-                                                             -+
// |                                                               |
// +-                         An LSA Header                       -+
// |                                                               |
// +-                                                             -+
// |                                                               |
// +-                                                             -+
// |                                                               |
// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
// |                              ...                              |
//
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct LsAck {
    pub hdr: PacketHdr,
    pub lsa_hdrs: Vec<LsaHdr>,
}

// OSPFv3 packet.
#[derive(Clone, Debug, Eq, PartialEq, EnumAsInner)]
#[derive(Deserialize, Serialize)]
pub enum Packet {
    Hello(Hello),
    DbDesc(DbDesc),
    LsRequest(LsRequest),
    LsAck(LsAck),
}

// Code shared by all OSPFv3 packet types.
pub trait PacketBase
where
    Self: Sized,
{
    const PKT_TYPE: PacketType;
    const BASE_LENGTH: u16;

    // Decode OSPFv3 packet body from a bytes buffer.
    //
    // The buffer must contain exactly the packet body, as delimited by the
    // packet length field of the header.
    fn decode(hdr: PacketHdr, buf: &mut Bytes) -> DecodeResult<Self>;

    // Encode OSPFv3 packet body into a bytes buffer.
    fn encode_body(&self, buf: &mut BytesMut);

    // Return the length of the packet body, excluding the fixed header.
    fn body_len(&self) -> usize;

    // Return a reference to the packet header.
    fn hdr(&self) -> &PacketHdr;

    // Check that all fields can be represented on the wire.
    fn validate(&self) -> EncodeResult<()> {
        Ok(())
    }

    // Return the length of the encoded packet, including the header.
    fn wire_len(&self) -> usize {
        PacketHdr::LENGTH as usize + self.body_len()
    }

    // Encode OSPFv3 packet into a bytes buffer.
    fn encode(&self) -> EncodeResult<Bytes> {
        self.validate()?;

        let pkt_len = self.wire_len();
        let pkt_len_u16 = u16::try_from(pkt_len)
            .map_err(|_| EncodeError::PacketTooLong(pkt_len))?;

        let mut buf = BytesMut::with_capacity(pkt_len);
        self.hdr().encode(&mut buf, Self::PKT_TYPE, pkt_len_u16);
        self.encode_body(&mut buf);
        debug_assert_eq!(buf.len(), pkt_len);

        Ok(buf.freeze())
    }
}

// ===== impl Options =====

impl Options {
    const WIRE_MASK: u32 = 0x00ff_ffff;

    // Returns whether all set bits fit in the 24-bit wire field.
    pub fn is_valid(&self) -> bool {
        self.bits() & !Self::WIRE_MASK == 0
    }

    pub(crate) fn decode(buf: &mut Bytes) -> Self {
        Options::from_bits_retain(buf.get_u24())
    }

    pub(crate) fn encode(&self, buf: &mut BytesMut) {
        buf.put_u24(self.bits());
    }

    fn check(&self) -> EncodeResult<()> {
        if !self.is_valid() {
            return Err(EncodeError::InvalidOptions(self.bits()));
        }
        Ok(())
    }
}

impl std::fmt::Display for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [
            "V6-bit", "E-bit", "x-bit", "N-bit", "R-bit", "DC-bit", "*-bit",
            "*-bit", "AF-bit", "L-bit", "AT-bit",
        ];
        write!(f, "{}", flags_string(self.bits().into(), &names))
    }
}

// ===== impl DbDescFlags =====

impl std::fmt::Display for DbDescFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = ["MS-bit", "M-bit", "I-bit"];
        write!(f, "{}", flags_string(self.bits().into(), &names))
    }
}

// ===== impl PacketHdr =====

impl PacketHdr {
    pub const VERSION: u8 = 3;
    pub const LENGTH: u16 = 16;
    pub const CHECKSUM_OFFSET: i32 = 12;

    // Decodes OSPFv3 packet header from a bytes buffer.
    //
    // Returns the header along with the raw packet type and the validated
    // packet length.
    pub fn decode(buf: &mut Bytes) -> DecodeResult<(Self, u8, u16)> {
        let buf_len = buf.remaining();
        if buf_len < Self::LENGTH as usize {
            return Err(DecodeError::InvalidLength(buf_len));
        }

        // Parse version.
        let version = buf.get_u8();
        if version != Self::VERSION {
            return Err(DecodeError::InvalidVersion(version));
        }

        // Parse packet type (validated by the caller).
        let pkt_type = buf.get_u8();

        // Parse and validate packet length.
        let pkt_len = buf.get_u16();
        if pkt_len < Self::LENGTH {
            return Err(DecodeError::InvalidPacketLength(pkt_len));
        }
        if pkt_len as usize > buf_len {
            return Err(DecodeError::TruncatedPacket(pkt_len, buf_len));
        }

        let router_id = buf.get_ipv4();
        let area_id = buf.get_ipv4();
        let cksum = buf.get_u16();
        let instance_id = buf.get_u8();
        let _ = buf.get_u8();

        Ok((
            PacketHdr {
                router_id,
                area_id,
                cksum,
                instance_id,
            },
            pkt_type,
            pkt_len,
        ))
    }

    // Encodes OSPFv3 packet header into a bytes buffer.
    pub fn encode(&self, buf: &mut BytesMut, pkt_type: PacketType, pkt_len: u16) {
        buf.put_u8(Self::VERSION);
        buf.put_u8(pkt_type as u8);
        buf.put_u16(pkt_len);
        buf.put_ipv4(&self.router_id);
        buf.put_ipv4(&self.area_id);
        buf.put_u16(self.cksum);
        buf.put_u8(self.instance_id);
        buf.put_u8(0);
    }
}

// ===== impl Hello =====

impl Hello {
    pub const NEIGHBOR_LENGTH: u16 = 4;
}

impl PacketBase for Hello {
    const PKT_TYPE: PacketType = PacketType::Hello;
    const BASE_LENGTH: u16 = 20;

    fn decode(hdr: PacketHdr, buf: &mut Bytes) -> DecodeResult<Self> {
        let len = buf.remaining();
        if len < Self::BASE_LENGTH as usize {
            return Err(DecodeError::InvalidBodyLength(Self::PKT_TYPE, len));
        }
        if len % Self::NEIGHBOR_LENGTH as usize != 0 {
            return Err(DecodeError::UnalignedBody(Self::PKT_TYPE, len));
        }

        let iface_id = buf.get_u32();
        let priority = buf.get_u8();
        let options = Options::decode(buf);
        let hello_interval = buf.get_u16_secs();
        let dead_interval = buf.get_u16_secs();
        let dr = buf.get_ipv4();
        let bdr = buf.get_ipv4();

        // Parse list of neighbors.
        let nbrs_cnt = buf.remaining() / Self::NEIGHBOR_LENGTH as usize;
        let neighbors = (0..nbrs_cnt).map(|_| buf.get_ipv4()).collect();

        Ok(Hello {
            hdr,
            iface_id,
            priority,
            options,
            hello_interval,
            dead_interval,
            dr,
            bdr,
            neighbors,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) {
        buf.put_u32(self.iface_id);
        buf.put_u8(self.priority);
        self.options.encode(buf);
        buf.put_u16_secs(self.hello_interval);
        buf.put_u16_secs(self.dead_interval);
        buf.put_ipv4(&self.dr);
        buf.put_ipv4(&self.bdr);
        for nbr in &self.neighbors {
            buf.put_ipv4(nbr);
        }
    }

    fn body_len(&self) -> usize {
        Self::BASE_LENGTH as usize
            + self.neighbors.len() * Self::NEIGHBOR_LENGTH as usize
    }

    fn hdr(&self) -> &PacketHdr {
        &self.hdr
    }

    fn validate(&self) -> EncodeResult<()> {
        self.options.check()
    }
}

// ===== impl DbDesc =====

impl PacketBase for DbDesc {
    const PKT_TYPE: PacketType = PacketType::DbDesc;
    const BASE_LENGTH: u16 = 12;

    fn decode(hdr: PacketHdr, buf: &mut Bytes) -> DecodeResult<Self> {
        let len = buf.remaining();
        if len < Self::BASE_LENGTH as usize {
            return Err(DecodeError::InvalidBodyLength(Self::PKT_TYPE, len));
        }
        let lsa_hdrs_len = len - Self::BASE_LENGTH as usize;
        if lsa_hdrs_len % LsaHdr::LENGTH as usize != 0 {
            return Err(DecodeError::UnalignedBody(Self::PKT_TYPE, len));
        }

        let _ = buf.get_u8();
        let options = Options::decode(buf);
        let mtu = buf.get_u16();
        let _ = buf.get_u8();
        let dd_flags = DbDescFlags::from_bits_retain(buf.get_u8().into());
        let dd_seq_no = buf.get_u32();

        // Parse list of LSA headers.
        let lsa_hdrs_cnt = lsa_hdrs_len / LsaHdr::LENGTH as usize;
        let lsa_hdrs = (0..lsa_hdrs_cnt).map(|_| LsaHdr::decode(buf)).collect();

        Ok(DbDesc {
            hdr,
            options,
            mtu,
            dd_flags,
            dd_seq_no,
            lsa_hdrs,
        })
    }

    fn encode_body(&self, buf: &mut BytesMut) {
        buf.put_u8(0);
        self.options.encode(buf);
        buf.put_u16(self.mtu);
        buf.put_u8(0);
        // Width checked by `validate`.
        buf.put_u8(self.dd_flags.bits() as u8);
        buf.put_u32(self.dd_seq_no);
        for lsa_hdr in &self.lsa_hdrs {
            lsa_hdr.encode(buf);
        }
    }

    fn body_len(&self) -> usize {
        Self::BASE_LENGTH as usize
            + self.lsa_hdrs.len() * LsaHdr::LENGTH as usize
    }

    fn hdr(&self) -> &PacketHdr {
        &self.hdr
    }

    fn validate(&self) -> EncodeResult<()> {
        self.options.check()?;
        if self.dd_flags.bits() > u16::from(u8::MAX) {
            return Err(EncodeError::InvalidDbDescFlags(self.dd_flags.bits()));
        }
        Ok(())
    }
}

// ===== impl LsRequest =====

impl LsRequest {
    pub const ENTRY_LENGTH: u16 = 12;
}

impl PacketBase for LsRequest {
    const PKT_TYPE: PacketType = PacketType::LsRequest;
    const BASE_LENGTH: u16 = 0;

    fn decode(hdr: PacketHdr, buf: &mut Bytes) -> DecodeResult<Self> {
        let len = buf.remaining();
        if len % Self::ENTRY_LENGTH as usize != 0 {
            return Err(DecodeError::UnalignedBody(Self::PKT_TYPE, len));
        }

        // Parse list of LSA keys, each preceded by two reserved bytes.
        let entries_cnt = len / Self::ENTRY_LENGTH as usize;
        let entries = (0..entries_cnt)
            .map(|_| {
                let _ = buf.get_u16();
                LsaKey::decode(buf)
            })
            .collect();

        Ok(LsRequest { hdr, entries })
    }

    fn encode_body(&self, buf: &mut BytesMut) {
        for entry in &self.entries {
            buf.put_u16(0);
            entry.encode(buf);
        }
    }

    fn body_len(&self) -> usize {
        self.entries.len() * Self::ENTRY_LENGTH as usize
    }

    fn hdr(&self) -> &PacketHdr {
        &self.hdr
    }
}

// ===== impl LsAck =====

impl PacketBase for LsAck {
    const PKT_TYPE: PacketType = PacketType::LsAck;
    const BASE_LENGTH: u16 = 0;

    fn decode(hdr: PacketHdr, buf: &mut Bytes) -> DecodeResult<Self> {
        let len = buf.remaining();
        if len % LsaHdr::LENGTH as usize != 0 {
            return Err(DecodeError::UnalignedBody(Self::PKT_TYPE, len));
        }

        // Parse list of LSA headers.
        let lsa_hdrs_cnt = len / LsaHdr::LENGTH as usize;
        let lsa_hdrs = (0..lsa_hdrs_cnt).map(|_| LsaHdr::decode(buf)).collect();

        Ok(LsAck { hdr, lsa_hdrs })
    }

    fn encode_body(&self, buf: &mut BytesMut) {
        for lsa_hdr in &self.lsa_hdrs {
            lsa_hdr.encode(buf);
        }
    }

    fn body_len(&self) -> usize {
        self.lsa_hdrs.len() * LsaHdr::LENGTH as usize
    }

    fn hdr(&self) -> &PacketHdr {
        &self.hdr
    }
}

// ===== impl Packet =====

impl Packet {
    // Decodes OSPFv3 packet from a bytes buffer.
    //
    // Bytes past the length announced in the packet header are ignored.
    pub fn decode(data: &[u8]) -> DecodeResult<Self> {
        let mut buf = Bytes::copy_from_slice(data);

        // Decode the packet header.
        let (hdr, pkt_type, pkt_len) = PacketHdr::decode(&mut buf)?;
        let mut buf =
            buf.slice(..pkt_len as usize - PacketHdr::LENGTH as usize);

        // Decode the packet body.
        let packet = match PacketType::from_u8(pkt_type) {
            Some(PacketType::Hello) => {
                Packet::Hello(Hello::decode(hdr, &mut buf)?)
            }
            Some(PacketType::DbDesc) => {
                Packet::DbDesc(DbDesc::decode(hdr, &mut buf)?)
            }
            Some(PacketType::LsRequest) => {
                Packet::LsRequest(LsRequest::decode(hdr, &mut buf)?)
            }
            Some(PacketType::LsAck) => {
                Packet::LsAck(LsAck::decode(hdr, &mut buf)?)
            }
            Some(PacketType::LsUpdate) | None => {
                return Err(DecodeError::UnimplementedPacketType(pkt_type));
            }
        };

        Ok(packet)
    }

    // Encodes OSPFv3 packet into a bytes buffer.
    pub fn encode(&self) -> EncodeResult<Bytes> {
        match self {
            Packet::Hello(pkt) => pkt.encode(),
            Packet::DbDesc(pkt) => pkt.encode(),
            Packet::LsRequest(pkt) => pkt.encode(),
            Packet::LsAck(pkt) => pkt.encode(),
        }
    }

    // Returns the length of the encoded packet.
    pub fn wire_len(&self) -> usize {
        match self {
            Packet::Hello(pkt) => pkt.wire_len(),
            Packet::DbDesc(pkt) => pkt.wire_len(),
            Packet::LsRequest(pkt) => pkt.wire_len(),
            Packet::LsAck(pkt) => pkt.wire_len(),
        }
    }

    // Returns a reference to the packet header.
    pub fn hdr(&self) -> &PacketHdr {
        match self {
            Packet::Hello(pkt) => pkt.hdr(),
            Packet::DbDesc(pkt) => pkt.hdr(),
            Packet::LsRequest(pkt) => pkt.hdr(),
            Packet::LsAck(pkt) => pkt.hdr(),
        }
    }

    // Returns the packet type.
    pub fn pkt_type(&self) -> PacketType {
        match self {
            Packet::Hello(_) => Hello::PKT_TYPE,
            Packet::DbDesc(_) => DbDesc::PKT_TYPE,
            Packet::LsRequest(_) => LsRequest::PKT_TYPE,
            Packet::LsAck(_) => LsAck::PKT_TYPE,
        }
    }
}

// ===== global functions =====

// Encodes an optional OSPFv3 packet. Having nothing to encode is an error.
pub fn encode(packet: Option<&Packet>) -> EncodeResult<Bytes> {
    packet.ok_or(EncodeError::MissingPacket)?.encode()
}

// Renders a bitmask as the `|`-separated names of its set bits, followed by
// the hex value of any bits that have no name.
pub(crate) fn flags_string(bits: u64, names: &[&str]) -> String {
    let mut parts = vec![];
    let mut left = bits;
    for (i, name) in names.iter().enumerate() {
        let bit = 1u64 << i;
        if bits & bit != 0 {
            parts.push(name.to_string());
            left &= !bit;
        }
    }

    if left != 0 {
        parts.push(format!("{:#x}", left));
    }
    if parts.is_empty() {
        return "0".to_owned();
    }

    parts.join("|")
}

// ===== unit tests =====
