//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Serialize};

use crate::packet::PacketType;

// Type aliases.
pub type DecodeResult<T> = Result<T, DecodeError>;
pub type EncodeResult<T> = Result<T, EncodeError>;

// OSPFv3 decode errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum DecodeError {
    // Malformed input.
    InvalidLength(usize),
    InvalidVersion(u8),
    InvalidPacketLength(u16),
    TruncatedPacket(u16, usize),
    InvalidBodyLength(PacketType, usize),
    UnalignedBody(PacketType, usize),
    // Valid packet type without a decoder.
    UnimplementedPacketType(u8),
}

// OSPFv3 encode errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum EncodeError {
    MissingPacket,
    InvalidOptions(u32),
    InvalidDbDescFlags(u16),
    PacketTooLong(usize),
}

// ===== impl DecodeError =====

impl DecodeError {
    // Returns whether the error was caused by corrupt or truncated data, as
    // opposed to a packet type this codec doesn't support.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, DecodeError::UnimplementedPacketType(..))
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidLength(len) => {
                write!(f, "not enough bytes for packet header: {}", len)
            }
            DecodeError::InvalidVersion(version) => {
                write!(f, "invalid packet version: {}", version)
            }
            DecodeError::InvalidPacketLength(pkt_len) => {
                write!(f, "invalid packet length: {}", pkt_len)
            }
            DecodeError::TruncatedPacket(pkt_len, len) => {
                write!(
                    f,
                    "packet length is {} bytes but only {} bytes are available",
                    pkt_len, len
                )
            }
            DecodeError::InvalidBodyLength(pkt_type, len) => {
                write!(f, "not enough bytes for {:?} packet: {}", pkt_type, len)
            }
            DecodeError::UnalignedBody(pkt_type, len) => {
                write!(
                    f,
                    "{:?} packet has a partial trailing entry: {} bytes",
                    pkt_type, len
                )
            }
            DecodeError::UnimplementedPacketType(pkt_type) => {
                write!(f, "packet type not implemented: {}", pkt_type)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

// ===== impl EncodeError =====

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::MissingPacket => {
                write!(f, "no packet to encode")
            }
            EncodeError::InvalidOptions(options) => {
                write!(f, "options bitmask exceeds 24 bits: {:#x}", options)
            }
            EncodeError::InvalidDbDescFlags(flags) => {
                write!(f, "database description flags exceed 8 bits: {:#x}", flags)
            }
            EncodeError::PacketTooLong(len) => {
                write!(f, "packet too long: {} bytes", len)
            }
        }
    }
}

impl std::error::Error for EncodeError {}
