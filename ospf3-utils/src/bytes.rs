//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::Ipv4Addr;
use std::time::Duration;

use bytes::{Buf, BufMut, Bytes, BytesMut};

// Extension methods for Bytes.
pub trait BytesExt {
    /// Gets an unsigned 24 bit integer from `self` in the big-endian byte
    /// order.
    ///
    /// The current position is advanced by 3.
    fn get_u24(&mut self) -> u32;

    /// Gets an IPv4 addr from `self` in big-endian byte order.
    ///
    /// The current position is advanced by 4.
    fn get_ipv4(&mut self) -> Ipv4Addr;

    /// Gets an unsigned 16 bit count of seconds from `self` in big-endian
    /// byte order.
    ///
    /// The current position is advanced by 2.
    fn get_u16_secs(&mut self) -> Duration;
}

// Extension methods for BytesMut.
pub trait BytesMutExt {
    /// Writes an unsigned 24 bit integer to `self` in big-endian byte order.
    ///
    /// The current position is advanced by 3.
    ///
    /// # Panics
    ///
    /// This function panics if there is not enough remaining capacity in
    /// `self`.
    fn put_u24(&mut self, n: u32);

    /// Writes an IPv4 addr to `self` in big-endian byte order.
    ///
    /// The current position is advanced by 4.
    ///
    /// # Panics
    ///
    /// This function panics if there is not enough remaining capacity in
    /// `self`.
    fn put_ipv4(&mut self, addr: &Ipv4Addr);

    /// Writes a duration to `self` as an unsigned 16 bit count of seconds in
    /// big-endian byte order.
    ///
    /// The duration is rounded to the nearest whole second (halves away from
    /// zero) and saturates at `u16::MAX`.
    ///
    /// The current position is advanced by 2.
    fn put_u16_secs(&mut self, duration: Duration);
}

// ===== impl Bytes =====

impl BytesExt for Bytes {
    fn get_u24(&mut self) -> u32 {
        let mut n = [0; 4];
        self.copy_to_slice(&mut n[1..=3]);
        u32::from_be_bytes(n)
    }

    fn get_ipv4(&mut self) -> Ipv4Addr {
        Ipv4Addr::from(self.get_u32())
    }

    fn get_u16_secs(&mut self) -> Duration {
        Duration::from_secs(self.get_u16().into())
    }
}

// ===== impl BytesMut =====

impl BytesMutExt for BytesMut {
    fn put_u24(&mut self, n: u32) {
        let n = n.to_be_bytes();
        self.put_slice(&n[1..=3]);
    }

    fn put_ipv4(&mut self, addr: &Ipv4Addr) {
        self.put_u32((*addr).into())
    }

    fn put_u16_secs(&mut self, duration: Duration) {
        self.put_u16(round_secs(duration));
    }
}

// ===== global functions =====

/// Rounds a duration to the nearest whole second, saturating at `u16::MAX`.
pub fn round_secs(duration: Duration) -> u16 {
    let mut secs = duration.as_secs();
    if duration.subsec_nanos() >= 500_000_000 {
        secs = secs.saturating_add(1);
    }
    u16::try_from(secs).unwrap_or(u16::MAX)
}

// ===== unit tests =====
