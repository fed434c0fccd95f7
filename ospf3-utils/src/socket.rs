//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::os::raw::{c_int, c_void};
use std::os::unix::io::AsRawFd;

pub use socket2::Socket;

// Useful type definition.
type Result<T> = std::io::Result<T>;

// Extension methods for raw IPv6 sockets.
pub trait SocketExt {
    // Sets the value of the IPV6_CHECKSUM option for this socket.
    //
    // A negative offset disables kernel checksum computation.
    fn set_ipv6_checksum(&self, offset: i32) -> Result<()>;

    // Sets the value of the IPV6_TCLASS option for this socket.
    fn set_ipv6_tclass(&self, tclass: u8) -> Result<()>;

    // Sets the value of the IPV6_RECVPKTINFO option for this socket.
    fn set_ipv6_pktinfo(&self, value: bool) -> Result<()>;
}

// ===== impl Socket =====

impl SocketExt for Socket {
    fn set_ipv6_checksum(&self, offset: i32) -> Result<()> {
        setsockopt_int(self, libc::IPPROTO_IPV6, libc::IPV6_CHECKSUM, offset)
    }

    fn set_ipv6_tclass(&self, tclass: u8) -> Result<()> {
        setsockopt_int(
            self,
            libc::IPPROTO_IPV6,
            libc::IPV6_TCLASS,
            tclass.into(),
        )
    }

    fn set_ipv6_pktinfo(&self, value: bool) -> Result<()> {
        setsockopt_int(
            self,
            libc::IPPROTO_IPV6,
            libc::IPV6_RECVPKTINFO,
            value.into(),
        )
    }
}

// ===== helper functions =====

fn setsockopt_int<F: AsRawFd>(
    sock: &F,
    level: c_int,
    name: c_int,
    value: c_int,
) -> Result<()> {
    let ret = unsafe {
        libc::setsockopt(
            sock.as_raw_fd(),
            level,
            name,
            &value as *const c_int as *const c_void,
            std::mem::size_of::<c_int>() as libc::socklen_t,
        )
    };
    if ret == -1 {
        return Err(std::io::Error::last_os_error());
    }

    Ok(())
}
