//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::io::{IoSlice, IoSliceMut};
use std::net::{Ipv6Addr, SocketAddrV6};
use std::ops::Deref;
use std::os::fd::AsRawFd;

use bytes::Bytes;
use derive_new::new;
use nix::sys::socket::{self, SockaddrIn6};
use ospf3_utils::socket::{Socket, SocketExt};
use serde::{Deserialize, Serialize};
use socket2::{Domain, Protocol, Type};
use tokio::io::Interest;
use tokio::io::unix::AsyncFd;

use crate::debug::Debug;
use crate::error::{Error, IoError};
use crate::packet::{Packet, PacketHdr};

// OSPF IP protocol number.
pub const OSPF_IP_PROTO: i32 = 89;

// OSPFv3 multicast addresses.
pub const ALL_SPF_RTRS: Ipv6Addr = Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 5);
pub const ALL_DR_RTRS: Ipv6Addr = Ipv6Addr::new(0xff02, 0, 0, 0, 0, 0, 0, 6);

// OSPFv3 packets never leave the local link.
pub const HOP_LIMIT: u32 = 1;

// Network control (CS6).
pub const TRAFFIC_CLASS: u8 = libc::IPTOS_PREC_INTERNETCONTROL;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum MulticastAddr {
    AllSpfRtrs,
    AllDrRtrs,
}

// Interface the transport is bound to.
#[derive(Clone, Debug, Eq, PartialEq, new)]
#[derive(Deserialize, Serialize)]
pub struct InterfaceCfg {
    pub name: String,
    pub ifindex: u32,
    pub mtu: u16,
    #[serde(default)]
    pub point_to_point: bool,
}

// Packet received from the network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RxPacket {
    pub src: Ipv6Addr,
    pub dst: Option<Ipv6Addr>,
    pub packet: Packet,
}

// Raw OSPFv3 socket bound to a single interface.
#[derive(Debug)]
pub struct Connection {
    cfg: InterfaceCfg,
    socket: AsyncFd<Socket>,
    groups: Vec<MulticastAddr>,
}

// ===== impl MulticastAddr =====

impl MulticastAddr {
    // Returns the IPv6 address of the multicast group.
    pub fn addr(&self) -> &'static Ipv6Addr {
        match self {
            MulticastAddr::AllSpfRtrs => &ALL_SPF_RTRS,
            MulticastAddr::AllDrRtrs => &ALL_DR_RTRS,
        }
    }
}

// ===== impl Connection =====

impl Connection {
    // Opens a raw OSPFv3 socket on the given interface and joins the
    // appropriate multicast groups.
    pub fn open(cfg: InterfaceCfg) -> Result<Connection, IoError> {
        let socket = socket(&cfg.name).map_err(IoError::SocketError)?;

        let groups = multicast_groups(cfg.point_to_point);
        for addr in &groups {
            socket
                .join_multicast_v6(addr.addr(), cfg.ifindex)
                .map_err(|error| IoError::MulticastJoinError(*addr, error))?;
            Debug::GroupJoin(&cfg.name, *addr).log();
        }

        let socket = AsyncFd::new(socket).map_err(IoError::SocketError)?;
        Ok(Connection {
            cfg,
            socket,
            groups,
        })
    }

    // Returns the interface configuration this connection was opened with.
    pub fn cfg(&self) -> &InterfaceCfg {
        &self.cfg
    }

    // Receives the next OSPFv3 packet.
    //
    // Datagrams that can't be decoded are logged and skipped.
    pub async fn recv(&self) -> Result<RxPacket, IoError> {
        let mut buf = vec![0; self.cfg.mtu.into()];
        let mut iov = [IoSliceMut::new(&mut buf)];
        let mut cmsgspace = nix::cmsg_space!(libc::in6_pktinfo);

        loop {
            // Receive data packet.
            match self
                .socket
                .async_io(Interest::READABLE, |socket| {
                    match socket::recvmsg::<SockaddrIn6>(
                        socket.as_raw_fd(),
                        &mut iov,
                        Some(&mut cmsgspace),
                        socket::MsgFlags::empty(),
                    ) {
                        Ok(msg) => {
                            // Retrieve source and destination addresses.
                            let src = msg.address.as_ref().map(|addr| addr.ip());
                            let dst = msg.cmsgs().ok().and_then(get_cmsg_data);
                            Ok((src, dst, msg.bytes))
                        }
                        Err(errno) => Err(errno.into()),
                    }
                })
                .await
            {
                Ok((src, dst, bytes)) => {
                    let Some(src) = src else {
                        IoError::RecvMissingSourceAddr.log();
                        continue;
                    };

                    // Decode packet.
                    match Packet::decode(&iov[0].deref()[0..bytes]) {
                        Ok(packet) => {
                            Debug::PacketRx(
                                &self.cfg.name,
                                &src,
                                dst.as_ref(),
                                &packet,
                            )
                            .log();
                            return Ok(RxPacket { src, dst, packet });
                        }
                        Err(error) => {
                            Error::PacketDecodeError(src, error).log();
                        }
                    }
                }
                Err(error) if error.kind() == std::io::ErrorKind::Interrupted => {
                    // Retry if the syscall was interrupted (EINTR).
                    continue;
                }
                Err(error) => {
                    return Err(IoError::RecvError(error));
                }
            }
        }
    }

    // Encodes and sends an OSPFv3 packet to the given destination.
    pub async fn send(
        &self,
        packet: &Packet,
        dst: Ipv6Addr,
    ) -> Result<usize, IoError> {
        let buf = encode_packet(&self.cfg.name, packet, &dst)?;

        // Send packet.
        let iov = [IoSlice::new(&buf)];
        let sockaddr: SockaddrIn6 =
            SocketAddrV6::new(dst, 0, 0, self.cfg.ifindex).into();
        let pktinfo = new_pktinfo(self.cfg.ifindex);
        let cmsg = [socket::ControlMessage::Ipv6PacketInfo(&pktinfo)];
        self.socket
            .async_io(Interest::WRITABLE, |socket| {
                socket::sendmsg(
                    socket.as_raw_fd(),
                    &iov,
                    &cmsg,
                    socket::MsgFlags::empty(),
                    Some(&sockaddr),
                )
                .map_err(|errno| errno.into())
            })
            .await
            .map_err(IoError::SendError)
    }

    // Leaves the joined multicast groups and closes the socket.
    pub fn close(self) -> Result<(), IoError> {
        let socket = self.socket.get_ref();
        for addr in &self.groups {
            socket
                .leave_multicast_v6(addr.addr(), self.cfg.ifindex)
                .map_err(|error| IoError::MulticastLeaveError(*addr, error))?;
            Debug::GroupLeave(&self.cfg.name, *addr).log();
        }

        Ok(())
    }
}

// ===== global functions =====

// Encodes an outgoing packet, logging it only once encoding has succeeded.
pub fn encode_packet(
    ifname: &str,
    packet: &Packet,
    dst: &Ipv6Addr,
) -> Result<Bytes, IoError> {
    let buf = packet.encode()?;
    Debug::PacketTx(ifname, dst, packet).log();
    Ok(buf)
}

// Returns the multicast groups joined on an interface.
//
// The AllDRouters group has no use on point-to-point links, where no DR is
// elected.
pub fn multicast_groups(point_to_point: bool) -> Vec<MulticastAddr> {
    let mut groups = vec![MulticastAddr::AllSpfRtrs];
    if !point_to_point {
        groups.push(MulticastAddr::AllDrRtrs);
    }
    groups
}

// ===== helper functions =====

fn socket(ifname: &str) -> Result<Socket, std::io::Error> {
    let socket = Socket::new(
        Domain::IPV6,
        Type::RAW,
        Some(Protocol::from(OSPF_IP_PROTO)),
    )?;

    socket.set_nonblocking(true)?;
    socket.bind_device(Some(ifname.as_bytes()))?;
    socket.set_multicast_loop_v6(false)?;
    socket.set_multicast_hops_v6(HOP_LIMIT)?;
    socket.set_unicast_hops_v6(HOP_LIMIT)?;
    socket.set_ipv6_pktinfo(true)?;
    socket.set_ipv6_tclass(TRAFFIC_CLASS)?;
    socket.set_ipv6_checksum(PacketHdr::CHECKSUM_OFFSET)?;

    Ok(socket)
}

// Let the kernel pick the source address, but pin the outgoing interface.
fn new_pktinfo(ifindex: u32) -> libc::in6_pktinfo {
    libc::in6_pktinfo {
        ipi6_addr: libc::in6_addr {
            s6_addr: Ipv6Addr::UNSPECIFIED.octets(),
        },
        ipi6_ifindex: ifindex,
    }
}

fn get_cmsg_data(mut cmsgs: socket::CmsgIterator<'_>) -> Option<Ipv6Addr> {
    cmsgs.find_map(|cmsg| {
        if let socket::ControlMessageOwned::Ipv6PacketInfo(pktinfo) = cmsg {
            Some(Ipv6Addr::from(pktinfo.ipi6_addr.s6_addr))
        } else {
            None
        }
    })
}
