//! Local network check
//!
//! Advisory probe used by the doctor command to warn when a TCP port is
//! already occupied. Binding briefly to the port is the check; the listener
//! is dropped immediately.

use std::net::{Ipv4Addr, SocketAddrV4, TcpListener};

/// Check whether a local TCP port is free
pub fn port_is_free(port: u16) -> bool {
    let addr = SocketAddrV4::new(Ipv4Addr::LOCALHOST, port);
    TcpListener::bind(addr).is_ok()
}
