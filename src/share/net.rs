//! Local network discovery helpers.

use std::net::{IpAddr, Ipv4Addr, TcpListener, UdpSocket};

/// First port tried when looking for a free one.
pub const BASE_PORT: u16 = 8000;

/// Determines the LAN-facing IP of this machine.
///
/// A connectionless socket is "connected" toward a non-routable address and
/// the OS-assigned local endpoint read back; no packet is ever transmitted,
/// the OS only resolves the route. Falls back to the loopback address when
/// the probe fails (no network, sandboxed, ...).
pub fn local_ip() -> IpAddr {
    probe_route().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn probe_route() -> Option<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect(("10.255.255.255", 1)).ok()?;
    Some(socket.local_addr().ok()?.ip())
}

/// Finds a free TCP port, probing upward from `base`.
///
/// Each candidate is bound and immediately released; the first successful
/// bind wins. Returns `None` only if every port up to the maximum is taken.
pub fn find_free_port(base: u16) -> Option<u16> {
    for port in base..=u16::MAX {
        if let Ok(listener) = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)) {
            drop(listener);
            return Some(port);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_ip_is_usable() {
        let ip = local_ip();
        assert!(!ip.is_unspecified());
    }

    #[test]
    fn test_find_free_port_returns_bindable_port() {
        let port = find_free_port(BASE_PORT).unwrap();
        assert!(port >= BASE_PORT);
        assert!(TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).is_ok());
    }

    #[test]
    fn test_find_free_port_skips_occupied_port() {
        // Reserve an ephemeral port, then ask for it as the base: the probe
        // must move past it.
        let held = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).unwrap();
        let taken = held.local_addr().unwrap().port();

        let port = find_free_port(taken).unwrap();
        assert!(port > taken);
    }
}
