//! Blocking name and address discovery with bounded waits.

use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs, UdpSocket};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use pnet::datalink;

/// Resolves `host` to all of its addresses, waiting at most `timeout`.
///
/// IP literals short-circuit without consulting the resolver. Failure and
/// timeout both come back as an empty list; callers cannot tell the two
/// apart, matching what scripts expect.
pub fn resolve(host: &str, timeout: Duration) -> Vec<IpAddr> {
    let host = host.trim();
    if host.is_empty() {
        return Vec::new();
    }
    if let Ok(literal) = host.parse::<IpAddr>() {
        return vec![literal];
    }
    match resolve_blocking(host.to_string(), timeout) {
        Ok(addrs) => addrs,
        Err(err) => {
            tracing::debug!("failed to resolve host {host:?}: {err:#}");
            Vec::new()
        }
    }
}

/// Runs the OS resolver on a worker thread so the caller can give up after
/// `timeout`. A timed-out worker finishes on its own and its late answer
/// is discarded.
fn resolve_blocking(host: String, timeout: Duration) -> anyhow::Result<Vec<IpAddr>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = (host.as_str(), 0u16)
            .to_socket_addrs()
            .map(|addrs| addrs.map(|addr| addr.ip()).collect::<Vec<IpAddr>>());
        let _ = tx.send(result);
    });
    let addrs = rx.recv_timeout(timeout).context("resolver timed out")??;
    Ok(dedup(addrs))
}

/// The OS resolver reports one entry per socket type; collapse repeats
/// while keeping answer order.
fn dedup(addrs: Vec<IpAddr>) -> Vec<IpAddr> {
    let mut unique: Vec<IpAddr> = Vec::with_capacity(addrs.len());
    for addr in addrs {
        if !unique.contains(&addr) {
            unique.push(addr);
        }
    }
    unique
}

/// The IPv4 address outbound traffic would leave from.
///
/// Connecting a UDP socket performs route selection without sending a
/// packet; the kernel picks the source address.
pub fn outbound_v4() -> Option<Ipv4Addr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect(("8.8.8.8", 53)).ok()?;
    match socket.local_addr().ok()?.ip() {
        IpAddr::V4(addr) if !addr.is_unspecified() => Some(addr),
        _ => None,
    }
}

/// Every unicast address on an interface that is up and not loopback.
pub fn local_addresses() -> Vec<IpAddr> {
    datalink::interfaces()
        .into_iter()
        .filter(|iface| iface.is_up() && !iface.is_loopback() && !iface.ips.is_empty())
        .flat_map(|iface| iface.ips.into_iter().map(|net| net.ip()))
        .filter(|addr| !addr.is_unspecified())
        .collect()
}
