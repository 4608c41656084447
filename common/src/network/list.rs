//! Delimited address-list parsing and ordering.

use std::net::IpAddr;

/// Sorts a `;`-delimited address list.
///
/// IPv6 entries come first, then entries sort ascending by address bytes
/// within each family, so IPv4 order is plain numeric order. Original
/// spellings are preserved; entries that do not parse are dropped. The
/// result is stable, so sorting is idempotent.
pub fn sort_address_list(list: &str) -> String {
    let mut entries: Vec<(IpAddr, &str)> = list
        .split(';')
        .filter_map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                return None;
            }
            match entry.parse::<IpAddr>() {
                Ok(addr) => Some((addr, entry)),
                Err(_) => {
                    tracing::debug!("dropping unparsable address {entry:?}");
                    None
                }
            }
        })
        .collect();
    entries.sort_by_key(|(addr, _)| sort_key(*addr));
    let spellings: Vec<&str> = entries.iter().map(|(_, spelling)| *spelling).collect();
    spellings.join(";")
}

/// Joins addresses into the `;`-delimited form scripts consume.
pub fn join_address_list(addrs: &[IpAddr]) -> String {
    let spellings: Vec<String> = addrs.iter().map(IpAddr::to_string).collect();
    spellings.join(";")
}

fn sort_key(addr: IpAddr) -> (u8, [u8; 16]) {
    match addr {
        IpAddr::V6(v6) => (0, v6.octets()),
        IpAddr::V4(v4) => {
            let mut bytes = [0u8; 16];
            bytes[..4].copy_from_slice(&v4.octets());
            (1, bytes)
        }
    }
}
