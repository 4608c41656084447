//! Family-agnostic CIDR membership.

use std::net::IpAddr;
use std::str::FromStr;

use thiserror::Error;

/// A single IP prefix: a bare address or CIDR `addr/bits`.
///
/// A bare address matches only itself. A prefix never matches across
/// address families: an IPv4 prefix rejects every IPv6 candidate and
/// vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpPrefix {
    addr: IpAddr,
    bits: Option<u8>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefixError {
    #[error("empty prefix")]
    Empty,
    #[error("invalid address {0:?}")]
    InvalidAddress(String),
    #[error("invalid prefix length {0:?}")]
    InvalidLength(String),
    #[error("prefix length {bits} too long for {addr}")]
    LengthOutOfRange { addr: IpAddr, bits: u8 },
}

impl FromStr for IpPrefix {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PrefixError::Empty);
        }
        let (addr_str, bits_str) = match s.split_once('/') {
            Some((addr, bits)) => (addr.trim(), Some(bits.trim())),
            None => (s, None),
        };
        let addr: IpAddr = addr_str
            .parse()
            .map_err(|_| PrefixError::InvalidAddress(addr_str.to_string()))?;
        let bits = match bits_str {
            Some(raw) => {
                let bits: u8 = raw
                    .parse()
                    .map_err(|_| PrefixError::InvalidLength(raw.to_string()))?;
                let width = match addr {
                    IpAddr::V4(_) => 32,
                    IpAddr::V6(_) => 128,
                };
                if bits > width {
                    return Err(PrefixError::LengthOutOfRange { addr, bits });
                }
                Some(bits)
            }
            None => None,
        };
        Ok(Self { addr, bits })
    }
}

impl IpPrefix {
    /// True when `candidate` falls inside this prefix.
    pub fn matches(&self, candidate: IpAddr) -> bool {
        match self.bits {
            None => self.addr == candidate,
            Some(bits) => match (self.addr, candidate) {
                (IpAddr::V4(prefix), IpAddr::V4(candidate)) => {
                    masked_eq(&prefix.octets(), &candidate.octets(), bits)
                }
                (IpAddr::V6(prefix), IpAddr::V6(candidate)) => {
                    masked_eq(&prefix.octets(), &candidate.octets(), bits)
                }
                _ => false,
            },
        }
    }
}

/// Byte-wise comparison over the first `bits` bits of two addresses.
fn masked_eq(prefix: &[u8], candidate: &[u8], bits: u8) -> bool {
    let full_bytes = usize::from(bits / 8);
    if prefix[..full_bytes] != candidate[..full_bytes] {
        return false;
    }
    let partial_bits = bits % 8;
    if partial_bits == 0 {
        return true;
    }
    let mask = 0xffu8 << (8 - partial_bits);
    (prefix[full_bytes] & mask) == (candidate[full_bytes] & mask)
}

/// Parses a comma-separated prefix list, dropping entries that do not
/// parse.
pub fn parse_list(prefixes: &str) -> Vec<IpPrefix> {
    prefixes
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| match entry.parse::<IpPrefix>() {
            Ok(prefix) => Some(prefix),
            Err(err) => {
                tracing::debug!("dropping prefix {entry:?}: {err}");
                None
            }
        })
        .collect()
}
