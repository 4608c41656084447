//! The production provider, backed by the OS resolver and interfaces.

pub mod lookup;

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use pacward_common::glob::GlobMatcher;

use crate::helpers::PacHelpers;

/// Upper bound on a single blocking DNS lookup.
pub const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_secs(5);

/// [`PacHelpers`] backed by the operating system: forward resolution via
/// the system resolver with a bounded wait, route-based outbound-address
/// discovery, and interface enumeration for the machine's address set.
///
/// Safe to share behind an `Arc` across concurrent evaluations; the only
/// internal state is the synchronized glob-pattern cache.
pub struct SystemHelpers {
    dns_timeout: Duration,
    globs: GlobMatcher,
}

impl SystemHelpers {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_DNS_TIMEOUT)
    }

    /// Provider with a custom DNS timeout. Timeouts surface to scripts as
    /// ordinary resolution failure.
    pub fn with_timeout(dns_timeout: Duration) -> Self {
        Self {
            dns_timeout,
            globs: GlobMatcher::new(),
        }
    }
}

impl Default for SystemHelpers {
    fn default() -> Self {
        Self::new()
    }
}

impl PacHelpers for SystemHelpers {
    fn dns_resolve(&self, host: &str) -> Option<Ipv4Addr> {
        lookup::resolve(host, self.dns_timeout)
            .into_iter()
            .find_map(|addr| match addr {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
    }

    fn dns_resolve_ex(&self, host: &str) -> Vec<IpAddr> {
        lookup::resolve(host, self.dns_timeout)
    }

    fn my_ip_address(&self) -> Ipv4Addr {
        lookup::outbound_v4().unwrap_or(Ipv4Addr::LOCALHOST)
    }

    fn my_ip_address_ex(&self) -> Vec<IpAddr> {
        let addrs = lookup::local_addresses();
        if addrs.is_empty() {
            vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]
        } else {
            addrs
        }
    }

    fn sh_exp_match(&self, input: &str, shexp: &str) -> bool {
        self.globs.matches(input, shexp)
    }

    fn alert(&self, message: &str) {
        tracing::debug!("PAC script says: {message}");
    }
}
