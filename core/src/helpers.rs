//! The host-provider contract behind every PAC function.

use std::net::{IpAddr, Ipv4Addr};

use chrono::{DateTime, Utc};
use pacward_common::datetime::date::DateRange;
use pacward_common::datetime::time::TimeRange;
use pacward_common::datetime::weekday::WeekdayRange;
use pacward_common::datetime::{self, Zone};
use pacward_common::network::{list, mask, prefix};
use pacward_common::{glob, hostname};

/// Version string reported to scripts by `getClientVersion()`.
pub const CLIENT_VERSION: &str = "1.0";

/// The delegate every PAC function forwards to.
///
/// This is the explicit form of the `self` object legacy engines expose as
/// an implicit global: providers are constructed, injected into
/// [`crate::PacBindings`], and shared across concurrent evaluations.
///
/// Only the genuinely host-specific operations are required: forward
/// resolution, the machine's own addresses, and the log sink. Everything
/// with fixed PAC semantics ships as a default method delegating to
/// `pacward-common`, so providers agree on the contract unless they have a
/// reason to diverge.
pub trait PacHelpers: Send + Sync {
    /// First IPv4 address of `host`, or `None` when resolution fails or
    /// times out. An IPv4 literal resolves to itself without consulting
    /// DNS; an IPv6 literal has no IPv4 reading and yields `None`.
    fn dns_resolve(&self, host: &str) -> Option<Ipv4Addr>;

    /// Every address of `host`, both families, empty on failure. IP
    /// literals resolve to themselves.
    fn dns_resolve_ex(&self, host: &str) -> Vec<IpAddr>;

    /// The IPv4 address outbound traffic would leave from. Providers fall
    /// back to the loopback address rather than failing.
    fn my_ip_address(&self) -> Ipv4Addr;

    /// Every unicast address assigned to the machine, both families.
    fn my_ip_address_ex(&self) -> Vec<IpAddr>;

    /// Sink for `alert()` messages. Must not fail and must not block.
    fn alert(&self, message: &str);

    fn client_version(&self) -> String {
        CLIENT_VERSION.to_string()
    }

    fn is_plain_host_name(&self, host: &str) -> bool {
        hostname::is_plain_host_name(host)
    }

    fn dns_domain_is(&self, host: &str, domain: &str) -> bool {
        hostname::dns_domain_is(host, domain)
    }

    fn local_host_or_domain_is(&self, host: &str, hostdom: &str) -> bool {
        hostname::local_host_or_domain_is(host, hostdom)
    }

    fn dns_domain_levels(&self, host: &str) -> u32 {
        hostname::dns_domain_levels(host)
    }

    fn sh_exp_match(&self, input: &str, shexp: &str) -> bool {
        glob::matches(input, shexp)
    }

    fn is_resolvable(&self, host: &str) -> bool {
        self.dns_resolve(host).is_some()
    }

    fn is_resolvable_ex(&self, host: &str) -> bool {
        !self.dns_resolve_ex(host).is_empty()
    }

    /// Masked IPv4 membership. The host is resolved first; unresolvable
    /// hosts and unparsable patterns or masks all report `false`.
    fn is_in_net(&self, host: &str, pattern: &str, net_mask: &str) -> bool {
        let (Ok(pattern), Ok(net_mask)) = (
            pattern.trim().parse::<Ipv4Addr>(),
            net_mask.trim().parse::<Ipv4Addr>(),
        ) else {
            return false;
        };
        match self.dns_resolve(host) {
            Some(addr) => mask::netmask_matches(addr, pattern, net_mask),
            None => false,
        }
    }

    /// CIDR membership against one or more comma-separated prefixes, both
    /// families. True when any resolved address falls inside any prefix.
    fn is_in_net_ex(&self, host: &str, prefixes: &str) -> bool {
        let prefixes = prefix::parse_list(prefixes);
        if prefixes.is_empty() {
            return false;
        }
        self.dns_resolve_ex(host)
            .iter()
            .any(|addr| prefixes.iter().any(|prefix| prefix.matches(*addr)))
    }

    fn sort_ip_address_list(&self, address_list: &str) -> String {
        list::sort_address_list(address_list)
    }

    fn weekday_range(&self, now: DateTime<Utc>, range: &WeekdayRange, zone: Zone) -> bool {
        range.contains(datetime::civil(now, zone))
    }

    fn date_range(&self, now: DateTime<Utc>, range: &DateRange, zone: Zone) -> bool {
        range.contains(datetime::civil(now, zone))
    }

    fn time_range(&self, now: DateTime<Utc>, range: &TimeRange, zone: Zone) -> bool {
        range.contains(datetime::civil(now, zone))
    }
}
