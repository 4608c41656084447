//! Typed entry points for the script-visible PAC functions.
//!
//! Each public method is one PAC function: it coerces the loosely typed
//! script arguments exactly once, forwards to the provider, and returns
//! the declared Rust type. [`PacBindings::invoke`] wraps the same methods
//! behind dispatch by exact script-facing name for engines that register
//! globals dynamically.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pacward_common::datetime::date::DateRange;
use pacward_common::datetime::time::TimeRange;
use pacward_common::datetime::weekday::WeekdayRange;
use pacward_common::datetime::{self, RangeArg};
use pacward_common::network::list;

use crate::helpers::PacHelpers;
use crate::value::PacValue;

/// The exact script-facing function names with their declared arities.
///
/// Names and arities are fixed by the Netscape and Microsoft PAC
/// conventions; scripts resolve these globals by name.
pub const FUNCTIONS: [(&str, usize); 19] = [
    ("isPlainHostName", 1),
    ("dnsDomainIs", 2),
    ("localHostOrDomainIs", 2),
    ("isResolvable", 1),
    ("isInNet", 3),
    ("dnsResolve", 1),
    ("myIpAddress", 0),
    ("dnsDomainLevels", 1),
    ("shExpMatch", 2),
    ("weekdayRange", 3),
    ("dateRange", 7),
    ("timeRange", 7),
    ("isResolvableEx", 1),
    ("isInNetEx", 2),
    ("dnsResolveEx", 1),
    ("myIpAddressEx", 0),
    ("sortIpAddressList", 1),
    ("getClientVersion", 0),
    ("alert", 1),
];

/// One script evaluation's view of the PAC standard library.
///
/// Holds the provider and a wall-clock snapshot taken at construction, so
/// every temporal predicate within one evaluation sees the same instant.
/// Construction is cheap; build one per `FindProxyForURL` call and share
/// the provider behind the `Arc`.
pub struct PacBindings {
    helpers: Arc<dyn PacHelpers>,
    now: DateTime<Utc>,
}

impl PacBindings {
    pub fn new(helpers: Arc<dyn PacHelpers>) -> Self {
        Self::at(helpers, Utc::now())
    }

    /// Bindings evaluated against a fixed instant.
    pub fn at(helpers: Arc<dyn PacHelpers>, now: DateTime<Utc>) -> Self {
        Self { helpers, now }
    }

    /// Dispatches a call by its exact script-facing name.
    ///
    /// Unknown names yield `Undefined`. Faulty arguments yield the
    /// function's negative sentinel; nothing here returns an error.
    pub fn invoke(&self, name: &str, args: &[PacValue]) -> PacValue {
        match name {
            "isPlainHostName" => self.is_plain_host_name(args).into(),
            "dnsDomainIs" => self.dns_domain_is(args).into(),
            "localHostOrDomainIs" => self.local_host_or_domain_is(args).into(),
            "isResolvable" => self.is_resolvable(args).into(),
            "isInNet" => self.is_in_net(args).into(),
            "dnsResolve" => self.dns_resolve(args).into(),
            "myIpAddress" => self.my_ip_address().into(),
            "dnsDomainLevels" => self.dns_domain_levels(args).into(),
            "shExpMatch" => self.sh_exp_match(args).into(),
            "weekdayRange" => self.weekday_range(args).into(),
            "dateRange" => self.date_range(args).into(),
            "timeRange" => self.time_range(args).into(),
            "isResolvableEx" => self.is_resolvable_ex(args).into(),
            "isInNetEx" => self.is_in_net_ex(args).into(),
            "dnsResolveEx" => self.dns_resolve_ex(args).into(),
            "myIpAddressEx" => self.my_ip_address_ex().into(),
            "sortIpAddressList" => self.sort_ip_address_list(args).into(),
            "getClientVersion" => self.get_client_version().into(),
            "alert" => {
                self.alert(args);
                PacValue::Undefined
            }
            _ => PacValue::Undefined,
        }
    }

    pub fn is_plain_host_name(&self, args: &[PacValue]) -> bool {
        let Some(host) = arg_str(args, 0) else {
            return false;
        };
        self.helpers.is_plain_host_name(host)
    }

    pub fn dns_domain_is(&self, args: &[PacValue]) -> bool {
        let (Some(host), Some(domain)) = (arg_str(args, 0), arg_str(args, 1)) else {
            return false;
        };
        self.helpers.dns_domain_is(host, domain)
    }

    pub fn local_host_or_domain_is(&self, args: &[PacValue]) -> bool {
        let (Some(host), Some(hostdom)) = (arg_str(args, 0), arg_str(args, 1)) else {
            return false;
        };
        self.helpers.local_host_or_domain_is(host, hostdom)
    }

    pub fn dns_domain_levels(&self, args: &[PacValue]) -> u32 {
        let Some(host) = arg_str(args, 0) else {
            return 0;
        };
        self.helpers.dns_domain_levels(host)
    }

    pub fn sh_exp_match(&self, args: &[PacValue]) -> bool {
        let (Some(input), Some(shexp)) = (arg_str(args, 0), arg_str(args, 1)) else {
            return false;
        };
        self.helpers.sh_exp_match(input, shexp)
    }

    pub fn is_resolvable(&self, args: &[PacValue]) -> bool {
        let Some(host) = arg_str(args, 0) else {
            return false;
        };
        self.helpers.is_resolvable(host)
    }

    pub fn is_resolvable_ex(&self, args: &[PacValue]) -> bool {
        let Some(host) = arg_str(args, 0) else {
            return false;
        };
        self.helpers.is_resolvable_ex(host)
    }

    /// The empty string is the "no answer" sentinel; scripts branch on
    /// emptiness, never on exceptions.
    pub fn dns_resolve(&self, args: &[PacValue]) -> String {
        let Some(host) = arg_str(args, 0) else {
            return String::new();
        };
        self.helpers
            .dns_resolve(host)
            .map(|addr| addr.to_string())
            .unwrap_or_default()
    }

    pub fn dns_resolve_ex(&self, args: &[PacValue]) -> String {
        let Some(host) = arg_str(args, 0) else {
            return String::new();
        };
        list::join_address_list(&self.helpers.dns_resolve_ex(host))
    }

    pub fn my_ip_address(&self) -> String {
        self.helpers.my_ip_address().to_string()
    }

    pub fn my_ip_address_ex(&self) -> String {
        list::join_address_list(&self.helpers.my_ip_address_ex())
    }

    pub fn is_in_net(&self, args: &[PacValue]) -> bool {
        let (Some(host), Some(pattern), Some(net_mask)) =
            (arg_str(args, 0), arg_str(args, 1), arg_str(args, 2))
        else {
            return false;
        };
        self.helpers.is_in_net(host, pattern, net_mask)
    }

    pub fn is_in_net_ex(&self, args: &[PacValue]) -> bool {
        let (Some(host), Some(prefixes)) = (arg_str(args, 0), arg_str(args, 1)) else {
            return false;
        };
        self.helpers.is_in_net_ex(host, prefixes)
    }

    pub fn sort_ip_address_list(&self, args: &[PacValue]) -> String {
        let Some(address_list) = arg_str(args, 0) else {
            return String::new();
        };
        self.helpers.sort_ip_address_list(address_list)
    }

    pub fn get_client_version(&self) -> String {
        self.helpers.client_version()
    }

    pub fn weekday_range(&self, args: &[PacValue]) -> bool {
        let args = range_args(args);
        let (args, zone) = datetime::split_zone(&args);
        match WeekdayRange::from_args(args) {
            Ok(range) => self.helpers.weekday_range(self.now, &range, zone),
            Err(err) => {
                tracing::warn!("weekdayRange arguments rejected: {err}");
                false
            }
        }
    }

    pub fn date_range(&self, args: &[PacValue]) -> bool {
        let args = range_args(args);
        let (args, zone) = datetime::split_zone(&args);
        match DateRange::from_args(args) {
            Ok(range) => self.helpers.date_range(self.now, &range, zone),
            Err(err) => {
                tracing::warn!("dateRange arguments rejected: {err}");
                false
            }
        }
    }

    pub fn time_range(&self, args: &[PacValue]) -> bool {
        let args = range_args(args);
        let (args, zone) = datetime::split_zone(&args);
        match TimeRange::from_args(args) {
            Ok(range) => self.helpers.time_range(self.now, &range, zone),
            Err(err) => {
                tracing::warn!("timeRange arguments rejected: {err}");
                false
            }
        }
    }

    /// Side-channel only: forwards to the provider's log sink. Takes any
    /// value a script might pass and never fails.
    pub fn alert(&self, args: &[PacValue]) {
        let message = args
            .first()
            .map(PacValue::coerced_string)
            .unwrap_or_else(|| "undefined".to_string());
        self.helpers.alert(&message);
    }
}

fn arg_str(args: &[PacValue], index: usize) -> Option<&str> {
    args.get(index).and_then(PacValue::as_str)
}

/// Collects the weekday/date/time arguments, skipping the `Undefined`
/// padding legacy engines pass for unused formals.
fn range_args(args: &[PacValue]) -> Vec<RangeArg> {
    args.iter().filter_map(PacValue::as_range_arg).collect()
}
