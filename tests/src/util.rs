use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;

use pacward_common::glob::GlobMatcher;
use pacward_core::PacHelpers;

/// Provider that answers resolution from a canned table and records every
/// alert it receives. Overrides `shExpMatch` with the cached matcher the
/// way a production provider does.
pub struct ScriptedHelpers {
    table: HashMap<String, Vec<IpAddr>>,
    local: Vec<IpAddr>,
    globs: GlobMatcher,
    pub alerts: Mutex<Vec<String>>,
}

impl ScriptedHelpers {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            local: vec![
                IpAddr::V4(Ipv4Addr::new(192, 168, 1, 42)),
                "fe80::36cf:f6ff:fe9a:1122".parse().unwrap(),
            ],
            globs: GlobMatcher::new(),
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// Registers a host with its canned answers, in answer order.
    pub fn host(mut self, name: &str, addrs: &[&str]) -> Self {
        let addrs: Vec<IpAddr> = addrs.iter().map(|addr| addr.parse().unwrap()).collect();
        self.table.insert(name.to_string(), addrs);
        self
    }

    fn answers(&self, host: &str) -> Vec<IpAddr> {
        let host = host.trim();
        if let Ok(literal) = host.parse::<IpAddr>() {
            return vec![literal];
        }
        self.table.get(host).cloned().unwrap_or_default()
    }
}

impl PacHelpers for ScriptedHelpers {
    fn dns_resolve(&self, host: &str) -> Option<Ipv4Addr> {
        self.answers(host).into_iter().find_map(|addr| match addr {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
    }

    fn dns_resolve_ex(&self, host: &str) -> Vec<IpAddr> {
        self.answers(host)
    }

    fn my_ip_address(&self) -> Ipv4Addr {
        Ipv4Addr::new(192, 168, 1, 42)
    }

    fn my_ip_address_ex(&self) -> Vec<IpAddr> {
        self.local.clone()
    }

    fn sh_exp_match(&self, input: &str, shexp: &str) -> bool {
        self.globs.matches(input, shexp)
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
