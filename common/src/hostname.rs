//! Hostname and domain predicates.
//!
//! Pure string tests. Hosts arrive exactly as the calling script supplied
//! them, so every predicate trims surrounding whitespace and compares
//! case-insensitively where DNS does.

/// True when `host` carries no domain qualification at all.
pub fn is_plain_host_name(host: &str) -> bool {
    !host.trim().contains('.')
}

/// Domain-suffix test.
///
/// The domain must either start with a `.` and match the end of `host`,
/// or equal `host` outright. An empty domain matches nothing.
pub fn dns_domain_is(host: &str, domain: &str) -> bool {
    let host = host.trim().to_ascii_lowercase();
    let domain = domain.trim().to_ascii_lowercase();
    if domain.is_empty() {
        return false;
    }
    if host == domain {
        return true;
    }
    domain.starts_with('.') && host.ends_with(&domain)
}

/// True when `host` equals `hostdom` outright, or `host` is a plain name
/// equal to the leading label of `hostdom`.
///
/// Accepts "myserver" against "myserver.example.com" while rejecting
/// mismatched fully-qualified forms.
pub fn local_host_or_domain_is(host: &str, hostdom: &str) -> bool {
    let host = host.trim();
    let hostdom = hostdom.trim();
    if host.eq_ignore_ascii_case(hostdom) {
        return true;
    }
    if host.contains('.') {
        return false;
    }
    hostdom
        .split('.')
        .find(|label| !label.is_empty())
        .is_some_and(|label| label.eq_ignore_ascii_case(host))
}

/// Number of dots in `host`.
pub fn dns_domain_levels(host: &str) -> u32 {
    host.trim().matches('.').count() as u32
}
