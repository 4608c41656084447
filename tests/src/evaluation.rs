use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use pacward_core::bindings::FUNCTIONS;
use pacward_core::{PacBindings, PacValue};

use crate::util::ScriptedHelpers;

/// 2026-08-05 12:30:45 UTC, a Wednesday.
fn wednesday_noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 5, 12, 30, 45).unwrap()
}

fn corp_network() -> Arc<ScriptedHelpers> {
    Arc::new(
        ScriptedHelpers::new()
            .host("intranet", &["10.1.2.3"])
            .host("dual.corp.example", &["10.7.0.9", "3ffe:8311:ffff::9"])
            .host("v6only.corp.example", &["2001:db8::5"]),
    )
}

fn bindings() -> PacBindings {
    PacBindings::at(corp_network(), wednesday_noon())
}

fn call(bindings: &PacBindings, name: &str, args: &[&str]) -> PacValue {
    let args: Vec<PacValue> = args.iter().map(|arg| PacValue::from(*arg)).collect();
    bindings.invoke(name, &args)
}

/*************************************************************
                Name and domain predicates
**************************************************************/

#[test]
fn plain_host_names_have_no_dots() {
    let bindings = bindings();
    assert_eq!(call(&bindings, "isPlainHostName", &["intranet"]), PacValue::Bool(true));
    assert_eq!(
        call(&bindings, "isPlainHostName", &["www.example.com"]),
        PacValue::Bool(false)
    );
}

#[test]
fn domain_suffix_and_levels() {
    let bindings = bindings();
    assert_eq!(
        call(&bindings, "dnsDomainIs", &["www.example.com", ".example.com"]),
        PacValue::Bool(true)
    );
    assert_eq!(
        call(&bindings, "dnsDomainIs", &["www.example.com", ".other.com"]),
        PacValue::Bool(false)
    );
    assert_eq!(
        call(&bindings, "dnsDomainIs", &["example.com", "example.com"]),
        PacValue::Bool(true)
    );
    assert_eq!(call(&bindings, "dnsDomainLevels", &["a.b.c"]), PacValue::Number(2.0));
    assert_eq!(call(&bindings, "dnsDomainLevels", &["a"]), PacValue::Number(0.0));
}

#[test]
fn local_host_or_domain_accepts_short_names() {
    let bindings = bindings();
    assert_eq!(
        call(&bindings, "localHostOrDomainIs", &["www", "www.netscape.com"]),
        PacValue::Bool(true)
    );
    assert_eq!(
        call(
            &bindings,
            "localHostOrDomainIs",
            &["www.netscape.com", "www.netscape.com"]
        ),
        PacValue::Bool(true)
    );
    assert_eq!(
        call(
            &bindings,
            "localHostOrDomainIs",
            &["www.mcom.com", "www.netscape.com"]
        ),
        PacValue::Bool(false)
    );
}

#[test]
fn shell_expressions_match_urls() {
    let bindings = bindings();
    assert_eq!(
        call(&bindings, "shExpMatch", &["http://host/dir/file.html", "*/dir/*"]),
        PacValue::Bool(true)
    );
    assert_eq!(call(&bindings, "shExpMatch", &["abc", "a?c"]), PacValue::Bool(true));
    assert_eq!(call(&bindings, "shExpMatch", &["abc", "a??"]), PacValue::Bool(false));
}

/*************************************************************
              Resolution-dependent predicates
**************************************************************/

#[test]
fn resolution_answers_and_sentinels() {
    let bindings = bindings();
    assert_eq!(call(&bindings, "isResolvable", &["intranet"]), PacValue::Bool(true));
    assert_eq!(
        call(&bindings, "isResolvable", &["v6only.corp.example"]),
        PacValue::Bool(false)
    );
    assert_eq!(
        call(&bindings, "isResolvableEx", &["v6only.corp.example"]),
        PacValue::Bool(true)
    );
    assert_eq!(call(&bindings, "isResolvable", &["no.such.host"]), PacValue::Bool(false));

    assert_eq!(call(&bindings, "dnsResolve", &["intranet"]), PacValue::from("10.1.2.3"));
    assert_eq!(call(&bindings, "dnsResolve", &["no.such.host"]), PacValue::from(""));
    assert_eq!(
        call(&bindings, "dnsResolveEx", &["dual.corp.example"]),
        PacValue::from("10.7.0.9;3ffe:8311:ffff::9")
    );
    assert_eq!(call(&bindings, "dnsResolveEx", &["no.such.host"]), PacValue::from(""));
}

#[test]
fn literals_bypass_the_table() {
    let bindings = bindings();
    assert_eq!(call(&bindings, "dnsResolve", &["172.16.9.9"]), PacValue::from("172.16.9.9"));
    assert_eq!(call(&bindings, "dnsResolve", &["2001:db8::5"]), PacValue::from(""));
}

#[test]
fn masked_net_membership() {
    let bindings = bindings();
    assert_eq!(
        call(&bindings, "isInNet", &["192.168.1.10", "192.168.1.0", "255.255.255.0"]),
        PacValue::Bool(true)
    );
    assert_eq!(
        call(&bindings, "isInNet", &["192.168.2.10", "192.168.1.0", "255.255.255.0"]),
        PacValue::Bool(false)
    );
    // Membership follows the resolved address of the host.
    assert_eq!(
        call(&bindings, "isInNet", &["intranet", "10.0.0.0", "255.0.0.0"]),
        PacValue::Bool(true)
    );
    assert_eq!(
        call(&bindings, "isInNet", &["no.such.host", "10.0.0.0", "255.0.0.0"]),
        PacValue::Bool(false)
    );
}

#[test]
fn prefix_membership_spans_families() {
    let bindings = bindings();
    assert_eq!(
        call(&bindings, "isInNetEx", &["dual.corp.example", "3ffe:8311:ffff::/48"]),
        PacValue::Bool(true)
    );
    assert_eq!(
        call(&bindings, "isInNetEx", &["v6only.corp.example", "10.0.0.0/8"]),
        PacValue::Bool(false)
    );
    // Any prefix in the list may match.
    assert_eq!(
        call(
            &bindings,
            "isInNetEx",
            &["intranet", "172.16.0.0/12,10.0.0.0/8"]
        ),
        PacValue::Bool(true)
    );
    assert_eq!(
        call(&bindings, "isInNetEx", &["no.such.host", "10.0.0.0/8"]),
        PacValue::Bool(false)
    );
}

#[test]
fn own_addresses_come_from_the_provider() {
    let bindings = bindings();
    assert_eq!(call(&bindings, "myIpAddress", &[]), PacValue::from("192.168.1.42"));
    assert_eq!(
        call(&bindings, "myIpAddressEx", &[]),
        PacValue::from("192.168.1.42;fe80::36cf:f6ff:fe9a:1122")
    );
}

#[test]
fn address_lists_sort_and_survive_garbage() {
    let bindings = bindings();
    assert_eq!(
        call(&bindings, "sortIpAddressList", &["10.0.0.5;10.0.0.1"]),
        PacValue::from("10.0.0.1;10.0.0.5")
    );
    assert_eq!(
        call(
            &bindings,
            "sortIpAddressList",
            &["10.2.3.9;2001:4898:28:3:201:2ff:feea:fc14;::1;garbage"]
        ),
        PacValue::from("::1;2001:4898:28:3:201:2ff:feea:fc14;10.2.3.9")
    );
    // Idempotent.
    assert_eq!(
        call(&bindings, "sortIpAddressList", &["10.0.0.1;10.0.0.5"]),
        PacValue::from("10.0.0.1;10.0.0.5")
    );
}

#[test]
fn client_version_is_fixed() {
    let bindings = bindings();
    assert_eq!(call(&bindings, "getClientVersion", &[]), PacValue::from("1.0"));
}

/*************************************************************
                  Temporal predicates
**************************************************************/

#[test]
fn weekday_ranges_at_a_fixed_instant() {
    let wednesday = bindings();
    assert_eq!(
        call(&wednesday, "weekdayRange", &["MON", "FRI", "GMT"]),
        PacValue::Bool(true)
    );
    assert_eq!(call(&wednesday, "weekdayRange", &["WED", "GMT"]), PacValue::Bool(true));

    // 2026-08-09 is a Sunday.
    let sunday = PacBindings::at(corp_network(), Utc.with_ymd_and_hms(2026, 8, 9, 9, 0, 0).unwrap());
    assert_eq!(
        call(&sunday, "weekdayRange", &["MON", "FRI", "GMT"]),
        PacValue::Bool(false)
    );
    // Wrapped span: Friday through Monday includes Sunday.
    assert_eq!(
        call(&sunday, "weekdayRange", &["FRI", "MON", "GMT"]),
        PacValue::Bool(true)
    );
}

#[test]
fn date_ranges_at_a_fixed_instant() {
    let feb_first = PacBindings::at(
        corp_network(),
        Utc.with_ymd_and_hms(2027, 2, 1, 8, 0, 0).unwrap(),
    );
    let args = [PacValue::Number(1.0), PacValue::Number(2.0), PacValue::from("GMT")];
    assert_eq!(feb_first.invoke("dateRange", &args), PacValue::Bool(true));

    let feb_second = PacBindings::at(
        corp_network(),
        Utc.with_ymd_and_hms(2027, 2, 2, 8, 0, 0).unwrap(),
    );
    assert_eq!(feb_second.invoke("dateRange", &args), PacValue::Bool(false));
}

#[test]
fn time_ranges_wrap_midnight() {
    let noon = bindings();
    let night_shift: Vec<PacValue> = [22.0, 0.0, 0.0, 6.0, 0.0, 0.0]
        .iter()
        .map(|n| PacValue::Number(*n))
        .chain(std::iter::once(PacValue::from("GMT")))
        .collect();
    assert_eq!(noon.invoke("timeRange", &night_shift), PacValue::Bool(false));

    let two_am = PacBindings::at(
        corp_network(),
        Utc.with_ymd_and_hms(2026, 8, 5, 2, 0, 0).unwrap(),
    );
    assert_eq!(two_am.invoke("timeRange", &night_shift), PacValue::Bool(true));
}

#[test]
fn lowercase_gmt_is_not_a_zone_marker() {
    let wednesday = bindings();
    assert_eq!(call(&wednesday, "weekdayRange", &["WED", "GMT"]), PacValue::Bool(true));
    // "gmt" is taken for a weekday name and rejected.
    assert_eq!(call(&wednesday, "weekdayRange", &["WED", "gmt"]), PacValue::Bool(false));
}

#[test]
fn one_evaluation_sees_one_instant() {
    // 23:59:59 UTC: a naive second clock read would cross the day.
    let bindings = PacBindings::at(
        corp_network(),
        Utc.with_ymd_and_hms(2026, 8, 5, 23, 59, 59).unwrap(),
    );
    assert_eq!(call(&bindings, "weekdayRange", &["WED", "GMT"]), PacValue::Bool(true));
    assert_eq!(
        call(&bindings, "timeRange", &["23", "GMT"]),
        PacValue::Bool(true)
    );
    assert_eq!(
        call(&bindings, "dateRange", &["5", "8", "2026", "GMT"]),
        PacValue::Bool(true)
    );
}

/*************************************************************
                 Boundary behaviour
**************************************************************/

#[test]
fn unknown_names_yield_undefined() {
    let bindings = bindings();
    assert_eq!(call(&bindings, "findProxyForURL", &["x"]), PacValue::Undefined);
    assert_eq!(call(&bindings, "", &[]), PacValue::Undefined);
}

#[test]
fn declared_surface_is_complete() {
    let names: Vec<&str> = FUNCTIONS.iter().map(|(name, _)| *name).collect();
    for required in [
        "isPlainHostName",
        "dnsDomainIs",
        "localHostOrDomainIs",
        "isResolvable",
        "isInNet",
        "dnsResolve",
        "myIpAddress",
        "dnsDomainLevels",
        "shExpMatch",
        "weekdayRange",
        "dateRange",
        "timeRange",
        "isResolvableEx",
        "isInNetEx",
        "dnsResolveEx",
        "myIpAddressEx",
        "sortIpAddressList",
        "getClientVersion",
        "alert",
    ] {
        assert!(names.contains(&required), "missing {required}");
    }
    assert_eq!(names.len(), 19);
}

#[test]
fn faults_never_escape_as_errors() {
    let bindings = bindings();
    // Wrong types, wrong arity, malformed patterns: sentinels throughout.
    assert_eq!(
        bindings.invoke("isInNet", &[PacValue::Bool(true)]),
        PacValue::Bool(false)
    );
    assert_eq!(
        call(&bindings, "isInNet", &["10.0.0.1", "not-a-net", "also-not-a-mask"]),
        PacValue::Bool(false)
    );
    assert_eq!(
        call(&bindings, "isInNetEx", &["intranet", "bogus-prefix"]),
        PacValue::Bool(false)
    );
    assert_eq!(call(&bindings, "dateRange", &["32", "GMT"]), PacValue::Bool(false));
    assert_eq!(call(&bindings, "timeRange", &[]), PacValue::Bool(false));
    assert_eq!(call(&bindings, "dnsResolve", &[]), PacValue::from(""));
}

#[test]
fn alerts_reach_the_sink() {
    let helpers = corp_network();
    let bindings = PacBindings::at(helpers.clone(), wednesday_noon());
    assert_eq!(
        bindings.invoke("alert", &[PacValue::from("fell through to DIRECT")]),
        PacValue::Undefined
    );
    let alerts = helpers.alerts.lock().unwrap();
    assert_eq!(*alerts, vec!["fell through to DIRECT"]);
}
