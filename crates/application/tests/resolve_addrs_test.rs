mod helpers;

use dualdial_application::use_cases::ResolveAddrsUseCase;
use dualdial_domain::{AddrError, DomainError, Endpoint, PlatformCapabilities};
use helpers::mock_ports::{MockIpLookup, MockLiteralParser, MockPortParser};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn use_case(lookup: &MockIpLookup, caps: PlatformCapabilities) -> ResolveAddrsUseCase {
    ResolveAddrsUseCase::new(
        Arc::new(lookup.clone()),
        Arc::new(MockPortParser),
        Arc::new(MockLiteralParser),
        caps,
    )
}

fn deadline() -> Instant {
    Instant::now() + Duration::from_secs(5)
}

fn render(endpoints: Vec<&Endpoint>) -> Vec<String> {
    endpoints.iter().map(|e| e.to_string()).collect()
}

fn dual_stack_lookup() -> MockIpLookup {
    let lookup = MockIpLookup::new();
    lookup.set_records("dual.example", &["2001:db8::1", "192.0.2.1", "2001:db8::2", "192.0.2.2"]);
    lookup
}

#[tokio::test]
async fn test_literal_ipv4_skips_lookup() {
    let lookup = MockIpLookup::new();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let addrs = uc.execute("tcp", "127.0.0.1:80", deadline()).await.unwrap();

    assert_eq!(addrs.len(), 1);
    assert_eq!(addrs.single().to_string(), "127.0.0.1:80");
    assert!(addrs.fallbacks().is_empty());
    assert_eq!(lookup.calls(), 0);
}

#[tokio::test]
async fn test_literal_ipv6_with_zone_skips_lookup() {
    let lookup = MockIpLookup::new();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let addrs = uc
        .execute("udp6", "[fe80::1%eth0]:domain", deadline())
        .await
        .unwrap();

    let single = addrs.single();
    assert!(matches!(single, Endpoint::Udp(_)));
    assert_eq!(single.zone(), Some("eth0"));
    assert_eq!(single.port(), Some(53));
    assert_eq!(lookup.calls(), 0);
}

#[tokio::test]
async fn test_literal_is_not_filtered_by_family() {
    let lookup = MockIpLookup::new();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    // Literals short-circuit before the family filter is chosen.
    let addrs = uc.execute("tcp6", "127.0.0.1:80", deadline()).await.unwrap();
    assert_eq!(addrs.single().to_string(), "127.0.0.1:80");
}

#[tokio::test]
async fn test_wildcard_address() {
    let lookup = MockIpLookup::new();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let addrs = uc.execute("tcp", "", deadline()).await.unwrap();
    assert_eq!(addrs.single().to_string(), "0.0.0.0:0");

    let addrs = uc.execute("udp", ":8080", deadline()).await.unwrap();
    assert_eq!(addrs.single().to_string(), "0.0.0.0:8080");

    let addrs = uc.execute("tcp6", ":443", deadline()).await.unwrap();
    assert_eq!(addrs.single().to_string(), "[::]:443");

    let addrs = uc.execute("ip", "", deadline()).await.unwrap();
    assert_eq!(addrs.single().to_string(), "0.0.0.0");
    assert_eq!(lookup.calls(), 0);
}

#[tokio::test]
async fn test_dns_name_is_tagged() {
    let lookup = dual_stack_lookup();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());
    let deadline = deadline();

    let addrs = uc.execute("tcp", "dual.example:http", deadline).await.unwrap();

    assert_eq!(addrs.single().to_string(), "192.0.2.1:80");
    assert_eq!(
        render(addrs.primaries()),
        vec!["[2001:db8::1]:80", "[2001:db8::2]:80"]
    );
    assert_eq!(render(addrs.fallbacks()), vec!["192.0.2.1:80", "192.0.2.2:80"]);
    assert_eq!(lookup.calls(), 1);
    assert_eq!(lookup.last_deadline(), Some(deadline));
}

#[tokio::test]
async fn test_network_suffix_filters_family() {
    let lookup = dual_stack_lookup();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let addrs = uc.execute("tcp4", "dual.example:80", deadline()).await.unwrap();
    assert_eq!(render(addrs.all()), vec!["192.0.2.1:80", "192.0.2.2:80"]);
    assert!(addrs.fallbacks().is_empty());

    let addrs = uc.execute("udp6", "dual.example:80", deadline()).await.unwrap();
    assert_eq!(render(addrs.all()), vec!["[2001:db8::1]:80", "[2001:db8::2]:80"]);
    assert_eq!(addrs.single().to_string(), "[2001:db8::1]:80");
}

#[tokio::test]
async fn test_raw_ip_network_uses_whole_address_as_host() {
    let lookup = dual_stack_lookup();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let addrs = uc.execute("ip4", "dual.example", deadline()).await.unwrap();
    assert_eq!(render(addrs.all()), vec!["192.0.2.1", "192.0.2.2"]);
    assert!(addrs.all().iter().all(|e| e.port().is_none()));

    let addrs = uc.execute("ip", "::1", deadline()).await.unwrap();
    assert_eq!(addrs.single().to_string(), "::1");
}

#[tokio::test]
async fn test_platform_capabilities_limit_results() {
    let lookup = dual_stack_lookup();
    let uc = use_case(&lookup, PlatformCapabilities::ipv6_only());

    let addrs = uc.execute("tcp", "dual.example:80", deadline()).await.unwrap();
    assert_eq!(addrs.single().to_string(), "[2001:db8::1]:80");
    assert_eq!(addrs.len(), 2);

    let result = uc.execute("tcp4", "dual.example:80", deadline()).await;
    assert_eq!(result.unwrap_err(), DomainError::NoSuitableAddress);
}

#[tokio::test]
async fn test_unknown_network_fails_first() {
    let lookup = dual_stack_lookup();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let result = uc.execute("sctp", "not a valid address", deadline()).await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::UnknownNetwork("sctp".to_string())
    );
    assert_eq!(lookup.calls(), 0);
}

#[tokio::test]
async fn test_address_grammar_error_propagates() {
    let lookup = MockIpLookup::new();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let result = uc.execute("tcp", "fe80::1%eth0:80", deadline()).await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Addr(AddrError::TooManyColons("fe80::1%eth0:80".to_string()))
    );

    let result = uc.execute("udp", "localhost", deadline()).await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Addr(AddrError::MissingPort("localhost".to_string()))
    );
}

#[tokio::test]
async fn test_port_error_propagates() {
    let lookup = MockIpLookup::new();
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let result = uc.execute("tcp", "127.0.0.1:gopher", deadline()).await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::InvalidPort {
            network: "tcp".to_string(),
            port: "gopher".to_string(),
        }
    );

    let result = uc.execute("tcp", "127.0.0.1:", deadline()).await;
    assert!(matches!(result, Err(DomainError::InvalidPort { .. })));
}

#[tokio::test]
async fn test_lookup_error_propagates_unchanged() {
    let lookup = MockIpLookup::new();
    lookup.set_error(
        "slow.example",
        DomainError::LookupTimeout {
            host: "slow.example".to_string(),
        },
    );
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let err = uc
        .execute("tcp", "slow.example:80", deadline())
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    assert_eq!(lookup.calls(), 1);
}

#[tokio::test]
async fn test_empty_lookup_result_is_no_suitable_address() {
    let lookup = MockIpLookup::new();
    lookup.set_records("empty.example", &[]);
    let uc = use_case(&lookup, PlatformCapabilities::dual_stack());

    let result = uc.execute("tcp", "empty.example:80", deadline()).await;
    assert_eq!(result.unwrap_err(), DomainError::NoSuitableAddress);
}
