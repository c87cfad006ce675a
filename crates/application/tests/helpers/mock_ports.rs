#![allow(dead_code)]

use async_trait::async_trait;
use dualdial_application::ports::{InterfaceDirectory, IpLookup, LiteralIpParser, PortParser};
use dualdial_domain::{split_host_zone, DomainError, IpRecord, Network};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tokio::time::Instant;

#[derive(Clone, Default)]
pub struct MockIpLookup {
    responses: Arc<RwLock<HashMap<String, Result<Vec<IpRecord>, DomainError>>>>,
    calls: Arc<AtomicUsize>,
    last_deadline: Arc<RwLock<Option<Instant>>>,
}

impl MockIpLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_records(&self, host: &str, ips: &[&str]) {
        let records = ips
            .iter()
            .map(|ip| IpRecord::new(ip.parse::<IpAddr>().unwrap()))
            .collect();
        self.responses
            .write()
            .unwrap()
            .insert(host.to_string(), Ok(records));
    }

    pub fn set_error(&self, host: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(host.to_string(), Err(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_deadline(&self) -> Option<Instant> {
        *self.last_deadline.read().unwrap()
    }
}

#[async_trait]
impl IpLookup for MockIpLookup {
    async fn lookup_ip(
        &self,
        host: &str,
        deadline: Instant,
    ) -> Result<Vec<IpRecord>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_deadline.write().unwrap() = Some(deadline);
        self.responses
            .read()
            .unwrap()
            .get(host)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::LookupFailed {
                    host: host.to_string(),
                    reason: "no such host".to_string(),
                })
            })
    }
}

pub struct MockPortParser;

impl PortParser for MockPortParser {
    fn parse_port(&self, network: Network, port: &str) -> Result<u16, DomainError> {
        match port {
            "http" => Ok(80),
            "domain" => Ok(53),
            _ => port.parse::<u16>().map_err(|_| DomainError::InvalidPort {
                network: network.to_string(),
                port: port.to_string(),
            }),
        }
    }
}

pub struct MockLiteralParser;

impl LiteralIpParser for MockLiteralParser {
    fn parse_ipv4(&self, text: &str) -> Option<IpRecord> {
        text.parse::<Ipv4Addr>()
            .ok()
            .map(|ip| IpRecord::new(IpAddr::V4(ip)))
    }

    fn parse_ipv6(&self, text: &str, allow_zone: bool) -> Option<IpRecord> {
        let (host, zone) = if allow_zone {
            split_host_zone(text)
        } else {
            (text, "")
        };
        host.parse::<Ipv6Addr>()
            .ok()
            .map(|ip| IpRecord::with_zone(IpAddr::V6(ip), zone))
    }
}

#[derive(Default)]
pub struct MockInterfaceDirectory {
    interfaces: Vec<(u32, String)>,
}

impl MockInterfaceDirectory {
    pub fn with_interfaces(interfaces: &[(u32, &str)]) -> Self {
        Self {
            interfaces: interfaces
                .iter()
                .map(|(index, name)| (*index, name.to_string()))
                .collect(),
        }
    }
}

impl InterfaceDirectory for MockInterfaceDirectory {
    fn index_by_name(&self, name: &str) -> Option<u32> {
        self.interfaces
            .iter()
            .find(|(_, n)| n == name)
            .map(|(index, _)| *index)
    }

    fn name_by_index(&self, index: u32) -> Option<String> {
        self.interfaces
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, name)| name.clone())
    }
}
