use async_trait::async_trait;
use dualdial_application::ports::IpLookup;
use dualdial_application::services::ZoneMapper;
use dualdial_domain::{DomainError, IpRecord};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Resolves host names through the operating system resolver.
pub struct SystemIpLookup {
    zones: Arc<ZoneMapper>,
}

impl SystemIpLookup {
    pub fn new(zones: Arc<ZoneMapper>) -> Self {
        Self { zones }
    }

    fn to_record(&self, addr: SocketAddr) -> IpRecord {
        match addr {
            SocketAddr::V4(v4) => IpRecord::new(IpAddr::V4(*v4.ip())),
            SocketAddr::V6(v6) => {
                IpRecord::with_zone(IpAddr::V6(*v6.ip()), &self.zones.zone_to_name(v6.scope_id()))
            }
        }
    }
}

#[async_trait]
impl IpLookup for SystemIpLookup {
    async fn lookup_ip(
        &self,
        host: &str,
        deadline: Instant,
    ) -> Result<Vec<IpRecord>, DomainError> {
        let addrs = tokio::time::timeout_at(deadline, tokio::net::lookup_host((host, 0)))
            .await
            .map_err(|_| {
                warn!(host = %host, "Lookup deadline exceeded");
                DomainError::LookupTimeout {
                    host: host.to_string(),
                }
            })?
            .map_err(|e| {
                debug!(host = %host, error = %e, "Lookup failed");
                DomainError::LookupFailed {
                    host: host.to_string(),
                    reason: e.to_string(),
                }
            })?;

        // The resolver returns one entry per socket type; keep the first of each.
        let mut records: Vec<IpRecord> = Vec::new();
        for addr in addrs {
            let record = self.to_record(addr);
            if !records.contains(&record) {
                records.push(record);
            }
        }

        if records.is_empty() {
            return Err(DomainError::NoAddresses(host.to_string()));
        }

        debug!(host = %host, count = records.len(), "System lookup complete");
        Ok(records)
    }
}
