use crate::ports::{IpLookup, LiteralIpParser, PortParser};
use dualdial_domain::{
    split_host_port, AddrTagger, DomainError, Endpoint, FamilyRestriction, IpRecord, Network,
    PlatformCapabilities, TaggedAddrList,
};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::debug;

/// Turns `network` + address text into a tagged endpoint list.
pub struct ResolveAddrsUseCase {
    lookup: Arc<dyn IpLookup>,
    ports: Arc<dyn PortParser>,
    literals: Arc<dyn LiteralIpParser>,
    tagger: AddrTagger,
}

impl ResolveAddrsUseCase {
    pub fn new(
        lookup: Arc<dyn IpLookup>,
        ports: Arc<dyn PortParser>,
        literals: Arc<dyn LiteralIpParser>,
        caps: PlatformCapabilities,
    ) -> Self {
        Self {
            lookup,
            ports,
            literals,
            tagger: AddrTagger::new(caps),
        }
    }

    /// Resolves `addr` for `network`.
    ///
    /// Literal IP hosts and the empty (wildcard) host yield a single endpoint
    /// without touching DNS. Names are looked up once before `deadline`; the
    /// result contains at least one endpoint when no error is returned.
    pub async fn execute(
        &self,
        network: &str,
        addr: &str,
        deadline: Instant,
    ) -> Result<TaggedAddrList<Endpoint>, DomainError> {
        let network: Network = network.parse()?;

        let (host, port) = if !network.has_port() {
            (addr, 0)
        } else if addr.is_empty() {
            ("", 0)
        } else {
            let (host, port) = split_host_port(addr)?;
            (host, self.ports.parse_port(network, port)?)
        };

        let construct = |record: &IpRecord| network.endpoint(record, port);

        if host.is_empty() {
            let wildcard = match network.family() {
                Some(FamilyRestriction::Ipv6) => IpRecord::unspecified_v6(),
                _ => IpRecord::unspecified_v4(),
            };
            return Ok(TaggedAddrList::from_single(construct(&wildcard)));
        }

        if let Some(record) = self.literals.parse_ipv4(host) {
            return Ok(TaggedAddrList::from_single(construct(&record)));
        }
        if let Some(record) = self.literals.parse_ipv6(host, true) {
            return Ok(TaggedAddrList::from_single(construct(&record)));
        }

        let records = self.lookup.lookup_ip(host, deadline).await?;
        debug!(
            host = %host,
            network = %network,
            records = records.len(),
            "Host resolved"
        );

        let tagger = self.tagger;
        let ipv4_only = |record: &IpRecord| tagger.is_ipv4_only(record);
        let ipv6_only = |record: &IpRecord| tagger.is_ipv6_only(record);
        let filter: Option<&dyn Fn(&IpRecord) -> bool> = match network.family() {
            Some(FamilyRestriction::Ipv4) => Some(&ipv4_only),
            Some(FamilyRestriction::Ipv6) => Some(&ipv6_only),
            None => None,
        };

        let addrs = tagger.tag(filter, &records, construct)?;
        debug!(
            host = %host,
            primaries = addrs.primaries().len(),
            fallbacks = addrs.fallbacks().len(),
            single = %addrs.single(),
            "Addresses tagged"
        );
        Ok(addrs)
    }
}
