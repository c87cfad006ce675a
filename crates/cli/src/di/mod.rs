use dualdial_application::services::ZoneMapper;
use dualdial_application::use_cases::ResolveAddrsUseCase;
use dualdial_domain::Config;
use dualdial_infrastructure::dns::SystemIpLookup;
use dualdial_infrastructure::net::{ServicePortParser, StdLiteralIpParser};
use dualdial_infrastructure::system::{probe_capabilities, SystemInterfaceDirectory};
use std::sync::Arc;
use tracing::debug;

pub struct Services {
    pub resolve_addrs: Arc<ResolveAddrsUseCase>,
    pub zones: Arc<ZoneMapper>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let zones = Arc::new(ZoneMapper::new(Arc::new(SystemInterfaceDirectory)));
        let caps = config.platform.apply(probe_capabilities());
        debug!(
            ipv4 = caps.ipv4,
            ipv6 = caps.ipv6,
            ipv4_mapped = caps.ipv4_mapped,
            "Effective platform capabilities"
        );

        let resolve_addrs = Arc::new(ResolveAddrsUseCase::new(
            Arc::new(SystemIpLookup::new(zones.clone())),
            Arc::new(ServicePortParser),
            Arc::new(StdLiteralIpParser),
            caps,
        ));

        Self {
            resolve_addrs,
            zones,
        }
    }
}
