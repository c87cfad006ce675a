use dualdial_domain::PlatformCapabilities;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tracing::{debug, info};

/// Probes which address families the host stack supports by binding
/// throwaway TCP sockets to loopback.
pub fn probe_capabilities() -> PlatformCapabilities {
    let ipv4 = try_bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)), None);
    let ipv6 = try_bind(SocketAddr::from((Ipv6Addr::LOCALHOST, 0)), Some(true));
    let ipv4_mapped = try_bind(
        SocketAddr::from((Ipv4Addr::LOCALHOST.to_ipv6_mapped(), 0)),
        Some(false),
    );

    let caps = PlatformCapabilities {
        ipv4,
        ipv6,
        ipv4_mapped,
    };
    info!(
        ipv4 = caps.ipv4,
        ipv6 = caps.ipv6,
        ipv4_mapped = caps.ipv4_mapped,
        "Probed platform stack"
    );
    caps
}

fn try_bind(addr: SocketAddr, only_v6: Option<bool>) -> bool {
    let bind = || -> std::io::Result<()> {
        let domain = if addr.is_ipv4() {
            Domain::IPV4
        } else {
            Domain::IPV6
        };
        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
        if let Some(only_v6) = only_v6 {
            socket.set_only_v6(only_v6)?;
        }
        socket.bind(&addr.into())
    };

    match bind() {
        Ok(()) => true,
        Err(e) => {
            debug!(addr = %addr, error = %e, "Stack probe bind failed");
            false
        }
    }
}
