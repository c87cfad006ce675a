use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// A resolved IP address with an optional IPv6 zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpRecord {
    pub ip: IpAddr,
    pub zone: Option<Arc<str>>,
}

impl IpRecord {
    pub fn new(ip: IpAddr) -> Self {
        Self { ip, zone: None }
    }

    /// An empty zone is the same as no zone.
    pub fn with_zone(ip: IpAddr, zone: &str) -> Self {
        let zone = (!zone.is_empty()).then(|| Arc::from(zone));
        Self { ip, zone }
    }

    pub fn unspecified_v4() -> Self {
        Self::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
    }

    pub fn unspecified_v6() -> Self {
        Self::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED))
    }

    pub fn zone_str(&self) -> &str {
        self.zone.as_deref().unwrap_or("")
    }

    /// The IPv4 form of this address: plain IPv4, or IPv4-mapped IPv6.
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        match self.ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        }
    }

    /// True for a 16-byte address that is not IPv4-mapped.
    pub fn is_native_ipv6(&self) -> bool {
        matches!(self.ip, IpAddr::V6(v6) if v6.to_ipv4_mapped().is_none())
    }
}

impl From<IpAddr> for IpRecord {
    fn from(ip: IpAddr) -> Self {
        Self::new(ip)
    }
}

impl fmt::Display for IpRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.zone {
            Some(zone) => write!(f, "{}%{}", self.ip, zone),
            None => write!(f, "{}", self.ip),
        }
    }
}
