use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::DomainError;
use crate::host_port::join_host_port;
use crate::ip_record::IpRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Tcp,
    Tcp4,
    Tcp6,
    Udp,
    Udp4,
    Udp6,
    Ip,
    Ip4,
    Ip6,
}

/// Address family restriction implied by a network name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyRestriction {
    Ipv4,
    Ipv6,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Tcp => "tcp",
            Network::Tcp4 => "tcp4",
            Network::Tcp6 => "tcp6",
            Network::Udp => "udp",
            Network::Udp4 => "udp4",
            Network::Udp6 => "udp6",
            Network::Ip => "ip",
            Network::Ip4 => "ip4",
            Network::Ip6 => "ip6",
        }
    }

    /// TCP and UDP networks carry a port; raw IP networks do not.
    pub fn has_port(&self) -> bool {
        !matches!(self, Network::Ip | Network::Ip4 | Network::Ip6)
    }

    pub fn is_tcp(&self) -> bool {
        matches!(self, Network::Tcp | Network::Tcp4 | Network::Tcp6)
    }

    pub fn is_udp(&self) -> bool {
        matches!(self, Network::Udp | Network::Udp4 | Network::Udp6)
    }

    pub fn family(&self) -> Option<FamilyRestriction> {
        match self.as_str().as_bytes().last() {
            Some(b'4') => Some(FamilyRestriction::Ipv4),
            Some(b'6') => Some(FamilyRestriction::Ipv6),
            _ => None,
        }
    }

    /// Builds the endpoint for `record` on this network.
    pub fn endpoint(&self, record: &IpRecord, port: u16) -> Endpoint {
        let socket = SocketEndpoint {
            ip: record.ip,
            port,
            zone: record.zone.clone(),
        };
        if self.is_tcp() {
            Endpoint::Tcp(socket)
        } else if self.is_udp() {
            Endpoint::Udp(socket)
        } else {
            Endpoint::Ip(record.clone())
        }
    }
}

impl FromStr for Network {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Network::Tcp),
            "tcp4" => Ok(Network::Tcp4),
            "tcp6" => Ok(Network::Tcp6),
            "udp" => Ok(Network::Udp),
            "udp4" => Ok(Network::Udp4),
            "udp6" => Ok(Network::Udp6),
            "ip" => Ok(Network::Ip),
            "ip4" => Ok(Network::Ip4),
            "ip6" => Ok(Network::Ip6),
            _ => Err(DomainError::UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SocketEndpoint {
    pub ip: IpAddr,
    pub port: u16,
    pub zone: Option<Arc<str>>,
}

impl fmt::Display for SocketEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = match &self.zone {
            Some(zone) => format!("{}%{}", self.ip, zone),
            None => self.ip.to_string(),
        };
        f.write_str(&join_host_port(&host, &self.port.to_string()))
    }
}

/// A connectable address for one of the supported networks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Tcp(SocketEndpoint),
    Udp(SocketEndpoint),
    Ip(IpRecord),
}

impl Endpoint {
    pub fn ip(&self) -> IpAddr {
        match self {
            Endpoint::Tcp(s) | Endpoint::Udp(s) => s.ip,
            Endpoint::Ip(r) => r.ip,
        }
    }

    pub fn port(&self) -> Option<u16> {
        match self {
            Endpoint::Tcp(s) | Endpoint::Udp(s) => Some(s.port),
            Endpoint::Ip(_) => None,
        }
    }

    pub fn zone(&self) -> Option<&str> {
        match self {
            Endpoint::Tcp(s) | Endpoint::Udp(s) => s.zone.as_deref(),
            Endpoint::Ip(r) => r.zone.as_deref(),
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Endpoint::Tcp(_) => "TCP",
            Endpoint::Udp(_) => "UDP",
            Endpoint::Ip(_) => "IP",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Tcp(s) | Endpoint::Udp(s) => write!(f, "{}", s),
            Endpoint::Ip(r) => write!(f, "{}", r),
        }
    }
}
