use dualdial_domain::{DomainError, Network};

/// Converts a port string (number or service name) for a given network.
pub trait PortParser: Send + Sync {
    fn parse_port(&self, network: Network, port: &str) -> Result<u16, DomainError>;
}
