use dualdial_application::ports::PortParser;
use dualdial_domain::{DomainError, Network};

const TCP_SERVICES: &[(&str, u16)] = &[
    ("echo", 7),
    ("ftp-data", 20),
    ("ftp", 21),
    ("ssh", 22),
    ("telnet", 23),
    ("smtp", 25),
    ("domain", 53),
    ("gopher", 70),
    ("http", 80),
    ("pop3", 110),
    ("imap2", 143),
    ("imap3", 220),
    ("https", 443),
    ("submission", 587),
    ("ftps", 990),
    ("imaps", 993),
    ("pop3s", 995),
];

const UDP_SERVICES: &[(&str, u16)] = &[
    ("echo", 7),
    ("domain", 53),
    ("bootps", 67),
    ("bootpc", 68),
    ("tftp", 69),
    ("ntp", 123),
    ("snmp", 161),
    ("syslog", 514),
    ("mdns", 5353),
];

/// Decimal ports, falling back to a built-in service name table.
#[derive(Debug, Default, Clone, Copy)]
pub struct ServicePortParser;

impl ServicePortParser {
    fn lookup_service(network: Network, service: &str) -> Option<u16> {
        let table = if network.is_tcp() {
            TCP_SERVICES
        } else if network.is_udp() {
            UDP_SERVICES
        } else {
            return None;
        };
        table
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(service))
            .map(|(_, port)| *port)
    }
}

impl PortParser for ServicePortParser {
    fn parse_port(&self, network: Network, port: &str) -> Result<u16, DomainError> {
        let invalid = || DomainError::InvalidPort {
            network: network.to_string(),
            port: port.to_string(),
        };

        if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) {
            return port.parse::<u16>().map_err(|_| invalid());
        }

        Self::lookup_service(network, port).ok_or_else(invalid)
    }
}
