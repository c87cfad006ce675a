use dualdial_application::ports::LiteralIpParser;
use dualdial_domain::{split_host_zone, IpRecord};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// IP literal parsing.
///
/// IPv4 accepts dotted-quad only, each field read as decimal so leading
/// zeros never switch to octal (`010.0.0.1` is `10.0.0.1`). IPv6 accepts every RFC 4291 text form,
/// including an embedded dotted-quad tail, and an optional `%zone` suffix
/// when zones are allowed. An empty zone after `%` is dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdLiteralIpParser;

impl LiteralIpParser for StdLiteralIpParser {
    fn parse_ipv4(&self, text: &str) -> Option<IpRecord> {
        parse_dotted_decimal(text).map(|ip| IpRecord::new(IpAddr::V4(ip)))
    }

    fn parse_ipv6(&self, text: &str, allow_zone: bool) -> Option<IpRecord> {
        let (addr, zone) = if allow_zone {
            split_host_zone(text)
        } else {
            (text, "")
        };
        let ip: Ipv6Addr = addr.parse().ok()?;
        Some(IpRecord::with_zone(IpAddr::V6(ip), zone))
    }
}

fn parse_dotted_decimal(text: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut fields = text.split('.');
    for octet in &mut octets {
        let field = fields.next()?;
        if field.is_empty() || field.len() > 3 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = field.parse().ok()?;
    }
    fields.next().is_none().then(|| Ipv4Addr::from(octets))
}
