use dualdial_domain::IpRecord;

/// Strict parsers for textual IP literals.
pub trait LiteralIpParser: Send + Sync {
    fn parse_ipv4(&self, text: &str) -> Option<IpRecord>;

    /// Parses an IPv6 literal, optionally followed by `%zone`.
    fn parse_ipv6(&self, text: &str, allow_zone: bool) -> Option<IpRecord>;
}
