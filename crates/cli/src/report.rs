use dualdial_application::services::ZoneMapper;
use dualdial_domain::{Endpoint, TaggedAddrList};

/// One line per endpoint: single marker, Happy Eyeballs class, protocol,
/// endpoint, and the interface index for zoned addresses.
pub fn render(addrs: &TaggedAddrList<Endpoint>, zones: &ZoneMapper) -> String {
    let mut out = String::new();
    for entry in addrs {
        let single = if entry.single { "single" } else { "" };
        let class = if entry.fallback { "fallback" } else { "primary" };
        out.push_str(&format!(
            "{:<6}  {:<8}  {:<3}  {}",
            single,
            class,
            entry.endpoint.protocol_name(),
            entry.endpoint
        ));
        if let Some(zone) = entry.endpoint.zone() {
            out.push_str(&format!("  (if {})", zones.zone_to_index(zone)));
        }
        out.push('\n');
    }
    out
}
