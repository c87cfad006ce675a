/// What the local network stack can do, established once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    pub ipv4: bool,
    pub ipv6: bool,
    /// IPv4 addresses can be mapped inside IPv6 at the transport layer
    /// (RFC 4291, RFC 4038, RFC 3493).
    ///
    /// Informational only: reported by the stack probe and logged, but
    /// tagging treats IPv4-mapped records as IPv4 whatever its value.
    pub ipv4_mapped: bool,
}

impl PlatformCapabilities {
    pub const fn dual_stack() -> Self {
        Self {
            ipv4: true,
            ipv6: true,
            ipv4_mapped: true,
        }
    }

    pub const fn ipv4_only() -> Self {
        Self {
            ipv4: true,
            ipv6: false,
            ipv4_mapped: false,
        }
    }

    pub const fn ipv6_only() -> Self {
        Self {
            ipv4: false,
            ipv6: true,
            ipv4_mapped: false,
        }
    }
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::dual_stack()
    }
}
