use serde::{Deserialize, Serialize};

use crate::capabilities::PlatformCapabilities;

/// Optional per-family overrides. `None` keeps what the stack probe found.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub ipv4: Option<bool>,

    #[serde(default)]
    pub ipv6: Option<bool>,
}

impl PlatformConfig {
    /// Narrows probed capabilities. An override can switch a family off but
    /// never enables one the platform lacks.
    pub fn apply(&self, probed: PlatformCapabilities) -> PlatformCapabilities {
        let ipv4 = probed.ipv4 && self.ipv4.unwrap_or(true);
        let ipv6 = probed.ipv6 && self.ipv6.unwrap_or(true);
        PlatformCapabilities {
            ipv4,
            ipv6,
            ipv4_mapped: probed.ipv4_mapped && ipv4 && ipv6,
        }
    }
}
