use crate::ports::InterfaceDirectory;
use std::sync::Arc;

// Numeric zones at or above this are treated as invalid.
const MAX_NUMERIC_ZONE: u32 = 0xFF_FFFF;

/// Maps IPv6 zone identifiers to interface indexes and back.
pub struct ZoneMapper {
    directory: Arc<dyn InterfaceDirectory>,
}

impl ZoneMapper {
    pub fn new(directory: Arc<dyn InterfaceDirectory>) -> Self {
        Self { directory }
    }

    /// Interface index for `zone`; 0 means no zone.
    ///
    /// Unknown interface names fall back to the zone's leading decimal
    /// digits, so `"2"` maps to index 2.
    pub fn zone_to_index(&self, zone: &str) -> u32 {
        if zone.is_empty() {
            return 0;
        }
        if let Some(index) = self.directory.index_by_name(zone) {
            return index;
        }
        leading_decimal(zone)
    }

    /// Zone string for `index`; the empty string means no zone.
    pub fn zone_to_name(&self, index: u32) -> String {
        if index == 0 {
            return String::new();
        }
        self.directory
            .name_by_index(index)
            .unwrap_or_else(|| index.to_string())
    }
}

fn leading_decimal(s: &str) -> u32 {
    let mut n: u32 = 0;
    for digit in s.bytes().take_while(u8::is_ascii_digit) {
        n = n * 10 + u32::from(digit - b'0');
        if n >= MAX_NUMERIC_ZONE {
            return 0;
        }
    }
    n
}
