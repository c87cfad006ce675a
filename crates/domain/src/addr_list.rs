//! Happy Eyeballs address tagging.
//!
//! A resolved address list is split into a primary class (the family of the
//! first usable address) and a fallback class (the other family), and one
//! address is marked for APIs that can only take a single destination.

use crate::capabilities::PlatformCapabilities;
use crate::errors::DomainError;
use crate::ip_record::IpRecord;

/// An endpoint with its Happy Eyeballs tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEndpoint<E> {
    pub endpoint: E,
    /// Set on exactly one element of a list.
    pub single: bool,
    /// Moves the endpoint to the delayed connection attempt.
    pub fallback: bool,
}

/// Ordered, immutable list of tagged endpoints in resolution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedAddrList<E> {
    entries: Vec<TaggedEndpoint<E>>,
}

impl<E> TaggedAddrList<E> {
    /// A list of exactly one endpoint, tagged single and primary.
    pub fn from_single(endpoint: E) -> Self {
        Self {
            entries: vec![TaggedEndpoint {
                endpoint,
                single: true,
                fallback: false,
            }],
        }
    }

    /// The one endpoint for legacy callers that cannot handle a list.
    ///
    /// # Panics
    ///
    /// Panics if the list does not hold exactly one `single` tag. Lists built
    /// by [`AddrTagger`] or [`TaggedAddrList::from_single`] always do.
    pub fn single(&self) -> &E {
        let mut singles = self.entries.iter().filter(|e| e.single);
        match (singles.next(), singles.next()) {
            (Some(entry), None) => &entry.endpoint,
            _ => panic!("malformed address list: expected exactly 1 'single' tag"),
        }
    }

    /// Every endpoint, in order.
    pub fn all(&self) -> Vec<&E> {
        self.entries.iter().map(|e| &e.endpoint).collect()
    }

    /// Endpoints without a fallback tag; the primary Happy Eyeballs thread.
    pub fn primaries(&self) -> Vec<&E> {
        self.entries
            .iter()
            .filter(|e| !e.fallback)
            .map(|e| &e.endpoint)
            .collect()
    }

    /// Endpoints with a fallback tag; the delayed Happy Eyeballs thread.
    pub fn fallbacks(&self) -> Vec<&E> {
        self.entries
            .iter()
            .filter(|e| e.fallback)
            .map(|e| &e.endpoint)
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaggedEndpoint<E>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, E> IntoIterator for &'a TaggedAddrList<E> {
    type Item = &'a TaggedEndpoint<E>;
    type IntoIter = std::slice::Iter<'a, TaggedEndpoint<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddrFamily {
    V4,
    V6,
}

impl AddrFamily {
    fn other(self) -> Self {
        match self {
            AddrFamily::V4 => AddrFamily::V6,
            AddrFamily::V6 => AddrFamily::V4,
        }
    }
}

/// Filters and tags resolved addresses against the platform capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddrTagger {
    caps: PlatformCapabilities,
}

impl AddrTagger {
    pub fn new(caps: PlatformCapabilities) -> Self {
        Self { caps }
    }

    /// Usable with the kernel's IPv4 addressing modes, including
    /// IPv4-mapped IPv6 addresses.
    pub fn is_ipv4_only(&self, record: &IpRecord) -> bool {
        self.caps.ipv4 && record.to_ipv4().is_some()
    }

    /// A regular IPv6 address usable with the kernel's IPv6 addressing
    /// modes. IPv4-mapped addresses do not qualify.
    pub fn is_ipv6_only(&self, record: &IpRecord) -> bool {
        self.caps.ipv6 && record.is_native_ipv6()
    }

    /// Applies `filter` to `records` and tags the survivors.
    ///
    /// The family of the first usable record is the primary family; the
    /// other family is tagged fallback. The single address is the first
    /// IPv4 record if there is one, otherwise the first IPv6 record. Records
    /// usable by neither family are dropped. On success the list holds at
    /// least one endpoint.
    pub fn tag<E, F>(
        &self,
        filter: Option<&dyn Fn(&IpRecord) -> bool>,
        records: &[IpRecord],
        construct: F,
    ) -> Result<TaggedAddrList<E>, DomainError>
    where
        F: Fn(&IpRecord) -> E,
    {
        let mut entries = Vec::with_capacity(records.len());
        let mut first_v4 = None;
        let mut first_v6 = None;
        let mut fallback_family = None;

        for record in records {
            if filter.is_some_and(|accept| !accept(record)) {
                continue;
            }

            let family = if self.is_ipv4_only(record) {
                first_v4.get_or_insert(entries.len());
                AddrFamily::V4
            } else if self.is_ipv6_only(record) {
                first_v6.get_or_insert(entries.len());
                AddrFamily::V6
            } else {
                continue;
            };

            let fallback_family = *fallback_family.get_or_insert(family.other());
            entries.push(TaggedEndpoint {
                endpoint: construct(record),
                single: false,
                fallback: family == fallback_family,
            });
        }

        // Prefer IPv4 for the single address, for legacy compatibility.
        let single = first_v4
            .or(first_v6)
            .ok_or(DomainError::NoSuitableAddress)?;
        entries[single].single = true;

        Ok(TaggedAddrList { entries })
    }
}
