//! dualdial domain layer: address grammar, resolved records and
//! Happy Eyeballs tagging.
pub mod addr_list;
pub mod capabilities;
pub mod config;
pub mod errors;
pub mod host_port;
pub mod ip_record;
pub mod network;

pub use addr_list::{AddrTagger, TaggedAddrList, TaggedEndpoint};
pub use capabilities::PlatformCapabilities;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{AddrError, DomainError};
pub use host_port::{join_host_port, split_host_port, split_host_zone};
pub use ip_record::IpRecord;
pub use network::{Endpoint, FamilyRestriction, Network, SocketEndpoint};
