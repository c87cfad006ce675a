mod interface_directory;
mod ip_lookup;
mod literal_parser;
mod port_parser;

pub use interface_directory::InterfaceDirectory;
pub use ip_lookup::IpLookup;
pub use literal_parser::LiteralIpParser;
pub use port_parser::PortParser;
