pub mod interface;
pub mod platform;

pub use interface::SystemInterfaceDirectory;
pub use platform::probe_capabilities;
