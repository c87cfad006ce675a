pub mod errors;
pub mod logging;
pub mod platform;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use platform::PlatformConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
