pub mod literal;
pub mod port;

pub use literal::StdLiteralIpParser;
pub use port::ServicePortParser;
