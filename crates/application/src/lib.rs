//! dualdial application layer: ports to the outside world and the
//! address resolution use case.
pub mod ports;
pub mod services;
pub mod use_cases;
