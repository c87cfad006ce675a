pub mod dns;
pub mod net;
pub mod system;
