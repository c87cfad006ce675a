use thiserror::Error;

/// Grammar errors raised while splitting a `host:port` string.
///
/// Every variant carries the full input that failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    #[error("address {0}: missing port in address")]
    MissingPort(String),

    #[error("address {0}: too many colons in address")]
    TooManyColons(String),

    #[error("address {0}: missing brackets in address")]
    MissingBrackets(String),

    #[error("address {0}: missing ']' in address")]
    MissingClosingBracket(String),

    #[error("address {0}: unexpected '[' in address")]
    UnexpectedOpeningBracket(String),

    #[error("address {0}: unexpected ']' in address")]
    UnexpectedClosingBracket(String),
}

impl AddrError {
    /// The address string that failed to parse.
    pub fn addr(&self) -> &str {
        match self {
            AddrError::MissingPort(addr)
            | AddrError::TooManyColons(addr)
            | AddrError::MissingBrackets(addr)
            | AddrError::MissingClosingBracket(addr)
            | AddrError::UnexpectedOpeningBracket(addr)
            | AddrError::UnexpectedClosingBracket(addr) => addr,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Addr(#[from] AddrError),

    #[error("unknown network {0}")]
    UnknownNetwork(String),

    #[error("no suitable address found")]
    NoSuitableAddress,

    #[error("invalid port {port:?} for network {network}")]
    InvalidPort { network: String, port: String },

    #[error("lookup {host}: {reason}")]
    LookupFailed { host: String, reason: String },

    #[error("lookup {host}: i/o timeout")]
    LookupTimeout { host: String },

    #[error("lookup {0}: no addresses returned")]
    NoAddresses(String),
}

impl DomainError {
    /// Lookup timeouts are the only failures a caller may reasonably retry.
    pub fn is_timeout(&self) -> bool {
        matches!(self, DomainError::LookupTimeout { .. })
    }
}
