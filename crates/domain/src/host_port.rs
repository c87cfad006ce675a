//! Splitting and joining of `host:port` network addresses.
//!
//! A literal IPv6 address or a host carrying a zone must be enclosed in
//! square brackets, as in `[::1]:80` or `[fe80::1%eth0]:80`.

use crate::errors::AddrError;

/// Splits `host:port`, `[host]:port` or `[host%zone]:port` into host and port.
///
/// The port is returned verbatim; numeric validation belongs to the caller.
/// Empty hosts and ports are accepted.
pub fn split_host_port(hostport: &str) -> Result<(&str, &str), AddrError> {
    let bytes = hostport.as_bytes();

    // The port starts after the last colon.
    let Some(colon) = hostport.rfind(':') else {
        return Err(AddrError::MissingPort(hostport.to_string()));
    };

    // Positions before which a '[' resp. ']' is allowed.
    let (host, open_from, close_from) = if bytes[0] == b'[' {
        let Some(end) = hostport.find(']') else {
            return Err(AddrError::MissingClosingBracket(hostport.to_string()));
        };

        if end + 1 == hostport.len() {
            return Err(AddrError::MissingPort(hostport.to_string()));
        }
        if end + 1 != colon {
            // Either ']' is not followed by a colon, or the colon after it
            // is not the last one.
            if bytes[end + 1] == b':' {
                return Err(AddrError::TooManyColons(hostport.to_string()));
            }
            return Err(AddrError::MissingPort(hostport.to_string()));
        }

        (&hostport[1..end], 1, end + 1)
    } else {
        let host = &hostport[..colon];
        if host.contains(':') {
            return Err(AddrError::TooManyColons(hostport.to_string()));
        }
        if host.contains('%') {
            return Err(AddrError::MissingBrackets(hostport.to_string()));
        }
        (host, 0, 0)
    };

    if hostport[open_from..].contains('[') {
        return Err(AddrError::UnexpectedOpeningBracket(hostport.to_string()));
    }
    if hostport[close_from..].contains(']') {
        return Err(AddrError::UnexpectedClosingBracket(hostport.to_string()));
    }

    Ok((host, &hostport[colon + 1..]))
}

/// Joins host and port into `host:port`, bracketing the host when it
/// contains a colon or a percent sign.
pub fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') || host.contains('%') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// Splits an IPv6 scoped address into host and zone at the last `%`.
///
/// A leading `%` is not a zone separator.
pub fn split_host_zone(s: &str) -> (&str, &str) {
    match s.rfind('%') {
        Some(i) if i > 0 => (&s[..i], &s[i + 1..]),
        _ => (s, ""),
    }
}
