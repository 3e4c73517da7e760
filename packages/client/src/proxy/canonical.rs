//! Canonical `host:port` addresses for proxy decisions
//!
//! Every request is reduced to an ASCII `host:port` string before it is
//! compared against `NO_PROXY`, so that `http://Example.com/` and
//! `http://example.com:80/x` are treated the same.

use percent_encoding::percent_decode_str;
use url::{Host, Url};

/// Default ports for the schemes a proxy decision understands.
const DEFAULT_PORTS: &[(&str, &str)] = &[("http", "80"), ("https", "443"), ("socks5", "1080")];

pub(crate) fn default_port(scheme: &str) -> Option<&'static str> {
    DEFAULT_PORTS
        .iter()
        .find(|(s, _)| *s == scheme)
        .map(|(_, port)| *port)
}

/// Returns the URL's host joined with its port, always in `host:port` form.
///
/// Non-ASCII host names are converted to their IDNA ASCII form when
/// possible. A missing port is filled in from the scheme; for schemes
/// other than http, https and socks5 it is left empty (`host:`).
#[must_use]
pub fn canonical_addr(url: &Url) -> String {
    let host = hostname(url);
    let host = idna_ascii(&host);
    let port = match url.port() {
        Some(port) => port.to_string(),
        None => default_port(url.scheme()).unwrap_or_default().to_owned(),
    };
    join_host_port(&host, &port)
}

/// The host without brackets or port.
///
/// Hosts of non-special schemes such as `socks5` are stored percent-encoded,
/// so they are decoded here to recover the Unicode name.
fn hostname(url: &Url) -> String {
    match url.host() {
        Some(Host::Domain(domain)) => match percent_decode_str(domain).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => domain.to_owned(),
        },
        Some(Host::Ipv4(ip)) => ip.to_string(),
        Some(Host::Ipv6(ip)) => ip.to_string(),
        None => String::new(),
    }
}

/// Convert a host name to ASCII, leaving it untouched if it already is
/// ASCII or if conversion fails.
pub(crate) fn idna_ascii(host: &str) -> String {
    if host.is_ascii() {
        return host.to_owned();
    }

    match idna::domain_to_ascii(host) {
        Ok(ascii) => ascii,
        Err(e) => {
            tracing::trace!(
                target: "proxyenv::proxy",
                host = %host,
                error = ?e,
                "IDNA conversion failed, keeping host as is"
            );
            host.to_owned()
        }
    }
}

/// Combine host and port into `host:port`, bracketing IPv6 literals.
pub(crate) fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// Split `host:port`, `[host]:port` or `[ipv6]:port` into host and port.
///
/// Returns `None` when there is no port separator, when an unbracketed
/// host contains a colon, or when brackets are misplaced.
pub(crate) fn split_host_port(addr: &str) -> Option<(&str, &str)> {
    let colon = addr.rfind(':')?;

    let host = if addr.starts_with('[') {
        let close = addr.find(']')?;
        if close + 1 != colon {
            return None;
        }
        &addr[1..close]
    } else {
        let host = &addr[..colon];
        if host.contains(':') {
            return None;
        }
        host
    };

    let port = &addr[colon + 1..];
    let is_bracket = |c: char| c == '[' || c == ']';
    if host.contains(is_bracket) || port.contains(is_bracket) {
        return None;
    }

    Some((host, port))
}

/// Given `host`, `host:port` or `[ipv6::address]:port`, reports whether a
/// port is present.
pub(crate) fn has_port(s: &str) -> bool {
    match (s.rfind(':'), s.rfind(']')) {
        (Some(colon), Some(bracket)) => colon > bracket,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
