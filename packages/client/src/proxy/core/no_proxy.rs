//! `NO_PROXY` parsing and matching
//!
//! Decides, for a canonical `host:port` address, whether the request may go
//! through a proxy. Loopback destinations are never proxied; everything else
//! is checked against the comma-separated exclusion list.

use std::net::IpAddr;

use crate::proxy::canonical::{has_port, split_host_port};

/// A parsed `NO_PROXY` value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoProxy {
    /// `NO_PROXY=*`: nothing is proxied.
    all: bool,
    patterns: Vec<NoProxyPattern>,
}

/// A single entry of a `NO_PROXY` list, lower-cased, trimmed and without
/// any port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoProxyPattern {
    /// `example.com`: matches `example.com` itself and any name ending in
    /// `.example.com`, but not `fooexample.com`.
    Domain(String),
    /// `.example.com`, stored with its leading dot: matches any name ending
    /// in `.example.com`, and `example.com` itself.
    Subdomain(String),
}

impl NoProxyPattern {
    /// Parse one list entry. Entries that are empty once trimmed and
    /// stripped of their port yield `None`.
    pub fn parse(entry: &str) -> Option<Self> {
        let entry = entry.trim().to_lowercase();
        let host = strip_port(&entry);
        if host.is_empty() {
            return None;
        }

        if host.starts_with('.') {
            Some(NoProxyPattern::Subdomain(host.to_owned()))
        } else {
            Some(NoProxyPattern::Domain(host.to_owned()))
        }
    }

    /// Check whether a lower-cased host (no port) is excluded by this pattern.
    pub fn matches(&self, host: &str) -> bool {
        match self {
            NoProxyPattern::Domain(domain) => {
                host == domain
                    || host
                        .strip_suffix(domain.as_str())
                        .is_some_and(|head| head.ends_with('.'))
            }
            NoProxyPattern::Subdomain(suffix) => {
                host.ends_with(suffix.as_str()) || host == &suffix[1..]
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NoProxyPattern::Domain(s) | NoProxyPattern::Subdomain(s) => s,
        }
    }
}

impl NoProxy {
    /// Parse a raw `NO_PROXY` value.
    ///
    /// Only the exact string `*` disables proxying for every host. Any other
    /// value is split on commas; malformed entries (empty, or only a port
    /// such as `:1`) are dropped without error.
    pub fn from_string(no_proxy: &str) -> Self {
        if no_proxy == "*" {
            return NoProxy {
                all: true,
                patterns: Vec::new(),
            };
        }

        NoProxy {
            all: false,
            patterns: no_proxy.split(',').filter_map(NoProxyPattern::parse).collect(),
        }
    }

    /// Returns true if this value is the `*` wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.all
    }

    /// The usable entries, in list order.
    #[must_use]
    pub fn patterns(&self) -> &[NoProxyPattern] {
        &self.patterns
    }

    /// Reports whether requests to `addr` should use a proxy.
    ///
    /// `addr` is a canonical `host:port` address. An address that cannot be
    /// split into host and port is never proxied. `localhost` and loopback
    /// IPs are never proxied, whatever the list says.
    pub fn use_proxy(&self, addr: &str) -> bool {
        if addr.is_empty() {
            return true;
        }

        let Some((host, _)) = split_host_port(addr) else {
            return false;
        };

        if host == "localhost" || is_loopback(host) {
            return false;
        }

        if self.all {
            return false;
        }

        let addr = addr.trim().to_lowercase();
        let addr = strip_port(&addr);

        match self.patterns.iter().find(|p| p.matches(addr)) {
            Some(pattern) => {
                tracing::trace!(
                    target: "proxyenv::proxy",
                    host = %addr,
                    pattern = %pattern.as_str(),
                    "matched NO_PROXY entry"
                );
                false
            }
            None => true,
        }
    }
}

fn strip_port(s: &str) -> &str {
    match s.rfind(':') {
        Some(colon) if has_port(s) => &s[..colon],
        _ => s,
    }
}

fn is_loopback(host: &str) -> bool {
    match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => ip.is_loopback(),
        Ok(IpAddr::V6(ip)) => {
            ip.is_loopback() || ip.to_ipv4_mapped().is_some_and(|v4| v4.is_loopback())
        }
        Err(_) => false,
    }
}
