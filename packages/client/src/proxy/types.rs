//! Resolved proxy types
//!
//! `Intercept` is the outcome of a successful resolution: the proxy URL plus
//! the protocol used to talk to it.

use std::fmt;

use url::Url;

/// How to talk to a resolved proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Via {
    Http,
    Https,
    Socks5,
}

impl Via {
    /// The connection method for a proxy URL scheme, if it is one we can use.
    #[must_use]
    pub fn from_scheme(scheme: &str) -> Option<Via> {
        match scheme {
            "http" => Some(Via::Http),
            "https" => Some(Via::Https),
            "socks5" => Some(Via::Socks5),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Via::Http => "http",
            Via::Https => "https",
            Via::Socks5 => "socks5",
        }
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proxy chosen for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intercept {
    pub(crate) proxy_uri: Url,
    pub(crate) via: Via,
}

impl Intercept {
    /// Returns `None` if the URL's scheme is not http, https or socks5.
    #[must_use]
    pub fn new(proxy_uri: Url) -> Option<Self> {
        let via = Via::from_scheme(proxy_uri.scheme())?;
        Some(Self { proxy_uri, via })
    }

    /// Get the proxy URI
    #[must_use]
    pub fn proxy_uri(&self) -> &Url {
        &self.proxy_uri
    }

    /// Get the connection method
    #[must_use]
    pub fn via(&self) -> Via {
        self.via
    }

    #[must_use]
    pub fn into_url(self) -> Url {
        self.proxy_uri
    }
}
