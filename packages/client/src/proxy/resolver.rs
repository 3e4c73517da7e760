//! Per-request proxy resolution
//!
//! Picks the configured proxy for the request's scheme, applies `NO_PROXY`,
//! then turns the configured string into a URL. Bare `host[:port]` values
//! are repaired by assuming `http://`.

use url::Url;

use super::canonical::canonical_addr;
use super::core::{NoProxy, ProxyConfig};
use super::types::Intercept;
use crate::error::{self, Error};

/// The outcome of resolving one request against a [`ProxyConfig`].
#[derive(Debug)]
pub enum ProxyDecision {
    /// No proxy is configured for the request's scheme.
    NotConfigured,
    /// A proxy is configured but `NO_PROXY` (or the loopback rule) excludes
    /// the destination.
    Bypassed,
    /// Connect through this proxy.
    Resolved(Intercept),
    /// The configured proxy value cannot be used.
    Invalid(Error),
}

impl ProxyDecision {
    /// Collapse into the `(proxy URL or none, error)` shape transports expect.
    ///
    /// # Errors
    ///
    /// Returns the configuration error for [`ProxyDecision::Invalid`].
    pub fn into_result(self) -> crate::Result<Option<Url>> {
        match self {
            ProxyDecision::NotConfigured | ProxyDecision::Bypassed => Ok(None),
            ProxyDecision::Resolved(intercept) => Ok(Some(intercept.into_url())),
            ProxyDecision::Invalid(err) => Err(err),
        }
    }

    /// Returns true when the request should connect directly without error.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        matches!(self, ProxyDecision::NotConfigured | ProxyDecision::Bypassed)
    }

    #[must_use]
    pub fn intercept(&self) -> Option<&Intercept> {
        match self {
            ProxyDecision::Resolved(intercept) => Some(intercept),
            _ => None,
        }
    }
}

impl ProxyConfig {
    /// Decide which proxy, if any, a request to `url` goes through.
    ///
    /// The steps run in a fixed order and stop at the first conclusive one:
    ///
    /// 1. pick `https_proxy` for `https` requests when set, else `http_proxy`;
    ///    nothing configured means [`ProxyDecision::NotConfigured`];
    /// 2. check the request's canonical address against `NO_PROXY` and the
    ///    loopback rule, giving [`ProxyDecision::Bypassed`];
    /// 3. parse the proxy value (see [`parse_proxy`]).
    pub fn resolve(&self, url: &Url) -> ProxyDecision {
        let candidate = self.candidate_for(url.scheme());
        if candidate.is_empty() {
            return ProxyDecision::NotConfigured;
        }

        let addr = canonical_addr(url);
        if !NoProxy::from_string(&self.no_proxy).use_proxy(&addr) {
            tracing::debug!(
                target: "proxyenv::proxy",
                addr = %addr,
                "proxy bypassed"
            );
            return ProxyDecision::Bypassed;
        }

        parse_proxy(candidate)
    }

    /// Returns the proxy URL for a request, `None` for a direct connection.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured proxy value for the request's
    /// scheme cannot be turned into a usable URL.
    pub fn proxy_for_url(&self, url: &Url) -> crate::Result<Option<Url>> {
        self.resolve(url).into_result()
    }

    /// Turn this snapshot into a per-request proxy callback.
    pub fn proxy_func(self) -> impl Fn(&Url) -> crate::Result<Option<Url>> + Send + Sync + 'static {
        move |url| self.proxy_for_url(url)
    }
}

/// Interpret a configured proxy string.
///
/// | parsed as written          | parsed with `http://` | outcome                   |
/// |----------------------------|-----------------------|---------------------------|
/// | http, https or socks5 URL  | not tried             | `Resolved`, as written    |
/// | other scheme, or error     | ok                    | `Resolved`, repaired      |
/// | error                      | error                 | `Invalid`, invalid proxy  |
/// | other scheme               | error                 | `Invalid`, unsupported    |
pub fn parse_proxy(proxy: &str) -> ProxyDecision {
    let parsed = Url::parse(proxy);
    if let Some(intercept) = parsed.as_ref().ok().and_then(|url| Intercept::new(url.clone())) {
        return ProxyDecision::Resolved(intercept);
    }

    if let Some(intercept) = Url::parse(&format!("http://{proxy}")).ok().and_then(Intercept::new) {
        tracing::debug!(
            target: "proxyenv::proxy",
            proxy = %proxy,
            repaired = %intercept.proxy_uri(),
            "assumed http:// for proxy"
        );
        return ProxyDecision::Resolved(intercept);
    }

    match parsed {
        Err(e) => ProxyDecision::Invalid(error::invalid_proxy(proxy, e)),
        Ok(url) => ProxyDecision::Invalid(error::unsupported_scheme(proxy, url.scheme())),
    }
}
