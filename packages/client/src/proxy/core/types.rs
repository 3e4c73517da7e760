//! Core proxy configuration snapshot
//!
//! Defines `ProxyConfig`, the immutable set of `HTTP_PROXY`, `HTTPS_PROXY`
//! and `NO_PROXY` values that every resolution reads from.

use serde::{Deserialize, Serialize};

/// Proxy settings for outbound requests, as found in the environment.
///
/// A `ProxyConfig` holds three raw strings:
///
/// - `http_proxy`: the proxy used for `http` requests, and for `https`
///   requests when `https_proxy` is empty.
/// - `https_proxy`: the proxy used for `https` requests.
/// - `no_proxy`: a comma-separated list of domain names that bypass the
///   proxy, or a single `*` to disable proxying entirely. A name matches
///   itself and all of its subdomains; `.example.com` matches
///   `example.com` and its subdomains as well.
///
/// Proxy values may be complete URLs (`http`, `https` or `socks5`) or a
/// bare `host[:port]`, in which case `http` is assumed. Nothing is
/// validated when the config is built; a bad proxy value is reported by
/// [`ProxyConfig::resolve`] for the requests that would have used it.
///
/// ```rust
/// # use proxyenv_client::proxy::ProxyConfig;
/// let config = ProxyConfig::builder()
///     .http_proxy("cache.corp.example.com:3128")
///     .no_proxy("localhost, .internal.example.com")
///     .build();
/// assert_eq!(config.https_proxy(), "");
/// ```
///
/// The config is never mutated after construction, so one snapshot can be
/// shared by any number of concurrent resolutions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub(crate) http_proxy: String,
    pub(crate) https_proxy: String,
    pub(crate) no_proxy: String,
}

impl ProxyConfig {
    /// Build a config from its three raw values.
    pub fn new(
        http_proxy: impl Into<String>,
        https_proxy: impl Into<String>,
        no_proxy: impl Into<String>,
    ) -> Self {
        Self {
            http_proxy: http_proxy.into(),
            https_proxy: https_proxy.into(),
            no_proxy: no_proxy.into(),
        }
    }

    /// The `HTTP_PROXY` value, empty when unset.
    #[must_use]
    pub fn http_proxy(&self) -> &str {
        &self.http_proxy
    }

    /// The `HTTPS_PROXY` value, empty when unset.
    #[must_use]
    pub fn https_proxy(&self) -> &str {
        &self.https_proxy
    }

    /// The `NO_PROXY` value, empty when unset.
    #[must_use]
    pub fn no_proxy(&self) -> &str {
        &self.no_proxy
    }

    /// Returns true when neither proxy value is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.http_proxy.is_empty() && self.https_proxy.is_empty()
    }

    /// The proxy string a request with the given scheme would use.
    ///
    /// `https` requests use `https_proxy` when it is set; everything else
    /// falls back to `http_proxy`.
    pub(crate) fn candidate_for(&self, scheme: &str) -> &str {
        if scheme == "https" && !self.https_proxy.is_empty() {
            &self.https_proxy
        } else {
            &self.http_proxy
        }
    }
}
