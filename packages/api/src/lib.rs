//! proxyenv public API
//!
//! Decide whether and through which forward proxy an outbound HTTP(S)
//! request is routed, from `HTTP_PROXY`, `HTTPS_PROXY` and `NO_PROXY`.
//!
//! ```rust
//! let config = proxyenv::ProxyEnv::builder()
//!     .http_proxy("http.proxy.tld")
//!     .https_proxy("secure.proxy.tld")
//!     .build();
//!
//! let proxy = proxyenv::resolve_proxy("https://secure.tld/", &config).unwrap();
//! assert_eq!(proxy.unwrap().host_str(), Some("secure.proxy.tld"));
//!
//! let proxy = proxyenv::resolve_proxy("http://localhost:8080/", &config).unwrap();
//! assert!(proxy.is_none());
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

// Re-export important types from client package
pub use proxyenv_client::{
    EnvLookup, Error, Intercept, IntoUrl, Kind, NoProxy, ProcessEnv, ProxyConfig,
    ProxyConfigBuilder, ProxyDecision, Result, Url, Via,
};
pub use proxyenv_client::proxy::canonical_addr;

use proxyenv_client::http::into_url::IntoUrlSealed;

/// Main proxyenv entry point providing static constructors for a
/// [`ProxyConfig`]
pub struct ProxyEnv;

impl ProxyEnv {
    /// Read `HTTP_PROXY`, `HTTPS_PROXY` and `NO_PROXY` (or their lower-case
    /// spellings) from the process environment.
    #[must_use]
    pub fn from_env() -> ProxyConfig {
        ProxyConfig::from_env()
    }

    /// Read the same variables through a caller-supplied lookup.
    pub fn from_lookup<E: EnvLookup + ?Sized>(env: &E) -> ProxyConfig {
        ProxyConfig::from_lookup(env)
    }

    /// Start building a config by hand.
    #[must_use]
    pub fn builder() -> ProxyConfigBuilder {
        ProxyConfig::builder()
    }
}

/// Determine the proxy URL to use for a request.
///
/// Returns `Ok(None)` when no proxy is configured for the request's scheme,
/// or when `NO_PROXY` or the loopback rule excludes the destination.
///
/// # Errors
///
/// - a request error if `request_url` is not a URL with a host; nothing is
///   resolved in that case
/// - a configuration error if the proxy value for the request's scheme is
///   not usable, even after assuming `http://`
pub fn resolve_proxy<U: IntoUrl>(request_url: U, config: &ProxyConfig) -> Result<Option<Url>> {
    let url = request_url.into_url()?;
    let decision = config.resolve(&url);

    tracing::trace!(
        target: "proxyenv::proxy",
        request = %url,
        decision = ?decision,
        "resolved proxy"
    );

    decision.into_result()
}
