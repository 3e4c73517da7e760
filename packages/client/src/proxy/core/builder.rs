//! Fluent construction of `ProxyConfig`

use super::types::ProxyConfig;

/// Builder for [`ProxyConfig`].
///
/// Every value starts empty. Setting a value twice keeps the last one.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfigBuilder {
    config: ProxyConfig,
}

impl ProxyConfig {
    /// Start building a config by hand.
    #[must_use]
    pub fn builder() -> ProxyConfigBuilder {
        ProxyConfigBuilder::default()
    }
}

impl ProxyConfigBuilder {
    /// Proxy for `http` requests, and `https` requests without their own proxy.
    #[must_use]
    pub fn http_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.http_proxy = proxy.into();
        self
    }

    /// Proxy for `https` requests.
    #[must_use]
    pub fn https_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.https_proxy = proxy.into();
        self
    }

    /// Comma-separated exclusion list, or `*`.
    #[must_use]
    pub fn no_proxy(mut self, exclusions: impl Into<String>) -> Self {
        self.config.no_proxy = exclusions.into();
        self
    }

    /// Use one proxy for both `http` and `https` requests.
    #[must_use]
    pub fn all_proxy(self, proxy: impl Into<String>) -> Self {
        let proxy = proxy.into();
        self.http_proxy(proxy.clone()).https_proxy(proxy)
    }

    #[must_use]
    pub fn build(self) -> ProxyConfig {
        self.config
    }
}
