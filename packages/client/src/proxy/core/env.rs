//! Loading proxy configuration from environment-like sources

use std::collections::HashMap;

use super::types::ProxyConfig;

/// A key-value view of an environment.
///
/// Lookups are case-sensitive; the loader asks for the upper-case and the
/// lower-case spelling of each variable separately.
pub trait EnvLookup {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl EnvLookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvLookup for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| (*v).to_owned())
    }
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

pub(crate) const HTTP_PROXY: [&str; 2] = ["HTTP_PROXY", "http_proxy"];
pub(crate) const HTTPS_PROXY: [&str; 2] = ["HTTPS_PROXY", "https_proxy"];
pub(crate) const NO_PROXY: [&str; 2] = ["NO_PROXY", "no_proxy"];

impl ProxyConfig {
    /// Read the config from `HTTP_PROXY`, `HTTPS_PROXY` and `NO_PROXY` (or
    /// their lower-case spellings) in the process environment.
    ///
    /// Note that `HTTP_PROXY` can be set by a client in a CGI environment
    /// through the `Proxy:` request header. Programs that may run under CGI
    /// should not use this when `REQUEST_METHOD` is set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(&ProcessEnv)
    }

    /// Read the config through an arbitrary lookup.
    ///
    /// For each value the upper-case name is tried first, then the
    /// lower-case one; the first non-empty value wins. Missing values are
    /// left empty. This never fails: proxy strings are validated lazily
    /// when a request is resolved.
    pub fn from_lookup<E: EnvLookup + ?Sized>(env: &E) -> Self {
        let config = Self {
            http_proxy: first_non_empty(env, &HTTP_PROXY),
            https_proxy: first_non_empty(env, &HTTPS_PROXY),
            no_proxy: first_non_empty(env, &NO_PROXY),
        };

        tracing::trace!(
            target: "proxyenv::proxy",
            http_proxy = %config.http_proxy,
            https_proxy = %config.https_proxy,
            no_proxy = %config.no_proxy,
            "proxy config loaded"
        );

        config
    }
}

fn first_non_empty<E: EnvLookup + ?Sized>(env: &E, names: &[&str]) -> String {
    names
        .iter()
        .filter_map(|name| env.get(name))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}
