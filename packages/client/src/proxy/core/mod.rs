//! Proxy configuration and `NO_PROXY` handling
//!
//! The configuration snapshot, the ways to load it, and the exclusion-list
//! matcher that resolution consults.

pub mod builder;
pub mod env;
pub mod no_proxy;
pub mod types;

pub use builder::ProxyConfigBuilder;
pub use env::{EnvLookup, ProcessEnv};
pub use no_proxy::{NoProxy, NoProxyPattern};
pub use types::ProxyConfig;
