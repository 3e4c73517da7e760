//! HTTP proxy selection from environment configuration
//!
//! This module decides, for each outbound request, whether to connect through
//! the proxy named by `HTTP_PROXY` / `HTTPS_PROXY` or directly, honoring the
//! `NO_PROXY` exclusion list.

pub mod canonical;
pub mod core;
pub mod resolver;
pub mod types;

pub use canonical::canonical_addr;
pub use self::core::{EnvLookup, NoProxy, NoProxyPattern, ProcessEnv, ProxyConfig, ProxyConfigBuilder};
pub use resolver::{ProxyDecision, parse_proxy};
pub use types::{Intercept, Via};
