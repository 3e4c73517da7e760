//! proxyenv prelude
//!
//! The types callers need to load a configuration and resolve requests.

pub use crate::error::{Error, Kind, Result};
pub use crate::http::IntoUrl;
pub use crate::proxy::{
    EnvLookup, Intercept, NoProxy, ProcessEnv, ProxyConfig, ProxyConfigBuilder, ProxyDecision, Via,
};

// URL handling
pub use url::Url;
