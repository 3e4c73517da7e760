//! # proxyenv client
//!
//! Decides, for a single outbound HTTP(S) request, whether and through which
//! forward proxy it should be routed, based on the conventional
//! `HTTP_PROXY`, `HTTPS_PROXY` and `NO_PROXY` settings.
//!
//! ## Features
//!
//! - **Injected environment**: load settings from the process, a map or any
//!   closure
//! - **`NO_PROXY` matching** with domain, leading-dot and `*` entries
//! - **Loopback safety**: `localhost` and loopback IPs are never proxied
//! - **Lenient proxy values**: bare `host:port` is read as `http://host:port`
//! - **IDNA** host normalization before matching
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use proxyenv_client::{ProxyConfig, Url};
//!
//! let env = HashMap::from([
//!     ("HTTPS_PROXY", "secure.proxy.tld:3128"),
//!     ("NO_PROXY", "internal.example.com"),
//! ]);
//! let config = ProxyConfig::from_lookup(&env);
//!
//! let url = Url::parse("https://api.example.com/v1").unwrap();
//! let proxy = config.proxy_for_url(&url).unwrap();
//! assert_eq!(proxy.unwrap().as_str(), "http://secure.proxy.tld:3128/");
//!
//! let url = Url::parse("https://db.internal.example.com/").unwrap();
//! assert_eq!(config.proxy_for_url(&url).unwrap(), None);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod http;
pub mod proxy;

pub mod prelude;

pub use crate::prelude::*;

pub use error::{Error, Result};
