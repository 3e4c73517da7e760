/// A marker type to indicate that a URL has no host to connect to.
#[derive(Debug, thiserror::Error)]
#[error("URL has no host")]
pub struct NoHost;

/// A marker type carrying a proxy scheme that is not http, https or socks5.
#[derive(Debug, thiserror::Error)]
#[error("unsupported proxy scheme {0:?}")]
pub struct UnsupportedScheme(pub String);
