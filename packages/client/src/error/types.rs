use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `proxyenv_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while deciding on a proxy for a request.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    /// The configured proxy string that could not be used, if any.
    pub proxy: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The request URL could not be parsed or has no host.
    Request,
    /// The proxy string is not a URL, not even with `http://` prepended.
    InvalidProxy,
    /// The proxy string parsed with a scheme other than http, https or socks5
    /// and could not be repaired into an `http://` URL.
    UnsupportedScheme,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                proxy: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Error {
        self.inner.proxy = Some(proxy.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// The offending proxy configuration string, if this error came from one.
    #[must_use]
    pub fn proxy(&self) -> Option<&str> {
        self.inner.proxy.as_deref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("proxyenv::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref proxy) = self.inner.proxy {
            f.field("proxy", proxy);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.inner.kind, self.inner.proxy.as_deref()) {
            (Kind::Request, _) => f.write_str("invalid request URL")?,
            (Kind::InvalidProxy, Some(proxy)) => write!(f, "invalid proxy address {proxy:?}")?,
            (Kind::InvalidProxy, None) => f.write_str("invalid proxy address")?,
            (Kind::UnsupportedScheme, Some(proxy)) => {
                write!(f, "unsupported proxy address {proxy:?}")?
            }
            (Kind::UnsupportedScheme, None) => f.write_str("unsupported proxy address")?,
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
