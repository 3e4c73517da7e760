use super::types::{Error, Kind};

impl Error {
    /// Returns true if the request URL itself was unusable.
    #[must_use]
    pub fn is_request(&self) -> bool {
        matches!(self.inner.kind, Kind::Request)
    }

    /// Returns true if the configured proxy could not be parsed as a URL.
    #[must_use]
    pub fn is_invalid_proxy(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidProxy)
    }

    /// Returns true if the configured proxy has a scheme that cannot be used.
    #[must_use]
    pub fn is_unsupported_scheme(&self) -> bool {
        matches!(self.inner.kind, Kind::UnsupportedScheme)
    }

    /// Returns true for any error caused by the proxy configuration rather
    /// than the request.
    #[must_use]
    pub fn is_config(&self) -> bool {
        self.is_invalid_proxy() || self.is_unsupported_scheme()
    }
}
