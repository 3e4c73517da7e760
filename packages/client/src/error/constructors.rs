use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a request URL that cannot be resolved.
pub fn request<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Request).with(e.into())
}

/// Creates an `Error` for a proxy string that is not a URL, raw or repaired.
///
/// `e` is the failure from parsing the string as written, not the repair attempt.
pub fn invalid_proxy(proxy: &str, e: url::ParseError) -> Error {
    Error::new(Kind::InvalidProxy).with(e).with_proxy(proxy)
}

/// Creates an `Error` for a proxy string whose scheme cannot be used.
pub fn unsupported_scheme(proxy: &str, scheme: &str) -> Error {
    Error::new(Kind::UnsupportedScheme)
        .with(super::helpers::UnsupportedScheme(scheme.to_owned()))
        .with_proxy(proxy)
}
