use url::Url;

use crate::error::{NoHost, request};

/// A trait to try to convert some type into a `Url`.
///
/// This trait is "sealed", such that only types within proxyenv can
/// implement it.
pub trait IntoUrl: IntoUrlSealed {}

impl IntoUrl for Url {}
impl IntoUrl for &Url {}
impl IntoUrl for String {}
impl IntoUrl for &str {}
impl IntoUrl for &String {}
impl IntoUrl for &http::Uri {}

pub trait IntoUrlSealed {
    // Besides parsing as a valid `Url`, the `Url` must have a host, since
    // that is what proxy selection compares against `NO_PROXY`.
    ///
    /// # Errors
    ///
    /// Returns a request `Error` if the string is not a URL or the URL has
    /// no host.
    fn into_url(self) -> crate::Result<Url>;
}

impl IntoUrlSealed for Url {
    fn into_url(self) -> crate::Result<Url> {
        if self.has_host() {
            Ok(self)
        } else {
            Err(request(NoHost))
        }
    }
}

impl IntoUrlSealed for &Url {
    fn into_url(self) -> crate::Result<Url> {
        self.clone().into_url()
    }
}

impl IntoUrlSealed for &str {
    fn into_url(self) -> crate::Result<Url> {
        Url::parse(self).map_err(request)?.into_url()
    }
}

impl IntoUrlSealed for &String {
    fn into_url(self) -> crate::Result<Url> {
        (&**self).into_url()
    }
}

impl IntoUrlSealed for String {
    fn into_url(self) -> crate::Result<Url> {
        (&*self).into_url()
    }
}

impl IntoUrlSealed for &http::Uri {
    fn into_url(self) -> crate::Result<Url> {
        Url::parse(&self.to_string()).map_err(request)?.into_url()
    }
}
