//! Request URL handling for proxy resolution

pub mod into_url;

pub use into_url::IntoUrl;
