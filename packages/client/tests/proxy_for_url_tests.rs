use proxyenv_client::{ProxyConfig, ProxyDecision, Url, Via};

/// (request, HTTP_PROXY, HTTPS_PROXY, NO_PROXY, expected proxy URL)
///
/// A blank request means `http://example.com`.
const PROXY_FOR_URL_CASES: &[(&str, &str, &str, &str, Option<&str>)] = &[
    ("", "127.0.0.1:8080", "", "", Some("http://127.0.0.1:8080/")),
    ("", "cache.corp.example.com:1234", "", "", Some("http://cache.corp.example.com:1234/")),
    ("", "cache.corp.example.com", "", "", Some("http://cache.corp.example.com/")),
    ("", "https://cache.corp.example.com", "", "", Some("https://cache.corp.example.com/")),
    ("", "http://127.0.0.1:8080", "", "", Some("http://127.0.0.1:8080/")),
    ("", "https://127.0.0.1:8080", "", "", Some("https://127.0.0.1:8080/")),
    ("", "socks5://127.0.0.1", "", "", Some("socks5://127.0.0.1")),
    // Don't use secure for http
    ("http://insecure.tld/", "http.proxy.tld", "secure.proxy.tld", "", Some("http://http.proxy.tld/")),
    // Use secure for https
    ("https://secure.tld/", "http.proxy.tld", "secure.proxy.tld", "", Some("http://secure.proxy.tld/")),
    ("https://secure.tld/", "http.proxy.tld", "https://secure.proxy.tld", "", Some("https://secure.proxy.tld/")),
    // https falls back to HTTP_PROXY
    ("https://secure.tld/", "http.proxy.tld", "", "", Some("http://http.proxy.tld/")),
    ("", "", "", "", None),
    // http requests never use HTTPS_PROXY
    ("", "", "secure.proxy.tld", "", None),
    ("http://example.com/", "proxy", "", "example.com", None),
    ("http://example.com/", "proxy", "", ".example.com", None),
    ("http://example.com/", "proxy", "", "ample.com", Some("http://proxy/")),
    ("http://foo.example.com/", "proxy", "", "example.com", None),
    ("http://example.com/", "proxy", "", ".foo.com", Some("http://proxy/")),
    ("http://localhost/", "proxy", "", "", None),
    ("http://127.0.0.1:3000/", "proxy", "", "", None),
    ("http://[::1]:3000/", "proxy", "", "", None),
    ("http://example.com/", "proxy", "", "*", None),
];

fn request(url: &str) -> Url {
    let url = if url.is_empty() { "http://example.com" } else { url };
    Url::parse(url).expect("request URL should parse")
}

#[test]
fn proxy_for_url_table() {
    for &(req, http, https, no_proxy, expected) in PROXY_FOR_URL_CASES {
        let config = ProxyConfig::new(http, https, no_proxy);
        let got = config
            .proxy_for_url(&request(req))
            .expect("table cases should not error");
        assert_eq!(
            got.as_ref().map(Url::as_str),
            expected,
            "http_proxy={http:?} https_proxy={https:?} no_proxy={no_proxy:?} req={req:?}"
        );
    }
}

#[test]
fn scheme_precedence() {
    let config = ProxyConfig::builder()
        .http_proxy("http.proxy.tld")
        .https_proxy("secure.proxy.tld")
        .build();

    let secure = config
        .proxy_for_url(&request("https://secure.tld/"))
        .expect("https request should resolve")
        .expect("https request should be proxied");
    assert_eq!(secure.host_str(), Some("secure.proxy.tld"));

    let plain = config
        .proxy_for_url(&request("http://insecure.tld/"))
        .expect("http request should resolve")
        .expect("http request should be proxied");
    assert_eq!(plain.host_str(), Some("http.proxy.tld"));
}

#[test]
fn decision_variants() {
    let config = ProxyConfig::new("proxy.tld:3128", "", "internal.example.com");

    let resolved = config.resolve(&request("https://example.com/"));
    assert!(matches!(resolved, ProxyDecision::Resolved(_)));
    assert!(!resolved.is_direct());

    let bypassed = config.resolve(&request("http://api.internal.example.com/"));
    assert!(matches!(bypassed, ProxyDecision::Bypassed));
    assert!(bypassed.is_direct());

    let unconfigured = ProxyConfig::default().resolve(&request("http://example.com/"));
    assert!(matches!(unconfigured, ProxyDecision::NotConfigured));
    assert!(unconfigured.is_direct());

    let invalid = ProxyConfig::new("::", "", "").resolve(&request("http://example.com/"));
    assert!(matches!(invalid, ProxyDecision::Invalid(_)));
    assert!(!invalid.is_direct());

    let decision = config.resolve(&request("http://example.com/"));
    let intercept = decision.intercept().expect("request should be proxied");
    assert_eq!(intercept.via(), Via::Http);
    assert_eq!(intercept.proxy_uri().port(), Some(3128));
}

#[test]
fn via_follows_proxy_scheme() {
    // (proxy, expected via)
    let cases: &[(&str, Via)] = &[
        ("http://proxy.tld", Via::Http),
        ("https://proxy.tld", Via::Https),
        ("socks5://proxy.tld:1080", Via::Socks5),
        ("proxy.tld:8080", Via::Http),
    ];

    for &(proxy, expected) in cases {
        let config = ProxyConfig::new(proxy, "", "");
        let decision = config.resolve(&request(""));
        let intercept = decision.intercept().expect("proxy should resolve");
        assert_eq!(intercept.via(), expected, "{proxy:?}");
        assert_eq!(intercept.via().to_string(), intercept.proxy_uri().scheme(), "{proxy:?}");
        assert_eq!(intercept.via().as_str(), intercept.proxy_uri().scheme(), "{proxy:?}");
    }
}

#[test]
fn unparsable_proxy_is_an_error() {
    for proxy in ["::", "[::1", "127.0.0.1:99999"] {
        let config = ProxyConfig::new(proxy, "", "");
        let err = config
            .proxy_for_url(&request(""))
            .expect_err("unparsable proxy should error");
        assert!(err.is_invalid_proxy(), "{proxy:?}: {err:?}");
        assert!(err.is_config());
        assert_eq!(err.proxy(), Some(proxy));
        assert!(
            err.to_string().starts_with(&format!("invalid proxy address {proxy:?}: ")),
            "{err}"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}

#[test]
fn unsupported_scheme_without_repair_is_an_error() {
    let config = ProxyConfig::new("proxy:99999", "", "");
    let err = config
        .proxy_for_url(&request(""))
        .expect_err("unrepairable foreign scheme should error");
    assert!(err.is_unsupported_scheme(), "{err:?}");
    assert_eq!(err.proxy(), Some("proxy:99999"));
    assert!(err.to_string().contains("unsupported proxy scheme \"proxy\""), "{err}");
}

#[test]
fn bypass_is_decided_before_the_proxy_is_parsed() {
    let config = ProxyConfig::new("::", "", "example.com");
    assert_eq!(
        config
            .proxy_for_url(&request("http://example.com/"))
            .expect("bypassed request should not see the bad proxy"),
        None
    );
    assert!(config.proxy_for_url(&request("http://other.com/")).is_err());
}

#[test]
fn idna_hosts_match_ascii_entries() {
    let config = ProxyConfig::new("proxy", "", "xn--bcher-kva.example");
    assert_eq!(
        config
            .proxy_for_url(&request("http://bücher.example/"))
            .expect("should resolve"),
        None
    );
}

#[test]
fn idna_hosts_of_opaque_schemes_match_ascii_entries() {
    let config = ProxyConfig::new("proxy.tld:3128", "", "xn--bcher-kva.example");
    assert_eq!(
        config
            .proxy_for_url(&request("socks5://bücher.example"))
            .expect("should resolve"),
        None
    );
    assert!(
        config
            .proxy_for_url(&request("socks5://other.example"))
            .expect("should resolve")
            .is_some()
    );
}

#[test]
fn resolution_is_idempotent() {
    let configs = [
        ProxyConfig::new("127.0.0.1:8080", "", ""),
        ProxyConfig::new("proxy", "", "example.com"),
        ProxyConfig::new("::", "", ""),
        ProxyConfig::default(),
    ];

    for config in &configs {
        let url = request("http://example.com/path");
        let first = format!("{:?}", config.proxy_for_url(&url));
        for _ in 0..3 {
            assert_eq!(format!("{:?}", config.proxy_for_url(&url)), first, "{config:?}");
        }
    }
}

#[test]
fn proxy_func_owns_its_snapshot() {
    let proxy_for = ProxyConfig::new("proxy.tld:3128", "", "").proxy_func();
    let got = proxy_for(&request("http://example.com/"))
        .expect("should resolve")
        .expect("should be proxied");
    assert_eq!(got.as_str(), "http://proxy.tld:3128/");
}

#[test]
fn shared_config_across_threads() {
    let config = ProxyConfig::new("proxy.tld:3128", "", ".internal");

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let config = &config;
                s.spawn(move || {
                    let internal = request(&format!("http://host{i}.internal/"));
                    let external = request(&format!("http://host{i}.example.com/"));
                    (
                        config.proxy_for_url(&internal).ok().flatten(),
                        config.proxy_for_url(&external).ok().flatten(),
                    )
                })
            })
            .collect();

        for handle in handles {
            let (internal, external) = handle.join().expect("thread should not panic");
            assert_eq!(internal, None);
            assert_eq!(external.as_ref().map(Url::as_str), Some("http://proxy.tld:3128/"));
        }
    });
}
