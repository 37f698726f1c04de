//! Host extraction from the incoming request.

use axum::http::{HeaderMap, Uri, header};

/// Extracts the lowercased hostname of a request.
///
/// Reads the `Host` header, falling back to the URI authority used by
/// HTTP/2 requests. Handles:
/// - IPv4 addresses (e.g., `192.168.1.1`)
/// - IPv6 addresses (e.g., `[::1]`)
/// - Hostnames with ports (e.g., `example.com:3000`)
/// - Plain hostnames (e.g., `example.com`)
///
/// Port numbers are stripped and ASCII letters lowercased, matching how
/// URL parsers report hostnames.
///
/// A missing or non-UTF-8 host yields an empty string, which resolves to
/// the configured defaults.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "WWW.Example.com:8080".parse().unwrap());
///
/// let domain = extract_domain(&headers, &Uri::from_static("/"));
/// assert_eq!(domain, "www.example.com");
/// ```
pub fn extract_domain(headers: &HeaderMap, uri: &Uri) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or_default();

    strip_port(strip_userinfo(host)).to_ascii_lowercase()
}

fn strip_userinfo(authority: &str) -> &str {
    authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host)
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // IPv6 address (e.g., [::1] or [::1]:8080)
        match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        }
    } else {
        // IPv4, hostname, or localhost
        host.split(':').next().unwrap_or(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    fn with_host(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(host));
        headers
    }

    fn root() -> Uri {
        Uri::from_static("/")
    }

    #[test]
    fn test_extract_domain_simple() {
        assert_eq!(extract_domain(&with_host("example.com"), &root()), "example.com");
    }

    #[test]
    fn test_extract_domain_with_port() {
        assert_eq!(
            extract_domain(&with_host("example.com:3000"), &root()),
            "example.com"
        );
    }

    #[test]
    fn test_extract_domain_keeps_www() {
        assert_eq!(
            extract_domain(&with_host("www.example.com"), &root()),
            "www.example.com"
        );
    }

    #[test]
    fn test_extract_domain_lowercases() {
        assert_eq!(
            extract_domain(&with_host("WWW.Example.COM"), &root()),
            "www.example.com"
        );
    }

    #[test]
    fn test_extract_domain_localhost_with_port() {
        assert_eq!(extract_domain(&with_host("localhost:8080"), &root()), "localhost");
    }

    #[test]
    fn test_extract_domain_ip_with_port() {
        assert_eq!(
            extract_domain(&with_host("192.168.1.1:9000"), &root()),
            "192.168.1.1"
        );
    }

    #[test]
    fn test_extract_domain_ipv6_with_port() {
        assert_eq!(extract_domain(&with_host("[::1]:8080"), &root()), "[::1]");
    }

    #[test]
    fn test_extract_domain_from_uri_authority() {
        let uri = Uri::from_static("https://Park.Test:8443/sale?x=1");
        assert_eq!(extract_domain(&HeaderMap::new(), &uri), "park.test");
    }

    #[test]
    fn test_header_wins_over_uri_authority() {
        let uri = Uri::from_static("https://other.test/");
        assert_eq!(extract_domain(&with_host("park.test"), &uri), "park.test");
    }

    #[test]
    fn test_extract_domain_missing_host_is_empty() {
        assert_eq!(extract_domain(&HeaderMap::new(), &root()), "");
    }

    #[test]
    fn test_extract_domain_invalid_utf8_is_empty() {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_bytes(&[0xFF, 0xFE, 0xFD]) {
            headers.insert(header::HOST, value);
            assert_eq!(extract_domain(&headers, &root()), "");
        }
    }
}
