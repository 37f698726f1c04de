//! Hostname normalization used as the lookup key for domain rules.

const WWW_PREFIX: &str = "www.";

/// Strips a single leading `www.` so that `www.example.com` and `example.com`
/// share one configuration key.
///
/// The match is case-sensitive and nothing else is rewritten. Lowercasing
/// happens earlier, when the host is taken from the request.
///
/// # Examples
///
/// ```
/// use domain_park::domain::hostname::normalize_hostname;
///
/// assert_eq!(normalize_hostname("www.example.com"), "example.com");
/// assert_eq!(normalize_hostname("example.com"), "example.com");
/// assert_eq!(normalize_hostname("www.www.example.com"), "www.example.com");
/// ```
pub fn normalize_hostname(host: &str) -> &str {
    host.strip_prefix(WWW_PREFIX).unwrap_or(host)
}

/// Returns `true` if a configuration key can never be reached by `x` or
/// `www.x` requests because it carries the prefix normalization removes.
pub fn is_shadowed_key(key: &str) -> bool {
    key.starts_with(WWW_PREFIX)
}
