//! Redirect target construction.

/// Appends the request path and query to a target URL.
///
/// This is plain string concatenation: the target keeps its own path and
/// query, no slashes are collapsed and nothing is re-encoded. A target that
/// already carries a query therefore ends up with two `?` delimiters.
///
/// `?` is only added when the query is non-empty.
///
/// # Examples
///
/// ```
/// use domain_park::domain::location::redirect_location;
///
/// assert_eq!(
///     redirect_location("https://shop.example", "/sale", Some("ref=x")),
///     "https://shop.example/sale?ref=x"
/// );
/// assert_eq!(redirect_location("https://shop.example", "/", None), "https://shop.example/");
/// ```
pub fn redirect_location(target: &str, path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{target}{path}?{query}"),
        None => format!("{target}{path}"),
    }
}
