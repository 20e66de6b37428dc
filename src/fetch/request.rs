//! Fetch request description and GET query-string assembly.

use tracing::trace;

/// HTTP method supported by the fetch client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// HTTP Basic credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username sent in the Authorization header.
    pub username: String,
    /// Password sent in the Authorization header.
    pub password: String,
}

impl Credentials {
    /// Parses the `"username:password"` form.
    ///
    /// Splits on the first `:`; a string without one is a bare username with
    /// an empty password. An empty string means unauthenticated and yields
    /// `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let (username, password) = raw.split_once(':').unwrap_or((raw, ""));
        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// One resource to fetch: URL, method, parameters, optional credentials.
///
/// During a manual redirect chain only `url` changes between hops; method,
/// parameters, and credentials are resent unchanged on every hop. That means
/// a POST body is re-posted to every redirect target — a known limitation of
/// the 301/302/303-only redirect set this client follows.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub(crate) url: String,
    pub(crate) method: Method,
    pub(crate) params: Vec<(String, String)>,
    pub(crate) credentials: Option<Credentials>,
}

impl FetchRequest {
    /// Creates a GET request. Parameters added later travel in the query
    /// string, encoded by the orchestrator before the first hop.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            params: Vec::new(),
            credentials: None,
        }
    }

    /// Creates a POST request. Parameters travel as a form body.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Post,
            params: Vec::new(),
            credentials: None,
        }
    }

    /// Appends one parameter. Order is preserved.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Appends parameters from an iterator of pairs. Order is preserved.
    #[must_use]
    pub fn params<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(pairs.into_iter().map(|(key, value)| (key.into(), value.into())));
        self
    }

    /// Attaches HTTP Basic credentials from the `"username:password"` form.
    /// An empty string leaves the request unauthenticated.
    #[must_use]
    pub fn credentials(mut self, raw: &str) -> Self {
        self.credentials = Credentials::parse(raw);
        self
    }

    /// Current target URL (replaced at each manual redirect hop).
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replaces the target URL for the next hop. All other fields stay.
    pub(crate) fn set_url(&mut self, url: String) {
        trace!(from = %self.url, to = %url, "request retargeted");
        self.url = url;
    }
}

/// Percent-encodes `params` into a query string.
///
/// Every pair is included, as `key=value` joined with `&`, in insertion
/// order. Spaces encode as `%20`, not `+`.
#[must_use]
pub fn encode_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends encoded `params` to `url`. Empty params leave the URL untouched;
/// a URL that already carries a query gets `&` instead of `?`.
pub(crate) fn append_query(url: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{}", encode_query(params))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_preserves_all_pairs() {
        // Regression guard: every pair must survive encoding, not just the
        // last one appended.
        let params = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "two words".to_string()),
            ("c".to_string(), "3".to_string()),
        ];
        assert_eq!(encode_query(&params), "a=1&b=two%20words&c=3");
    }

    #[test]
    fn test_encode_query_percent_encodes_keys_and_values() {
        let params = vec![("key name".to_string(), "a&b=c".to_string())];
        assert_eq!(encode_query(&params), "key%20name=a%26b%3Dc");
    }

    #[test]
    fn test_append_query_skips_empty_params() {
        assert_eq!(append_query("http://example.com/page", &[]), "http://example.com/page");
    }

    #[test]
    fn test_append_query_extends_existing_query() {
        let params = vec![("b".to_string(), "2".to_string())];
        assert_eq!(
            append_query("http://example.com/page?a=1", &params),
            "http://example.com/page?a=1&b=2"
        );
    }

    #[test]
    fn test_credentials_parse_splits_on_first_colon() {
        let credentials = Credentials::parse("user:pa:ss").expect("non-empty credentials");
        assert_eq!(credentials.username, "user");
        assert_eq!(credentials.password, "pa:ss");
    }

    #[test]
    fn test_credentials_parse_empty_is_unauthenticated() {
        assert!(Credentials::parse("").is_none());
    }

    #[test]
    fn test_credentials_parse_without_colon_is_bare_username() {
        let credentials = Credentials::parse("user").expect("non-empty credentials");
        assert_eq!(credentials.username, "user");
        assert_eq!(credentials.password, "");
    }

    #[test]
    fn test_request_builder_keeps_param_order() {
        let request = FetchRequest::get("http://example.com")
            .param("z", "1")
            .param("a", "2")
            .params([("m", "3")]);
        let keys: Vec<&str> = request.params.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
