//! Fetch orchestration: mode selection and the redirect hop loop.

use tracing::{debug, warn};

use super::config::{FetchConfig, RedirectMode};
use super::constants::MAX_REDIRECTS_MESSAGE;
use super::executor::{HeaderMode, RequestExecutor, TransferInfo};
use super::redirect::{self, RedirectDecision};
use super::request::{FetchRequest, Method, append_query};
use super::result::{FetchResult, assemble};

/// HTTP fetch client that transparently follows 301/302/303 redirects.
///
/// In native mode redirect following is delegated to the transport; in manual
/// mode the client walks the chain itself, one hop at a time, for
/// environments where transport auto-follow is disabled by policy. Both modes
/// produce the same [`FetchResult`] shape.
///
/// Configuration is injected at construction and never mutated afterwards,
/// so a client (or clones of it) can serve concurrent fetches safely.
///
/// # Example
///
/// ```no_run
/// use pagefetch::{FetchClient, FetchConfig, FetchRequest};
///
/// let client = FetchClient::new(FetchConfig::default());
/// let result = client.fetch(FetchRequest::get("https://example.com/page"));
/// if result.is_success() {
///     println!("{}", result.body);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    config: FetchConfig,
}

impl FetchClient {
    /// Creates a client with the given configuration.
    #[must_use]
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches a remote resource, following redirects up to the configured
    /// ceiling.
    ///
    /// Never returns `Err`: transport failures and the redirect-limit
    /// condition are reported through [`FetchResult`] fields. Each call is
    /// fully synchronous and blocking, with no internal parallelism; the
    /// underlying connection is acquired at the start of the call and
    /// released on every exit path.
    #[must_use]
    pub fn fetch(&self, request: FetchRequest) -> FetchResult {
        let mut request = request;

        // GET parameters travel in the URL; POST parameters travel in the
        // body and are left for the executor.
        if request.method == Method::Get && !request.params.is_empty() {
            let url = append_query(request.url(), &request.params);
            request.set_url(url);
        }

        let native = self.config.redirect_mode == RedirectMode::Native;
        let executor = match RequestExecutor::new(&self.config, native) {
            Ok(executor) => executor,
            Err(error) => {
                warn!(url = %request.url(), code = error.code, "client construction failed");
                let info = TransferInfo {
                    http_status: 0,
                    effective_url: request.url().to_string(),
                    content_type: String::new(),
                };
                return assemble(String::new(), error.code, error.message, info, None);
            }
        };

        if native {
            Self::fetch_native(&executor, &request)
        } else {
            self.fetch_manual(&executor, request)
        }
    }

    /// Convenience entry point mirroring the classic
    /// `(url, params, use_post, credentials)` call shape.
    ///
    /// `credentials` uses the `"username:password"` form; an empty string
    /// means unauthenticated.
    #[must_use]
    pub fn fetch_url(
        &self,
        url: &str,
        params: &[(&str, &str)],
        use_post: bool,
        credentials: &str,
    ) -> FetchResult {
        let mut request = if use_post {
            FetchRequest::post(url)
        } else {
            FetchRequest::get(url)
        };
        request = request.params(params.iter().copied());
        if !credentials.is_empty() {
            request = request.credentials(credentials);
        }
        self.fetch(request)
    }

    /// Native mode: the transport already followed redirects (bounded by the
    /// configured ceiling, referer set per hop), so the body is final and
    /// redirect resolution is skipped.
    fn fetch_native(executor: &RequestExecutor, request: &FetchRequest) -> FetchResult {
        let tx = executor.execute(request, HeaderMode::BodyOnly);
        assemble(
            tx.raw_body,
            tx.transport_error_code,
            tx.transport_error_message,
            tx.info,
            None,
        )
    }

    /// Manual mode: iterative hop loop.
    ///
    /// Iterative on purpose: long or cyclic chains must not grow the call
    /// stack. The hop ceiling is the only cycle breaker; there is no
    /// visited-URL tracking.
    fn fetch_manual(&self, executor: &RequestExecutor, mut request: FetchRequest) -> FetchResult {
        let mut hop: u32 = 0;
        loop {
            let tx = executor.execute(&request, HeaderMode::HeaderAndBody);
            match redirect::resolve(&tx) {
                RedirectDecision::Terminal { body, info } => {
                    debug!(hops = hop, status = info.http_status, "chain terminated");
                    return assemble(
                        body,
                        tx.transport_error_code,
                        tx.transport_error_message,
                        info,
                        None,
                    );
                }
                RedirectDecision::Redirect { target, body } => {
                    if hop >= self.config.max_redirects {
                        warn!(hops = hop, url = %request.url(), "redirect ceiling reached");
                        // The last hop's body is returned, not an empty one.
                        return assemble(
                            body,
                            tx.transport_error_code,
                            tx.transport_error_message,
                            tx.info,
                            Some(MAX_REDIRECTS_MESSAGE),
                        );
                    }
                    debug!(hop, location = %target, "following redirect");
                    request.set_url(target.to_string());
                    hop += 1;
                }
            }
        }
    }
}
