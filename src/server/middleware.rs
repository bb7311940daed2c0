//! Route protection based on the presence of the session cookie.
//!
//! Requests to paths selected by a [`RouteMatcher`] are redirected to `/` unless they carry a
//! non-empty session cookie. The cookie is not verified here: its signature and expiry are
//! checked by the session layer on the routes that read the session.

use axum::{
    extract::{Request, State},
    http::{header::COOKIE, HeaderMap},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    Router,
};
use tower_sessions::cookie::Cookie;

use crate::server::session::SESSION_COOKIE_NAME;

/// Paths protected by default.
pub const DEFAULT_PROTECTED_ROUTES: [&str; 1] = ["/dashboard"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum RoutePattern {
    /// Matches the path only
    Exact(String),
    /// Matches the path and every path below it, written as `/prefix/:path*`
    Prefix(String),
}

/// Selects the request paths a middleware applies to.
///
/// Patterns are either an exact path such as `/dashboard` or a prefix with a `/:path*`
/// suffix such as `/dashboard/:path*`, matching `/dashboard` and all of its sub-paths.
/// Trailing slashes are ignored on both patterns and paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatcher {
    patterns: Vec<RoutePattern>,
}

impl RouteMatcher {
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| match pattern.as_ref().strip_suffix("/:path*") {
                Some(prefix) => RoutePattern::Prefix(normalize(prefix).to_string()),
                None => RoutePattern::Exact(normalize(pattern.as_ref()).to_string()),
            })
            .collect();

        Self { patterns }
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = normalize(path);

        self.patterns.iter().any(|pattern| match pattern {
            RoutePattern::Exact(exact) => path == exact,
            RoutePattern::Prefix(prefix) if prefix == "/" => true,
            RoutePattern::Prefix(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        })
    }
}

impl Default for RouteMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_PROTECTED_ROUTES)
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        path => path,
    }
}

/// Whether the request carries the session cookie with a non-empty value.
pub fn has_session_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .any(|cookie| cookie.name() == SESSION_COOKIE_NAME && !cookie.value().is_empty())
}

/// Redirect requests to protected paths without a session cookie to `/`.
pub async fn require_session_cookie(
    State(matcher): State<RouteMatcher>,
    req: Request,
    next: Next,
) -> Response {
    if matcher.matches(req.uri().path()) && !has_session_cookie(req.headers()) {
        return Redirect::temporary("/").into_response();
    }

    next.run(req).await
}

/// Guard every route of `router` selected by `matcher`.
pub fn protect(router: Router, matcher: RouteMatcher) -> Router {
    router.layer(middleware::from_fn_with_state(matcher, require_session_cookie))
}
