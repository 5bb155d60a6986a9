use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::header::AUTHORIZATION;
use http::{HeaderMap, Method};
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::Role;
use crate::state::AppState;

/// Identity attached to the request after the gate has verified a token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Access {
    Public,
    Authenticated,
    AnyRole(&'static [Role]),
}

struct Rule {
    method: Option<Method>,
    pattern: &'static str,
    access: Access,
}

// Ordered rule table, first match wins. `*` matches one path segment, `**`
// matches the rest of the path.
const RULES: &[Rule] = &[
    Rule {
        method: Some(Method::POST),
        pattern: "/api/auth/register",
        access: Access::Public,
    },
    Rule {
        method: Some(Method::POST),
        pattern: "/api/auth/login",
        access: Access::Public,
    },
    // Order placement is publicly writable, including the quick-order variant
    Rule {
        method: Some(Method::POST),
        pattern: "/api/portfolio/*/orders",
        access: Access::Public,
    },
    Rule {
        method: Some(Method::POST),
        pattern: "/api/portfolio/*/orders/public",
        access: Access::Public,
    },
    Rule {
        method: None,
        pattern: "/api/admin/**",
        access: Access::AnyRole(&[Role::Admin]),
    },
    Rule {
        method: None,
        pattern: "/api/analytics/**",
        access: Access::AnyRole(&[Role::User, Role::Admin]),
    },
    Rule {
        method: Some(Method::GET),
        pattern: "/api/auth/profile/**",
        access: Access::Authenticated,
    },
    Rule {
        method: Some(Method::PUT),
        pattern: "/api/auth/**",
        access: Access::Authenticated,
    },
    Rule {
        method: None,
        pattern: "/api/portfolio/**",
        access: Access::Authenticated,
    },
];

pub fn required_access(method: &Method, path: &str) -> Access {
    RULES
        .iter()
        .find(|rule| {
            rule.method.as_ref().map_or(true, |m| m == method) && matches(rule.pattern, path)
        })
        .map(|rule| rule.access)
        // Anything not matched above requires an authenticated session
        .unwrap_or(Access::Authenticated)
}

fn matches(pattern: &str, path: &str) -> bool {
    let mut pat = pattern.split('/');
    let mut segs = path.split('/');
    loop {
        match (pat.next(), segs.next()) {
            (Some("**"), _) => return true,
            (Some("*"), Some(_)) => continue,
            (Some(expected), Some(actual)) if expected == actual => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Middleware applied to the whole app. Evaluates the rule table for every
/// request under /api; failures short-circuit before any handler runs and
/// never leak which check failed. On success the subject and role are
/// attached to the request extensions for downstream handlers.
pub async fn require_access(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Liveness probe stays open
    if !req.uri().path().starts_with("/api") {
        return Ok(next.run(req).await);
    }

    let access = required_access(req.method(), req.uri().path());
    if access == Access::Public {
        return Ok(next.run(req).await);
    }

    let token = bearer_token(req.headers()).ok_or(AppError::Unauthorized)?;
    let claims = state
        .tokens
        .parse(token)
        .map_err(|_| AppError::Unauthorized)?;
    if !state.tokens.validate(token, &claims.sub) {
        return Err(AppError::Unauthorized);
    }
    let role = Role::from_str(&claims.role).map_err(|_| AppError::Unauthorized)?;

    if let Access::AnyRole(allowed) = access {
        if !allowed.contains(&role) {
            return Err(AppError::Forbidden);
        }
    }

    req.extensions_mut().insert(AuthUser {
        username: claims.sub,
        role,
    });
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_and_login_are_public() {
        assert_eq!(
            required_access(&Method::POST, "/api/auth/register"),
            Access::Public
        );
        assert_eq!(
            required_access(&Method::POST, "/api/auth/login"),
            Access::Public
        );
    }

    #[test]
    fn order_placement_is_public() {
        let id = "7a2e9f8c-1111-2222-3333-444455556666";
        assert_eq!(
            required_access(&Method::POST, &format!("/api/portfolio/{id}/orders")),
            Access::Public
        );
        assert_eq!(
            required_access(&Method::POST, &format!("/api/portfolio/{id}/orders/public")),
            Access::Public
        );
    }

    #[test]
    fn reading_orders_still_needs_auth() {
        let id = "7a2e9f8c-1111-2222-3333-444455556666";
        assert_eq!(
            required_access(&Method::GET, &format!("/api/portfolio/{id}/orders")),
            Access::Authenticated
        );
        assert_eq!(
            required_access(&Method::GET, &format!("/api/portfolio/{id}/orders/recent")),
            Access::Authenticated
        );
    }

    #[test]
    fn admin_routes_require_admin() {
        assert_eq!(
            required_access(&Method::GET, "/api/admin/users"),
            Access::AnyRole(&[Role::Admin])
        );
    }

    #[test]
    fn analytics_routes_allow_user_and_admin() {
        assert_eq!(
            required_access(&Method::GET, "/api/analytics/profit-loss"),
            Access::AnyRole(&[Role::User, Role::Admin])
        );
    }

    #[test]
    fn profile_and_update_routes_need_any_session() {
        assert_eq!(
            required_access(&Method::GET, "/api/auth/profile/alice"),
            Access::Authenticated
        );
        assert_eq!(
            required_access(&Method::PUT, "/api/auth/alice"),
            Access::Authenticated
        );
    }

    #[test]
    fn portfolio_routes_need_any_session() {
        assert_eq!(
            required_access(&Method::POST, "/api/portfolio"),
            Access::Authenticated
        );
        assert_eq!(
            required_access(&Method::GET, "/api/portfolio"),
            Access::Authenticated
        );
    }

    #[test]
    fn unmatched_routes_default_to_authenticated() {
        assert_eq!(
            required_access(&Method::GET, "/api/unknown"),
            Access::Authenticated
        );
    }

    #[test]
    fn wildcard_matches_single_segment_only() {
        assert!(matches("/api/portfolio/*/orders", "/api/portfolio/1/orders"));
        assert!(!matches(
            "/api/portfolio/*/orders",
            "/api/portfolio/1/2/orders"
        ));
        assert!(!matches("/api/portfolio/*/orders", "/api/portfolio/orders"));
    }

    #[test]
    fn bearer_extraction_strips_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));

        let mut bad = HeaderMap::new();
        bad.insert(AUTHORIZATION, "Basic abc".parse().unwrap());
        assert_eq!(bearer_token(&bad), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
