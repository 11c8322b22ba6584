use crate::error::{Error, Result};
use crate::models::admin::Admin;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

/// Bearer-token gate for the admin API. Verifies the token, loads the admin
/// it names and stores the row in request extensions for handlers to pick up
/// with `Extension<Admin>`.
///
/// Every rejection goes through `Error::Unauthorized`, so a missing header,
/// a bad scheme, an expired or forged token and a deleted or deactivated
/// admin are indistinguishable from outside. Database failures during the
/// lookup are the one exception; those surface as 500s, not 401s.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let Some(token) = bearer_token(req.headers()) else {
        return Err(Error::Unauthorized);
    };
    let claims = state
        .token_service
        .verify(token)
        .map_err(|_| Error::Unauthorized)?;
    let admin = state.auth_service.find_by_id(claims.admin_id).await?;
    let admin = resolve_admin(admin)?;

    req.extensions_mut().insert(admin);
    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_header = headers.get(header::AUTHORIZATION)?;
    let auth_str = auth_header.to_str().ok()?;
    auth_str.strip_prefix("Bearer ")
}

/// Gate decision once the token has named an admin id: the row must exist
/// and be active.
fn resolve_admin(admin: Option<Admin>) -> Result<Admin> {
    match admin {
        Some(admin) if admin.is_active => Ok(admin),
        _ => Err(Error::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn admin(is_active: bool) -> Admin {
        Admin {
            id: 1,
            email: "admin@example.org".into(),
            password_hash: "$argon2id$stub".into(),
            name: "Admin User".into(),
            phone: None,
            role: "super-admin".into(),
            profile_image_url: None,
            is_active,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn rejects_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(bearer_token(&headers_with_auth("Basic dXNlcjpwdw==")), None);
        assert_eq!(bearer_token(&headers_with_auth("bearer abc")), None);
        assert_eq!(bearer_token(&headers_with_auth("Bearer")), None);
    }

    #[test]
    fn active_admin_passes_the_gate() {
        assert!(resolve_admin(Some(admin(true))).is_ok());
    }

    #[test]
    fn missing_admin_is_unauthorized() {
        assert!(matches!(resolve_admin(None), Err(Error::Unauthorized)));
    }

    #[test]
    fn deactivated_admin_is_unauthorized() {
        assert!(matches!(
            resolve_admin(Some(admin(false))),
            Err(Error::Unauthorized)
        ));
    }
}
