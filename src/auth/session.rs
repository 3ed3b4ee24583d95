use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// Typed session payload stored in a signed cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub logged_in: bool,
    pub username: String,
    pub name: String,
}

impl SessionUser {
    pub fn new(username: String, name: String) -> Self {
        Self {
            logged_in: true,
            username,
            name,
        }
    }

    pub fn to_cookie(&self) -> anyhow::Result<Cookie<'static>> {
        let value = serde_json::to_string(self)?;
        Ok(Cookie::build((SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .build())
    }

    /// Reads the session back out of the jar. A cookie that fails signature
    /// verification never reaches us; a cookie that fails to parse, or one
    /// without `logged_in`, counts as no session at all.
    pub fn from_jar(jar: &SignedCookieJar) -> Option<Self> {
        let cookie = jar.get(SESSION_COOKIE)?;
        serde_json::from_str::<SessionUser>(cookie.value())
            .ok()
            .filter(|session| session.logged_in)
    }

    pub fn removal_cookie() -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE).path("/").build()
    }
}

/// Extractor guarding protected routes. Rejection is always a redirect to
/// the login page, never an error body.
pub struct AuthSession(pub SessionUser);

#[async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to("/login"))?;

        match SessionUser::from_jar(&jar) {
            Some(session) => Ok(AuthSession(session)),
            None => Err(Redirect::to("/login")),
        }
    }
}
