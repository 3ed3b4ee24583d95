use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::LoginForm,
        repo::Credential,
        session::SessionUser,
    },
    error::AppError,
    pages,
    state::AppState,
};

pub async fn index() -> Html<String> {
    Html(pages::login_page(None))
}

pub async fn login_page() -> Html<String> {
    Html(pages::login_page(None))
}

#[instrument(skip(state, jar, form), fields(username = %form.username))]
pub async fn login_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match Credential::find_by_login(&state.db, &form.username, &form.password).await? {
        Some(user) => {
            let session = SessionUser::new(user.username, user.name);
            let jar = jar.add(session.to_cookie()?);
            info!("user logged in");
            Ok((jar, Redirect::to("/home")).into_response())
        }
        None => {
            // Same message for unknown user and wrong password.
            warn!("login rejected");
            Err(AppError::Auth)
        }
    }
}

/// Clears the session unconditionally, logged in or not.
pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    let jar = jar.remove(SessionUser::removal_cookie());
    (jar, Redirect::to("/login"))
}
