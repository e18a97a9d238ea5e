use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use uuid::Uuid;

pub const SESSION_USER_KEY: &str = "user_id";

/// The session user's id, extracted from the server-side session. Routes
/// taking this extractor are only reachable while logged in.
pub struct AuthUser(pub Uuid);

/// Rejection for unauthenticated requests: bounce to the login form.
pub struct LoginRedirect;

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/login").into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = LoginRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| LoginRedirect)?;

        let user_id = session
            .get::<Uuid>(SESSION_USER_KEY)
            .await
            .ok()
            .flatten()
            .ok_or(LoginRedirect)?;

        Ok(AuthUser(user_id))
    }
}
