use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tracing::warn;

use crate::{
    auth::repo_types::Farmer,
    error::AppError,
    i18n::Msg,
    session::{FlashKind, PageContext},
    state::AppState,
};

/// The signed-in farmer, resolved from the session email.
///
/// Without a session, or when the account behind it is gone, the request is answered with
/// a "please login first" flash and a redirect to `/login`.
pub struct AuthenticatedFarmer {
    pub ctx: PageContext,
    pub farmer: Farmer,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedFarmer {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mut ctx = PageContext::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let farmer = match ctx.email.as_deref() {
            Some(email) => Farmer::find_by_email(&state.db, email)
                .await
                .map_err(|e| AppError::from(e).into_response())?,
            None => None,
        };

        if let Some(farmer) = farmer {
            return Ok(Self { ctx, farmer });
        }

        if let Some(email) = ctx.email.clone() {
            warn!(%email, "session refers to a missing account");
            ctx.sign_out().await.map_err(IntoResponse::into_response)?;
        }
        ctx.flash(FlashKind::Warning, Msg::LoginFirst)
            .await
            .map_err(IntoResponse::into_response)?;
        Err(Redirect::to("/login").into_response())
    }
}
