use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use tracing::{debug, info, instrument, warn};

use crate::{
    auth::{
        dto::{ForgotPasswordForm, LoginForm, OtpRequest, OtpResponse, SignupForm},
        password::{hash_password, verify_password},
        repo::is_duplicate_email,
        repo_types::{Farmer, NewFarmer},
        services::{generate_otp, normalize_email},
    },
    error::AppResult,
    i18n::Msg,
    session::{FlashKind, PageContext},
    state::AppState,
    views,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup_page).post(signup))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
        .route(
            "/forgot-password",
            get(forgot_password_page).post(forgot_password),
        )
        .route("/send_otp", post(send_otp))
}

pub async fn signup_page(ctx: PageContext) -> AppResult<Html<String>> {
    Ok(views::auth::signup_page(&ctx.chrome().await?))
}

#[instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<SignupForm>,
) -> AppResult<Redirect> {
    let valid = match form.validate() {
        Ok(v) => v,
        Err(msg) => {
            warn!(reason = ?msg, "signup rejected");
            ctx.flash(FlashKind::Danger, msg).await?;
            return Ok(Redirect::to("/signup"));
        }
    };

    if Farmer::find_by_email(&state.db, &valid.email).await?.is_some() {
        warn!(email = %valid.email, "email already registered");
        ctx.flash(FlashKind::Warning, Msg::EmailExists).await?;
        return Ok(Redirect::to("/login"));
    }

    let password_hash = hash_password(&valid.password)?;
    let new = NewFarmer {
        name: &valid.name,
        email: &valid.email,
        village: &valid.village,
        password_hash: &password_hash,
    };
    match Farmer::create(&state.db, &new).await {
        Ok(farmer) => {
            info!(farmer_id = farmer.id, email = %farmer.email, "farmer registered");
        }
        // lost a race with a concurrent signup for the same email
        Err(e) if is_duplicate_email(&e) => {
            warn!(email = %valid.email, "email already registered");
            ctx.flash(FlashKind::Warning, Msg::EmailExists).await?;
            return Ok(Redirect::to("/login"));
        }
        Err(e) => return Err(e.into()),
    }

    ctx.flash(FlashKind::Success, Msg::SignupSuccess).await?;
    Ok(Redirect::to("/login"))
}

pub async fn login_page(ctx: PageContext) -> AppResult<Html<String>> {
    Ok(views::auth::login_page(&ctx.chrome().await?))
}

#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    mut ctx: PageContext,
    Form(form): Form<LoginForm>,
) -> AppResult<Redirect> {
    let email = normalize_email(&form.email);
    if email.is_empty() || form.password.is_empty() {
        ctx.flash(FlashKind::Danger, Msg::FillFields).await?;
        return Ok(Redirect::to("/login"));
    }

    let verified = match Farmer::find_by_email(&state.db, &email).await? {
        Some(farmer) => verify_password(&form.password, &farmer.password_hash)?,
        None => {
            warn!(%email, "login unknown email");
            false
        }
    };

    if !verified {
        warn!(%email, "login rejected");
        ctx.flash(FlashKind::Danger, Msg::Invalid).await?;
        return Ok(Redirect::to("/login"));
    }

    ctx.sign_in(&email).await?;
    ctx.flash(FlashKind::Success, Msg::Login).await?;
    info!(%email, "farmer logged in");
    Ok(Redirect::to("/dashboard"))
}

#[instrument(skip_all)]
pub async fn logout(mut ctx: PageContext) -> AppResult<Redirect> {
    if let Some(email) = ctx.email.as_deref() {
        info!(%email, "farmer logged out");
    }
    ctx.sign_out().await?;
    ctx.flash(FlashKind::Info, Msg::Logout).await?;
    Ok(Redirect::to("/"))
}

pub async fn forgot_password_page(ctx: PageContext) -> AppResult<Html<String>> {
    Ok(views::auth::forgot_password_page(&ctx.chrome().await?))
}

/// Always claims success; no reset mail is actually sent.
#[instrument(skip_all)]
pub async fn forgot_password(
    ctx: PageContext,
    Form(form): Form<ForgotPasswordForm>,
) -> AppResult<Redirect> {
    info!(email = %normalize_email(&form.email), "password reset requested, no mail transport configured");
    ctx.flash(FlashKind::Success, Msg::ResetSent).await?;
    Ok(Redirect::to("/login"))
}

/// Issues a code into the session. The code is neither delivered nor verified anywhere.
#[instrument(skip_all)]
pub async fn send_otp(
    ctx: PageContext,
    Form(req): Form<OtpRequest>,
) -> AppResult<Json<OtpResponse>> {
    let otp = generate_otp();
    ctx.store_otp(&otp).await?;
    info!(email = %normalize_email(&req.email), "otp issued");
    debug!(%otp, "otp value");
    Ok(Json(OtpResponse {
        message: "OTP sent successfully",
    }))
}
