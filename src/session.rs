use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    error::{AppError, AppResult},
    i18n::{t, Lang, Msg},
    views::Chrome,
};

const EMAIL_KEY: &str = "email";
const LANG_KEY: &str = "lang";
const FLASH_KEY: &str = "_flashes";
const OTP_KEY: &str = "otp";

/// Severity of a flash message, doubles as the CSS class of the banner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl FlashKind {
    pub fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Info => "info",
            FlashKind::Warning => "warning",
            FlashKind::Danger => "danger",
        }
    }
}

/// One-shot message shown on the next rendered page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// Per-request view of the browser session.
///
/// Resolves the language (a `?lang=` query parameter wins and is remembered) and the
/// signed-in email, and offers the few session mutations the handlers need.
#[derive(Clone)]
pub struct PageContext {
    session: Session,
    pub lang: Lang,
    pub email: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::SessionMissing(msg))?;

        let requested = Query::<LangQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.lang)
            .and_then(|code| Lang::from_code(&code));

        let lang = match requested {
            Some(lang) => {
                session.insert(LANG_KEY, lang).await?;
                lang
            }
            None => session.get::<Lang>(LANG_KEY).await?.unwrap_or_default(),
        };
        let email = session.get::<String>(EMAIL_KEY).await?;

        Ok(Self {
            session,
            lang,
            email,
        })
    }
}

impl PageContext {
    pub fn t(&self, key: Msg) -> &'static str {
        t(self.lang, key)
    }

    /// Queues a translated flash message.
    pub async fn flash(&self, kind: FlashKind, key: Msg) -> AppResult<()> {
        let mut pending = self
            .session
            .get::<Vec<Flash>>(FLASH_KEY)
            .await?
            .unwrap_or_default();
        pending.push(Flash {
            kind,
            message: self.t(key).to_string(),
        });
        self.session.insert(FLASH_KEY, pending).await?;
        Ok(())
    }

    /// Pops every pending flash message.
    pub async fn take_flashes(&self) -> AppResult<Vec<Flash>> {
        Ok(self
            .session
            .remove::<Vec<Flash>>(FLASH_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Everything the shared page layout needs. Consumes pending flashes.
    pub async fn chrome(&self) -> AppResult<Chrome> {
        Ok(Chrome {
            lang: self.lang,
            signed_in: self.email.is_some(),
            flashes: self.take_flashes().await?,
        })
    }

    pub async fn sign_in(&mut self, email: &str) -> AppResult<()> {
        self.session.cycle_id().await?;
        self.session.insert(EMAIL_KEY, email).await?;
        self.email = Some(email.to_string());
        Ok(())
    }

    /// Forgets the signed-in email; language and pending flashes survive.
    pub async fn sign_out(&mut self) -> AppResult<()> {
        self.session.remove::<String>(EMAIL_KEY).await?;
        self.email = None;
        Ok(())
    }

    pub async fn store_otp(&self, code: &str) -> AppResult<()> {
        self.session.insert(OTP_KEY, code).await?;
        Ok(())
    }
}
