use std::collections::HashMap;

use axum::{
    extract::{Multipart, State},
    response::Html,
    routing::get,
    Form, Router,
};
use bytes::Bytes;
use tracing::{info, instrument, warn};

use crate::{
    advice::{crops, help, soil},
    auth::extractors::AuthenticatedFarmer,
    error::AppResult,
    i18n::Msg,
    session::{FlashKind, PageContext},
    state::AppState,
    storage::sanitize_filename,
    views,
};

pub fn advice_routes() -> Router<AppState> {
    Router::new()
        .route("/soil", get(soil_page).post(soil_upload))
        .route("/upload", get(upload_page).post(upload_submit))
        .route("/help_card", get(help_card_page).post(help_card_submit))
}

/// A multipart form with one file field and any number of text fields.
struct UploadForm {
    file: Option<(String, Bytes)>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    async fn read(mut mp: Multipart, file_field: &str) -> AppResult<Self> {
        let mut file = None;
        let mut fields = HashMap::new();
        while let Some(field) = mp.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            if name == file_field {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                if !filename.is_empty() {
                    file = Some((filename, data));
                }
            } else {
                let value = field.text().await?;
                fields.insert(name, value);
            }
        }
        Ok(Self { file, fields })
    }

    fn text(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    /// The uploaded file under its sanitized name, if it has a usable one.
    fn sanitized_file(self) -> Option<(String, Bytes)> {
        let (raw, data) = self.file?;
        match sanitize_filename(&raw) {
            Some(name) => Some((name, data)),
            None => {
                warn!(filename = %raw, "upload filename has no usable characters");
                None
            }
        }
    }
}

pub async fn soil_page(ctx: PageContext) -> AppResult<Html<String>> {
    Ok(views::advice::soil_page(&ctx.chrome().await?, None))
}

#[instrument(skip_all)]
pub async fn soil_upload(
    State(state): State<AppState>,
    ctx: PageContext,
    mp: Multipart,
) -> AppResult<Html<String>> {
    let Some((filename, data)) = UploadForm::read(mp, "soil_photo").await?.sanitized_file()
    else {
        ctx.flash(FlashKind::Danger, Msg::SoilPhotoMissing).await?;
        return Ok(views::advice::soil_page(&ctx.chrome().await?, None));
    };

    let report = soil::demo_report(&data);
    state.uploads.put(&filename, data).await?;
    info!(%filename, "soil photo stored, demo report served");

    Ok(views::advice::soil_page(
        &ctx.chrome().await?,
        Some((&filename, report)),
    ))
}

pub async fn upload_page(AuthenticatedFarmer { ctx, .. }: AuthenticatedFarmer) -> AppResult<Html<String>> {
    Ok(views::advice::upload_page(&ctx.chrome().await?, None))
}

#[instrument(skip_all, fields(farmer_id = auth.farmer.id))]
pub async fn upload_submit(
    State(state): State<AppState>,
    auth: AuthenticatedFarmer,
    mp: Multipart,
) -> AppResult<Html<String>> {
    let ctx = auth.ctx;
    let form = UploadForm::read(mp, "photo").await?;
    let crop = form.text("crop").to_string();

    let Some((filename, data)) = form.sanitized_file() else {
        ctx.flash(FlashKind::Danger, Msg::UploadMissing).await?;
        return Ok(views::advice::upload_page(&ctx.chrome().await?, None));
    };

    state.uploads.put(&filename, data).await?;
    ctx.flash(FlashKind::Success, Msg::UploadSuccess).await?;

    let advice = crops::recommend(&crop);
    info!(%filename, crop = %advice.crop, "crop image stored");
    Ok(views::advice::upload_page(
        &ctx.chrome().await?,
        Some((&filename, &advice)),
    ))
}

pub async fn help_card_page(
    AuthenticatedFarmer { ctx, .. }: AuthenticatedFarmer,
) -> AppResult<Html<String>> {
    Ok(views::advice::help_card_page(&ctx.chrome().await?, None))
}

#[instrument(skip_all, fields(farmer_id = auth.farmer.id))]
pub async fn help_card_submit(
    auth: AuthenticatedFarmer,
    Form(mut form): Form<help::HelpCardForm>,
) -> AppResult<Html<String>> {
    form.crop = form.crop.to_lowercase();
    let suggestion = help::suggestion_for(&form.crop);
    info!(crop = %form.crop, "help card submitted");
    Ok(views::advice::help_card_page(
        &auth.ctx.chrome().await?,
        Some((&form, suggestion)),
    ))
}
