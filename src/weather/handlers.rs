use axum::{extract::State, response::Html, routing::get, Form, Router};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::AppResult, session::PageContext, state::AppState, views};

use super::services::lookup_city;

#[derive(Debug, Default, Deserialize)]
pub struct CityForm {
    #[serde(default)]
    pub city: String,
}

pub fn weather_routes() -> Router<AppState> {
    Router::new().route("/weather", get(weather_page).post(weather_lookup))
}

pub async fn weather_page(ctx: PageContext) -> AppResult<Html<String>> {
    Ok(views::weather::weather_page(&ctx.chrome().await?, None))
}

#[instrument(skip(state, ctx))]
pub async fn weather_lookup(
    State(state): State<AppState>,
    ctx: PageContext,
    Form(form): Form<CityForm>,
) -> AppResult<Html<String>> {
    let city = form.city.trim();
    let card = if city.is_empty() {
        None
    } else {
        Some(lookup_city(state.weather.as_ref(), city).await)
    };
    Ok(views::weather::weather_page(
        &ctx.chrome().await?,
        card.as_ref(),
    ))
}
