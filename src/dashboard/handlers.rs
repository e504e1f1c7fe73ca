use axum::{extract::State, response::Html, routing::get, Router};
use tracing::instrument;

use crate::{
    auth::{extractors::AuthenticatedFarmer, repo_types::Farmer},
    error::AppResult,
    session::PageContext,
    state::AppState,
    views::{self, home::DashboardView},
    weather::services::{get_weather, get_weather_alerts},
};

const SOIL_GRAPH: &str = "soil_graph.png";

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/dashboard", get(dashboard))
}

#[instrument(skip_all)]
pub async fn home(State(state): State<AppState>, ctx: PageContext) -> AppResult<Html<String>> {
    let farmer = match ctx.email.as_deref() {
        Some(email) => Farmer::find_by_email(&state.db, email).await?,
        None => None,
    };
    Ok(views::home::home_page(&ctx.chrome().await?, farmer.as_ref()))
}

#[instrument(skip_all, fields(farmer_id = auth.farmer.id))]
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthenticatedFarmer,
) -> AppResult<Html<String>> {
    let AuthenticatedFarmer { ctx, farmer } = auth;
    let provider = state.weather.as_ref();

    let weather = get_weather(provider, &farmer.village).await;
    let alerts = get_weather_alerts(provider, Some(state.config.weather.alerts_at())).await;

    let graph = tokio::fs::try_exists(state.config.static_dir.join(SOIL_GRAPH))
        .await
        .unwrap_or(false)
        .then_some(SOIL_GRAPH);
    let latest_upload = state.uploads.latest().await?;

    let view = DashboardView {
        farmer: &farmer,
        weather: &weather,
        alerts: &alerts,
        soil_graph: graph,
        latest_upload: latest_upload.as_deref(),
    };
    Ok(views::home::dashboard_page(&ctx.chrome().await?, &view))
}
