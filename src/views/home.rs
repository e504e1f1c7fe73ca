use axum::response::Html;

use crate::{
    auth::repo_types::Farmer,
    i18n::Msg,
    weather::dto::{WeatherAlert, WeatherSummary},
};

use super::{escape, format_timestamp, layout, Chrome};

pub fn home_page(chrome: &Chrome, farmer: Option<&Farmer>) -> Html<String> {
    let greeting = match farmer {
        Some(f) => format!(
            r#"<p>Namaste, {} ({}). <a href="/dashboard">Open your dashboard</a></p>"#,
            escape(&f.name),
            escape(&f.village)
        ),
        None => r#"<p><a href="/login">Login</a> or <a href="/signup">create an account</a> to see weather for your village.</p>"#.to_string(),
    };
    let body = format!(
        r#"
<h1>{welcome}</h1>
{greeting}
<ul>
    <li><a href="/soil">Soil analyzer</a></li>
    <li><a href="/upload">Crop image upload and fertilizer advice</a></li>
    <li><a href="/help_card">Help card</a></li>
    <li><a href="/weather">Weather for any city</a></li>
</ul>
"#,
        welcome = escape(chrome.t(Msg::Welcome)),
    );
    layout(chrome, "Home", &body)
}

pub struct DashboardView<'a> {
    pub farmer: &'a Farmer,
    pub weather: &'a WeatherSummary,
    pub alerts: &'a [WeatherAlert],
    pub soil_graph: Option<&'a str>,
    pub latest_upload: Option<&'a str>,
}

pub fn dashboard_page(chrome: &Chrome, view: &DashboardView<'_>) -> Html<String> {
    let farmer = view.farmer;
    let weather = view.weather;

    let alerts = if view.alerts.is_empty() {
        "<p>No active weather alerts.</p>".to_string()
    } else {
        view.alerts
            .iter()
            .map(|a| {
                format!(
                    r#"<div class="card alert"><h4>{event}</h4><p>{from} &ndash; {to} &middot; {sender}</p><p>{description}</p></div>"#,
                    event = escape(&a.event),
                    from = format_timestamp(a.start),
                    to = format_timestamp(a.end),
                    sender = escape(&a.sender_name),
                    description = escape(&a.description),
                )
            })
            .collect()
    };

    let graph = view
        .soil_graph
        .map(|g| format!(r#"<img src="/static/{}" alt="Soil graph" style="max-width: 100%">"#, escape(g)))
        .unwrap_or_default();

    let upload = match view.latest_upload {
        Some(name) => {
            let name = escape(name);
            format!(r#"<p>Latest upload: <a href="/uploads/{name}">{name}</a></p>"#)
        }
        None => "<p>No uploads yet.</p>".to_string(),
    };

    let body = format!(
        r#"
<h1>Dashboard <span class="te">/ డాష్‌బోర్డ్</span></h1>
<div class="card">
    <h2>{name}</h2>
    <p>{email} &middot; {village}</p>
    <p>Member since {since}</p>
</div>
<div class="card" id="weather">
    <h3>Weather in {village} <span class="te">/ వాతావరణం</span></h3>
    <p>Temperature <span class="te">/ ఉష్ణోగ్రత</span>: <span class="temperature">{temperature}</span></p>
    <p>Humidity <span class="te">/ తేమ</span>: <span class="humidity">{humidity}</span></p>
    <p>Condition <span class="te">/ స్థితి</span>: <span class="description">{description}</span></p>
</div>
<h3>Weather alerts</h3>
{alerts}
{graph}
{upload}
"#,
        name = escape(&farmer.name),
        email = escape(&farmer.email),
        village = escape(&farmer.village),
        since = format_timestamp(farmer.created_at),
        temperature = escape(&weather.temperature),
        humidity = escape(&weather.humidity),
        description = escape(&weather.description),
    );
    layout(chrome, "Dashboard", &body)
}
