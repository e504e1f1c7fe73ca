use axum::response::Html;

use crate::weather::dto::CityWeather;

use super::{escape, layout, Chrome};

pub fn weather_page(chrome: &Chrome, card: Option<&CityWeather>) -> Html<String> {
    let result = card
        .map(|w| {
            format!(
                r#"
<div class="card">
    <h2>{city}</h2>
    <p>Temperature <span class="te">/ ఉష్ణోగ్రత</span>: {temperature}</p>
    <p>Humidity <span class="te">/ తేమ</span>: {humidity}</p>
    <p>Condition <span class="te">/ స్థితి</span>: {condition}</p>
</div>"#,
                city = escape(&w.city),
                temperature = escape(&w.temperature),
                humidity = escape(&w.humidity),
                condition = escape(&w.condition),
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"
<h1>Weather <span class="te">/ వాతావరణం</span></h1>
<form method="post" action="/weather">
    <label>City or village <input name="city" required></label>
    <button type="submit">Check weather</button>
</form>
{result}
"#
    );
    layout(chrome, "Weather", &body)
}
