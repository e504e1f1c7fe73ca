use axum::response::Html;

use crate::advice::{crops::FertilizerAdvice, help::HelpCardForm, soil::SoilReport};

use super::{escape, layout, Chrome};

pub fn soil_page(chrome: &Chrome, result: Option<(&str, &SoilReport)>) -> Html<String> {
    let report = result
        .map(|(filename, report)| {
            let sections: String = report
                .sections()
                .iter()
                .map(|(heading, text)| {
                    format!(
                        r#"<div class="card"><h3>{heading}</h3><p>{en}</p><p class="te">{te}</p></div>"#,
                        en = escape(text.en),
                        te = escape(text.te),
                    )
                })
                .collect();
            let file = escape(filename);
            format!(
                r#"
<h2>Soil report <span class="te">/ మట్టి నివేదిక</span></h2>
<p class="demo-note">Demo output: this report is the same for every photo; the image is stored but not analyzed.</p>
<img src="/uploads/{file}" alt="{file}" style="max-width: 320px">
<div id="soil-report">{sections}</div>"#
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"
<h1>Soil analyzer <span class="te">/ మట్టి విశ్లేషణ</span></h1>
<form method="post" action="/soil" enctype="multipart/form-data">
    <label>Soil photo <input type="file" name="soil_photo" accept="image/*"></label>
    <button type="submit">Analyze</button>
</form>
{report}
"#
    );
    layout(chrome, "Soil analyzer", &body)
}

pub fn upload_page(chrome: &Chrome, result: Option<(&str, &FertilizerAdvice)>) -> Html<String> {
    let advice = result
        .map(|(filename, advice)| {
            let items: String = advice
                .fertilizers
                .iter()
                .map(|f| format!("<li>{}</li>", escape(f)))
                .collect();
            let file = escape(filename);
            format!(
                r#"
<div class="card">
    <img src="/uploads/{file}" alt="{file}" style="max-width: 320px">
    <h2>Crop: {crop}</h2>
    <ul id="fertilizers">{items}</ul>
    <p>{note}</p>
</div>"#,
                crop = escape(&advice.crop),
                note = escape(&advice.note),
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"
<h1>Crop image upload <span class="te">/ పంట చిత్రం అప్‌లోడ్</span></h1>
<form method="post" action="/upload" enctype="multipart/form-data">
    <label>Crop name <input name="crop" placeholder="wheat, paddy, cotton, maize, tomato"></label>
    <label>Crop photo <input type="file" name="photo" accept="image/*"></label>
    <button type="submit">Upload</button>
</form>
{advice}
"#
    );
    layout(chrome, "Upload", &body)
}

pub fn help_card_page(chrome: &Chrome, submitted: Option<(&HelpCardForm, &str)>) -> Html<String> {
    let body = match submitted {
        Some((form, suggestion)) => format!(
            r#"
<h1>Help card <span class="te">/ సహాయ కార్డు</span></h1>
<div class="card">
    <p>Thank you, {name}. Our team will reach you at {phone}.</p>
    <p>Village: {village}</p>
    <p>Crop: {crop}</p>
    <p>Query: {query}</p>
</div>
<div class="card"><h3>Suggestion</h3><p id="suggestion">{suggestion}</p></div>
<p><a href="/help_card">Send another query</a></p>
"#,
            name = escape(&form.name),
            phone = escape(&form.phone),
            village = escape(&form.village),
            crop = escape(&form.crop),
            query = escape(&form.query),
            suggestion = escape(suggestion),
        ),
        None => r#"
<h1>Help card <span class="te">/ సహాయ కార్డు</span></h1>
<form method="post" action="/help_card">
    <label>Name <input name="name" required></label>
    <label>Village <input name="village" required></label>
    <label>Phone <input name="phone" required></label>
    <label>Crop <input name="crop" required></label>
    <label>Your question <textarea name="query" rows="4"></textarea></label>
    <button type="submit">Submit</button>
</form>
"#
        .to_string(),
    };
    layout(chrome, "Help card", &body)
}
