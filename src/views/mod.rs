//! Server-rendered HTML pages.
//!
//! Pages are plain `format!` templates sharing one [`layout`]. Every dynamic value goes
//! through [`escape`] before it lands in markup.

use axum::response::Html;
use time::{macros::format_description, OffsetDateTime};

use crate::{
    i18n::{Lang, Msg},
    session::Flash,
};

pub mod advice;
pub mod auth;
pub mod home;
pub mod weather;

/// Shared page chrome: language, sign-in state and the flashes to show.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub lang: Lang,
    pub signed_in: bool,
    pub flashes: Vec<Flash>,
}

impl Chrome {
    pub fn t(&self, key: Msg) -> &'static str {
        crate::i18n::t(self.lang, key)
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats unix seconds as `05 Mar 2024 14:30` (UTC).
pub fn format_timestamp(secs: i64) -> String {
    let fmt = format_description!("[day] [month repr:short] [year] [hour]:[minute]");
    OffsetDateTime::from_unix_timestamp(secs)
        .ok()
        .and_then(|dt| dt.format(&fmt).ok())
        .unwrap_or_else(|| "--".to_string())
}

const STYLE: &str = r#"
body { font-family: 'Segoe UI', Tahoma, sans-serif; margin: 0; background: #f4f8f1; color: #203020; }
header { background: #2e7d32; color: #fff; padding: 12px 20px; display: flex; justify-content: space-between; align-items: center; }
header a { color: #fff; margin-right: 14px; text-decoration: none; }
main { max-width: 880px; margin: 24px auto; background: #fff; padding: 24px; border-radius: 8px; }
.flash { padding: 10px 14px; border-radius: 6px; margin-bottom: 10px; }
.flash.success { background: #e0f2e9; } .flash.info { background: #e3eefc; }
.flash.warning { background: #fff4d6; } .flash.danger { background: #fde2e1; }
form label { display: block; margin-top: 10px; }
form input, form textarea, form select { width: 100%; padding: 8px; box-sizing: border-box; }
button { margin-top: 14px; padding: 8px 18px; background: #2e7d32; color: #fff; border: 0; border-radius: 4px; }
.card { border: 1px solid #d5e5d0; border-radius: 6px; padding: 12px 16px; margin: 12px 0; }
.demo-note { font-size: 0.9em; color: #7a5b00; }
.te { color: #555; }
"#;

pub fn layout(chrome: &Chrome, title: &str, body: &str) -> Html<String> {
    let account_links = if chrome.signed_in {
        r#"<a href="/dashboard">Dashboard</a><a href="/logout">Logout</a>"#
    } else {
        r#"<a href="/login">Login</a><a href="/signup">Signup</a>"#
    };

    let flashes: String = chrome
        .flashes
        .iter()
        .map(|f| {
            format!(
                r#"<div class="flash {}">{}</div>"#,
                f.kind.css_class(),
                escape(&f.message)
            )
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Smart Krishi</title>
    <style>{STYLE}</style>
</head>
<body>
<header>
    <nav>
        <a href="/">Home</a>
        <a href="/soil">Soil</a>
        <a href="/upload">Upload</a>
        <a href="/help_card">Help Card</a>
        <a href="/weather">Weather</a>
        {account_links}
    </nav>
    <div><a href="?lang=en">English</a><a href="?lang=te">తెలుగు</a></div>
</header>
<main>
{flashes}
{body}
</main>
</body>
</html>"#,
        lang = chrome.lang.code(),
        title = escape(title),
    ))
}
