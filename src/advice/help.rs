use serde::Deserialize;

/// Help-card contact form. Nothing is persisted; the page echoes it back with a suggestion.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct HelpCardForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub crop: String,
    #[serde(default)]
    pub query: String,
}

/// Smart-farming suggestion picked by substring of the (case-folded) crop name.
pub fn suggestion_for(crop: &str) -> &'static str {
    let crop = crop.to_lowercase();
    if crop.contains("paddy") || crop.contains("rice") {
        "Use drone-based pesticide spraying and soil moisture sensors for improved yield."
    } else if crop.contains("cotton") {
        "Adopt drip irrigation and use pest traps for pink bollworm control."
    } else if crop.contains("tomato") {
        "Use greenhouse cultivation and organic fertilizers for better growth."
    } else {
        "Consult your nearest Krishi Seva expert for crop-specific smart farming technologies."
    }
}
