/// Fertilizer advice for a typed crop name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FertilizerAdvice {
    pub crop: String,
    pub fertilizers: &'static [&'static str],
    pub note: String,
}

const GENERAL: &[&str] = &["General NPK (20:20:20)", "Organic Compost"];

fn fertilizers_for(crop: &str) -> Option<&'static [&'static str]> {
    let list: &'static [&'static str] = match crop {
        "wheat" => &["Urea", "DAP", "Potash", "Zinc Sulphate"],
        "paddy" => &["Ammonium Sulphate", "Super Phosphate", "MOP", "Organic Compost"],
        "cotton" => &["Urea", "SSP", "Gypsum", "Bio-fertilizer"],
        "maize" => &["Nitrogen Fertilizer", "Phosphate", "Potash", "Organic Manure"],
        "tomato" => &["Compost", "Urea", "Super Phosphate", "Micronutrients"],
        _ => return None,
    };
    Some(list)
}

/// Looks up the crop (trimmed, case-folded); unknown crops get a generic NPK suggestion.
pub fn recommend(crop: &str) -> FertilizerAdvice {
    let crop = crop.trim().to_lowercase();
    match fertilizers_for(&crop) {
        Some(fertilizers) => FertilizerAdvice {
            note: format!(
                "Recommended fertilizers for {} have been analyzed using AI based on soil needs.",
                title_case(&crop)
            ),
            crop,
            fertilizers,
        },
        None => FertilizerAdvice {
            crop,
            fertilizers: GENERAL,
            note: "Fertilizer recommendations are based on general soil conditions.".into(),
        },
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
