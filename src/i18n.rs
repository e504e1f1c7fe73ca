use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Languages the portal can speak.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Te,
}

impl Lang {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "te" => Some(Lang::Te),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Te => "te",
        }
    }
}

/// Keys of the translated messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    Welcome,
    Login,
    Logout,
    SignupSuccess,
    LoginFirst,
    Invalid,
    FillFields,
    EmailExists,
    ResetSent,
    UploadSuccess,
    UploadMissing,
    SoilPhotoMissing,
}

lazy_static! {
    static ref TRANSLATIONS: HashMap<Lang, HashMap<Msg, &'static str>> = {
        let en = HashMap::from([
            (Msg::Welcome, "Welcome to Smart Krishi"),
            (Msg::Login, "Login successful!"),
            (Msg::Logout, "Logged out successfully."),
            (Msg::SignupSuccess, "Signup successful! Please login."),
            (Msg::LoginFirst, "Please login first!"),
            (Msg::Invalid, "Invalid email or password"),
            (Msg::FillFields, "Please fill all fields"),
            (Msg::EmailExists, "Email already registered. Please login."),
            (Msg::ResetSent, "Password reset instructions sent to your email"),
            (Msg::UploadSuccess, "Image uploaded successfully!"),
            (Msg::UploadMissing, "Please upload a valid crop image."),
            (Msg::SoilPhotoMissing, "Please upload a soil photo."),
        ]);
        let te = HashMap::from([
            (Msg::Welcome, "స్మార్ట్ కృషికి స్వాగతం"),
            (Msg::Login, "లాగిన్ విజయవంతం!"),
            (Msg::Logout, "విజయవంతంగా లాగ్ అవుట్ అయ్యారు."),
            (Msg::SignupSuccess, "నమోదు విజయవంతం! దయచేసి లాగిన్ చేయండి."),
            (Msg::LoginFirst, "ముందుగా లాగిన్ చేయండి!"),
            (Msg::Invalid, "చెల్లని ఇమెయిల్ లేదా పాస్‌వర్డ్"),
            (Msg::FillFields, "దయచేసి అన్ని వివరాలు పూరించండి"),
            (Msg::EmailExists, "ఇమెయిల్ ఇప్పటికే నమోదైంది. దయచేసి లాగిన్ చేయండి."),
            (Msg::ResetSent, "పాస్‌వర్డ్ రీసెట్ సూచనలు మీ ఇమెయిల్‌కు పంపబడ్డాయి"),
            (Msg::UploadSuccess, "చిత్రం విజయవంతంగా అప్‌లోడ్ అయింది!"),
            (Msg::UploadMissing, "దయచేసి సరైన పంట చిత్రాన్ని అప్‌లోడ్ చేయండి."),
            (Msg::SoilPhotoMissing, "దయచేసి మట్టి ఫోటోను అప్‌లోడ్ చేయండి."),
        ]);
        HashMap::from([(Lang::En, en), (Lang::Te, te)])
    };
}

/// Looks up `key` in `lang`, falling back to English when a translation is missing.
pub fn t(lang: Lang, key: Msg) -> &'static str {
    TRANSLATIONS
        .get(&lang)
        .and_then(|table| table.get(&key))
        .or_else(|| TRANSLATIONS.get(&Lang::En).and_then(|table| table.get(&key)))
        .copied()
        .unwrap_or("")
}
