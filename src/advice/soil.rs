//! Demo soil report.
//!
//! The analyzer does not look at the uploaded photo. Every upload gets the same fixed
//! bilingual report, and the page says so.

/// Text in English and Telugu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub te: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SoilReport {
    pub soil_condition: Bilingual,
    pub suitable_crops: Bilingual,
    pub fertilizer_suggestion: Bilingual,
    pub testing_method: Bilingual,
    pub best_time: Bilingual,
    pub soil_type_info: Bilingual,
    pub tips_for_health: Bilingual,
}

impl SoilReport {
    /// Sections in display order with their headings.
    pub fn sections(&self) -> [(&'static str, &Bilingual); 7] {
        [
            ("Soil condition", &self.soil_condition),
            ("Suitable crops", &self.suitable_crops),
            ("Fertilizer suggestion", &self.fertilizer_suggestion),
            ("Soil testing method", &self.testing_method),
            ("Best time for testing", &self.best_time),
            ("Soil type", &self.soil_type_info),
            ("Tips for soil health", &self.tips_for_health),
        ]
    }
}

static DEMO_REPORT: SoilReport = SoilReport {
    soil_condition: Bilingual {
        en: "The soil appears healthy with moderate texture and good moisture retention.",
        te: "మట్టి మోస్తరు పొరుగు మరియు మంచి తేమ నిలుపుదలతో ఆరోగ్యంగా కనిపిస్తోంది.",
    },
    suitable_crops: Bilingual {
        en: "Suitable for rice, wheat, maize, and vegetables.",
        te: "ఇది వరి, గోధుమ, మక్కా మరియు కూరగాయల కోసం తగినది.",
    },
    fertilizer_suggestion: Bilingual {
        en: "Use organic compost and balanced NPK fertilizers for better crop yield.",
        te: "మంచి పంట ఉత్పత్తికి సేంద్రీయ కంపోస్ట్ మరియు సమతుల్య NPK ఎరువులు ఉపయోగించండి.",
    },
    testing_method: Bilingual {
        en: "Soil testing involves collecting a soil sample, sending it to a lab, and analyzing pH, nitrogen, phosphorus, potassium, and micronutrients.",
        te: "మట్టి పరీక్షలో మట్టి నమూనాను సేకరించి, ల్యాబ్‌కు పంపి pH, నత్రజని, ఫాస్ఫరస్, పొటాష్ మరియు సూక్ష్మపోషకాలను విశ్లేషిస్తారు.",
    },
    best_time: Bilingual {
        en: "The best time for soil testing is before sowing season or after harvest.",
        te: "మట్టి పరీక్షకు ఉత్తమ సమయం నాటకం ముంచునుండగా లేదా ఫసలు కోత చేసిన తర్వాత.",
    },
    soil_type_info: Bilingual {
        en: "This soil is loamy, well-drained, and suitable for most crops.",
        te: "ఈ మట్టి లోమీ, బాగా-drained మరియు ఎక్కువ పంటలకు తగినది.",
    },
    tips_for_health: Bilingual {
        en: "Rotate crops, add organic matter, avoid waterlogging, and monitor soil pH regularly.",
        te: "పంటలను మారుస్తూ, సేంద్రీయ పదార్ధాలు చేర్చండి, నీరు నిలవకుండా చూడండి, మరియు మట్టి pH ను సాధారణంగా పరిశీలించండి.",
    },
};

/// The fixed demo report. The image bytes are accepted and ignored.
pub fn demo_report(_image: &[u8]) -> &'static SoilReport {
    &DEMO_REPORT
}
