//! UI translations and the persisted language preference.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::LeviathanResult;
use crate::storage::{StorageArea, LANGUAGE_KEY};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
    Ml,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Ml];

    /// Code stored under the language key
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ml => "ml",
        }
    }

    /// English name
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Ml => "Malayalam",
        }
    }

    /// Name in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Ml => "മലയാളം",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }

    fn column(&self) -> usize {
        match self {
            Language::En => 0,
            Language::Hi => 1,
            Language::Ml => 2,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// key, [en, hi, ml]
const TRANSLATIONS: &[(&str, [&str; 3])] = &[
    // Navigation
    ("home", ["Home", "होम", "ഹോം"]),
    ("upload", ["Upload Dataset", "डेटासेट अपलोड करें", "ഡാറ്റാസെറ്റ് അപ്ലോഡ് ചെയ്യുക"]),
    ("dashboard", ["Dashboard", "डैशबोर्ड", "ഡാഷ്ബോർഡ്"]),
    ("policy", ["Policy & Governance", "नीति और शासन", "നയവും ഭരണകൂടവും"]),
    ("learning", ["Learning & Education", "सीखना और शिक्षा", "പഠനവും വിദ്യാഭ്യാസവും"]),
    ("conservation", ["Conservation & Discovery", "संरक्षण और खोज", "സംരക്ഷണവും കണ്ടെത്തലും"]),
    ("admin", ["Admin", "एडमिन", "അഡ്മിൻ"]),
    ("about", ["About", "के बारे में", "കുറിച്ച്"]),
    ("contact", ["Contact", "संपर्क", "കോൺടാക്റ്റ്"]),
    ("signIn", ["Sign In", "साइन इन", "സൈൻ ഇൻ"]),
    ("signUp", ["Sign Up", "साइन अप", "സൈൻ അപ്പ്"]),
    ("signOut", ["Sign Out", "साइन आउट", "സൈൻ ഔട്ട്"]),
    // Home
    (
        "welcomeTitle",
        [
            "AI-Powered eDNA Biodiversity Monitoring",
            "AI-संचालित eDNA जैव विविधता निगरानी",
            "AI-പ്രേരിത eDNA ജൈവവൈവിധ്യ നിരീക്ഷണം",
        ],
    ),
    (
        "welcomeSubtitle",
        [
            "Discover the hidden diversity of marine ecosystems through advanced environmental DNA analysis",
            "उन्नत पर्यावरणीय DNA विश्लेषण के माध्यम से समुद्री पारिस्थितिक तंत्र की छुपी विविधता की खोज करें",
            "വിപുലമായ പരിസ്ഥിതി DNA വിശകലനത്തിലൂടെ സമുദ്ര ആവാസവ്യവസ്ഥകളുടെ മറഞ്ഞിരിക്കുന്ന വൈവിധ്യം കണ്ടെത്തുക",
        ],
    ),
    ("uploadDataset", ["Upload Dataset", "डेटासेट अपलोड करें", "ഡാറ്റാസെറ്റ് അപ്ലോഡ് ചെയ്യുക"]),
    ("getStarted", ["Get Started", "शुरू करें", "ആരംഭിക്കുക"]),
    // Authentication
    ("email", ["Email", "ईमेल", "ഇമെയിൽ"]),
    ("password", ["Password", "पासवर्ड", "പാസ്‌വേഡ്"]),
    ("confirmPassword", ["Confirm Password", "पासवर्ड की पुष्टि करें", "പാസ്‌വേഡ് സ്ഥിരീകരിക്കുക"]),
    ("fullName", ["Full Name", "पूरा नाम", "പൂർണ്ണ നാമം"]),
    ("organization", ["Organization", "संगठन", "സംഘടന"]),
    ("selectRole", ["Select Your Role", "अपनी भूमिका चुनें", "നിങ്ങളുടെ പങ്ക് തിരഞ്ഞെടുക്കുക"]),
    // Roles
    ("researcher", ["Researcher", "शोधकर्ता", "ഗവേഷകൻ"]),
    ("student", ["Student", "छात्र", "വിദ്യാർത്ഥി"]),
    ("policymaker", ["Policymaker", "नीति निर्माता", "നയ നിർമ്മാതാവ്"]),
    ("public", ["Public", "सार्वजनिक", "പൊതുജനം"]),
    ("administrator", ["Administrator", "प्रशासक", "അഡ്മിനിസ്ട്രേറ്റർ"]),
    // Dashboard
    ("speciesDistribution", ["Species Distribution", "प्रजाति वितरण", "സ്പീഷീസ് വിതരണം"]),
    ("topTaxa", ["Top 10 Taxa", "शीर्ष 10 टैक्सा", "ടോപ്പ് 10 ടാക്സ"]),
    ("abundanceTrends", ["Abundance Trends", "प्रचुरता रुझान", "സമൃദ്ധി പ്രവണതകൾ"]),
    ("samplingLocations", ["Sampling Locations", "नमूना स्थान", "സാമ്പിളിംഗ് സ്ഥലങ്ങൾ"]),
    ("totalSpecies", ["Total Species", "कुल प्रजातियां", "ആകെ സ്പീഷീസ്"]),
    ("diversityIndex", ["Diversity Index", "विविधता सूचकांक", "വൈവിധ്യ സൂചിക"]),
    // Upload
    (
        "dragDropFiles",
        [
            "Drag & drop your dataset files here",
            "अपने डेटासेट फाइलों को यहां खींचें और छोड़ें",
            "നിങ്ങളുടെ ഡാറ്റാസെറ്റ് ഫയലുകൾ ഇവിടെ വലിച്ചിടുക",
        ],
    ),
    (
        "supportedFormats",
        [
            "Supported formats: CSV, FASTA, FASTQ",
            "समर्थित प्रारूप: CSV, FASTA, FASTQ",
            "പിന്തുണയ്ക്കുന്ന ഫോർമാറ്റുകൾ: CSV, FASTA, FASTQ",
        ],
    ),
    ("uploadProgress", ["Upload Progress", "अपलोड प्रगति", "അപ്ലോഡ് പുരോഗതി"]),
    ("processing", ["Processing...", "प्रसंस्करण...", "പ്രോസസ്സിംഗ്..."]),
    ("completed", ["Completed", "पूर्ण", "പൂർത്തിയായി"]),
    // Alerts
    ("alerts", ["Conservation Alerts", "संरक्षण अलर्ट", "സംരക്ഷണ അലേർട്ടുകൾ"]),
    ("critical", ["Critical", "गंभीर", "വിമർശനാത്മകം"]),
    ("high", ["High", "उच्च", "ഉയർന്ന"]),
    ("medium", ["Medium", "मध्यम", "ഇടത്തരം"]),
    ("low", ["Low", "कम", "കുറഞ്ഞ"]),
];

fn dictionary() -> &'static HashMap<&'static str, [&'static str; 3]> {
    static DICTIONARY: OnceLock<HashMap<&'static str, [&'static str; 3]>> = OnceLock::new();
    DICTIONARY.get_or_init(|| TRANSLATIONS.iter().copied().collect())
}

/// Look up `key` in `lang`; unknown keys come back unchanged.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    dictionary()
        .get(key)
        .map(|row| row[lang.column()])
        .unwrap_or(key)
}

/// Translation key for a role label.
///
/// The admin role reads "Administrator" on the role picker while the nav
/// entry uses the shorter "Admin".
pub fn role_key(role: crate::types::Role) -> &'static str {
    match role {
        crate::types::Role::Admin => "administrator",
        other => other.as_str(),
    }
}

/// Language preference persisted in local storage.
#[derive(Clone)]
pub struct LanguagePreference {
    area: StorageArea,
}

impl LanguagePreference {
    pub fn new(area: StorageArea) -> Self {
        Self { area }
    }

    /// Stored language, or `None` when nothing valid is stored.
    pub fn stored(&self) -> LeviathanResult<Option<Language>> {
        Ok(self
            .area
            .get_item(LANGUAGE_KEY)?
            .and_then(|code| Language::from_code(&code)))
    }

    /// Stored language, falling back to English.
    pub fn load(&self) -> LeviathanResult<Language> {
        Ok(self.stored()?.unwrap_or_default())
    }

    pub fn set(&self, lang: Language) -> LeviathanResult<()> {
        debug!(language = %lang, "Saving language preference");
        self.area.set_item(LANGUAGE_KEY, lang.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;
    use crate::types::Role;
    use tempfile::tempdir;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Language::En, "signIn"), "Sign In");
        assert_eq!(translate(Language::Hi, "signIn"), "साइन इन");
        assert_eq!(translate(Language::Ml, "home"), "ഹോം");
    }

    #[test]
    fn test_translate_unknown_key_falls_back() {
        assert_eq!(translate(Language::Hi, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_every_row_fully_translated() {
        for (key, row) in TRANSLATIONS {
            for text in row {
                assert!(!text.is_empty(), "empty translation for {key}");
            }
        }
    }

    #[test]
    fn test_role_keys_translate() {
        for role in Role::ALL {
            assert_ne!(translate(Language::En, role_key(role)), role_key(role));
        }
    }

    #[test]
    fn test_language_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_preference_persists_and_ignores_unknown_codes() {
        let temp_dir = tempdir().unwrap();
        let storage = LocalStorage::open(temp_dir.path().join("s.redb")).unwrap();
        let area = storage.area();
        let pref = LanguagePreference::new(area.clone());

        assert_eq!(pref.load().unwrap(), Language::En);
        pref.set(Language::Ml).unwrap();
        assert_eq!(pref.load().unwrap(), Language::Ml);

        area.set_item(LANGUAGE_KEY, "xx").unwrap();
        assert_eq!(pref.stored().unwrap(), None);
        assert_eq!(pref.load().unwrap(), Language::En);
    }
}
