use gloo::console;
use serde::{Deserialize, Serialize};

use crate::language::Language;

pub(crate) const SETTINGS_VERSION: u32 = 1;
pub(crate) const SETTINGS_KEY: &str = "folio.settings.v1";

#[derive(Clone, Serialize, Deserialize)]
pub(crate) struct SiteSettings {
    pub(crate) version: u32,
    pub(crate) language: Language,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            language: Language::default(),
        }
    }
}

impl SiteSettings {
    pub(crate) fn with_language(language: Language) -> Self {
        Self {
            version: SETTINGS_VERSION,
            language,
        }
    }
}

/// Any load failure falls back to defaults; a stale or garbled record is
/// discarded silently.
pub(crate) fn load_settings() -> SiteSettings {
    let Some(storage) =
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        return SiteSettings::default();
    };
    let Ok(Some(raw)) = storage.get_item(SETTINGS_KEY) else {
        return SiteSettings::default();
    };
    let Ok(settings) = serde_json::from_str::<SiteSettings>(&raw) else {
        console::log!("settings: unreadable record, using defaults");
        return SiteSettings::default();
    };
    if settings.version != SETTINGS_VERSION {
        console::log!("settings: version mismatch", settings.version, SETTINGS_VERSION);
        return SiteSettings::default();
    }
    settings
}

pub(crate) fn save_settings(settings: &SiteSettings) {
    let Ok(raw) = serde_json::to_string(settings) else {
        return;
    };
    let Some(storage) =
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        console::log!("settings: storage unavailable");
        return;
    };
    if storage.set_item(SETTINGS_KEY, &raw).is_err() {
        console::log!("settings: storage set failed");
    }
}
