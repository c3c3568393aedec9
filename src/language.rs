use serde::{Deserialize, Serialize};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub(crate) fn toggle(self) -> Self {
        match self {
            Language::En => Language::Tr,
            Language::Tr => Language::En,
        }
    }

    pub(crate) fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }
}

/// Picks the variant matching the active language.
pub(crate) fn localized(language: Language, en: &'static str, tr: &'static str) -> &'static str {
    match language {
        Language::En => en,
        Language::Tr => tr,
    }
}

#[derive(Clone, PartialEq)]
pub(crate) struct LanguageCtx {
    pub(crate) current: Language,
    pub(crate) on_toggle: Callback<()>,
}

#[hook]
pub(crate) fn use_language() -> LanguageCtx {
    use_context::<LanguageCtx>().expect("language context provided at the app root")
}
