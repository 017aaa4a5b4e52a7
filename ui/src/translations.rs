use dioxus_i18n::{
    prelude::I18nConfig,
    unic_langid::{LanguageIdentifier, langid},
};
use polling_shared::datatypes::Lang;

pub fn config(initial_language: LanguageIdentifier) -> I18nConfig {
    I18nConfig::new(initial_language)
        .with_locale((
            langid!("de-DE"),
            include_str!("../../translations/de-DE.ftl"),
        ))
        .with_locale((
            langid!("en-US"),
            include_str!("../../translations/en-US.ftl"),
        ))
        .with_fallback(langid!("en-US"))
}

#[must_use]
pub fn langid(lang: Lang) -> LanguageIdentifier {
    match lang {
        Lang::DeDE => langid!("de-DE"),
        Lang::EnUS => langid!("en-US"),
    }
}
