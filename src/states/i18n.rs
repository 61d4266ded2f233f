//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::ComposerGlobalStore;
use crate::domain::notice::NoticeText;
use crate::domain::validation::FieldError;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "composer" namespace
pub fn i18n_composer(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<ComposerGlobalStore>().read(cx).locale();
    t!(format!("composer.{key}"), locale = locale).into()
}

/// Get translated string from "menu" namespace
pub fn i18n_menu(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<ComposerGlobalStore>().read(cx).locale();
    t!(format!("menu.{key}"), locale = locale).into()
}

/// Translate an inline field error
pub fn i18n_field_error(cx: &App, error: FieldError) -> SharedString {
    let locale = cx.global::<ComposerGlobalStore>().read(cx).locale();
    t!(error.i18n_key(), locale = locale).into()
}

/// Translate notice text; server-provided text is shown verbatim
pub fn i18n_notice(cx: &App, text: &NoticeText) -> SharedString {
    match text {
        NoticeText::Key { key, .. } => {
            let locale = cx.global::<ComposerGlobalStore>().read(cx).locale();
            t!(*key, locale = locale).into()
        }
        NoticeText::Verbatim(text) => SharedString::from(text.clone()),
    }
}

/// Format a translated string with arguments
///
/// # Example
/// ```ignore
/// // With translation `send_tooltip: "Send ({shortcut})"`
/// i18n_format(cx, "composer.send_tooltip", &[("shortcut", "⌘↵")])
/// ```
pub fn i18n_format(cx: &App, key: &str, args: &[(&str, &str)]) -> SharedString {
    let locale = cx.global::<ComposerGlobalStore>().read(cx).locale();
    let mut result = t!(key, locale = locale).to_string();

    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    result.into()
}

#[cfg(test)]
mod tests {
    use crate::domain::notice::{Notice, NoticeText};
    use crate::domain::validation::FieldError;
    use rust_i18n::t;

    #[test]
    fn test_english_catalog_matches_domain_text() {
        for error in [
            FieldError::EmailRequired,
            FieldError::EmailInvalid,
            FieldError::SubjectRequired,
            FieldError::BodyRequired,
        ] {
            assert_eq!(t!(error.i18n_key(), locale = "en"), error.message());
        }

        for notice in [Notice::validation_failed(), Notice::sent(), Notice::send_failed(None)] {
            for text in [&notice.title, &notice.description] {
                if let NoticeText::Key { key, english } = text {
                    assert_eq!(t!(*key, locale = "en"), *english);
                }
            }
        }
    }

    #[test]
    fn test_chinese_catalog_covers_field_errors() {
        for error in [FieldError::EmailRequired, FieldError::BodyRequired] {
            let translated = t!(error.i18n_key(), locale = "zh");
            assert_ne!(translated, error.i18n_key());
            assert_ne!(translated, error.message());
        }
    }
}
