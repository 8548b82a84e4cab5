//! Usage text for `--help`.

use super::help_texts::{LEGACY_CPP_FORM, LEGACY_JAVA_FORM, MODERN_FORMS, OPTIONS};
use super::settings::ResolverSettings;
use crate::types::Language;

/// Full usage text; the legacy section matches the default language.
pub fn usage(settings: &ResolverSettings) -> String {
    let legacy = match settings.default_language {
        Language::Java => LEGACY_JAVA_FORM,
        Language::Cpp => LEGACY_CPP_FORM,
    };

    let mut text = String::with_capacity(MODERN_FORMS.len() + legacy.len() + OPTIONS.len());
    text.push_str(MODERN_FORMS);
    text.push_str(legacy);
    text.push_str(OPTIONS);
    text.replace("{name}", &settings.program_name)
}
