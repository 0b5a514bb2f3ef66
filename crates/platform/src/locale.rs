//! Locale and preferred-language sources.
//!
//! Mirrors the ranked-language surface of mobile platforms: one current
//! locale plus an ordered list of preferred languages, each formatted as a
//! language tag (e.g. "en-US").

/// Tag reported when the host exposes no usable locale at all.
pub const FALLBACK_LOCALE: &str = "en-US";

/// Provider for the user's locale preferences.
pub trait LocaleInfoSource: Send + Sync {
    /// The user's current locale as a language tag.
    fn current_locale(&self) -> String;

    /// Ranked preferred languages, most preferred first.
    ///
    /// Hosts without a ranked-list API degenerate to a single element equal
    /// to `current_locale()`.
    fn preferred_languages(&self) -> Vec<String> {
        vec![self.current_locale()]
    }
}

/// Normalize a raw locale value into a language tag.
///
/// Strips the codeset/modifier suffixes of POSIX locale strings
/// ("ca_ES.UTF-8@valencia" -> "ca-ES") and rejects values that carry no
/// language information ("C", "POSIX", empty).
pub fn normalize_language_tag(raw: &str) -> Option<String> {
    let base = raw.trim().split(['.', '@']).next().unwrap_or("");
    if base.is_empty() || base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// Parse a colon-separated ranked language list (the POSIX `LANGUAGE`
/// variable), preserving order and dropping entries with no language
/// information.
pub fn ranked_languages(raw: &str) -> Vec<String> {
    raw.split(':').filter_map(normalize_language_tag).collect()
}

/// Locale source backed by the POSIX locale environment.
///
/// `LC_ALL` > `LC_MESSAGES` > `LANG` decide the current locale; the ranked
/// preference list comes from `LANGUAGE` when set, otherwise it degenerates
/// to the current locale via the trait default.
#[derive(Default)]
pub struct EnvLocaleSource;

impl EnvLocaleSource {
    pub fn new() -> Self {
        Self
    }
}

impl LocaleInfoSource for EnvLocaleSource {
    fn current_locale(&self) -> String {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find_map(|value| normalize_language_tag(&value))
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
    }

    fn preferred_languages(&self) -> Vec<String> {
        let ranked = std::env::var("LANGUAGE")
            .map(|value| ranked_languages(&value))
            .unwrap_or_default();
        if ranked.is_empty() {
            vec![self.current_locale()]
        } else {
            ranked
        }
    }
}
