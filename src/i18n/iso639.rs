// SPDX-License-Identifier: PMPL-1.0-or-later

//! English display names for ISO 639-1 language codes.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Returns the English name of an ISO 639-1 code.
///
/// Returns `None` for codes outside the table; callers show the raw code instead.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code.to_ascii_lowercase().as_str() {
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "ja" => Some("Japanese"),
        "pt" => Some("Portuguese"),
        "zh" => Some("Chinese"),
        "ko" => Some("Korean"),
        "it" => Some("Italian"),
        "ru" => Some("Russian"),
        "ar" => Some("Arabic"),
        "hi" => Some("Hindi"),
        "nl" => Some("Dutch"),
        "sv" => Some("Swedish"),
        "pl" => Some("Polish"),
        "tr" => Some("Turkish"),
        "vi" => Some("Vietnamese"),
        "th" => Some("Thai"),
        "uk" => Some("Ukrainian"),
        "cs" => Some("Czech"),
        "el" => Some("Greek"),
        "he" => Some("Hebrew"),
        "da" => Some("Danish"),
        "fi" => Some("Finnish"),
        "no" | "nb" => Some("Norwegian"),
        "hu" => Some("Hungarian"),
        "ro" => Some("Romanian"),
        "id" => Some("Indonesian"),
        "ms" => Some("Malay"),
        "fa" => Some("Persian"),
        "bg" => Some("Bulgarian"),
        "hr" => Some("Croatian"),
        "sk" => Some("Slovak"),
        "sr" => Some("Serbian"),
        "lt" => Some("Lithuanian"),
        "lv" => Some("Latvian"),
        "et" => Some("Estonian"),
        "is" => Some("Icelandic"),
        "ga" => Some("Irish"),
        "ca" => Some("Catalan"),
        "eu" => Some("Basque"),
        "sw" => Some("Swahili"),
        "bn" => Some("Bengali"),
        "ur" => Some("Urdu"),
        "ta" => Some("Tamil"),
        _ => None,
    }
}
