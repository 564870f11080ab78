//! Web-font URL synthesis.

/// Base URL of the Google Fonts CSS2 API.
pub const GOOGLE_FONTS_CSS2: &str = "https://fonts.googleapis.com/css2";

/// Weights requested when a family is given without any.
pub const DEFAULT_FONT_WEIGHTS: &str = "400;700";

/// Resolve the font stylesheet URL a page should load.
///
/// An explicit URL always wins. Otherwise a family name produces a Google
/// Fonts query, and no family means no URL at all. Empty strings count as
/// absent. Inputs are not validated.
pub fn font_url(
    explicit: Option<&str>,
    family: Option<&str>,
    weights: Option<&str>,
) -> Option<String> {
    if let Some(url) = non_empty(explicit) {
        return Some(url.to_string());
    }

    let family = non_empty(family)?;
    let weights = non_empty(weights).unwrap_or(DEFAULT_FONT_WEIGHTS);

    Some(format!(
        "{}?family={}:wght@{}&display=swap",
        GOOGLE_FONTS_CSS2,
        family.replace(' ', "+"),
        weights
    ))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
