use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?|\.\d+").unwrap());

static SLASH_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*/\s*").unwrap());

/// Returns the first numeric token of `text`, e.g. `"45.5"` for `"45.5 lbs"`.
pub fn extract_number(text: &str) -> Option<&str> {
    NUMBER.find(text).map(|m| m.as_str())
}

/// Like [`extract_number`], parsed to a decimal.
pub fn extract_number_value(text: &str) -> Option<Decimal> {
    let token = extract_number(text)?;
    match token.strip_prefix('.') {
        Some(fraction) => format!("0.{}", fraction).parse().ok(),
        None => token.parse().ok(),
    }
}

/// Decodes a single token: either a decimal literal (`"21.25"`) or a
/// fraction (`"1/4"`), divided exactly.
pub fn decode_fraction(token: &str) -> Option<Decimal> {
    let token = token.trim();
    match token.split_once('/') {
        Some((num, den)) => {
            let num: Decimal = num.trim().parse().ok()?;
            let den: Decimal = den.trim().parse().ok()?;
            num.checked_div(den)
        }
        None => token.parse().ok(),
    }
}

/// Decodes a mixed number such as `"5 1/10"` or `"21 1/4\""`: a whole part,
/// a fraction, or a whole part followed by one fraction. Inch marks are
/// dropped first.
pub fn decode_mixed_number(text: &str) -> Option<Decimal> {
    let cleaned = text.replace(['"', '\''], "");
    let cleaned = SLASH_SPACING.replace_all(cleaned.trim(), "/");

    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    match parts.as_slice() {
        [single] => decode_fraction(single),
        [whole, fraction] if !whole.contains('/') && fraction.contains('/') => {
            let whole = decode_fraction(whole)?;
            whole.checked_add(decode_fraction(fraction)?)
        }
        _ => None,
    }
}
