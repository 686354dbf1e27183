// W x H x D string matching
use super::numeric::decode_mixed_number;
use regex::{Captures, Regex};
use rust_decimal::Decimal;
use std::sync::LazyLock;

/// Three plain decimals, each optionally followed by an inch mark and an axis letter.
static PLAIN_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([\d.]+)["']?\s*[DHWdhw]?\s*[xX]\s*([\d.]+)["']?\s*[DHWdhw]?\s*[xX]\s*([\d.]+)["']?\s*[DHWdhw]?"#,
    )
    .unwrap()
});

/// Same shape, but each group may be a mixed number like `5 1/10`.
static MIXED_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(\d[\d./ ]*)["']?\s*[DHWdhw]?\s*[xX]\s*(\d[\d./ ]*)["']?\s*[DHWdhw]?\s*[xX]\s*(\d[\d./ ]*)["']?\s*[DHWdhw]?"#,
    )
    .unwrap()
});

/// Text ending in a slash or a whole number: the plain match began inside a mixed number.
static SPLIT_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:/|\d\s+)$").unwrap());

/// A fraction right after the third group: the plain match ended inside a mixed number.
static SPLIT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:/|\s+\d+\s*/)").unwrap());

/// Finds a dimension triple in `text` and returns its values in order of
/// appearance. Axis letters are not used to reorder the result.
pub fn match_dimensions(text: &str) -> Option<(Decimal, Decimal, Decimal)> {
    if let Some(caps) = PLAIN_TRIPLE.captures(text) {
        if !splits_mixed_number(text, &caps) {
            if let Some(triple) = decode_groups(&caps, |s| s.parse().ok()) {
                return Some(triple);
            }
        }
    }

    let caps = MIXED_TRIPLE.captures(text)?;
    decode_groups(&caps, decode_mixed_number)
}

fn splits_mixed_number(text: &str, caps: &Captures<'_>) -> bool {
    let (Some(first), Some(third)) = (caps.get(1), caps.get(3)) else {
        return false;
    };
    SPLIT_PREFIX.is_match(&text[..first.start()]) || SPLIT_SUFFIX.is_match(&text[third.end()..])
}

fn decode_groups(
    caps: &Captures<'_>,
    decode: impl Fn(&str) -> Option<Decimal>,
) -> Option<(Decimal, Decimal, Decimal)> {
    let group = |i: usize| caps.get(i).and_then(|m| decode(m.as_str()));
    Some((group(1)?, group(2)?, group(3)?))
}
