use super::dimensions::match_dimensions;
use super::numeric::extract_number_value;
use super::synonyms::{is_dimension_label, is_shipping_weight_label, is_weight_label};
use crate::model::{CanonicalDimensions, ElectricalAttributes, NormalizedSpecs, SpecTree, SpecValue};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Electrical keywords only count as whole words, so "Lamps" is not "Amps".
static COMBINED_ELECTRICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bvoltz\s*/\s*hertz\s*/\s*amps\b").unwrap());
static VOLTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bvoltz\b").unwrap());
static HERTZ: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bhertz\b").unwrap());
static AMPS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bamps\b").unwrap());
static WATTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bwatts\b").unwrap());

/// Walks every category of `tree` once and collects the canonical fields.
///
/// When several labels feed the same field, the last one that parses wins.
/// A label whose value fails to parse never clears an earlier value.
/// Dimension triples are assigned positionally: width, height, depth.
pub fn normalize_specs(tree: &SpecTree) -> NormalizedSpecs {
    let mut out = NormalizedSpecs::default();

    for (category, value) in tree.iter() {
        match value {
            SpecValue::Tree(items) => visit_items(items, &mut out),
            _ => debug!("Skipping category {:?}: not a label mapping", category),
        }
    }

    out
}

fn visit_items(items: &SpecTree, out: &mut NormalizedSpecs) {
    for (label, value) in items.iter() {
        match value {
            SpecValue::Text(text) => {
                apply_dimension_fields(label, text, &mut out.dimensions);
                apply_electrical_fields(label, text, &mut out.electrical);
            }
            SpecValue::Tree(nested) => visit_items(nested, out),
            SpecValue::Other(other) => {
                debug!("Skipping label {:?}: unsupported value {}", label, other);
            }
        }
    }
}

fn apply_dimension_fields(label: &str, text: &str, dims: &mut CanonicalDimensions) {
    if is_dimension_label(label) {
        match match_dimensions(text) {
            Some((width, height, depth)) => {
                dims.width = Some(width);
                dims.height = Some(height);
                dims.depth = Some(depth);
            }
            None => debug!("Unparsed dimensions for {:?}: {:?}", label, text),
        }
    } else if is_weight_label(label) {
        if let Some(weight) = extract_number_value(text) {
            dims.weight = Some(weight);
        }
    } else if is_shipping_weight_label(label) {
        if let Some(weight) = extract_number_value(text) {
            dims.shipping_weight = Some(weight);
        }
    }
}

fn apply_electrical_fields(label: &str, text: &str, elec: &mut ElectricalAttributes) {
    let value = text.trim();

    if COMBINED_ELECTRICAL.is_match(label) {
        let parts: Vec<&str> = value.split('/').map(str::trim).collect();
        if let [volts, hertz, amps] = parts.as_slice() {
            elec.volts = Some(volts.to_string());
            elec.hertz = Some(hertz.to_string());
            elec.amps = Some(amps.to_string());
        } else {
            debug!("Expected three electrical parts in {:?}, got {}", value, parts.len());
        }
    }

    if WATTS.is_match(label) {
        elec.watts = Some(value.to_string());
    }

    let has_volts = VOLTS.is_match(label);
    let has_hertz = HERTZ.is_match(label);
    let has_amps = AMPS.is_match(label);

    if has_volts && !has_hertz && !has_amps {
        elec.volts = Some(value.to_string());
    }
    if has_hertz && !has_volts && !has_amps {
        elec.hertz = Some(value.to_string());
    }
    if has_amps && !has_volts && !has_hertz {
        elec.amps = Some(value.to_string());
    }
}
