// Known label spellings per canonical field, collected from the catalog's page templates.
// New templates only need new entries here.

pub const DIMENSION_LABELS: &[&str] = &[
    "Set Dimension (WxHxD)",
    "Set Dimension (W x H x D)",
    "Set Dimension without Stand (WxHxD)",
    "Product Dimension (WxHxD)",
    "Product Dimensions (W x H x D)",
    "Product Dimensions (WxHxD)",
    "Dimensions (WxHxD)",
    "Dimension (WxHxD)",
    "Overall Dimensions (WxHxD)",
    "Net Dimension (WxHxD)",
    "Net Dimensions (WxHxD)",
    "Case Dimension (WxHxD)",
    "Unit Dimension (WxHxD)",
    "Product Size (WxHxD)",
    "Dimensions",
];

pub const WEIGHT_LABELS: &[&str] = &[
    "Weight",
    "Set Weight",
    "Set Weight without Stand",
    "Product Weight",
    "Net Weight",
    "Net Weight (lbs)",
    "Unit Weight",
    "Product Weight (lbs)",
    "Weight (lbs)",
    "Set Weight with Stand",
];

pub const SHIPPING_WEIGHT_LABELS: &[&str] = &[
    "Shipping Weight",
    "Package Weight",
    "Gross Weight",
    "Shipping Weight (lbs)",
    "Carton Weight",
];

/// Case-insensitive exact match of `label` against a synonym set. Surrounding
/// whitespace of the label is ignored; inner text must match exactly.
pub fn matches(label: &str, synonyms: &[&str]) -> bool {
    let label = label.trim();
    synonyms.iter().any(|s| s.eq_ignore_ascii_case(label))
}

pub fn is_dimension_label(label: &str) -> bool {
    matches(label, DIMENSION_LABELS)
}

pub fn is_weight_label(label: &str) -> bool {
    matches(label, WEIGHT_LABELS)
}

pub fn is_shipping_weight_label(label: &str) -> bool {
    matches(label, SHIPPING_WEIGHT_LABELS)
}
