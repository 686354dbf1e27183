use crate::model::{Certification, SpecTree, SpecValue};

const KEYWORDS: [&str; 2] = ["certification", "certifications"];

/// Returns a copy of `tree` with every string leaf lowercased. Keys and
/// non-string leaves are left as they are.
pub fn lowercase_tree(tree: &SpecTree) -> SpecTree {
    let mut out = SpecTree::new();
    for (key, value) in tree.iter() {
        out.insert(key, lowercase_value(value));
    }
    out
}

fn lowercase_value(value: &SpecValue) -> SpecValue {
    match value {
        SpecValue::Text(text) => SpecValue::Text(text.to_lowercase()),
        SpecValue::Tree(tree) => SpecValue::Tree(lowercase_tree(tree)),
        SpecValue::Other(other) => SpecValue::Other(other.clone()),
    }
}

/// Yes when any string value, at any depth, mentions a certification.
pub fn check_certification(tree: &SpecTree) -> Certification {
    if contains_keyword(&lowercase_tree(tree)) {
        Certification::Yes
    } else {
        Certification::No
    }
}

fn contains_keyword(tree: &SpecTree) -> bool {
    tree.iter().any(|(_, value)| match value {
        SpecValue::Text(text) => KEYWORDS.iter().any(|k| text.contains(k)),
        SpecValue::Tree(nested) => contains_keyword(nested),
        SpecValue::Other(_) => false,
    })
}
