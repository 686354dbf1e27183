// Normalizer module: turns a raw specification tree into canonical fields.

pub mod numeric;
pub mod dimensions;
pub mod synonyms;
pub mod specs;
pub mod certification;

// Re-export the entry points for ease of use.
pub use certification::check_certification;
pub use specs::normalize_specs;
