//! Utility helpers: polymorphic YAML field decoding.
pub mod yaml;

pub use yaml::map_of_string_string;
pub use yaml::map_of_string_value;
pub use yaml::StringOrSeq;
