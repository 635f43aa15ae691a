use serde_json::{Map, Value};

/// Key whose values make up the declared document-type list.
pub const FILE_TYPE_KEY: &str = "file_type";
/// Key kept out of the person-information block.
pub const FILENAME_KEY: &str = "filename";

/// Per-chunk metadata, in the order the caller supplied the keys.
pub type ChunkMetadata = Map<String, Value>;

/// Renders a metadata value the way it should read inside a prompt:
/// strings verbatim, `null` as nothing, everything else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// True when the key belongs in the free-text metadata block.
pub fn is_descriptive_key(key: &str) -> bool {
    key != FILE_TYPE_KEY && key != FILENAME_KEY
}
