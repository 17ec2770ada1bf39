use serde_json::Value;

/// A single record from the people listing. The remote API owns the schema,
/// so records are carried as raw JSON.
pub type Character = Value;

/// Display label for a character: its `name` when present, compact JSON otherwise.
pub fn character_label(character: &Character) -> String {
    match character.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => character.to_string(),
    }
}
