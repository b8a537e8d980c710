use anyhow::{Context, Result};
use kiln::EntityDescriptor;
use serde_json::Value;
use std::path::Path;

/// Reads the entity descriptors in a JSON file.
pub fn load_descriptors(path: impl AsRef<Path>) -> Result<Vec<EntityDescriptor>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    parse_descriptors(&contents).with_context(|| format!("invalid descriptor file {}", path.display()))
}

/// Parses either a single entity object or an array of them.
pub fn parse_descriptors(contents: &str) -> Result<Vec<EntityDescriptor>> {
    let value: Value = serde_json::from_str(contents)?;

    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                EntityDescriptor::from_json(&item.to_string())
                    .with_context(|| format!("entity #{i}"))
            })
            .collect(),
        _ => Ok(vec![EntityDescriptor::from_json(contents)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln::FieldType;

    #[test]
    fn single_entity() {
        let entities = parse_descriptors(
            r#"{ "name": "User", "fields": [{ "name": "age", "type": "Number" }] }"#,
        )
        .unwrap();

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "User");
        assert_eq!(entities[0].fields[0].ty, FieldType::Number);
    }

    #[test]
    fn array_keeps_order() {
        let entities = parse_descriptors(
            r#"[
                { "name": "User", "fields": [{ "name": "email", "type": "String" }] },
                { "name": "Post", "fields": [{ "name": "author_id", "type": "Number", "ref": "User" }] }
            ]"#,
        )
        .unwrap();

        let names: Vec<_> = entities.iter().map(|e| &e.name[..]).collect();
        assert_eq!(names, ["User", "Post"]);
        assert_eq!(entities[1].fields[0].reference.as_deref(), Some("User"));
    }

    #[test]
    fn bad_array_item_is_located() {
        let err = parse_descriptors(r#"[{ "name": "User", "fields": [] }, { "fields": [] }]"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "entity #1");
    }

    #[test]
    fn fields_must_be_a_list() {
        assert!(parse_descriptors(r#"{ "name": "User", "fields": "age" }"#).is_err());
        assert!(parse_descriptors("not json").is_err());
    }

    #[test]
    fn shape_errors_are_invalid_descriptors() {
        let err = parse_descriptors(r#"{ "fields": [] }"#).unwrap_err();
        let err = err.downcast_ref::<kiln::Error>().unwrap();
        assert!(err.is_invalid_descriptor());
    }
}
