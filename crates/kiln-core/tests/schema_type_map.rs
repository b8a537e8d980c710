use kiln_core::schema::{db, model, FieldType};

#[test]
fn known_types_map_to_both_targets() {
    let table = [
        ("String", db::Type::VarChar(255), model::Type::String),
        ("Number", db::Type::Integer, model::Type::Integer),
        ("Float", db::Type::Float, model::Type::Float),
        ("Boolean", db::Type::Boolean, model::Type::Boolean),
        ("Date", db::Type::Timestamp, model::Type::Date),
        ("Text", db::Type::Text, model::Type::Text),
        ("UUID", db::Type::Uuid, model::Type::Uuid),
        ("JSON", db::Type::Json, model::Type::Json),
    ];

    for (name, sql, model) in table {
        let ty = FieldType::from(name);
        assert_eq!(ty.sql_type(), sql, "sql type of {name}");
        assert_eq!(ty.model_type(), model, "model type of {name}");
    }
}

#[test]
fn array_is_text_column_and_text_array_model() {
    let ty = FieldType::Array;
    assert_eq!(ty.sql_type(), db::Type::Text);
    assert_eq!(ty.model_type(), model::Type::array(model::Type::Text));
}

#[test]
fn unknown_types_degrade_to_text() {
    for name in ["Decimal", "string", "", "Map<String>"] {
        let ty = FieldType::from(name);
        assert_eq!(ty.sql_type(), db::Type::Text);
        assert_eq!(ty.model_type(), model::Type::Text);
    }
}
