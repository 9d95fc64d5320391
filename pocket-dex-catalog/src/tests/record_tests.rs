use super::*;
use crate::schema::ScalarKind;

fn species_schema() -> Arc<Schema> {
    Arc::new(
        Schema::new("species", "number")
            .field("name", FieldKind::Map(ScalarKind::Text))
            .field("type", FieldKind::List(ScalarKind::Text))
            .field("capture_rate", FieldKind::Integer)
            .field("base_stats", FieldKind::Map(ScalarKind::Integer))
            .field("egg_groups", FieldKind::List(ScalarKind::Text))
            .field("owned", FieldKind::choice(["unknown", "seen", "owned"])),
    )
}

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn bulbasaur() -> Record {
    Record::from_row(
        &species_schema(),
        1,
        &row(&[
            ("number", "1"),
            ("name", "[English:Bulbasaur,Japanese:Fushigidane]"),
            ("type", "[Grass,Poison]"),
            ("capture_rate", "45"),
            ("base_stats", "[hp:45,atk:49,def:49]"),
            ("classification", "Seed Pokemon"),
        ]),
    )
    .unwrap()
}

#[test]
fn test_fields_decoded_by_kind() {
    let record = bulbasaur();
    assert_eq!(record.id().as_str(), "1");
    assert_eq!(record.get("number").unwrap(), FieldValue::Id(EntryId::new("1")));
    assert_eq!(record.get("capture_rate").unwrap(), FieldValue::Integer(45));
    assert_eq!(
        record.get("type").unwrap(),
        FieldValue::List(vec![FieldValue::text("Grass"), FieldValue::text("Poison")])
    );
    let name = record.get("name").unwrap();
    assert_eq!(
        name.as_map().and_then(|m| m.get("English")),
        Some(&FieldValue::text("Bulbasaur"))
    );
}

#[test]
fn test_undeclared_columns_kept_as_text() {
    let record = bulbasaur();
    assert_eq!(
        record.get("classification").unwrap(),
        FieldValue::text("Seed Pokemon")
    );
}

#[test]
fn test_absent_collections_are_empty_and_choices_defaulted() {
    let record = bulbasaur();
    assert_eq!(record.get("egg_groups").unwrap(), FieldValue::List(Vec::new()));
    assert_eq!(record.choice("owned").unwrap(), "unknown");
}

#[test]
fn test_missing_field_is_key_not_found() {
    let err = bulbasaur().get("weight").unwrap_err();
    assert!(err.is_key_not_found());
    assert!(matches!(err, CatalogError::FieldNotFound { ref field, .. } if field == "weight"));
}

#[test]
fn test_empty_numeric_cell_is_absent() {
    let record = Record::from_row(
        &species_schema(),
        1,
        &row(&[("number", "0"), ("capture_rate", " ")]),
    )
    .unwrap();
    assert!(!record.has_field("capture_rate"));
    assert!(record.get("capture_rate").unwrap_err().is_key_not_found());
}

#[test]
fn test_get_returns_defensive_copy() {
    let record = bulbasaur();
    let mut types = record.get("type").unwrap();
    if let FieldValue::List(items) = &mut types {
        items.push(FieldValue::text("Fire"));
        items[0] = FieldValue::text("Water");
    }
    assert_eq!(
        record.get("type").unwrap(),
        FieldValue::List(vec![FieldValue::text("Grass"), FieldValue::text("Poison")])
    );
}

#[test]
fn test_malformed_field_reports_row_and_field() {
    let err = Record::from_row(
        &species_schema(),
        3,
        &row(&[("number", "3"), ("type", "[Grass,Poison")]),
    )
    .unwrap_err();
    match err {
        CatalogError::MalformedInput { row, field, .. } => {
            assert_eq!(row, "3");
            assert_eq!(field, "type");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_identifier_uses_row_number() {
    let err = Record::from_row(&species_schema(), 7, &row(&[("number", "  "), ("type", "[Fire]")]))
        .unwrap_err();
    assert!(matches!(err, CatalogError::MalformedInput { ref row, .. } if row == "#7"));
}

#[test]
fn test_set_choice_normalizes_case() {
    let mut record = bulbasaur();
    record.set_choice("owned", "SEEN").unwrap();
    assert_eq!(record.choice("owned").unwrap(), "seen");
    assert_eq!(record.get("owned").unwrap(), FieldValue::text("seen"));
}

#[test]
fn test_set_choice_rejects_unknown_and_keeps_previous() {
    let mut record = bulbasaur();
    record.set_choice("owned", "owned").unwrap();
    let err = record.set_choice("owned", "caught").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidValue { .. }));
    assert_eq!(record.choice("owned").unwrap(), "owned");
}

#[test]
fn test_set_choice_on_read_only_field() {
    let mut record = bulbasaur();
    let err = record.set_choice("capture_rate", "3").unwrap_err();
    assert!(matches!(err, CatalogError::InvalidValue { .. }));
    assert_eq!(record.get("capture_rate").unwrap(), FieldValue::Integer(45));
}

#[test]
fn test_choice_column_validated_at_construction() {
    let err = Record::from_row(
        &species_schema(),
        7,
        &row(&[("number", "25"), ("owned", "Caught")]),
    )
    .unwrap_err();
    match err {
        CatalogError::MalformedInput { row, field, reason } => {
            assert_eq!(row, "25");
            assert_eq!(field, "owned");
            assert!(reason.contains("caught"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let record = Record::from_row(&species_schema(), 1, &row(&[("number", "1"), ("owned", "Owned")]))
        .unwrap();
    assert_eq!(record.choice("owned").unwrap(), "owned");
}
