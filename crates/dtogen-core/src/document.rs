use std::path::Path;

use jsonschema::JSONSchema;
use schemars::schema_for;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::Datamodel;
use crate::validation::validate_datamodel;

/// Key of the envelope some schema dumps wrap the data model in.
const ENVELOPE_KEY: &str = "datamodel";

/// JSON Schema describing the data-model document.
pub fn datamodel_json_schema() -> Result<Value> {
    let schema = schema_for!(Datamodel);
    serde_json::to_value(&schema).map_err(Error::from)
}

/// Parse a data-model document, validate its structure and contents.
///
/// Accepts either a bare `{ "models": [...], "enums": [...] }` object or the
/// same object nested under a `datamodel` key.
pub fn parse_datamodel(contents: &str) -> Result<Datamodel> {
    let document: Value = serde_json::from_str(contents)?;
    let document = unwrap_envelope(document);

    check_structure(&document)?;

    let datamodel: Datamodel = serde_json::from_value(document)?;
    validate_datamodel(&datamodel)?;
    Ok(datamodel)
}

/// Read and parse a data-model document from disk.
pub fn load_datamodel(path: &Path) -> Result<Datamodel> {
    let contents = std::fs::read_to_string(path)?;
    parse_datamodel(&contents)
}

fn unwrap_envelope(document: Value) -> Value {
    match document {
        Value::Object(mut map) if map.contains_key(ENVELOPE_KEY) => map
            .remove(ENVELOPE_KEY)
            .unwrap_or(Value::Object(serde_json::Map::new())),
        other => other,
    }
}

fn check_structure(document: &Value) -> Result<()> {
    let schema = datamodel_json_schema()?;
    let compiled =
        JSONSchema::compile(&schema).map_err(|err| Error::Other(err.to_string()))?;

    if let Err(errors) = compiled.validate(document) {
        let issues: Vec<String> = errors
            .map(|error| {
                let path = error.instance_path.to_string();
                let path = if path.is_empty() { "/".to_string() } else { path };
                format!("{path}: {error}")
            })
            .collect();
        return Err(Error::InvalidDocument(issues.join("; ")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: &str = r#"{
        "models": [
            {
                "name": "User",
                "fields": [
                    { "name": "id", "kind": "scalar", "type": "Int", "isList": false, "isRequired": true },
                    { "name": "role", "kind": "enum", "type": "Role", "isList": false, "isRequired": true }
                ]
            }
        ],
        "enums": [
            { "name": "Role", "values": [{ "name": "ADMIN" }, { "name": "USER", "dbName": "user" }] }
        ]
    }"#;

    #[test]
    fn parses_bare_document() {
        let datamodel = parse_datamodel(BARE).expect("parse datamodel");
        assert_eq!(datamodel.model_names(), vec!["User".to_string()]);
        let role = datamodel.enum_type("Role").expect("role enum");
        assert_eq!(role.value_names().collect::<Vec<_>>(), vec!["ADMIN", "USER"]);
        assert_eq!(role.values[1].db_name.as_deref(), Some("user"));
    }

    #[test]
    fn unwraps_datamodel_envelope() {
        let wrapped = format!(r#"{{ "datamodel": {BARE}, "schema": {{}} }}"#);
        let datamodel = parse_datamodel(&wrapped).expect("parse wrapped datamodel");
        let user = datamodel.model("User").expect("user model");
        assert_eq!(user.fields.len(), 2);
        assert!(user.fields[1].is_enum());
    }

    #[test]
    fn reports_structural_violations_with_paths() {
        let invalid = r#"{ "models": [ { "fields": [] } ] }"#;
        let err = parse_datamodel(invalid).unwrap_err();
        match err {
            Error::InvalidDocument(message) => assert!(message.contains("/models/0")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unknown_field_kind() {
        let invalid = r#"{ "models": [ { "name": "User", "fields": [
            { "name": "id", "kind": "composite", "type": "Int" }
        ] } ] }"#;
        assert!(matches!(
            parse_datamodel(invalid),
            Err(Error::InvalidDocument(_))
        ));
    }
}
