use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::naming::is_valid_identifier;
use crate::schema::Datamodel;

/// Validate internal consistency of a data model.
///
/// This checks:
/// - duplicate models/enums, and models sharing a name with an enum
/// - duplicate fields within a model
/// - duplicate values within an enum
/// - names and enum values that cannot be emitted as TypeScript identifiers
///
/// Relation targets are not checked; an unknown target is emitted as-is.
pub fn validate_datamodel(datamodel: &Datamodel) -> Result<()> {
    let mut enums = BTreeSet::new();
    for item in &datamodel.enums {
        check_identifier("enum", &item.name)?;
        if !enums.insert(item.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate enum name: {}",
                item.name
            )));
        }

        let mut values = BTreeSet::new();
        for value in &item.values {
            check_identifier("enum value", &value.name)?;
            if !values.insert(value.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate enum value: {}.{}",
                    item.name, value.name
                )));
            }
        }
    }

    let mut models = BTreeSet::new();
    for model in &datamodel.models {
        check_identifier("model", &model.name)?;
        if enums.contains(model.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "model name collides with enum: {}",
                model.name
            )));
        }
        if !models.insert(model.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate model name: {}",
                model.name
            )));
        }

        let mut fields = BTreeSet::new();
        for field in &model.fields {
            if !is_valid_identifier(&field.name) {
                return Err(Error::InvalidSchema(format!(
                    "invalid field name: {}.{}",
                    model.name, field.name
                )));
            }
            if !fields.insert(field.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate field name: {}.{}",
                    model.name, field.name
                )));
            }
        }
    }

    Ok(())
}

fn check_identifier(label: &str, name: &str) -> Result<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(Error::InvalidSchema(format!("invalid {label} name: {name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, Model};
    use crate::types::{EnumType, EnumValue, FieldKind};

    fn field(name: &str, field_type: &str) -> Field {
        Field {
            name: name.to_string(),
            kind: FieldKind::Scalar,
            field_type: field_type.to_string(),
            is_list: false,
            is_required: true,
            relation_name: None,
            documentation: None,
        }
    }

    fn enum_type(name: &str, values: &[&str]) -> EnumType {
        EnumType {
            name: name.to_string(),
            values: values
                .iter()
                .map(|value| EnumValue {
                    name: value.to_string(),
                    db_name: None,
                })
                .collect(),
        }
    }

    fn model(name: &str, fields: Vec<Field>) -> Model {
        Model {
            name: name.to_string(),
            fields,
            documentation: None,
        }
    }

    #[test]
    fn accepts_unknown_relation_targets() {
        let mut author = field("author", "Ghost");
        author.kind = FieldKind::Object;
        author.relation_name = Some("PostToGhost".to_string());
        let datamodel = Datamodel {
            models: vec![model("Post", vec![field("id", "Int"), author])],
            enums: Vec::new(),
        };

        assert!(validate_datamodel(&datamodel).is_ok());
    }

    #[test]
    fn rejects_duplicate_models() {
        let datamodel = Datamodel {
            models: vec![model("User", Vec::new()), model("User", Vec::new())],
            enums: Vec::new(),
        };

        let err = validate_datamodel(&datamodel).unwrap_err();
        assert!(err.to_string().contains("duplicate model name: User"));
    }

    #[test]
    fn rejects_duplicate_fields() {
        let datamodel = Datamodel {
            models: vec![model("User", vec![field("id", "Int"), field("id", "String")])],
            enums: Vec::new(),
        };

        let err = validate_datamodel(&datamodel).unwrap_err();
        assert!(err.to_string().contains("duplicate field name: User.id"));
    }

    #[test]
    fn rejects_model_enum_collision() {
        let datamodel = Datamodel {
            models: vec![model("Role", Vec::new())],
            enums: vec![EnumType {
                name: "Role".to_string(),
                values: Vec::new(),
            }],
        };

        assert!(matches!(
            validate_datamodel(&datamodel),
            Err(Error::InvalidSchema(_))
        ));
    }

    #[test]
    fn rejects_invalid_identifiers() {
        let datamodel = Datamodel {
            models: vec![model("User", vec![field("first-name", "String")])],
            enums: Vec::new(),
        };

        let err = validate_datamodel(&datamodel).unwrap_err();
        assert!(err.to_string().contains("invalid field name"));
    }

    #[test]
    fn rejects_enum_values_that_are_not_identifiers() {
        let datamodel = Datamodel {
            models: Vec::new(),
            enums: vec![enum_type("Status", &["OPEN", "in-progress"])],
        };

        let err = validate_datamodel(&datamodel).unwrap_err();
        assert!(
            err.to_string()
                .contains("invalid enum value name: in-progress")
        );
    }

    #[test]
    fn rejects_duplicate_enum_values() {
        let datamodel = Datamodel {
            models: Vec::new(),
            enums: vec![enum_type("Status", &["OPEN", "OPEN"])],
        };

        let err = validate_datamodel(&datamodel).unwrap_err();
        assert!(err.to_string().contains("duplicate enum value: Status.OPEN"));
    }
}
