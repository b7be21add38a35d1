use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{DeclaredType, EnumType, FieldKind, ScalarType};

/// Top-level data model: every entity and enum known to one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Datamodel {
    /// Entity definitions, in declaration order.
    #[serde(default)]
    pub models: Vec<Model>,
    /// Enum definitions, in declaration order.
    #[serde(default)]
    pub enums: Vec<EnumType>,
}

impl Datamodel {
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.enums.iter().find(|item| item.name == name)
    }

    pub fn model_names(&self) -> Vec<String> {
        self.models.iter().map(|model| model.name.clone()).collect()
    }

    pub fn enum_names(&self) -> Vec<String> {
        self.enums.iter().map(|item| item.name.clone()).collect()
    }
}

/// An entity: a named record type with ordered fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// One attribute of an entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    /// Declared type name: a scalar such as `String`, or an entity/enum name.
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default)]
    pub is_required: bool,
    /// Present when the field refers to another entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Field {
    pub fn is_relation(&self) -> bool {
        self.relation_name.is_some()
    }

    pub fn is_enum(&self) -> bool {
        self.kind == FieldKind::Enum
    }

    pub fn is_object(&self) -> bool {
        self.kind == FieldKind::Object
    }

    /// Relation to an entity other than `owner`.
    pub fn is_foreign_relation(&self, owner: &str) -> bool {
        self.is_relation() && self.field_type != owner
    }

    pub fn declared_type(&self) -> DeclaredType<'_> {
        match ScalarType::from_name(&self.field_type) {
            Some(scalar) => DeclaredType::Scalar(scalar),
            None => DeclaredType::Named(&self.field_type),
        }
    }

    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.declared_type() {
            DeclaredType::Scalar(scalar) => Some(scalar),
            DeclaredType::Named(_) => None,
        }
    }
}
