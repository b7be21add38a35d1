use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a field's declared type should be interpreted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Scalar,
    /// Reference to another entity.
    Object,
    Enum,
    Unsupported,
}

/// Built-in scalar types understood by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarType {
    Int,
    Float,
    String,
    Boolean,
    DateTime,
    Bytes,
    Decimal,
    Json,
}

impl ScalarType {
    pub fn from_name(name: &str) -> Option<Self> {
        let scalar = match name {
            "Int" => Self::Int,
            "Float" => Self::Float,
            "String" => Self::String,
            "Boolean" => Self::Boolean,
            "DateTime" => Self::DateTime,
            "Bytes" => Self::Bytes,
            "Decimal" => Self::Decimal,
            "Json" => Self::Json,
            _ => return None,
        };
        Some(scalar)
    }

    /// Scalars whose TypeScript type lives in the ORM client namespace.
    pub fn is_orm_value(self) -> bool {
        matches!(self, Self::Decimal | Self::Json)
    }
}

/// Declared type of a field, resolved against the scalar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType<'a> {
    Scalar(ScalarType),
    /// Entity, enum, or any name outside the scalar table.
    Named(&'a str),
}

/// Enum definition with ordered values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EnumType {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl EnumType {
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|value| value.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
}
