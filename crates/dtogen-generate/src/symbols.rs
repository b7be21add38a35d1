//! Module specifiers and symbol names referenced by generated sources.

pub const CLASS_VALIDATOR: &str = "class-validator";
pub const CLASS_TRANSFORMER: &str = "class-transformer";
pub const CLASS_VALIDATOR_JSONSCHEMA: &str = "class-validator-jsonschema";
pub const PRISMA_CLIENT: &str = "@prisma/client";

/// Relative specifiers, seen from `models/`.
pub const RELATIONS_MODULE: &str = "./";
pub const HELPERS_MODULE: &str = "../helpers";
pub const ENUMS_MODULE: &str = "../enums";
pub const DECORATORS_MODULE: &str = "../decorators";

pub const IS_DEFINED: &str = "IsDefined";
pub const IS_OPTIONAL: &str = "IsOptional";
pub const IS_INT: &str = "IsInt";
pub const IS_DATE: &str = "IsDate";
pub const IS_STRING: &str = "IsString";
pub const IS_BOOLEAN: &str = "IsBoolean";
pub const IS_IN: &str = "IsIn";
pub const VALIDATE_NESTED: &str = "ValidateNested";

pub const EXPOSE: &str = "Expose";
pub const TYPE: &str = "Type";
pub const JSON_SCHEMA: &str = "JSONSchema";

pub const ENTITY: &str = "Entity";
pub const GET_ENUM_VALUES: &str = "getEnumValues";
pub const PRISMA: &str = "Prisma";

/// Static identity property added to every generated class.
pub const CLASS_NAME_PROPERTY: &str = "className";
