//! Core contracts and helpers for dtogen.
//!
//! This crate defines the data-model types consumed by the generator, the
//! document loader with its JSON Schema, and validation helpers shared by the
//! generator and the CLI.

pub mod document;
pub mod error;
pub mod naming;
pub mod schema;
pub mod types;
pub mod validation;

pub use document::{datamodel_json_schema, load_datamodel, parse_datamodel};
pub use error::{Error, Result};
pub use naming::{dto_class_name, enum_module_name, is_valid_identifier, model_module_name};
pub use schema::{Datamodel, Field, Model};
pub use types::{DeclaredType, EnumType, EnumValue, FieldKind, ScalarType};
pub use validation::validate_datamodel;
