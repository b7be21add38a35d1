//! DTO source generation for dtogen.
//!
//! This crate turns a [`dtogen_core::Datamodel`] into TypeScript units: one
//! annotated DTO class per entity, one string enum per enum, barrel files
//! re-exporting both, and the schema-independent decorator and helper modules
//! the generated classes import.

pub mod annotation;
pub mod class;
pub mod classify;
pub mod engine;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod index;
pub mod model;
pub mod output;
pub mod symbols;
pub mod unit;

pub use annotation::{Annotation, AnnotationArg, LazyTypeRef};
pub use class::{build_model_unit, emit_model};
pub use classify::{FieldClassification, classify};
pub use engine::{GenerationEngine, GenerationResult, PlannedUnit, UnitSource};
pub use errors::GenerationError;
pub use index::{build_enums_index, build_models_index, emit_enums_index, emit_models_index};
pub use model::{GenerateOptions, GenerationReport, UnitKind, UnitReport};
pub use output::{OutputTarget, WrittenUnit};
pub use unit::GeneratedUnit;
