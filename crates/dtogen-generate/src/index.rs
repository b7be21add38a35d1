use std::path::PathBuf;

use dtogen_core::{dto_class_name, enum_module_name, model_module_name};
use tracing::debug;

use crate::class::MODELS_DIR;
use crate::enums::ENUMS_DIR;
use crate::errors::GenerationError;
use crate::output::{OutputTarget, WrittenUnit};
use crate::unit::{ExportDecl, GeneratedUnit, UnitItem};

const INDEX_MODULE: &str = "index";

/// Barrel re-exporting every model DTO, sorted by entity name.
pub fn build_models_index(names: &[String]) -> GeneratedUnit {
    build_index(MODELS_DIR, names, |name| {
        (model_module_name(name), dto_class_name(name))
    })
}

/// Barrel re-exporting every enum, sorted by enum name.
pub fn build_enums_index(names: &[String]) -> GeneratedUnit {
    build_index(ENUMS_DIR, names, |name| {
        (enum_module_name(name), name.to_string())
    })
}

pub fn emit_models_index(
    names: &[String],
    target: &OutputTarget,
) -> Result<WrittenUnit, GenerationError> {
    let written = target.write(&build_models_index(names))?;
    debug!(entries = names.len(), path = %written.path.display(), "models index emitted");
    Ok(written)
}

pub fn emit_enums_index(
    names: &[String],
    target: &OutputTarget,
) -> Result<WrittenUnit, GenerationError> {
    let written = target.write(&build_enums_index(names))?;
    debug!(entries = names.len(), path = %written.path.display(), "enums index emitted");
    Ok(written)
}

/// Duplicate names are kept and yield duplicate re-exports.
fn build_index<F>(dir: &str, names: &[String], entry: F) -> GeneratedUnit
where
    F: Fn(&str) -> (String, String),
{
    let mut sorted: Vec<&String> = names.iter().collect();
    sorted.sort();

    let mut unit = GeneratedUnit::new(PathBuf::from(dir).join(INDEX_MODULE));
    for name in sorted {
        let (module, symbol) = entry(name.as_str());
        unit.push_item(UnitItem::Export(ExportDecl {
            module: format!("./{module}"),
            symbols: vec![symbol],
        }));
    }
    unit
}
