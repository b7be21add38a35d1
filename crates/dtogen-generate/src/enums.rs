use std::path::PathBuf;

use dtogen_core::{EnumType, enum_module_name};
use tracing::debug;

use crate::errors::GenerationError;
use crate::output::{OutputTarget, WrittenUnit};
use crate::unit::{EnumDecl, GeneratedUnit, UnitItem};

/// Directory (relative to the output root) holding enum units.
pub const ENUMS_DIR: &str = "enums";

pub fn enum_unit_path(name: &str) -> PathBuf {
    PathBuf::from(ENUMS_DIR).join(enum_module_name(name))
}

/// Build the unit declaring one schema enum as a TypeScript string enum.
pub fn build_enum_unit(item: &EnumType) -> GeneratedUnit {
    let mut unit = GeneratedUnit::new(enum_unit_path(&item.name));
    unit.push_item(UnitItem::Enum(EnumDecl {
        name: item.name.clone(),
        members: item.value_names().map(str::to_string).collect(),
    }));
    unit
}

pub fn emit_enum(item: &EnumType, target: &OutputTarget) -> Result<WrittenUnit, GenerationError> {
    let written = target.write(&build_enum_unit(item))?;
    debug!(
        name = %item.name,
        values = item.values.len(),
        path = %written.path.display(),
        "enum emitted"
    );
    Ok(written)
}
