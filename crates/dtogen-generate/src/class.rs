use std::collections::BTreeSet;
use std::path::PathBuf;

use dtogen_core::{Model, dto_class_name, model_module_name};
use tracing::debug;

use crate::classify::classify;
use crate::errors::GenerationError;
use crate::output::{OutputTarget, WrittenUnit};
use crate::symbols::{
    CLASS_NAME_PROPERTY, CLASS_TRANSFORMER, CLASS_VALIDATOR, DECORATORS_MODULE, ENTITY,
    ENUMS_MODULE, EXPOSE, GET_ENUM_VALUES, HELPERS_MODULE, PRISMA, PRISMA_CLIENT,
    RELATIONS_MODULE, TYPE,
};
use crate::unit::{ClassDecl, GeneratedUnit, PropertyDecl, PropertyMarker, UnitItem};

/// Directory (relative to the output root) holding model units.
pub const MODELS_DIR: &str = "models";

/// Relative path of an entity's unit, without extension.
pub fn model_unit_path(model: &str) -> PathBuf {
    PathBuf::from(MODELS_DIR).join(model_module_name(model))
}

/// Build the DTO unit for one entity.
pub fn build_model_unit(model: &Model) -> GeneratedUnit {
    let mut unit = GeneratedUnit::new(model_unit_path(&model.name));
    let classifications: Vec<_> = model
        .fields
        .iter()
        .map(|field| classify(field, &model.name))
        .collect();

    if model
        .fields
        .iter()
        .any(|field| field.scalar_type().is_some_and(|scalar| scalar.is_orm_value()))
    {
        unit.add_import(PRISMA_CLIENT, [PRISMA]);
    }

    let validator_imports: BTreeSet<String> = classifications
        .iter()
        .flat_map(|classification| classification.validator_imports.iter().cloned())
        .collect();
    unit.add_import(CLASS_VALIDATOR, validator_imports);
    unit.add_import(CLASS_TRANSFORMER, [EXPOSE, TYPE]);

    let relations: Vec<String> = model
        .fields
        .iter()
        .filter(|field| field.is_foreign_relation(&model.name))
        .map(|field| dto_class_name(&field.field_type))
        .collect();
    unit.add_import(RELATIONS_MODULE, relations);

    if model.fields.iter().any(|field| field.is_enum()) {
        unit.add_import(HELPERS_MODULE, [GET_ENUM_VALUES]);
        let enums = model
            .fields
            .iter()
            .filter(|field| field.is_enum())
            .map(|field| field.field_type.clone());
        unit.add_import(ENUMS_MODULE, enums);
    }

    unit.add_import(DECORATORS_MODULE, [ENTITY]);

    let class_name = dto_class_name(&model.name);
    let mut properties: Vec<PropertyDecl> = model
        .fields
        .iter()
        .zip(classifications)
        .map(|(field, classification)| PropertyDecl {
            name: field.name.clone(),
            ts_type: classification.ts_type,
            marker: PropertyMarker::from_required(field.is_required),
            is_static: false,
            initializer: None,
            annotations: classification.annotations,
        })
        .collect();

    properties.push(PropertyDecl {
        name: CLASS_NAME_PROPERTY.to_string(),
        ts_type: "string".to_string(),
        marker: PropertyMarker::None,
        is_static: true,
        initializer: Some(format!("\"{class_name}\"")),
        annotations: Vec::new(),
    });

    unit.push_item(UnitItem::Class(ClassDecl {
        name: class_name,
        is_exported: true,
        properties,
    }));

    unit
}

/// Build and write the DTO unit for one entity, overwriting any previous one.
pub fn emit_model(model: &Model, target: &OutputTarget) -> Result<WrittenUnit, GenerationError> {
    let unit = build_model_unit(model);
    let written = target.write(&unit)?;
    debug!(
        model = %model.name,
        fields = model.fields.len(),
        path = %written.path.display(),
        "model emitted"
    );
    Ok(written)
}
