//! Schema-independent support modules imported by every generated model.

use tracing::debug;

use crate::errors::GenerationError;
use crate::output::{OutputTarget, WrittenUnit};
use crate::symbols::{
    CLASS_TRANSFORMER, CLASS_VALIDATOR, CLASS_VALIDATOR_JSONSCHEMA, JSON_SCHEMA, TYPE,
    VALIDATE_NESTED,
};
use crate::unit::{GeneratedUnit, UnitItem};

pub const DECORATORS_UNIT: &str = "decorators";
pub const HELPERS_UNIT: &str = "helpers";

const FIX_ITEM_REFERENCE: &str = r##"export function FixItemJsonSchemaReference(reference: any): PropertyDecorator {
    return JSONSchema({
        $ref: `#/components/schemas/${reference.name}`,
    }) as PropertyDecorator;
}"##;

const FIX_ARRAY_REFERENCE: &str = r##"export function FixArrayJsonSchemaReference(reference: any): PropertyDecorator {
    return JSONSchema({
        type: "array",
        items: {
            $ref: `#/components/schemas/${reference.name}`,
        },
    }) as PropertyDecorator;
}"##;

const ENTITY_FACTORY: &str = r##"export function Entity(typeFunction: () => Function, isArray: boolean = false): PropertyDecorator {
    return function (target: Object, propertyKey: string | symbol) {
        ValidateNested({ each: isArray })(target, propertyKey);
        Type(typeFunction)(target, propertyKey);
        const type = typeFunction();
        if (!type) {
            return;
        }
        if (isArray) {
            FixArrayJsonSchemaReference(type)(target, propertyKey);
        } else {
            FixItemJsonSchemaReference(type)(target, propertyKey);
        }
    };
}"##;

const GET_ENUM_VALUES_FN: &str = r##"export function getEnumValues<T extends Record<string, string>>(enumType: T): Array<T[keyof T]> {
    return Object.values(enumType) as Array<T[keyof T]>;
}"##;

/// `decorators` unit: schema-reference annotations plus the `Entity`
/// nested-entity factory used on relation properties.
pub fn build_decorators_unit() -> GeneratedUnit {
    let mut unit = GeneratedUnit::new(DECORATORS_UNIT);
    unit.add_import(CLASS_VALIDATOR, [VALIDATE_NESTED]);
    unit.add_import(CLASS_TRANSFORMER, [TYPE]);
    unit.add_import(CLASS_VALIDATOR_JSONSCHEMA, [JSON_SCHEMA]);
    for body in [FIX_ITEM_REFERENCE, FIX_ARRAY_REFERENCE, ENTITY_FACTORY] {
        unit.push_item(UnitItem::Verbatim(body.to_string()));
    }
    unit
}

/// `helpers` unit: `getEnumValues`, used by enum membership checks.
pub fn build_helpers_unit() -> GeneratedUnit {
    let mut unit = GeneratedUnit::new(HELPERS_UNIT);
    unit.push_item(UnitItem::Verbatim(GET_ENUM_VALUES_FN.to_string()));
    unit
}

pub fn emit_decorators(target: &OutputTarget) -> Result<WrittenUnit, GenerationError> {
    let written = target.write(&build_decorators_unit())?;
    debug!(path = %written.path.display(), "decorators emitted");
    Ok(written)
}

pub fn emit_helpers(target: &OutputTarget) -> Result<WrittenUnit, GenerationError> {
    let written = target.write(&build_helpers_unit())?;
    debug!(path = %written.path.display(), "helpers emitted");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorators_unit_imports_each_library_once() {
        let unit = build_decorators_unit();
        let modules: Vec<&str> = unit
            .imports()
            .iter()
            .map(|group| group.module.as_str())
            .collect();
        assert_eq!(
            modules,
            vec![CLASS_VALIDATOR, CLASS_TRANSFORMER, CLASS_VALIDATOR_JSONSCHEMA]
        );

        let source = unit.render();
        assert!(source.starts_with("import { ValidateNested } from \"class-validator\";\n"));
        assert!(source.contains("export function FixItemJsonSchemaReference"));
        assert!(source.contains("type: \"array\""));
        assert!(source.contains("ValidateNested({ each: isArray })"));
        assert!(source.contains("if (!type) {"));
    }

    #[test]
    fn helper_units_do_not_depend_on_schema() {
        assert_eq!(build_decorators_unit(), build_decorators_unit());
        assert!(build_helpers_unit().render().contains("export function getEnumValues"));
    }
}
