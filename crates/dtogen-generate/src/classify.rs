use std::collections::BTreeSet;

use dtogen_core::{DeclaredType, Field, ScalarType, dto_class_name};

use crate::annotation::{Annotation, AnnotationArg, LazyTypeRef};
use crate::symbols::{
    ENTITY, EXPOSE, GET_ENUM_VALUES, IS_BOOLEAN, IS_DATE, IS_DEFINED, IS_IN, IS_INT,
    IS_OPTIONAL, IS_STRING, TYPE,
};

/// Everything the class emitter needs to know about one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldClassification {
    /// TypeScript type of the property.
    pub ts_type: String,
    /// Annotations in emission order.
    pub annotations: Vec<Annotation>,
    /// `class-validator` symbols referenced by `annotations`.
    pub validator_imports: BTreeSet<String>,
}

/// Classify a field of entity `owner`.
///
/// Annotation order: presence, type check, enum membership, exposure,
/// type coercion, nested entity.
pub fn classify(field: &Field, owner: &str) -> FieldClassification {
    let declared = field.declared_type();
    let mut annotations = Vec::new();
    let mut validator_imports = BTreeSet::new();

    let presence = if field.is_required {
        IS_DEFINED
    } else {
        IS_OPTIONAL
    };
    annotations.push(Annotation::new(presence));
    validator_imports.insert(presence.to_string());

    if let Some(check) = type_check(declared) {
        annotations.push(Annotation::new(check));
        validator_imports.insert(check.to_string());
    }

    if field.is_enum() {
        annotations.push(
            Annotation::new(IS_IN).with_expr(format!("{GET_ENUM_VALUES}({})", field.field_type)),
        );
        validator_imports.insert(IS_IN.to_string());
    }

    annotations.push(Annotation::new(EXPOSE));

    // Coercion wrappers are never list-wrapped, list fields included.
    if let Some(wrapper) = coercion_target(declared) {
        annotations.push(Annotation::new(TYPE).with_expr(format!("() => {wrapper}")));
    }

    if field.is_foreign_relation(owner) {
        annotations.push(
            Annotation::new(ENTITY)
                .with_arg(AnnotationArg::Lazy(LazyTypeRef::new(
                    dto_class_name(&field.field_type),
                    field.is_list,
                )))
                .with_arg(AnnotationArg::Bool(field.is_list)),
        );
    }

    FieldClassification {
        ts_type: ts_type(field),
        annotations,
        validator_imports,
    }
}

/// TypeScript type of a field, including list wrapping.
pub fn ts_type(field: &Field) -> String {
    let element = match field.declared_type() {
        DeclaredType::Scalar(scalar) => ts_scalar(scalar).to_string(),
        DeclaredType::Named(name) if field.is_object() => dto_class_name(name),
        DeclaredType::Named(name) => name.to_string(),
    };

    if field.is_list {
        format!("{element}[]")
    } else {
        element
    }
}

pub fn ts_scalar(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Int | ScalarType::Float => "number",
        ScalarType::DateTime => "Date",
        ScalarType::String => "string",
        ScalarType::Boolean => "boolean",
        ScalarType::Decimal => "Prisma.Decimal",
        ScalarType::Json => "Prisma.JsonValue",
        ScalarType::Bytes => "Buffer",
    }
}

fn type_check(declared: DeclaredType<'_>) -> Option<&'static str> {
    match declared {
        DeclaredType::Scalar(ScalarType::Int) => Some(IS_INT),
        DeclaredType::Scalar(ScalarType::DateTime) => Some(IS_DATE),
        DeclaredType::Scalar(ScalarType::String) => Some(IS_STRING),
        DeclaredType::Scalar(ScalarType::Boolean) => Some(IS_BOOLEAN),
        _ => None,
    }
}

fn coercion_target(declared: DeclaredType<'_>) -> Option<&'static str> {
    match declared {
        DeclaredType::Scalar(ScalarType::Int | ScalarType::Float) => Some("Number"),
        DeclaredType::Scalar(ScalarType::DateTime) => Some("Date"),
        DeclaredType::Scalar(ScalarType::String) => Some("String"),
        DeclaredType::Scalar(ScalarType::Boolean) => Some("Boolean"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use dtogen_core::FieldKind;

    use super::*;

    fn field(name: &str, kind: FieldKind, field_type: &str) -> Field {
        Field {
            name: name.to_string(),
            kind,
            field_type: field_type.to_string(),
            is_list: false,
            is_required: true,
            relation_name: None,
            documentation: None,
        }
    }

    fn relation(name: &str, target: &str, is_list: bool) -> Field {
        let mut field = field(name, FieldKind::Object, target);
        field.is_list = is_list;
        field.relation_name = Some(format!("{name}Relation"));
        field
    }

    fn names(classification: &FieldClassification) -> Vec<&str> {
        classification
            .annotations
            .iter()
            .map(|annotation| annotation.name.as_str())
            .collect()
    }

    #[test]
    fn presence_follows_requiredness_only() {
        for kind in [FieldKind::Scalar, FieldKind::Enum, FieldKind::Object] {
            for required in [true, false] {
                let mut subject = field("value", kind, "String");
                subject.is_required = required;
                let classification = classify(&subject, "Owner");
                let expected = if required { IS_DEFINED } else { IS_OPTIONAL };
                assert_eq!(classification.annotations[0].name, expected);
                let presence_count = classification
                    .annotations
                    .iter()
                    .filter(|a| a.name == IS_DEFINED || a.name == IS_OPTIONAL)
                    .count();
                assert_eq!(presence_count, 1);
            }
        }
    }

    #[test]
    fn maps_scalar_types() {
        let cases = [
            ("Int", "number"),
            ("Float", "number"),
            ("DateTime", "Date"),
            ("String", "string"),
            ("Boolean", "boolean"),
            ("Decimal", "Prisma.Decimal"),
            ("Json", "Prisma.JsonValue"),
            ("Bytes", "Buffer"),
            ("BigInt", "BigInt"),
        ];
        for (declared, expected) in cases {
            let subject = field("value", FieldKind::Scalar, declared);
            assert_eq!(ts_type(&subject), expected, "declared type {declared}");
        }
    }

    #[test]
    fn wraps_lists_by_element_kind() {
        let mut tags = field("tags", FieldKind::Scalar, "String");
        tags.is_list = true;
        assert_eq!(ts_type(&tags), "string[]");

        let posts = relation("posts", "Post", true);
        assert_eq!(ts_type(&posts), "PostDTO[]");

        let author = relation("author", "User", false);
        assert_eq!(ts_type(&author), "UserDTO");

        let mut roles = field("roles", FieldKind::Enum, "Role");
        roles.is_list = true;
        assert_eq!(ts_type(&roles), "Role[]");
    }

    #[test]
    fn integer_field_gets_check_and_wrapper() {
        let classification = classify(&field("age", FieldKind::Scalar, "Int"), "User");
        assert_eq!(names(&classification), vec![IS_DEFINED, IS_INT, EXPOSE, TYPE]);
        assert_eq!(classification.annotations[3].to_string(), "@Type(() => Number)");
        assert_eq!(
            classification.validator_imports,
            BTreeSet::from([IS_DEFINED.to_string(), IS_INT.to_string()])
        );
    }

    #[test]
    fn float_field_has_wrapper_without_check() {
        let classification = classify(&field("score", FieldKind::Scalar, "Float"), "User");
        assert_eq!(names(&classification), vec![IS_DEFINED, EXPOSE, TYPE]);
    }

    #[test]
    fn orm_value_fields_have_no_check_or_wrapper() {
        for declared in ["Decimal", "Json", "Bytes"] {
            let mut subject = field("payload", FieldKind::Scalar, declared);
            subject.is_required = false;
            let classification = classify(&subject, "User");
            assert_eq!(names(&classification), vec![IS_OPTIONAL, EXPOSE]);
            assert_eq!(
                classification.validator_imports,
                BTreeSet::from([IS_OPTIONAL.to_string()])
            );
        }
    }

    #[test]
    fn enum_field_gets_membership_check() {
        let classification = classify(&field("role", FieldKind::Enum, "Role"), "User");
        assert_eq!(names(&classification), vec![IS_DEFINED, IS_IN, EXPOSE]);
        assert_eq!(
            classification.annotations[1].to_string(),
            "@IsIn(getEnumValues(Role))"
        );
        assert_eq!(classification.ts_type, "Role");
        assert!(classification.validator_imports.contains(IS_IN));
    }

    #[test]
    fn foreign_relation_gets_nested_entity() {
        let mut posts = relation("posts", "Post", true);
        posts.is_required = false;
        let classification = classify(&posts, "User");
        assert_eq!(names(&classification), vec![IS_OPTIONAL, EXPOSE, ENTITY]);

        let nested = &classification.annotations[2];
        assert_eq!(
            nested.lazy_ref(),
            Some(&LazyTypeRef::new("PostDTO", true))
        );
        assert_eq!(nested.to_string(), "@Entity(() => PostDTO, true)");
        assert!(!classification.validator_imports.contains(ENTITY));
        assert!(!classification.validator_imports.contains(EXPOSE));
    }

    #[test]
    fn self_relation_skips_nested_entity() {
        let parent = relation("parent", "Category", false);
        let classification = classify(&parent, "Category");
        assert_eq!(names(&classification), vec![IS_DEFINED, EXPOSE]);
        assert_eq!(classification.ts_type, "CategoryDTO");
    }
}
