/// Suffix appended to entity names to form generated class names.
pub const DTO_SUFFIX: &str = "DTO";

/// Generated class name for an entity (`User` -> `UserDTO`).
pub fn dto_class_name(entity: &str) -> String {
    format!("{entity}{DTO_SUFFIX}")
}

/// Module name (no extension) of an entity's generated unit.
pub fn model_module_name(entity: &str) -> String {
    format!("{}.model", dto_class_name(entity))
}

/// Module name (no extension) of an enum's generated unit.
pub fn enum_module_name(name: &str) -> String {
    format!("{name}.enum")
}

/// True when `name` can be used verbatim as a TypeScript identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}
