use crate::unit::{
    ClassDecl, EnumDecl, ExportDecl, GeneratedUnit, PropertyDecl, PropertyMarker, UnitItem,
};

const INDENT: &str = "    ";

/// Render a unit as TypeScript source.
///
/// Import groups come first in registration order; groups left empty are
/// skipped. Items are separated by a blank line, except consecutive
/// re-exports which form one block.
pub fn render_unit(unit: &GeneratedUnit) -> String {
    let mut out = String::new();

    for group in unit.imports() {
        if group.symbols.is_empty() {
            continue;
        }
        let symbols: Vec<&str> = group.symbols.iter().map(String::as_str).collect();
        out.push_str(&format!(
            "import {{ {} }} from \"{}\";\n",
            symbols.join(", "),
            group.module
        ));
    }

    let mut previous: Option<&UnitItem> = None;
    for item in unit.items() {
        let continues_block = matches!(
            (previous, item),
            (Some(UnitItem::Export(_)), UnitItem::Export(_))
        );
        if !out.is_empty() && !continues_block {
            out.push('\n');
        }
        render_item(&mut out, item);
        previous = Some(item);
    }

    out
}

fn render_item(out: &mut String, item: &UnitItem) {
    match item {
        UnitItem::Class(class) => render_class(out, class),
        UnitItem::Enum(decl) => render_enum(out, decl),
        UnitItem::Export(export) => render_export(out, export),
        UnitItem::Verbatim(text) => {
            out.push_str(text);
            if !text.ends_with('\n') {
                out.push('\n');
            }
        }
    }
}

fn render_class(out: &mut String, class: &ClassDecl) {
    if class.is_exported {
        out.push_str("export ");
    }
    out.push_str(&format!("class {} {{\n", class.name));
    for (idx, property) in class.properties.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        render_property(out, property);
    }
    out.push_str("}\n");
}

fn render_property(out: &mut String, property: &PropertyDecl) {
    for annotation in &property.annotations {
        out.push_str(&format!("{INDENT}{annotation}\n"));
    }

    out.push_str(INDENT);
    if property.is_static {
        out.push_str("static ");
    }
    out.push_str(&property.name);
    match property.marker {
        PropertyMarker::Definite => out.push('!'),
        PropertyMarker::Optional => out.push('?'),
        PropertyMarker::None => {}
    }
    out.push_str(&format!(": {}", property.ts_type));
    if let Some(initializer) = &property.initializer {
        out.push_str(&format!(" = {initializer}"));
    }
    out.push_str(";\n");
}

fn render_enum(out: &mut String, decl: &EnumDecl) {
    out.push_str(&format!("export enum {} {{\n", decl.name));
    for member in &decl.members {
        out.push_str(&format!("{INDENT}{member} = \"{member}\",\n"));
    }
    out.push_str("}\n");
}

fn render_export(out: &mut String, export: &ExportDecl) {
    out.push_str(&format!(
        "export {{ {} }} from \"{}\";\n",
        export.symbols.join(", "),
        export.module
    ));
}
