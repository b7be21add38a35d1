use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::annotation::Annotation;
use crate::output::typescript::render_unit;

/// Named imports from one module specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportGroup {
    pub module: String,
    pub symbols: BTreeSet<String>,
}

/// `!` / `?` marker written after a property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyMarker {
    Definite,
    Optional,
    None,
}

impl PropertyMarker {
    pub fn from_required(required: bool) -> Self {
        if required {
            PropertyMarker::Definite
        } else {
            PropertyMarker::Optional
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub name: String,
    pub ts_type: String,
    pub marker: PropertyMarker,
    pub is_static: bool,
    pub initializer: Option<String>,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub is_exported: bool,
    pub properties: Vec<PropertyDecl>,
}

impl ClassDecl {
    pub fn property(&self, name: &str) -> Option<&PropertyDecl> {
        self.properties.iter().find(|property| property.name == name)
    }
}

/// String enum; each member's value equals its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: String,
    pub members: Vec<String>,
}

/// `export { <symbols> } from "<module>";`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDecl {
    pub module: String,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitItem {
    Class(ClassDecl),
    Enum(EnumDecl),
    Export(ExportDecl),
    /// Source text emitted as-is.
    Verbatim(String),
}

/// In-memory model of one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    relative_path: PathBuf,
    imports: Vec<ImportGroup>,
    items: Vec<UnitItem>,
}

impl GeneratedUnit {
    /// New empty unit at `relative_path` (relative to the output root,
    /// without extension).
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            imports: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Register named imports from `module`.
    ///
    /// Requests for a module that already has a group are unioned into that
    /// group, so each module specifier yields one import statement and each
    /// symbol appears in it at most once.
    pub fn add_import<I, S>(&mut self, module: &str, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let group = match self.imports.iter().position(|group| group.module == module) {
            Some(idx) => &mut self.imports[idx],
            None => {
                self.imports.push(ImportGroup {
                    module: module.to_string(),
                    symbols: BTreeSet::new(),
                });
                let last = self.imports.len() - 1;
                &mut self.imports[last]
            }
        };

        let mut merged: BTreeSet<String> = std::mem::take(&mut group.symbols);
        merged.extend(symbols.into_iter().map(Into::into));
        group.symbols = merged;
    }

    pub fn imports(&self) -> &[ImportGroup] {
        &self.imports
    }

    pub fn import_group(&self, module: &str) -> Option<&ImportGroup> {
        self.imports.iter().find(|group| group.module == module)
    }

    pub fn push_item(&mut self, item: UnitItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[UnitItem] {
        &self.items
    }

    /// First class declared in this unit.
    pub fn class(&self) -> Option<&ClassDecl> {
        self.items.iter().find_map(|item| match item {
            UnitItem::Class(class) => Some(class),
            _ => None,
        })
    }

    /// Serialize to TypeScript source.
    pub fn render(&self) -> String {
        render_unit(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_repeated_module_requests() {
        let mut unit = GeneratedUnit::new("models/UserDTO.model");
        unit.add_import("class-validator", ["IsDefined", "IsString"]);
        unit.add_import("class-transformer", ["Expose"]);
        unit.add_import("class-validator", ["IsString", "IsOptional"]);

        assert_eq!(unit.imports().len(), 2);
        let validator = unit.import_group("class-validator").expect("validator group");
        assert_eq!(
            validator.symbols.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["IsDefined", "IsOptional", "IsString"]
        );
        assert_eq!(unit.imports()[0].module, "class-validator");
        assert_eq!(unit.imports()[1].module, "class-transformer");
    }

    #[test]
    fn empty_request_still_registers_group() {
        let mut unit = GeneratedUnit::new("models/UserDTO.model");
        unit.add_import("./", Vec::<String>::new());

        let group = unit.import_group("./").expect("relation group");
        assert!(group.symbols.is_empty());
    }
}
