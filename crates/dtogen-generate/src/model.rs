use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where generated sources are written.
    pub out_dir: PathBuf,
    /// File extension of generated sources, without the dot.
    pub extension: String,
    /// Emit one unit per enum plus the enum barrel.
    pub emit_enums: bool,
    /// Emit the schema-independent `decorators` and `helpers` modules.
    pub emit_helpers: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("generated"),
            extension: "ts".to_string(),
            emit_enums: true,
            emit_helpers: true,
        }
    }
}

/// What a generated unit was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Model,
    Enum,
    ModelsIndex,
    EnumsIndex,
    Decorators,
    Helpers,
}

/// Summary of one written unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitReport {
    pub kind: UnitKind,
    pub name: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub out_dir: PathBuf,
    pub models: usize,
    pub enums: usize,
    pub units: Vec<UnitReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, started_at: String, out_dir: PathBuf) -> Self {
        Self {
            run_id,
            started_at,
            out_dir,
            models: 0,
            enums: 0,
            units: Vec::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_unit(&mut self, unit: UnitReport) {
        match unit.kind {
            UnitKind::Model => self.models += 1,
            UnitKind::Enum => self.enums += 1,
            _ => {}
        }
        self.bytes_written += unit.bytes;
        self.units.push(unit);
    }
}
