use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, warn};

use dtogen_core::{Datamodel, EnumType, Model};

use crate::class::{build_model_unit, emit_model};
use crate::enums::{build_enum_unit, emit_enum};
use crate::errors::GenerationError;
use crate::helpers::{
    DECORATORS_UNIT, HELPERS_UNIT, build_decorators_unit, build_helpers_unit, emit_decorators,
    emit_helpers,
};
use crate::index::{build_enums_index, build_models_index, emit_enums_index, emit_models_index};
use crate::model::{GenerateOptions, GenerationReport, UnitKind, UnitReport};
use crate::output::{OutputTarget, WrittenUnit};
use crate::unit::GeneratedUnit;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// What a planned unit is generated from.
#[derive(Debug, Clone)]
pub enum UnitSource<'a> {
    Decorators,
    Helpers,
    Enum(&'a EnumType),
    EnumsIndex(Vec<String>),
    Model(&'a Model),
    ModelsIndex(Vec<String>),
}

/// A unit scheduled for a run.
#[derive(Debug, Clone)]
pub struct PlannedUnit<'a> {
    pub name: String,
    pub source: UnitSource<'a>,
}

impl PlannedUnit<'_> {
    pub fn kind(&self) -> UnitKind {
        match self.source {
            UnitSource::Decorators => UnitKind::Decorators,
            UnitSource::Helpers => UnitKind::Helpers,
            UnitSource::Enum(_) => UnitKind::Enum,
            UnitSource::EnumsIndex(_) => UnitKind::EnumsIndex,
            UnitSource::Model(_) => UnitKind::Model,
            UnitSource::ModelsIndex(_) => UnitKind::ModelsIndex,
        }
    }

    /// Build the unit in memory without writing it.
    pub fn build(&self) -> GeneratedUnit {
        match &self.source {
            UnitSource::Decorators => build_decorators_unit(),
            UnitSource::Helpers => build_helpers_unit(),
            UnitSource::Enum(item) => build_enum_unit(item),
            UnitSource::EnumsIndex(names) => build_enums_index(names),
            UnitSource::Model(model) => build_model_unit(model),
            UnitSource::ModelsIndex(names) => build_models_index(names),
        }
    }

    /// Build and write the unit through its emitter.
    pub fn emit(&self, target: &OutputTarget) -> Result<WrittenUnit, GenerationError> {
        match &self.source {
            UnitSource::Decorators => emit_decorators(target),
            UnitSource::Helpers => emit_helpers(target),
            UnitSource::Enum(item) => emit_enum(item, target),
            UnitSource::EnumsIndex(names) => emit_enums_index(names, target),
            UnitSource::Model(model) => emit_model(model, target),
            UnitSource::ModelsIndex(names) => emit_models_index(names, target),
        }
    }
}

/// Entry point for generating DTO sources from a data model.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn target(&self) -> OutputTarget {
        OutputTarget::new(self.options.out_dir.clone(), self.options.extension.clone())
    }

    /// Plan every unit of a run, in write order: support modules, enums and
    /// their barrel, then models and their barrel.
    pub fn plan<'a>(&self, datamodel: &'a Datamodel) -> Vec<PlannedUnit<'a>> {
        let mut planned = Vec::new();

        if self.options.emit_helpers {
            planned.push(PlannedUnit {
                name: DECORATORS_UNIT.to_string(),
                source: UnitSource::Decorators,
            });
            planned.push(PlannedUnit {
                name: HELPERS_UNIT.to_string(),
                source: UnitSource::Helpers,
            });
        }

        if self.options.emit_enums {
            for item in &datamodel.enums {
                planned.push(PlannedUnit {
                    name: item.name.clone(),
                    source: UnitSource::Enum(item),
                });
            }
            planned.push(PlannedUnit {
                name: "enums".to_string(),
                source: UnitSource::EnumsIndex(datamodel.enum_names()),
            });
        }

        for model in &datamodel.models {
            planned.push(PlannedUnit {
                name: model.name.clone(),
                source: UnitSource::Model(model),
            });
        }
        planned.push(PlannedUnit {
            name: "models".to_string(),
            source: UnitSource::ModelsIndex(datamodel.model_names()),
        });

        planned
    }

    /// Write every unit of the data model under the configured output root.
    ///
    /// The first write failure aborts the run; units written before it are
    /// left in place.
    pub fn run(&self, datamodel: &Datamodel) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let started_at = chrono::Utc::now().to_rfc3339();
        let target = self.target();
        let mut report =
            GenerationReport::new(run_id.clone(), started_at, self.options.out_dir.clone());

        info!(
            run_id = %run_id,
            models = datamodel.models.len(),
            enums = datamodel.enums.len(),
            out_dir = %self.options.out_dir.display(),
            "generation started"
        );

        for planned in self.plan(datamodel) {
            let written = match planned.emit(&target) {
                Ok(written) => written,
                Err(err) => {
                    warn!(
                        run_id = %run_id,
                        unit = %planned.name,
                        error = %err,
                        "generation failed"
                    );
                    return Err(err);
                }
            };

            let kind = planned.kind();
            if kind == UnitKind::Model {
                info!(model = %planned.name, path = %written.path.display(), "model generated");
            }

            report.record_unit(UnitReport {
                kind,
                name: planned.name,
                path: written.path,
                bytes: written.bytes,
            });
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            units = report.units.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_dir: self.options.out_dir.clone(),
            report,
        })
    }
}
