pub mod atomic;
pub mod typescript;

use std::path::PathBuf;

use tracing::debug;

use crate::errors::GenerationError;
use crate::unit::GeneratedUnit;

use self::atomic::write_bytes_atomic;

/// Location generated units are written to.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    root: PathBuf,
    extension: String,
}

/// Result of writing one unit.
#[derive(Debug, Clone)]
pub struct WrittenUnit {
    pub path: PathBuf,
    pub bytes: u64,
}

impl OutputTarget {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Absolute output path of `unit`: `<root>/<relative>.<ext>`.
    pub fn path_for(&self, unit: &GeneratedUnit) -> PathBuf {
        let mut path = self.root.join(unit.relative_path()).into_os_string();
        if !self.extension.is_empty() {
            path.push(".");
            path.push(&self.extension);
        }
        PathBuf::from(path)
    }

    /// Render and write `unit`, replacing any previous file at its path.
    pub fn write(&self, unit: &GeneratedUnit) -> Result<WrittenUnit, GenerationError> {
        let path = self.path_for(unit);
        let contents = unit.render();
        write_bytes_atomic(&path, contents.as_bytes())?;
        debug!(path = %path.display(), bytes = contents.len(), "unit written");
        Ok(WrittenUnit {
            path,
            bytes: contents.len() as u64,
        })
    }
}
