use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dtogen_generate::GenerateOptions;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "dtogen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
}

/// Generator settings read from `dtogen.toml`. Unset keys keep the built-in
/// defaults; CLI flags override both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub out_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub emit_enums: Option<bool>,
    pub emit_helpers: Option<bool>,
    /// Where to write the JSON generation report.
    pub report: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::from)
    }

    /// Resolve relative paths against the directory holding the config file.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        self.out_dir = self.out_dir.map(|path| resolve(base, path));
        self.report = self.report.map(|path| resolve(base, path));
        self
    }

    pub fn apply(&self, options: &mut GenerateOptions) {
        if let Some(out_dir) = &self.out_dir {
            options.out_dir = out_dir.clone();
        }
        if let Some(extension) = &self.extension {
            options.extension = extension.clone();
        }
        if let Some(emit_enums) = self.emit_enums {
            options.emit_enums = emit_enums;
        }
        if let Some(emit_helpers) = self.emit_helpers {
            options.emit_helpers = emit_helpers;
        }
    }
}

/// Load the explicit config file, or `dtogen.toml` from the working directory
/// when it exists.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<GeneratorConfig>, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(None);
            }
            candidate
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let config = GeneratorConfig::from_toml(&contents)?.resolve_paths(base);
    Ok(Some(config))
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() || base.as_os_str().is_empty() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_config() {
        let config = GeneratorConfig::from_toml(
            r#"
out_dir = "src/generated"
emit_helpers = false
"#,
        )
        .expect("parse config");

        let mut options = GenerateOptions::default();
        config.apply(&mut options);
        assert_eq!(options.out_dir, PathBuf::from("src/generated"));
        assert_eq!(options.extension, "ts");
        assert!(options.emit_enums);
        assert!(!options.emit_helpers);
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = GeneratorConfig::from_toml("outdir = \"x\"");
        assert!(matches!(result, Err(ConfigError::TomlDecode(_))));
    }

    #[test]
    fn resolves_relative_paths_against_config_dir() {
        let config = GeneratorConfig {
            out_dir: Some(PathBuf::from("generated")),
            report: Some(PathBuf::from("/var/report.json")),
            ..GeneratorConfig::default()
        }
        .resolve_paths(Path::new("project"));

        assert_eq!(config.out_dir, Some(PathBuf::from("project/generated")));
        assert_eq!(config.report, Some(PathBuf::from("/var/report.json")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let missing = std::env::temp_dir().join("dtogen-missing-config.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }
}
