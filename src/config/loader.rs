//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::CalcflowConfig;
use crate::error::{CalcflowError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .calcflow/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .calcflow/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(".calcflow").join("config.yml")),
            project_local: existing(project_root.join(".calcflow").join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CalcflowError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CalcflowError::Io(e)
        }
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CalcflowConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a config. An empty document gives the defaults.
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CalcflowConfig> {
    if content.trim().is_empty() {
        return Ok(CalcflowConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| CalcflowError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all config files of a project.
///
/// Missing files are skipped; with no files at all the defaults are returned.
pub fn load_merged_config(project_root: &Path) -> Result<CalcflowConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        let content = read_config(path)?;
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| CalcflowError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;
        tracing::debug!("Loaded config layer {}", path.display());
        layers.push(value);
    }

    if layers.is_empty() {
        return Ok(CalcflowConfig::default());
    }

    serde_yaml::from_value(merge_configs(&layers)).map_err(|e| CalcflowError::ConfigParseError {
        path: project_root.join(".calcflow").join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with an optional path override.
///
/// With an override only that file is loaded, without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<CalcflowConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(root: &Path, name: &str, content: &str) {
        let dir = root.join(".calcflow");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn discover_finds_project_and_local_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "inputs: {A: 1}");
        write_config(temp.path(), "config.local.yml", "inputs: {A: 2}");

        let paths = ConfigPaths::discover(temp.path());

        assert!(paths.has_project_config());
        assert!(paths.project_local.is_some());
        assert_eq!(paths.all_existing().len(), 2);
    }

    #[test]
    fn discover_without_files_finds_nothing() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());

        assert!(!paths.has_project_config());
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn merged_config_defaults_without_files() {
        let temp = TempDir::new().unwrap();
        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config, CalcflowConfig::default());
    }

    #[test]
    fn local_overrides_project_values() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "config.yml",
            "lint:\n  strict: true\ninputs:\n  A: 1\n  C: 5\n",
        );
        write_config(temp.path(), "config.local.yml", "inputs:\n  A: 10\n");

        let config = load_merged_config(temp.path()).unwrap();

        assert!(config.lint.strict);
        assert_eq!(config.inputs["A"], 10);
        assert_eq!(config.inputs["C"], 5);
    }

    #[test]
    fn empty_local_file_is_ignored() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "inputs:\n  A: 3\n");
        write_config(temp.path(), "config.local.yml", "");

        let config = load_merged_config(temp.path()).unwrap();
        assert_eq!(config.inputs["A"], 3);
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "inputs: [unclosed");

        let err = load_merged_config(temp.path()).unwrap_err();
        assert!(matches!(err, CalcflowError::ConfigParseError { .. }));
    }

    #[test]
    fn override_loads_single_file() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "inputs:\n  A: 1\n");
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "inputs:\n  C: 9\n").unwrap();

        let config = load_config(temp.path(), Some(&custom)).unwrap();

        assert!(config.inputs.get("A").is_none());
        assert_eq!(config.inputs["C"], 9);
    }

    #[test]
    fn missing_override_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, CalcflowError::ConfigNotFound { .. }));
    }
}
