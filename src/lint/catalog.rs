//! Step metadata snapshots for validation.
//!
//! Lint rules never run step actions; they work on a [`StepCatalog`], which
//! holds only names, dependency lists and (optionally) the record's field
//! set. A catalog is taken from a provider or loaded from a YAML file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CalcflowError, Result};
use crate::steps::{DependsOn, Record, StepProvider};

/// Name and dependencies of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub name: String,
    #[serde(default)]
    pub depends_on: DependsOn,
}

impl StepInfo {
    pub fn new(name: impl Into<String>, depends_on: DependsOn) -> Self {
        Self {
            name: name.into(),
            depends_on,
        }
    }
}

/// Ordered step metadata of one provider.
///
/// ```yaml
/// fields: [A, B, C]
/// steps:
///   - name: B
///     depends_on: [A]
///   - name: C
///     depends_on: [B]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepCatalog {
    /// Field names of the record, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Steps in discovery order.
    pub steps: Vec<StepInfo>,
}

impl StepCatalog {
    /// Snapshot the steps of a provider.
    pub fn from_provider<R, P: StepProvider<R>>(provider: &P) -> Self {
        let steps = provider
            .list_steps()
            .iter()
            .map(|s| StepInfo::new(s.name(), s.depends_on().clone()))
            .collect();

        Self {
            fields: None,
            steps,
        }
    }

    /// Snapshot the steps of a provider together with the record's fields.
    pub fn for_record<R: Record, P: StepProvider<R>>(provider: &P) -> Self {
        Self::from_provider(provider).with_fields(R::field_names().iter().copied())
    }

    /// Attach the record's field names.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Load a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CalcflowError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CalcflowError::Io(e)
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parse YAML content into a catalog.
    ///
    /// `source_path` is only used for error reporting.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| CalcflowError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// First step with the given name.
    pub fn get(&self, name: &str) -> Option<&StepInfo> {
        self.steps.iter().find(|s| s.name == name)
    }

    /// Whether some step computes `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set of all step names.
    pub fn names(&self) -> HashSet<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }

    /// Whether `name` is a known record field. Always true without a field set.
    pub fn is_field(&self, name: &str) -> bool {
        match &self.fields {
            Some(fields) => fields.iter().any(|f| f == name),
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::StepRegistry;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Sums;

    impl Record for Sums {
        fn field_names() -> &'static [&'static str] {
            &["a", "b"]
        }
    }

    #[test]
    fn from_provider_keeps_order_and_dependencies() {
        let registry = StepRegistry::builder()
            .add_step("b", ["a"], |_: &mut Sums| Ok(()))
            .add_step("a", Vec::<String>::new(), |_: &mut Sums| Ok(()))
            .build()
            .unwrap();

        let catalog = StepCatalog::from_provider(&registry);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.steps[0].name, "b");
        assert_eq!(catalog.steps[0].depends_on, DependsOn::new(["a"]));
        assert!(catalog.fields.is_none());
    }

    #[test]
    fn for_record_attaches_fields() {
        let registry = StepRegistry::builder()
            .add_step("b", ["a"], |_: &mut Sums| Ok(()))
            .build()
            .unwrap();

        let catalog = StepCatalog::for_record(&registry);

        assert!(catalog.is_field("a"));
        assert!(!catalog.is_field("c"));
    }

    #[test]
    fn is_field_without_field_set_accepts_anything() {
        let catalog = StepCatalog::default();
        assert!(catalog.is_field("anything"));
    }

    #[test]
    fn parses_yaml_catalog() {
        let yaml = r#"
fields: [A, B]
steps:
  - name: B
    depends_on: [A]
  - name: A
"#;
        let catalog = StepCatalog::parse(yaml, &PathBuf::from("steps.yml")).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("A").unwrap().depends_on.is_empty());
        assert_eq!(catalog.fields.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn parse_error_reports_path() {
        let err = StepCatalog::parse("steps: {", &PathBuf::from("broken.yml")).unwrap_err();
        assert!(matches!(err, CalcflowError::ConfigParseError { .. }));
        assert!(err.to_string().contains("broken.yml"));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("steps.yml");
        fs::write(&path, "steps:\n  - name: x\n").unwrap();

        let catalog = StepCatalog::load(&path).unwrap();
        assert!(catalog.contains("x"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = StepCatalog::load(&temp.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, CalcflowError::ConfigNotFound { .. }));
    }
}
