//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::lint::{RuleId, Severity};

/// Root configuration structure for `.calcflow/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcflowConfig {
    /// Validator settings
    pub lint: LintSettings,

    /// Initial field values for the demo record
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub inputs: BTreeMap<String, i64>,
}

/// Validator settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintSettings {
    /// Treat warnings as failures
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,

    /// Per-rule level overrides, keyed by rule ID
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub rules: HashMap<String, RuleLevel>,
}

impl LintSettings {
    /// Configured level for a rule, if overridden.
    pub fn level_for(&self, id: &RuleId) -> Option<RuleLevel> {
        self.rules.get(id.as_str()).copied()
    }
}

/// Level a rule is reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Hint,
    Warning,
    Error,
}

impl RuleLevel {
    /// Severity for this level; `None` when the rule is turned off.
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Hint => Some(Severity::Hint),
            RuleLevel::Warning => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

fn is_false(b: &bool) -> bool {
    !b
}
