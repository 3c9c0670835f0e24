//! Configuration loading.
//!
//! Settings live in YAML files under `.calcflow/` in the project root:
//!
//! - `.calcflow/config.yml` - project settings
//! - `.calcflow/config.local.yml` - local overrides, merged on top
//!
//! Both files are optional; missing files leave the defaults in place.

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_config, load_config_file, load_merged_config, parse_config, ConfigPaths};
pub use merger::{deep_merge, merge_configs};
pub use schema::{CalcflowConfig, LintSettings, RuleLevel};
