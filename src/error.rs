//! Error types for calcflow operations.
//!
//! This module defines [`CalcflowError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CalcflowError` for domain-specific errors that need distinct handling
//! - Step actions return `anyhow::Result`; failures are wrapped in
//!   [`CalcflowError::StepFailed`] together with the step name
//! - Cycles reaching the executor are never converted into an error; they are
//!   caught ahead of time by [`crate::lint::validate`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for calcflow operations.
#[derive(Debug, Error)]
pub enum CalcflowError {
    /// Two steps registered under the same name.
    #[error("Duplicate step: {name}")]
    DuplicateStep { name: String },

    /// A step action returned an error.
    #[error("Step '{step}' failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: anyhow::Error,
    },

    /// One or more steps list their own field as a dependency.
    #[error("Step(s) {steps} depend on themselves")]
    SelfDependency { steps: String },

    /// A chain of dependencies leads back to where it started.
    #[error("Step '{step}' has a circular dependency: {cycle}")]
    CircularDependency { step: String, cycle: String },

    /// Field name not present on the record.
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for calcflow operations.
pub type Result<T> = std::result::Result<T, CalcflowError>;
