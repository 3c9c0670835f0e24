//! Steps and step providers.
//!
//! - [`Step`] - A named computation writing one field of a record
//! - [`DependsOn`] - The ordered fields a step needs computed first
//! - [`StepProvider`] - Source of a record type's full step list
//! - [`StepRegistry`] - Explicit, ordered step registration
//! - [`Record`] - Field metadata used by the validator
//!
//! # Example
//!
//! ```
//! use calcflow::steps::{StepProvider, StepRegistry};
//!
//! struct Totals {
//!     net: i64,
//!     tax: i64,
//!     gross: i64,
//! }
//!
//! let registry = StepRegistry::builder()
//!     .add_step("gross", ["net", "tax"], |t: &mut Totals| {
//!         t.gross = t.net + t.tax;
//!         Ok(())
//!     })
//!     .add_step("tax", ["net"], |t: &mut Totals| {
//!         t.tax = t.net / 5;
//!         Ok(())
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.list_steps().len(), 2);
//! ```

pub mod depends_on;
pub mod provider;
pub mod record;
pub mod step;

pub use depends_on::DependsOn;
pub use provider::{StepProvider, StepRegistry, StepRegistryBuilder};
pub use record::Record;
pub use step::{Step, StepAction};
