//! Built-in lint rules.

pub mod circular_dependency;
pub mod duplicate_step;
pub mod self_dependency;
pub mod undefined_dependency;
pub mod unknown_field;

pub use circular_dependency::CircularDependencyRule;
pub use duplicate_step::DuplicateStepRule;
pub use self_dependency::SelfDependencyRule;
pub use undefined_dependency::UndefinedDependencyRule;
pub use unknown_field::UnknownFieldRule;
