//! Reference record and calculator.
//!
//! [`EntityRecord`] carries inputs `A` and `C`; [`entity_calculator`] derives
//! the remaining fields. With `A = 1` and `C = 5` the executor produces
//! `B = 3`, `D = 13`, `E = 26`, `F = 139`, `G = 50`.

pub mod entity;

pub use entity::{entity_calculator, EntityRecord};
