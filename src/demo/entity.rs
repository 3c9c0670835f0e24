//! Seven-field entity and its calculator.

use serde::Serialize;

use crate::error::{CalcflowError, Result};
use crate::steps::{Record, StepRegistry};

/// Record with inputs `A` and `C` and derived fields `B`, `D`, `E`, `F`, `G`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct EntityRecord {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
    pub e: i64,
    pub f: i64,
    pub g: i64,
}

impl EntityRecord {
    /// Fresh record with the two input fields set.
    pub fn with_inputs(a: i64, c: i64) -> Self {
        Self {
            a,
            c,
            ..Default::default()
        }
    }

    /// Read a field by name.
    pub fn field(&self, name: &str) -> Option<i64> {
        match name {
            "A" => Some(self.a),
            "B" => Some(self.b),
            "C" => Some(self.c),
            "D" => Some(self.d),
            "E" => Some(self.e),
            "F" => Some(self.f),
            "G" => Some(self.g),
            _ => None,
        }
    }

    /// Write a field by name.
    pub fn set_field(&mut self, name: &str, value: i64) -> Result<()> {
        let slot = match name {
            "A" => &mut self.a,
            "B" => &mut self.b,
            "C" => &mut self.c,
            "D" => &mut self.d,
            "E" => &mut self.e,
            "F" => &mut self.f,
            "G" => &mut self.g,
            _ => {
                return Err(CalcflowError::UnknownField {
                    field: name.to_string(),
                })
            }
        };
        *slot = value;
        Ok(())
    }
}

impl Record for EntityRecord {
    fn field_names() -> &'static [&'static str] {
        &["A", "B", "C", "D", "E", "F", "G"]
    }
}

/// Steps computing the derived fields of an [`EntityRecord`].
///
/// Registered out of dependency order on purpose: the executor has to work
/// the order out.
pub fn entity_calculator() -> Result<StepRegistry<EntityRecord>> {
    StepRegistry::builder()
        .add_step("F", ["D", "E"], |r: &mut EntityRecord| {
            r.f = r.d + r.e + 100;
            Ok(())
        })
        .add_step("E", ["B", "D"], |r: &mut EntityRecord| {
            r.e = r.b + r.d + 10;
            Ok(())
        })
        .add_step("G", Vec::<String>::new(), |r: &mut EntityRecord| {
            r.g = 50;
            Ok(())
        })
        .add_step("D", ["B", "C"], |r: &mut EntityRecord| {
            r.d = r.b + r.c + 5;
            Ok(())
        })
        .add_step("B", ["A"], |r: &mut EntityRecord| {
            r.b = r.a + 2;
            Ok(())
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{validate, StepCatalog};
    use crate::runner::CalculationExecutor;

    #[test]
    fn computes_reference_values() {
        let calculator = entity_calculator().unwrap();
        let mut entity = EntityRecord::with_inputs(1, 5);

        CalculationExecutor::new(&calculator).execute(&mut entity).unwrap();

        assert_eq!(
            entity,
            EntityRecord {
                a: 1,
                b: 3,
                c: 5,
                d: 13,
                e: 26,
                f: 139,
                g: 50,
            }
        );
    }

    #[test]
    fn calculator_passes_validation() {
        let calculator = entity_calculator().unwrap();
        validate(&calculator).unwrap();
    }

    #[test]
    fn every_step_names_a_field() {
        let calculator = entity_calculator().unwrap();
        let catalog = StepCatalog::for_record(&calculator);

        for step in &catalog.steps {
            assert!(EntityRecord::has_field(&step.name), "{}", step.name);
            for dep in step.depends_on.iter() {
                assert!(EntityRecord::has_field(dep), "{} -> {}", step.name, dep);
            }
        }
    }

    #[test]
    fn field_access_by_name() {
        let mut entity = EntityRecord::default();
        entity.set_field("C", 5).unwrap();

        assert_eq!(entity.field("C"), Some(5));
        assert_eq!(entity.field("Z"), None);
        assert!(matches!(
            entity.set_field("Z", 1),
            Err(CalcflowError::UnknownField { .. })
        ));
    }

    #[test]
    fn serializes_with_field_names() {
        let json = serde_json::to_value(EntityRecord::with_inputs(1, 5)).unwrap();
        assert_eq!(json["A"], 1);
        assert_eq!(json["C"], 5);
    }
}
