//! Dependency declarations.

use serde::{Deserialize, Serialize};

/// Ordered list of field names a step needs computed before it runs.
///
/// Order matters: the executor follows the first dependency that still has
/// a pending step, so `DependsOn::new(["D", "E"])` and
/// `DependsOn::new(["E", "D"])` can produce different run orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependsOn(Vec<String>);

impl DependsOn {
    /// Create a dependency list from field names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// A step with no dependencies.
    pub fn none() -> Self {
        Self::default()
    }

    /// Field names in declared order.
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Iterate over field names in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether the given field is listed.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DependsOn {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a DependsOn {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
