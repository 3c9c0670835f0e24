//! Record field metadata.

/// A record type with a fixed set of named fields.
///
/// The executor never needs this; it exists so the validator can check that
/// every step and every dependency names a real field.
pub trait Record {
    /// Names of all fields, in declaration order.
    fn field_names() -> &'static [&'static str];

    /// Whether `name` is one of the record's fields.
    fn has_field(name: &str) -> bool {
        Self::field_names().contains(&name)
    }
}
