//! Coarse classification of ClickHouse types for consumers that only care whether a
//! column holds numbers, timestamps, booleans or text.

use crate::constant::type_name::NULLABLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericType {
    Numeric,
    Temporal,
    Boolean,
    String,
}

/// Upper-cased name prefixes, checked in order. Anything unmatched is `String`.
const TYPE_MAPPING: &[(&[&str], GenericType)] = &[
    (&["FLOAT", "DECIMAL", "INT", "UINT"], GenericType::Numeric),
    (&["DATE"], GenericType::Temporal),
    (&["BOOL"], GenericType::Boolean),
];

impl GenericType {
    /// Classify a ClickHouse type name
    ///
    /// `Nullable(T)` classifies as `T`.
    pub fn classify(type_name: &str) -> Self {
        let inner = type_name
            .strip_prefix(NULLABLE)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'));
        if let Some(inner) = inner {
            return Self::classify(inner.trim());
        }

        let upper = type_name.to_ascii_uppercase();
        TYPE_MAPPING
            .iter()
            .find(|(prefixes, _)| prefixes.iter().any(|p| upper.starts_with(p)))
            .map_or(GenericType::String, |&(_, generic)| generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_numeric() {
        for name in [
            "UInt8",
            "UInt64",
            "Int32",
            "Float64",
            "Decimal(10, 2)",
            "Int256",
        ] {
            assert_eq!(GenericType::classify(name), GenericType::Numeric, "{name}");
        }
    }

    #[test]
    fn classify_temporal() {
        for name in ["Date", "Date32", "DateTime", "DateTime('UTC')", "DateTime64(3)"] {
            assert_eq!(GenericType::classify(name), GenericType::Temporal, "{name}");
        }
    }

    #[test]
    fn classify_boolean_and_string() {
        assert_eq!(GenericType::classify("Bool"), GenericType::Boolean);
        assert_eq!(GenericType::classify("String"), GenericType::String);
        assert_eq!(GenericType::classify("FixedString(16)"), GenericType::String);
        assert_eq!(GenericType::classify("UUID"), GenericType::String);
        assert_eq!(GenericType::classify("Array(UInt8)"), GenericType::String);
    }

    #[test]
    fn classify_nullable_uses_inner() {
        assert_eq!(
            GenericType::classify("Nullable(UInt8)"),
            GenericType::Numeric
        );
        assert_eq!(
            GenericType::classify("Nullable(DateTime)"),
            GenericType::Temporal
        );
        assert_eq!(
            GenericType::classify("Nullable(String)"),
            GenericType::String
        );
    }
}
