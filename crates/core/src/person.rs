// Person domain types
//
// Field names (`nome`, `cidade`) are part of the wire format and are kept as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Identifier supplied by the client. Either a JSON number or a JSON string;
/// nothing guarantees uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonId {
    Number(serde_json::Number),
    Text(String),
}

impl PersonId {
    /// Loose comparison against an id taken from a request path.
    ///
    /// String ids compare as strings. Numeric ids compare by value against the
    /// path segment parsed as a number, so `"1"`, `" 1 "`, `"1.0"`, `"+1"`,
    /// `"1e0"` and `"0x1"` all match the number `1`. An empty or blank
    /// segment never matches, not even `0`.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            PersonId::Text(text) => text == raw,
            PersonId::Number(number) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return false;
                }
                if let Some(requested) = parse_radix_prefixed(trimmed) {
                    return number.as_u64() == Some(requested);
                }
                if let (Some(stored), Ok(requested)) = (number.as_i64(), trimmed.parse::<i64>()) {
                    return stored == requested;
                }
                match (number.as_f64(), parse_decimal(trimmed)) {
                    (Some(stored), Some(requested)) => stored == requested,
                    _ => false,
                }
            }
        }
    }
}

/// Unsigned `0x`/`0o`/`0b` literals. A sign before the prefix is not a number.
fn parse_radix_prefixed(s: &str) -> Option<u64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok()
}

/// Decimal literal; rejects the `inf`/`nan` spellings `f64::from_str` accepts.
fn parse_decimal(s: &str) -> Option<f64> {
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    s.parse::<f64>().ok()
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonId::Number(number) => write!(f, "{}", number),
            PersonId::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<i64> for PersonId {
    fn from(value: i64) -> Self {
        PersonId::Number(value.into())
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        PersonId::Text(value.to_string())
    }
}

/// A person record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Person {
    /// Client-supplied identifier (number or string).
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "1"))]
    pub id: PersonId,
    /// Person name.
    #[cfg_attr(feature = "openapi", schema(example = "Ana"))]
    pub nome: String,
    /// City the person lives in.
    #[cfg_attr(feature = "openapi", schema(example = "Rio de Janeiro"))]
    pub cidade: String,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, nome: impl Into<String>, cidade: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nome: nome.into(),
            cidade: cidade.into(),
        }
    }
}

/// Fields overwritten by an update. The id is never changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdatePerson {
    /// New name.
    #[cfg_attr(feature = "openapi", schema(example = "Ana Maria"))]
    pub nome: String,
    /// New city.
    #[cfg_attr(feature = "openapi", schema(example = "Belo Horizonte"))]
    pub cidade: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_id_matches_path_segment() {
        let id = PersonId::from(1);
        assert!(id.matches("1"));
        assert!(id.matches(" 1 "));
        assert!(id.matches("1.0"));
        assert!(!id.matches("2"));
        assert!(!id.matches(""));
        assert!(!id.matches("one"));
    }

    #[test]
    fn test_numeric_id_matches_other_number_spellings() {
        let id = PersonId::from(1);
        assert!(id.matches("+1"));
        assert!(id.matches("1e0"));
        assert!(id.matches("0x1"));
        assert!(id.matches("0o1"));
        assert!(id.matches("0b1"));
        assert!(!id.matches("0x"));
        assert!(!id.matches("0x-1"));
        assert!(!id.matches("-0x1"));
        assert!(!id.matches("0xg"));

        assert!(PersonId::from(255).matches("0xFF"));
        assert!(!PersonId::from(-1).matches("0x1"));
    }

    #[test]
    fn test_non_numeric_spellings_never_match() {
        let id: PersonId = serde_json::from_value(json!(1.5)).unwrap();
        assert!(!id.matches("nan"));
        assert!(!id.matches("inf"));
        assert!(!PersonId::from(0).matches(""));
        assert!(!PersonId::from(0).matches("   "));
    }

    #[test]
    fn test_text_id_matches_exactly() {
        let id = PersonId::from("abc");
        assert!(id.matches("abc"));
        assert!(!id.matches("ABC"));
        assert!(!id.matches(" abc"));

        let numeric_text = PersonId::from("7");
        assert!(numeric_text.matches("7"));
        assert!(!numeric_text.matches("07"));
    }

    #[test]
    fn test_fractional_numeric_id() {
        let id: PersonId = serde_json::from_value(json!(2.5)).unwrap();
        assert!(id.matches("2.5"));
        assert!(!id.matches("2"));
    }

    #[test]
    fn test_person_deserializes_either_id_form() {
        let numeric: Person =
            serde_json::from_value(json!({"id": 1, "nome": "Ana", "cidade": "Rio"})).unwrap();
        assert_eq!(numeric.id, PersonId::from(1));

        let text: Person =
            serde_json::from_value(json!({"id": "x1", "nome": "Bea", "cidade": "SP"})).unwrap();
        assert_eq!(text.id, PersonId::from("x1"));
    }

    #[test]
    fn test_person_serializes_id_as_given() {
        let person = Person::new(1, "Ana", "Rio");
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value, json!({"id": 1, "nome": "Ana", "cidade": "Rio"}));

        let person = Person::new("1", "Ana", "Rio");
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["id"], json!("1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(PersonId::from(42).to_string(), "42");
        assert_eq!(PersonId::from("abc").to_string(), "abc");
    }
}
