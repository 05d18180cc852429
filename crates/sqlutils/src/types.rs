use serde::{Serialize, Serializer};
use std::fmt;

/// Replacement value used when cleaning missing data per column type.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Int(v) => write!(f, "{}", v),
            // keep the decimal point so 0.0 does not read as an integer
            SqlValue::Float(v) => write!(f, "{:?}", v),
            SqlValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}

// Serialized as bare JSON scalars so fill maps export as `{"A": 0.0, "B": ""}`.
impl Serialize for SqlValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SqlValue::Int(v) => serializer.serialize_i64(*v),
            SqlValue::Float(v) => serializer.serialize_f64(*v),
            SqlValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_float_point() {
        assert_eq!(SqlValue::Float(0.0).to_string(), "0.0");
        assert_eq!(SqlValue::Int(0).to_string(), "0");
        assert_eq!(SqlValue::Text(String::new()).to_string(), "''");
    }

    #[test]
    fn serializes_as_plain_scalars() {
        let json = serde_json::to_string(&vec![
            SqlValue::Float(0.0),
            SqlValue::Text(String::new()),
            SqlValue::Int(0),
        ])
        .unwrap();
        assert_eq!(json, r#"[0.0,"",0]"#);
    }
}
