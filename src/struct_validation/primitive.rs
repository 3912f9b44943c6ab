use std::fmt::{Display, Formatter};

use chrono::{DateTime, SecondsFormat, Utc};

/// The plain value a field is unwrapped to before any rule is applied to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    Null,
    Bool(bool),
    Integer(i64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl Primitive {
    /// If this is the "zero value" of its type. Zero values fail `required` and are skipped
    /// entirely by `omitempty`.
    pub fn is_zero(&self) -> bool {
        match self {
            Primitive::Null => true,
            Primitive::Bool(value) => !value,
            Primitive::Integer(value) => *value == 0,
            Primitive::Text(value) => value.is_empty(),
            Primitive::Timestamp(_) => false,
        }
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Primitive::Null => write!(f, "null"),
            Primitive::Bool(value) => write!(f, "{value}"),
            Primitive::Integer(value) => write!(f, "{value}"),
            Primitive::Text(value) => write!(f, "{value:?}"),
            Primitive::Timestamp(value) => {
                write!(f, "{}", value.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_zero_values() {
        let timestamp = Utc.with_ymd_and_hms(2016, 8, 15, 0, 0, 0).unwrap();
        let test_cases = vec![
            (Primitive::Null, true),
            (Primitive::Bool(false), true),
            (Primitive::Bool(true), false),
            (Primitive::Integer(0), true),
            (Primitive::Integer(-1), false),
            (Primitive::Text(String::new()), true),
            (Primitive::Text("a".to_string()), false),
            (Primitive::Timestamp(timestamp), false),
        ];
        for (value, is_zero) in test_cases {
            assert_eq!(value.is_zero(), is_zero, "{value:?}");
        }
    }

    #[test]
    fn test_display() {
        let timestamp = Utc.with_ymd_and_hms(2016, 8, 15, 0, 0, 0).unwrap();
        assert_eq!(Primitive::Timestamp(timestamp).to_string(), "2016-08-15T00:00:00Z");
        assert_eq!(Primitive::Text("abc".to_string()).to_string(), r#""abc""#);
        assert_eq!(Primitive::Null.to_string(), "null");
    }
}
