/// A literal argument value attached to a [`Selection`](crate::selection::Selection).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ArgumentValue {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<ArgumentValue>),
    Null,
    String(String),
}
impl std::convert::From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::fmt::Display for ArgumentValue {
    /// Renders GraphQL literal syntax.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(value) => f.write_str(value),
            // `Debug` keeps the fractional part (`1.0`), which is what makes
            // the literal a Float rather than an Int.
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => {
                f.write_str("[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            },
            Self::Null => f.write_str("null"),
            Self::String(value) => {
                f.write_str("\"")?;
                for ch in value.chars() {
                    match ch {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        ch => write!(f, "{ch}")?,
                    }
                }
                f.write_str("\"")
            },
        }
    }
}
