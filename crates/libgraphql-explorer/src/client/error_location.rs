use serde_json::Value;

/// A `{line, column}` position reported with a GraphQL error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}
impl ErrorLocation {
    /// Returns `None` unless both `line` and `column` are non-negative
    /// integers.
    pub(crate) fn from_json(value: &Value) -> Option<Self> {
        let coordinate = |key: &str| -> Option<u32> {
            u32::try_from(value.get(key)?.as_u64()?).ok()
        };
        Some(Self {
            line: coordinate("line")?,
            column: coordinate("column")?,
        })
    }
}
