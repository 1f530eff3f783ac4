use crate::schema::OperationKind;
use thiserror::Error;

/// An ordered sequence of names leading from an operation root marker
/// (`"Query"`, `"Mutation"` or `"Subscription"`) to a field, e.g.
/// `["Query", "user", "name"]`.
///
/// Paths are the only identity key for selections and tree nodes. Their
/// ordering is lexicographic by segment, so every path sorts directly before
/// all of the paths it is a prefix of.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub struct FieldPath(Vec<String>);
impl FieldPath {
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The single-segment path naming an operation root.
    pub fn root(kind: OperationKind) -> Self {
        Self(vec![kind.root_marker().to_string()])
    }

    /// Every proper ancestor of this path, nearest first. The root-only path
    /// is included.
    pub fn ancestors(&self) -> impl Iterator<Item = FieldPath> + '_ {
        (1..self.0.len()).rev().map(|len| Self(self.0[..len].to_vec()))
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    /// Segments following the root marker.
    pub fn field_segments(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// True if `other` begins with every segment of `self` and has at least
    /// one more.
    pub fn is_strict_prefix_of(&self, other: &FieldPath) -> bool {
        other.0.len() > self.0.len() && other.starts_with(self)
    }

    pub fn leaf_name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn operation_kind(&self) -> Option<OperationKind> {
        OperationKind::from_root_marker(self.root_marker()?)
    }

    pub fn parent(&self) -> Option<FieldPath> {
        match self.0.len() {
            0 | 1 => None,
            len => Some(Self(self.0[..len - 1].to_vec())),
        }
    }

    pub fn root_marker(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.0.starts_with(&prefix.0)
    }
}
impl std::convert::From<Vec<String>> for FieldPath {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}
impl std::convert::From<&[&str]> for FieldPath {
    fn from(value: &[&str]) -> Self {
        Self::new(value.iter().copied())
    }
}
impl<const N: usize> std::convert::From<[&str; N]> for FieldPath {
    fn from(value: [&str; N]) -> Self {
        Self::new(value)
    }
}
impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}
impl std::str::FromStr for FieldPath {
    type Err = FieldPathParseError;

    /// Parse the dotted form produced by [`Display`](std::fmt::Display), e.g.
    /// `Query.user.name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.trim().split('.').collect();
        if segments.iter().any(|segment| segment.trim().is_empty()) {
            return Err(FieldPathParseError::EmptySegment(s.to_string()));
        }
        if OperationKind::from_root_marker(segments[0]).is_none() {
            return Err(FieldPathParseError::UnknownRootMarker(
                segments[0].to_string(),
            ));
        }
        Ok(Self::new(segments.into_iter().map(str::trim)))
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldPathParseError {
    #[error("Field path `{0}` contains an empty segment")]
    EmptySegment(String),

    #[error(
        "Field path must start with `Query`, `Mutation` or `Subscription`, \
        found `{0}`"
    )]
    UnknownRootMarker(String),
}
