use crate::schema::SchemaField;
use crate::selection::ArgumentValue;
use crate::selection::FieldPath;
use indexmap::IndexMap;

pub type Arguments = IndexMap<String, ArgumentValue>;

/// A selected field: its path, the resolved schema field, and any argument
/// values.
///
/// Equality and hashing only consider the [`FieldPath`]; selecting the same
/// path again with different arguments replaces the earlier selection.
#[derive(Clone, Debug)]
pub struct Selection {
    pub(super) path: FieldPath,
    pub(super) field: SchemaField,
    pub(super) arguments: Option<Arguments>,
}
impl Selection {
    pub fn new(
        path: FieldPath,
        field: SchemaField,
        arguments: Option<Arguments>,
    ) -> Self {
        Self {
            path,
            field,
            arguments,
        }
    }

    pub fn arguments(&self) -> Option<&Arguments> {
        self.arguments.as_ref()
    }

    pub fn field(&self) -> &SchemaField {
        &self.field
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Compares every attribute, not just the identity path.
    pub(super) fn same_content(&self, other: &Selection) -> bool {
        self.path == other.path
            && self.field == other.field
            && self.arguments == other.arguments
    }
}
impl std::cmp::PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}
impl std::cmp::Eq for Selection {}
impl std::hash::Hash for Selection {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.path.hash(state)
    }
}
