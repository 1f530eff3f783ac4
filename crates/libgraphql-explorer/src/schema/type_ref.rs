use crate::schema::TypeKind;

/// Represents the (possibly wrapped) type of a
/// [`SchemaField`](crate::schema::SchemaField) or
/// [`SchemaInputValue`](crate::schema::SchemaInputValue).
///
/// Wrapper variants always own their inner reference, so unwrapping any chain
/// of `List`/`NonNull` layers terminates in a [`TypeRef::Named`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named {
        kind: TypeKind,
        name: String,
    },
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self::Named {
            kind,
            name: name.into(),
        }
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// The [`TypeKind`] of this reference's outermost layer.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::List(_) => TypeKind::List,
            Self::Named { kind, .. } => *kind,
            Self::NonNull(_) => TypeKind::NonNull,
        }
    }

    /// The wrapped reference (`ofType`) for `List`/`NonNull` layers.
    pub fn of_type(&self) -> Option<&TypeRef> {
        match self {
            Self::List(inner) | Self::NonNull(inner) => Some(inner),
            Self::Named { .. } => None,
        }
    }

    /// Recursively strip every `List`/`NonNull` layer and return the
    /// innermost named reference as `(kind, name)`.
    pub fn unwrapped(&self) -> (TypeKind, &str) {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.unwrapped(),
            Self::Named { kind, name } => (*kind, name.as_str()),
        }
    }

    pub fn innermost_name(&self) -> &str {
        self.unwrapped().1
    }

    pub fn innermost_kind(&self) -> TypeKind {
        self.unwrapped().0
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            Self::Named { .. } => false,
        }
    }

    pub fn nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named { name, .. } => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
