use thiserror::Error;

/// The `__TypeKind` enumeration reported by introspection.
///
/// [`SchemaType`](crate::schema::SchemaType)s stored in a
/// [`SchemaModel`](crate::schema::SchemaModel) are always one of the named
/// kinds; `List` and `NonNull` only ever appear inside a
/// [`TypeRef`](crate::schema::TypeRef).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    List,
    NonNull,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    /// The enumerant name as it appears in an introspection payload.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Object => "OBJECT",
            Self::Scalar => "SCALAR",
            Self::Union => "UNION",
        }
    }

    pub fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}
impl std::str::FromStr for TypeKind {
    type Err = UnknownTypeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ENUM" => Self::Enum,
            "INPUT_OBJECT" => Self::InputObject,
            "INTERFACE" => Self::Interface,
            "LIST" => Self::List,
            "NON_NULL" => Self::NonNull,
            "OBJECT" => Self::Object,
            "SCALAR" => Self::Scalar,
            "UNION" => Self::Union,
            other => return Err(UnknownTypeKind(other.to_string())),
        })
    }
}
impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("Unknown type kind: `{0}`")]
pub struct UnknownTypeKind(pub String);
