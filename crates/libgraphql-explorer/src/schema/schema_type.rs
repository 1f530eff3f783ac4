use crate::schema::SchemaEnumValue;
use crate::schema::SchemaField;
use crate::schema::SchemaInputValue;
use crate::schema::TypeKind;

/// Represents a named type declared by an introspected schema.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaType {
    pub(crate) name: String,
    pub(crate) kind: TypeKind,
    pub(crate) description: Option<String>,
    pub(crate) fields: Option<Vec<SchemaField>>,
    pub(crate) input_fields: Option<Vec<SchemaInputValue>>,
    pub(crate) enum_values: Option<Vec<SchemaEnumValue>>,
    pub(crate) possible_types: Option<Vec<String>>,
}
impl SchemaType {
    fn bare(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            fields: None,
            input_fields: None,
            enum_values: None,
            possible_types: None,
        }
    }

    pub fn enum_type(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            enum_values: Some(
                values.into_iter().map(SchemaEnumValue::new).collect(),
            ),
            ..Self::bare(name, TypeKind::Enum)
        }
    }

    pub fn input_object(
        name: impl Into<String>,
        input_fields: Vec<SchemaInputValue>,
    ) -> Self {
        Self {
            input_fields: Some(input_fields),
            ..Self::bare(name, TypeKind::InputObject)
        }
    }

    pub fn interface(name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self {
            fields: Some(fields),
            ..Self::bare(name, TypeKind::Interface)
        }
    }

    pub fn object(name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self {
            fields: Some(fields),
            ..Self::bare(name, TypeKind::Object)
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self::bare(name, TypeKind::Scalar)
    }

    pub fn union(
        name: impl Into<String>,
        members: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            possible_types: Some(members.into_iter().map(Into::into).collect()),
            ..Self::bare(name, TypeKind::Union)
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enum_values(&self) -> &[SchemaEnumValue] {
        self.enum_values.as_deref().unwrap_or_default()
    }

    /// Look up one of this type's output fields by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields().iter().find(|field| field.name() == name)
    }

    /// Output fields, in declaration order. Empty for kinds other than
    /// `OBJECT`/`INTERFACE`.
    pub fn fields(&self) -> &[SchemaField] {
        self.fields.as_deref().unwrap_or_default()
    }

    pub fn input_fields(&self) -> &[SchemaInputValue] {
        self.input_fields.as_deref().unwrap_or_default()
    }

    /// Introspection-only types (`__Schema`, `__Type`, ...).
    pub fn is_introspection_type(&self) -> bool {
        self.name.starts_with("__")
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn possible_types(&self) -> &[String] {
        self.possible_types.as_deref().unwrap_or_default()
    }
}
