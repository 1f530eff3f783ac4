use crate::schema::OperationKind;
use crate::schema::SchemaField;
use crate::schema::SchemaType;
use crate::selection::FieldPath;
use indexmap::IndexMap;

/// Immutable representation of an introspected GraphQL schema.
///
/// Types are kept in the order introspection reported them and are unique by
/// name. A [`SchemaModel`] is built once (usually by
/// [`IntrospectionResponseDecoder`](crate::introspection::IntrospectionResponseDecoder))
/// and then shared read-only, typically behind an [`Arc`](std::sync::Arc).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaModel {
    types: IndexMap<String, SchemaType>,
    query_type: String,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
}
impl SchemaModel {
    pub fn new(
        types: impl IntoIterator<Item = SchemaType>,
        query_type: impl Into<String>,
        mutation_type: Option<String>,
        subscription_type: Option<String>,
    ) -> Self {
        let mut types_map = IndexMap::new();
        for schema_type in types {
            if types_map.contains_key(schema_type.name()) {
                log::warn!(
                    "Ignoring duplicate definition of type `{}`.",
                    schema_type.name(),
                );
                continue;
            }
            types_map.insert(schema_type.name().to_string(), schema_type);
        }

        Self {
            types: types_map,
            query_type: query_type.into(),
            mutation_type,
            subscription_type,
        }
    }

    /// Look up a field declared on the type named `type_name`.
    pub fn field_of(&self, type_name: &str, field_name: &str) -> Option<&SchemaField> {
        self.type_named(type_name)?.field(field_name)
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    /// Operation kinds whose root type is both declared and defined, in
    /// Query/Mutation/Subscription order.
    pub fn operation_kinds(&self) -> Vec<OperationKind> {
        OperationKind::ALL
            .into_iter()
            .filter(|kind| self.root_type(*kind).is_some())
            .collect()
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    /// Walk `path` from its operation root through each field's unwrapped
    /// return type and return the field named by the last segment.
    ///
    /// Returns `None` for root-only paths and for paths the schema does not
    /// contain.
    pub fn resolve_path(&self, path: &FieldPath) -> Option<&SchemaField> {
        let mut parent_type = self.root_type(path.operation_kind()?)?;
        let mut segments = path.field_segments().iter().peekable();
        while let Some(segment) = segments.next() {
            let field = parent_type.field(segment)?;
            if segments.peek().is_none() {
                return Some(field);
            }
            parent_type = self.type_named(field.type_ref().innermost_name())?;
        }
        None
    }

    pub fn root_type(&self, kind: OperationKind) -> Option<&SchemaType> {
        self.type_named(self.root_type_name(kind)?)
    }

    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    /// The [`OperationKind`] whose root type is named `type_name`, if any.
    pub fn operation_kind_for_root(&self, type_name: &str) -> Option<OperationKind> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| self.root_type_name(*kind) == Some(type_name))
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// The type at `index` in introspection order. Indices are stable for
    /// the life of the model.
    pub fn type_at(&self, index: usize) -> Option<&SchemaType> {
        self.types.get_index(index).map(|(_, schema_type)| schema_type)
    }

    pub fn type_index(&self, name: &str) -> Option<usize> {
        self.types.get_index_of(name)
    }

    pub fn type_named(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    pub fn types(&self) -> impl Iterator<Item = &SchemaType> {
        self.types.values()
    }

    pub fn types_len(&self) -> usize {
        self.types.len()
    }
}
