use crate::introspection::DecodeError;
use crate::schema::SchemaEnumValue;
use crate::schema::SchemaField;
use crate::schema::SchemaInputValue;
use crate::schema::SchemaModel;
use crate::schema::SchemaType;
use crate::schema::TypeKind;
use crate::schema::TypeRef;
use serde_json::Value;

type Result<T> = std::result::Result<T, DecodeError>;

/// Builds a [`SchemaModel`] from the JSON result of
/// [`INTROSPECTION_QUERY`](crate::introspection::INTROSPECTION_QUERY).
///
/// Decoding is defensive: a type, field, argument or enum value that cannot
/// be decoded (missing name, unknown kind, missing type reference, ...) is
/// dropped with a warning and the rest of the schema is kept. Only a payload
/// without a `__schema` object or without a query root type name is
/// rejected outright.
pub struct IntrospectionResponseDecoder;
impl IntrospectionResponseDecoder {
    /// Decode either the `data` object of an introspection response or the
    /// whole response (`{"data": {"__schema": ...}}`).
    pub fn decode(raw: &Value) -> Result<SchemaModel> {
        let schema = raw.get("__schema")
            .or_else(|| raw.get("data").and_then(|data| data.get("__schema")))
            .filter(|schema| schema.is_object())
            .ok_or(DecodeError::MissingSchema)?;

        let query_type = root_type_name(schema, "queryType")
            .ok_or(DecodeError::MissingQueryType)?;
        let mutation_type = root_type_name(schema, "mutationType");
        let subscription_type = root_type_name(schema, "subscriptionType");

        let types = array_items(schema, "types")
            .unwrap_or_default()
            .iter()
            .filter_map(decode_type)
            .collect::<Vec<_>>();

        log::debug!(
            "Decoded {} introspected types (query root `{query_type}`).",
            types.len(),
        );
        Ok(SchemaModel::new(
            types,
            query_type,
            mutation_type,
            subscription_type,
        ))
    }

    pub fn decode_str(json: &str) -> Result<SchemaModel> {
        let raw: Value = serde_json::from_str(json)
            .map_err(|err| DecodeError::InvalidJson(err.to_string()))?;
        Self::decode(&raw)
    }
}

fn array_items<'a>(value: &'a Value, key: &str) -> Option<&'a [Value]> {
    value.get(key)?.as_array().map(Vec::as_slice)
}

fn opt_string(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(str::to_string)
}

fn root_type_name(schema: &Value, key: &str) -> Option<String> {
    opt_string(schema.get(key)?, "name")
}

fn decode_enum_value(value: &Value) -> Option<SchemaEnumValue> {
    let Some(name) = opt_string(value, "name") else {
        log::warn!("Dropping introspected enum value without a name: {value}");
        return None;
    };
    Some(SchemaEnumValue {
        name,
        description: opt_string(value, "description"),
        is_deprecated: value.get("isDeprecated")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        deprecation_reason: opt_string(value, "deprecationReason"),
    })
}

fn decode_field(value: &Value) -> Option<SchemaField> {
    let Some(name) = opt_string(value, "name") else {
        log::warn!("Dropping introspected field without a name.");
        return None;
    };
    let Some(type_ref) = value.get("type").and_then(decode_type_ref) else {
        log::warn!("Dropping field `{name}`: its type reference could not be decoded.");
        return None;
    };
    Some(SchemaField {
        args: array_items(value, "args")
            .map(|args| args.iter().filter_map(decode_input_value).collect())
            .unwrap_or_default(),
        deprecation_reason: opt_string(value, "deprecationReason"),
        description: opt_string(value, "description"),
        is_deprecated: value.get("isDeprecated")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        name,
        type_ref,
    })
}

fn decode_input_value(value: &Value) -> Option<SchemaInputValue> {
    let Some(name) = opt_string(value, "name") else {
        log::warn!("Dropping introspected input value without a name.");
        return None;
    };
    let Some(type_ref) = value.get("type").and_then(decode_type_ref) else {
        log::warn!("Dropping input value `{name}`: its type reference could not be decoded.");
        return None;
    };
    Some(SchemaInputValue {
        default_value: opt_string(value, "defaultValue"),
        description: opt_string(value, "description"),
        name,
        type_ref,
    })
}

fn decode_type(value: &Value) -> Option<SchemaType> {
    let Some(name) = opt_string(value, "name") else {
        log::warn!("Dropping introspected type without a name.");
        return None;
    };
    let kind = match value.get("kind").and_then(Value::as_str).map(str::parse::<TypeKind>) {
        Some(Ok(kind)) if !kind.is_wrapper() => kind,
        Some(Ok(kind)) => {
            log::warn!("Dropping type `{name}`: `{kind}` is not a named type kind.");
            return None;
        },
        Some(Err(err)) => {
            log::warn!("Dropping type `{name}`: {err}");
            return None;
        },
        None => {
            log::warn!("Dropping type `{name}`: no kind was reported.");
            return None;
        },
    };

    Some(SchemaType {
        description: opt_string(value, "description"),
        enum_values: array_items(value, "enumValues").map(|values| {
            values.iter().filter_map(decode_enum_value).collect()
        }),
        fields: array_items(value, "fields").map(|fields| {
            fields.iter().filter_map(decode_field).collect()
        }),
        input_fields: array_items(value, "inputFields").map(|input_fields| {
            input_fields.iter().filter_map(decode_input_value).collect()
        }),
        kind,
        name,
        possible_types: array_items(value, "possibleTypes").map(|possible_types| {
            possible_types.iter()
                .filter_map(|possible_type| opt_string(possible_type, "name"))
                .collect()
        }),
    })
}

/// Decode a (possibly wrapped) type reference, following `ofType` for as many
/// `LIST`/`NON_NULL` layers as the payload contains.
fn decode_type_ref(value: &Value) -> Option<TypeRef> {
    let kind = match value.get("kind").and_then(Value::as_str)?.parse::<TypeKind>() {
        Ok(kind) => kind,
        Err(err) => {
            log::warn!("Dropping type reference: {err}");
            return None;
        },
    };
    match kind {
        TypeKind::List => Some(TypeRef::list(decode_type_ref(value.get("ofType")?)?)),
        TypeKind::NonNull => Some(TypeRef::non_null(decode_type_ref(value.get("ofType")?)?)),
        named_kind => Some(TypeRef::named(named_kind, opt_string(value, "name")?)),
    }
}
