use crate::schema::OperationKind;
use crate::schema::SchemaField;
use crate::schema::SchemaModel;
use crate::schema::TypeKind;
use crate::schema::TypeRef;
use crate::selection::ArgumentValue;
use rand::Rng;
use serde_json::Map;
use serde_json::Value;

/// Fields rendered per selection set in a sample query.
const FIELDS_PER_LEVEL: usize = 3;

/// Arguments rendered for each top-level field of a sample query.
const ARGS_PER_FIELD: usize = 2;

const SAMPLE_DATE: &str = "2024-01-01";
const SAMPLE_DATE_TIME: &str = "2024-01-01T00:00:00Z";

/// Produces example operations and example variable payloads from a
/// [`SchemaModel`].
///
/// Sample operations are deterministic. Sample variables pick a value
/// shape from field-name heuristics and draw numbers from the caller's
/// [`Rng`], so a seeded generator reproduces the same payload.
#[derive(Clone, Copy, Debug)]
pub struct SampleDataSynthesizer<'schema> {
    schema: &'schema SchemaModel,
}
impl<'schema> SampleDataSynthesizer<'schema> {
    pub fn new(schema: &'schema SchemaModel) -> Self {
        Self { schema }
    }

    /// Build a sample operation over the first few fields of
    /// `root_type_name`, expanding `OBJECT`-typed fields until `max_depth`
    /// levels have been rendered.
    ///
    /// Returns an empty string when the type is unknown.
    pub fn generate_sample_query(&self, root_type_name: &str, max_depth: usize) -> String {
        let Some(root_type) = self.schema.type_named(root_type_name) else {
            return String::new();
        };
        if root_type.fields().is_empty() {
            return format!("# Type {root_type_name} has no fields");
        }

        let keyword = self.schema
            .operation_kind_for_root(root_type_name)
            .unwrap_or(OperationKind::Query)
            .keyword();
        let mut lines = vec![format!("{keyword} {{")];
        for field in root_type.fields().iter().take(FIELDS_PER_LEVEL) {
            self.render_sample_field(field, 1, max_depth, &mut lines);
        }
        lines.push("}".to_string());
        lines.join("\n")
    }

    /// Build an example value for every input field of the `INPUT_OBJECT`
    /// named `input_type_name`. Unknown types and types without input fields
    /// yield an empty map.
    pub fn generate_sample_variables<R: Rng + ?Sized>(
        &self,
        input_type_name: &str,
        rng: &mut R,
    ) -> Map<String, Value> {
        let mut variables = Map::new();
        let Some(input_type) = self.schema.type_named(input_type_name) else {
            return variables;
        };

        let mut input_chain = vec![input_type.name()];
        for input_field in input_type.input_fields() {
            if let Some(value) = self.mock_value(
                input_field.type_ref(),
                input_field.name(),
                &mut input_chain,
                rng,
            ) {
                variables.insert(input_field.name().to_string(), value);
            }
        }
        variables
    }

    pub fn generate_sample_variables_json<R: Rng + ?Sized>(
        &self,
        input_type_name: &str,
        rng: &mut R,
    ) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.generate_sample_variables(input_type_name, rng))
    }

    fn argument_placeholder(&self, type_ref: &TypeRef) -> ArgumentValue {
        match type_ref {
            TypeRef::List(_) => ArgumentValue::List(vec![]),
            TypeRef::NonNull(inner) => self.argument_placeholder(inner),
            TypeRef::Named { kind: TypeKind::Enum, name } => ArgumentValue::Enum(
                self.first_enum_value(name).unwrap_or("ENUM_VALUE").to_string(),
            ),
            TypeRef::Named { kind: TypeKind::Scalar, name } => match name.as_str() {
                "Boolean" => ArgumentValue::Boolean(true),
                "Float" => ArgumentValue::Float(1.0),
                "ID" => ArgumentValue::String("1".to_string()),
                "Int" => ArgumentValue::Int(1),
                "String" => ArgumentValue::String("example".to_string()),
                _ => ArgumentValue::Null,
            },
            TypeRef::Named { .. } => ArgumentValue::Null,
        }
    }

    fn first_enum_value(&self, enum_type_name: &str) -> Option<&'schema str> {
        self.schema
            .type_named(enum_type_name)?
            .enum_values()
            .first()
            .map(|value| value.name())
    }

    fn mock_value<R: Rng + ?Sized>(
        &self,
        type_ref: &'schema TypeRef,
        field_name: &str,
        input_chain: &mut Vec<&'schema str>,
        rng: &mut R,
    ) -> Option<Value> {
        match type_ref {
            TypeRef::List(inner) => Some(Value::Array(vec![
                self.mock_value(inner, field_name, input_chain, rng).unwrap_or(Value::Null),
            ])),

            TypeRef::NonNull(inner) => self.mock_value(inner, field_name, input_chain, rng),

            TypeRef::Named { kind: TypeKind::Enum, name } => Some(Value::String(
                self.first_enum_value(name).unwrap_or("UNKNOWN").to_string(),
            )),

            TypeRef::Named { kind: TypeKind::InputObject, name } => {
                if input_chain.contains(&name.as_str()) {
                    log::debug!("Cutting recursive sample of input type `{name}`.");
                    return None;
                }
                let input_type = self.schema
                    .type_named(name)
                    .filter(|input_type| !input_type.input_fields().is_empty())?;

                input_chain.push(name.as_str());
                let mut nested = Map::new();
                for input_field in input_type.input_fields() {
                    nested.insert(
                        input_field.name().to_string(),
                        self.mock_value(
                            input_field.type_ref(),
                            input_field.name(),
                            input_chain,
                            rng,
                        ).unwrap_or(Value::Null),
                    );
                }
                input_chain.pop();
                Some(Value::Object(nested))
            },

            TypeRef::Named { kind: TypeKind::Scalar, name } =>
                Some(scalar_mock_value(name, field_name, rng)),

            TypeRef::Named { .. } => None,
        }
    }

    fn render_sample_field(
        &self,
        field: &SchemaField,
        depth: usize,
        max_depth: usize,
        lines: &mut Vec<String>,
    ) {
        let indent = "  ".repeat(depth);
        let mut head = format!("{indent}{}", field.name());
        if depth == 1 && !field.args().is_empty() {
            let args: Vec<String> =
                field.args()
                    .iter()
                    .take(ARGS_PER_FIELD)
                    .map(|arg| format!("{}: {}", arg.name(), self.argument_placeholder(arg.type_ref())))
                    .collect();
            head.push_str(&format!("({})", args.join(", ")));
        }

        let (kind, type_name) = field.type_ref().unwrapped();
        let expandable_type = self.schema
            .type_named(type_name)
            .filter(|_| depth < max_depth)
            .filter(|_| kind == TypeKind::Object && !type_name.starts_with("__"))
            .filter(|field_type| !field_type.fields().is_empty());
        let Some(field_type) = expandable_type else {
            lines.push(head);
            return;
        };

        lines.push(format!("{head} {{"));
        for sub_field in field_type.fields().iter().take(FIELDS_PER_LEVEL) {
            self.render_sample_field(sub_field, depth + 1, max_depth, lines);
        }
        lines.push(format!("{indent}}}"));
    }
}

fn scalar_mock_value<R: Rng + ?Sized>(scalar_name: &str, field_name: &str, rng: &mut R) -> Value {
    let field_name = field_name.to_lowercase();
    let has = |needle: &str| field_name.contains(needle);
    match scalar_name {
        "Boolean" => Value::Bool(rng.gen_bool(0.5)),

        "Float" => {
            let range = if has("price") || has("cost") { 10.0..1000.0 } else { 0.0..100.0 };
            Value::from(round_to_cents(rng.gen_range(range)))
        },

        "ID" => Value::from(rng.gen_range(1..1000u32).to_string()),

        "Int" => Value::from(
            if has("id") {
                rng.gen_range(1..1000i64)
            } else if has("age") {
                rng.gen_range(18..80)
            } else if has("count") {
                rng.gen_range(1..100)
            } else if has("year") {
                rng.gen_range(2000..2024)
            } else {
                rng.gen_range(1..100)
            },
        ),

        "String" => Value::from(
            if has("date") {
                SAMPLE_DATE
            } else if has("time") {
                SAMPLE_DATE_TIME
            } else if has("email") {
                "user@example.com"
            } else if has("username") || has("login") {
                "example_user"
            } else if has("firstname") || field_name == "first" {
                "Jane"
            } else if has("lastname") || field_name == "last" {
                "Doe"
            } else if has("name") {
                "Jane Doe"
            } else if has("phone") || has("mobile") {
                "+1-555-0100"
            } else if has("address") {
                "1 Example Street"
            } else if has("city") {
                "Springfield"
            } else if has("country") {
                "United States"
            } else if has("url") || has("website") {
                "https://example.com"
            } else if has("title") {
                "Example title"
            } else if has("description") || has("content") {
                "An example description."
            } else if has("code") {
                "EX-001"
            } else {
                "example"
            },
        ),

        "Date" => Value::from(SAMPLE_DATE),
        "DateTime" | "Timestamp" => Value::from(SAMPLE_DATE_TIME),

        _ => Value::from("mock_value"),
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
