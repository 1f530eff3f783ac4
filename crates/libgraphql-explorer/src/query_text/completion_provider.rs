use crate::schema::OperationKind;
use crate::schema::SchemaField;
use crate::schema::SchemaModel;
use crate::schema::TypeKind;

/// A single field suggestion offered while editing query text.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Completion {
    pub name: String,
    pub description: String,

    /// Text to insert for the field: its argument names with empty values
    /// and, for `OBJECT`-typed fields, an empty selection set.
    pub insert_text: String,

    /// `name: Type`, with the type in SDL notation (e.g. `posts: [Post!]!`).
    pub detail: String,
}
impl Completion {
    fn for_field(field: &SchemaField) -> Self {
        let mut insert_text = field.name().to_string();
        if !field.args().is_empty() {
            let args: Vec<String> =
                field.args()
                    .iter()
                    .map(|arg| format!("{}: ", arg.name()))
                    .collect();
            insert_text.push_str(&format!("({})", args.join(", ")));
        }
        if field.type_ref().innermost_kind() == TypeKind::Object {
            insert_text.push_str(" {\n  \n}");
        }

        Self {
            name: field.name().to_string(),
            description: field.description().unwrap_or_default().to_string(),
            insert_text,
            detail: format!("{}: {}", field.name(), field.type_ref()),
        }
    }
}
impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.detail)
    }
}

/// Suggests top-level fields for the operation being edited.
///
/// Only the root of the operation is considered: the last `query`,
/// `mutation` or `subscription` keyword before the cursor picks the root
/// type (`query` when there is none) and every field of that type is
/// offered in schema order.
#[derive(Clone, Copy, Debug)]
pub struct CompletionProvider<'schema> {
    schema: &'schema SchemaModel,
}
impl<'schema> CompletionProvider<'schema> {
    pub fn new(schema: &'schema SchemaModel) -> Self {
        Self { schema }
    }

    /// `cursor` is a byte offset into `text`. Offsets past the end or inside
    /// a multi-byte character are moved back to the nearest boundary.
    pub fn completions(&self, text: &str, cursor: usize) -> Vec<Completion> {
        let kind = operation_kind_before(text, cursor);
        let Some(root_type) = self.schema.root_type(kind) else {
            log::debug!("No root type for `{kind}` operations; nothing to complete.");
            return vec![];
        };
        root_type.fields().iter().map(Completion::for_field).collect()
    }
}

fn operation_kind_before(text: &str, cursor: usize) -> OperationKind {
    let mut end = cursor.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    text[..end]
        .split(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
        .filter_map(|word| OperationKind::ALL.into_iter().find(|kind| kind.keyword() == word))
        .last()
        .unwrap_or(OperationKind::Query)
}
