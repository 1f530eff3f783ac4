use crate::query_text::QueryParseError;
use crate::query_text::ast;
use crate::schema::OperationKind;
use crate::schema::SchemaModel;
use crate::schema::SchemaType;
use crate::schema::TypeKind;
use crate::selection::FieldPath;
use std::collections::BTreeSet;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, QueryParseError>;

/// Whitespace-free skeletons that mean "nothing selected". The grammar
/// rejects empty selection sets, but
/// [`QueryTextSynthesizer`](crate::query_text::QueryTextSynthesizer) emits
/// one for an empty store.
const EMPTY_SKELETONS: [&str; 4] = ["query{}", "mutation{}", "subscription{}", "{}"];

/// Extracts the set of selected [`FieldPath`]s from GraphQL query text,
/// resolving field names against a [`SchemaModel`].
///
/// Field names that do not exist on their parent type are skipped, as are
/// operations whose root type the schema does not define. Variable
/// definitions, arguments, aliases and directives do not affect the result.
#[derive(Clone, Copy, Debug)]
pub struct QueryTextParser<'schema> {
    schema: &'schema SchemaModel,
}
impl<'schema> QueryTextParser<'schema> {
    pub fn new(schema: &'schema SchemaModel) -> Self {
        Self { schema }
    }

    /// Like [`QueryTextParser::try_parse`], but any syntax error yields an
    /// empty set.
    pub fn parse(&self, text: &str) -> BTreeSet<FieldPath> {
        self.try_parse(text).unwrap_or_else(|err| {
            log::debug!("Treating unparseable query text as empty: {err}");
            BTreeSet::new()
        })
    }

    pub fn try_parse(&self, text: &str) -> Result<BTreeSet<FieldPath>> {
        if is_empty_skeleton(text) {
            return Ok(BTreeSet::new());
        }

        let document = ast::parse_query(text)?;
        let fragments: HashMap<&str, &ast::FragmentDefinition> =
            document.definitions
                .iter()
                .filter_map(|def| match def {
                    ast::Definition::Fragment(frag_def) =>
                        Some((frag_def.name.as_str(), frag_def)),
                    ast::Definition::Operation(_) => None,
                })
                .collect();

        let mut walker = SelectionWalker {
            fragments,
            paths: BTreeSet::new(),
            schema: self.schema,
            spread_stack: vec![],
        };
        for def in &document.definitions {
            let ast::Definition::Operation(op_def) = def else {
                continue;
            };
            let (kind, selection_set) = match op_def {
                ast::OperationDefinition::Mutation(mutation) =>
                    (OperationKind::Mutation, &mutation.selection_set),
                ast::OperationDefinition::Query(query) =>
                    (OperationKind::Query, &query.selection_set),
                ast::OperationDefinition::SelectionSet(selection_set) =>
                    (OperationKind::Query, selection_set),
                ast::OperationDefinition::Subscription(subscription) =>
                    (OperationKind::Subscription, &subscription.selection_set),
            };

            let Some(root_type) = self.schema.root_type(kind) else {
                log::debug!(
                    "Skipping `{kind}` operation: the schema defines no root type for it.",
                );
                continue;
            };
            walker.walk(selection_set, root_type, &FieldPath::root(kind));
        }

        Ok(walker.paths)
    }
}

fn is_empty_skeleton(text: &str) -> bool {
    let compact: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    let mut compact = compact.as_str();
    loop {
        if compact.is_empty() {
            return true;
        }
        match EMPTY_SKELETONS.iter().find_map(|skeleton| compact.strip_prefix(skeleton)) {
            Some(rest) => compact = rest,
            None => return false,
        }
    }
}

struct SelectionWalker<'doc, 'schema> {
    fragments: HashMap<&'doc str, &'doc ast::FragmentDefinition>,
    paths: BTreeSet<FieldPath>,
    schema: &'schema SchemaModel,
    spread_stack: Vec<&'doc str>,
}
impl<'doc> SelectionWalker<'doc, '_> {
    fn walk(
        &mut self,
        selection_set: &'doc ast::SelectionSet,
        parent_type: &SchemaType,
        parent_path: &FieldPath,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::Selection::Field(field) => {
                    let Some(schema_field) = parent_type.field(field.name.as_str()) else {
                        log::trace!(
                            "Skipping unknown field `{}` on type `{}`.",
                            field.name,
                            parent_type.name(),
                        );
                        continue;
                    };

                    let path = parent_path.child(field.name.as_str());
                    self.paths.insert(path.clone());
                    if field.selection_set.items.is_empty() {
                        continue;
                    }

                    let schema = self.schema;
                    let field_type = schema
                        .type_named(schema_field.type_ref().innermost_name())
                        .filter(|field_type| field_type.kind() == TypeKind::Object);
                    if let Some(field_type) = field_type {
                        self.walk(&field.selection_set, field_type, &path);
                    }
                },

                // Fragments contribute the fields they select that exist on
                // the enclosing type.
                ast::Selection::FragmentSpread(spread) => {
                    let name = spread.fragment_name.as_str();
                    if self.spread_stack.contains(&name) {
                        log::debug!("Cutting cyclic spread of fragment `{name}`.");
                        continue;
                    }
                    let Some(frag_def) = self.fragments.get(name).copied() else {
                        log::trace!("Skipping spread of undefined fragment `{name}`.");
                        continue;
                    };
                    self.spread_stack.push(name);
                    self.walk(&frag_def.selection_set, parent_type, parent_path);
                    self.spread_stack.pop();
                },

                ast::Selection::InlineFragment(inline_fragment) => {
                    self.walk(&inline_fragment.selection_set, parent_type, parent_path);
                },
            }
        }
    }
}
