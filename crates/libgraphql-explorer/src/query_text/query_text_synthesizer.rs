use crate::schema::OperationKind;
use crate::selection::FieldPath;
use crate::selection::SelectionSnapshot;
use crate::selection::SelectionStore;

const INDENT: &str = "  ";

/// Renders the content of a [`SelectionStore`] as a formatted GraphQL
/// document.
///
/// One operation is emitted per root that has anything selected below it,
/// in Query/Mutation/Subscription order and separated by a blank line.
/// Sibling fields are sorted by name, so the output depends only on the set
/// of selections. A field that is only an ancestor of selected paths is
/// still rendered, as the enclosing selection set.
pub struct QueryTextSynthesizer;
impl QueryTextSynthesizer {
    /// Text produced when nothing is selected.
    pub const EMPTY_QUERY: &'static str = "query {\n  \n}";

    pub fn generate(store: &SelectionStore) -> String {
        Self::generate_snapshot(&store.snapshot())
    }

    pub fn generate_snapshot(snapshot: &SelectionSnapshot) -> String {
        let mut operations = vec![];
        for kind in OperationKind::ALL {
            let root = FieldPath::root(kind);
            let root_fields = snapshot.child_names(&root);
            if root_fields.is_empty() {
                continue;
            }

            let mut lines = vec![format!("{} {{", kind.keyword())];
            for name in root_fields {
                Self::render_field(snapshot, &root.child(name), 1, &mut lines);
            }
            lines.push("}".to_string());
            operations.push(lines.join("\n"));
        }

        if operations.is_empty() {
            return Self::EMPTY_QUERY.to_string();
        }
        operations.join("\n\n")
    }

    fn render_field(
        snapshot: &SelectionSnapshot,
        path: &FieldPath,
        depth: usize,
        lines: &mut Vec<String>,
    ) {
        let indent = INDENT.repeat(depth);
        let name = path.leaf_name().unwrap_or_default();
        let arguments = snapshot
            .get(path)
            .and_then(|selection| selection.arguments())
            .filter(|arguments| !arguments.is_empty())
            .map(|arguments| {
                let rendered: Vec<String> =
                    arguments.iter()
                        .map(|(arg_name, value)| format!("{arg_name}: {value}"))
                        .collect();
                format!("({})", rendered.join(", "))
            })
            .unwrap_or_default();

        let children = snapshot.child_names(path);
        if children.is_empty() {
            lines.push(format!("{indent}{name}{arguments}"));
            return;
        }

        lines.push(format!("{indent}{name}{arguments} {{"));
        for child in children {
            Self::render_field(snapshot, &path.child(child), depth + 1, lines);
        }
        lines.push(format!("{indent}}}"));
    }
}
