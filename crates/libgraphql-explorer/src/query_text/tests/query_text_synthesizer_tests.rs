use crate::query_text::QueryTextSynthesizer;
use crate::schema::SchemaModel;
use crate::selection::ArgumentValue;
use crate::selection::Arguments;
use crate::selection::SelectionStore;
use crate::test_utils::blog_schema;
use crate::test_utils::path;

fn select(store: &SelectionStore, schema: &SchemaModel, dotted: &str, arguments: Option<Arguments>) {
    let path = path(dotted);
    let field = schema.resolve_path(&path).cloned().unwrap();
    store.add(path, field, arguments);
}

#[test]
fn empty_store_renders_placeholder() {
    let store = SelectionStore::new();
    assert_eq!(QueryTextSynthesizer::generate(&store), "query {\n  \n}");
    assert_eq!(QueryTextSynthesizer::generate(&store), QueryTextSynthesizer::EMPTY_QUERY);
}

#[test]
fn siblings_render_in_name_order() {
    let schema = blog_schema();
    let store = SelectionStore::new();
    for dotted in ["Query.user.name", "Query.status", "Query.user.id"] {
        select(&store, &schema, dotted, None);
    }

    assert_eq!(
        QueryTextSynthesizer::generate(&store),
        "query {\n  status\n  user {\n    id\n    name\n  }\n}",
    );
}

#[test]
fn unselected_ancestors_are_rendered_as_enclosing_sets() {
    let schema = blog_schema();
    let store = SelectionStore::new();
    select(&store, &schema, "Query.user.posts.title", None);

    assert_eq!(QueryTextSynthesizer::generate(&store), [
        "query {",
        "  user {",
        "    posts {",
        "      title",
        "    }",
        "  }",
        "}",
    ].join("\n"));
}

#[test]
fn stored_arguments_are_rendered_as_literals() {
    let schema = blog_schema();
    let store = SelectionStore::new();
    select(
        &store,
        &schema,
        "Query.users",
        Some(Arguments::from([
            ("first".to_string(), ArgumentValue::Int(10)),
            ("filter".to_string(), ArgumentValue::Null),
        ])),
    );
    select(&store, &schema, "Query.users.name", None);
    select(&store, &schema, "Query.status", Some(Arguments::new()));

    assert_eq!(
        QueryTextSynthesizer::generate(&store),
        "query {\n  status\n  users(first: 10, filter: null) {\n    name\n  }\n}",
    );
}

#[test]
fn operations_are_separated_by_a_blank_line() {
    let schema = blog_schema();
    let store = SelectionStore::new();
    select(
        &store,
        &schema,
        "Mutation.deletePost",
        Some(Arguments::from([("id".to_string(), ArgumentValue::from("7"))])),
    );
    select(&store, &schema, "Query.status", None);

    assert_eq!(
        QueryTextSynthesizer::generate(&store),
        "query {\n  status\n}\n\nmutation {\n  deletePost(id: \"7\")\n}",
    );
}

#[test]
fn snapshot_and_store_render_identically() {
    let schema = blog_schema();
    let store = SelectionStore::new();
    select(&store, &schema, "Query.post.comments.body", None);

    assert_eq!(
        QueryTextSynthesizer::generate_snapshot(&store.snapshot()),
        QueryTextSynthesizer::generate(&store),
    );
}
