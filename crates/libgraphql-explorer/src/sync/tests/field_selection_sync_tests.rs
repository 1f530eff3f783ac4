use crate::introspection::IntrospectionResponseDecoder;
use crate::query_text::QueryParseError;
use crate::query_text::QueryTextParser;
use crate::query_text::QueryTextSynthesizer;
use crate::selection::ArgumentValue;
use crate::selection::Arguments;
use crate::selection::CheckboxState;
use crate::selection::FieldPath;
use crate::sync::BufferTextSurface;
use crate::sync::FieldSelectionSync;
use crate::sync::TextSurface;
use crate::test_utils::SMALL_INTROSPECTION_RESPONSE;
use crate::test_utils::blog_schema;
use crate::test_utils::path;
use crate::tree::NodeId;
use crate::tree::SelectionTreeError;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::Mutex;

fn new_sync() -> FieldSelectionSync<BufferTextSurface> {
    FieldSelectionSync::new(
        Arc::new(blog_schema()),
        Arc::new(BufferTextSurface::new()),
    )
}

fn node_at(sync: &mut FieldSelectionSync<BufferTextSurface>, dotted: &str) -> NodeId {
    sync.expand_path(&path(dotted))
        .unwrap_or_else(|| panic!("no node at {dotted}"))
}

fn state_at(sync: &FieldSelectionSync<BufferTextSurface>, dotted: &str) -> CheckboxState {
    let id = sync.tree()
        .find_node_by_path(&path(dotted))
        .unwrap_or_else(|| panic!("no materialized node at {dotted}"));
    sync.tree().state(id).unwrap()
}

fn assert_checked_nodes_are_selected(sync: &FieldSelectionSync<BufferTextSurface>) {
    for id in sync.tree().checked_nodes() {
        let node = sync.tree().node(id).unwrap();
        if node.is_operation_root() {
            continue;
        }
        assert!(sync.store().is_selected(node.path()), "{} is not selected", node.path());
    }
}

fn assert_no_root_is_selected(sync: &FieldSelectionSync<BufferTextSurface>) {
    for selection in sync.store().all_selections() {
        assert!(!selection.path().is_root(), "{} is selected", selection.path());
        assert!(sync.schema().resolve_path(selection.path()).is_some(), "{}", selection.path());
    }
}

#[test]
fn checkbox_changes_render_into_the_surface_silently() {
    let mut sync = new_sync();
    let loud_updates = Arc::new(Mutex::new(0));
    let counter = loud_updates.clone();
    sync.surface().add_listener(move |_| *counter.lock().unwrap() += 1);

    let name = node_at(&mut sync, "Query.user.name");
    assert_eq!(sync.toggle(name), Ok(CheckboxState::Checked));

    assert_eq!(sync.surface().text(), "query {\n  user {\n    name\n  }\n}");
    assert!(sync.store().is_selected(&path("Query.user.name")));
    assert!(!sync.store().is_selected(&path("Query.user")));
    assert_eq!(*loud_updates.lock().unwrap(), 0);
    assert!(!sync.is_syncing());
}

#[test]
fn checking_a_parent_selects_its_subtree() {
    let mut sync = new_sync();

    sync.set_path_state(&path("Query.post"), CheckboxState::Checked).unwrap();

    assert_eq!(sync.surface().text(), [
        "query {",
        "  post {",
        "    author {",
        "      email",
        "      friends",
        "      id",
        "      name",
        "      oldName",
        "      posts",
        "    }",
        "    comments {",
        "      author {",
        "        email",
        "        friends",
        "        id",
        "        name",
        "        oldName",
        "        posts",
        "      }",
        "      body",
        "    }",
        "    id",
        "    title",
        "  }",
        "}",
    ].join("\n"));
    assert_checked_nodes_are_selected(&sync);
}

#[test]
fn unchecking_removes_the_subtree_and_restores_the_placeholder() {
    let mut sync = new_sync();
    let user = node_at(&mut sync, "Query.user");

    sync.toggle(user).unwrap();
    assert!(sync.store().len() > 1);
    sync.toggle(user).unwrap();

    assert!(sync.store().is_empty());
    assert_eq!(sync.surface().text(), QueryTextSynthesizer::EMPTY_QUERY);
}

#[test]
fn unchecking_one_child_keeps_its_siblings() {
    let mut sync = new_sync();
    sync.set_path_state(&path("Query.post.comments"), CheckboxState::Checked).unwrap();

    sync.set_path_state(&path("Query.post.comments.body"), CheckboxState::Unchecked).unwrap();

    assert_eq!(state_at(&sync, "Query.post.comments"), CheckboxState::Partial);
    assert!(!sync.store().is_selected(&path("Query.post.comments")));
    assert!(!sync.store().is_selected(&path("Query.post.comments.body")));
    assert!(sync.store().is_selected(&path("Query.post.comments.author.id")));
    assert_checked_nodes_are_selected(&sync);
}

#[test]
fn text_edits_restate_tree_and_store() {
    let mut sync = new_sync();
    let text = "query { user { name posts { title } } }";
    sync.surface().set_text(text.to_string());

    sync.on_text_changed().unwrap();

    assert_eq!(state_at(&sync, "Query.user.name"), CheckboxState::Checked);
    assert_eq!(state_at(&sync, "Query.user.posts.title"), CheckboxState::Checked);
    assert_eq!(state_at(&sync, "Query.user.posts"), CheckboxState::Partial);
    assert_eq!(state_at(&sync, "Query.user"), CheckboxState::Partial);
    for dotted in ["Query.user", "Query.user.name", "Query.user.posts", "Query.user.posts.title"] {
        assert!(sync.store().is_selected(&path(dotted)), "{dotted}");
    }
    assert_eq!(sync.store().len(), 4);
    // Restating from text does not rewrite the text being edited.
    assert_eq!(sync.surface().text(), text);
    assert_checked_nodes_are_selected(&sync);
    assert!(!sync.is_syncing());
}

#[test]
fn text_edits_replace_the_previous_selection() {
    let mut sync = new_sync();
    sync.set_path_state(&path("Query.status"), CheckboxState::Checked).unwrap();

    sync.surface().set_text("{ post { id } }".to_string());
    sync.on_text_changed().unwrap();

    assert_eq!(state_at(&sync, "Query.status"), CheckboxState::Unchecked);
    assert!(!sync.store().is_selected(&path("Query.status")));
    assert!(sync.store().is_selected(&path("Query.post.id")));
}

#[test]
fn unparseable_text_keeps_the_last_selection() {
    let mut sync = new_sync();
    sync.set_path_state(&path("Query.status"), CheckboxState::Checked).unwrap();
    let snapshot_before = sync.store().snapshot();

    sync.surface().set_text("query { user {".to_string());
    let result = sync.on_text_changed();

    assert!(matches!(result, Err(QueryParseError::Syntax(_))));
    assert_eq!(state_at(&sync, "Query.status"), CheckboxState::Checked);
    assert_eq!(sync.store().snapshot().version(), snapshot_before.version());
    assert_eq!(sync.surface().text(), "query { user {");
}

#[test]
fn placeholder_text_clears_everything() {
    let mut sync = new_sync();
    sync.set_path_state(&path("Query.user.id"), CheckboxState::Checked).unwrap();

    sync.surface().set_text(QueryTextSynthesizer::EMPTY_QUERY.to_string());
    sync.on_text_changed().unwrap();

    assert!(sync.store().is_empty());
    assert!(sync.tree().checked_nodes().is_empty());
}

#[test]
fn checking_an_already_selected_field_keeps_its_arguments() {
    let mut sync = new_sync();
    let schema = sync.schema().clone();
    let delete_post = path("Mutation.deletePost");
    sync.store().add(
        delete_post.clone(),
        schema.resolve_path(&delete_post).cloned().unwrap(),
        Some(Arguments::from([("id".to_string(), ArgumentValue::from("7"))])),
    );
    assert_eq!(sync.surface().text(), "mutation {\n  deletePost(id: \"7\")\n}");

    sync.set_path_state(&delete_post, CheckboxState::Checked).unwrap();

    assert_eq!(sync.surface().text(), "mutation {\n  deletePost(id: \"7\")\n}");
}

#[test]
fn unknown_paths_are_rejected() {
    let mut sync = new_sync();

    assert_eq!(
        sync.set_path_state(&path("Query.user.nickname"), CheckboxState::Checked),
        Err(SelectionTreeError::UnknownPath(path("Query.user.nickname"))),
    );
    assert_eq!(
        sync.set_path_state(&path("Query.user"), CheckboxState::Partial),
        Err(SelectionTreeError::PartialStateNotSettable {
            path: path("Query.user"),
        }),
    );
}

#[test]
fn replacing_the_schema_rebuilds_the_tree_and_clears_selections() {
    let mut sync = new_sync();
    sync.set_path_state(&path("Query.user.name"), CheckboxState::Checked).unwrap();

    let schema = IntrospectionResponseDecoder::decode_str(SMALL_INTROSPECTION_RESPONSE).unwrap();
    sync.replace_schema(Arc::new(schema));

    assert!(sync.store().is_empty());
    assert_eq!(sync.surface().text(), QueryTextSynthesizer::EMPTY_QUERY);
    assert_eq!(sync.tree().roots().len(), 1);
    assert!(sync.expand_path(&path("Query.user.posts")).is_none());

    sync.set_path_state(&path("Query.user.tags"), CheckboxState::Checked).unwrap();
    assert_eq!(sync.surface().text(), "query {\n  user {\n    tags\n  }\n}");
}

#[test]
fn dropping_the_sync_detaches_it_from_the_store() {
    let sync = new_sync();
    let store = sync.store().clone();
    let surface = sync.surface().clone();
    drop(sync);

    let status = path("Query.status");
    let field = blog_schema().resolve_path(&status).cloned().unwrap();
    store.add(status, field, None);

    assert_eq!(surface.text(), "");
}

#[test]
fn checking_every_root_field_never_selects_the_root() {
    let mut sync = new_sync();

    sync.set_path_state(&path("Mutation.deletePost"), CheckboxState::Checked).unwrap();
    sync.set_path_state(&path("Mutation.createUser"), CheckboxState::Checked).unwrap();

    assert_eq!(state_at(&sync, "Mutation"), CheckboxState::Checked);
    assert!(!sync.store().is_selected(&path("Mutation")));
    assert!(sync.store().is_selected(&path("Mutation.createUser.posts.title")));
    assert_no_root_is_selected(&sync);
    assert_checked_nodes_are_selected(&sync);

    let parsed = QueryTextParser::new(sync.schema()).parse(&sync.surface().text());
    let stored: BTreeSet<FieldPath> =
        sync.store()
            .all_selections()
            .iter()
            .map(|selection| selection.path().clone())
            .collect();
    assert_eq!(parsed, stored);

    let mutation = node_at(&mut sync, "Mutation");
    assert_eq!(sync.toggle(mutation), Ok(CheckboxState::Unchecked));
    assert!(sync.store().is_empty());
}

#[test]
fn clicking_a_root_selects_its_fields_but_not_the_root() {
    let mut sync = new_sync();
    let mutation = node_at(&mut sync, "Mutation");

    assert_eq!(sync.toggle(mutation), Ok(CheckboxState::Checked));

    assert!(!sync.store().is_selected(&path("Mutation")));
    assert!(sync.store().is_selected(&path("Mutation.deletePost")));
    assert_no_root_is_selected(&sync);
}

#[test]
fn text_that_checks_a_whole_root_does_not_select_it() {
    let mut sync = new_sync();
    sync.surface().set_text("mutation { deletePost createUser }".to_string());

    sync.on_text_changed().unwrap();

    assert_eq!(state_at(&sync, "Mutation"), CheckboxState::Checked);
    assert!(!sync.store().is_selected(&path("Mutation")));
    assert!(sync.store().is_selected(&path("Mutation.createUser.id")));
    assert_no_root_is_selected(&sync);
    assert_checked_nodes_are_selected(&sync);
}

#[test]
fn expanding_nodes_does_not_change_the_selection() {
    let mut sync = new_sync();
    sync.set_path_state(&path("Query.user.name"), CheckboxState::Checked).unwrap();
    let version = sync.store().snapshot().version();

    let post = node_at(&mut sync, "Query.post");
    let children = sync.expand(post).unwrap().to_vec();
    sync.expand_to_depth(4);

    assert_eq!(children.len(), 4);
    assert_eq!(sync.store().snapshot().version(), version);
    assert_eq!(sync.surface().text(), "query {\n  user {\n    name\n  }\n}");
    assert_eq!(state_at(&sync, "Query.post.author"), CheckboxState::Unchecked);
}

const TOGGLED_PATHS: [&str; 12] = [
    "Query",
    "Query.user",
    "Query.user.name",
    "Query.user.posts",
    "Query.user.posts.title",
    "Query.user.friends",
    "Query.post",
    "Query.post.comments.body",
    "Query.status",
    "Mutation",
    "Mutation.deletePost",
    "Mutation.createUser.id",
];

const EDITED_TEXTS: [&str; 5] = [
    "query { user { name } }",
    "{ post { id author { name } } status }",
    "mutation { deletePost }",
    QueryTextSynthesizer::EMPTY_QUERY,
    "query { user {",
];

#[derive(Clone, Debug)]
enum Interaction {
    Toggle(usize),
    EditText(usize),
}

fn interaction() -> impl Strategy<Value = Interaction> {
    prop_oneof![
        3 => (0..TOGGLED_PATHS.len()).prop_map(Interaction::Toggle),
        1 => (0..EDITED_TEXTS.len()).prop_map(Interaction::EditText),
    ]
}

fn assert_parents_follow_their_children(sync: &FieldSelectionSync<BufferTextSurface>) {
    let tree = sync.tree();
    for node in tree.nodes() {
        if node.children().is_empty() {
            continue;
        }
        let derived = CheckboxState::from_children(
            node.children().iter().map(|child| tree.state(*child).unwrap()),
        );
        assert_eq!(node.state(), derived, "{}", node.path());
    }
}

fn ancestor_closure(paths: impl IntoIterator<Item = FieldPath>) -> BTreeSet<FieldPath> {
    paths
        .into_iter()
        .flat_map(|path| {
            let ancestors: Vec<FieldPath> = path.ancestors().collect();
            std::iter::once(path).chain(ancestors)
        })
        .filter(|path| !path.is_root())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tri_state_holds_after_any_interaction_sequence(
        interactions in proptest::collection::vec(interaction(), 0..24),
    ) {
        let mut sync = new_sync();
        for step in interactions {
            let version_before = sync.store().snapshot().version();
            match step {
                Interaction::Toggle(index) => {
                    let node = node_at(&mut sync, TOGGLED_PATHS[index]);
                    sync.toggle(node).unwrap();
                },
                Interaction::EditText(index) => {
                    sync.surface().set_text(EDITED_TEXTS[index].to_string());
                    let _ = sync.on_text_changed();
                },
            }

            assert_parents_follow_their_children(&sync);
            assert_checked_nodes_are_selected(&sync);
            assert_no_root_is_selected(&sync);
            prop_assert!(!sync.is_syncing());

            let store_changed = sync.store().snapshot().version() != version_before;
            if matches!(step, Interaction::Toggle(_)) && store_changed {
                let parsed = QueryTextParser::new(sync.schema()).parse(&sync.surface().text());
                let stored = sync.store()
                    .all_selections()
                    .into_iter()
                    .map(|selection| selection.path().clone());
                prop_assert_eq!(parsed, ancestor_closure(stored));
            }
        }
    }
}
