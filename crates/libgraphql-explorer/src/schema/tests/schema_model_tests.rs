use crate::schema::OperationKind;
use crate::schema::SchemaField;
use crate::schema::SchemaModel;
use crate::schema::SchemaType;
use crate::test_utils::blog_schema;
use crate::test_utils::path;
use crate::test_utils::scalar;

#[test]
fn root_types_resolve_by_operation_kind() {
    let schema = blog_schema();

    assert_eq!(schema.root_type_name(OperationKind::Query), Some("Query"));
    assert_eq!(schema.root_type_name(OperationKind::Mutation), Some("Mutation"));
    assert_eq!(schema.root_type_name(OperationKind::Subscription), None);
    assert_eq!(
        schema.root_type(OperationKind::Mutation).map(SchemaType::name),
        Some("Mutation"),
    );
    assert_eq!(
        schema.operation_kinds(),
        vec![OperationKind::Query, OperationKind::Mutation],
    );
    assert_eq!(schema.operation_kind_for_root("Mutation"), Some(OperationKind::Mutation));
    assert_eq!(schema.operation_kind_for_root("User"), None);
}

#[test]
fn operation_kinds_skip_roots_without_a_type_definition() {
    let schema = SchemaModel::new(
        [SchemaType::object("Query", vec![SchemaField::new("ping", scalar("String"))])],
        "Query",
        Some("Mutation".to_string()),
        None,
    );
    assert_eq!(schema.mutation_type_name(), Some("Mutation"));
    assert_eq!(schema.operation_kinds(), vec![OperationKind::Query]);
}

#[test]
fn types_keep_insertion_order_and_first_duplicate() {
    let schema = SchemaModel::new(
        [
            SchemaType::object("Query", vec![SchemaField::new("a", scalar("String"))]),
            SchemaType::scalar("String"),
            SchemaType::object("Query", vec![SchemaField::new("b", scalar("String"))]),
        ],
        "Query",
        None,
        None,
    );

    assert_eq!(schema.types_len(), 2);
    let names: Vec<&str> = schema.types().map(SchemaType::name).collect();
    assert_eq!(names, vec!["Query", "String"]);
    assert!(schema.field_of("Query", "a").is_some());
    assert!(schema.field_of("Query", "b").is_none());
}

#[test]
fn resolve_path_walks_through_wrapped_field_types() {
    let schema = blog_schema();

    let title = schema.resolve_path(&path("Query.users.posts.title"));
    assert_eq!(title.map(SchemaField::name), Some("title"));
    assert_eq!(
        title.map(|field| field.type_ref().to_string()),
        Some("String!".to_string()),
    );

    let create_user = schema.resolve_path(&path("Mutation.createUser.name"));
    assert_eq!(create_user.map(SchemaField::name), Some("name"));
}

#[test]
fn resolve_path_rejects_unknown_and_root_only_paths() {
    let schema = blog_schema();

    assert!(schema.resolve_path(&path("Query")).is_none());
    assert!(schema.resolve_path(&path("Query.user.nope")).is_none());
    assert!(schema.resolve_path(&path("Query.user.name.length")).is_none());
    assert!(schema.resolve_path(&path("Subscription.user")).is_none());
}

#[test]
fn deprecation_state_carries_the_reason() {
    let schema = blog_schema();
    let old_name = schema.field_of("User", "oldName").expect("fixture field");
    assert!(old_name.deprecation_state().is_deprecated());
    assert_eq!(old_name.deprecation_state().reason(), Some("Use name"));

    let name = schema.field_of("User", "name").expect("fixture field");
    assert!(!name.deprecation_state().is_deprecated());
    assert_eq!(name.deprecation_state().reason(), None);
}

#[test]
fn schema_type_accessors_default_to_empty() {
    let schema = blog_schema();

    let status = schema.type_named("Status").expect("fixture type");
    assert!(status.fields().is_empty());
    let values: Vec<&str> = status.enum_values().iter().map(|value| value.name()).collect();
    assert_eq!(values, vec!["ACTIVE", "INACTIVE"]);

    let input = schema.type_named("AddressInput").expect("fixture type");
    assert_eq!(input.input_fields().len(), 3);
    assert!(input.possible_types().is_empty());
    assert!(!input.is_introspection_type());
    assert!(SchemaType::scalar("__Type").is_introspection_type());
}

#[test]
fn types_are_addressable_by_index() {
    let schema = blog_schema();

    let user_index = schema.type_index("User").unwrap();
    assert_eq!(schema.type_at(user_index).map(SchemaType::name), Some("User"));
    assert_eq!(schema.type_index("Query"), Some(0));
    assert_eq!(schema.type_index("Missing"), None);
    assert!(schema.type_at(schema.types_len()).is_none());
}
