use crate::schema::SchemaField;
use crate::schema::SchemaInputValue;
use crate::schema::SchemaModel;
use crate::schema::SchemaType;
use crate::schema::TypeKind;
use crate::schema::TypeRef;
use crate::selection::FieldPath;

pub(crate) fn named(kind: TypeKind, name: &str) -> TypeRef {
    TypeRef::named(kind, name)
}

pub(crate) fn non_null(inner: TypeRef) -> TypeRef {
    TypeRef::non_null(inner)
}

pub(crate) fn list(inner: TypeRef) -> TypeRef {
    TypeRef::list(inner)
}

pub(crate) fn scalar(name: &str) -> TypeRef {
    named(TypeKind::Scalar, name)
}

pub(crate) fn object(name: &str) -> TypeRef {
    named(TypeKind::Object, name)
}

pub(crate) fn path(dotted: &str) -> FieldPath {
    dotted.parse().expect("test paths are well-formed")
}

/// A small blog-like schema:
///
/// ```graphql
/// type Query {
///   user(id: ID!): User
///   users(first: Int, filter: UserFilter): [User!]!
///   post(id: ID!): Post
///   node(id: ID!): Node
///   status: Status
/// }
/// type Mutation {
///   createUser(input: CreateUserInput!): User
///   deletePost(id: ID!): Boolean
/// }
/// type User implements Node {
///   id: ID!
///   name: String
///   email: String
///   posts: [Post!]!
///   friends: [User!]!
///   oldName: String @deprecated(reason: "Use name")
/// }
/// type Post { id: ID! title: String! author: User! comments: [Comment] }
/// type Comment { body: String author: User }
/// interface Node { id: ID! }
/// enum Status { ACTIVE INACTIVE }
/// enum Role { ADMIN MEMBER }
/// input UserFilter { nameContains: String role: Role }
/// input CreateUserInput {
///   name: String! email: String age: Int role: Role
///   address: AddressInput tags: [String!] price: Float createdAt: String
/// }
/// input AddressInput { city: String country: String next: AddressInput }
/// ```
pub(crate) fn blog_schema() -> SchemaModel {
    let id_arg = || SchemaInputValue::new("id", non_null(scalar("ID")));
    SchemaModel::new(
        [
            SchemaType::object("Query", vec![
                SchemaField::new("user", object("User")).with_args(vec![id_arg()]),
                SchemaField::new("users", non_null(list(non_null(object("User")))))
                    .with_args(vec![
                        SchemaInputValue::new("first", scalar("Int")),
                        SchemaInputValue::new(
                            "filter",
                            named(TypeKind::InputObject, "UserFilter"),
                        ),
                    ]),
                SchemaField::new("post", object("Post")).with_args(vec![id_arg()]),
                SchemaField::new("node", named(TypeKind::Interface, "Node"))
                    .with_args(vec![id_arg()]),
                SchemaField::new("status", named(TypeKind::Enum, "Status")),
            ]),
            SchemaType::object("Mutation", vec![
                SchemaField::new("createUser", object("User")).with_args(vec![
                    SchemaInputValue::new(
                        "input",
                        non_null(named(TypeKind::InputObject, "CreateUserInput")),
                    ),
                ]),
                SchemaField::new("deletePost", scalar("Boolean")).with_args(vec![id_arg()]),
            ]),
            SchemaType::object("User", vec![
                SchemaField::new("id", non_null(scalar("ID"))),
                SchemaField::new("name", scalar("String")),
                SchemaField::new("email", scalar("String")),
                SchemaField::new("posts", non_null(list(non_null(object("Post"))))),
                SchemaField::new("friends", non_null(list(non_null(object("User"))))),
                SchemaField::new("oldName", scalar("String"))
                    .with_deprecation(Some("Use name")),
            ]),
            SchemaType::object("Post", vec![
                SchemaField::new("id", non_null(scalar("ID"))),
                SchemaField::new("title", non_null(scalar("String"))),
                SchemaField::new("author", non_null(object("User"))),
                SchemaField::new("comments", list(object("Comment"))),
            ]),
            SchemaType::object("Comment", vec![
                SchemaField::new("body", scalar("String")),
                SchemaField::new("author", object("User")),
            ]),
            SchemaType::interface("Node", vec![
                SchemaField::new("id", non_null(scalar("ID"))),
            ]),
            SchemaType::enum_type("Status", ["ACTIVE", "INACTIVE"]),
            SchemaType::enum_type("Role", ["ADMIN", "MEMBER"]),
            SchemaType::input_object("UserFilter", vec![
                SchemaInputValue::new("nameContains", scalar("String")),
                SchemaInputValue::new("role", named(TypeKind::Enum, "Role")),
            ]),
            SchemaType::input_object("CreateUserInput", vec![
                SchemaInputValue::new("name", non_null(scalar("String"))),
                SchemaInputValue::new("email", scalar("String")),
                SchemaInputValue::new("age", scalar("Int")),
                SchemaInputValue::new("role", named(TypeKind::Enum, "Role")),
                SchemaInputValue::new("address", named(TypeKind::InputObject, "AddressInput")),
                SchemaInputValue::new("tags", list(non_null(scalar("String")))),
                SchemaInputValue::new("price", scalar("Float")),
                SchemaInputValue::new("createdAt", scalar("String")),
            ]),
            SchemaType::input_object("AddressInput", vec![
                SchemaInputValue::new("city", scalar("String")),
                SchemaInputValue::new("country", scalar("String")),
                SchemaInputValue::new("next", named(TypeKind::InputObject, "AddressInput")),
            ]),
            SchemaType::scalar("ID"),
            SchemaType::scalar("String"),
            SchemaType::scalar("Int"),
            SchemaType::scalar("Float"),
            SchemaType::scalar("Boolean"),
        ],
        "Query",
        Some("Mutation".to_string()),
        None,
    )
}

/// An introspection response (`{"data": {"__schema": ...}}`) describing
/// `type Query { user(id: ID!): User }` and
/// `type User { id: ID! name: String tags: [String!]! }`.
pub(crate) const SMALL_INTROSPECTION_RESPONSE: &str = r#"{
  "data": {
    "__schema": {
      "queryType": { "name": "Query" },
      "mutationType": null,
      "subscriptionType": null,
      "types": [
        {
          "kind": "OBJECT",
          "name": "Query",
          "description": "Root query",
          "fields": [
            {
              "name": "user",
              "description": null,
              "args": [
                {
                  "name": "id",
                  "description": null,
                  "type": {
                    "kind": "NON_NULL",
                    "name": null,
                    "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
                  },
                  "defaultValue": null
                }
              ],
              "type": { "kind": "OBJECT", "name": "User", "ofType": null },
              "isDeprecated": false,
              "deprecationReason": null
            }
          ],
          "inputFields": null,
          "enumValues": null,
          "possibleTypes": null
        },
        {
          "kind": "OBJECT",
          "name": "User",
          "description": null,
          "fields": [
            {
              "name": "id",
              "args": [],
              "type": {
                "kind": "NON_NULL",
                "name": null,
                "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
              },
              "isDeprecated": false,
              "deprecationReason": null
            },
            {
              "name": "name",
              "args": [],
              "type": { "kind": "SCALAR", "name": "String", "ofType": null },
              "isDeprecated": true,
              "deprecationReason": "Use fullName"
            },
            {
              "name": "tags",
              "args": [],
              "type": {
                "kind": "NON_NULL",
                "name": null,
                "ofType": {
                  "kind": "LIST",
                  "name": null,
                  "ofType": {
                    "kind": "NON_NULL",
                    "name": null,
                    "ofType": { "kind": "SCALAR", "name": "String", "ofType": null }
                  }
                }
              },
              "isDeprecated": false,
              "deprecationReason": null
            }
          ],
          "inputFields": null,
          "enumValues": null,
          "possibleTypes": null
        },
        { "kind": "SCALAR", "name": "ID" },
        { "kind": "SCALAR", "name": "String" }
      ]
    }
  }
}"#;
