/// The three operation roots a schema may expose.
///
/// The declaration order is the fixed order in which operations are walked
/// and rendered (Query, then Mutation, then Subscription).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}
impl OperationKind {
    pub const ALL: [OperationKind; 3] = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ];

    /// Operation keyword as written in a GraphQL document.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    /// The first segment of every [`FieldPath`](crate::selection::FieldPath)
    /// selected under this operation.
    pub fn root_marker(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }

    pub fn from_root_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.root_marker() == marker)
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
