/// Knobs for [`SelectionTree`](crate::tree::SelectionTree) construction.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TreeOptions {
    /// Longest [`FieldPath`](crate::selection::FieldPath) (root marker
    /// included) that will be materialized. Fields at this depth are leaves
    /// even when their type has fields.
    pub max_depth: usize,
}
impl TreeOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 5;
}
impl std::default::Default for TreeOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
