use crate::schema::SchemaField;
use crate::selection::CheckboxState;
use crate::selection::FieldPath;
use crate::tree::NodeId;

/// One node whose state changed as part of a [`CheckboxChange`].
#[derive(Clone, Debug)]
pub struct NodeStateChange {
    /// `None` for operation roots.
    pub field: Option<SchemaField>,
    pub node: NodeId,
    pub path: FieldPath,
    pub state: CheckboxState,
}

/// Delivered to [`SelectionTree`](crate::tree::SelectionTree) change
/// listeners after a non-silent state change.
#[derive(Clone, Debug)]
pub struct CheckboxChange {
    /// Every node whose state changed: the target, then descendants, then
    /// ancestors.
    pub changed: Vec<NodeStateChange>,
    pub target: NodeId,
    pub target_path: FieldPath,
    pub target_state: CheckboxState,
}
