use crate::schema::OperationKind;
use crate::selection::CheckboxState;
use crate::selection::FieldPath;

/// Index of a [`TreeNode`] within its [`SelectionTree`](crate::tree::SelectionTree).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(pub(super) usize);

/// Position of a field within the schema: the index of its declaring type and
/// the field's index within that type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct FieldIndex {
    pub(super) owner_type: usize,
    pub(super) field: usize,
}

#[derive(Clone, Debug)]
pub struct TreeNode {
    pub(super) children: Vec<NodeId>,
    pub(super) expanded: bool,
    /// `None` for operation roots.
    pub(super) field: Option<FieldIndex>,
    pub(super) id: NodeId,
    /// The OBJECT type whose fields become this node's children. `None` for
    /// leaves, including truncated ones.
    pub(super) object_type: Option<usize>,
    pub(super) operation_kind: OperationKind,
    pub(super) parent: Option<NodeId>,
    pub(super) path: FieldPath,
    pub(super) state: CheckboxState,
    pub(super) truncated: bool,
}
impl TreeNode {
    /// Children materialized so far. Empty until the node is expanded.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// True once the node's children have been materialized (always true
    /// for leaves).
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// True when the node can never have children.
    pub fn is_leaf(&self) -> bool {
        self.object_type.is_none()
    }

    pub fn is_operation_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn state(&self) -> CheckboxState {
        self.state
    }

    /// True when the field's type has selectable fields that were not
    /// expanded because of the cycle or depth bound.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}
