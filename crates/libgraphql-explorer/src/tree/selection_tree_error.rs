use crate::selection::FieldPath;
use crate::tree::NodeId;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionTreeError {
    #[error("`Partial` is derived from children and cannot be set on `{path}`")]
    PartialStateNotSettable {
        path: FieldPath,
    },

    #[error("No node with id {0:?} exists in this tree")]
    UnknownNode(NodeId),

    #[error("No node for `{0}` exists in this tree")]
    UnknownPath(FieldPath),
}
