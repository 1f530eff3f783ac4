mod checkbox_change;
mod selection_tree;
mod selection_tree_error;
mod tree_node;
mod tree_options;

pub use checkbox_change::CheckboxChange;
pub use checkbox_change::NodeStateChange;
pub use selection_tree::SelectionTree;
pub use selection_tree_error::SelectionTreeError;
pub use tree_node::NodeId;
pub use tree_node::TreeNode;
pub use tree_options::TreeOptions;
