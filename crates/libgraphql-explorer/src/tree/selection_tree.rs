use crate::schema::OperationKind;
use crate::schema::SchemaField;
use crate::schema::SchemaModel;
use crate::schema::TypeKind;
use crate::selection::CheckboxState;
use crate::selection::FieldPath;
use crate::selection::ListenerId;
use crate::selection::ListenerIdGenerator;
use crate::tree::CheckboxChange;
use crate::tree::NodeId;
use crate::tree::NodeStateChange;
use crate::tree::SelectionTreeError;
use crate::tree::TreeNode;
use crate::tree::TreeOptions;
use crate::tree::tree_node::FieldIndex;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SelectionTreeError>;

type CheckboxListener = Box<dyn Fn(&CheckboxChange) + Send>;

/// Tri-state checkbox hierarchy mirroring the fields reachable from each
/// operation root of a [`SchemaModel`].
///
/// Nodes are materialized on demand. Building the tree creates the operation
/// roots and their direct fields; deeper nodes appear when a node is
/// [expanded](SelectionTree::expand), when a path is walked with
/// [`SelectionTree::expand_path`], or when a node is checked (checking covers
/// every descendant, so the whole bounded subtree is materialized first).
/// Children created later inherit their parent's state.
///
/// Only `OBJECT`-typed fields have children. Expansion stops (leaving the
/// node as a [truncated](TreeNode::truncated) leaf) when a field's type
/// already appears on the chain of types from the operation root down to the
/// field, or when the node's path reaches [`TreeOptions::max_depth`]. The
/// tree is therefore finite for every schema, including self-referential
/// ones.
///
/// The tree is not thread-safe; it is meant to be owned and mutated by a
/// single interaction thread.
pub struct SelectionTree {
    listener_ids: ListenerIdGenerator,
    listeners: Vec<(ListenerId, CheckboxListener)>,
    nodes: Vec<TreeNode>,
    options: TreeOptions,
    roots: Vec<NodeId>,
    schema: Arc<SchemaModel>,
}
impl SelectionTree {
    pub fn build(schema: Arc<SchemaModel>) -> Self {
        Self::build_with_options(schema, TreeOptions::default())
    }

    pub fn build_with_options(schema: Arc<SchemaModel>, options: TreeOptions) -> Self {
        let mut tree = Self {
            listener_ids: ListenerIdGenerator::default(),
            listeners: vec![],
            nodes: vec![],
            options,
            roots: vec![],
            schema: schema.clone(),
        };

        for kind in schema.operation_kinds() {
            let Some(root_index) = schema
                .root_type_name(kind)
                .and_then(|name| schema.type_index(name))
            else {
                continue;
            };
            let has_fields = schema
                .type_at(root_index)
                .is_some_and(|root_type| !root_type.fields().is_empty());
            let root_id = tree.attach(TreeNode {
                children: vec![],
                expanded: !has_fields,
                field: None,
                id: NodeId(0),
                object_type: has_fields.then_some(root_index),
                operation_kind: kind,
                parent: None,
                path: FieldPath::root(kind),
                state: CheckboxState::Unchecked,
                truncated: false,
            });
            tree.roots.push(root_id);
            tree.materialize_children(root_id);
        }

        log::debug!(
            "Built selection tree with {} operation roots and {} initial nodes.",
            tree.roots.len(),
            tree.nodes.len(),
        );
        tree
    }

    pub fn add_change_listener(
        &mut self,
        listener: impl Fn(&CheckboxChange) + Send + 'static,
    ) -> ListenerId {
        let id = self.listener_ids.next();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Every materialized node in the [`CheckboxState::Checked`] state, in
    /// depth-first order.
    pub fn checked_nodes(&self) -> Vec<NodeId> {
        self.depth_first()
            .into_iter()
            .filter(|id| self.nodes[id.0].state == CheckboxState::Checked)
            .collect()
    }

    /// All materialized nodes below `id`, in depth-first order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut descendants = vec![];
        let mut stack: Vec<NodeId> = match self.nodes.get(id.0) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return descendants,
        };
        while let Some(next) = stack.pop() {
            descendants.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        descendants
    }

    /// Materialize the children of `id` (a no-op if they already exist) and
    /// return them.
    pub fn expand(&mut self, id: NodeId) -> Result<&[NodeId]> {
        self.node_or_err(id)?;
        self.materialize_children(id);
        Ok(&self.nodes[id.0].children)
    }

    /// Like [`SelectionTree::find_node_by_path`], but materializes each node
    /// along `path` on the way down.
    pub fn expand_path(&mut self, path: &FieldPath) -> Option<NodeId> {
        let mut current = self.root_for(path)?;
        for segment in path.field_segments() {
            self.materialize_children(current);
            current = self.child_named(current, segment)?;
        }
        Some(current)
    }

    /// Materialize every node whose path is shorter than `depth`, so that
    /// all nodes up to `depth` segments long exist.
    pub fn expand_to_depth(&mut self, depth: usize) {
        let mut stack = self.roots.clone();
        while let Some(id) = stack.pop() {
            if self.nodes[id.0].path.len() >= depth {
                continue;
            }
            self.materialize_children(id);
            stack.extend(self.nodes[id.0].children.iter().copied());
        }
    }

    /// The schema field a node represents. `None` for operation roots.
    pub fn field(&self, id: NodeId) -> Option<&SchemaField> {
        let index = self.nodes.get(id.0)?.field?;
        self.schema
            .type_at(index.owner_type)?
            .fields()
            .get(index.field)
    }

    /// Locate the materialized node for `path` by walking from the matching
    /// operation root through children one segment at a time.
    ///
    /// Returns `None` when no such node exists yet (use
    /// [`SelectionTree::expand_path`] to create it) or when the tree cannot
    /// contain the path at all (for example a path selected against an older
    /// schema, or one deeper than the expansion bound).
    pub fn find_node_by_path(&self, path: &FieldPath) -> Option<NodeId> {
        let mut current = self.root_for(path)?;
        for segment in path.field_segments() {
            current = self.child_named(current, segment)?;
        }
        Some(current)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Display label: `name: Type`, plus a deprecation marker. Operation
    /// roots are labelled with their root marker and root type name.
    pub fn label(&self, id: NodeId) -> Option<String> {
        let node = self.nodes.get(id.0)?;
        let Some(field) = self.field(id) else {
            let root_marker = node.path.root_marker()?;
            let root_type = self.schema.root_type_name(node.operation_kind)?;
            return Some(format!("{root_marker}: {root_type}"));
        };

        let mut label = format!("{}: {}", field.name(), field.type_ref());
        if field.deprecation_state().is_deprecated() {
            label.push_str(" [deprecated]");
        }
        Some(label)
    }

    /// Number of materialized nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Materialized nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != len_before
    }

    /// Render an indented outline with one `[x]`/`[ ]`/`[-]` line per
    /// materialized node. Truncated nodes end in ` …`, nodes whose children
    /// have not been materialized yet end in ` +`.
    pub fn render(&self) -> String {
        let mut lines = vec![];
        for root in &self.roots {
            self.render_node(*root, 0, &mut lines);
        }
        lines.join("\n")
    }

    /// Set every node to [`CheckboxState::Unchecked`] without notifying
    /// listeners.
    pub fn reset_silently(&mut self) {
        for node in &mut self.nodes {
            node.state = CheckboxState::Unchecked;
        }
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn schema(&self) -> &Arc<SchemaModel> {
        &self.schema
    }

    /// Explicitly set a node to `Checked` or `Unchecked`, propagate, and
    /// notify listeners if anything changed.
    pub fn set_state(&mut self, id: NodeId, state: CheckboxState) -> Result<()> {
        let changed = self.apply_state(id, state)?;
        self.notify(id, state, changed);
        Ok(())
    }

    /// Same propagation as [`SelectionTree::set_state`] but listeners are
    /// not notified. Used when the tree is being restated from query text.
    pub fn set_state_silently(&mut self, id: NodeId, state: CheckboxState) -> Result<()> {
        self.apply_state(id, state)?;
        Ok(())
    }

    pub fn state(&self, id: NodeId) -> Option<CheckboxState> {
        self.node(id).map(TreeNode::state)
    }

    /// Handle a click on the node: `Checked` becomes `Unchecked`, anything
    /// else becomes `Checked`. Returns the node's new state.
    pub fn toggle(&mut self, id: NodeId) -> Result<CheckboxState> {
        let new_state = self.node_or_err(id)?.state.toggled();
        self.set_state(id, new_state)?;
        Ok(new_state)
    }

    /// Apply `state` to `id` and all of its descendants, then re-derive every
    /// ancestor from its children. Returns the nodes whose state changed.
    fn apply_state(&mut self, id: NodeId, state: CheckboxState) -> Result<Vec<NodeId>> {
        let node = self.node_or_err(id)?;
        if state == CheckboxState::Partial {
            return Err(SelectionTreeError::PartialStateNotSettable {
                path: node.path.clone(),
            });
        }

        // Unmaterialized children inherit an unchecked parent's state, but a
        // checked node must have every descendant present to select it.
        if state == CheckboxState::Checked {
            self.materialize_subtree(id);
        }

        let mut changed = vec![];
        for target in std::iter::once(id).chain(self.descendants(id)) {
            let node = &mut self.nodes[target.0];
            if node.state != state {
                node.state = state;
                changed.push(target);
            }
        }

        let mut ancestor = self.nodes[id.0].parent;
        while let Some(ancestor_id) = ancestor {
            let derived = CheckboxState::from_children(
                self.nodes[ancestor_id.0]
                    .children
                    .iter()
                    .map(|child| self.nodes[child.0].state),
            );
            let node = &mut self.nodes[ancestor_id.0];
            if node.state != derived {
                node.state = derived;
                changed.push(ancestor_id);
            }
            ancestor = node.parent;
        }

        Ok(changed)
    }

    fn attach(&mut self, mut node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.id = id;
        if let Some(parent) = node.parent {
            self.nodes[parent.0].children.push(id);
        }
        self.nodes.push(node);
        id
    }

    fn child_named(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].path.leaf_name() == Some(name))
    }

    fn depth_first(&self) -> Vec<NodeId> {
        let mut ordered = vec![];
        for root in &self.roots {
            ordered.push(*root);
            ordered.extend(self.descendants(*root));
        }
        ordered
    }

    fn materialize_children(&mut self, id: NodeId) {
        let node = &self.nodes[id.0];
        if node.expanded {
            return;
        }
        let schema = self.schema.clone();
        let Some(owner_type) = node.object_type else {
            self.nodes[id.0].expanded = true;
            return;
        };
        let Some(parent_type) = schema.type_at(owner_type) else {
            self.nodes[id.0].expanded = true;
            return;
        };

        let type_chain = self.type_chain(id);
        let operation_kind = node.operation_kind;
        let parent_path = node.path.clone();
        let inherited_state = match node.state {
            CheckboxState::Partial => CheckboxState::Unchecked,
            state => state,
        };

        for (field_index, field) in parent_type.fields().iter().enumerate() {
            let path = parent_path.child(field.name());
            let child_type = schema
                .type_index(field.type_ref().innermost_name())
                .filter(|index| {
                    schema.type_at(*index).is_some_and(|child_type| {
                        child_type.kind() == TypeKind::Object
                            && !child_type.fields().is_empty()
                    })
                });
            let (object_type, truncated) = match child_type {
                Some(index)
                    if type_chain.contains(&index)
                        || path.len() >= self.options.max_depth => (None, true),
                Some(index) => (Some(index), false),
                None => (None, false),
            };

            self.attach(TreeNode {
                children: vec![],
                expanded: object_type.is_none(),
                field: Some(FieldIndex {
                    owner_type,
                    field: field_index,
                }),
                id: NodeId(0),
                object_type,
                operation_kind,
                parent: Some(id),
                path,
                state: inherited_state,
                truncated,
            });
        }
        self.nodes[id.0].expanded = true;
        log::trace!("Materialized the children of `{parent_path}`.");
    }

    fn materialize_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            self.materialize_children(next);
            stack.extend(self.nodes[next.0].children.iter().copied());
        }
    }

    fn node_or_err(&self, id: NodeId) -> Result<&TreeNode> {
        self.nodes.get(id.0).ok_or(SelectionTreeError::UnknownNode(id))
    }

    fn notify(&self, target: NodeId, target_state: CheckboxState, changed: Vec<NodeId>) {
        if changed.is_empty() {
            return;
        }
        let change = CheckboxChange {
            changed: changed
                .into_iter()
                .map(|id| NodeStateChange {
                    field: self.field(id).cloned(),
                    node: id,
                    path: self.nodes[id.0].path.clone(),
                    state: self.nodes[id.0].state,
                })
                .collect(),
            target,
            target_path: self.nodes[target.0].path.clone(),
            target_state,
        };
        for (_, listener) in &self.listeners {
            listener(&change);
        }
    }

    fn render_node(&self, id: NodeId, depth: usize, lines: &mut Vec<String>) {
        let node = &self.nodes[id.0];
        let suffix =
            if node.truncated {
                " …"
            } else if !node.expanded {
                " +"
            } else {
                ""
            };
        lines.push(format!(
            "{}{} {}{}",
            "  ".repeat(depth),
            node.state.marker(),
            self.label(id).unwrap_or_default(),
            suffix,
        ));
        for child in &node.children {
            self.render_node(*child, depth + 1, lines);
        }
    }

    fn root_for(&self, path: &FieldPath) -> Option<NodeId> {
        let root_marker = path.root_marker()?;
        self.roots.iter().copied().find(|root| {
            self.nodes[root.0].path.root_marker() == Some(root_marker)
        })
    }

    /// Object types on the chain from the operation root down to `id`.
    fn type_chain(&self, id: NodeId) -> Vec<usize> {
        let mut chain = vec![];
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            chain.extend(node.object_type);
            current = node.parent;
        }
        chain
    }
}
impl std::fmt::Debug for SelectionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionTree")
            .field("nodes", &self.nodes.len())
            .field("roots", &self.roots)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
