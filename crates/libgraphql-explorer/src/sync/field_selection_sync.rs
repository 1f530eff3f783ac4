use crate::query_text::QueryParseError;
use crate::query_text::QueryTextParser;
use crate::query_text::QueryTextSynthesizer;
use crate::schema::SchemaModel;
use crate::selection::CheckboxState;
use crate::selection::FieldPath;
use crate::selection::ListenerId;
use crate::selection::SelectionStore;
use crate::sync::SyncFlag;
use crate::sync::TextSurface;
use crate::tree::CheckboxChange;
use crate::tree::NodeId;
use crate::tree::SelectionTree;
use crate::tree::SelectionTreeError;
use crate::tree::TreeOptions;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Default)]
struct SyncFlags {
    /// Held while checkbox changes are being written to the store.
    from_checkboxes: SyncFlag,

    /// Held while parsed query text is being written to the tree and store.
    from_text: SyncFlag,
}

/// Keeps a [`SelectionTree`], a [`SelectionStore`] and a [`TextSurface`] in
/// agreement.
///
/// The store is the source of truth. Checkbox changes are written to the
/// store, and every store change is rendered back into the surface with a
/// silent update. Edited text is parsed and restated into both the tree
/// (silently) and the store. Two [`SyncFlag`]s keep each direction from
/// re-triggering the other.
pub struct FieldSelectionSync<S: TextSurface + 'static> {
    flags: Arc<SyncFlags>,
    schema: Arc<SchemaModel>,
    store: Arc<SelectionStore>,
    store_listener: ListenerId,
    surface: Arc<S>,
    tree: SelectionTree,
}
impl<S: TextSurface + 'static> FieldSelectionSync<S> {
    pub fn new(schema: Arc<SchemaModel>, surface: Arc<S>) -> Self {
        Self::with_options(schema, surface, TreeOptions::default())
    }

    pub fn with_options(
        schema: Arc<SchemaModel>,
        surface: Arc<S>,
        tree_options: TreeOptions,
    ) -> Self {
        let flags = Arc::new(SyncFlags::default());
        let store = Arc::new(SelectionStore::new());

        let store_listener = {
            let flags = flags.clone();
            let surface = surface.clone();
            store.add_listener(move |snapshot| {
                if flags.from_text.is_held() {
                    log::trace!(
                        "Not rendering selection version {}: it came from query text.",
                        snapshot.version(),
                    );
                    return;
                }
                surface.set_text_silently(
                    QueryTextSynthesizer::generate_snapshot(snapshot),
                );
            })
        };

        let tree = Self::build_tree(&schema, tree_options, &store, &flags);
        Self {
            flags,
            schema,
            store,
            store_listener,
            surface,
            tree,
        }
    }

    /// True while either synchronization direction is in progress.
    pub fn is_syncing(&self) -> bool {
        self.flags.from_checkboxes.is_held() || self.flags.from_text.is_held()
    }

    /// Restate the tree and the store from the surface's current text.
    ///
    /// Ignored while checkbox changes are being applied. Text that does not
    /// parse leaves the current selection untouched and the parse error is
    /// returned.
    pub fn on_text_changed(&mut self) -> Result<(), QueryParseError> {
        if self.flags.from_checkboxes.is_held() {
            log::trace!("Ignoring text change caused by a checkbox change.");
            return Ok(());
        }
        let flags = self.flags.clone();
        let _from_text = flags.from_text.acquire();

        let text = self.surface.text();
        let paths = match QueryTextParser::new(&self.schema).try_parse(&text) {
            Ok(paths) => paths,
            Err(err) => {
                log::debug!("Keeping the last selection; query text does not parse: {err}");
                return Err(err);
            },
        };

        self.tree.reset_silently();
        for path in maximal_paths(&paths) {
            let Some(node) = self.tree.expand_path(path) else {
                log::debug!("`{path}` is not shown in the selection tree.");
                continue;
            };
            if let Err(err) = self.tree.set_state_silently(node, CheckboxState::Checked) {
                log::warn!("Failed to check `{path}`: {err}");
            }
        }

        let schema = &self.schema;
        let tree = &self.tree;
        self.store.batch(|batch| {
            batch.clear();
            for path in &paths {
                if let Some(field) = schema.resolve_path(path) {
                    batch.add(path.clone(), field.clone(), None);
                }
            }
            for id in tree.checked_nodes() {
                // Operation roots have no field and are never selections.
                let (Some(node), Some(field)) = (tree.node(id), tree.field(id)) else {
                    continue;
                };
                if !batch.is_selected(node.path()) {
                    batch.add(node.path().clone(), field.clone(), None);
                }
            }
        });
        log::debug!(
            "Restated {} selections from query text.",
            self.store.len(),
        );
        Ok(())
    }

    /// Materialize the children of `node` so they can be shown and clicked.
    ///
    /// Expansion never changes the selection: new children take their
    /// parent's state, and a checked node is always fully expanded already.
    pub fn expand(&mut self, node: NodeId) -> Result<&[NodeId], SelectionTreeError> {
        self.tree.expand(node)
    }

    /// Find the node for `path`, materializing the nodes along it.
    pub fn expand_path(&mut self, path: &FieldPath) -> Option<NodeId> {
        self.tree.expand_path(path)
    }

    /// Materialize every tree node up to `depth` path segments long.
    pub fn expand_to_depth(&mut self, depth: usize) {
        self.tree.expand_to_depth(depth);
    }

    /// Swap in a new schema: the tree is rebuilt and every selection is
    /// dropped.
    pub fn replace_schema(&mut self, schema: Arc<SchemaModel>) {
        let tree_options = self.tree.options().clone();
        self.tree = Self::build_tree(&schema, tree_options, &self.store, &self.flags);
        self.schema = schema;
        self.store.clear();
    }

    pub fn schema(&self) -> &Arc<SchemaModel> {
        &self.schema
    }

    /// Check or uncheck the node at `path`, as if it had been clicked into
    /// that state.
    pub fn set_path_state(
        &mut self,
        path: &FieldPath,
        state: CheckboxState,
    ) -> Result<NodeId, SelectionTreeError> {
        let node = self.tree
            .expand_path(path)
            .ok_or_else(|| SelectionTreeError::UnknownPath(path.clone()))?;
        self.tree.set_state(node, state)?;
        Ok(node)
    }

    pub fn set_state(
        &mut self,
        node: NodeId,
        state: CheckboxState,
    ) -> Result<(), SelectionTreeError> {
        self.tree.set_state(node, state)
    }

    pub fn store(&self) -> &Arc<SelectionStore> {
        &self.store
    }

    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    pub fn toggle(&mut self, node: NodeId) -> Result<CheckboxState, SelectionTreeError> {
        self.tree.toggle(node)
    }

    pub fn tree(&self) -> &SelectionTree {
        &self.tree
    }

    fn build_tree(
        schema: &Arc<SchemaModel>,
        tree_options: TreeOptions,
        store: &Arc<SelectionStore>,
        flags: &Arc<SyncFlags>,
    ) -> SelectionTree {
        let mut tree = SelectionTree::build_with_options(schema.clone(), tree_options);
        let store = store.clone();
        let flags = flags.clone();
        tree.add_change_listener(move |change| {
            if flags.from_text.is_held() {
                return;
            }
            let _from_checkboxes = flags.from_checkboxes.acquire();
            apply_checkbox_change(&store, change);
        });
        tree
    }
}
impl<S: TextSurface + 'static> Drop for FieldSelectionSync<S> {
    fn drop(&mut self) {
        self.store.remove_listener(self.store_listener);
    }
}
impl<S: TextSurface + std::fmt::Debug + 'static> std::fmt::Debug for FieldSelectionSync<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSelectionSync")
            .field("flags", &self.flags)
            .field("store", &self.store)
            .field("surface", &self.surface)
            .field("tree", &self.tree)
            .finish()
    }
}

fn apply_checkbox_change(store: &SelectionStore, change: &CheckboxChange) {
    store.batch(|batch| {
        if change.target_state == CheckboxState::Unchecked {
            batch.remove_with_prefix(&change.target_path);
        }
        for node_change in &change.changed {
            match (node_change.state, &node_change.field) {
                // Operation roots carry no field and are never selections.
                (CheckboxState::Checked, None) => (),
                (CheckboxState::Checked, Some(field)) => {
                    // Keep arguments attached to an existing selection.
                    if !batch.is_selected(&node_change.path) {
                        batch.add(node_change.path.clone(), field.clone(), None);
                    }
                },
                (CheckboxState::Partial | CheckboxState::Unchecked, _) => {
                    batch.remove(&node_change.path);
                },
            }
        }
    });
}

/// Parsed paths that have no other parsed path below them.
fn maximal_paths(paths: &BTreeSet<FieldPath>) -> impl Iterator<Item = &FieldPath> {
    let mut ordered = paths.iter().peekable();
    std::iter::from_fn(move || {
        loop {
            let path = ordered.next()?;
            // Descendants sort directly after their ancestor.
            let has_descendant = ordered
                .peek()
                .is_some_and(|next| path.is_strict_prefix_of(next));
            if !has_descendant {
                return Some(path);
            }
        }
    })
}
