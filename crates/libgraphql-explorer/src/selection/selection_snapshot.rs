use crate::selection::CheckboxState;
use crate::selection::FieldPath;
use crate::selection::Selection;
use crate::selection::SelectionMap;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Immutable view of a [`SelectionStore`](crate::selection::SelectionStore)'s
/// content as of one committed mutation.
///
/// `version` increases by one with every committed mutation, so a listener
/// receiving snapshots from several threads can discard stale ones.
#[derive(Clone, Debug, Default)]
pub struct SelectionSnapshot {
    selections: Arc<SelectionMap>,
    version: u64,
}
impl SelectionSnapshot {
    pub(crate) fn new(version: u64, selections: SelectionMap) -> Self {
        Self {
            selections: Arc::new(selections),
            version,
        }
    }

    /// Every selection, ordered by path.
    pub fn all_selections(&self) -> Vec<Selection> {
        self.selections.all()
    }

    /// Distinct names one level below `parent` on the way to any selected
    /// path.
    pub fn child_names(&self, parent: &FieldPath) -> BTreeSet<String> {
        self.selections.child_names(parent)
    }

    pub fn child_selections(&self, parent: &FieldPath) -> Vec<Selection> {
        self.selections.child_selections(parent)
    }

    pub fn get(&self, path: &FieldPath) -> Option<&Selection> {
        self.selections.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn is_selected(&self, path: &FieldPath) -> bool {
        self.selections.is_selected(path)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn paths(&self) -> BTreeSet<FieldPath> {
        self.selections.paths().cloned().collect()
    }

    pub fn selection_state(&self, path: &FieldPath) -> CheckboxState {
        self.selections.selection_state(path)
    }

    pub fn selections_for_root(&self, root_marker: &str) -> Vec<Selection> {
        self.selections.selections_for_root(root_marker)
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
