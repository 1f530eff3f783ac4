use crate::selection::CheckboxState;
use crate::selection::FieldPath;
use crate::selection::Selection;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::ops::Bound;

/// Path-ordered selection storage shared by
/// [`SelectionStore`](crate::selection::SelectionStore) and
/// [`SelectionSnapshot`](crate::selection::SelectionSnapshot).
///
/// Because [`FieldPath`]s order lexicographically by segment, every
/// selection at or below a prefix forms one contiguous range starting at the
/// prefix itself.
#[derive(Clone, Debug, Default)]
pub(crate) struct SelectionMap(BTreeMap<FieldPath, Selection>);
impl SelectionMap {
    /// Selections at or below `prefix`.
    fn at_or_below<'a>(
        &'a self,
        prefix: &'a FieldPath,
    ) -> impl Iterator<Item = &'a Selection> + 'a {
        self.0
            .range::<FieldPath, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(path, _)| path.starts_with(prefix))
            .map(|(_, selection)| selection)
    }

    pub(crate) fn all(&self) -> Vec<Selection> {
        self.0.values().cloned().collect()
    }

    /// Names one segment below `parent` that lead to at least one stored
    /// path, whether or not the child path itself is stored.
    pub(crate) fn child_names(&self, parent: &FieldPath) -> BTreeSet<String> {
        self.at_or_below(parent)
            .filter_map(|selection| selection.path.segments().get(parent.len()))
            .cloned()
            .collect()
    }

    pub(crate) fn child_selections(&self, parent: &FieldPath) -> Vec<Selection> {
        self.at_or_below(parent)
            .filter(|selection| selection.path.len() == parent.len() + 1)
            .cloned()
            .collect()
    }

    pub(crate) fn clear(&mut self) -> bool {
        let changed = !self.0.is_empty();
        self.0.clear();
        changed
    }

    pub(crate) fn get(&self, path: &FieldPath) -> Option<&Selection> {
        self.0.get(path)
    }

    pub(crate) fn insert(&mut self, selection: Selection) -> bool {
        if let Some(existing) = self.0.get(&selection.path)
            && existing.same_content(&selection) {
            return false;
        }
        self.0.insert(selection.path.clone(), selection);
        true
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn is_selected(&self, path: &FieldPath) -> bool {
        self.0.contains_key(path)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.0.keys()
    }

    pub(crate) fn remove(&mut self, path: &FieldPath) -> bool {
        self.0.remove(path).is_some()
    }

    pub(crate) fn remove_with_prefix(&mut self, prefix: &FieldPath) -> usize {
        let doomed: Vec<FieldPath> =
            self.at_or_below(prefix)
                .map(|selection| selection.path.clone())
                .collect();
        for path in &doomed {
            self.0.remove(path);
        }
        doomed.len()
    }

    pub(crate) fn selection_state(&self, path: &FieldPath) -> CheckboxState {
        if self.is_selected(path) {
            CheckboxState::Checked
        } else if self.at_or_below(path).next().is_some() {
            // Not an exact member, so anything at-or-below is strictly below.
            CheckboxState::Partial
        } else {
            CheckboxState::Unchecked
        }
    }

    pub(crate) fn selections_for_root(&self, root_marker: &str) -> Vec<Selection> {
        self.0
            .values()
            .filter(|selection| selection.path.root_marker() == Some(root_marker))
            .cloned()
            .collect()
    }
}
