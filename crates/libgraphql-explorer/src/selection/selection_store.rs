use crate::schema::SchemaField;
use crate::selection::Arguments;
use crate::selection::CheckboxState;
use crate::selection::FieldPath;
use crate::selection::ListenerId;
use crate::selection::ListenerIdGenerator;
use crate::selection::Selection;
use crate::selection::SelectionMap;
use crate::selection::SelectionSnapshot;
use parking_lot::Mutex;
use std::sync::Arc;

/// Callback invoked with the post-mutation content after every committed
/// change to a [`SelectionStore`].
pub type SelectionListener = Arc<dyn Fn(&SelectionSnapshot) + Send + Sync>;

#[derive(Default)]
struct StoreState {
    selections: SelectionMap,
    version: u64,
}

/// The single source of truth for which field paths are selected.
///
/// Every mutation is applied under one lock. Listeners are invoked after the
/// lock has been released, on the thread that performed the mutation, and
/// only when the mutation actually changed the content. A listener may call
/// back into the store.
#[derive(Default)]
pub struct SelectionStore {
    listener_ids: ListenerIdGenerator,
    listeners: Mutex<Vec<(ListenerId, SelectionListener)>>,
    state: Mutex<StoreState>,
}
impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the selection for `path`. Returns `true` if the
    /// store changed.
    pub fn add(
        &self,
        path: FieldPath,
        field: SchemaField,
        arguments: Option<Arguments>,
    ) -> bool {
        self.mutate(|selections| {
            selections.insert(Selection::new(path, field, arguments))
        })
    }

    pub fn add_listener(
        &self,
        listener: impl Fn(&SelectionSnapshot) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = self.listener_ids.next();
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    pub fn all_selections(&self) -> Vec<Selection> {
        self.state.lock().selections.all()
    }

    /// Apply several mutations as one: they share a single critical section
    /// and listeners are notified at most once, after `f` returns.
    pub fn batch<R>(&self, f: impl FnOnce(&mut SelectionBatch<'_>) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.lock();
            let mut batch = SelectionBatch {
                changed: false,
                selections: &mut state.selections,
            };
            let result = f(&mut batch);
            let snapshot =
                if batch.changed {
                    state.version += 1;
                    Some(SelectionSnapshot::new(
                        state.version,
                        state.selections.clone(),
                    ))
                } else {
                    None
                };
            (result, snapshot)
        };
        if let Some(snapshot) = snapshot {
            self.notify(&snapshot);
        }
        result
    }

    /// Selections exactly one segment below `parent`.
    pub fn child_selections(&self, parent: &FieldPath) -> Vec<Selection> {
        self.state.lock().selections.child_selections(parent)
    }

    pub fn clear(&self) -> bool {
        self.mutate(SelectionMap::clear)
    }

    pub fn is_selected(&self, path: &FieldPath) -> bool {
        self.state.lock().selections.is_selected(path)
    }

    pub fn len(&self) -> usize {
        self.state.lock().selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().selections.is_empty()
    }

    /// Delete the selection for exactly `path`.
    pub fn remove(&self, path: &FieldPath) -> bool {
        self.mutate(|selections| selections.remove(path))
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let len_before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != len_before
    }

    /// Delete `prefix` and every selection below it.
    pub fn remove_with_prefix(&self, prefix: &FieldPath) -> bool {
        self.mutate(|selections| selections.remove_with_prefix(prefix) > 0)
    }

    pub fn selection_state(&self, path: &FieldPath) -> CheckboxState {
        self.state.lock().selections.selection_state(path)
    }

    pub fn selections_for_root(&self, root_marker: &str) -> Vec<Selection> {
        self.state.lock().selections.selections_for_root(root_marker)
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        let state = self.state.lock();
        SelectionSnapshot::new(state.version, state.selections.clone())
    }

    fn mutate(&self, f: impl FnOnce(&mut SelectionMap) -> bool) -> bool {
        self.batch(|batch| {
            let changed = f(&mut *batch.selections);
            batch.changed |= changed;
            changed
        })
    }

    fn notify(&self, snapshot: &SelectionSnapshot) {
        // Clone the registrations so listeners run without holding the
        // listener lock and may (un)register listeners themselves.
        let listeners: Vec<SelectionListener> =
            self.listeners.lock()
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect();
        log::trace!(
            "Notifying {} selection listeners of version {}.",
            listeners.len(),
            snapshot.version(),
        );
        for listener in listeners {
            listener(snapshot);
        }
    }
}
impl std::fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("SelectionStore")
            .field("selections", &state.selections)
            .field("version", &state.version)
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}

/// Mutation handle passed to [`SelectionStore::batch`].
pub struct SelectionBatch<'a> {
    changed: bool,
    selections: &'a mut SelectionMap,
}
impl SelectionBatch<'_> {
    pub fn add(
        &mut self,
        path: FieldPath,
        field: SchemaField,
        arguments: Option<Arguments>,
    ) -> bool {
        let changed = self.selections.insert(Selection::new(path, field, arguments));
        self.changed |= changed;
        changed
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.selections.clear();
        self.changed |= changed;
        changed
    }

    pub fn is_selected(&self, path: &FieldPath) -> bool {
        self.selections.is_selected(path)
    }

    pub fn remove(&mut self, path: &FieldPath) -> bool {
        let changed = self.selections.remove(path);
        self.changed |= changed;
        changed
    }

    pub fn remove_with_prefix(&mut self, prefix: &FieldPath) -> usize {
        let removed = self.selections.remove_with_prefix(prefix);
        self.changed |= removed > 0;
        removed
    }
}
