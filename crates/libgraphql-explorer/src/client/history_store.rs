use crate::client::HistoryEntry;
use parking_lot::Mutex;
use std::collections::VecDeque;

#[derive(Debug, Default)]
struct HistoryState {
    /// Newest first.
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

/// In-memory record of executed requests, newest first. Once `capacity`
/// entries are held, adding one evicts the oldest.
#[derive(Debug)]
pub struct HistoryStore {
    capacity: usize,
    state: Mutex<HistoryState>,
}
impl HistoryStore {
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// A `capacity` of zero is raised to one so the entry just added is
    /// always retrievable by the id [`HistoryStore::add`] returns.
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            log::warn!("History capacity must be at least 1; using 1.");
        }
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(HistoryState {
                entries: VecDeque::new(),
                next_id: 1,
            }),
        }
    }

    /// Store `entry` under a freshly assigned id and return that id.
    pub fn add(&self, mut entry: HistoryEntry) -> u64 {
        let mut state = self.state.lock();
        entry.id = state.next_id;
        state.next_id += 1;
        log::info!("Adding GraphQL request to history: {}", entry.display_name());

        let id = entry.id;
        state.entries.push_front(entry);
        while state.entries.len() > self.capacity {
            if let Some(evicted) = state.entries.pop_back() {
                log::debug!("Evicted history entry {}.", evicted.id);
            }
        }
        id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        log::info!("Clearing GraphQL history.");
        self.state.lock().entries.clear();
    }

    pub fn delete(&self, id: u64) -> bool {
        let mut state = self.state.lock();
        let len_before = state.entries.len();
        state.entries.retain(|entry| entry.id != id);
        state.entries.len() != len_before
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.state.lock().entries.iter().cloned().collect()
    }

    pub fn entries_for_endpoint(&self, endpoint: &str) -> Vec<HistoryEntry> {
        self.state.lock()
            .entries
            .iter()
            .filter(|entry| entry.endpoint == endpoint)
            .cloned()
            .collect()
    }

    pub fn entry(&self, id: u64) -> Option<HistoryEntry> {
        self.state.lock()
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Entries matching `needle` (see [`HistoryEntry::matches_search`]). A
    /// blank needle matches everything.
    pub fn search(&self, needle: &str) -> Vec<HistoryEntry> {
        if needle.trim().is_empty() {
            return self.entries();
        }
        self.state.lock()
            .entries
            .iter()
            .filter(|entry| entry.matches_search(needle))
            .cloned()
            .collect()
    }
}
impl std::default::Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
