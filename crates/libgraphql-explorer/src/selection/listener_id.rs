use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Handle returned when registering a change listener; pass it back to
/// unregister.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
pub(crate) struct ListenerIdGenerator(AtomicU64);
impl ListenerIdGenerator {
    pub(crate) fn next(&self) -> ListenerId {
        ListenerId(self.0.fetch_add(1, Ordering::Relaxed))
    }
}
