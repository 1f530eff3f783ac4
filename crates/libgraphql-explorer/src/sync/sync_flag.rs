use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Reentrancy marker held while one direction of a synchronization is being
/// applied, so that the echo of that change can be recognized and ignored.
///
/// Acquisition nests: the flag stays held until every outstanding
/// [`SyncFlagGuard`] has been dropped. Guards release on drop, including
/// during unwinding.
#[derive(Debug, Default)]
pub struct SyncFlag(AtomicUsize);
impl SyncFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> SyncFlagGuard<'_> {
        self.0.fetch_add(1, Ordering::SeqCst);
        SyncFlagGuard { flag: self }
    }

    pub fn is_held(&self) -> bool {
        self.0.load(Ordering::SeqCst) > 0
    }
}

#[must_use = "the flag is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SyncFlagGuard<'a> {
    flag: &'a SyncFlag,
}
impl Drop for SyncFlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.0.fetch_sub(1, Ordering::SeqCst);
    }
}
