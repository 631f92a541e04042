use doclist_core::Record;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Issued by [`DataStore::begin_fetch`]; newer tickets win over older ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

struct StoreState {
    records: Arc<Vec<Record>>,
    /// Highest ticket handed out so far
    issued: u64,
    /// Ticket of the fetch whose records are installed (0 = none or direct replace)
    installed: u64,
}

/// Sole owner of the fetched record set.
///
/// Writers swap the whole set at once; readers get an `Arc` snapshot that
/// stays valid and unchanged for as long as they hold it.
pub struct DataStore {
    state: RwLock<StoreState>,
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: Arc::new(records),
                issued: 0,
                installed: 0,
            }),
        }
    }

    /// Replace the record set unconditionally
    pub fn replace(&self, records: Vec<Record>) {
        let mut state = self.state.write();
        state.records = Arc::new(records);
        // a direct replace supersedes every fetch started before it
        state.installed = state.issued;
    }

    /// Current record set
    #[inline]
    pub fn snapshot(&self) -> Arc<Vec<Record>> {
        self.state.read().records.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a fetch. Only the most recently started fetch may install its result.
    pub fn begin_fetch(&self) -> FetchTicket {
        let mut state = self.state.write();
        state.issued += 1;
        FetchTicket(state.issued)
    }

    /// Install the result of a fetch unless a newer one has started or finished.
    ///
    /// Returns whether the records were installed.
    pub fn complete_fetch(&self, ticket: FetchTicket, records: Vec<Record>) -> bool {
        let mut state = self.state.write();
        if ticket.0 < state.issued || ticket.0 <= state.installed {
            debug!(
                "Dropping stale fetch #{} (latest #{}, installed #{})",
                ticket.0, state.issued, state.installed
            );
            return false;
        }
        state.records = Arc::new(records);
        state.installed = ticket.0;
        true
    }

    /// Whether `ticket` is still the latest fetch
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        let state = self.state.read();
        ticket.0 == state.issued && ticket.0 > state.installed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: u64) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new(i, format!("Doctor {}", i), "A", "North", 4.0))
            .collect()
    }

    #[test]
    fn test_replace_and_snapshot() {
        let store = DataStore::new();
        assert!(store.is_empty());

        store.replace(records(3));
        assert_eq!(store.len(), 3);
        assert_eq!(store.snapshot().len(), 3);
    }

    #[test]
    fn test_snapshot_isolated_from_replace() {
        let store = DataStore::with_records(records(2));
        let before = store.snapshot();

        store.replace(records(5));
        assert_eq!(before.len(), 2);
        assert_eq!(store.snapshot().len(), 5);
    }

    #[test]
    fn test_latest_started_fetch_wins() {
        let store = DataStore::new();
        let first = store.begin_fetch();
        let second = store.begin_fetch();
        assert!(!store.is_current(first));
        assert!(store.is_current(second));

        assert!(store.complete_fetch(second, records(2)));
        // the older fetch resolves late and must not overwrite
        assert!(!store.complete_fetch(first, records(7)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_older_fetch_dropped_before_newer_completes() {
        let store = DataStore::new();
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        assert!(!store.complete_fetch(first, records(7)));
        assert!(store.is_empty());
        assert!(store.complete_fetch(second, records(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ticket_installs_once() {
        let store = DataStore::new();
        let ticket = store.begin_fetch();
        assert!(store.complete_fetch(ticket, records(1)));
        assert!(!store.complete_fetch(ticket, records(4)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_supersedes_pending_fetch() {
        let store = DataStore::new();
        let ticket = store.begin_fetch();
        store.replace(records(3));
        assert!(!store.complete_fetch(ticket, records(1)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_concurrent_readers_see_whole_sets() {
        let store = Arc::new(DataStore::with_records(records(4)));
        let writer = {
            let store = store.clone();
            std::thread::spawn(move || {
                for round in 0..100u64 {
                    store.replace(records(if round % 2 == 0 { 8 } else { 4 }));
                }
            })
        };

        for _ in 0..100 {
            let len = store.snapshot().len();
            assert!(len == 4 || len == 8);
        }
        writer.join().unwrap();
    }
}
