//! Browsing session: turns user and fetch events into render commands.
//!
//! The session never touches the output surface itself. Each event is
//! handled synchronously against the current store snapshot and yields the
//! commands the controller must carry out, in order.

use doclist_core::{sorted_by_surname, Filter, FilterCriteria, FilterOptions, Record, RecordId};
use doclist_similarity::Ranker;
use doclist_storage::{DataStore, FetchError, FetchTicket};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Shown in place of the list when the record set cannot be loaded
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load doctors. Please try again later.";

#[derive(Debug)]
pub enum Event {
    /// A fetch started with `ticket` has resolved
    FetchComplete(FetchTicket, Result<Vec<Record>, FetchError>),
    FilterSubmit(FilterCriteria),
    ItemSelected(RecordId),
    ClearFilters,
    CloseDetail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RenderList(Vec<Record>),
    RenderDetail { record: Record, similar: Vec<Record> },
    RenderError(String),
    PopulateFilters(FilterOptions),
    Refetch,
    HideDetail,
}

pub struct Session {
    store: Arc<DataStore>,
    ranker: Ranker,
    criteria: FilterCriteria,
    load_failed: bool,
}

impl Session {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self::with_ranker(store, Ranker::new())
    }

    pub fn with_ranker(store: Arc<DataStore>, ranker: Ranker) -> Self {
        Self {
            store,
            ranker,
            criteria: FilterCriteria::default(),
            load_failed: false,
        }
    }

    pub fn store(&self) -> &Arc<DataStore> {
        &self.store
    }

    /// Criteria of the last submitted search
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Whether the latest fetch that resolved failed
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::FetchComplete(ticket, result) => self.on_fetch_complete(ticket, result),
            Event::FilterSubmit(criteria) => self.on_filter_submit(criteria),
            Event::ItemSelected(id) => self.on_item_selected(&id),
            Event::ClearFilters => self.on_clear_filters(),
            Event::CloseDetail => vec![Command::HideDetail],
        }
    }

    fn on_fetch_complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Record>, FetchError>,
    ) -> Vec<Command> {
        match result {
            Ok(records) => {
                let count = records.len();
                if !self.store.complete_fetch(ticket, records) {
                    return Vec::new();
                }
                self.load_failed = false;
                info!("Loaded {} doctors", count);
                let snapshot = self.store.snapshot();
                vec![
                    Command::RenderList(sorted_by_surname(snapshot.iter())),
                    Command::PopulateFilters(FilterOptions::from_records(&snapshot)),
                ]
            }
            Err(e) => {
                if !self.store.is_current(ticket) {
                    debug!("Ignoring failure of superseded fetch #{}: {}", ticket.sequence(), e);
                    return Vec::new();
                }
                error!("Error loading doctors: {}", e);
                self.load_failed = true;
                vec![Command::RenderError(FETCH_FAILED_MESSAGE.to_string())]
            }
        }
    }

    fn on_filter_submit(&mut self, criteria: FilterCriteria) -> Vec<Command> {
        self.criteria = criteria;
        let snapshot = self.store.snapshot();
        let matched = self.criteria.apply(&snapshot);
        debug!("Filter matched {} of {} doctors", matched.len(), snapshot.len());
        vec![Command::RenderList(sorted_by_surname(matched))]
    }

    fn on_item_selected(&self, id: &RecordId) -> Vec<Command> {
        let snapshot = self.store.snapshot();
        let record = match doclist_core::find(&snapshot, id) {
            Ok(record) => record,
            Err(e) => {
                debug!("Ignoring selection: {}", e);
                return Vec::new();
            }
        };
        let similar = self.ranker.rank(&snapshot, record);
        vec![Command::RenderDetail {
            record: record.clone(),
            similar,
        }]
    }

    fn on_clear_filters(&mut self) -> Vec<Command> {
        self.criteria = FilterCriteria::default();
        let snapshot = self.store.snapshot();
        vec![
            Command::RenderList(sorted_by_surname(snapshot.iter())),
            Command::Refetch,
        ]
    }
}
