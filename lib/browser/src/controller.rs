use crate::render::Presenter;
use crate::session::{Command, Event, Session};
use doclist_similarity::Ranker;
use doclist_storage::{DataSource, DataStore};
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use tracing::debug;

/// Runs session commands against a data source and a presenter
pub struct Controller<S, P> {
    session: Session,
    source: S,
    presenter: P,
}

impl<S: DataSource, P: Presenter> Controller<S, P> {
    pub fn new(store: Arc<DataStore>, source: S, presenter: P) -> Self {
        Self::with_session(Session::new(store), source, presenter)
    }

    pub fn with_ranker(store: Arc<DataStore>, ranker: Ranker, source: S, presenter: P) -> Self {
        Self::with_session(Session::with_ranker(store, ranker), source, presenter)
    }

    fn with_session(session: Session, source: S, presenter: P) -> Self {
        Self { session, source, presenter }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Initial load
    pub async fn start(&mut self) -> io::Result<()> {
        self.run(VecDeque::from([Command::Refetch])).await
    }

    pub async fn dispatch(&mut self, event: Event) -> io::Result<()> {
        let commands = self.session.handle(event);
        self.run(commands.into()).await
    }

    async fn run(&mut self, mut queue: VecDeque<Command>) -> io::Result<()> {
        while let Some(command) = queue.pop_front() {
            match command {
                Command::Refetch => {
                    let ticket = self.session.store().begin_fetch();
                    debug!("Starting fetch #{}", ticket.sequence());
                    let result = self.source.fetch_all().await;
                    queue.extend(self.session.handle(Event::FetchComplete(ticket, result)));
                }
                Command::RenderList(records) => self.presenter.render_list(&records)?,
                Command::RenderDetail { record, similar } => {
                    self.presenter.render_detail(&record, &similar)?
                }
                Command::RenderError(message) => self.presenter.render_error(&message)?,
                Command::PopulateFilters(options) => self.presenter.populate_filters(&options)?,
                Command::HideDetail => self.presenter.hide_detail()?,
            }
        }
        Ok(())
    }
}
