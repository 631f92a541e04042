//! # DocList Browser
//!
//! The interactive side of DocList: a [`Session`] turns user and fetch
//! events into [`Command`]s, a [`Presenter`] draws them, and a
//! [`Controller`] ties both to a [`DataSource`](doclist_storage::DataSource).
//!
//! ```text
//! Event ──> Session ──> Command ──> Presenter
//!             │            │
//!         DataStore     Refetch ──> DataSource
//! ```

pub mod session;
pub mod render;
pub mod controller;

pub use session::{Command, Event, Session, FETCH_FAILED_MESSAGE};
pub use render::{Presenter, TextPresenter, PLACEHOLDER};
pub use controller::Controller;
